//! Array-backed binary heaps with a compile-time ordering direction.
//!
//! [`MinHeap`] pops the smallest element first, [`MaxHeap`] the largest. Both
//! are the same [`BinaryHeap`] structure; the direction is a const parameter,
//! so the two variants share a single sift implementation instead of two
//! mirrored copies.
//!
//! ```
//! use twinheap::MinHeap;
//!
//! let mut heap = MinHeap::new();
//! heap.push(5);
//! heap.push(3);
//! heap.push(8);
//! heap.push(1);
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), Some(3));
//! ```

pub mod heap;

mod core;

pub use heap::{BinaryHeap, MaxHeap, MinHeap};

#[cfg(test)]
mod tests;
