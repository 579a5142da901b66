//! Standard trait impls for [`crate::BinaryHeap`].

mod clone;
mod default;
mod from_iter;
mod into;
