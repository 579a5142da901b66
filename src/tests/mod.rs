pub use crate::{BinaryHeap, MaxHeap, MinHeap};

mod iter;
