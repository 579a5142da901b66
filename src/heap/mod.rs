/// Array-backed binary heap. `IS_MIN` selects the direction: `true` pops the
/// smallest element first, `false` the largest.
///
/// The backing vector is a complete binary tree packed by index: the parent
/// of slot `i` sits at `(i - 1) / 2`, its children at `2 * i + 1` and
/// `2 * i + 2`. Every parent compares no worse than its children for the
/// chosen direction; only slot 0 is observable through the ordered API.
#[derive(Debug)]
pub struct BinaryHeap<T: Ord, const IS_MIN: bool> {
    pub(crate) data: Vec<T>,
}

/// Binary heap that pops the smallest element first.
pub type MinHeap<T> = BinaryHeap<T, true>;

/// Binary heap that pops the largest element first.
pub type MaxHeap<T> = BinaryHeap<T, false>;

mod construct;
mod extend;
mod pop;
mod property;
mod push;
mod view;

pub(crate) mod order;
