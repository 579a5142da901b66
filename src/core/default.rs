use crate::BinaryHeap;

impl<T: Ord, const IS_MIN: bool> Default for BinaryHeap<T, IS_MIN> {
    fn default() -> Self {
        Self::new()
    }
}
