use crate::BinaryHeap;

impl<T: Ord + Clone, const IS_MIN: bool> Clone for BinaryHeap<T, IS_MIN> {
    fn clone(&self) -> Self {
        BinaryHeap {
            data: self.data.clone(),
        }
    }
}
