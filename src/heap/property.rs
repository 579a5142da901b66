use super::BinaryHeap;

impl<T: Ord, const IS_MIN: bool> BinaryHeap<T, IS_MIN> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }
}
