use super::BinaryHeap;

impl<T: Ord, const IS_MIN: bool> BinaryHeap<T, IS_MIN> {
    /// The element the next `pop` would return, by reference. `None` when
    /// the heap is empty, so stored values are never confused with absence.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }
}

impl<T: Ord, const IS_MIN: bool> BinaryHeap<T, IS_MIN> {
    /// The backing array in heap layout. Only slot 0 is ordered with respect
    /// to the rest.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate over the elements in unspecified order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}
