use crate::BinaryHeap;

impl<T: Ord, const IS_MIN: bool> BinaryHeap<T, IS_MIN> {
    /// Give up the backing vector as-is, in heap layout.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Drain into a vector in extraction order: ascending for a min heap,
    /// descending for a max heap.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.len());
        while let Some(item) = self.pop() {
            vec.push(item);
        }
        vec
    }
}

impl<T: Ord, const IS_MIN: bool> IntoIterator for BinaryHeap<T, IS_MIN> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Consume the heap, yielding the elements in unspecified order.
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T: Ord, const IS_MIN: bool> IntoIterator for &'a BinaryHeap<T, IS_MIN> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
