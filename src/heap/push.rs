use super::BinaryHeap;

impl<T: Ord, const IS_MIN: bool> BinaryHeap<T, IS_MIN> {
    /// Insert `value`. It starts out as the last leaf, which keeps the tree
    /// complete, and is then sifted toward the root until its parent is no
    /// worse than it.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }
}
