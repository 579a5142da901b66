use super::BinaryHeap;

impl<T: Ord, const IS_MIN: bool> BinaryHeap<T, IS_MIN> {
    /// Remove and return the top element: the smallest for a min heap, the
    /// largest for a max heap. `None` when the heap is empty.
    ///
    /// The last leaf takes the root's place before sifting down, so the tree
    /// stays complete at every step.
    pub fn pop(&mut self) -> Option<T> {
        if self.data.len() <= 1 {
            return self.data.pop();
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let top = self.data.pop();
        self.sift_down(0);
        top
    }
}

#[test]
fn just_pop() {
    let mut heap: crate::MinHeap<i32> = crate::MinHeap::new();
    assert_eq!(heap.pop(), None);
    assert_eq!(heap.len(), 0);
}

#[test]
fn pop_one() {
    let mut heap = crate::MaxHeap::new();
    heap.push("hello".to_string());
    assert_eq!(heap.pop().as_deref(), Some("hello"));
    assert_eq!(heap.pop(), None);
}
