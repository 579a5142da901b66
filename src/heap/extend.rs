use super::BinaryHeap;

impl<T: Ord, const IS_MIN: bool> BinaryHeap<T, IS_MIN> {
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T: Ord, const IS_MIN: bool> Extend<T> for BinaryHeap<T, IS_MIN> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.data.reserve(lower);
        for value in iter {
            self.push(value);
        }
    }
}

#[test]
fn reserve_1() {
    let mut heap: crate::MinHeap<i32> = crate::MinHeap::new();
    assert_eq!(heap.capacity(), 0);
    heap.reserve(10);
    assert!(heap.capacity() >= 10);
}

#[test]
fn trim_1() {
    let mut heap: crate::MinHeap<i32> = crate::MinHeap::with_capacity(10);
    heap.push(1);
    heap.shrink_to_fit();
    assert!(heap.capacity() < 10);
    assert_eq!(heap.pop(), Some(1));
}

#[test]
fn clear_1() {
    let mut heap = crate::MaxHeap::new();
    heap.extend([3, 1, 2]);
    assert_eq!(heap.len(), 3);
    heap.clear();
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.pop(), None);
}
