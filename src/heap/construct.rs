use super::BinaryHeap;

impl<T: Ord, const IS_MIN: bool> BinaryHeap<T, IS_MIN> {
    pub fn new() -> Self {
        BinaryHeap { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        BinaryHeap {
            data: Vec::with_capacity(capacity),
        }
    }
}

impl<T: Ord, const IS_MIN: bool> BinaryHeap<T, IS_MIN> {
    /// Reorder an arbitrary vector into heap layout and take ownership of it.
    pub fn from_vec(data: Vec<T>) -> Self {
        let mut heap = BinaryHeap { data };
        heap.heapize();
        heap
    }
}

impl<T: Ord, const IS_MIN: bool> From<Vec<T>> for BinaryHeap<T, IS_MIN> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

#[test]
fn test_new() {
    let heap: crate::MinHeap<i32> = crate::MinHeap::new();
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.capacity(), 0);
}

#[test]
fn test_with_capacity() {
    let heap: crate::MaxHeap<String> = crate::MaxHeap::with_capacity(10);
    assert_eq!(heap.len(), 0);
    assert!(heap.capacity() >= 10);
}

#[test]
fn test_default() {
    let heap: crate::MaxHeap<u8> = Default::default();
    assert!(heap.is_empty());
}

#[test]
fn test_from_vec() {
    let heap: crate::MinHeap<i32> = crate::MinHeap::from_vec(vec![9, 4, 7, 1, 0, 3]);
    assert!(heap.is_heap());
    assert_eq!(heap.peek(), Some(&0));
}
