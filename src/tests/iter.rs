use super::*;

#[test]
fn test_iter1() {
    let mut heap = MinHeap::new();
    heap.push(1);
    heap.push(2);
    heap.push(3);
    let mut iter = heap.iter();
    assert!(iter.next().is_some());
    assert!(iter.next().is_some());
    assert!(iter.next().is_some());
    assert_eq!(iter.next(), None);
}

#[test]
fn test_iter2() {
    let mut heap = MaxHeap::new();
    for i in 0..100 {
        heap.push(i);
    }
    for i in &heap {
        if !(0..100).contains(i) {
            panic!("iterator returned invalid value: {}", i);
        }
    }
    assert_eq!(heap.iter().count(), 100);
}

#[test]
fn test_collect() {
    let heap: MinHeap<i32> = (0..50).rev().collect();
    assert!(heap.is_heap());
    assert_eq!(heap.peek(), Some(&0));
    assert_eq!(heap.into_iter().count(), 50);
}

#[test]
fn test_extend() {
    let mut heap = MinHeap::new();
    heap.extend([5, 1, 4]);
    heap.extend(vec![3, 2]);
    assert_eq!(heap.len(), 5);
    assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_into_vec() {
    let heap: MaxHeap<i32> = vec![1, 2, 3].into();
    let mut raw = heap.into_vec();
    raw.sort();
    assert_eq!(raw, vec![1, 2, 3]);
}

#[test]
fn test_clone() {
    let mut heap = MinHeap::from_vec(vec![3, 1, 2]);
    let snapshot = heap.clone();
    heap.pop();
    assert_eq!(heap.len(), 2);
    assert_eq!(snapshot.len(), 3);
    assert_eq!(snapshot.peek(), Some(&1));
}
