use std::cmp::Ordering;

use super::BinaryHeap;

pub(crate) const fn parent_index(index: usize) -> usize {
    (index - 1) / 2
}

pub(crate) const fn left_index(index: usize) -> usize {
    2 * index + 1
}

pub(crate) const fn right_index(index: usize) -> usize {
    2 * index + 2
}

impl<T: Ord, const IS_MIN: bool> BinaryHeap<T, IS_MIN> {
    /// Move the element at `index` toward the root until its parent compares
    /// no worse than it. Equal elements never swap.
    pub(crate) fn sift_up(&mut self, mut index: usize) {
        while index != 0 {
            let pindex = parent_index(index);
            match Ord::cmp(&self.data[pindex], &self.data[index]) {
                Ordering::Less => {
                    if IS_MIN {
                        break;
                    }
                }
                Ordering::Greater => {
                    if !IS_MIN {
                        break;
                    }
                }
                Ordering::Equal => break,
            }
            self.data.swap(pindex, index);
            index = pindex;
        }
    }

    /// Move the element at `index` toward the leaves until both children
    /// compare no better than it. The swap target at each level is the left
    /// child unless the right child strictly improves on it, so ties keep
    /// the left child.
    pub(crate) fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let lindex = left_index(index);
            if lindex >= len {
                break;
            }
            let rindex = right_index(index);
            let mut swap_index = lindex;
            if rindex < len {
                match Ord::cmp(&self.data[lindex], &self.data[rindex]) {
                    Ordering::Less => {
                        if !IS_MIN {
                            swap_index = rindex;
                        }
                    }
                    Ordering::Greater => {
                        if IS_MIN {
                            swap_index = rindex;
                        }
                    }
                    Ordering::Equal => (),
                }
            }
            match Ord::cmp(&self.data[index], &self.data[swap_index]) {
                Ordering::Less => {
                    if IS_MIN {
                        break;
                    }
                }
                Ordering::Greater => {
                    if !IS_MIN {
                        break;
                    }
                }
                Ordering::Equal => break,
            }
            self.data.swap(index, swap_index);
            index = swap_index;
        }
    }

    /// Bottom-up construction over an arbitrary array: sift every non-leaf
    /// slot down, last parent first. O(n) rather than n pushes.
    pub(crate) fn heapize(&mut self) {
        let len = self.data.len();
        if len < 2 {
            return;
        }
        let mut index = parent_index(len - 1);
        loop {
            self.sift_down(index);
            if index == 0 {
                break;
            }
            index -= 1;
        }
    }

    /// Whether every parent satisfies the direction's ordering against both
    /// of its children. Test support.
    pub(crate) fn is_heap(&self) -> bool {
        for index in 1..self.data.len() {
            let cmp = Ord::cmp(&self.data[parent_index(index)], &self.data[index]);
            let violated = if IS_MIN {
                cmp == Ordering::Greater
            } else {
                cmp == Ordering::Less
            };
            if violated {
                return false;
            }
        }
        true
    }
}
