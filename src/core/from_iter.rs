use crate::BinaryHeap;

impl<T: Ord, const IS_MIN: bool> FromIterator<T> for BinaryHeap<T, IS_MIN> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}
