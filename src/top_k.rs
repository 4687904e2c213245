//! Top-K selection with a heap capped at K entries.
//!
//! [`TopK`] keeps the K largest items seen so far in a min-heap. Every push
//! inserts, then evicts the heap minimum once the heap holds more than K items,
//! so the minimum of a full heap is the K-th largest item overall. Cost is
//! O(n log K) time and O(K) space.
//!
//! "Largest" is whatever `Ord` says: wrap items in [`Reverse`] to keep the K
//! smallest instead, or in a `(key, item)` tuple to rank by a derived key.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

/// The `k` largest items pushed so far.
#[derive(Clone, Debug)]
pub struct TopK<T: Ord> {
    k: usize,
    heap: BinaryHeap<Reverse<T>>,
}

impl<T: Ord> TopK<T> {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            heap: BinaryHeap::with_capacity(k + 1),
        }
    }

    /// Offers `item`; if more than `k` items are held the smallest is dropped.
    pub fn push(&mut self, item: T) {
        self.heap.push(Reverse(item));
        if self.heap.len() > self.k {
            self.heap.pop();
        }
    }

    /// The smallest retained item: the K-th largest once `k` items were pushed.
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|Reverse(item)| item)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether `k` items are retained.
    pub fn is_full(&self) -> bool {
        self.heap.len() == self.k
    }

    /// Retained items, largest first.
    pub fn into_sorted_vec(self) -> Vec<T> {
        // Ascending in Reverse<T> is descending in T.
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(item)| item)
            .collect()
    }
}

impl<T: Ord> Extend<T> for TopK<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

/// The `k`-th largest value (1-based), or `None` if `k` is zero or exceeds the length.
pub fn find_kth_largest(values: &[i32], k: usize) -> Option<i32> {
    if k == 0 || k > values.len() {
        return None;
    }
    let mut top = TopK::new(k);
    top.extend(values.iter().copied());
    top.peek().copied()
}

/// The `k`-th smallest value (1-based), or `None` if `k` is zero or exceeds the length.
pub fn find_kth_smallest(values: &[i32], k: usize) -> Option<i32> {
    if k == 0 || k > values.len() {
        return None;
    }
    let mut bottom = TopK::new(k);
    bottom.extend(values.iter().copied().map(Reverse));
    bottom.peek().map(|Reverse(v)| *v)
}

/// The `k` points nearest the origin, nearest first.
///
/// Ties in distance are broken by the point coordinates.
pub fn k_closest_points(points: &[(i32, i32)], k: usize) -> Vec<(i32, i32)> {
    let mut nearest = TopK::new(k);
    for &(x, y) in points {
        let dist = (x as i64).pow(2) + (y as i64).pow(2);
        nearest.push(Reverse((dist, (x, y))));
    }
    nearest
        .into_sorted_vec()
        .into_iter()
        .map(|Reverse((_, point))| point)
        .collect()
}

/// The `k` most frequent values, most frequent first.
///
/// Equal counts are ordered by the larger value first.
pub fn top_k_frequent<T: Ord + Hash + Clone>(values: &[T], k: usize) -> Vec<T> {
    let mut counts: HashMap<&T, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut top = TopK::new(k);
    top.extend(counts.into_iter().map(|(value, count)| (count, value.clone())));
    top.into_sorted_vec()
        .into_iter()
        .map(|(_, value)| value)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn kth_largest() {
        assert_eq!(find_kth_largest(&[3, 2, 1, 5, 6, 4], 2), Some(5));
        assert_eq!(find_kth_largest(&[3, 2, 3, 1, 2, 4, 5, 5, 6], 4), Some(4));
        assert_eq!(find_kth_largest(&[1], 1), Some(1));
        assert_eq!(find_kth_largest(&[1, 2], 3), None);
        assert_eq!(find_kth_largest(&[1, 2], 0), None);
    }

    #[test]
    fn kth_smallest() {
        assert_eq!(find_kth_smallest(&[7, 10, 4, 3, 20, 15], 3), Some(7));
        assert_eq!(find_kth_smallest(&[7, 10, 4, 3, 20, 15], 1), Some(3));
    }

    #[test]
    fn closest_points() {
        assert_eq!(k_closest_points(&[(1, 3), (-2, 2)], 1), vec![(-2, 2)]);
        assert_eq!(k_closest_points(&[(3, 3), (5, -1), (-2, 4)], 2), vec![(3, 3), (-2, 4)]);
        assert!(k_closest_points(&[(1, 1)], 0).is_empty());
    }

    #[test]
    fn most_frequent() {
        assert_eq!(top_k_frequent(&[1, 1, 1, 2, 2, 3], 2), vec![1, 2]);
        assert_eq!(top_k_frequent(&[1], 1), vec![1]);
        assert_eq!(top_k_frequent(&["b", "a", "b"], 5), vec!["b", "a"]);
    }

    #[test]
    fn bounded_heap_tracks_largest() {
        let mut top = TopK::new(3);
        assert!(top.peek().is_none());
        top.extend([5, 1, 9, 3, 7]);
        assert!(top.is_full());
        assert_eq!(top.len(), 3);
        assert_eq!(top.peek(), Some(&5));
        assert_eq!(top.into_sorted_vec(), vec![9, 7, 5]);
    }

    proptest! {
        #[test]
        fn kth_largest_matches_sorting(
            values in prop::collection::vec(any::<i32>(), 1..100),
            rank in any::<prop::sample::Index>(),
        ) {
            let k = rank.index(values.len()) + 1;
            let mut sorted = values.clone();
            sorted.sort_unstable_by(|a, b| b.cmp(a));
            prop_assert_eq!(find_kth_largest(&values, k), Some(sorted[k - 1]));

            sorted.reverse();
            prop_assert_eq!(find_kth_smallest(&values, k), Some(sorted[k - 1]));
        }

        #[test]
        fn retains_exactly_the_top(values in prop::collection::vec(-100i32..100, 0..80), k in 0usize..10) {
            let mut top = TopK::new(k);
            top.extend(values.iter().copied());

            let mut expected = values.clone();
            expected.sort_unstable_by(|a, b| b.cmp(a));
            expected.truncate(k);
            prop_assert_eq!(top.into_sorted_vec(), expected);
        }
    }
}
