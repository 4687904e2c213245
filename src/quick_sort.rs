//! Randomised quicksort and quickselect over a shared Lomuto partition.
//!
//! A uniformly random pivot makes the expected cost O(n log n) for sorting and
//! O(n) for selection regardless of input order, including already-sorted
//! input that defeats a fixed last-element pivot.
//!
//! The `_with` variants take the random source explicitly so callers (and
//! tests) can seed it; the plain variants use the thread-local generator.

use rand::Rng;

/// Partitions `values` around a randomly chosen pivot and returns its final index.
///
/// Afterwards everything before the returned index is `<=` the pivot and
/// everything after it is `>` the pivot.
///
/// # Panics
///
/// Panics if `values` is empty.
pub fn partition_with<T: Ord, R: Rng + ?Sized>(values: &mut [T], rng: &mut R) -> usize {
    let last = values.len() - 1;
    let pivot = rng.gen_range(0..=last);
    values.swap(pivot, last);

    let mut boundary = 0;
    for j in 0..last {
        if values[j] <= values[last] {
            values.swap(boundary, j);
            boundary += 1;
        }
    }
    values.swap(boundary, last);
    boundary
}

/// Sorts `values` in place (not stable).
pub fn quicksort<T: Ord>(values: &mut [T]) {
    quicksort_with(values, &mut rand::thread_rng());
}

/// Sorts `values` in place drawing pivots from `rng`.
///
/// Recurses into the shorter side and loops over the longer one, so stack
/// depth stays O(log n) even when every partition is lopsided.
pub fn quicksort_with<T: Ord, R: Rng + ?Sized>(mut values: &mut [T], rng: &mut R) {
    while values.len() > 1 {
        let pivot = partition_with(values, rng);
        let (below, rest) = std::mem::take(&mut values).split_at_mut(pivot);
        let above = &mut rest[1..];
        if below.len() < above.len() {
            quicksort_with(below, rng);
            values = above;
        } else {
            quicksort_with(above, rng);
            values = below;
        }
    }
}

/// The `k`-th smallest element (0-based), or `None` if `k >= values.len()`.
///
/// Reorders `values`; on return `values[k]` holds the answer, smaller-or-equal
/// elements precede it and larger ones follow.
pub fn quickselect<T: Ord>(values: &mut [T], k: usize) -> Option<&T> {
    quickselect_with(values, k, &mut rand::thread_rng())
}

/// [`quickselect`] drawing pivots from `rng`.
pub fn quickselect_with<'a, T: Ord, R: Rng + ?Sized>(
    values: &'a mut [T],
    k: usize,
    rng: &mut R,
) -> Option<&'a T> {
    if k >= values.len() {
        return None;
    }

    // Only the side holding rank k is ever revisited.
    let (mut lo, mut hi) = (0, values.len());
    loop {
        let pivot = lo + partition_with(&mut values[lo..hi], rng);
        match pivot.cmp(&k) {
            std::cmp::Ordering::Equal => return Some(&values[k]),
            std::cmp::Ordering::Less => lo = pivot + 1,
            std::cmp::Ordering::Greater => hi = pivot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn sorts_in_place() {
        let mut values = [3, 6, 1, 8, 1, 9, 2];
        quicksort(&mut values);
        assert_eq!(values, [1, 1, 2, 3, 6, 8, 9]);

        let mut empty: [i32; 0] = [];
        quicksort(&mut empty);

        let mut sorted: Vec<i32> = (0..500).collect();
        quicksort(&mut sorted);
        assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn sorts_long_runs_of_equal_values() {
        let mut same = vec![7i32; 20_000];
        quicksort(&mut same);
        assert!(same.iter().all(|v| *v == 7));

        let mut rng = StdRng::seed_from_u64(11);
        let mut few: Vec<i32> = (0..20_000).map(|_| rng.gen_range(0..3)).collect();
        let mut expected = few.clone();
        expected.sort_unstable();
        quicksort_with(&mut few, &mut rng);
        assert_eq!(few, expected);
    }

    #[test]
    fn partition_splits_around_pivot() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut values = [5, 3, 9, 3, 7, 1, 8, 5];
            let p = partition_with(&mut values, &mut rng);
            assert!(values[..p].iter().all(|v| *v <= values[p]));
            assert!(values[p + 1..].iter().all(|v| *v > values[p]));
        }
    }

    #[test]
    fn selects_kth_smallest() {
        let mut values = [3, 2, 1, 5, 6, 4];
        assert_eq!(quickselect(&mut values, 0), Some(&1));
        assert_eq!(quickselect(&mut values, 4), Some(&5));
        assert_eq!(quickselect(&mut values, 6), None);
        assert_eq!(quickselect::<i32>(&mut [], 0), None);
    }

    proptest! {
        #[test]
        fn matches_reference_sort(
            values in prop_oneof![
                prop::collection::vec(any::<i32>(), 0..200),
                prop::collection::vec(-3i32..3, 0..200),
            ],
            seed in any::<u64>(),
        ) {
            let mut expected = values.clone();
            expected.sort_unstable();

            // Several pivot sequences over the same input.
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..3 {
                let mut actual = values.clone();
                quicksort_with(&mut actual, &mut rng);
                prop_assert_eq!(&actual, &expected);
            }
        }

        #[test]
        fn select_matches_sorted_rank(
            values in prop::collection::vec(-50i32..50, 1..120),
            rank in any::<prop::sample::Index>(),
            seed in any::<u64>(),
        ) {
            let k = rank.index(values.len());
            let mut sorted = values.clone();
            sorted.sort_unstable();

            let mut scratch = values.clone();
            let mut rng = StdRng::seed_from_u64(seed);
            prop_assert_eq!(quickselect_with(&mut scratch, k, &mut rng), Some(&sorted[k]));
            prop_assert!(scratch[..k].iter().all(|v| *v <= sorted[k]));
            prop_assert!(scratch[k + 1..].iter().all(|v| *v >= sorted[k]));
        }
    }
}
