//! Top-down merge sort and inversion counting.
//!
//! The merge step takes from the left run on ties, which makes the sort
//! stable. The inversion-counting variant piggybacks on the same merge: each
//! time the right run wins, every element still waiting in the left run is
//! larger than it and forms one inversion.

use std::cmp::Ordering;

/// Merges two runs already sorted by `compare`.
fn merge_by<T, F>(left: &[T], right: &[T], compare: &mut F) -> (Vec<T>, u64)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut inversions = 0u64;
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if compare(&left[i], &right[j]) != Ordering::Greater {
            out.push(left[i].clone());
            i += 1;
        } else {
            out.push(right[j].clone());
            inversions += (left.len() - i) as u64;
            j += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    (out, inversions)
}

fn sort_by_counting<T, F>(values: &[T], compare: &mut F) -> (Vec<T>, u64)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if values.len() <= 1 {
        return (values.to_vec(), 0);
    }

    let mid = values.len() / 2;
    let (left, left_inv) = sort_by_counting(&values[..mid], compare);
    let (right, right_inv) = sort_by_counting(&values[mid..], compare);
    let (merged, split_inv) = merge_by(&left, &right, compare);
    (merged, left_inv + right_inv + split_inv)
}

/// Merges two sorted slices into one sorted vector. Ties take from `left` first.
pub fn merge<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    merge_by(left, right, &mut T::cmp).0
}

/// Stable sort of `values` into a new vector using `compare`.
pub fn merge_sort_by<T, F>(values: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_by_counting(values, &mut compare).0
}

/// Stable sort of `values` into a new vector.
pub fn merge_sort<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    merge_sort_by(values, T::cmp)
}

/// Sorted copy of `values` and the number of pairs `i < j` with `values[i] > values[j]`.
pub fn merge_sort_count_inversions<T: Ord + Clone>(values: &[T]) -> (Vec<T>, u64) {
    sort_by_counting(values, &mut T::cmp)
}
