//! Binary search over sorted slices and monotonic predicates.
//!
//! Every routine here narrows a bound pair until it collapses, discarding the
//! half that cannot hold the answer. What differs is the bound convention and
//! what "the answer" is.
//!
//! # Strategies
//!
//! | Function | Bounds | Finds |
//! |----------|--------|-------|
//! | [`binary_search`] | inclusive `[left, right]` | any index equal to the target |
//! | [`lower_bound`] | branchless base + length | first index not less than the target |
//! | [`find_first`] / [`find_last`] | inclusive, keep searching on a hit | leftmost / rightmost match |
//! | [`first_true`] | half-open `[lo, hi)` | first element satisfying a monotonic predicate |
//! | [`min_feasible`] | closed answer range | smallest value a monotonic check accepts |
//! | [`search_rotated`] | inclusive, pick the sorted half | target in a rotated slice |
//!
//! # Monotonic predicates
//!
//! [`first_true`], [`first_bad_version`] and [`min_feasible`] assume the
//! predicate is `false ... false, true ... true` over the searched range. This
//! is a precondition; a non-monotonic predicate yields some boundary, not
//! necessarily the first one.

use std::cmp::Ordering;

/// Classic binary search over a sorted slice.
///
/// Returns the index of an element equal to `target`, or `None`. With
/// duplicates, which matching index is returned is unspecified; use
/// [`find_first`] or [`find_last`] for a specific one.
pub fn binary_search<T: Ord>(values: &[T], target: &T) -> Option<usize> {
    if values.is_empty() {
        return None;
    }

    let (mut left, mut right) = (0usize, values.len() - 1);
    while left <= right {
        let mid = left + (right - left) / 2;
        match values[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => left = mid + 1,
            Ordering::Greater => right = mid.checked_sub(1)?,
        }
    }
    None
}

/// First index whose element is not less than `needle` (`values.len()` if none).
///
/// Branchless loop: the compare result is folded into the base offset
/// arithmetically instead of steering a branch, and the remaining length
/// halves every step regardless of the outcome.
pub fn lower_bound<T: Ord>(values: &[T], needle: &T) -> usize {
    if values.is_empty() {
        return 0;
    }

    let mut base = 0usize;
    let mut len = values.len();
    // Invariant: the answer lies in [base, base + len].
    while len > 1 {
        let half = len / 2;
        let less = values[base + half - 1] < *needle;
        base += less as usize * half;
        len -= half;
    }
    base + (values[base] < *needle) as usize
}

/// Leftmost index equal to `target` in a sorted slice.
pub fn find_first<T: Ord>(values: &[T], target: &T) -> Option<usize> {
    if values.is_empty() {
        return None;
    }

    let (mut left, mut right) = (0usize, values.len() - 1);
    let mut found = None;
    while left <= right {
        let mid = left + (right - left) / 2;
        match values[mid].cmp(target) {
            Ordering::Equal => {
                found = Some(mid);
                match mid.checked_sub(1) {
                    Some(r) => right = r,
                    None => break,
                }
            }
            Ordering::Less => left = mid + 1,
            Ordering::Greater => match mid.checked_sub(1) {
                Some(r) => right = r,
                None => break,
            },
        }
    }
    found
}

/// Rightmost index equal to `target` in a sorted slice.
pub fn find_last<T: Ord>(values: &[T], target: &T) -> Option<usize> {
    if values.is_empty() {
        return None;
    }

    let (mut left, mut right) = (0usize, values.len() - 1);
    let mut found = None;
    while left <= right {
        let mid = left + (right - left) / 2;
        match values[mid].cmp(target) {
            Ordering::Equal => {
                found = Some(mid);
                left = mid + 1;
            }
            Ordering::Less => left = mid + 1,
            Ordering::Greater => match mid.checked_sub(1) {
                Some(r) => right = r,
                None => break,
            },
        }
    }
    found
}

/// First index whose element satisfies a monotonic `predicate`.
///
/// Returns `values.len()` when no element does.
pub fn first_true<T, P>(values: &[T], mut predicate: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let (mut lo, mut hi) = (0usize, values.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if predicate(&values[mid]) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

/// Smallest value in `lo..=hi` accepted by a monotonic `feasible` check.
///
/// `feasible(hi)` is assumed to hold; if nothing in the range is feasible the
/// result is `hi`. Each probe costs one call to `feasible`, so the total cost
/// is `log2(hi - lo)` checks.
pub fn min_feasible<F>(mut lo: u64, mut hi: u64, mut feasible: F) -> u64
where
    F: FnMut(u64) -> bool,
{
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if feasible(mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

/// First bad version in `1..=n`, given that version `n` is bad.
pub fn first_bad_version<F>(n: u64, is_bad: F) -> u64
where
    F: FnMut(u64) -> bool,
{
    min_feasible(1, n, is_bad)
}

/// Whether every pile can be eaten within `hours` at `speed` bananas per hour.
///
/// A pile smaller than `speed` still costs a whole hour.
///
/// # Panics
///
/// Panics if `speed` is zero.
pub fn can_finish_at_speed(piles: &[u64], hours: u64, speed: u64) -> bool {
    assert!(speed > 0, "eating speed must be positive");
    let mut needed = 0u64;
    for &pile in piles {
        needed += pile.div_ceil(speed);
        if needed > hours {
            return false;
        }
    }
    true
}

/// Minimum eating speed that finishes all `piles` within `hours`.
///
/// Searches speeds `1..=max(piles)`. When `hours < piles.len()` no speed is
/// fast enough and the largest pile is returned.
///
/// # Panics
///
/// Panics if `piles` is empty.
pub fn min_eating_speed(piles: &[u64], hours: u64) -> u64 {
    let fastest = piles.iter().copied().max().expect("at least one pile");
    min_feasible(1, fastest.max(1), |speed| {
        can_finish_at_speed(piles, hours, speed)
    })
}

/// Whether the packages, shipped in order, fit into `days` loads of `capacity`.
pub fn can_ship_with_capacity(weights: &[u64], days: u64, capacity: u64) -> bool {
    let mut day_count = 1u64;
    let mut load = 0u64;
    for &weight in weights {
        if weight > capacity {
            return false;
        }
        if load + weight > capacity {
            day_count += 1;
            load = 0;
        }
        load += weight;
    }
    day_count <= days
}

/// Least ship capacity that delivers every package, in order, within `days`.
///
/// The answer lies between the heaviest package and the total weight.
pub fn ship_within_days(weights: &[u64], days: u64) -> u64 {
    let heaviest = weights.iter().copied().max().unwrap_or(0);
    let total: u64 = weights.iter().sum();
    min_feasible(heaviest, total, |capacity| {
        can_ship_with_capacity(weights, days, capacity)
    })
}

/// Search a sorted slice that was rotated at an unknown pivot.
///
/// Elements must be distinct. At each step one of the halves around `mid` is
/// contiguously sorted; the target is looked for there if it fits its range,
/// otherwise in the other half.
pub fn search_rotated<T: Ord>(values: &[T], target: &T) -> Option<usize> {
    if values.is_empty() {
        return None;
    }

    let (mut left, mut right) = (0usize, values.len() - 1);
    while left <= right {
        let mid = left + (right - left) / 2;
        if values[mid] == *target {
            return Some(mid);
        }

        let go_left = if values[left] <= values[mid] {
            values[left] <= *target && *target < values[mid]
        } else {
            !(values[mid] < *target && *target <= values[right])
        };

        if go_left {
            right = mid.checked_sub(1)?;
        } else {
            left = mid + 1;
        }
    }
    None
}

/// Smallest element of a rotated sorted slice of distinct elements.
pub fn find_min_rotated<T: Ord>(values: &[T]) -> Option<&T> {
    if values.is_empty() {
        return None;
    }

    let (mut left, mut right) = (0usize, values.len() - 1);
    while left < right {
        let mid = left + (right - left) / 2;
        if values[mid] > values[right] {
            left = mid + 1;
        } else {
            right = mid;
        }
    }
    Some(&values[left])
}

/// Index of some element strictly greater than its neighbours.
///
/// Adjacent elements must differ. Out-of-range neighbours count as smaller.
pub fn find_peak_element<T: Ord>(values: &[T]) -> Option<usize> {
    if values.is_empty() {
        return None;
    }

    let (mut left, mut right) = (0usize, values.len() - 1);
    while left < right {
        let mid = left + (right - left) / 2;
        if values[mid] < values[mid + 1] {
            left = mid + 1;
        } else {
            right = mid;
        }
    }
    Some(left)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn classic_search() {
        let values = [-1, 0, 3, 5, 9, 12];
        assert_eq!(binary_search(&values, &9), Some(4));
        assert_eq!(binary_search(&values, &2), None);
        assert_eq!(binary_search(&values, &-5), None);
        assert_eq!(binary_search(&values, &13), None);
        assert_eq!(binary_search(&[5], &5), Some(0));
        assert_eq!(binary_search::<i32>(&[], &5), None);
    }

    #[test]
    fn boundaries_with_duplicates() {
        let values = [1, 2, 2, 2, 3, 5];
        assert_eq!(find_first(&values, &2), Some(1));
        assert_eq!(find_last(&values, &2), Some(3));
        assert_eq!(find_first(&values, &4), None);
        assert_eq!(find_last(&values, &0), None);
        assert_eq!(find_first(&values, &1), Some(0));
        assert_eq!(lower_bound(&values, &2), 1);
        assert_eq!(lower_bound(&values, &4), 5);
        assert_eq!(lower_bound(&values, &9), 6);
    }

    #[test]
    fn first_true_on_slice() {
        let values = [1, 3, 5, 7, 9];
        assert_eq!(first_true(&values, |&v| v >= 6), 3);
        assert_eq!(first_true(&values, |&v| v >= 0), 0);
        assert_eq!(first_true(&values, |&v| v > 100), values.len());
    }

    #[test]
    fn first_bad_version_finds_boundary() {
        assert_eq!(first_bad_version(5, |v| v >= 4), 4);
        assert_eq!(first_bad_version(1, |_| true), 1);
        assert_eq!(first_bad_version(1_000_000, |v| v >= 1), 1);
    }

    #[test]
    fn koko_eating_bananas() {
        assert_eq!(min_eating_speed(&[3, 6, 7, 11], 8), 4);
        assert_eq!(min_eating_speed(&[30, 11, 23, 4, 20], 5), 30);
        assert_eq!(min_eating_speed(&[30, 11, 23, 4, 20], 6), 23);
    }

    #[test]
    fn ship_capacity() {
        let weights: Vec<u64> = (1..=10).collect();
        assert_eq!(ship_within_days(&weights, 5), 15);
        assert_eq!(ship_within_days(&[3, 2, 2, 4, 1, 4], 3), 6);
        assert_eq!(ship_within_days(&[1, 2, 3, 1, 1], 4), 3);
    }

    #[test]
    fn rotated_search() {
        let values = [4, 5, 6, 7, 0, 1, 2];
        assert_eq!(search_rotated(&values, &0), Some(4));
        assert_eq!(search_rotated(&values, &3), None);
        assert_eq!(search_rotated(&values, &4), Some(0));
        assert_eq!(search_rotated(&[1], &0), None);
        assert_eq!(find_min_rotated(&values), Some(&0));
        assert_eq!(find_min_rotated(&[11, 13, 15, 17]), Some(&11));
        assert_eq!(find_min_rotated::<i32>(&[]), None);
    }

    #[test]
    fn peak_element() {
        assert_eq!(find_peak_element(&[1, 2, 3, 1]), Some(2));
        let idx = find_peak_element(&[1, 2, 1, 3, 5, 6, 4]).unwrap();
        assert!(idx == 1 || idx == 5);
        assert_eq!(find_peak_element(&[7]), Some(0));
    }

    proptest! {
        #[test]
        fn variants_match_std(mut values in prop::collection::vec(any::<i32>(), 0..256), needle in any::<i32>()) {
            values.sort();
            values.dedup();

            let expected = values.binary_search(&needle).ok();
            prop_assert_eq!(binary_search(&values, &needle), expected);
            prop_assert_eq!(find_first(&values, &needle), expected);
            prop_assert_eq!(find_last(&values, &needle), expected);
            prop_assert_eq!(lower_bound(&values, &needle), values.partition_point(|&v| v < needle));
        }

        #[test]
        fn boundaries_match_linear_scan(mut values in prop::collection::vec(0i32..16, 0..64), needle in 0i32..16) {
            values.sort();

            let first = values.iter().position(|&v| v == needle);
            let last = values.iter().rposition(|&v| v == needle);
            prop_assert_eq!(find_first(&values, &needle), first);
            prop_assert_eq!(find_last(&values, &needle), last);
            if let Some(idx) = binary_search(&values, &needle) {
                prop_assert_eq!(values[idx], needle);
            } else {
                prop_assert!(first.is_none());
            }
        }

        #[test]
        fn rotated_matches_linear_scan(len in 1usize..64, shift in 0usize..64, needle in -5i32..80) {
            let mut values: Vec<i32> = (0..len as i32).map(|v| v * 2).collect();
            values.rotate_left(shift % len);

            prop_assert_eq!(search_rotated(&values, &needle), values.iter().position(|&v| v == needle));
            prop_assert_eq!(find_min_rotated(&values), Some(&0));
        }

        #[test]
        fn koko_predicate_is_monotonic(
            piles in prop::collection::vec(1u64..1_000, 1..20),
            extra_hours in 0u64..40,
        ) {
            let hours = piles.len() as u64 + extra_hours;
            let fastest = *piles.iter().max().unwrap();

            let mut seen_true = false;
            for speed in 1..=fastest {
                let ok = can_finish_at_speed(&piles, hours, speed);
                prop_assert!(!seen_true || ok, "predicate flipped back at speed {}", speed);
                seen_true |= ok;
            }

            let speed = min_eating_speed(&piles, hours);
            prop_assert!(can_finish_at_speed(&piles, hours, speed));
            prop_assert!(speed == 1 || !can_finish_at_speed(&piles, hours, speed - 1));
        }
    }
}
