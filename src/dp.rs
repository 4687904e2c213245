//! Bottom-up dynamic programming over sequences and strings.
//!
//! Every solver fills its table in non-decreasing order of subproblem size, so
//! each entry only reads entries that are already final.
//!
//! | Function | Table | Space |
//! |----------|-------|-------|
//! | [`climb_stairs`] | rolling pair | O(1) |
//! | [`rob`] | rolling pair | O(1) |
//! | [`coin_change`] | 1-D by amount | O(amount) |
//! | [`longest_common_subsequence`] | 2-D with empty-prefix row/column | O(m·n) |
//! | [`length_of_lis_quadratic`] | 1-D by end index | O(n) |
//! | [`length_of_lis`] | tails by length, binary search | O(n) |

use crate::binary_search::lower_bound;

/// Marks an amount that no combination of coins has reached yet.
///
/// Larger than any achievable count, so `min` never prefers it.
const UNREACHABLE: u32 = u32::MAX;

/// Number of distinct ways to climb `n` steps taking one or two at a time.
///
/// Fibonacci-shaped: `ways(i) = ways(i - 1) + ways(i - 2)` with one way to
/// stand at the bottom.
///
/// # Panics
///
/// Panics if `n > 92`, where the count no longer fits in a `u64`.
pub fn climb_stairs(n: u32) -> u64 {
    if n <= 1 {
        return 1;
    }

    let mut two_back = 1u64;
    let mut one_back = 1u64;
    for _ in 2..=n {
        let current = one_back
            .checked_add(two_back)
            .expect("stair count overflows u64 past 92 steps");
        two_back = one_back;
        one_back = current;
    }
    one_back
}

/// Fewest coins summing to `amount`, or `None` if the amount cannot be formed.
///
/// Coins may be reused. Zero-valued coins are ignored.
pub fn coin_change(coins: &[u32], amount: u32) -> Option<u32> {
    let amount = amount as usize;
    let mut fewest = vec![UNREACHABLE; amount + 1];
    fewest[0] = 0;

    for subtotal in 1..=amount {
        for &coin in coins {
            let coin = coin as usize;
            if coin == 0 || coin > subtotal {
                continue;
            }
            let prev = fewest[subtotal - coin];
            if prev != UNREACHABLE {
                fewest[subtotal] = fewest[subtotal].min(prev + 1);
            }
        }
    }

    match fewest[amount] {
        UNREACHABLE => None,
        count => Some(count),
    }
}

/// Largest total from houses where no two chosen houses are adjacent.
pub fn rob(houses: &[u32]) -> u64 {
    // skip_prev: best up to i-2, take_prev: best up to i-1
    let mut skip_prev = 0u64;
    let mut take_prev = 0u64;
    for &money in houses {
        let current = take_prev.max(skip_prev + money as u64);
        skip_prev = take_prev;
        take_prev = current;
    }
    take_prev
}

/// Length of the longest common subsequence of two strings, compared by `char`.
pub fn longest_common_subsequence(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());

    // Row 0 and column 0 stand for the empty prefix.
    let mut table = vec![vec![0usize; n + 1]; m + 1];
    for i in 1..=m {
        for j in 1..=n {
            table[i][j] = if a[i - 1] == b[j - 1] {
                table[i - 1][j - 1] + 1
            } else {
                table[i - 1][j].max(table[i][j - 1])
            };
        }
    }
    table[m][n]
}

/// Longest strictly increasing subsequence length by pairwise comparison.
///
/// O(n²) time. Kept alongside [`length_of_lis`] as the easy-to-audit reference.
pub fn length_of_lis_quadratic<T: Ord>(values: &[T]) -> usize {
    let mut ending_at = vec![1usize; values.len()];
    for i in 1..values.len() {
        for j in 0..i {
            if values[j] < values[i] {
                ending_at[i] = ending_at[i].max(ending_at[j] + 1);
            }
        }
    }
    ending_at.into_iter().max().unwrap_or(0)
}

/// Longest strictly increasing subsequence length in O(n log n).
///
/// `tails[len]` holds the smallest value that ends an increasing run of
/// `len + 1` elements. Each value replaces the first tail that is not smaller
/// than it, so an equal value never extends a run.
pub fn length_of_lis<T: Ord + Clone>(values: &[T]) -> usize {
    let mut tails: Vec<T> = Vec::with_capacity(values.len());
    for value in values {
        let pos = lower_bound(&tails, value);
        if pos == tails.len() {
            tails.push(value.clone());
        } else {
            tails[pos] = value.clone();
        }
    }
    tails.len()
}

/// One longest strictly increasing subsequence.
///
/// Same tails scheme as [`length_of_lis`], but the tails hold indices and each
/// element remembers the index it extended, so a witness can be walked back.
pub fn longest_increasing_subsequence<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    let mut tail_idx: Vec<usize> = Vec::with_capacity(values.len());
    let mut predecessor: Vec<Option<usize>> = vec![None; values.len()];

    for (i, value) in values.iter().enumerate() {
        let pos = tail_idx.partition_point(|&t| values[t] < *value);
        if pos > 0 {
            predecessor[i] = Some(tail_idx[pos - 1]);
        }
        if pos == tail_idx.len() {
            tail_idx.push(i);
        } else {
            tail_idx[pos] = i;
        }
    }

    let mut out = Vec::with_capacity(tail_idx.len());
    let mut cursor = tail_idx.last().copied();
    while let Some(i) = cursor {
        out.push(values[i].clone());
        cursor = predecessor[i];
    }
    out.reverse();
    out
}
