//! Fixed and variable sliding windows over slices and strings.
//!
//! A fixed window keeps exactly `k` elements and updates its aggregate in O(1)
//! per slide. A variable window always grows on the right and shrinks from the
//! left while it is invalid; each element enters and leaves at most once.
//!
//! When maximising window length the answer is read after the shrink loop,
//! once the window is valid again. When minimising ([`min_window`]) every
//! window seen inside the shrink loop is valid and is a candidate.

use std::collections::HashMap;

/// Largest sum of any `k` consecutive elements, or `None` if `values.len() < k`.
///
/// # Panics
///
/// Panics if `k` is zero.
pub fn max_sum_subarray(values: &[i32], k: usize) -> Option<i64> {
    assert!(k > 0, "window size must be positive");
    if values.len() < k {
        return None;
    }

    let mut window: i64 = values[..k].iter().map(|&v| v as i64).sum();
    let mut best = window;
    for right in k..values.len() {
        window += values[right] as i64;
        window -= values[right - k] as i64;
        best = best.max(window);
    }
    Some(best)
}

/// Average of every window of `k` consecutive elements, left to right.
///
/// Empty when `values.len() < k`.
///
/// # Panics
///
/// Panics if `k` is zero.
pub fn averages_of_subarrays(values: &[i32], k: usize) -> Vec<f64> {
    assert!(k > 0, "window size must be positive");
    if values.len() < k {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(values.len() - k + 1);
    let mut window: i64 = values[..k].iter().map(|&v| v as i64).sum();
    out.push(window as f64 / k as f64);
    for right in k..values.len() {
        window += values[right] as i64;
        window -= values[right - k] as i64;
        out.push(window as f64 / k as f64);
    }
    out
}

/// Length, in chars, of the longest substring without a repeated character.
pub fn length_of_longest_substring(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();
    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut left = 0;
    let mut best = 0;

    for (right, &ch) in chars.iter().enumerate() {
        *counts.entry(ch).or_insert(0) += 1;
        while counts[&ch] > 1 {
            release(&mut counts, chars[left]);
            left += 1;
        }
        best = best.max(right + 1 - left);
    }
    best
}

/// Length, in chars, of the longest substring with at most `k` distinct characters.
pub fn longest_substring_k_distinct(s: &str, k: usize) -> usize {
    let chars: Vec<char> = s.chars().collect();
    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut left = 0;
    let mut best = 0;

    for (right, &ch) in chars.iter().enumerate() {
        *counts.entry(ch).or_insert(0) += 1;
        while counts.len() > k {
            release(&mut counts, chars[left]);
            left += 1;
        }
        best = best.max(right + 1 - left);
    }
    best
}

/// Drops one occurrence of `ch` from the window counts, removing empty keys.
fn release(counts: &mut HashMap<char, usize>, ch: char) {
    if let Some(count) = counts.get_mut(&ch) {
        *count -= 1;
        if *count == 0 {
            counts.remove(&ch);
        }
    }
}

/// Length of the longest run of consecutive values whose sum is at most `limit`.
pub fn longest_subarray_sum_at_most(values: &[u32], limit: u64) -> usize {
    let mut left = 0;
    let mut sum = 0u64;
    let mut best = 0;

    for (right, &value) in values.iter().enumerate() {
        sum += value as u64;
        while sum > limit {
            sum -= values[left] as u64;
            left += 1;
        }
        best = best.max(right + 1 - left);
    }
    best
}

/// Shortest substring of `s` containing every character of `t` with multiplicity.
///
/// Returns `""` when no such window exists or `t` is empty. Ties keep the
/// leftmost window.
pub fn min_window<'a>(s: &'a str, t: &str) -> &'a str {
    if t.is_empty() {
        return "";
    }

    let chars: Vec<(usize, char)> = s.char_indices().collect();
    let mut need: HashMap<char, i64> = HashMap::new();
    for ch in t.chars() {
        *need.entry(ch).or_insert(0) += 1;
    }
    let mut missing = t.chars().count();

    // (length in chars, first char index, last char index)
    let mut best: Option<(usize, usize, usize)> = None;
    let mut left = 0;

    for right in 0..chars.len() {
        let ch = chars[right].1;
        let slot = need.entry(ch).or_insert(0);
        if *slot > 0 {
            missing -= 1;
        }
        *slot -= 1;

        while missing == 0 {
            let len = right + 1 - left;
            if best.is_none_or(|(best_len, _, _)| len < best_len) {
                best = Some((len, left, right));
            }

            let slot = need.entry(chars[left].1).or_insert(0);
            *slot += 1;
            if *slot > 0 {
                missing += 1;
            }
            left += 1;
        }
    }

    match best {
        None => "",
        Some((_, first, last)) => {
            let start = chars[first].0;
            let end = chars.get(last + 1).map_or(s.len(), |&(idx, _)| idx);
            &s[start..end]
        }
    }
}
