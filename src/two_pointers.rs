//! Two-pointer scans: opposite ends, same direction, and anchor plus pair.

/// Indices `(i, j)`, `i < j`, of two elements of a sorted slice that sum to `target`.
///
/// Moves the low pointer up when the pair is too small and the high pointer
/// down when it is too large.
pub fn pair_with_sum(values: &[i32], target: i64) -> Option<(usize, usize)> {
    if values.len() < 2 {
        return None;
    }

    let (mut left, mut right) = (0, values.len() - 1);
    while left < right {
        let sum = values[left] as i64 + values[right] as i64;
        match sum.cmp(&target) {
            std::cmp::Ordering::Equal => return Some((left, right)),
            std::cmp::Ordering::Less => left += 1,
            std::cmp::Ordering::Greater => right -= 1,
        }
    }
    None
}

/// Two Sum II: like [`pair_with_sum`] but with 1-based positions.
pub fn two_sum_sorted(numbers: &[i32], target: i64) -> Option<(usize, usize)> {
    pair_with_sum(numbers, target).map(|(i, j)| (i + 1, j + 1))
}

/// Whether `s` reads the same forwards and backwards, char by char.
pub fn is_palindrome(s: &str) -> bool {
    let mut chars = s.chars();
    while let (Some(front), Some(back)) = (chars.next(), chars.next_back()) {
        if front != back {
            return false;
        }
    }
    true
}

/// Palindrome check that skips non-alphanumeric chars and ignores ASCII case.
pub fn is_palindrome_alphanumeric(s: &str) -> bool {
    let mut chars = s.chars().filter(|c| c.is_alphanumeric());
    while let (Some(front), Some(back)) = (chars.next(), chars.next_back()) {
        if !front.eq_ignore_ascii_case(&back) {
            return false;
        }
    }
    true
}

/// Whether `s` becomes a palindrome after deleting at most one char.
pub fn valid_palindrome_skip_one(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() < 2 {
        return true;
    }

    let (mut left, mut right) = (0, chars.len() - 1);
    while left < right {
        if chars[left] != chars[right] {
            return is_palindrome_range(&chars, left + 1, right)
                || is_palindrome_range(&chars, left, right - 1);
        }
        left += 1;
        right -= 1;
    }
    true
}

fn is_palindrome_range(chars: &[char], mut lo: usize, mut hi: usize) -> bool {
    while lo < hi {
        if chars[lo] != chars[hi] {
            return false;
        }
        lo += 1;
        hi -= 1;
    }
    true
}

/// Compacts the elements satisfying `keep` to the front, preserving their order.
///
/// Returns how many were kept; the tail past that count is unspecified.
fn compact_by<T: Copy>(values: &mut [T], mut keep: impl FnMut(&T) -> bool) -> usize {
    let mut write = 0;
    for read in 0..values.len() {
        if keep(&values[read]) {
            values[write] = values[read];
            write += 1;
        }
    }
    write
}

/// Moves every zero to the end, keeping the non-zero elements in order.
pub fn move_zeroes(values: &mut [i32]) {
    let kept = compact_by(values, |&v| v != 0);
    values[kept..].fill(0);
}

/// Removes every `val` in place and returns the new length.
///
/// `values[..len]` holds the remaining elements in their original order.
pub fn remove_element(values: &mut [i32], val: i32) -> usize {
    compact_by(values, |&v| v != val)
}

/// Removes duplicates from a sorted slice in place and returns the new length.
pub fn remove_duplicates_sorted(values: &mut [i32]) -> usize {
    if values.is_empty() {
        return 0;
    }

    // values[..write] is the deduplicated prefix; compare against its last entry.
    let mut write = 1;
    for read in 1..values.len() {
        if values[read] != values[write - 1] {
            values[write] = values[read];
            write += 1;
        }
    }
    write
}

/// All distinct triplets summing to `target`, each in ascending order.
///
/// Sorts `values` in place, fixes each element as an anchor and scans the rest
/// with two pointers. Duplicate anchors and duplicate pairs are skipped, so no
/// triplet is reported twice. Triplets come out in ascending lexicographic order.
pub fn three_sum(values: &mut [i32], target: i64) -> Vec<[i32; 3]> {
    values.sort_unstable();
    let n = values.len();
    let mut out = Vec::new();

    for i in 0..n.saturating_sub(2) {
        if i > 0 && values[i] == values[i - 1] {
            continue;
        }

        let (mut left, mut right) = (i + 1, n - 1);
        while left < right {
            let sum = values[i] as i64 + values[left] as i64 + values[right] as i64;
            match sum.cmp(&target) {
                std::cmp::Ordering::Equal => {
                    out.push([values[i], values[left], values[right]]);
                    left += 1;
                    right -= 1;
                    while left < right && values[left] == values[left - 1] {
                        left += 1;
                    }
                }
                std::cmp::Ordering::Less => left += 1,
                std::cmp::Ordering::Greater => right -= 1,
            }
        }
    }
    out
}
