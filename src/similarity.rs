//! Sequence similarity ratio.
//!
//! Longest-matching-block similarity (Ratcliff/Obershelp) over codepoints:
//! find the longest common block, recurse on the pieces left of it and right
//! of it, and sum the matched lengths. The ratio is `2·M / (|a| + |b|)`,
//! 1.0 meaning identical.
//!
//! Worst case is quadratic in string length; callers compare sentence-sized
//! strings, where this is fine.
use std::collections::HashMap;

/// Similarity ratio between `a` and `b` in `[0, 1]`.
///
/// Two empty strings are identical (ratio 1.0).
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * matching_len(&a, &b) as f64 / total as f64
}

/// Total length of the recursively-found longest common blocks.
fn matching_len(a: &[char], b: &[char]) -> usize {
    let mut total = 0;
    // explicit worklist of (a, b) subrange pairs still to match
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((a_lo, a_hi, b_lo, b_hi)) = pending.pop() {
        if a_lo >= a_hi || b_lo >= b_hi {
            continue;
        }

        let (i, j, size) = longest_match(&a[a_lo..a_hi], &b[b_lo..b_hi]);
        if size == 0 {
            continue;
        }

        total += size;
        pending.push((a_lo, a_lo + i, b_lo, b_lo + j));
        pending.push((a_lo + i + size, a_hi, b_lo + j + size, b_hi));
    }

    total
}

/// Longest common contiguous block of `a` and `b`.
///
/// Returns `(start_in_a, start_in_b, length)`; ties go to the earliest
/// position in `a`, then in `b`.
fn longest_match(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut b_positions: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &c) in b.iter().enumerate() {
        b_positions.entry(c).or_default().push(j);
    }

    let (mut best_i, mut best_j, mut best_size) = (0, 0, 0);
    // lengths[j] = length of the common block ending at a[i], b[j]
    let mut lengths: HashMap<usize, usize> = HashMap::new();

    for (i, c) in a.iter().enumerate() {
        let mut next_lengths = HashMap::new();
        if let Some(positions) = b_positions.get(c) {
            for &j in positions {
                let length = if j == 0 {
                    1
                } else {
                    lengths.get(&(j - 1)).copied().unwrap_or(0) + 1
                };
                next_lengths.insert(j, length);

                if length > best_size {
                    best_i = i + 1 - length;
                    best_j = j + 1 - length;
                    best_size = length;
                }
            }
        }
        lengths = next_lengths;
    }

    (best_i, best_j, best_size)
}

#[cfg(test)]
mod tests {
    use super::{longest_match, ratio};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_identical() {
        assert_eq!(ratio("മലയാളം ഭാഷ", "മലയാളം ഭാഷ"), 1.0);
        assert_eq!(ratio("", ""), 1.0);
    }

    #[test]
    fn test_disjoint() {
        assert_eq!(ratio("abc", "xyz"), 0.0);
        assert_eq!(ratio("", "abc"), 0.0);
    }

    #[test]
    fn test_known_ratios() {
        // 2 * 3 / (4 + 4)
        assert!((ratio("abcd", "bcde") - 0.75).abs() < 1e-9);
        // "itt" + "n" matched: 2 * 4 / 13
        assert!((ratio("kitten", "sitting") - 8.0 / 13.0).abs() < 1e-9);
    }

    #[test]
    fn test_longest_match_earliest_wins() {
        let (i, j, size) = longest_match(&chars("abcabc"), &chars("abc"));
        assert_eq!((i, j, size), (0, 0, 3));

        // only the leftmost occurrence is counted once per piece
        assert!((ratio("abcabc", "abc") - 2.0 * 3.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_symmetric_enough_for_thresholding() {
        let a = "ഒരു നല്ല പുസ്തകം വായിച്ചു";
        let b = "ഒരു നല്ല പുസ്തകം വായന";

        assert!(ratio(a, b) > 0.8);
        assert!(ratio(b, a) > 0.8);
    }
}
