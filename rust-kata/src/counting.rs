//! Range palindrome counter
//! ========================
//!
//! Problem
//! -------
//! Given a text and parallel lists `lower`, `upper`, count for every `k` the
//! contiguous substrings whose length lies in `[lower[k], upper[k]]` and that
//! read the same forwards and backwards.
//!
//! Approach
//! --------
//! Two strategies with identical output:
//!
//! - [`CountStrategy::Enumerate`]: for each query, walk every start index and
//!   every end index inside the length window and test the slice directly.
//!   O(n^2) slices per query, each tested in O(len).
//! - [`CountStrategy::Centers`]: expand around each of the `2n - 1` centres
//!   once, tally palindromes by length, and keep a cumulative histogram.
//!   O(n^2) once, then O(1) per query.
//!
//! Correctness notes
//! -----------------
//! - Lengths are counted in `char`s.
//! - A lower bound of 0 admits the empty substring, which is a palindrome at
//!   each of the `n + 1` start positions.
//! - A window with `lower > upper`, or one lying entirely above the text
//!   length, counts 0.

use serde::{Deserialize, Serialize};

use crate::error::{KataError, Result};

/// Which algorithm answers the length-range queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountStrategy {
    /// Nested start/end enumeration with a direct palindrome test per slice.
    Enumerate,
    /// Expand-around-centre precompute with prefix counts by length.
    #[default]
    Centers,
}

/// Return true if `s` reads the same in both directions.
#[inline(always)]
pub fn is_pal<T: PartialEq>(s: &[T]) -> bool {
    let mut lo = 0;
    let mut hi = s.len();
    while lo + 1 < hi {
        hi -= 1;
        if s[lo] != s[hi] {
            return false;
        }
        lo += 1;
    }
    true
}

/// Cumulative count of palindromic substrings by length.
///
/// `cumulative[len]` is the number of palindromic substrings of length
/// `1..=len`; `cumulative[0]` is always 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PalindromeSpans {
    cumulative: Vec<u64>,
}

impl PalindromeSpans {
    /// Tally every palindromic substring of `text`.
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        Self::from_symbols(&chars)
    }

    /// Tally every palindromic substring of `symbols`.
    pub fn from_symbols<T: PartialEq>(symbols: &[T]) -> Self {
        let n = symbols.len();
        let mut by_len = vec![0u64; n + 1];

        // Centre c sits on symbol c/2 (even c) or between c/2 and c/2+1 (odd c).
        for centre in 0..n.saturating_mul(2).saturating_sub(1) {
            let mut lo = centre / 2;
            let mut hi = lo + centre % 2;
            while hi < n && symbols[lo] == symbols[hi] {
                by_len[hi - lo + 1] += 1;
                if lo == 0 {
                    break;
                }
                lo -= 1;
                hi += 1;
            }
        }

        let mut running = 0u64;
        let cumulative = by_len
            .into_iter()
            .map(|count| {
                running += count;
                running
            })
            .collect();
        Self { cumulative }
    }

    /// Length of the text the spans were built from.
    #[inline]
    pub fn text_len(&self) -> usize {
        self.cumulative.len() - 1
    }

    /// Total number of palindromic substrings.
    #[inline]
    pub fn total(&self) -> u64 {
        self.cumulative.last().copied().unwrap_or(0)
    }

    /// Palindromic substrings with length in `[lower, upper]`, counting the
    /// `n + 1` empty substrings when `lower == 0`.
    #[inline]
    pub fn count_in(&self, lower: usize, upper: usize) -> u64 {
        let empty = if lower == 0 { self.text_len() as u64 + 1 } else { 0 };
        let lower = lower.max(1);
        let upper = upper.min(self.text_len());
        if lower > upper {
            return empty;
        }
        empty + self.cumulative[upper] - self.cumulative[lower - 1]
    }
}

fn check_bounds(lower: &[usize], upper: &[usize]) -> Result<()> {
    if lower.len() != upper.len() {
        return Err(KataError::invalid_argument(format!(
            "lower has {} bounds but upper has {}",
            lower.len(),
            upper.len()
        )));
    }
    Ok(())
}

/// Count palindromic substrings per length window using the default strategy.
///
/// ```
/// let counts = kata::count_palindromes("abcd", &[1, 1, 3], &[3, 2, 4]).unwrap();
/// assert_eq!(counts, vec![4, 4, 0]);
/// ```
pub fn count_palindromes(text: &str, lower: &[usize], upper: &[usize]) -> Result<Vec<u64>> {
    count_palindromes_with(CountStrategy::default(), text, lower, upper)
}

/// Count palindromic substrings per length window using `strategy`.
pub fn count_palindromes_with(
    strategy: CountStrategy,
    text: &str,
    lower: &[usize],
    upper: &[usize],
) -> Result<Vec<u64>> {
    check_bounds(lower, upper)?;
    let chars: Vec<char> = text.chars().collect();
    let counts = match strategy {
        CountStrategy::Enumerate => lower
            .iter()
            .zip(upper)
            .map(|(&lo, &hi)| enumerate_window(&chars, lo, hi))
            .collect(),
        CountStrategy::Centers => {
            let spans = PalindromeSpans::from_symbols(&chars);
            lower
                .iter()
                .zip(upper)
                .map(|(&lo, &hi)| spans.count_in(lo, hi))
                .collect()
        }
    };
    Ok(counts)
}

fn enumerate_window(chars: &[char], lower: usize, upper: usize) -> u64 {
    let n = chars.len();
    if lower > n {
        return 0;
    }
    let mut count = 0;
    for start in 0..=n - lower {
        if lower == 0 {
            // chars[start..start] is the empty palindrome
            count += 1;
        }
        let lower = lower.max(1);
        let mut end = start + lower;
        while end <= n && end <= start.saturating_add(upper) {
            if is_pal(&chars[start..end]) {
                count += 1;
            }
            end += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn both(text: &str, lower: &[usize], upper: &[usize]) -> Vec<u64> {
        let slow = count_palindromes_with(CountStrategy::Enumerate, text, lower, upper).unwrap();
        let fast = count_palindromes_with(CountStrategy::Centers, text, lower, upper).unwrap();
        assert_eq!(slow, fast, "strategies disagree on {text:?}");
        fast
    }

    #[test]
    fn abcd_has_only_single_symbol_palindromes() {
        assert_eq!(both("abcd", &[1, 1, 3], &[3, 2, 4]), vec![4, 4, 0]);
    }

    #[test]
    fn aba_windows() {
        // a, b, a, aba
        assert_eq!(both("aba", &[1, 2, 3, 1], &[1, 2, 3, 3]), vec![3, 0, 1, 4]);
    }

    #[test]
    fn repeated_symbol() {
        // "aaaa": 4 of len 1, 3 of len 2, 2 of len 3, 1 of len 4
        assert_eq!(both("aaaa", &[1, 2, 3, 4, 1], &[1, 2, 3, 4, 4]), vec![4, 3, 2, 1, 10]);
    }

    #[test]
    fn zero_lower_bound_counts_empty_substrings() {
        // 3 empty substrings in "ab", plus "a" and "b"
        assert_eq!(both("ab", &[0], &[0]), vec![3]);
        assert_eq!(both("ab", &[0], &[2]), vec![5]);
        assert_eq!(both("", &[0], &[4]), vec![1]);
        assert_eq!(PalindromeSpans::new("aba").count_in(0, 1), 4 + 3);
    }

    #[test]
    fn inverted_and_oversized_windows_count_nothing() {
        assert_eq!(both("racecar", &[5, 8], &[3, 100]), vec![0, 0]);
    }

    #[test]
    fn upper_bound_beyond_text_is_clamped() {
        assert_eq!(both("racecar", &[7], &[usize::MAX]), vec![1]);
    }

    #[test]
    fn empty_text() {
        assert_eq!(both("", &[1], &[5]), vec![0]);
        assert_eq!(PalindromeSpans::new("").total(), 0);
    }

    #[test]
    fn mismatched_bounds_are_rejected() {
        let err = count_palindromes("abc", &[1, 2], &[3]).unwrap_err();
        assert!(matches!(err, KataError::InvalidArgument { .. }));
    }

    #[test]
    fn spans_total_matches_known_count() {
        // a, b, b, a, bb, abba
        let spans = PalindromeSpans::new("abba");
        assert_eq!(spans.total(), 6);
        assert_eq!(spans.text_len(), 4);
        assert_eq!(spans.count_in(2, 4), 2);
    }

    #[test]
    fn is_pal_on_slices() {
        assert!(is_pal::<char>(&[]));
        assert!(is_pal(&['x']));
        assert!(is_pal(&[1, 2, 1]));
        assert!(is_pal(b"abba"));
        assert!(!is_pal(b"abca"));
    }

    #[test]
    fn counts_multibyte_symbols_by_char() {
        assert_eq!(both("éaé", &[3], &[3]), vec![1]);
    }
}
