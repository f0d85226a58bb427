//! Good-suffix rule (delta2)
//!
//! Given a mismatch at `pattern[j]`, the already matched suffix
//! `pattern[j + 1..]` tells us where the next plausible alignment is:
//!
//! * if that suffix occurs elsewhere in the pattern preceded by a different
//!   byte, the closest such occurrence is realigned under the text;
//! * otherwise the longest pattern prefix that is also a suffix of the
//!   matched region is realigned;
//! * otherwise the pattern moves entirely past the mismatch.
//!
//! Every value is a distance to add to the text cursor that sits on the
//! mismatched byte.

use std::ops::Index;

/// delta2: one shift distance per pattern index.
///
/// The entry for the last index is only consulted when the very first
/// comparison fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoodSuffixTable(Vec<usize>);

impl GoodSuffixTable {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Smallest non-zero shift that realigns the pattern with itself.
    ///
    /// Pass 2 never writes index 0, so `delta2[0]` is always
    /// `period + len - 1`.
    pub fn period(&self) -> usize {
        match self.0.first() {
            Some(&shift) => shift + 1 - self.0.len(),
            None => 0,
        }
    }
}

impl Index<usize> for GoodSuffixTable {
    type Output = usize;

    #[inline]
    fn index(&self, j: usize) -> &usize {
        &self.0[j]
    }
}

/// True if `word[pos..]` is also a prefix of `word`.
///
/// `pos == word.len()` is the empty suffix, which is trivially a prefix.
pub fn is_prefix(word: &[u8], pos: usize) -> bool {
    let suffix_len = word.len() - pos;
    word[..suffix_len] == word[pos..]
}

/// Number of bytes, counted backward from `word[pos]` and `word[len - 1]`
/// together, that match before the first mismatch, capped at `pos`.
///
/// Below the cap this is the length of the longest common suffix of
/// `word[..=pos]` and `word`. The cap leaves `word[pos - result]` in bounds,
/// so a common suffix that covers all of `word[..=pos]` reports `pos`, not
/// `pos + 1`; that case is the prefix case of the good-suffix table.
///
/// `suffix_length(b"dddbcabc", 4) == 2`
pub fn suffix_length(word: &[u8], pos: usize) -> usize {
    let last = word.len() - 1;
    let mut i = 0;
    while i < pos && word[pos - i] == word[last - i] {
        i += 1;
    }
    i
}

/// Build delta2 for `pattern`.
///
/// The search engine never asks for the table of an empty pattern; if it
/// happens anyway the table is empty.
pub fn build_good_suffix_table(pattern: &[u8]) -> GoodSuffixTable {
    let m = pattern.len();
    if m == 0 {
        return GoodSuffixTable(Vec::new());
    }

    let last = m - 1;
    let mut table = vec![0usize; m];

    // Prefix case
    let mut last_prefix_index = 1;
    for p in (0..m).rev() {
        if is_prefix(pattern, p + 1) {
            last_prefix_index = p + 1;
        }
        table[p] = last_prefix_index + (last - p);
    }

    // Suffix reuse case. Later writes are closer occurrences and win.
    for p in 0..last {
        let slen = suffix_length(pattern, p);
        if pattern[p - slen] != pattern[last - slen] {
            table[last - slen] = last - p + slen;
        }
    }

    GoodSuffixTable(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prefix() {
        let word = b"ANPANMAN";
        assert!(is_prefix(word, 6)); // "AN"
        assert!(is_prefix(word, 8)); // empty suffix
        assert!(is_prefix(word, 0)); // whole word
        assert!(!is_prefix(word, 7)); // "N"
        assert!(!is_prefix(word, 3)); // "ANMAN"
    }

    #[test]
    fn test_suffix_length() {
        assert_eq!(suffix_length(b"dddbcabc", 4), 2);
        assert_eq!(suffix_length(b"ANPANMAN", 4), 2);
        assert_eq!(suffix_length(b"ANPANMAN", 2), 0);
        // Capped at pos even when word[0] would also match
        assert_eq!(suffix_length(b"aaaa", 2), 2);
        assert_eq!(suffix_length(b"aaaa", 0), 0);
    }

    #[test]
    fn test_anpanman() {
        let table = build_good_suffix_table(b"ANPANMAN");
        assert_eq!(table.as_slice(), &[13, 12, 11, 10, 9, 5, 9, 1]);
    }

    #[test]
    fn test_suffix_reused_with_same_preceding_byte() {
        // "YX" recurs at index 2, but preceded by 'B' like the matched one,
        // so a mismatch on the 'B' must skip the whole pattern.
        let table = build_good_suffix_table(b"ABYXCDBYX");
        assert_eq!(table.as_slice(), &[17, 16, 15, 14, 13, 8, 11, 10, 1]);
    }

    #[test]
    fn test_single_byte() {
        let table = build_good_suffix_table(b"x");
        assert_eq!(table.as_slice(), &[1]);
        assert_eq!(table.period(), 1);
    }

    #[test]
    fn test_repeated_byte() {
        let table = build_good_suffix_table(b"aaaa");
        assert_eq!(table.as_slice(), &[4, 4, 4, 4]);
        assert_eq!(table.period(), 1);
    }

    #[test]
    fn test_period() {
        assert_eq!(build_good_suffix_table(b"abcabc").period(), 3);
        assert_eq!(build_good_suffix_table(b"abab").period(), 2);
        assert_eq!(build_good_suffix_table(b"abcd").period(), 4);
        assert_eq!(build_good_suffix_table(b"ANPANMAN").period(), 6);
    }

    #[test]
    fn test_empty_pattern() {
        let table = build_good_suffix_table(b"");
        assert!(table.is_empty());
        assert_eq!(table.period(), 0);
    }

    #[test]
    fn test_every_entry_is_positive() {
        for pattern in [&b"GATTACA"[..], b"abcabcab", b"aab", b"baa", b"\x00\x00\x01"] {
            let table = build_good_suffix_table(pattern);
            assert_eq!(table.len(), pattern.len());
            assert!(table.as_slice().iter().all(|&s| s >= 1), "{pattern:?}");
        }
    }
}
