//! Boyer-Moore scan loop
//!
//! The pattern is laid under the text and compared right to left. On a
//! mismatch the alignment advances by the larger of the bad-character and
//! good-suffix shifts; both are lower bounds on the distance to the next
//! possible match, so the larger one is still safe.

use std::cmp;

use crate::bad_character::{build_bad_character_table, BadCharacterTable};
use crate::good_suffix::{build_good_suffix_table, GoodSuffixTable};
use crate::SubstringSearcher;

/// Both shift tables for one pattern. Built per call and never cached.
#[derive(Clone, Debug)]
pub struct ShiftTables {
    pub delta1: BadCharacterTable,
    pub delta2: GoodSuffixTable,
}

impl ShiftTables {
    /// Callers must not pass an empty pattern.
    pub fn new(pattern: &[u8]) -> Self {
        Self {
            delta1: build_bad_character_table(pattern),
            delta2: build_good_suffix_table(pattern),
        }
    }

    /// Cursor advance after `byte` in the text failed to match `pattern[j]`.
    #[inline]
    pub fn shift(&self, byte: u8, j: usize) -> usize {
        cmp::max(self.delta1[byte], self.delta2[j])
    }
}

/// Compare the alignment starting at `start` right to left.
///
/// Returns the pattern index of the first mismatch, or `None` when the whole
/// pattern matched.
#[inline]
fn mismatch_at(text: &[u8], pattern: &[u8], start: usize) -> Option<usize> {
    (0..pattern.len())
        .rev()
        .find(|&j| text[start + j] != pattern[j])
}

/// Scan for the first alignment whose last byte sits at or after `end`.
///
/// `end` is the text index under the last pattern byte.
fn scan_from(text: &[u8], pattern: &[u8], tables: &ShiftTables, mut end: usize) -> Option<usize> {
    let last = pattern.len() - 1;

    while end < text.len() {
        let start = end - last;
        match mismatch_at(text, pattern, start) {
            None => return Some(start),
            Some(j) => {
                let i = start + j;
                end = i + tables.shift(text[i], j);
            }
        }
    }

    None
}

/// Find the first occurrence of `pattern` in `text`.
///
/// The empty pattern matches at offset 0 of any text, including an empty one.
pub fn search(text: &[u8], pattern: &[u8]) -> Option<usize> {
    if pattern.is_empty() {
        return Some(0);
    }

    let tables = ShiftTables::new(pattern);
    let found = scan_from(text, pattern, &tables, pattern.len() - 1);

    log::trace!(
        "search: patlen={} textlen={} -> {:?}",
        pattern.len(),
        text.len(),
        found
    );
    found
}

/// Find every occurrence of `pattern` in `text`, overlapping ones included,
/// in ascending order.
///
/// Empty pattern or empty text yields no occurrences.
pub fn search_all(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    let mut results = Vec::new();
    if pattern.is_empty() || text.is_empty() {
        return results;
    }

    let tables = ShiftTables::new(pattern);
    let last = pattern.len() - 1;
    let period = tables.delta2.period();

    let mut end = last;
    while let Some(start) = scan_from(text, pattern, &tables, end) {
        results.push(start);
        // No occurrence can start strictly between start and start + period.
        end = start + period + last;
    }

    log::trace!(
        "search_all: patlen={} textlen={} -> {} matches",
        pattern.len(),
        text.len(),
        results.len()
    );
    results
}

/// Boyer-Moore with both the bad-character and good-suffix rules.
pub struct BoyerMooreSearcher;

impl SubstringSearcher for BoyerMooreSearcher {
    #[inline]
    fn find(&self, haystack: &[u8], needle: &[u8]) -> Option<usize> {
        search(haystack, needle)
    }
}
