//! Bad-character rule (delta1)
//!
//! For every byte value, the distance between the last position of the
//! pattern and the rightmost occurrence of that byte in the pattern.

use std::ops::Index;

/// Number of distinct symbols the tables are built over.
pub const ALPHABET_LEN: usize = 256;

/// delta1: one shift distance per byte value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadCharacterTable([usize; ALPHABET_LEN]);

impl Index<u8> for BadCharacterTable {
    type Output = usize;

    #[inline]
    fn index(&self, byte: u8) -> &usize {
        &self.0[byte as usize]
    }
}

/// Build delta1 for `pattern`.
///
/// Bytes absent from the pattern map to `pattern.len()`. A byte present in
/// the pattern maps to `len - 1 - i` where `i` is its rightmost index, so the
/// last pattern byte maps to 0. Scanning left to right lets later occurrences
/// overwrite earlier ones.
pub fn build_bad_character_table(pattern: &[u8]) -> BadCharacterTable {
    let m = pattern.len();
    let mut table = [m; ALPHABET_LEN];

    for (i, &byte) in pattern.iter().enumerate() {
        table[byte as usize] = m - 1 - i;
    }

    BadCharacterTable(table)
}
