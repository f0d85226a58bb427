//! Boyer-Moore Substring Search
//!
//! First-match byte search using the bad-character and good-suffix rules.
//! The tables are rebuilt on every call; nothing is cached between searches.
//!
//! The `baselines` module holds the reference searchers used to check and
//! benchmark the Boyer-Moore implementation. `input` and `report` are the
//! collaborators used by the `bm` binary.

pub mod bad_character;
pub mod baselines;
pub mod error;
pub mod good_suffix;
pub mod input;
pub mod report;
pub mod search;

pub use bad_character::{build_bad_character_table, BadCharacterTable, ALPHABET_LEN};
pub use error::{Error, Result};
pub use good_suffix::{build_good_suffix_table, GoodSuffixTable};
pub use search::{search, search_all, BoyerMooreSearcher, ShiftTables};

/// Trait for substring search implementations
pub trait SubstringSearcher {
    /// Find the first occurrence of needle in haystack.
    /// Returns the byte offset of the first match, or None if not found.
    fn find(&self, haystack: &[u8], needle: &[u8]) -> Option<usize>;
}
