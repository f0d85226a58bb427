use crate::SubstringSearcher;

/// Naive O(n*m) substring search
pub struct NaiveSearcher;

impl SubstringSearcher for NaiveSearcher {
    fn find(&self, haystack: &[u8], needle: &[u8]) -> Option<usize> {
        if needle.is_empty() {
            return Some(0);
        }
        if needle.len() > haystack.len() {
            return None;
        }

        let end = haystack.len() - needle.len() + 1;
        for i in 0..end {
            if &haystack[i..i + needle.len()] == needle {
                return Some(i);
            }
        }
        None
    }
}

/// Standard library window scan
pub struct StdSearcher;

impl SubstringSearcher for StdSearcher {
    fn find(&self, haystack: &[u8], needle: &[u8]) -> Option<usize> {
        if needle.is_empty() {
            return Some(0);
        }
        // Use windows to avoid UTF-8 conversion
        haystack.windows(needle.len()).position(|w| w == needle)
    }
}

/// memchr crate's memmem searcher (the target to beat)
pub struct MemchrSearcher;

impl SubstringSearcher for MemchrSearcher {
    #[inline]
    fn find(&self, haystack: &[u8], needle: &[u8]) -> Option<usize> {
        memchr::memmem::find(haystack, needle)
    }
}

/// Reference for `search_all`: every overlapping occurrence, in order.
pub fn naive_find_all(haystack: &[u8], needle: &[u8]) -> Vec<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return Vec::new();
    }

    let mut results = Vec::new();
    for i in 0..=haystack.len() - needle.len() {
        if &haystack[i..i + needle.len()] == needle {
            results.push(i);
        }
    }
    results
}
