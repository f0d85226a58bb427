//! Rendering of search results for the `bm` binary.

use serde::Serialize;

use crate::error::Result;

/// What a first-match search produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Match { offset: usize },
    NoMatch,
    /// The empty pattern trivially matches at offset 0.
    EmptyPattern,
}

impl Outcome {
    pub fn new(pattern: &[u8], found: Option<usize>) -> Self {
        match found {
            _ if pattern.is_empty() => Outcome::EmptyPattern,
            Some(offset) => Outcome::Match { offset },
            None => Outcome::NoMatch,
        }
    }

    pub fn offset(&self) -> Option<usize> {
        match *self {
            Outcome::Match { offset } => Some(offset),
            Outcome::EmptyPattern => Some(0),
            Outcome::NoMatch => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    pub pattern_len: usize,
    pub text_len: usize,
    #[serde(flatten)]
    pub outcome: Outcome,
    /// Every occurrence, when all of them were asked for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all: Option<Vec<usize>>,
}

impl Report {
    pub fn new(pattern: &[u8], text: &[u8], found: Option<usize>) -> Self {
        Self {
            pattern_len: pattern.len(),
            text_len: text.len(),
            outcome: Outcome::new(pattern, found),
            all: None,
        }
    }

    /// Attach every occurrence. Ignored for the empty pattern, whose only
    /// reported match is offset 0.
    pub fn with_all(mut self, all: Vec<usize>) -> Self {
        if self.outcome != Outcome::EmptyPattern {
            self.all = Some(all);
        }
        self
    }
}

/// Human readable report. `text` is needed to show the matched tail.
pub fn render_text(report: &Report, text: &[u8]) -> String {
    if report.outcome == Outcome::EmptyPattern {
        return "Empty pattern matches at offset 0".to_string();
    }

    if let Some(all) = &report.all {
        if all.is_empty() {
            return "No match found".to_string();
        }
        let offsets: Vec<String> = all.iter().map(|o| o.to_string()).collect();
        return format!("{} matches at offsets: {}", all.len(), offsets.join(", "));
    }

    match report.outcome {
        Outcome::Match { offset } => format!(
            "First match found at offset {}: {}",
            offset,
            String::from_utf8_lossy(text.get(offset..).unwrap_or_default())
        ),
        Outcome::EmptyPattern => "Empty pattern matches at offset 0".to_string(),
        Outcome::NoMatch => "No match found".to_string(),
    }
}

pub fn render_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome() {
        assert_eq!(Outcome::new(b"ab", Some(3)), Outcome::Match { offset: 3 });
        assert_eq!(Outcome::new(b"ab", None), Outcome::NoMatch);
        assert_eq!(Outcome::new(b"", Some(0)), Outcome::EmptyPattern);
        assert_eq!(Outcome::EmptyPattern.offset(), Some(0));
        assert_eq!(Outcome::NoMatch.offset(), None);
    }

    #[test]
    fn test_render_text() {
        let text = b"hello world";
        let report = Report::new(b"wor", text, Some(6));
        assert_eq!(render_text(&report, text), "First match found at offset 6: world");

        let report = Report::new(b"xyz", text, None);
        assert_eq!(render_text(&report, text), "No match found");

        let report = Report::new(b"", text, Some(0));
        assert_eq!(render_text(&report, text), "Empty pattern matches at offset 0");
    }

    #[test]
    fn test_render_all() {
        let text = b"hello world hello";
        let report = Report::new(b"hello", text, Some(0)).with_all(vec![0, 12]);
        assert_eq!(render_text(&report, text), "2 matches at offsets: 0, 12");

        let report = Report::new(b"xyz", text, None).with_all(Vec::new());
        assert_eq!(render_text(&report, text), "No match found");

        let report = Report::new(b"", text, Some(0)).with_all(Vec::new());
        assert_eq!(report.all, None);
        assert_eq!(render_text(&report, text), "Empty pattern matches at offset 0");
    }

    #[test]
    fn test_render_offset_past_text() {
        let report = Report::new(b"ab", b"ab", Some(5));
        assert_eq!(render_text(&report, b"ab"), "First match found at offset 5: ");
    }

    #[test]
    fn test_render_json() {
        let report = Report::new(b"wor", b"hello world", Some(6));
        assert_eq!(
            render_json(&report).unwrap(),
            r#"{"pattern_len":3,"text_len":11,"outcome":"match","offset":6}"#
        );

        let report = Report::new(b"xyz", b"hello", None).with_all(Vec::new());
        assert_eq!(
            render_json(&report).unwrap(),
            r#"{"pattern_len":3,"text_len":5,"outcome":"no_match","all":[]}"#
        );

        let report = Report::new(b"", b"hello", Some(0)).with_all(Vec::new());
        assert_eq!(
            render_json(&report).unwrap(),
            r#"{"pattern_len":0,"text_len":5,"outcome":"empty_pattern"}"#
        );
    }
}
