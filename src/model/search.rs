//! Text-search types exchanged with the rendition backend.

use serde::{Deserialize, Serialize};

/// Options for a backend text search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    /// Pattern to match against page text.
    pub pattern: String,

    /// Match case exactly.
    pub case_sensitive: bool,

    /// Distinguish accented characters.
    pub accent_sensitive: bool,

    /// Interpret the pattern as a regular expression.
    pub use_regex: bool,
}

impl SearchOptions {
    /// The fixed option set used for redaction searches:
    /// case-insensitive, accent-insensitive, regex enabled.
    pub fn redaction(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            case_sensitive: false,
            accent_sensitive: false,
            use_regex: true,
        }
    }
}

/// Half-open character offset range `[start, end)` into a page text layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRange {
    pub start: u32,
    pub end: u32,
}

impl TextRange {
    /// Create a text range.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

/// Extent of one character on the page, in page-normalized coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CharExtent {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Per-character geometry of one page's text layout, as computed by the
/// backend's text-layout engine. Character index `i` in the extracted page
/// text occupies `chars[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionText {
    pub chars: Vec<CharExtent>,
}

impl PositionText {
    /// Number of characters covered by this layout.
    pub fn len(&self) -> u32 {
        self.chars.len() as u32
    }

    /// Whether the layout covers no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// One text-search match on a page.
///
/// A single match carries one or more offset ranges; a match that spans a
/// line break is reported as multiple disjoint ranges sharing one layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    /// Text layout the ranges point into.
    pub position_text: PositionText,

    /// Matched ranges, in backend order.
    pub ranges: Vec<TextRange>,
}

/// All search hits for one page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSearchResult {
    pub search_results: Vec<SearchHit>,
}

impl PageSearchResult {
    /// A result with no hits.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redaction_options_are_fixed() {
        let options = SearchOptions::redaction("[0-9]{3}");
        assert_eq!(options.pattern, "[0-9]{3}");
        assert!(!options.case_sensitive);
        assert!(!options.accent_sensitive);
        assert!(options.use_regex);
    }

    #[test]
    fn test_position_text_len() {
        let pos = PositionText {
            chars: vec![
                CharExtent {
                    x: 0.0,
                    y: 0.0,
                    width: 0.01,
                    height: 0.02,
                };
                5
            ],
        };
        assert_eq!(pos.len(), 5);
        assert!(!pos.is_empty());
    }
}
