//! Source spans and the source/clipboard coordinate mapping
//!
//! Copy operates in two coordinate systems at once: byte offsets into the source buffer, and
//! byte offsets into the clipboard text the editor extracted for those selections. With block
//! selection there are several disjoint source spans, and the clipboard text is their slices
//! joined by a single line feed. [map_selections] pairs every source span with its slice of
//! the clipboard text so the engines can walk both in lockstep.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// A half-open byte range `[start, end)` over the source buffer
///
/// Deserialization goes through [SourceSpan::new], so reversed bounds are reordered there too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Range<usize>")]
pub struct SourceSpan {
    pub start: usize,
    pub end: usize,
}

impl SourceSpan {
    /// Build a span. Reversed bounds (a selection dragged backwards) are reordered.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    /// Length in bytes; zero for a span built by hand with `end < start`
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if `other` lies entirely within this span
    pub fn encloses(&self, other: &SourceSpan) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl From<Range<usize>> for SourceSpan {
    fn from(range: Range<usize>) -> Self {
        SourceSpan::new(range.start, range.end)
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// One selected source span paired with its slice of the clipboard text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRange {
    pub source: SourceSpan,
    pub text: Range<usize>,
}

impl SelectionRange {
    /// True when the clipboard slice is shorter than the source span it stands for
    pub fn is_truncated(&self) -> bool {
        self.text.len() < self.source.len()
    }
}

/// Pair each selection with its slice of `text`.
///
/// Slices are consecutive and separated by one line feed, the way block selection joins its
/// lines. A slice is clamped to the end of `text` and to a UTF-8 character boundary. Once the
/// text is exhausted the remaining selections are dropped, so the result may be shorter than
/// `selections`.
pub fn map_selections(selections: &[SourceSpan], text: &str) -> Vec<SelectionRange> {
    let mut ranges = Vec::with_capacity(selections.len());
    let mut text_offset = 0;

    for source in selections {
        if text_offset >= text.len() {
            tracing::debug!(
                mapped = ranges.len(),
                total = selections.len(),
                "clipboard text exhausted before all selections were mapped"
            );
            break;
        }

        let start = floor_char_boundary(text, text_offset);
        let end = floor_char_boundary(text, text_offset.saturating_add(source.len()));
        let range = SelectionRange {
            source: *source,
            text: start..end.max(start),
        };
        if range.is_truncated() {
            tracing::debug!(
                source = %range.source,
                text_len = range.text.len(),
                "clipboard slice shorter than its selection, clamping"
            );
        }

        // Skip the line feed that separates block selection lines.
        text_offset = range.text.end + 1;
        ranges.push(range);
    }

    ranges
}

/// Largest character boundary of `text` at or below `offset`, clamped to `text.len()`
pub(crate) fn floor_char_boundary(text: &str, offset: usize) -> usize {
    if offset >= text.len() {
        return text.len();
    }
    let mut offset = offset;
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed_bounds_are_reordered() {
        let span = SourceSpan::new(7, 3);
        assert_eq!(span, SourceSpan { start: 3, end: 7 });
        assert_eq!(span.len(), 4);
    }

    #[test]
    fn test_deserialized_bounds_are_reordered() {
        let span: SourceSpan = serde_json::from_str(r#"{"start": 8, "end": 5}"#).unwrap();
        assert_eq!(span, SourceSpan::new(5, 8));
        assert_eq!(serde_json::to_string(&span).unwrap(), r#"{"start":5,"end":8}"#);
    }

    #[test]
    fn test_hand_built_reversed_span_is_empty() {
        let span = SourceSpan { start: 8, end: 5 };
        assert_eq!(span.len(), 0);
        assert!(span.is_empty());
        let ranges = map_selections(&[span, SourceSpan::new(0, 2)], "\nab");
        assert_eq!(ranges[0].text, 0..0);
        assert_eq!(ranges[1].text, 1..3);
    }

    #[test]
    fn test_encloses() {
        let a = SourceSpan::new(0, 5);
        assert!(a.encloses(&SourceSpan::new(1, 5)));
        assert!(a.encloses(&a));
        assert!(!a.encloses(&SourceSpan::new(1, 6)));
    }

    #[test]
    fn test_single_selection_maps_whole_text() {
        let ranges = map_selections(&[SourceSpan::new(10, 15)], "hello");
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].text, 0..5);
        assert!(!ranges[0].is_truncated());
    }

    #[test]
    fn test_block_selection_skips_separators() {
        let selections = [
            SourceSpan::new(0, 3),
            SourceSpan::new(10, 13),
            SourceSpan::new(20, 23),
        ];
        let ranges = map_selections(&selections, "abc\ndef\nghi");
        let slices: Vec<_> = ranges.iter().map(|r| r.text.clone()).collect();
        assert_eq!(slices, vec![0..3, 4..7, 8..11]);
    }

    #[test]
    fn test_truncated_text_is_clamped_and_stops() {
        let selections = [SourceSpan::new(0, 4), SourceSpan::new(10, 14)];
        let ranges = map_selections(&selections, "ab");
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].text, 0..2);
        assert!(ranges[0].is_truncated());
    }

    #[test]
    fn test_empty_text_maps_nothing() {
        assert!(map_selections(&[SourceSpan::new(0, 4)], "").is_empty());
    }

    #[test]
    fn test_clamps_to_char_boundary() {
        // "é" is two bytes; a selection one byte long must not split it.
        let ranges = map_selections(&[SourceSpan::new(0, 1)], "é");
        assert_eq!(ranges[0].text, 0..0);
    }
}
