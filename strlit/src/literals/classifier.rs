//! Literal classification
//!
//! Answers two questions about a buffer: is this offset inside a literal token, and is this
//! paste target literal content. Both go through the [SyntaxTree] boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::escaping::escape;
use super::span::SourceSpan;
use super::tree::SyntaxTree;

/// The two literal kinds the engines understand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LiteralKind {
    StringLiteral,
    CharacterLiteral,
}

impl LiteralKind {
    /// The delimiter, which is also the one quote this kind escapes
    pub fn quote(&self) -> char {
        match self {
            LiteralKind::StringLiteral => '"',
            LiteralKind::CharacterLiteral => '\'',
        }
    }

    /// Escape `text` for insertion into a literal of this kind
    pub fn escape(&self, text: &str) -> String {
        escape(text, self.quote())
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralKind::StringLiteral => write!(f, "string literal"),
            LiteralKind::CharacterLiteral => write!(f, "character literal"),
        }
    }
}

/// A literal token with its full span and the span of its body (delimiters stripped)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LiteralToken {
    pub kind: LiteralKind,
    pub span: SourceSpan,
    pub body: SourceSpan,
}

impl LiteralToken {
    /// Build a token from the full span; one delimiter byte is stripped on each side
    pub fn new(kind: LiteralKind, span: SourceSpan) -> Self {
        let body_start = (span.start + 1).min(span.end);
        let body_end = span.end.saturating_sub(1).max(body_start);
        Self {
            kind,
            span,
            body: SourceSpan::new(body_start, body_end),
        }
    }

    /// True when `selection` covers the whole literal, delimiters included
    pub fn is_enclosed_by(&self, selection: &SourceSpan) -> bool {
        selection.encloses(&self.span)
    }
}

/// The literal token covering `offset`, if the leaf there is a literal
pub fn classify<T: SyntaxTree + ?Sized>(tree: &T, offset: usize) -> Option<LiteralToken> {
    let leaf = tree.leaf_at(offset)?;
    leaf.literal.map(|kind| LiteralToken::new(kind, leaf.span))
}

/// The literal kind of a paste target `[start, end)`, if the target is literal content.
///
/// The target counts as literal content when the leaf at `start` is a literal and either:
///
///     - the target sits strictly inside that literal (touching a delimiter does not count), or
///     - the target runs past it into a literal of the same kind that begins before `end`.
///
/// Everything else, including a target spanning two different literal kinds, is plain text.
pub fn literal_spanning<T: SyntaxTree + ?Sized>(
    tree: &T,
    start: usize,
    end: usize,
) -> Option<LiteralKind> {
    let at_start = tree.leaf_at(start)?;
    let kind = at_start.literal?;

    if at_start.span.end < end {
        let at_end = tree.leaf_at(end)?;
        return (at_end.literal == Some(kind) && at_end.span.start < end).then_some(kind);
    }

    if start <= at_start.span.start || end >= at_start.span.end {
        return None;
    }
    Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literals::tree::TokenizedSource;

    // "ab" spans 4..8, "cd" spans 11..15, 'e' spans 18..21
    const SOURCE: &str = r#"s = "ab" + "cd" + 'e';"#;

    #[test]
    fn test_classify_inside_literal() {
        let tree = TokenizedSource::new(SOURCE);
        let token = classify(&tree, 5).unwrap();
        assert_eq!(token.kind, LiteralKind::StringLiteral);
        assert_eq!(token.span, SourceSpan::new(4, 8));
        assert_eq!(token.body, SourceSpan::new(5, 7));
    }

    #[test]
    fn test_classify_outside_literal() {
        let tree = TokenizedSource::new(SOURCE);
        assert_eq!(classify(&tree, 0), None);
        assert_eq!(classify(&tree, 100), None);
    }

    #[test]
    fn test_classify_character_literal() {
        let tree = TokenizedSource::new(SOURCE);
        let token = classify(&tree, 19).unwrap();
        assert_eq!(token.kind, LiteralKind::CharacterLiteral);
        assert_eq!(token.body, SourceSpan::new(19, 20));
    }

    #[test]
    fn test_spanning_caret_inside_literal() {
        let tree = TokenizedSource::new(SOURCE);
        assert_eq!(
            literal_spanning(&tree, 6, 6),
            Some(LiteralKind::StringLiteral)
        );
        assert_eq!(
            literal_spanning(&tree, 5, 7),
            Some(LiteralKind::StringLiteral)
        );
    }

    #[test]
    fn test_spanning_touching_delimiter_is_plain() {
        let tree = TokenizedSource::new(SOURCE);
        // Caret right before the opening quote
        assert_eq!(literal_spanning(&tree, 4, 4), None);
        // Selection reaching the closing quote
        assert_eq!(literal_spanning(&tree, 5, 8), None);
    }

    #[test]
    fn test_spanning_two_literals_of_same_kind() {
        let tree = TokenizedSource::new(SOURCE);
        assert_eq!(
            literal_spanning(&tree, 6, 13),
            Some(LiteralKind::StringLiteral)
        );
    }

    #[test]
    fn test_spanning_two_literals_of_different_kind() {
        let tree = TokenizedSource::new(SOURCE);
        assert_eq!(literal_spanning(&tree, 13, 19), None);
    }

    #[test]
    fn test_spanning_into_plain_code() {
        let tree = TokenizedSource::new(SOURCE);
        assert_eq!(literal_spanning(&tree, 6, 10), None);
        assert_eq!(literal_spanning(&tree, 1, 2), None);
    }

    #[test]
    fn test_kind_escaping_uses_its_own_quote() {
        assert_eq!(LiteralKind::StringLiteral.escape(r#"'""#), r#"'\""#);
        assert_eq!(LiteralKind::CharacterLiteral.escape(r#"'""#), r#"\'""#);
    }

    #[test]
    fn test_body_of_degenerate_span() {
        let token = LiteralToken::new(LiteralKind::StringLiteral, SourceSpan::new(3, 4));
        assert_eq!(token.body, SourceSpan::new(4, 4));
    }
}
