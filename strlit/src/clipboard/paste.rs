//! Paste transform
//!
//! Escapes clipboard text for the literal it is pasted into. Pasting `foo` + line feed +
//! `bar` into a string literal produces two concatenated fragments, with the binary operator
//! placed according to the configured [BinaryOperatorPosition]:
//!
//!     foo\n" +
//!     "bar
//!
//! Each line is escaped on its own, and the breaker keeps an escaped line feed so the
//! resulting literal still denotes the pasted line break.

use serde::{Deserialize, Serialize};

use crate::literals::classifier::{literal_spanning, LiteralKind};
use crate::literals::escaping::escape_into;
use crate::literals::lines::tokenize_lines;
use crate::literals::span::SourceSpan;
use crate::literals::tree::SyntaxTree;

/// Where the `+` goes when a pasted string literal is split across lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BinaryOperatorPosition {
    /// `"foo\n" +` / `"bar"`
    #[default]
    BeforeNewline,
    /// `"foo\n"` / `+ "bar"`
    AfterNewline,
}

impl BinaryOperatorPosition {
    /// The text inserted between two escaped lines
    pub fn breaker(&self) -> &'static str {
        match self {
            BinaryOperatorPosition::BeforeNewline => "\\n\" +\n\"",
            BinaryOperatorPosition::AfterNewline => "\\n\"\n+ \"",
        }
    }
}

/// Clipboard side channel carrying the text as it was in the source before copy unescaped it
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawText {
    pub raw_text: Option<String>,
}

impl RawText {
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: Some(raw_text.into()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.raw_text.as_deref()
    }
}

/// Escape clipboard text for the paste target `target`.
///
/// Returns `text` unchanged unless the target is literal content. If it is and `raw` carries
/// the original source form, that is returned as is. Otherwise the text is escaped for the
/// target literal kind; string literals get one fragment per line.
pub fn preprocess_on_paste<T: SyntaxTree + ?Sized>(
    tree: &T,
    target: SourceSpan,
    text: &str,
    raw: Option<&RawText>,
    operator_position: BinaryOperatorPosition,
) -> String {
    let Some(kind) = literal_spanning(tree, target.start, target.end) else {
        return text.to_string();
    };
    tracing::debug!(%target, %kind, "pasting into literal");

    if let Some(raw_text) = raw.and_then(RawText::as_str) {
        tracing::debug!("clipboard carries raw source text, pasting it as is");
        return raw_text.to_string();
    }

    match kind {
        LiteralKind::CharacterLiteral => kind.escape(text),
        LiteralKind::StringLiteral => escape_lines(text, operator_position),
    }
}

/// Escape each line of `text` for a string literal and join the lines with the breaker.
/// No breaker follows the last line.
pub fn escape_lines(text: &str, operator_position: BinaryOperatorPosition) -> String {
    let breaker = operator_position.breaker();
    let mut buffer = String::with_capacity(text.len());

    for (index, line) in tokenize_lines(text).into_iter().enumerate() {
        if index > 0 {
            buffer.push_str(breaker);
        }
        escape_into(line, LiteralKind::StringLiteral.quote(), &mut buffer);
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literals::tree::TokenizedSource;

    // "ab" spans 4..8, 'c' spans 11..14
    const SOURCE: &str = r#"s = "ab" + 'c';"#;

    fn paste(target: SourceSpan, text: &str) -> String {
        let tree = TokenizedSource::new(SOURCE);
        preprocess_on_paste(
            &tree,
            target,
            text,
            None,
            BinaryOperatorPosition::BeforeNewline,
        )
    }

    #[test]
    fn test_paste_outside_literal_is_unchanged() {
        assert_eq!(paste(SourceSpan::new(0, 0), "a\"b\nc"), "a\"b\nc");
    }

    #[test]
    fn test_paste_before_opening_quote_is_unchanged() {
        assert_eq!(paste(SourceSpan::new(4, 4), "\"q\""), "\"q\"");
    }

    #[test]
    fn test_paste_into_string_escapes() {
        assert_eq!(paste(SourceSpan::new(6, 6), "say \"hi\"\t"), r#"say \"hi\"\t"#);
    }

    #[test]
    fn test_paste_into_char_escapes_apostrophe() {
        assert_eq!(paste(SourceSpan::new(12, 12), "'"), r"\'");
        assert_eq!(paste(SourceSpan::new(12, 13), "\""), "\"");
    }

    #[test]
    fn test_multi_line_paste_operator_before_newline() {
        assert_eq!(paste(SourceSpan::new(6, 6), "foo\nbar"), "foo\\n\" +\n\"bar");
    }

    #[test]
    fn test_multi_line_paste_operator_after_newline() {
        let tree = TokenizedSource::new(SOURCE);
        let pasted = preprocess_on_paste(
            &tree,
            SourceSpan::new(6, 6),
            "foo\r\nbar\n",
            None,
            BinaryOperatorPosition::AfterNewline,
        );
        assert_eq!(pasted, "foo\\n\"\n+ \"bar");
    }

    #[test]
    fn test_raw_text_bypasses_escaping() {
        let tree = TokenizedSource::new(SOURCE);
        let raw = RawText::new(r"a\nb");
        let pasted = preprocess_on_paste(
            &tree,
            SourceSpan::new(6, 6),
            "a\nb",
            Some(&raw),
            BinaryOperatorPosition::BeforeNewline,
        );
        assert_eq!(pasted, r"a\nb");
    }

    #[test]
    fn test_raw_text_ignored_outside_literal() {
        let tree = TokenizedSource::new(SOURCE);
        let raw = RawText::new(r"a\nb");
        let pasted = preprocess_on_paste(
            &tree,
            SourceSpan::new(0, 0),
            "a\nb",
            Some(&raw),
            BinaryOperatorPosition::BeforeNewline,
        );
        assert_eq!(pasted, "a\nb");
    }

    #[test]
    fn test_empty_raw_text_does_not_bypass() {
        let tree = TokenizedSource::new(SOURCE);
        let pasted = preprocess_on_paste(
            &tree,
            SourceSpan::new(6, 6),
            "\"",
            Some(&RawText::default()),
            BinaryOperatorPosition::BeforeNewline,
        );
        assert_eq!(pasted, "\\\"");
    }

    #[test]
    fn test_escape_lines_single_line_has_no_breaker() {
        assert_eq!(
            escape_lines("one", BinaryOperatorPosition::AfterNewline),
            "one"
        );
        assert_eq!(escape_lines("", BinaryOperatorPosition::BeforeNewline), "");
    }
}
