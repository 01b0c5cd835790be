//! Processor interface for editor copy/paste pipelines
//!
//! An editor keeps a list of [CopyPastePreProcessor]s. On copy, the first processor that
//! rewrites the text wins, and the original text is kept next to the result as [RawText].
//! On paste, every processor gets a turn at the text in order. [ClipboardPayload] models
//! that round trip.

use serde::{Deserialize, Serialize};

use crate::literals::span::SourceSpan;
use crate::literals::tree::SyntaxTree;

use super::copy::preprocess_on_copy;
use super::paste::{preprocess_on_paste, BinaryOperatorPosition, RawText};

/// Hook invoked by the editor when text leaves or enters a buffer
pub trait CopyPastePreProcessor {
    /// Rewrite copied text, or `None` to leave it as is
    fn preprocess_on_copy(
        &self,
        tree: &dyn SyntaxTree,
        selections: &[SourceSpan],
        text: &str,
    ) -> Option<String>;

    /// Produce the text to insert for a paste over `target`
    fn preprocess_on_paste(
        &self,
        tree: &dyn SyntaxTree,
        target: SourceSpan,
        text: &str,
        raw: Option<&RawText>,
    ) -> String;
}

/// Escape-aware processing of string and character literals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LiteralCopyPasteProcessor {
    pub operator_position: BinaryOperatorPosition,
}

impl LiteralCopyPasteProcessor {
    pub fn new(operator_position: BinaryOperatorPosition) -> Self {
        Self { operator_position }
    }
}

impl CopyPastePreProcessor for LiteralCopyPasteProcessor {
    fn preprocess_on_copy(
        &self,
        tree: &dyn SyntaxTree,
        selections: &[SourceSpan],
        text: &str,
    ) -> Option<String> {
        preprocess_on_copy(tree, selections, text)
    }

    fn preprocess_on_paste(
        &self,
        tree: &dyn SyntaxTree,
        target: SourceSpan,
        text: &str,
        raw: Option<&RawText>,
    ) -> String {
        preprocess_on_paste(tree, target, text, raw, self.operator_position)
    }
}

/// Text placed on the clipboard, with the raw source text when copy rewrote it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardPayload {
    pub text: String,
    pub raw: Option<RawText>,
}

impl ClipboardPayload {
    /// Run `processors` over copied text; the first one that rewrites it wins
    pub fn capture(
        processors: &[&dyn CopyPastePreProcessor],
        tree: &dyn SyntaxTree,
        selections: &[SourceSpan],
        text: &str,
    ) -> Self {
        let rewritten = processors
            .iter()
            .find_map(|processor| processor.preprocess_on_copy(tree, selections, text));

        match rewritten {
            Some(escaped) => Self {
                text: escaped,
                raw: Some(RawText::new(text)),
            },
            None => Self {
                text: text.to_string(),
                raw: None,
            },
        }
    }

    /// Text to insert when pasting this payload over `target`
    pub fn paste(
        &self,
        processors: &[&dyn CopyPastePreProcessor],
        tree: &dyn SyntaxTree,
        target: SourceSpan,
    ) -> String {
        processors.iter().fold(self.text.clone(), |text, processor| {
            processor.preprocess_on_paste(tree, target, &text, self.raw.as_ref())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literals::tree::TokenizedSource;

    #[test]
    fn test_capture_keeps_raw_text_when_rewritten() {
        let source = r#"a = "x\ty";"#;
        let tree = TokenizedSource::new(source);
        let processor = LiteralCopyPasteProcessor::default();
        let processors: [&dyn CopyPastePreProcessor; 1] = [&processor];
        let payload =
            ClipboardPayload::capture(&processors, &tree, &[SourceSpan::new(5, 9)], r"x\ty");
        assert_eq!(payload.text, "x\ty");
        assert_eq!(payload.raw, Some(RawText::new(r"x\ty")));
    }

    #[test]
    fn test_capture_without_rewrite_has_no_raw_text() {
        let source = r#"a = "x\ty";"#;
        let tree = TokenizedSource::new(source);
        let processor = LiteralCopyPasteProcessor::default();
        let processors: [&dyn CopyPastePreProcessor; 1] = [&processor];
        let payload =
            ClipboardPayload::capture(&processors, &tree, &[SourceSpan::new(0, 3)], "a =");
        assert_eq!(
            payload,
            ClipboardPayload {
                text: "a =".to_string(),
                raw: None,
            }
        );
    }

    #[test]
    fn test_paste_of_captured_literal_content_round_trips() {
        let source = r#"a = "x\ty"; b = "";"#;
        let tree = TokenizedSource::new(source);
        let processor = LiteralCopyPasteProcessor::default();
        let processors: [&dyn CopyPastePreProcessor; 1] = [&processor];
        let payload =
            ClipboardPayload::capture(&processors, &tree, &[SourceSpan::new(5, 9)], r"x\ty");

        // Caret between the quotes of `""`
        let target = SourceSpan::new(17, 17);
        assert_eq!(payload.paste(&processors, &tree, target), r"x\ty");
        // Plain code receives the unescaped form
        assert_eq!(
            payload.paste(&processors, &tree, SourceSpan::new(0, 0)),
            "x\ty"
        );
    }
}
