//! Copy transform
//!
//! Example: with `String s = "first line \n second line";` in the editor, copying the
//! selection `line \n second` puts two physical lines on the clipboard, `line ` and
//! ` second`. Copying `"first line \n second line"` including both quotes leaves the text
//! exactly as it is in the source.
//!
//! Every selection is split into [TransformDecision]s, one per contiguous piece of a leaf,
//! and the matching slice of clipboard text is rewritten piece by piece. The clipboard cursor
//! advances by the source length of each piece, so both coordinate systems stay in lockstep.

use serde::{Deserialize, Serialize};

use crate::literals::escaping::unescape;
use crate::literals::span::{floor_char_boundary, map_selections, SelectionRange, SourceSpan};
use crate::literals::tree::{Leaf, Leaves, SyntaxTree};
use crate::literals::LiteralToken;

/// What to do with one contiguous piece of a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransformDecision {
    Verbatim(SourceSpan),
    Unescape(SourceSpan),
}

impl TransformDecision {
    pub fn span(&self) -> SourceSpan {
        match self {
            TransformDecision::Verbatim(span) | TransformDecision::Unescape(span) => *span,
        }
    }
}

/// Lazily split `selection` into transform decisions, in source order.
///
/// The decisions cover the selection without gaps up to the end of the buffer. A piece is
/// [TransformDecision::Unescape] only if it lies in a literal body and the selection does not
/// enclose that whole literal.
pub fn decisions<'a, T: SyntaxTree + ?Sized>(
    tree: &'a T,
    selection: SourceSpan,
) -> impl Iterator<Item = TransformDecision> + 'a {
    Leaves::new(tree, selection.start)
        .take_while(move |leaf| leaf.span.start < selection.end)
        .flat_map(move |leaf| split_leaf(&leaf, &selection))
}

/// Split the part of `leaf` under `selection` into before / escaped zone / after
fn split_leaf(leaf: &Leaf, selection: &SourceSpan) -> impl Iterator<Item = TransformDecision> {
    let token = leaf.literal.map(|kind| LiteralToken::new(kind, leaf.span));
    let (escaped_start, escaped_end) = match token {
        Some(token) if !token.is_enclosed_by(selection) => (token.body.start, token.body.end),
        _ => (leaf.span.start, leaf.span.start),
    };

    let before = piece(
        selection.start.max(leaf.span.start),
        escaped_start.min(selection.end),
    )
    .map(TransformDecision::Verbatim);
    let escaped = piece(
        selection.start.max(escaped_start),
        escaped_end.min(selection.end),
    )
    .map(TransformDecision::Unescape);
    let after = piece(
        selection.start.max(escaped_end),
        selection.end.min(leaf.span.end),
    )
    .map(TransformDecision::Verbatim);

    [before, escaped, after].into_iter().flatten()
}

fn piece(start: usize, end: usize) -> Option<SourceSpan> {
    (start < end).then_some(SourceSpan { start, end })
}

/// Unescape literal content in copied text.
///
/// `selections` are the selected source spans in order (several with block selection) and
/// `text` is the text the editor extracted for them, one slice per selection joined by line
/// feeds. Returns `None` when the result would equal `text`, otherwise the rewritten text.
///
/// Text shorter than the selections imply is clamped: each slice stops at the end of `text`,
/// and selections past the end are dropped.
pub fn preprocess_on_copy<T: SyntaxTree + ?Sized>(
    tree: &T,
    selections: &[SourceSpan],
    text: &str,
) -> Option<String> {
    let mut buffer = String::with_capacity(text.len());
    let mut changed = false;

    for (index, range) in map_selections(selections, text).iter().enumerate() {
        if index > 0 {
            // Block selection line separator
            buffer.push('\n');
        }
        changed |= copy_selection(tree, range, text, &mut buffer);
    }

    tracing::debug!(selections = selections.len(), changed, "preprocessed copy");
    changed.then_some(buffer)
}

/// Append the processed slice of one selection to `buffer`. Returns true if unescaping
/// changed anything.
fn copy_selection<T: SyntaxTree + ?Sized>(
    tree: &T,
    range: &SelectionRange,
    text: &str,
    buffer: &mut String,
) -> bool {
    let slice = &text[range.text.clone()];
    // Only a clamped slice may differ in length from its source span
    debug_assert!(range.is_truncated() || slice.len() == range.source.len());
    let written_before = buffer.len();
    let mut cursor = 0;
    let mut changed = false;

    for decision in decisions(tree, range.source) {
        if cursor >= slice.len() {
            break;
        }
        let end = floor_char_boundary(slice, cursor + decision.span().len());
        let chunk = &slice[cursor..end];
        cursor = end;

        match decision {
            TransformDecision::Verbatim(_) => buffer.push_str(chunk),
            TransformDecision::Unescape(span) => {
                let unescaped = unescape(chunk);
                debug_assert!(unescaped.len() <= chunk.len());
                if unescaped != chunk {
                    tracing::trace!(%span, "unescaped literal body");
                    changed = true;
                }
                buffer.push_str(&unescaped);
            }
        }
    }

    // The buffer ended inside the selection
    if cursor < slice.len() {
        buffer.push_str(&slice[cursor..]);
    }
    // Unescaping never grows the text
    debug_assert!(buffer.len() - written_before <= slice.len());
    changed
}
