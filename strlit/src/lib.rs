//! # strlit
//!
//! Escape-aware clipboard transforms for string and character literals.
//!
//! When part of a quoted literal is copied, its escape sequences are turned into the
//! characters they denote so the clipboard reads naturally. When text is pasted into a
//! literal, the inverse happens: special characters are escaped, and multi-line text pasted
//! into a string literal is split into concatenated per-line fragments.
//!
//! The crate is split in two layers:
//!
//!     - [literals]: the source-side view. Tokens, the syntax tree boundary, literal
//!       classification, selection/clipboard coordinate mapping and the escape grammar.
//!     - [clipboard]: the copy and paste engines built on top of it.
//!
//! Offsets are UTF-8 byte offsets throughout, both in the source buffer and in clipboard
//! text.

pub mod clipboard;
pub mod literals;

pub use clipboard::{
    preprocess_on_copy, preprocess_on_paste, BinaryOperatorPosition, CopyPastePreProcessor,
    LiteralCopyPasteProcessor, RawText,
};
pub use literals::{
    classify, literal_spanning, Leaf, LiteralKind, LiteralToken, SourceSpan, SyntaxTree,
    TokenizedSource,
};
