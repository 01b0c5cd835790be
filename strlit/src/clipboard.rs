//! Copy and paste engines
//!
//!     Copy ([copy]) runs when the editor extracts text for the clipboard. It walks the leaves
//!     under each selection and unescapes literal bodies the selection cuts into, leaving
//!     complete literals and plain code untouched.
//!
//!     Paste ([paste]) runs when clipboard text is about to be inserted. If the target is
//!     literal content, the text is escaped for that literal kind, and multi-line text going
//!     into a string literal is split into concatenated fragments.
//!
//!     The two engines never call each other. They share the escape grammar and the
//!     classifier from [crate::literals]. [processor] wraps both behind one trait for editor
//!     pipelines and carries the verbatim side channel from copy to paste.

pub mod copy;
pub mod paste;
pub mod processor;

pub use copy::{decisions, preprocess_on_copy, TransformDecision};
pub use paste::{escape_lines, preprocess_on_paste, BinaryOperatorPosition, RawText};
pub use processor::{ClipboardPayload, CopyPastePreProcessor, LiteralCopyPasteProcessor};
