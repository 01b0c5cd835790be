//! Source-side building blocks for the clipboard engines
//!
//!     The engines never look at raw source text directly. They see the buffer through the
//!     [SyntaxTree] boundary, which yields leaves (tokens) with byte spans and an optional
//!     literal kind. [TokenizedSource] is the reference implementation, backed by the logos
//!     lexer in [token].
//!
//!     Layers, bottom-up:
//!
//!         span: byte spans and the mapping between source and clipboard coordinates.
//!         token: the logos token set.
//!         tree: leaves, leaf lookup and lazy leaf iteration.
//!         classifier: literal detection at an offset or over a paste target.
//!         escaping: the backslash escape grammar, per literal kind.
//!         lines: line splitting for multi-line paste.

pub mod classifier;
pub mod escaping;
pub mod lines;
pub mod span;
pub mod token;
pub mod tree;

pub use classifier::{classify, literal_spanning, LiteralKind, LiteralToken};
pub use escaping::{escape, unescape};
pub use lines::tokenize_lines;
pub use span::{map_selections, SelectionRange, SourceSpan};
pub use token::{tokenize, Token};
pub use tree::{Leaf, Leaves, SyntaxTree, TokenizedSource};
