//! Syntax tree boundary
//!
//!     The copy and paste engines need exactly two things from a parser: the leaf covering an
//!     offset, and the leaf that follows a given leaf. [SyntaxTree] captures that contract so
//!     an editor can plug in its own parse structure, including as a trait object. Leaf
//!     iteration is exposed as a lazy, restartable iterator ([Leaves]) instead of manual
//!     next-leaf chasing.
//!
//!     [TokenizedSource] implements the boundary over a flat token list produced by the logos
//!     lexer. Leaves tile the buffer: every byte belongs to exactly one leaf.

use serde::{Deserialize, Serialize};

use super::classifier::LiteralKind;
use super::span::SourceSpan;
use super::token::{tokenize, Token};

/// A leaf of the syntax tree: a span, and the literal kind when the leaf is a literal token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Leaf {
    pub literal: Option<LiteralKind>,
    pub span: SourceSpan,
}

/// Read-only view of a parsed buffer
///
/// Implementations must be consistent: `next_leaf(l)` starts where `l` ends, and
/// `leaf_at(o)` returns the leaf with `start <= o < end`, or `None` at or past the end of the
/// buffer.
pub trait SyntaxTree {
    /// The leaf covering `offset`
    fn leaf_at(&self, offset: usize) -> Option<Leaf>;

    /// The leaf directly after `leaf` in source order
    fn next_leaf(&self, leaf: &Leaf) -> Option<Leaf>;
}

/// Lazy iterator over consecutive leaves. Ends at the end of the buffer.
pub struct Leaves<'a, T: ?Sized> {
    tree: &'a T,
    next: Option<Leaf>,
}

impl<'a, T: SyntaxTree + ?Sized> Leaves<'a, T> {
    /// Leaves in source order, starting with the one covering `offset`
    pub fn new(tree: &'a T, offset: usize) -> Self {
        Self {
            tree,
            next: tree.leaf_at(offset),
        }
    }
}

impl<T: SyntaxTree + ?Sized> Iterator for Leaves<'_, T> {
    type Item = Leaf;

    fn next(&mut self) -> Option<Leaf> {
        let current = self.next.take()?;
        self.next = self.tree.next_leaf(&current);
        Some(current)
    }
}

/// A source buffer split into leaves by the reference lexer
#[derive(Debug, Clone)]
pub struct TokenizedSource {
    len: usize,
    tokens: Vec<(Option<Token>, SourceSpan)>,
}

impl TokenizedSource {
    pub fn new(source: &str) -> Self {
        let mut tokens = Vec::new();
        let mut cursor = 0;
        for (token, span) in tokenize(source) {
            if span.start > cursor {
                tokens.push((None, SourceSpan::new(cursor, span.start)));
            }
            cursor = span.end;
            tokens.push((token, SourceSpan::from(span)));
        }
        if cursor < source.len() {
            tokens.push((None, SourceSpan::new(cursor, source.len())));
        }

        Self {
            len: source.len(),
            tokens,
        }
    }

    fn leaf(&self, index: usize) -> Option<Leaf> {
        self.tokens.get(index).map(|(token, span)| Leaf {
            literal: token.and_then(|t| t.literal_kind()),
            span: *span,
        })
    }
}

impl SyntaxTree for TokenizedSource {
    fn leaf_at(&self, offset: usize) -> Option<Leaf> {
        if offset >= self.len {
            return None;
        }
        // First token whose end lies past the offset
        let index = self.tokens.partition_point(|(_, span)| span.end <= offset);
        self.leaf(index)
    }

    fn next_leaf(&self, leaf: &Leaf) -> Option<Leaf> {
        self.leaf_at(leaf.span.end)
    }
}
