//! Token definitions for C/Java-family source buffers
//!
//! The engines only care about two token kinds, string and character literals, but every
//! byte of the buffer must belong to some leaf so that copy can walk a selection leaf by leaf.
//! The remaining variants exist to keep literal detection honest: a quote inside a comment is
//! not a literal, and neither is an apostrophe in an identifier-like run.
//!
//! Only terminated, single-line literals are recognized. An unterminated quote is rejected by
//! the lexer and ends up as an opaque, non-literal leaf. An unterminated block comment runs to
//! the end of the buffer.
use logos::{Lexer, Logos};
use serde::{Deserialize, Serialize};

use super::classifier::LiteralKind;

/// All tokens the reference lexer produces
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Token {
    #[regex(r#""([^"\\\r\n]|\\[^\r\n])*""#)]
    StringLiteral,

    #[regex(r"'([^'\\\r\n]|\\[^\r\n])*'")]
    CharacterLiteral,

    #[regex(r"//[^\r\n]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    // Whitespace (excluding line breaks)
    #[regex(r"[ \t\x0C]+")]
    Whitespace,

    #[regex(r"\r\n|\r|\n")]
    Newline,

    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Identifier,

    // Loose on purpose: suffixes, exponents and separators all stay in one token
    #[regex(r"[0-9][0-9A-Za-z_.]*")]
    Number,

    // Any other single character, quotes excluded
    #[regex(r#"[^\sA-Za-z0-9_$"']"#)]
    Punctuation,
}

impl Token {
    /// The literal kind this token stands for, if any
    pub fn literal_kind(&self) -> Option<LiteralKind> {
        match self {
            Token::StringLiteral => Some(LiteralKind::StringLiteral),
            Token::CharacterLiteral => Some(LiteralKind::CharacterLiteral),
            _ => None,
        }
    }
}

/// Consume a block comment body up to and including `*/`
fn block_comment(lex: &mut Lexer<Token>) -> bool {
    let rest = lex.remainder();
    let len = rest.find("*/").map_or(rest.len(), |end| end + 2);
    lex.bump(len);
    true
}

/// Tokenize a source buffer with location information
///
/// Bytes the lexer rejects are reported as `None` with their span, so the returned spans
/// cover the whole buffer in order.
pub fn tokenize(source: &str) -> Vec<(Option<Token>, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push((result.ok(), lexer.span()));
    }

    tokens
}
