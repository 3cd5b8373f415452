//! Token types for the Desrever lexer.

mod kind;
mod list;

pub use kind::TokenKind;
pub use list::TokenList;

use std::fmt;

use super::Span;

/// A token with its exact source text and location.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// The matched text. Empty for [`TokenKind::Eof`].
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// The end marker, placed at `offset` (the source length).
    pub fn eof(offset: u32) -> Self {
        Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            span: Span::point(offset),
        }
    }

    /// Create a token without a meaningful location, for tests and tools.
    pub fn dummy(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Token::new(kind, lexeme, Span::DUMMY)
    }

    /// Describe the token for "found ..." parts of diagnostics.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of file".to_string(),
            _ => format!("`{}`", self.lexeme),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.lexeme, self.span)
    }
}
