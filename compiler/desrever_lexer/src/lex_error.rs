//! Lexer error types.
//!
//! Lexing is all-or-nothing: the first unrecognized input aborts the whole
//! run before any statement executes, so a single error is reported.

use desrever_ir::Span;
use thiserror::Error;

/// A lexer error: where scanning stopped and what was found there.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{kind} at position {}", .span.start)]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LexErrorKind {
    /// No token pattern matches at this position.
    #[error("unexpected character {found:?}")]
    UnexpectedCharacter { found: char },
    /// A `'` that does not start a well-formed character literal
    /// (empty, unterminated, or more than one character).
    #[error("malformed character literal")]
    MalformedChar,
    /// Byte offsets no longer fit a `Span`.
    #[error("source is too large ({len} bytes)")]
    SourceTooLarge { len: usize },
}

impl LexError {
    /// Classify unmatched input starting at `span`.
    #[cold]
    pub(crate) fn unrecognized(span: Span, text: &str) -> Self {
        let kind = match text.chars().next() {
            Some('\'') => LexErrorKind::MalformedChar,
            Some(found) => LexErrorKind::UnexpectedCharacter { found },
            None => LexErrorKind::UnexpectedCharacter { found: '\0' },
        };
        LexError { span, kind }
    }

    #[cold]
    pub(crate) fn source_too_large(len: usize) -> Self {
        LexError {
            span: Span::DUMMY,
            kind: LexErrorKind::SourceTooLarge { len },
        }
    }
}

#[cfg(test)]
mod tests;
