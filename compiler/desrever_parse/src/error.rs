//! Parse error types.

use desrever_ir::{Span, Token, TokenKind};
use thiserror::Error;

/// A parse error with the location it was raised at.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseErrorKind {
    /// A specific delimiter or keyword was required.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: TokenKind, found: String },
    /// Factor position held something that cannot start an expression.
    #[error("expected expression, found {found}")]
    ExpectedExpression { found: String },
    /// The token cannot begin any statement form.
    #[error("unexpected statement starting with {found}")]
    UnexpectedStatement { found: String },
    /// A `{` without a matching `}`.
    #[error("unclosed block")]
    UnclosedBlock,
}

impl ParseError {
    #[cold]
    pub fn expected(expected: TokenKind, found: &Token) -> Self {
        ParseError {
            kind: ParseErrorKind::UnexpectedToken {
                expected,
                found: found.describe(),
            },
            span: found.span,
        }
    }

    #[cold]
    pub fn expected_expression(found: &Token) -> Self {
        ParseError {
            kind: ParseErrorKind::ExpectedExpression {
                found: found.describe(),
            },
            span: found.span,
        }
    }

    #[cold]
    pub fn unexpected_statement(found: &Token) -> Self {
        ParseError {
            kind: ParseErrorKind::UnexpectedStatement {
                found: found.describe(),
            },
            span: found.span,
        }
    }

    /// `open` is the span of the unmatched `{`.
    #[cold]
    pub fn unclosed_block(open: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::UnclosedBlock,
            span: open,
        }
    }
}
