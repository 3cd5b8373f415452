//! Evaluation errors.
//!
//! Errors are built only through the `#[cold]` factory functions below.
//! Spans are attached afterwards by the evaluator, which knows the
//! expression or statement that failed.

use desrever_ir::{Span, TokenKind};
use thiserror::Error;

use crate::Value;

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

/// A runtime failure, optionally located in the source.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Option<Span>,
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum EvalErrorKind {
    // Arithmetic
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },

    // Type/Operator
    #[error("cannot apply {op} to {left} and {right}")]
    BinaryTypeMismatch {
        op: TokenKind,
        left: &'static str,
        right: &'static str,
    },
    #[error("{op} is not a binary operator")]
    UnsupportedOperator { op: TokenKind },

    // Access
    #[error("undefined variable `{name}`")]
    UndefinedVariable { name: String },
    #[error("invalid literal `{text}`")]
    InvalidLiteral { text: String },

    // Control flow
    #[error("condition must be bool, found {found}")]
    NonBoolCondition { found: &'static str },
    #[error("loop count must be int, found {found}")]
    NonIntLoopCount { found: &'static str },
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError { kind, span: None }
    }

    /// Attach a source location, replacing any existing one.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach a source location only if none is set yet, so the innermost
    /// failing expression keeps its span.
    #[must_use]
    pub fn or_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}

#[cold]
pub fn binary_type_mismatch(op: TokenKind, left: Value, right: Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BinaryTypeMismatch {
        op,
        left: left.type_name(),
        right: right.type_name(),
    })
}

#[cold]
pub fn unsupported_operator(op: TokenKind) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedOperator { op })
}

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn invalid_literal(text: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidLiteral {
        text: text.to_string(),
    })
}

#[cold]
pub fn non_bool_condition(found: Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NonBoolCondition {
        found: found.type_name(),
    })
}

#[cold]
pub fn non_int_loop_count(found: Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NonIntLoopCount {
        found: found.type_name(),
    })
}

#[cfg(test)]
mod tests;
