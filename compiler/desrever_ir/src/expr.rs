//! Expression trees.
//!
//! Trees are built by the expression parser for a single statement and
//! evaluated immediately. They borrow lexemes and operator tokens from the
//! `TokenList`, so building one never copies source text.

use std::fmt;

use crate::{Span, Token};

/// An expression node with the span it covers.
#[derive(Clone, PartialEq, Eq)]
pub struct Expr<'a> {
    pub kind: ExprKind<'a>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprKind<'a> {
    /// Raw literal text: a number, a quoted character, or `eurt`/`eslaf`.
    /// Interpretation is left to the evaluator.
    Literal(&'a str),
    /// Reference to a variable by name.
    Variable(&'a str),
    /// Binary operation. The operator is kept as the token that spelled it.
    Binary {
        left: Box<Expr<'a>>,
        op: &'a Token,
        right: Box<Expr<'a>>,
    },
}

impl<'a> Expr<'a> {
    pub fn literal(text: &'a str, span: Span) -> Self {
        Expr {
            kind: ExprKind::Literal(text),
            span,
        }
    }

    pub fn variable(name: &'a str, span: Span) -> Self {
        Expr {
            kind: ExprKind::Variable(name),
            span,
        }
    }

    /// Build a binary node spanning both operands.
    pub fn binary(left: Expr<'a>, op: &'a Token, right: Expr<'a>) -> Self {
        let span = left.span.merge(right.span);
        Expr {
            kind: ExprKind::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
            },
            span,
        }
    }
}

/// S-expression rendering: `(+ 1 (* 2 x))`.
impl fmt::Display for Expr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Literal(text) | ExprKind::Variable(text) => f.write_str(text),
            ExprKind::Binary { left, op, right } => {
                write!(f, "({} {left} {right})", op.lexeme)
            }
        }
    }
}

impl fmt::Debug for Expr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self} @ {}", self.span)
    }
}
