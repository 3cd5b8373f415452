//! Expression parsing.
//!
//! ```text
//! expression := term ( ('+' | '-') term )*
//!                    ( ('dna' | 'ro') term )*
//!                    ( ('<' | '>' | '<=' | '>=' | '==' | '!=') term )*
//! term       := factor ( ('*' | '/') factor )*
//! factor     := NUMBER | CHAR | 'eurt' | 'eslaf' | IDENT | '(' expression ')'
//! ```
//!
//! The three expression-level folds run one after another, each taking a
//! `term` as its right operand. Once a later fold has started, operators of
//! an earlier fold are no longer consumed: `a + b < c` is `(< (+ a b) c)`,
//! while in `a < b + c` the `+ c` is left for the caller to reject.

use desrever_ir::{Expr, TokenKind};
use desrever_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

const ADDITIVE: &[TokenKind] = &[TokenKind::Plus, TokenKind::Minus];
const LOGICAL: &[TokenKind] = &[TokenKind::And, TokenKind::Or];
const COMPARISON: &[TokenKind] = &[
    TokenKind::Lt,
    TokenKind::Gt,
    TokenKind::LtEq,
    TokenKind::GtEq,
    TokenKind::EqEq,
    TokenKind::NotEq,
];
const MULTIPLICATIVE: &[TokenKind] = &[TokenKind::Star, TokenKind::Slash];

impl<'a> Parser<'a> {
    /// Parse an expression starting at the cursor.
    pub fn parse_expr(&mut self) -> Result<Expr<'a>, ParseError> {
        ensure_sufficient_stack(|| {
            let mut expr = self.parse_term()?;
            for ops in [ADDITIVE, LOGICAL, COMPARISON] {
                expr = self.fold_with(expr, ops)?;
            }
            Ok(expr)
        })
    }

    /// Left-fold `left (op term)*` for operators in `ops`.
    fn fold_with(
        &mut self,
        mut left: Expr<'a>,
        ops: &[TokenKind],
    ) -> Result<Expr<'a>, ParseError> {
        while let Some(op) = self.cursor.eat_any(ops) {
            let right = self.parse_term()?;
            left = Expr::binary(left, op, right);
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expr<'a>, ParseError> {
        let mut left = self.parse_factor()?;
        while let Some(op) = self.cursor.eat_any(MULTIPLICATIVE) {
            let right = self.parse_factor()?;
            left = Expr::binary(left, op, right);
        }
        Ok(left)
    }

    fn parse_factor(&mut self) -> Result<Expr<'a>, ParseError> {
        let token = self.cursor.current();
        match token.kind {
            TokenKind::Number | TokenKind::Char | TokenKind::True | TokenKind::False => {
                self.cursor.advance();
                Ok(Expr::literal(&token.lexeme, token.span))
            }
            TokenKind::Ident => {
                self.cursor.advance();
                Ok(Expr::variable(&token.lexeme, token.span))
            }
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                let close = self.cursor.expect(TokenKind::RParen)?;
                Ok(Expr {
                    span: token.span.merge(close.span),
                    ..inner
                })
            }
            _ => Err(ParseError::expected_expression(token)),
        }
    }
}
