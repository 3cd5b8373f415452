//! Expression parser for Desrever.
//!
//! Recursive descent over a `TokenList`. There is no statement-level tree:
//! the evaluator owns a `Parser`, asks it for one expression at a time, and
//! drives statement recognition directly through the `Cursor`.

mod cursor;
mod error;
mod expr;

pub use cursor::{BlockRange, Cursor};
pub use error::{ParseError, ParseErrorKind};

use desrever_ir::{Expr, TokenKind, TokenList};

/// Parser state: a cursor over a borrowed token list.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    #[inline]
    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    #[inline]
    pub fn cursor_mut(&mut self) -> &mut Cursor<'a> {
        &mut self.cursor
    }
}

/// Parse a token list holding exactly one expression.
///
/// Used by tools and tests that evaluate expressions outside a program.
pub fn parse_expression(tokens: &TokenList) -> Result<Expr<'_>, ParseError> {
    let mut parser = Parser::new(tokens);
    let expr = parser.parse_expr()?;
    parser.cursor_mut().expect(TokenKind::Eof)?;
    Ok(expr)
}
