//! Statement evaluator.
//!
//! Parsing and execution are fused: the interpreter walks the token list
//! with the parser's cursor and executes each statement as soon as it has
//! been read. Nothing is stored between statements except the variable
//! table. Conditionals skip the untaken block by jumping the cursor past
//! it, and loops rewind the cursor to the start of the body once per
//! iteration.
//!
//! ```text
//! statement := type IDENT '=' expression ';'
//!            | 'prit' '(' expression ')' ';'
//!            | 'fi' '(' expression ')' block ( 'esle' block )?
//!            | 'rof' '(' expression ')' block
//! block     := '{' statement* '}'
//! ```

use desrever_ir::{Span, TokenKind, TokenList};
use desrever_parse::{BlockRange, ParseError, Parser};
use desrever_stack::ensure_sufficient_stack;

use crate::errors::{non_bool_condition, non_int_loop_count};
use crate::eval::evaluate;
use crate::print_handler::SharedPrintHandler;
use crate::{Environment, Error, Value};

/// Executes a token list statement by statement.
pub struct Interpreter<'a> {
    parser: Parser<'a>,
    env: Environment,
    print_handler: SharedPrintHandler,
}

impl<'a> Interpreter<'a> {
    pub fn new(tokens: &'a TokenList, print_handler: SharedPrintHandler) -> Self {
        Interpreter {
            parser: Parser::new(tokens),
            env: Environment::new(),
            print_handler,
        }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn into_env(self) -> Environment {
        self.env
    }

    /// Execute statements until the end marker.
    ///
    /// Stops at the first error; output printed before it stays printed.
    pub fn run(&mut self) -> Result<(), Error> {
        while !self.parser.cursor().is_at_end() {
            self.execute_statement()?;
        }
        Ok(())
    }

    fn execute_statement(&mut self) -> Result<(), Error> {
        ensure_sufficient_stack(|| {
            let kind = self.parser.cursor().current_kind();
            match kind {
                k if k.is_type_keyword() => self.execute_declaration(),
                TokenKind::Print => self.execute_print(),
                TokenKind::If => self.execute_if(),
                TokenKind::For => self.execute_for(),
                _ => Err(ParseError::unexpected_statement(self.parser.cursor().current()).into()),
            }
        })
    }

    /// `type name = expr;`
    fn execute_declaration(&mut self) -> Result<(), Error> {
        let cursor = self.parser.cursor_mut();
        cursor.advance();
        let name = cursor.expect(TokenKind::Ident)?;
        cursor.expect(TokenKind::Eq)?;
        let expr = self.parser.parse_expr()?;
        self.parser.cursor_mut().expect(TokenKind::Semicolon)?;

        let value = evaluate(&expr, &self.env)?;
        tracing::debug!(name = %name.lexeme, %value, "declare");
        self.env.define(&name.lexeme, value);
        Ok(())
    }

    /// `prit(expr);`
    fn execute_print(&mut self) -> Result<(), Error> {
        let cursor = self.parser.cursor_mut();
        cursor.advance();
        cursor.expect(TokenKind::LParen)?;
        let expr = self.parser.parse_expr()?;
        let cursor = self.parser.cursor_mut();
        cursor.expect(TokenKind::RParen)?;
        cursor.expect(TokenKind::Semicolon)?;

        let value = evaluate(&expr, &self.env)?;
        self.print_handler.println(&value.to_string());
        Ok(())
    }

    /// `fi (cond) { ... } esle { ... }`
    fn execute_if(&mut self) -> Result<(), Error> {
        let (condition, span) = self.parenthesized_header()?;
        let Value::Bool(taken) = condition else {
            return Err(non_bool_condition(condition).with_span(span).into());
        };

        let then_block = self.parser.cursor().block_range()?;
        tracing::debug!(taken, ?then_block, "conditional");
        if taken {
            self.execute_block(then_block)?;
        } else {
            self.parser.cursor_mut().set_position(then_block.after());
        }

        if self.parser.cursor_mut().eat(TokenKind::Else).is_some() {
            let else_block = self.parser.cursor().block_range()?;
            if taken {
                self.parser.cursor_mut().set_position(else_block.after());
            } else {
                self.execute_block(else_block)?;
            }
        }
        Ok(())
    }

    /// `rof (count) { ... }`
    fn execute_for(&mut self) -> Result<(), Error> {
        let (count, span) = self.parenthesized_header()?;
        let Value::Int(count) = count else {
            return Err(non_int_loop_count(count).with_span(span).into());
        };

        let body = self.parser.cursor().block_range()?;
        tracing::debug!(count, ?body, "loop");
        for iteration in 0..count.max(0) {
            tracing::trace!(iteration, "loop iteration");
            self.execute_block(body)?;
        }
        self.parser.cursor_mut().set_position(body.after());
        Ok(())
    }

    /// Read `keyword ( expr )` and evaluate the expression.
    ///
    /// The value is computed before the block that follows is looked at.
    fn parenthesized_header(&mut self) -> Result<(Value, Span), Error> {
        let cursor = self.parser.cursor_mut();
        cursor.advance();
        cursor.expect(TokenKind::LParen)?;
        let expr = self.parser.parse_expr()?;
        self.parser.cursor_mut().expect(TokenKind::RParen)?;
        let value = evaluate(&expr, &self.env)?;
        Ok((value, expr.span))
    }

    /// Run the statements of a block body, leaving the cursor past its `}`.
    fn execute_block(&mut self, block: BlockRange) -> Result<(), Error> {
        self.parser.cursor_mut().set_position(block.start);
        while self.parser.cursor().position() < block.end {
            self.execute_statement()?;
        }
        debug_assert_eq!(
            self.parser.cursor().position(),
            block.end,
            "statement ran past the end of its block"
        );
        self.parser.cursor_mut().set_position(block.after());
        Ok(())
    }
}

#[cfg(test)]
mod tests;
