//! Desrever evaluator.
//!
//! Runtime values, the variable table, binary operators and the statement
//! evaluator that parses and executes a program in a single pass.
//!
//! ```text
//! source -> lex -> TokenList -> Interpreter::run -> Environment
//!                                   |
//!                                   +-> parse_expr -> evaluate (per statement)
//! ```

mod environment;
mod errors;
mod eval;
mod interpreter;
mod literal;
mod operators;
mod print_handler;
mod value;

pub use environment::Environment;
pub use errors::{
    binary_type_mismatch, division_by_zero, integer_overflow, invalid_literal, non_bool_condition,
    non_int_loop_count, undefined_variable, unsupported_operator, EvalError, EvalErrorKind,
    EvalResult,
};
pub use eval::evaluate;
pub use interpreter::Interpreter;
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::Value;

use desrever_ir::Span;
use desrever_lexer::LexError;
use desrever_parse::ParseError;
use thiserror::Error;

/// Any failure that aborts a run.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    /// Source location of the failure, when known.
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Lex(e) => Some(e.span),
            Error::Parse(e) => Some(e.span),
            Error::Eval(e) => e.span,
        }
    }

    /// Short title naming the failing stage.
    pub fn title(&self) -> &'static str {
        match self {
            Error::Lex(_) => "lex error",
            Error::Parse(_) => "parse error",
            Error::Eval(_) => "runtime error",
        }
    }
}

/// Lex and execute a whole program, returning the final variable table.
///
/// Lexing completes before anything runs, so a lexical error means no
/// statement executed.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn run_source(source: &str, print_handler: SharedPrintHandler) -> Result<Environment, Error> {
    let tokens = desrever_lexer::lex(source)?;
    let mut interpreter = Interpreter::new(&tokens, print_handler);
    interpreter.run()?;
    tracing::debug!(bindings = interpreter.env().len(), "run finished");
    Ok(interpreter.into_env())
}
