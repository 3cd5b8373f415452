//! Desrever IR - shared data types for the interpreter pipeline.
//!
//! This crate contains the types every stage agrees on:
//! - `Span` for source locations
//! - `Token`, `TokenKind` and `TokenList` for lexer output
//! - `Expr` trees built by the expression parser
//!
//! Expression trees borrow their lexemes from the `TokenList` they were
//! parsed from. They live only as long as the statement that built them;
//! nothing here is persisted between statements.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod expr;
mod span;
mod token;

pub use expr::{Expr, ExprKind};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
