//! Token Conversion
//!
//! Maps raw logos tokens onto the shared `TokenKind`.

use desrever_ir::TokenKind;

use crate::raw_token::RawToken;

pub(crate) fn convert_token(raw: RawToken) -> TokenKind {
    match raw {
        // Type keywords
        RawToken::IntType => TokenKind::IntType,
        RawToken::DoubleType => TokenKind::DoubleType,
        RawToken::BoolType => TokenKind::BoolType,
        RawToken::CharType => TokenKind::CharType,

        // Control keywords
        RawToken::Print => TokenKind::Print,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::For => TokenKind::For,

        // Literals
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::Number => TokenKind::Number,
        RawToken::Char => TokenKind::Char,
        RawToken::Ident => TokenKind::Ident,

        // Boolean operators
        RawToken::And => TokenKind::And,
        RawToken::Or => TokenKind::Or,

        // Comparison
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,

        // Symbols
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Eq => TokenKind::Eq,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Comma => TokenKind::Comma,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
    }
}
