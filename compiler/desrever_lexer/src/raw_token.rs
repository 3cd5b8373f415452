//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived scanner. Logos always takes the
//! longest match and prefers literal tokens over the identifier regex on a
//! tie, which gives exactly the keyword/identifier split the language needs:
//! `fi` is the if-keyword while `fix` and `fi_` are identifiers.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    #[token("tni")]
    IntType,
    #[token("elbuod")]
    DoubleType,
    #[token("loob")]
    BoolType,
    #[token("rahc")]
    CharType,

    #[token("prit")]
    Print,
    #[token("fi")]
    If,
    #[token("esle")]
    Else,
    #[token("rof")]
    For,

    #[token("eurt")]
    True,
    #[token("eslaf")]
    False,

    #[token("dna")]
    And,
    #[token("ro")]
    Or,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    // Char literal (no unescaped newlines allowed)
    #[regex(r"'([^'\\\n\r]|\\.)'")]
    Char,

    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("=")]
    Eq,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
}
