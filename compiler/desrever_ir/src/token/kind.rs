//! Token kinds for Desrever.

use std::fmt;

/// Closed set of lexical categories.
///
/// Kinds carry no payload; the matched text lives in [`Token::lexeme`].
/// Numeric and character literals keep their raw spelling so that the
/// evaluator can interpret them at the point of use.
///
/// [`Token::lexeme`]: super::Token::lexeme
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    IntType,    // tni
    DoubleType, // elbuod
    BoolType,   // loob
    CharType,   // rahc

    Print, // prit
    If,    // fi
    Else,  // esle
    For,   // rof

    True,  // eurt
    False, // eslaf
    /// Integer or decimal literal: `42`, `3.14`
    Number,
    /// Character literal including its quotes: `'a'`, `'\n'`
    Char,

    Ident,

    And, // dna
    Or,  // ro

    EqEq,
    NotEq,
    LtEq,
    GtEq,
    Lt,
    Gt,

    Plus,
    Minus,
    Star,
    Slash,
    Eq,
    Semicolon,
    Comma,
    LParen,
    RParen,
    LBrace,
    RBrace,

    /// End marker, always the last token of a `TokenList`.
    Eof,
}

impl TokenKind {
    /// True for the keywords that start a declaration.
    #[inline]
    pub const fn is_type_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::IntType | TokenKind::DoubleType | TokenKind::BoolType | TokenKind::CharType
        )
    }

    #[inline]
    pub const fn is_keyword(self) -> bool {
        self.keyword_str().is_some()
    }

    /// The source spelling of a keyword, or `None` for non-keywords.
    pub const fn keyword_str(self) -> Option<&'static str> {
        match self {
            TokenKind::IntType => Some("tni"),
            TokenKind::DoubleType => Some("elbuod"),
            TokenKind::BoolType => Some("loob"),
            TokenKind::CharType => Some("rahc"),
            TokenKind::Print => Some("prit"),
            TokenKind::If => Some("fi"),
            TokenKind::Else => Some("esle"),
            TokenKind::For => Some("rof"),
            TokenKind::True => Some("eurt"),
            TokenKind::False => Some("eslaf"),
            TokenKind::And => Some("dna"),
            TokenKind::Or => Some("ro"),
            _ => None,
        }
    }

    /// The English word a reversed keyword stands for.
    pub const fn keyword_meaning(self) -> Option<&'static str> {
        match self {
            TokenKind::IntType => Some("int"),
            TokenKind::DoubleType => Some("double"),
            TokenKind::BoolType => Some("bool"),
            TokenKind::CharType => Some("char"),
            TokenKind::Print => Some("print"),
            TokenKind::If => Some("if"),
            TokenKind::Else => Some("else"),
            TokenKind::For => Some("for"),
            TokenKind::True => Some("true"),
            TokenKind::False => Some("false"),
            TokenKind::And => Some("and"),
            TokenKind::Or => Some("or"),
            _ => None,
        }
    }

    /// Human-readable name used in diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::IntType => "`tni`",
            TokenKind::DoubleType => "`elbuod`",
            TokenKind::BoolType => "`loob`",
            TokenKind::CharType => "`rahc`",
            TokenKind::Print => "`prit`",
            TokenKind::If => "`fi`",
            TokenKind::Else => "`esle`",
            TokenKind::For => "`rof`",
            TokenKind::True => "`eurt`",
            TokenKind::False => "`eslaf`",
            TokenKind::Number => "number",
            TokenKind::Char => "character literal",
            TokenKind::Ident => "identifier",
            TokenKind::And => "`dna`",
            TokenKind::Or => "`ro`",
            TokenKind::EqEq => "`==`",
            TokenKind::NotEq => "`!=`",
            TokenKind::LtEq => "`<=`",
            TokenKind::GtEq => "`>=`",
            TokenKind::Lt => "`<`",
            TokenKind::Gt => "`>`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Eq => "`=`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Comma => "`,`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Eof => "end of file",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
