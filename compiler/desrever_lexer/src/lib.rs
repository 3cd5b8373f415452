//! Lexer for Desrever using logos.
//!
//! Turns source text into a `TokenList`. Whitespace separates tokens and is
//! otherwise discarded; there are no comments. The first unrecognized
//! character aborts lexing, so a program with a lexical error never
//! executes any statement.

mod convert;
mod lex_error;
mod raw_token;

use desrever_ir::{Span, Token, TokenList};
use logos::Logos;
use tracing::{debug, trace};

pub use lex_error::{LexError, LexErrorKind};

use convert::convert_token;
use raw_token::RawToken;

/// Lex source code into a token list terminated by an end marker.
///
/// Each token keeps its exact source text. The end marker is placed at
/// `source.len()`.
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    let eof_pos = u32::try_from(source.len())
        .map_err(|_| LexError::source_too_large(source.len()))?;

    let mut result = TokenList::with_capacity(source.len() / 2 + 1);
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::try_from_range(logos.span())
            .map_err(|_| LexError::source_too_large(source.len()))?;
        let slice = logos.slice();

        match token_result {
            Ok(raw) => {
                let kind = convert_token(raw);
                trace!(?kind, lexeme = slice, %span, "token");
                result.push(Token::new(kind, slice, span));
            }
            Err(()) => {
                debug!(%span, text = slice, "unrecognized input");
                return Err(LexError::unrecognized(span, slice));
            }
        }
    }

    result.push(Token::eof(eof_pos));
    debug!(tokens = result.len(), "lexed source");
    Ok(result)
}
