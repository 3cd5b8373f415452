//! Token cursor for navigating the token stream.
//!
//! The statement evaluator drives execution by moving this cursor: it
//! advances through statements, skips untaken blocks, and rewinds to the
//! start of a loop body for each iteration.

use desrever_ir::{Span, Token, TokenKind, TokenList};
use tracing::trace;

use crate::ParseError;

/// Token index range of a block body.
///
/// `start` is the first token after `{`; `end` is the index of the
/// matching `}`. An empty body has `start == end`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BlockRange {
    pub start: usize,
    pub end: usize,
}

impl BlockRange {
    /// Position just past the closing `}`.
    #[inline]
    pub fn after(self) -> usize {
        self.end + 1
    }
}

/// Cursor for navigating tokens.
///
/// Invariant: the token list ends with `Eof` and `pos` is always a valid
/// index into it. `advance()` never moves past the end marker and
/// `set_position()` clamps to it.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList) -> Self {
        debug_assert!(
            tokens.as_slice().last().map(|t| t.kind) == Some(TokenKind::Eof),
            "token list must end with Eof"
        );
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub fn tokens(&self) -> &'a TokenList {
        self.tokens
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move the cursor to an absolute token index.
    ///
    /// Used to rewind to a loop body and to jump past skipped blocks.
    /// Out-of-range positions clamp to the end marker.
    pub fn set_position(&mut self, pos: usize) {
        let last = self.tokens.len().saturating_sub(1);
        debug_assert!(
            pos <= last,
            "cursor position {pos} out of bounds (max {last})"
        );
        trace!(from = self.pos, to = pos, "cursor jump");
        self.pos = pos.min(last);
    }

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Get the previous token's span.
    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Advance to the next token and return the consumed token.
    ///
    /// At the end marker the cursor stays put and keeps returning `Eof`.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        trace!(pos = self.pos, token = ?token, "advance");
        token
    }

    /// Consume the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> Option<&'a Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consume the current token if it is any of `kinds`.
    pub fn eat_any(&mut self, kinds: &[TokenKind]) -> Option<&'a Token> {
        if kinds.contains(&self.current_kind()) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consume a token of the given kind or fail naming it.
    pub fn expect(&mut self, kind: TokenKind) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::expected(kind, self.current()))
        }
    }

    /// Locate the block opening at the cursor without moving it.
    ///
    /// The cursor must be on `{`. Braces are counted flat, so nested
    /// blocks are treated as balanced pairs regardless of what they hold.
    pub fn block_range(&self) -> Result<BlockRange, ParseError> {
        let open = self.current();
        if open.kind != TokenKind::LBrace {
            return Err(ParseError::expected(TokenKind::LBrace, open));
        }

        let start = self.pos + 1;
        let mut depth = 1usize;
        for (offset, token) in self.tokens.as_slice()[start..].iter().enumerate() {
            match token.kind {
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => {
                    depth -= 1;
                    if depth == 0 {
                        let range = BlockRange {
                            start,
                            end: start + offset,
                        };
                        trace!(?range, "block range");
                        return Ok(range);
                    }
                }
                _ => {}
            }
        }
        Err(ParseError::unclosed_block(open.span))
    }
}
