//! Token cursor for navigating the token stream.
//!
//! Provides token access, lookahead, and consumption. The cursor never moves
//! past the trailing `Eof` token.

use kes_ir::{Span, Token, TokenFlags, TokenKind, TokenList, TokenTag};
use tracing::trace;

/// Cursor for navigating tokens.
#[derive(Clone)]
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    ///
    /// The list must end with `Eof`, as [`kes_lexer::lex`] guarantees.
    pub fn new(tokens: &'a TokenList) -> Self {
        debug_assert!(
            tokens.as_slice().last().map(|t| t.kind) == Some(TokenKind::Eof),
            "token list must end with Eof"
        );
        Cursor { tokens, pos: 0 }
    }

    /// Current position. Compare before/after to see whether tokens were
    /// consumed.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move the cursor directly (used to undo a failed recovery probe).
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(
            pos < self.tokens.len(),
            "cursor position {} out of bounds (max {})",
            pos,
            self.tokens.len()
        );
        self.pos = pos;
    }

    /// Get the current token.
    ///
    /// Invariant: the position is always in `0..tokens.len()` and the last
    /// token is `Eof`.
    #[inline]
    pub fn current(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_tag(&self) -> TokenTag {
        self.current().kind.tag()
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    #[inline]
    pub fn current_flags(&self) -> TokenFlags {
        self.tokens.flags_at(self.pos)
    }

    /// Span of the previously consumed token, or `DUMMY` at the start.
    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    /// Token kind `n` positions ahead (0 = current). `Eof` past the end.
    #[inline]
    pub fn peek_kind_at(&self, n: usize) -> TokenKind {
        self.tokens
            .get(self.pos + n)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_tag() == TokenTag::Eof
    }

    #[inline]
    pub fn check(&self, tag: TokenTag) -> bool {
        self.current_tag() == tag
    }

    /// True if the current token is the first on its line.
    #[inline]
    pub fn at_line_start(&self) -> bool {
        self.current_flags().is_line_start()
    }

    /// True if a newline separates the current token from the previous one.
    #[inline]
    pub fn has_newline_before(&self) -> bool {
        self.current_flags().has_newline_before()
    }

    /// Consume the current token and return it. Stays put on `Eof`.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !self.is_at_end() {
            trace!(pos = self.pos, kind = ?token.kind, span = %token.span, "advance");
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it has the given tag.
    pub fn eat(&mut self, tag: TokenTag) -> Option<&'a Token> {
        if self.check(tag) {
            Some(self.advance())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests;
