//! Token list with per-token layout flags.

use std::ops::Index;

use super::Token;

bitflags::bitflags! {
    /// Whitespace/trivia context preceding a token.
    ///
    /// The parser never sees trivia tokens; these flags are how newline-
    /// sensitive rules (statement separation, same-line calls) see layout.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TokenFlags: u8 {
        /// Spaces or tabs preceded this token.
        const SPACE_BEFORE = 1 << 0;
        /// A newline preceded this token.
        const NEWLINE_BEFORE = 1 << 1;
        /// A comment preceded this token.
        const TRIVIA_BEFORE = 1 << 2;
        /// First token on its line (or first token in the file).
        const LINE_START = 1 << 3;
    }
}

impl TokenFlags {
    #[inline]
    pub const fn has_newline_before(self) -> bool {
        self.contains(TokenFlags::NEWLINE_BEFORE)
    }

    #[inline]
    pub const fn is_line_start(self) -> bool {
        self.contains(TokenFlags::LINE_START)
    }
}

/// A list of tokens plus a parallel array of [`TokenFlags`].
///
/// Invariant once produced by the lexer: non-empty, last token is `Eof`.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
    /// `flags[i]` describes the trivia before `tokens[i]`.
    flags: Vec<TokenFlags>,
}

impl TokenList {
    /// Create a new empty token list.
    #[inline]
    pub fn new() -> Self {
        TokenList {
            tokens: Vec::new(),
            flags: Vec::new(),
        }
    }

    /// Create a new token list with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
            flags: Vec::with_capacity(capacity),
        }
    }

    /// Push a token with default (empty) flags.
    #[inline]
    pub fn push(&mut self, token: Token) {
        self.push_with_flags(token, TokenFlags::empty());
    }

    /// Push a token with explicit flags.
    #[inline]
    pub fn push_with_flags(&mut self, token: Token, flags: TokenFlags) {
        self.tokens.push(token);
        self.flags.push(flags);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Flags for the token at `index` (empty if out of range).
    #[inline]
    pub fn flags_at(&self, index: usize) -> TokenFlags {
        self.flags.get(index).copied().unwrap_or_default()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}
