//! Token types produced by the lexer and consumed by the parser.

mod kind;
mod list;

pub use kind::{TokenKind, TokenTag};
pub use list::{TokenFlags, TokenList};

use std::fmt;

use super::Span;

/// A token with its span in the source.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Token, TokenKind};
    // Largest payload is Int(u64): 8 bytes + discriminant/padding.
    crate::static_assert_size!(TokenKind, 16);
    crate::static_assert_size!(Token, 24);
}

#[cfg(test)]
mod tests;
