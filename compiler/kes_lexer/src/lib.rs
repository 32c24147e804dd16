//! Lexer for Kestrel using logos with string interning.
//!
//! Produces a [`TokenList`] with no trivia tokens. Whitespace, newlines and
//! comments are folded into the [`TokenFlags`] of the following token, which
//! is how the parser sees line structure.

mod raw_token;

use kes_ir::{Span, SpanError, StringInterner, Token, TokenFlags, TokenKind, TokenList};
use logos::Logos;
use tracing::trace;

use raw_token::RawToken;

/// Lex source code into a `TokenList`.
///
/// The list always ends with an `Eof` token. Characters no rule matches
/// (and integer literals that overflow `u64`) become `Error` tokens.
///
/// # Panics
/// Panics if the source exceeds `u32::MAX` bytes. Use [`try_lex`] to get
/// the error instead.
pub fn lex(source: &str, interner: &StringInterner) -> TokenList {
    try_lex(source, interner).unwrap_or_else(|e| panic!("{e}"))
}

/// Lex source code, failing only when spans cannot address the source.
pub fn try_lex(source: &str, interner: &StringInterner) -> Result<TokenList, SpanError> {
    let eof_span = Span::try_from_range(source.len()..source.len())?;

    let mut result = TokenList::with_capacity(source.len() / 3 + 1);
    let mut logos = RawToken::lexer(source);
    let mut pending = TokenFlags::LINE_START;
    let mut last_end = 0usize;

    while let Some(token_result) = logos.next() {
        let range = logos.span();
        if range.start > last_end {
            pending |= TokenFlags::SPACE_BEFORE;
        }
        last_end = range.end;
        let span = Span::try_from_range(range)?;

        let kind = match token_result {
            Ok(RawToken::LineComment) => {
                pending |= TokenFlags::TRIVIA_BEFORE;
                continue;
            }
            Ok(RawToken::Newline) => {
                pending |= TokenFlags::NEWLINE_BEFORE | TokenFlags::LINE_START;
                continue;
            }
            Ok(raw) => convert_token(raw, logos.slice(), interner),
            Err(()) => TokenKind::Error,
        };

        trace!(?kind, %span, flags = ?pending, "lexed token");
        result.push_with_flags(Token::new(kind, span), pending);
        pending = TokenFlags::empty();
    }

    if source.len() > last_end {
        pending |= TokenFlags::SPACE_BEFORE;
    }
    result.push_with_flags(Token::new(TokenKind::Eof, eof_span), pending);
    Ok(result)
}

/// Convert a raw token to a `TokenKind`, interning names.
fn convert_token(raw: RawToken, slice: &str, interner: &StringInterner) -> TokenKind {
    match raw {
        RawToken::Int(n) => TokenKind::Int(n),
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),
        // Stored without the `#`.
        RawToken::PoundIdent => TokenKind::PoundIdent(interner.intern(&slice[1..])),

        // Keywords
        RawToken::If => TokenKind::If,
        RawToken::Guard => TokenKind::Guard,
        RawToken::While => TokenKind::While,
        RawToken::Else => TokenKind::Else,
        RawToken::Let => TokenKind::Let,
        RawToken::Var => TokenKind::Var,
        RawToken::Case => TokenKind::Case,
        RawToken::Return => TokenKind::Return,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::PoundAvailable => TokenKind::PoundAvailable,
        RawToken::PoundUnavailable => TokenKind::PoundUnavailable,

        // Delimiters
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,

        // Punctuation
        RawToken::Comma => TokenKind::Comma,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Question => TokenKind::Question,
        RawToken::Arrow => TokenKind::Arrow,
        RawToken::Underscore => TokenKind::Underscore,

        // Operators
        RawToken::Eq => TokenKind::Eq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Bang => TokenKind::Bang,
        RawToken::AmpAmp => TokenKind::AmpAmp,
        RawToken::PipePipe => TokenKind::PipePipe,

        // Trivia is filtered before conversion.
        RawToken::LineComment | RawToken::Newline => TokenKind::Error,
    }
}
