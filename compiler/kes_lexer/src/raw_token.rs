//! Raw token definition.
//!
//! `RawToken` is the logos-derived tokenizer output before interning and
//! conversion to [`TokenKind`](kes_ir::TokenKind).

use logos::Logos;

/// Parse a decimal integer, skipping `_` separators. `None` on overflow.
#[inline]
pub(crate) fn parse_int_skip_underscores(s: &str) -> Option<u64> {
    let mut result: u64 = 0;
    for c in s.chars() {
        if c == '_' {
            continue;
        }
        let digit = c.to_digit(10)?;
        result = result.checked_mul(10)?;
        result = result.checked_add(u64::from(digit))?;
    }
    Some(result)
}

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r]+")] // Horizontal whitespace; gaps become SPACE_BEFORE
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("\n")]
    Newline,

    // Keywords
    #[token("if")]
    If,
    #[token("guard")]
    Guard,
    #[token("while")]
    While,
    #[token("else")]
    Else,
    #[token("let")]
    Let,
    #[token("var")]
    Var,
    #[token("case")]
    Case,
    #[token("return")]
    Return,
    #[token("true")]
    True,
    #[token("false")]
    False,

    // Pound keywords. Exact spellings outrank the generic pattern.
    #[token("#available")]
    PoundAvailable,
    #[token("#unavailable")]
    PoundUnavailable,
    #[regex(r"#[a-zA-Z_][a-zA-Z0-9_]*")]
    PoundIdent,

    // Delimiters
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    // Punctuation
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token("?")]
    Question,
    #[token("->")]
    Arrow,
    #[token("_", priority = 3)]
    Underscore,

    // Operators
    #[token("=")]
    Eq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("!")]
    Bang,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,

    // Decimal only; `10.51` is Int Dot Int.
    #[regex(r"[0-9][0-9_]*", |lex| parse_int_skip_underscores(lex.slice()))]
    Int(u64),

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}
