//! Token kinds and their payload-free tags.

use crate::Name;

/// Token kinds.
///
/// Payload-carrying variants (`Ident`, `Int`, `PoundIdent`) store interned or
/// numeric data so tokens stay `Copy`-cheap to compare.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Keywords
    If,
    Guard,
    While,
    Else,
    Let,
    Var,
    Case,
    Return,
    True,
    False,

    // Pound keywords
    /// `#available`
    PoundAvailable,
    /// `#unavailable`
    PoundUnavailable,
    /// Any other `#identifier`.
    PoundIdent(Name),

    // Literals and names
    Ident(Name),
    Int(u64),
    Underscore,

    // Delimiters
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    // Punctuation
    Comma,
    Dot,
    Colon,
    Semicolon,
    Question,
    Arrow,

    // Operators
    Eq,
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Bang,
    AmpAmp,
    PipePipe,

    /// Unrecognized input.
    Error,
    /// End of file. The lexer always appends exactly one.
    Eof,
}

/// Payload-free discriminant of a [`TokenKind`].
///
/// Used for bitset membership (`TokenSet` in the parser) and cheap dispatch.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TokenTag {
    If,
    Guard,
    While,
    Else,
    Let,
    Var,
    Case,
    Return,
    True,
    False,
    PoundAvailable,
    PoundUnavailable,
    PoundIdent,
    Ident,
    Int,
    Underscore,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Dot,
    Colon,
    Semicolon,
    Question,
    Arrow,
    Eq,
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Bang,
    AmpAmp,
    PipePipe,
    Error,
    Eof,
}

impl TokenTag {
    /// Largest discriminant value. Token sets are `u64` bitsets.
    pub const MAX_DISCRIMINANT: u8 = TokenTag::Eof as u8;
}

const _: () = assert!(
    TokenTag::MAX_DISCRIMINANT < 64,
    "TokenSet uses a u64 bitset; all tags must be < 64"
);

impl TokenKind {
    /// The payload-free tag for this kind.
    pub const fn tag(&self) -> TokenTag {
        match self {
            TokenKind::If => TokenTag::If,
            TokenKind::Guard => TokenTag::Guard,
            TokenKind::While => TokenTag::While,
            TokenKind::Else => TokenTag::Else,
            TokenKind::Let => TokenTag::Let,
            TokenKind::Var => TokenTag::Var,
            TokenKind::Case => TokenTag::Case,
            TokenKind::Return => TokenTag::Return,
            TokenKind::True => TokenTag::True,
            TokenKind::False => TokenTag::False,
            TokenKind::PoundAvailable => TokenTag::PoundAvailable,
            TokenKind::PoundUnavailable => TokenTag::PoundUnavailable,
            TokenKind::PoundIdent(_) => TokenTag::PoundIdent,
            TokenKind::Ident(_) => TokenTag::Ident,
            TokenKind::Int(_) => TokenTag::Int,
            TokenKind::Underscore => TokenTag::Underscore,
            TokenKind::LParen => TokenTag::LParen,
            TokenKind::RParen => TokenTag::RParen,
            TokenKind::LBrace => TokenTag::LBrace,
            TokenKind::RBrace => TokenTag::RBrace,
            TokenKind::LBracket => TokenTag::LBracket,
            TokenKind::RBracket => TokenTag::RBracket,
            TokenKind::Comma => TokenTag::Comma,
            TokenKind::Dot => TokenTag::Dot,
            TokenKind::Colon => TokenTag::Colon,
            TokenKind::Semicolon => TokenTag::Semicolon,
            TokenKind::Question => TokenTag::Question,
            TokenKind::Arrow => TokenTag::Arrow,
            TokenKind::Eq => TokenTag::Eq,
            TokenKind::EqEq => TokenTag::EqEq,
            TokenKind::NotEq => TokenTag::NotEq,
            TokenKind::Lt => TokenTag::Lt,
            TokenKind::LtEq => TokenTag::LtEq,
            TokenKind::Gt => TokenTag::Gt,
            TokenKind::GtEq => TokenTag::GtEq,
            TokenKind::Plus => TokenTag::Plus,
            TokenKind::Minus => TokenTag::Minus,
            TokenKind::Star => TokenTag::Star,
            TokenKind::Slash => TokenTag::Slash,
            TokenKind::Percent => TokenTag::Percent,
            TokenKind::Bang => TokenTag::Bang,
            TokenKind::AmpAmp => TokenTag::AmpAmp,
            TokenKind::PipePipe => TokenTag::PipePipe,
            TokenKind::Error => TokenTag::Error,
            TokenKind::Eof => TokenTag::Eof,
        }
    }

    /// True for either spelling of the availability keyword.
    #[inline]
    pub const fn is_availability_keyword(&self) -> bool {
        matches!(self, TokenKind::PoundAvailable | TokenKind::PoundUnavailable)
    }

    /// True for tokens that open a nesting level.
    #[inline]
    pub const fn is_open_delimiter(&self) -> bool {
        matches!(
            self,
            TokenKind::LParen | TokenKind::LBrace | TokenKind::LBracket
        )
    }

    /// True for tokens that close a nesting level.
    #[inline]
    pub const fn is_close_delimiter(&self) -> bool {
        matches!(
            self,
            TokenKind::RParen | TokenKind::RBrace | TokenKind::RBracket
        )
    }

    /// Human-readable name for logging.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::If => "`if`",
            TokenKind::Guard => "`guard`",
            TokenKind::While => "`while`",
            TokenKind::Else => "`else`",
            TokenKind::Let => "`let`",
            TokenKind::Var => "`var`",
            TokenKind::Case => "`case`",
            TokenKind::Return => "`return`",
            TokenKind::True => "`true`",
            TokenKind::False => "`false`",
            TokenKind::PoundAvailable => "`#available`",
            TokenKind::PoundUnavailable => "`#unavailable`",
            TokenKind::PoundIdent(_) => "pound keyword",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Int(_) => "integer",
            TokenKind::Underscore => "`_`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::Comma => "`,`",
            TokenKind::Dot => "`.`",
            TokenKind::Colon => "`:`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Question => "`?`",
            TokenKind::Arrow => "`->`",
            TokenKind::Eq => "`=`",
            TokenKind::EqEq => "`==`",
            TokenKind::NotEq => "`!=`",
            TokenKind::Lt => "`<`",
            TokenKind::LtEq => "`<=`",
            TokenKind::Gt => "`>`",
            TokenKind::GtEq => "`>=`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Percent => "`%`",
            TokenKind::Bang => "`!`",
            TokenKind::AmpAmp => "`&&`",
            TokenKind::PipePipe => "`||`",
            TokenKind::Error => "invalid token",
            TokenKind::Eof => "end of file",
        }
    }
}
