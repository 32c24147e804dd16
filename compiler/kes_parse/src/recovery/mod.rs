//! Error recovery primitives.
//!
//! Token sets use a `u64` bitset over [`TokenTag`] for O(1) membership.
//! The two cursor-level scans here back every recovery path in the grammar:
//! - [`probe_resume`]: look ahead for a resumption token after a missing
//!   closing delimiter, restoring the cursor if none is found
//! - [`capture_span`]: consume leftover material up to a stop token so it can
//!   be reported verbatim as one diagnostic

use kes_diagnostic::{Diagnostic, ErrorCode};
use kes_ir::{Span, TokenKind, TokenTag};
use tracing::debug;

use crate::cursor::Cursor;
use crate::{Construct, Parser, StmtKeyword};

/// A set of token tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u64);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a tag (builder form for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, tag: TokenTag) -> Self {
        Self(self.0 | (1u64 << tag as u8))
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn contains_tag(&self, tag: TokenTag) -> bool {
        (self.0 & (1u64 << tag as u8)) != 0
    }

    #[inline]
    pub const fn contains(&self, kind: &TokenKind) -> bool {
        self.contains_tag(kind.tag())
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// Keywords that begin a statement.
pub const STMT_KEYWORDS: TokenSet = TokenSet::new()
    .with(TokenTag::If)
    .with(TokenTag::Guard)
    .with(TokenTag::While)
    .with(TokenTag::Let)
    .with(TokenTag::Var)
    .with(TokenTag::Return);

/// Tokens that can begin an expression.
pub const EXPR_START: TokenSet = TokenSet::new()
    .with(TokenTag::Int)
    .with(TokenTag::True)
    .with(TokenTag::False)
    .with(TokenTag::Ident)
    .with(TokenTag::Underscore)
    .with(TokenTag::LParen)
    .with(TokenTag::Bang)
    .with(TokenTag::Minus)
    .with(TokenTag::Error);

/// Tokens that can begin a statement.
pub const STMT_START: TokenSet = STMT_KEYWORDS.union(EXPR_START);

/// Connectives that have no meaning inside an availability list.
pub const AVAILABILITY_ILLEGAL_OPS: TokenSet = TokenSet::new()
    .with(TokenTag::GtEq)
    .with(TokenTag::PipePipe)
    .with(TokenTag::AmpAmp);

/// Resumption point after an unterminated condition header.
pub const BLOCK_START: TokenSet = TokenSet::new().with(TokenTag::LBrace);

/// A `guard` header ends at `else` as well as at a body.
pub const GUARD_HEADER_END: TokenSet = BLOCK_START.with(TokenTag::Else);

/// Tokens that end the condition header owned by `owner`.
pub const fn header_end(owner: StmtKeyword) -> TokenSet {
    match owner {
        StmtKeyword::Guard => GUARD_HEADER_END,
        StmtKeyword::If | StmtKeyword::While => BLOCK_START,
    }
}

/// Scan forward for a token in `resume` at nesting depth zero.
///
/// Nested `()`, `[]` and `{}` groups are skipped whole. The scan stops
/// without success at `Eof`, at an unmatched `}`, or at a statement keyword
/// that begins a line. On success the cursor rests on the found token and
/// `true` is returned; otherwise the cursor is left where it started.
pub fn probe_resume(cursor: &mut Cursor<'_>, resume: TokenSet) -> bool {
    if resume.is_empty() {
        return false;
    }
    let start = cursor.position();
    let mut depth = 0u32;

    while !cursor.is_at_end() {
        let kind = cursor.current_kind();
        if depth == 0 {
            if resume.contains(&kind) {
                return true;
            }
            if cursor.at_line_start() && STMT_KEYWORDS.contains(&kind) {
                break;
            }
        }
        if kind.is_open_delimiter() {
            depth += 1;
        } else if kind.is_close_delimiter() {
            if depth == 0 {
                if kind == TokenKind::RBrace {
                    break;
                }
            } else {
                depth -= 1;
            }
        }
        cursor.advance();
    }

    cursor.set_position(start);
    false
}

/// Consume tokens up to (not including) the first stop token at depth zero.
///
/// Also stops at `Eof` and at a closing delimiter with no opener inside the
/// captured run. Past the first token it stops at a depth-zero statement
/// keyword that begins a line, and, when `line_sensitive`, at any depth-zero
/// token that begins a line. Returns the covering span of everything
/// consumed, or `None` if nothing was.
pub fn capture_span(cursor: &mut Cursor<'_>, stop: TokenSet, line_sensitive: bool) -> Option<Span> {
    let mut depth = 0u32;
    let mut covered: Option<Span> = None;

    while !cursor.is_at_end() {
        let kind = cursor.current_kind();
        if depth == 0 {
            if stop.contains(&kind) || kind.is_close_delimiter() {
                break;
            }
            if covered.is_some()
                && cursor.at_line_start()
                && (line_sensitive || STMT_KEYWORDS.contains(&kind))
            {
                break;
            }
        }
        if kind.is_open_delimiter() {
            depth += 1;
        } else if kind.is_close_delimiter() {
            depth -= 1;
        }
        let span = cursor.advance().span;
        covered = Some(covered.map_or(span, |c| c.merge(span)));
    }

    covered
}

impl Parser<'_> {
    /// Report that `construct`, opened at `open_span`, was never closed.
    ///
    /// Emits one diagnostic at the current token with one note at the
    /// opener, then probes for `resume`. Returns whether the probe moved the
    /// cursor onto a resumption token.
    pub(crate) fn recover_unclosed(
        &mut self,
        construct: Construct,
        open_span: Span,
        resume: TokenSet,
    ) -> bool {
        let (open, close) = match construct {
            Construct::Block => ('{', '}'),
            _ => ('(', ')'),
        };
        let code = match construct {
            Construct::Availability => ErrorCode::E1002,
            _ => ErrorCode::E1003,
        };
        let at = self.current_span();
        self.emit(
            Diagnostic::error(code)
                .with_message(format!(
                    "expected '{close}' to end {}",
                    construct.closing_name()
                ))
                .with_span(at)
                .with_note(open_span, format!("to match this opening '{open}'")),
        );

        let found = probe_resume(&mut self.cursor, resume);
        debug!(?construct, %at, found, "unclosed delimiter");
        found
    }

    /// Capture leftover material owned by `construct` and report it verbatim
    /// as one diagnostic. Returns the captured span, if anything was captured.
    pub(crate) fn report_unexpected(
        &mut self,
        construct: Construct,
        stop: TokenSet,
        line_sensitive: bool,
    ) -> Option<Span> {
        let span = capture_span(&mut self.cursor, stop, line_sensitive)?;
        let text = self.source_text(span);
        debug!(?construct, %span, text, "captured unexpected code");
        self.error(construct.error_code(), construct.unexpected_message(text), span);
        Some(span)
    }

    /// Consume a single unmatched closing delimiter and report it.
    pub(crate) fn report_stray_closer(&mut self, construct: Construct) {
        let span = self.advance();
        let text = self.source_text(span);
        self.error(construct.error_code(), construct.unexpected_message(text), span);
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
