//! Availability queries.
//!
//! ```text
//! query   := ('#available' | '#unavailable') '(' entries? ')'
//! entries := entry (',' entry)* ','?
//! entry   := '*' | IDENT version?
//! version := INT ('.' INT){0,2}
//! ```
//!
//! Recovery is local: a bad entry never stops the query from being
//! produced, and a missing `)` is resolved by probing ahead for the token
//! that ends the owning header (`{`, or `else` in a `guard`).

use kes_diagnostic::ErrorCode;
use kes_ir::{AvailabilityQuery, PlatformEntry, QueryStatus, TokenKind, TokenTag, VersionTuple};
use tracing::debug;

use crate::recovery::AVAILABILITY_ILLEGAL_OPS;
use crate::{Construct, Parser, TokenSet};

impl Parser<'_> {
    /// Parse a query. The cursor must be on `#available` or `#unavailable`.
    ///
    /// `resume` is where the owning header ends. A missing `)` resumes there.
    pub(crate) fn parse_availability_query(&mut self, resume: TokenSet) -> AvailabilityQuery {
        let marker = self.mark();
        let negated = self.current_kind() == TokenKind::PoundUnavailable;
        self.advance();

        let mut entries = Vec::new();
        let Some(open) = self.eat(TokenTag::LParen) else {
            self.error(
                ErrorCode::E1001,
                "expected '(' in availability condition",
                self.current_span(),
            );
            return AvailabilityQuery {
                entries,
                negated,
                status: QueryStatus::Incomplete,
                span: self.span_since(marker),
            };
        };

        self.parse_platform_entries(&mut entries, resume);

        let status = if self.eat(TokenTag::RParen).is_some() {
            QueryStatus::Done
        } else {
            self.recover_unclosed(Construct::Availability, open, resume);
            QueryStatus::Incomplete
        };

        debug!(negated, entries = entries.len(), ?status, "availability query");
        AvailabilityQuery {
            entries,
            negated,
            status,
            span: self.span_since(marker),
        }
    }

    /// Entry list between the parentheses. Stops in front of `)` or at the
    /// first token it cannot place.
    fn parse_platform_entries(&mut self, entries: &mut Vec<PlatformEntry>, resume: TokenSet) {
        if self.check(TokenTag::RParen) {
            self.error(ErrorCode::E1004, "expected platform name", self.current_span());
            return;
        }

        loop {
            if self.report_illegal_operator(resume) {
                return;
            }

            let marker = self.mark();
            match self.current_kind() {
                TokenKind::Star => {
                    let span = self.advance();
                    entries.push(PlatformEntry::wildcard(span));
                }
                TokenKind::Ident(name) => {
                    self.advance();
                    let version = self.parse_version();
                    entries.push(PlatformEntry::platform(name, version, self.span_since(marker)));
                }
                TokenKind::Int(_) => {
                    self.error(ErrorCode::E1004, "expected platform name", self.current_span());
                    let version = self.parse_version();
                    entries.push(PlatformEntry::unnamed(version, self.span_since(marker)));
                }
                // Trailing comma, or an unterminated list.
                TokenKind::RParen | TokenKind::Eof => return,
                kind if resume.contains(&kind) => return,
                _ => {
                    self.error(ErrorCode::E1004, "expected platform name", self.current_span());
                    return;
                }
            }

            if self.report_illegal_operator(resume) {
                return;
            }
            if self.eat(TokenTag::Comma).is_none() {
                return;
            }
        }
    }

    /// `major(.minor(.patch)?)?`, absent unless the cursor is on an integer.
    ///
    /// A lexer error token in number position is reported and consumed. In
    /// major position the version is then absent, in component position the
    /// components before it are kept.
    fn parse_version(&mut self) -> Option<VersionTuple> {
        let major = match self.current_kind() {
            TokenKind::Int(major) => major,
            TokenKind::Error => {
                self.report_invalid_token();
                return None;
            }
            _ => return None,
        };
        self.advance();

        let mut version = VersionTuple::new(major);
        while !version.is_full() && self.check(TokenTag::Dot) {
            self.advance();
            match self.current_kind() {
                TokenKind::Int(component) => {
                    self.advance();
                    version.push(component);
                }
                TokenKind::Error => {
                    self.report_invalid_token();
                    break;
                }
                _ => {
                    self.error(ErrorCode::E1005, "expected version number", self.current_span());
                    break;
                }
            }
        }
        Some(version)
    }

    /// `>=`, `||` and `&&` abandon the entry list. Everything up to the
    /// closing `)` or the end of the header is reported as one diagnostic.
    fn report_illegal_operator(&mut self, resume: TokenSet) -> bool {
        if !AVAILABILITY_ILLEGAL_OPS.contains(&self.current_kind()) {
            return false;
        }
        let stop = resume.with(TokenTag::RParen);
        self.report_unexpected(Construct::Availability, stop, false);
        true
    }
}
