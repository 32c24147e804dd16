//! Grammar productions.
//!
//! Each submodule adds `impl Parser` blocks for one area of the grammar.

mod availability;
mod condition;
mod expr;
mod stmt;

use kes_diagnostic::ErrorCode;
use kes_ir::{Expr, ExprId, ExprKind, Span};

use crate::Parser;

/// Start of a node: token position plus the token's span.
#[derive(Clone, Copy, Debug)]
struct Marker {
    pos: usize,
    span: Span,
}

impl Parser<'_> {
    fn mark(&self) -> Marker {
        Marker {
            pos: self.cursor.position(),
            span: self.current_span(),
        }
    }

    /// Span from the marker to the last consumed token. A point at the
    /// marker when nothing was consumed.
    fn span_since(&self, marker: Marker) -> Span {
        if self.cursor.position() > marker.pos {
            marker.span.merge(self.previous_span())
        } else {
            marker.span.start_point()
        }
    }

    fn alloc_expr(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, span))
    }

    /// Error placeholder at the current token, consuming nothing.
    fn error_expr_here(&mut self) -> ExprId {
        let at = self.current_span().start_point();
        self.alloc_expr(ExprKind::Error, at)
    }

    /// Consume a lexer `Error` token and report it. Digits mean an integer
    /// literal that overflowed, anything else a character the lexer rejected.
    fn report_invalid_token(&mut self) -> Span {
        let span = self.advance();
        let text = self.source_text(span);
        let message = if text.starts_with(|c: char| c.is_ascii_digit()) {
            format!("integer literal '{text}' is too large")
        } else {
            format!("invalid character '{text}'")
        };
        self.error(ErrorCode::E0001, message, span);
        span
    }
}
