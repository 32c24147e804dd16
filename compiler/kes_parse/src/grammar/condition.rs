//! Condition lists of `if` / `guard` / `while` headers.

use kes_diagnostic::ErrorCode;
use kes_ir::{ClauseId, ClauseKind, ClauseRange, ConditionClause, Pattern, TokenKind, TokenTag};
use tracing::debug;

use crate::recovery::header_end;
use crate::{ExprContext, Parser, StmtKeyword};

impl Parser<'_> {
    /// `clause (',' clause)*`
    pub(crate) fn parse_conditions(&mut self, owner: StmtKeyword) -> ClauseRange {
        let mut clauses = vec![self.parse_condition_clause(owner)];
        while self.eat(TokenTag::Comma).is_some() {
            clauses.push(self.parse_condition_clause(owner));
        }
        self.arena.alloc_clause_list(clauses)
    }

    /// Parse one clause of a condition header owned by `owner`.
    ///
    /// Dispatches on the first token: availability keywords start a query,
    /// `let`/`var` an optional binding, `case` a pattern match, and anything
    /// else is a boolean expression.
    pub fn parse_condition_clause(&mut self, owner: StmtKeyword) -> ClauseId {
        let marker = self.mark();
        let kind = match self.current_kind() {
            TokenKind::PoundAvailable | TokenKind::PoundUnavailable => {
                ClauseKind::Availability(self.parse_availability_query(header_end(owner)))
            }
            TokenKind::Let | TokenKind::Var => self.parse_optional_binding(owner),
            TokenKind::Case => self.parse_pattern_match(),
            _ => ClauseKind::Expr(self.parse_expr(ExprContext::Header(owner))),
        };

        let span = self.span_since(marker);
        debug!(%owner, %span, "condition clause");
        self.arena.alloc_clause(ConditionClause::new(kind, span))
    }

    fn parse_optional_binding(&mut self, owner: StmtKeyword) -> ClauseKind {
        let mutable = self.current_kind() == TokenKind::Var;
        self.advance();
        let pattern = self.parse_binding_pattern(&owner.to_string());
        let init = if self.eat(TokenTag::Eq).is_some() {
            Some(self.parse_expr(ExprContext::Variable))
        } else {
            None
        };
        ClauseKind::OptionalBinding {
            mutable,
            pattern,
            init,
        }
    }

    /// `case pattern = value`
    fn parse_pattern_match(&mut self) -> ClauseKind {
        self.advance();
        let errors = self.sink.error_count();
        let pattern = self.parse_expr_no_assign(ExprContext::Pattern);

        let init = if self.eat(TokenTag::Eq).is_some() {
            self.parse_expr(ExprContext::Variable)
        } else {
            // A broken pattern already explains the failure.
            if self.sink.error_count() == errors {
                self.error(
                    ErrorCode::E1011,
                    "expected '=' in 'case' condition",
                    self.current_span(),
                );
            }
            self.error_expr_here()
        };
        ClauseKind::PatternMatch { pattern, init }
    }

    /// `_` or an identifier. Consumes nothing on failure.
    ///
    /// `owner` names the construct in "expected pattern in <owner>".
    pub(crate) fn parse_binding_pattern(&mut self, owner: &str) -> Pattern {
        let span = self.current_span();
        match self.current_kind() {
            TokenKind::Underscore => {
                self.advance();
                Pattern::Wildcard(span)
            }
            TokenKind::Ident(name) => {
                self.advance();
                Pattern::Binding(name, span)
            }
            _ => {
                self.error(ErrorCode::E1012, format!("expected pattern in {owner}"), span);
                Pattern::Missing(span.start_point())
            }
        }
    }
}
