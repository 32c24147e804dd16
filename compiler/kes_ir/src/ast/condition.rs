//! Condition clauses of `if` / `guard` / `while` headers.

use crate::{AvailabilityQuery, ExprId, Name, Span};

/// Binding pattern used by `let`/`var` declarations and optional bindings.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Pattern {
    /// `_`
    Wildcard(Span),
    /// A plain identifier.
    Binding(Name, Span),
    /// Nothing usable was found; a diagnostic was recorded.
    Missing(Span),
}

impl Pattern {
    pub fn span(self) -> Span {
        match self {
            Pattern::Wildcard(span) | Pattern::Binding(_, span) | Pattern::Missing(span) => span,
        }
    }
}

/// One clause of a multi-clause condition.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ConditionClause {
    pub kind: ClauseKind,
    pub span: Span,
}

impl ConditionClause {
    pub fn new(kind: ClauseKind, span: Span) -> Self {
        ConditionClause { kind, span }
    }

    /// The availability query, if this clause is one.
    pub fn as_availability(&self) -> Option<&AvailabilityQuery> {
        match &self.kind {
            ClauseKind::Availability(query) => Some(query),
            _ => None,
        }
    }
}

/// Clause kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ClauseKind {
    /// A boolean expression: `x != 2`.
    Expr(ExprId),
    /// `let x = value` / `var x = value` / `let x`.
    OptionalBinding {
        mutable: bool,
        pattern: Pattern,
        init: Option<ExprId>,
    },
    /// `case pattern = value`.
    PatternMatch { pattern: ExprId, init: ExprId },
    /// `#available(...)` / `#unavailable(...)`.
    Availability(AvailabilityQuery),
}
