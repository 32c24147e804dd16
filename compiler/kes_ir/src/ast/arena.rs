//! Arena storage for the flat AST.

use super::{ClauseId, ClauseRange, ExprId, ExprRange, StmtId, StmtRange};
use crate::{AvailabilityQuery, ConditionClause, Expr, Stmt};

/// Contiguous storage for every node of one parse.
///
/// Child references are ids; child lists are ranges into the `*_lists`
/// vectors. Callers collect a list's ids first and allocate the range once
/// all of them exist, so nested lists never interleave.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct NodeArena {
    exprs: Vec<Expr>,
    expr_lists: Vec<ExprId>,
    stmts: Vec<Stmt>,
    stmt_lists: Vec<StmtId>,
    clauses: Vec<ConditionClause>,
    clause_lists: Vec<ClauseId>,
}

#[allow(clippy::cast_possible_truncation)]
fn next_index(len: usize) -> u32 {
    debug_assert!(u32::try_from(len).is_ok(), "arena exceeded u32::MAX nodes");
    len as u32
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size storage from the source length.
    /// Heuristic: roughly one node per 16 bytes.
    pub fn with_capacity(source_len: usize) -> Self {
        let estimated = source_len / 16;
        NodeArena {
            exprs: Vec::with_capacity(estimated),
            expr_lists: Vec::with_capacity(estimated / 4),
            stmts: Vec::with_capacity(estimated / 4),
            stmt_lists: Vec::with_capacity(estimated / 4),
            clauses: Vec::with_capacity(estimated / 8),
            clause_lists: Vec::with_capacity(estimated / 8),
        }
    }

    // ===== Expressions =====

    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(next_index(self.exprs.len()));
        self.exprs.push(expr);
        id
    }

    /// # Panics
    /// Panics if `id` did not come from this arena.
    #[inline]
    #[track_caller]
    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    pub fn alloc_expr_list(&mut self, ids: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = next_index(self.expr_lists.len());
        self.expr_lists.extend(ids);
        ExprRange::new(start, next_index(self.expr_lists.len()) - start)
    }

    #[inline]
    #[track_caller]
    pub fn expr_list(&self, range: ExprRange) -> &[ExprId] {
        &self.expr_lists[range.to_range()]
    }

    // ===== Statements =====

    #[inline]
    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(next_index(self.stmts.len()));
        self.stmts.push(stmt);
        id
    }

    /// # Panics
    /// Panics if `id` did not come from this arena.
    #[inline]
    #[track_caller]
    pub fn stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    #[inline]
    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }

    pub fn alloc_stmt_list(&mut self, ids: impl IntoIterator<Item = StmtId>) -> StmtRange {
        let start = next_index(self.stmt_lists.len());
        self.stmt_lists.extend(ids);
        StmtRange::new(start, next_index(self.stmt_lists.len()) - start)
    }

    #[inline]
    #[track_caller]
    pub fn stmt_list(&self, range: StmtRange) -> &[StmtId] {
        &self.stmt_lists[range.to_range()]
    }

    // ===== Condition clauses =====

    #[inline]
    pub fn alloc_clause(&mut self, clause: ConditionClause) -> ClauseId {
        let id = ClauseId::new(next_index(self.clauses.len()));
        self.clauses.push(clause);
        id
    }

    /// # Panics
    /// Panics if `id` did not come from this arena.
    #[inline]
    #[track_caller]
    pub fn clause(&self, id: ClauseId) -> &ConditionClause {
        &self.clauses[id.index()]
    }

    pub fn alloc_clause_list(&mut self, ids: impl IntoIterator<Item = ClauseId>) -> ClauseRange {
        let start = next_index(self.clause_lists.len());
        self.clause_lists.extend(ids);
        ClauseRange::new(start, next_index(self.clause_lists.len()) - start)
    }

    #[inline]
    #[track_caller]
    pub fn clause_list(&self, range: ClauseRange) -> &[ClauseId] {
        &self.clause_lists[range.to_range()]
    }

    /// Every availability query in allocation order.
    pub fn availability_queries(&self) -> impl Iterator<Item = &AvailabilityQuery> {
        self.clauses.iter().filter_map(ConditionClause::as_availability)
    }
}
