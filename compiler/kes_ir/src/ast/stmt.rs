//! Statement nodes.

use crate::{ClauseRange, ExprId, Pattern, Span, StmtId, StmtRange};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub const fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

/// `{ stmt* }`
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Block {
    pub stmts: StmtRange,
    pub span: Span,
}

/// What follows `else` in an `if` statement.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ElseBranch {
    Block(Block),
    /// `else if ...`
    If(StmtId),
}

/// Statement kinds.
///
/// Bodies are `Option` because a missing `{` is recoverable: the statement
/// is kept with its header and the body reported missing.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    Expr(ExprId),
    /// `let p = e` / `var p = e`
    Let {
        mutable: bool,
        pattern: Pattern,
        init: Option<ExprId>,
    },
    If {
        conditions: ClauseRange,
        then_block: Option<Block>,
        else_branch: Option<ElseBranch>,
    },
    Guard {
        conditions: ClauseRange,
        else_block: Option<Block>,
    },
    While {
        conditions: ClauseRange,
        body: Option<Block>,
    },
    Return(Option<ExprId>),
}

impl StmtKind {
    /// The condition list, for `if` / `guard` / `while`.
    pub fn conditions(&self) -> Option<ClauseRange> {
        match *self {
            StmtKind::If { conditions, .. }
            | StmtKind::Guard { conditions, .. }
            | StmtKind::While { conditions, .. } => Some(conditions),
            _ => None,
        }
    }
}

/// A parsed source file.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Module {
    pub stmts: StmtRange,
}
