//! Kestrel IR - shared front-end data structures.
//!
//! This crate contains the types every other front-end crate agrees on:
//! - Spans for source locations
//! - Names for interned identifiers
//! - Tokens and `TokenList` for lexer output
//! - AST nodes stored flat in a `NodeArena`
//! - The availability-condition data model (`AvailabilityQuery`,
//!   `PlatformEntry`, `VersionTuple`)
//!
//! # Design Philosophy
//!
//! - **Intern identifiers**: strings become `Name(u32)`
//! - **Flatten the tree**: no `Box<Expr>`, children are `ExprId(u32)` indices
//!   so recovery can re-parent nodes without moving them

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod interner;
mod name;
mod span;
mod token;

pub use ast::{
    AvailabilityQuery, BinaryOp, Block, ClauseId, ClauseKind, ClauseRange, ConditionClause, ElseBranch,
    Expr, ExprId, ExprKind, ExprRange, Module, NodeArena, Pattern, PlatformEntry, QueryStatus,
    Stmt, StmtId, StmtKind, StmtRange, UnaryOp, VersionTuple,
};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use span::{Span, SpanError};
pub use token::{Token, TokenFlags, TokenKind, TokenList, TokenTag};
