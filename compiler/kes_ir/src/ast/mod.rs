//! Flat AST.
//!
//! Nodes live in a [`NodeArena`] and refer to each other by typed `u32`
//! indices. Lists of children are contiguous ranges into per-kind list
//! storage, so a node never owns its children directly.

mod arena;
mod availability;
mod condition;
mod expr;
mod stmt;

pub use arena::NodeArena;
pub use availability::{AvailabilityQuery, PlatformEntry, QueryStatus, VersionTuple};
pub use condition::{ClauseKind, ConditionClause, Pattern};
pub use expr::{BinaryOp, Expr, ExprKind, UnaryOp};
pub use stmt::{Block, ElseBranch, Module, Stmt, StmtKind};

use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub const fn new(index: u32) -> Self {
                $name(index)
            }

            /// Index into the arena.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

macro_rules! define_range {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
        pub struct $name {
            pub start: u32,
            pub len: u32,
        }

        impl $name {
            pub const EMPTY: $name = $name { start: 0, len: 0 };

            #[inline]
            pub const fn new(start: u32, len: u32) -> Self {
                $name { start, len }
            }

            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }

            #[inline]
            pub(crate) fn to_range(self) -> std::ops::Range<usize> {
                self.start as usize..(self.start + self.len) as usize
            }
        }
    };
}

define_id!(
    /// Index of an [`Expr`] in the arena.
    ExprId
);
define_id!(
    /// Index of a [`Stmt`] in the arena.
    StmtId
);
define_id!(
    /// Index of a [`ConditionClause`] in the arena.
    ClauseId
);

define_range!(
    /// Contiguous run of expression ids (tuple elements, call arguments).
    ExprRange
);
define_range!(
    /// Contiguous run of statement ids (block bodies, module top level).
    StmtRange
);
define_range!(
    /// Contiguous run of clause ids (one conditional header).
    ClauseRange
);
