//! Availability-condition data model.
//!
//! `#available(OSX 10.51, iOS 8.0, *)` becomes one [`AvailabilityQuery`]
//! holding three [`PlatformEntry`] values in source order. Nothing here
//! validates platform names or version ordering; that is a later phase.

use std::fmt;

use smallvec::SmallVec;

use crate::{Name, Span};

/// Dotted version number: one to three non-negative integers.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct VersionTuple(SmallVec<[u64; 3]>);

impl VersionTuple {
    /// Maximum number of components (`major.minor.patch`).
    pub const MAX_COMPONENTS: usize = 3;

    /// Start a version with its leading component.
    pub fn new(major: u64) -> Self {
        let mut components = SmallVec::new();
        components.push(major);
        VersionTuple(components)
    }

    /// Build from a slice of components.
    ///
    /// Returns `None` for an empty slice or more than three components.
    pub fn from_components(components: &[u64]) -> Option<Self> {
        if components.is_empty() || components.len() > Self::MAX_COMPONENTS {
            return None;
        }
        Some(VersionTuple(SmallVec::from_slice(components)))
    }

    /// Append a component. Returns `false` (and does nothing) when full.
    pub fn push(&mut self, component: u64) -> bool {
        if self.is_full() {
            return false;
        }
        self.0.push(component);
        true
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.0.len() >= Self::MAX_COMPONENTS
    }

    #[inline]
    pub fn components(&self) -> &[u64] {
        &self.0
    }
}

impl fmt::Display for VersionTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{component}")?;
        }
        Ok(())
    }
}

/// One item of an availability list: `identifier version?` or `*`.
///
/// Well-formed entries populate exactly one of `name` and `is_wildcard`.
/// Entries built during recovery may have neither.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct PlatformEntry {
    pub name: Option<Name>,
    pub version: Option<VersionTuple>,
    pub is_wildcard: bool,
    pub span: Span,
}

impl PlatformEntry {
    /// The `*` entry.
    pub fn wildcard(span: Span) -> Self {
        PlatformEntry {
            name: None,
            version: None,
            is_wildcard: true,
            span,
        }
    }

    /// A named platform with an optional version.
    pub fn platform(name: Name, version: Option<VersionTuple>, span: Span) -> Self {
        PlatformEntry {
            name: Some(name),
            version,
            is_wildcard: false,
            span,
        }
    }

    /// A version with no platform name in front of it.
    pub fn unnamed(version: Option<VersionTuple>, span: Span) -> Self {
        PlatformEntry {
            name: None,
            version,
            is_wildcard: false,
            span,
        }
    }

    /// Exactly one of `name` / `is_wildcard` is set.
    pub fn is_well_formed(&self) -> bool {
        self.name.is_some() != self.is_wildcard
    }
}

/// Terminal state of one availability-clause parse.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum QueryStatus {
    /// `(` ... `)` both present.
    Done,
    /// A delimiter was missing. Diagnostics were recorded; the node is still
    /// usable.
    Incomplete,
}

/// `#available(...)` or `#unavailable(...)`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AvailabilityQuery {
    pub entries: Vec<PlatformEntry>,
    /// True for the `#unavailable` spelling.
    pub negated: bool,
    pub status: QueryStatus,
    pub span: Span,
}

impl AvailabilityQuery {
    pub fn is_complete(&self) -> bool {
        self.status == QueryStatus::Done
    }
}
