//! Diagnostics for the Kestrel front end.
//!
//! Every syntax problem is reported as a [`Diagnostic`] value:
//! - an [`ErrorCode`] for searchability
//! - a message that must stay stable (tooling matches on it)
//! - a primary span
//! - zero or more [`Note`]s pointing at related locations
//!
//! Diagnostics are appended to a [`DiagnosticSink`] in discovery order.
//!
//! # Error Guarantees
//!
//! [`ErrorGuaranteed`] can only be obtained by emitting an error, so a
//! function returning it proves the problem was reported.
//!
//! ```text
//! let guarantee = sink.emit(diagnostic);
//! ```

mod diagnostic;
mod error_code;
mod guarantee;
mod sink;

pub use diagnostic::{Diagnostic, Note, Severity};
pub use error_code::{ErrorCategory, ErrorCode};
pub use guarantee::ErrorGuaranteed;
pub use sink::{DiagnosticSink, SinkConfig};
