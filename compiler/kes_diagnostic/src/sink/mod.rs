//! Append-only diagnostic collector.
//!
//! Unlike a sorting queue, the sink never reorders: insertion order is the
//! order problems were discovered during the single left-to-right pass.
//! A diagnostic and its notes are one record.

use crate::{Diagnostic, ErrorGuaranteed};

/// Configuration for diagnostic collection.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct SinkConfig {
    /// Maximum number of errors to keep (0 = unlimited).
    pub error_limit: usize,
}

impl SinkConfig {
    pub fn unlimited() -> Self {
        SinkConfig { error_limit: 0 }
    }

    pub fn with_error_limit(error_limit: usize) -> Self {
        SinkConfig { error_limit }
    }
}

/// Ordered collector owned by one parse invocation.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
    /// Errors reported, including suppressed ones.
    error_count: usize,
    /// Errors dropped because the limit was reached.
    suppressed: usize,
    config: SinkConfig,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SinkConfig) -> Self {
        DiagnosticSink {
            config,
            ..Self::default()
        }
    }

    /// Record an error diagnostic.
    ///
    /// Past the error limit the diagnostic is counted but not stored.
    pub fn emit(&mut self, diag: Diagnostic) -> ErrorGuaranteed {
        debug_assert!(diag.is_error(), "use emit_warning for warnings");
        let over_limit = self.limit_reached();
        self.error_count += 1;
        if over_limit {
            self.suppressed += 1;
        } else {
            self.diagnostics.push(diag);
        }
        ErrorGuaranteed::new()
    }

    /// Record a warning. Warnings do not count toward the error limit.
    pub fn emit_warning(&mut self, diag: Diagnostic) {
        self.diagnostics.push(diag);
    }

    /// True once the configured number of errors has been stored.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.stored_errors() >= self.config.error_limit
    }

    fn stored_errors(&self) -> usize {
        self.error_count - self.suppressed
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn suppressed_count(&self) -> usize {
        self.suppressed
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Proof that an error was emitted, if one was.
    pub fn error_guaranteed(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.error_count)
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests;
