//! Recursive descent parser for Kestrel.
//!
//! Produces a flat AST in a [`NodeArena`]. The interesting part is the
//! condition-clause grammar of `if` / `guard` / `while` headers, in
//! particular availability queries:
//!
//! ```text
//! if #available(OSX 10.51, iOS 8.0, *) { ... }
//! guard #unavailable(iOS 17) else { ... }
//! ```
//!
//! Parsing never fails. Every syntax problem becomes a [`Diagnostic`] in the
//! [`DiagnosticSink`], and every production returns a node, possibly an
//! error placeholder, so one bad clause never aborts the enclosing parse.

mod context;
mod cursor;
mod grammar;
mod recovery;
mod stack;

pub use context::{Construct, ExprContext, StmtKeyword};
pub use cursor::Cursor;
pub use recovery::TokenSet;

use std::sync::Once;

use kes_diagnostic::{Diagnostic, DiagnosticSink, ErrorCode, ErrorGuaranteed, SinkConfig};
use kes_ir::{
    AvailabilityQuery, Module, Name, NodeArena, Span, StringInterner, TokenKind, TokenList,
    TokenTag,
};
use rayon::prelude::*;

/// Parser configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ParseConfig {
    pub sink: SinkConfig,
}

/// Everything one parse invocation produced.
pub struct ParseOutput {
    pub module: Module,
    pub arena: NodeArena,
    /// In discovery order.
    pub diagnostics: Vec<Diagnostic>,
    /// Errors dropped by the sink's error limit.
    pub suppressed: usize,
    /// Resolves the `Name`s stored in the arena.
    pub interner: StringInterner,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty() || self.suppressed > 0
    }

    /// Diagnostic messages in order.
    pub fn messages(&self) -> Vec<&str> {
        self.diagnostics.iter().map(|d| d.message.as_str()).collect()
    }

    pub fn availability_queries(&self) -> impl Iterator<Item = &AvailabilityQuery> {
        self.arena.availability_queries()
    }

    pub fn name(&self, name: Name) -> &'static str {
        self.interner.lookup(name)
    }
}

/// Lex and parse `source` with the default configuration.
pub fn parse(source: &str) -> ParseOutput {
    parse_with_config(source, &ParseConfig::default())
}

/// Lex and parse `source`.
///
/// # Panics
/// Panics if the source exceeds `u32::MAX` bytes.
pub fn parse_with_config(source: &str, config: &ParseConfig) -> ParseOutput {
    let interner = StringInterner::new();
    let tokens = kes_lexer::lex(source, &interner);
    let mut sink = DiagnosticSink::with_config(config.sink);

    let mut parser = Parser::new(&tokens, source, &mut sink);
    let module = parser.parse_module();
    let arena = parser.into_arena();

    let suppressed = sink.suppressed_count();
    ParseOutput {
        module,
        arena,
        diagnostics: sink.into_diagnostics(),
        suppressed,
        interner,
    }
}

/// Parse independent sources in parallel.
///
/// Each source gets its own interner, cursor and sink. Outputs are in input
/// order. Installs the `RUST_LOG` subscriber on first use.
pub fn parse_batch(sources: &[&str], config: &ParseConfig) -> Vec<ParseOutput> {
    init_tracing();
    sources
        .par_iter()
        .map(|source| parse_with_config(source, config))
        .collect()
}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}

/// Parser state.
///
/// Borrows an immutable token buffer and a diagnostic sink owned by the
/// caller; owns the cursor and the node arena.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    source: &'a str,
    arena: NodeArena,
    sink: &'a mut DiagnosticSink,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, source: &'a str, sink: &'a mut DiagnosticSink) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            source,
            arena: NodeArena::with_capacity(source.len()),
            sink,
        }
    }

    /// Current token index.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// True if the current token is `{`.
    pub fn at_block_start(&self) -> bool {
        self.check(TokenTag::LBrace)
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn into_arena(self) -> NodeArena {
        self.arena
    }

    // Cursor delegation.

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn check(&self, tag: TokenTag) -> bool {
        self.cursor.check(tag)
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn at_line_start(&self) -> bool {
        self.cursor.at_line_start()
    }

    #[inline]
    fn has_newline_before(&self) -> bool {
        self.cursor.has_newline_before()
    }

    #[inline]
    fn advance(&mut self) -> Span {
        self.cursor.advance().span
    }

    #[inline]
    fn eat(&mut self, tag: TokenTag) -> Option<Span> {
        self.cursor.eat(tag).map(|t| t.span)
    }

    // Diagnostics.

    fn emit(&mut self, diag: Diagnostic) -> ErrorGuaranteed {
        self.sink.emit(diag)
    }

    fn error(&mut self, code: ErrorCode, message: impl Into<String>, span: Span) -> ErrorGuaranteed {
        self.emit(Diagnostic::error(code).with_message(message).with_span(span))
    }

    /// Verbatim source text for a span.
    fn source_text(&self, span: Span) -> &'a str {
        self.source.get(span.to_range()).unwrap_or("")
    }
}

#[cfg(test)]
mod tests;
