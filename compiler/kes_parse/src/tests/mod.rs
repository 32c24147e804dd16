//! Parser tests.
//!
//! Tests are organized into modules by category:
//! - `availability`: well-formed and malformed availability queries
//! - `misuse`: availability queries outside a condition list
//! - `recovery`: unclosed delimiters, stray tokens, missing pieces
//! - `grammar`: the host statement and expression grammar
//! - `properties`: generated inputs

#![allow(clippy::unwrap_used, clippy::expect_used)]


use kes_ir::{AvailabilityQuery, ClauseKind, ConditionClause, Expr, Stmt, StmtKind};

use crate::{parse, ParseOutput};

/// Parse and assert that no diagnostics were produced.
fn parse_clean(source: &str) -> ParseOutput {
    let output = parse(source);
    assert!(
        !output.has_errors(),
        "unexpected diagnostics for {source:?}: {:?}",
        output.messages()
    );
    output
}

/// The only availability query in the output.
fn only_query(output: &ParseOutput) -> &AvailabilityQuery {
    let queries: Vec<_> = output.availability_queries().collect();
    assert_eq!(queries.len(), 1, "expected exactly one query");
    queries[0]
}

/// Entry names, `"*"` for the wildcard and `None` for a missing name.
fn entry_names<'o>(output: &'o ParseOutput, query: &AvailabilityQuery) -> Vec<Option<&'o str>> {
    query
        .entries
        .iter()
        .map(|entry| {
            if entry.is_wildcard {
                Some("*")
            } else {
                entry.name.map(|name| output.name(name))
            }
        })
        .collect()
}

fn entry_versions(query: &AvailabilityQuery) -> Vec<Option<Vec<u64>>> {
    query
        .entries
        .iter()
        .map(|entry| entry.version.as_ref().map(|v| v.components().to_vec()))
        .collect()
}

fn top_stmts(output: &ParseOutput) -> Vec<&Stmt> {
    output
        .arena
        .stmt_list(output.module.stmts)
        .iter()
        .map(|&id| output.arena.stmt(id))
        .collect()
}

fn first_stmt(output: &ParseOutput) -> &Stmt {
    top_stmts(output)[0]
}

/// The expression of an expression statement.
fn stmt_expr<'o>(output: &'o ParseOutput, stmt: &Stmt) -> &'o Expr {
    match stmt.kind {
        StmtKind::Expr(id) => output.arena.expr(id),
        other => panic!("expected expression statement, got {other:?}"),
    }
}

/// Clauses of the first top-level statement's header.
fn header_clauses(output: &ParseOutput) -> Vec<&ConditionClause> {
    let range = first_stmt(output)
        .kind
        .conditions()
        .expect("statement has no condition list");
    output
        .arena
        .clause_list(range)
        .iter()
        .map(|&id| output.arena.clause(id))
        .collect()
}

fn clause_kind_name(kind: &ClauseKind) -> &'static str {
    match kind {
        ClauseKind::Expr(_) => "expr",
        ClauseKind::OptionalBinding { .. } => "binding",
        ClauseKind::PatternMatch { .. } => "case",
        ClauseKind::Availability(_) => "availability",
    }
}

/// Byte offset of the first occurrence of `needle`.
fn offset_of(source: &str, needle: &str) -> u32 {
    u32::try_from(source.find(needle).unwrap()).unwrap()
}
