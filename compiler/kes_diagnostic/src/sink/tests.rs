use super::*;
use crate::{ErrorCode, Note};
use kes_ir::Span;
use pretty_assertions::assert_eq;

fn err(message: &str, at: u32) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1007)
        .with_message(message)
        .with_span(Span::point(at))
}

#[test]
fn preserves_discovery_order() {
    let mut sink = DiagnosticSink::new();
    sink.emit(err("second by position", 20));
    sink.emit(err("first by position", 3));

    let messages: Vec<&str> = sink.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(messages, vec!["second by position", "first by position"]);
}

#[test]
fn notes_travel_with_their_diagnostic() {
    let mut sink = DiagnosticSink::new();
    sink.emit(
        Diagnostic::error(ErrorCode::E1002)
            .with_message("expected ')' to end availability condition")
            .with_span(Span::point(10))
            .with_note(Span::new(3, 4), "to match this opening '('"),
    );
    sink.emit(err("after", 12));

    let diags = sink.into_diagnostics();
    assert_eq!(diags.len(), 2);
    assert_eq!(
        diags[0].notes,
        vec![Note::new(Span::new(3, 4), "to match this opening '('")]
    );
    assert!(diags[1].notes.is_empty());
}

#[test]
fn error_limit_counts_but_drops() {
    let mut sink = DiagnosticSink::with_config(SinkConfig::with_error_limit(2));
    for i in 0..5 {
        sink.emit(err("e", i));
    }

    assert_eq!(sink.len(), 2);
    assert_eq!(sink.error_count(), 5);
    assert_eq!(sink.suppressed_count(), 3);
    assert!(sink.limit_reached());
}

#[test]
fn unlimited_by_default() {
    let mut sink = DiagnosticSink::new();
    for i in 0..100 {
        sink.emit(err("e", i));
    }
    assert_eq!(sink.len(), 100);
    assert_eq!(sink.suppressed_count(), 0);
    assert!(!sink.limit_reached());
}

#[test]
fn warnings_do_not_count_as_errors() {
    let mut sink = DiagnosticSink::with_config(SinkConfig::with_error_limit(1));
    sink.emit_warning(Diagnostic::warning(ErrorCode::E1008).with_message("w"));
    assert!(!sink.has_errors());
    assert!(sink.error_guaranteed().is_none());

    sink.emit(err("e", 0));
    assert!(sink.has_errors());
    assert!(sink.error_guaranteed().is_some());
    assert_eq!(sink.len(), 2);
}

#[test]
fn error_limit_of_one_keeps_the_first_error() {
    let mut sink = DiagnosticSink::with_config(SinkConfig::with_error_limit(1));
    sink.emit(err("first", 0));
    sink.emit(err("second", 5));

    let messages: Vec<&str> = sink.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(messages, vec!["first"]);
    assert_eq!(sink.error_count(), 2);
    assert_eq!(sink.suppressed_count(), 1);
}

#[test]
fn stored_errors_never_exceed_the_limit() {
    for limit in 1..6 {
        let mut sink = DiagnosticSink::with_config(SinkConfig::with_error_limit(limit));
        for i in 0..10 {
            sink.emit(err("e", i));
        }
        assert_eq!(sink.len(), limit);
        assert_eq!(sink.suppressed_count(), 10 - limit);
    }
}
