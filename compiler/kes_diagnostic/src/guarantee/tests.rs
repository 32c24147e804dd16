use super::*;
use crate::{Diagnostic, DiagnosticSink, ErrorCode, SinkConfig};
use kes_ir::Span;

fn missing_paren() -> Diagnostic {
    Diagnostic::error(ErrorCode::E1002)
        .with_message("expected ')' to end availability condition")
        .with_span(Span::point(14))
}

#[test]
fn clean_sink_has_no_proof() {
    let mut sink = DiagnosticSink::new();
    assert_eq!(sink.error_guaranteed(), None);

    sink.emit_warning(Diagnostic::warning(ErrorCode::E1008).with_message("unused"));
    assert_eq!(sink.error_guaranteed(), None);
}

#[test]
fn emit_hands_back_the_sink_proof() {
    let mut sink = DiagnosticSink::new();
    let proof = sink.emit(missing_paren());
    assert_eq!(sink.error_guaranteed(), Some(proof));
}

#[test]
fn suppressed_errors_still_prove_failure() {
    let mut sink = DiagnosticSink::with_config(SinkConfig::with_error_limit(1));
    sink.emit(missing_paren());
    let proof = sink.emit(missing_paren());

    assert_eq!(sink.suppressed_count(), 1);
    assert_eq!(sink.error_guaranteed(), Some(proof));
}

#[test]
fn proof_displays_as_emitted_errors() {
    let mut sink = DiagnosticSink::new();
    let proof = sink.emit(missing_paren());
    assert_eq!(proof.to_string(), "error(s) emitted");
}
