use super::*;
use pretty_assertions::assert_eq;

#[test]
fn builder_populates_fields() {
    let diag = Diagnostic::error(ErrorCode::E1002)
        .with_message("expected ')' to end availability condition")
        .with_span(Span::new(24, 25))
        .with_note(Span::new(13, 14), "to match this opening '('");

    assert!(diag.is_error());
    assert_eq!(diag.code, ErrorCode::E1002);
    assert_eq!(diag.span, Span::new(24, 25));
    assert_eq!(
        diag.notes,
        vec![Note::new(Span::new(13, 14), "to match this opening '('")]
    );
}

#[test]
fn display_renders_notes_after_message() {
    let diag = Diagnostic::error(ErrorCode::E1003)
        .with_message("expected '}' to end code block")
        .with_span(Span::point(9))
        .with_note(Span::new(0, 1), "to match this opening '{'");

    assert_eq!(
        diag.to_string(),
        "error[E1003]: expected '}' to end code block at 9..9\n  note: to match this opening '{' at 0..1"
    );
}

#[test]
fn warning_severity() {
    let diag = Diagnostic::warning(ErrorCode::E1008).with_message("unused");
    assert!(!diag.is_error());
    assert_eq!(diag.severity.to_string(), "warning");
}
