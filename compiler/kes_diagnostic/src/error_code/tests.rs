use super::*;
use std::collections::HashSet;

#[test]
fn codes_are_unique_and_ordered() {
    let strings: Vec<&str> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
    let unique: HashSet<&str> = strings.iter().copied().collect();
    assert_eq!(unique.len(), strings.len());

    let mut sorted = strings.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, strings);
}

#[test]
fn display_matches_as_str() {
    for code in ErrorCode::ALL {
        assert_eq!(code.to_string(), code.as_str());
    }
}

#[test]
fn phase_prefix() {
    assert!(ErrorCode::E0001.is_lexer_error());
    assert!(!ErrorCode::E0001.is_parser_error());
    assert!(ErrorCode::E1006.is_parser_error());
}

#[test]
fn categories_follow_recovery_taxonomy() {
    assert_eq!(ErrorCode::E1001.category(), ErrorCategory::Structural);
    assert_eq!(ErrorCode::E1002.category(), ErrorCategory::Structural);
    assert_eq!(ErrorCode::E1004.category(), ErrorCategory::Content);
    assert_eq!(ErrorCode::E1005.category(), ErrorCategory::Content);
    assert_eq!(ErrorCode::E1006.category(), ErrorCategory::IllegalOperator);
    assert_eq!(ErrorCode::E1007.category(), ErrorCategory::Misuse);
    assert_eq!(ErrorCode::E1008.category(), ErrorCategory::Trailing);
    assert_eq!(ErrorCode::E0001.category(), ErrorCategory::Lexical);
}

#[test]
fn every_code_has_a_description() {
    for code in ErrorCode::ALL {
        assert!(!code.description().is_empty(), "{code} has no description");
    }
}
