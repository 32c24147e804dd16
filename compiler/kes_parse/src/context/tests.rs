use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_keyword_display() {
    assert_eq!(StmtKeyword::If.to_string(), "'if' statement");
    assert_eq!(StmtKeyword::Guard.to_string(), "'guard' statement");
    assert_eq!(StmtKeyword::While.as_str(), "while");
}

#[test]
fn test_expected_messages() {
    assert_eq!(ExprContext::Tuple.expected_message(), "expected value in tuple");
    assert_eq!(
        ExprContext::Call.expected_message(),
        "expected value in function call"
    );
    assert_eq!(
        ExprContext::Variable.expected_message(),
        "expected expression in variable"
    );
    assert_eq!(
        ExprContext::PrefixOperand.expected_message(),
        "expected expression in prefix operator expression"
    );
    assert_eq!(
        ExprContext::Header(StmtKeyword::While).expected_message(),
        "expected expression in 'while' statement"
    );
}

#[test]
fn test_unexpected_messages() {
    assert_eq!(
        Construct::TopLevel.unexpected_message("#available(OSX 10.51, *)"),
        "extraneous code '#available(OSX 10.51, *)' at top level"
    );
    assert_eq!(
        Construct::Availability.unexpected_message("|| iOS 8.0"),
        "unexpected code '|| iOS 8.0' in availability condition"
    );
    assert_eq!(
        Construct::Header(StmtKeyword::If).unexpected_message("&& x"),
        "unexpected code '&& x' in 'if' statement"
    );
    assert_eq!(
        Construct::Block.unexpected_message(")"),
        "unexpected code ')' in code block"
    );
}

#[test]
fn test_codes_by_construct() {
    assert_eq!(Construct::Availability.error_code(), ErrorCode::E1006);
    assert_eq!(Construct::TopLevel.error_code(), ErrorCode::E1009);
    assert_eq!(Construct::Tuple.error_code(), ErrorCode::E1008);
}
