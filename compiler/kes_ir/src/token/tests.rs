use super::*;
use crate::{Name, Span};

#[test]
fn test_tag_ignores_payload() {
    assert_eq!(TokenKind::Int(1).tag(), TokenKind::Int(99).tag());
    assert_eq!(
        TokenKind::Ident(Name::EMPTY).tag(),
        TokenTag::Ident
    );
    assert_ne!(TokenKind::Gt.tag(), TokenKind::GtEq.tag());
}

#[test]
fn test_availability_keyword_predicate() {
    assert!(TokenKind::PoundAvailable.is_availability_keyword());
    assert!(TokenKind::PoundUnavailable.is_availability_keyword());
    assert!(!TokenKind::PoundIdent(Name::EMPTY).is_availability_keyword());
    assert!(!TokenKind::If.is_availability_keyword());
}

#[test]
fn test_delimiter_predicates() {
    for kind in [TokenKind::LParen, TokenKind::LBrace, TokenKind::LBracket] {
        assert!(kind.is_open_delimiter());
        assert!(!kind.is_close_delimiter());
    }
    for kind in [TokenKind::RParen, TokenKind::RBrace, TokenKind::RBracket] {
        assert!(kind.is_close_delimiter());
        assert!(!kind.is_open_delimiter());
    }
}

#[test]
fn test_token_list_flags_are_parallel() {
    let mut list = TokenList::new();
    list.push_with_flags(
        Token::new(TokenKind::If, Span::new(0, 2)),
        TokenFlags::LINE_START,
    );
    list.push(Token::new(TokenKind::Eof, Span::point(2)));

    assert_eq!(list.len(), 2);
    assert!(list.flags_at(0).is_line_start());
    assert!(!list.flags_at(1).is_line_start());
    assert_eq!(list.flags_at(7), TokenFlags::empty());
    assert_eq!(list[1].kind, TokenKind::Eof);
}

#[test]
fn test_flags_newline_query() {
    let flags = TokenFlags::NEWLINE_BEFORE | TokenFlags::LINE_START;
    assert!(flags.has_newline_before());
    assert!(flags.is_line_start());
    assert!(!TokenFlags::SPACE_BEFORE.has_newline_before());
}
