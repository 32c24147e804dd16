use super::*;
use kes_ir::StringInterner;

struct TestCtx {
    tokens: TokenList,
}

impl TestCtx {
    fn new(source: &str) -> Self {
        let interner = StringInterner::new();
        TestCtx {
            tokens: kes_lexer::lex(source, &interner),
        }
    }

    fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.tokens)
    }
}

#[test]
fn test_advance_and_eof_is_sticky() {
    let ctx = TestCtx::new("a b");
    let mut cursor = ctx.cursor();

    assert!(cursor.check(TokenTag::Ident));
    cursor.advance();
    cursor.advance();
    assert!(cursor.is_at_end());
    let pos = cursor.position();
    cursor.advance();
    assert_eq!(cursor.position(), pos);
    assert!(cursor.is_at_end());
}

#[test]
fn test_eat_only_matching() {
    let ctx = TestCtx::new("( )");
    let mut cursor = ctx.cursor();

    assert!(cursor.eat(TokenTag::RParen).is_none());
    assert_eq!(cursor.position(), 0);
    assert!(cursor.eat(TokenTag::LParen).is_some());
    assert!(cursor.eat(TokenTag::RParen).is_some());
    assert!(cursor.is_at_end());
}

#[test]
fn test_peek_past_end_is_eof() {
    let ctx = TestCtx::new("x");
    let cursor = ctx.cursor();
    assert_eq!(cursor.peek_kind_at(1), TokenKind::Eof);
    assert_eq!(cursor.peek_kind_at(50), TokenKind::Eof);
}

#[test]
fn test_line_queries() {
    let ctx = TestCtx::new("a\nb c");
    let mut cursor = ctx.cursor();

    assert!(cursor.at_line_start());
    assert!(!cursor.has_newline_before());
    cursor.advance();
    assert!(cursor.at_line_start());
    assert!(cursor.has_newline_before());
    cursor.advance();
    assert!(!cursor.at_line_start());
    assert_eq!(cursor.previous_span(), Span::new(2, 3));
}

#[test]
fn test_set_position_restores() {
    let ctx = TestCtx::new("a b c");
    let mut cursor = ctx.cursor();
    cursor.advance();
    let saved = cursor.position();
    cursor.advance();
    cursor.advance();
    cursor.set_position(saved);
    assert_eq!(cursor.current_span(), Span::new(2, 3));
}
