use super::*;
use kes_ir::{StringInterner, TokenList};

struct TestCtx {
    source: String,
    tokens: TokenList,
}

impl TestCtx {
    fn new(source: &str) -> Self {
        let interner = StringInterner::new();
        let tokens = kes_lexer::lex(source, &interner);
        TestCtx {
            source: source.to_owned(),
            tokens,
        }
    }

    fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.tokens)
    }

    fn text(&self, span: Span) -> &str {
        &self.source[span.to_range()]
    }
}

fn advance_to(cursor: &mut Cursor<'_>, tag: TokenTag) {
    while !cursor.check(tag) {
        cursor.advance();
    }
}

#[test]
fn test_token_set_membership() {
    let set = TokenSet::new().with(TokenTag::Comma).with(TokenTag::RParen);
    assert!(set.contains(&TokenKind::Comma));
    assert!(set.contains_tag(TokenTag::RParen));
    assert!(!set.contains(&TokenKind::LParen));
    assert!(TokenSet::new().is_empty());
}

#[test]
fn test_token_set_union() {
    assert_eq!(STMT_START, STMT_KEYWORDS.union(EXPR_START));
    assert!(STMT_START.contains(&TokenKind::Guard));
    assert!(STMT_START.contains(&TokenKind::Int(3)));
    assert!(!STMT_START.contains(&TokenKind::PoundAvailable));
}

#[test]
fn test_illegal_ops_set() {
    for kind in [TokenKind::GtEq, TokenKind::PipePipe, TokenKind::AmpAmp] {
        assert!(AVAILABILITY_ILLEGAL_OPS.contains(&kind));
    }
    assert!(!AVAILABILITY_ILLEGAL_OPS.contains(&TokenKind::Gt));
}

#[test]
fn test_probe_finds_block_start() {
    let ctx = TestCtx::new("if #available(OSX 10.51 {\n}");
    let mut cursor = ctx.cursor();
    advance_to(&mut cursor, TokenTag::Int);

    assert!(probe_resume(&mut cursor, BLOCK_START));
    assert!(cursor.check(TokenTag::LBrace));
}

#[test]
fn test_probe_skips_nested_groups() {
    let ctx = TestCtx::new("x f(a) [b] (c { d }) { }");
    let mut cursor = ctx.cursor();

    assert!(probe_resume(&mut cursor, BLOCK_START));
    assert_eq!(cursor.current_span(), Span::new(21, 22));
}

#[test]
fn test_probe_restores_at_eof() {
    let ctx = TestCtx::new("a b c");
    let mut cursor = ctx.cursor();
    cursor.advance();

    assert!(!probe_resume(&mut cursor, BLOCK_START));
    assert_eq!(cursor.position(), 1);
}

#[test]
fn test_probe_stops_at_unmatched_brace() {
    let ctx = TestCtx::new("a } {");
    let mut cursor = ctx.cursor();

    assert!(!probe_resume(&mut cursor, BLOCK_START));
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_probe_stops_at_line_start_keyword() {
    let ctx = TestCtx::new("a b\nwhile x {");
    let mut cursor = ctx.cursor();

    assert!(!probe_resume(&mut cursor, BLOCK_START));
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_probe_with_empty_set_is_noop() {
    let ctx = TestCtx::new("a {");
    let mut cursor = ctx.cursor();
    assert!(!probe_resume(&mut cursor, TokenSet::new()));
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_capture_balances_nesting() {
    let ctx = TestCtx::new("(#available(OSX 10.51, *) ? 1 : 0)");
    let mut cursor = ctx.cursor();
    cursor.advance();

    let span = capture_span(&mut cursor, TokenSet::new().with(TokenTag::RParen), false).unwrap();
    assert_eq!(ctx.text(span), "#available(OSX 10.51, *) ? 1 : 0");
    assert!(cursor.check(TokenTag::RParen));
}

#[test]
fn test_capture_stops_at_unmatched_closer() {
    let ctx = TestCtx::new("a b ] c");
    let mut cursor = ctx.cursor();

    let span = capture_span(&mut cursor, TokenSet::new(), false).unwrap();
    assert_eq!(ctx.text(span), "a b");
    assert!(cursor.check(TokenTag::RBracket));
}

#[test]
fn test_capture_line_sensitive() {
    let ctx = TestCtx::new("x y z\nnext");
    let mut cursor = ctx.cursor();

    let span = capture_span(&mut cursor, TokenSet::new(), true).unwrap();
    assert_eq!(ctx.text(span), "x y z");
    assert!(cursor.at_line_start());
}

#[test]
fn test_capture_line_sensitive_ignores_nested_newlines() {
    let ctx = TestCtx::new("f(a,\n b) c\nnext");
    let mut cursor = ctx.cursor();

    let span = capture_span(&mut cursor, TokenSet::new(), true).unwrap();
    assert_eq!(ctx.text(span), "f(a,\n b) c");
}

#[test]
fn test_capture_stops_at_next_statement() {
    let ctx = TestCtx::new("|| 10.51\n  && x\nlet y = 1");
    let mut cursor = ctx.cursor();

    let span = capture_span(&mut cursor, TokenSet::new().with(TokenTag::RParen), false).unwrap();
    assert_eq!(ctx.text(span), "|| 10.51\n  && x");
    assert!(cursor.check(TokenTag::Let));
}

#[test]
fn test_capture_keeps_mid_line_keywords() {
    let ctx = TestCtx::new("x let y\nz");
    let mut cursor = ctx.cursor();

    let span = capture_span(&mut cursor, TokenSet::new(), false).unwrap();
    assert_eq!(ctx.text(span), "x let y\nz");
}

#[test]
fn test_header_end_by_owner() {
    assert_eq!(header_end(StmtKeyword::If), BLOCK_START);
    assert_eq!(header_end(StmtKeyword::While), BLOCK_START);
    assert!(header_end(StmtKeyword::Guard).contains(&TokenKind::Else));
    assert!(header_end(StmtKeyword::Guard).contains(&TokenKind::LBrace));
}

#[test]
fn test_capture_nothing_at_stop() {
    let ctx = TestCtx::new(") x");
    let mut cursor = ctx.cursor();
    assert!(capture_span(&mut cursor, TokenSet::new(), false).is_none());
    assert_eq!(cursor.position(), 0);
}
