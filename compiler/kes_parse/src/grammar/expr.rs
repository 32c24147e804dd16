//! Expressions.
//!
//! Precedence, lowest first:
//!
//! ```text
//! expr     := ternary ('=' expr)?
//! ternary  := binary ('?' ternary ':' ternary)?
//! binary   := '||' < '&&' < comparison < additive < multiplicative
//! prefix   := ('!' | '-') prefix | postfix
//! postfix  := primary ('(' args ')')*
//! primary  := INT | 'true' | 'false' | IDENT | '_' | '(' list ')'
//! ```
//!
//! Binary levels are handled by one precedence-climbing loop.

use kes_diagnostic::ErrorCode;
use kes_ir::{BinaryOp, ExprId, ExprKind, ExprRange, Span, TokenKind, TokenTag, UnaryOp};
use tracing::debug;

use crate::stack::ensure_sufficient_stack;
use crate::{Construct, ExprContext, Parser, TokenSet};

/// Binding power of a binary operator token, with its operator.
fn infix_binding_power(kind: TokenKind) -> Option<(BinaryOp, u8)> {
    let entry = match kind {
        TokenKind::PipePipe => (BinaryOp::Or, 1),
        TokenKind::AmpAmp => (BinaryOp::And, 2),
        TokenKind::EqEq => (BinaryOp::Eq, 3),
        TokenKind::NotEq => (BinaryOp::NotEq, 3),
        TokenKind::Lt => (BinaryOp::Lt, 3),
        TokenKind::LtEq => (BinaryOp::LtEq, 3),
        TokenKind::Gt => (BinaryOp::Gt, 3),
        TokenKind::GtEq => (BinaryOp::GtEq, 3),
        TokenKind::Plus => (BinaryOp::Add, 4),
        TokenKind::Minus => (BinaryOp::Sub, 4),
        TokenKind::Star => (BinaryOp::Mul, 5),
        TokenKind::Slash => (BinaryOp::Div, 5),
        TokenKind::Percent => (BinaryOp::Mod, 5),
        _ => return None,
    };
    Some(entry)
}

impl Parser<'_> {
    /// Full expression, including assignment.
    pub(crate) fn parse_expr(&mut self, ctx: ExprContext) -> ExprId {
        ensure_sufficient_stack(|| self.parse_assign(ctx, true))
    }

    /// Expression without a top-level `=`, for positions where `=` belongs
    /// to the enclosing construct.
    pub(crate) fn parse_expr_no_assign(&mut self, ctx: ExprContext) -> ExprId {
        ensure_sufficient_stack(|| self.parse_assign(ctx, false))
    }

    fn parse_assign(&mut self, ctx: ExprContext, allow_assign: bool) -> ExprId {
        let marker = self.mark();
        let target = self.parse_ternary(ctx);
        if !allow_assign || !self.check(TokenTag::Eq) {
            return target;
        }
        self.advance();
        let value = self.parse_expr(ExprContext::Assignment);
        self.alloc_expr(ExprKind::Assign { target, value }, self.span_since(marker))
    }

    fn parse_ternary(&mut self, ctx: ExprContext) -> ExprId {
        let marker = self.mark();
        let cond = self.parse_binary(ctx, 0);
        if self.eat(TokenTag::Question).is_none() {
            return cond;
        }

        let errors = self.sink.error_count();
        let then_expr = self.parse_expr_no_assign(ExprContext::Ternary);
        let else_expr = if self.eat(TokenTag::Colon).is_some() {
            self.parse_expr_no_assign(ExprContext::Ternary)
        } else {
            if self.sink.error_count() == errors {
                self.error(
                    ErrorCode::E1011,
                    "expected ':' in ternary expression",
                    self.current_span(),
                );
            }
            self.error_expr_here()
        };

        self.alloc_expr(
            ExprKind::Ternary {
                cond,
                then_expr,
                else_expr,
            },
            self.span_since(marker),
        )
    }

    /// Precedence climbing over the binary levels. All levels are left
    /// associative.
    fn parse_binary(&mut self, ctx: ExprContext, min_power: u8) -> ExprId {
        let marker = self.mark();
        let mut left = self.parse_prefix(ctx);

        while let Some((op, power)) = infix_binding_power(self.current_kind()) {
            if power < min_power {
                break;
            }
            self.advance();
            let right =
                ensure_sufficient_stack(|| self.parse_binary(ExprContext::InfixOperand, power + 1));
            left = self.alloc_expr(ExprKind::Binary { op, left, right }, self.span_since(marker));
        }
        left
    }

    fn parse_prefix(&mut self, ctx: ExprContext) -> ExprId {
        let op = match self.current_kind() {
            TokenKind::Bang => UnaryOp::Not,
            TokenKind::Minus => UnaryOp::Neg,
            _ => return self.parse_postfix(ctx),
        };
        let marker = self.mark();
        self.advance();
        let operand = ensure_sufficient_stack(|| self.parse_prefix(ExprContext::PrefixOperand));
        self.alloc_expr(ExprKind::Unary { op, operand }, self.span_since(marker))
    }

    /// Calls bind only when `(` is on the same line as the callee.
    fn parse_postfix(&mut self, ctx: ExprContext) -> ExprId {
        let marker = self.mark();
        let mut expr = self.parse_primary(ctx);

        while self.check(TokenTag::LParen) && !self.has_newline_before() {
            let open = self.advance();
            let (args, _) = self.parse_paren_list(Construct::Call, open);
            let args = self.arena.alloc_expr_list(args);
            expr = self.alloc_expr(ExprKind::Call { callee: expr, args }, self.span_since(marker));
        }
        expr
    }

    fn parse_primary(&mut self, ctx: ExprContext) -> ExprId {
        let span = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::Int(value) => ExprKind::Int(value),
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::Ident(name) => ExprKind::Ident(name),
            TokenKind::Underscore => ExprKind::Discard,
            TokenKind::LParen => return self.parse_paren_or_tuple(),
            TokenKind::Error => {
                let span = self.report_invalid_token();
                return self.alloc_expr(ExprKind::Error, span);
            }
            kind => {
                if kind.is_availability_keyword() {
                    debug!(?ctx, %span, "availability query in expression position");
                }
                self.error(ErrorCode::E1007, ctx.expected_message(), span.start_point());
                return self.error_expr_here();
            }
        };
        self.advance();
        self.alloc_expr(kind, span)
    }

    /// `()` is the empty tuple, `(e)` a parenthesized expression, anything
    /// with a comma a tuple.
    fn parse_paren_or_tuple(&mut self) -> ExprId {
        let marker = self.mark();
        let open = self.advance();
        let (elements, saw_comma) = self.parse_paren_list(Construct::Tuple, open);

        let kind = if elements.is_empty() {
            ExprKind::Tuple(ExprRange::EMPTY)
        } else if elements.len() == 1 && !saw_comma {
            ExprKind::Paren(elements[0])
        } else {
            ExprKind::Tuple(self.arena.alloc_expr_list(elements))
        };
        self.alloc_expr(kind, self.span_since(marker))
    }

    /// Comma-separated elements up to and including `)`. The cursor is just
    /// past `open`. Returns the elements and whether a comma was seen.
    fn parse_paren_list(&mut self, construct: Construct, open: Span) -> (Vec<ExprId>, bool) {
        let ctx = match construct {
            Construct::Call => ExprContext::Call,
            _ => ExprContext::Tuple,
        };
        let mut elements = Vec::new();
        let mut saw_comma = false;

        if self.eat(TokenTag::RParen).is_some() {
            return (elements, saw_comma);
        }

        loop {
            elements.push(self.parse_expr(ctx));
            if self.eat(TokenTag::Comma).is_some() {
                saw_comma = true;
                continue;
            }
            if !self.check(TokenTag::RParen) {
                self.report_unexpected(construct, TokenSet::new().with(TokenTag::RParen), false);
            }
            break;
        }

        if self.eat(TokenTag::RParen).is_none() {
            self.recover_unclosed(construct, open, TokenSet::new());
        }
        (elements, saw_comma)
    }
}
