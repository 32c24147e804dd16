//! Statements, blocks and the top-level module.
//!
//! Statements are separated by newlines. Anything left on a line after a
//! complete statement is captured and reported once, attributed to the
//! enclosing block or to the top level.

use kes_diagnostic::ErrorCode;
use kes_ir::{Block, ElseBranch, Module, Stmt, StmtId, StmtKind, TokenKind, TokenTag};
use tracing::debug;

use crate::recovery::{header_end, BLOCK_START, STMT_START};
use crate::stack::ensure_sufficient_stack;
use crate::{Construct, ExprContext, Parser, StmtKeyword, TokenSet};

impl Parser<'_> {
    /// Parse the whole token stream.
    pub fn parse_module(&mut self) -> Module {
        let mut stmts = Vec::new();
        while !self.is_at_end() {
            if let Some(id) = self.parse_stmt_or_recover(Construct::TopLevel) {
                stmts.push(id);
            }
            self.report_rest_of_line(Construct::TopLevel);
        }
        debug!(stmts = stmts.len(), "module parsed");
        Module {
            stmts: self.arena.alloc_stmt_list(stmts),
        }
    }

    /// A statement, or a report of whatever is here instead.
    fn parse_stmt_or_recover(&mut self, owner: Construct) -> Option<StmtId> {
        let kind = self.current_kind();
        if kind.is_close_delimiter() {
            self.report_stray_closer(owner);
            return None;
        }
        if !STMT_START.contains(&kind) {
            self.report_unexpected(owner, Self::owner_stop(owner), true);
            return None;
        }
        Some(self.parse_stmt())
    }

    /// Report everything after a statement that shares its line.
    fn report_rest_of_line(&mut self, owner: Construct) {
        loop {
            if self.is_at_end() || self.at_line_start() {
                return;
            }
            if owner == Construct::Block && self.check(TokenTag::RBrace) {
                return;
            }
            if self.current_kind().is_close_delimiter() {
                self.report_stray_closer(owner);
            } else {
                self.report_unexpected(owner, Self::owner_stop(owner), true);
            }
        }
    }

    fn owner_stop(owner: Construct) -> TokenSet {
        match owner {
            Construct::Block => TokenSet::new().with(TokenTag::RBrace),
            _ => TokenSet::new(),
        }
    }

    fn parse_stmt(&mut self) -> StmtId {
        ensure_sufficient_stack(|| match self.current_kind() {
            TokenKind::If => self.parse_if(),
            TokenKind::Guard => self.parse_guard(),
            TokenKind::While => self.parse_while(),
            TokenKind::Let | TokenKind::Var => self.parse_let(),
            TokenKind::Return => self.parse_return(),
            _ => {
                let marker = self.mark();
                let expr = self.parse_expr(ExprContext::Statement);
                self.alloc_stmt(StmtKind::Expr(expr), marker)
            }
        })
    }

    fn alloc_stmt(&mut self, kind: StmtKind, marker: super::Marker) -> StmtId {
        let span = self.span_since(marker);
        self.arena.alloc_stmt(Stmt::new(kind, span))
    }

    /// `if conditions block (else (if ... | block))?`
    fn parse_if(&mut self) -> StmtId {
        let marker = self.mark();
        self.advance();
        let conditions = self.parse_conditions(StmtKeyword::If);
        let then_block = self.parse_body(StmtKeyword::If);

        let else_branch = if self.eat(TokenTag::Else).is_some() {
            if self.check(TokenTag::If) {
                Some(ElseBranch::If(ensure_sufficient_stack(|| self.parse_if())))
            } else {
                self.parse_body(StmtKeyword::If).map(ElseBranch::Block)
            }
        } else {
            None
        };

        self.alloc_stmt(
            StmtKind::If {
                conditions,
                then_block,
                else_branch,
            },
            marker,
        )
    }

    /// `guard conditions else block`
    fn parse_guard(&mut self) -> StmtId {
        let marker = self.mark();
        self.advance();
        let conditions = self.parse_conditions(StmtKeyword::Guard);
        self.report_header_tail(StmtKeyword::Guard, header_end(StmtKeyword::Guard));

        let else_block = if self.eat(TokenTag::Else).is_some() {
            self.parse_body(StmtKeyword::Guard)
        } else {
            self.error(
                ErrorCode::E1011,
                "expected 'else' in 'guard' statement",
                self.current_span(),
            );
            if self.check(TokenTag::LBrace) {
                Some(self.parse_block())
            } else {
                None
            }
        };

        self.alloc_stmt(
            StmtKind::Guard {
                conditions,
                else_block,
            },
            marker,
        )
    }

    /// `while conditions block`
    fn parse_while(&mut self) -> StmtId {
        let marker = self.mark();
        self.advance();
        let conditions = self.parse_conditions(StmtKeyword::While);
        let body = self.parse_body(StmtKeyword::While);
        self.alloc_stmt(StmtKind::While { conditions, body }, marker)
    }

    /// `let pattern (= expr)?` / `var pattern (= expr)?`
    fn parse_let(&mut self) -> StmtId {
        let marker = self.mark();
        let mutable = self.current_kind() == TokenKind::Var;
        self.advance();
        let pattern = self.parse_binding_pattern("variable");
        let init = if self.eat(TokenTag::Eq).is_some() {
            Some(self.parse_expr(ExprContext::Variable))
        } else {
            None
        };
        self.alloc_stmt(
            StmtKind::Let {
                mutable,
                pattern,
                init,
            },
            marker,
        )
    }

    /// `return expr?`. The value must start on the same line.
    fn parse_return(&mut self) -> StmtId {
        let marker = self.mark();
        self.advance();
        let value = if self.is_at_end() || self.at_line_start() || self.check(TokenTag::RBrace) {
            None
        } else {
            Some(self.parse_expr(ExprContext::Return))
        };
        self.alloc_stmt(StmtKind::Return(value), marker)
    }

    /// Material between the end of a condition list and the body.
    fn report_header_tail(&mut self, keyword: StmtKeyword, end: TokenSet) {
        if self.is_at_end() || self.at_line_start() || end.contains(&self.current_kind()) {
            return;
        }
        self.report_unexpected(Construct::Header(keyword), end, true);
    }

    /// The `{ ... }` owned by a statement header. Missing bodies are
    /// reported and leave the cursor in place.
    fn parse_body(&mut self, keyword: StmtKeyword) -> Option<Block> {
        self.report_header_tail(keyword, BLOCK_START);
        if self.check(TokenTag::LBrace) {
            return Some(self.parse_block());
        }

        let message = if self.is_at_end() {
            format!("expected code block in {keyword}")
        } else {
            format!("expected '{{' in {keyword}")
        };
        self.error(ErrorCode::E1010, message, self.current_span());
        None
    }

    /// `{ stmt* }`. The cursor must be on `{`.
    pub(crate) fn parse_block(&mut self) -> Block {
        let marker = self.mark();
        let open = self.advance();
        let mut stmts = Vec::new();

        loop {
            if self.eat(TokenTag::RBrace).is_some() {
                break;
            }
            if self.is_at_end() {
                self.recover_unclosed(Construct::Block, open, TokenSet::new());
                break;
            }
            if let Some(id) = self.parse_stmt_or_recover(Construct::Block) {
                stmts.push(id);
            }
            self.report_rest_of_line(Construct::Block);
        }

        Block {
            stmts: self.arena.alloc_stmt_list(stmts),
            span: self.span_since(marker),
        }
    }
}
