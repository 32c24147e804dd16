//! Naming contexts for diagnostics.
//!
//! Two questions drive every recovery message:
//! - where was a value expected? ([`ExprContext`]), giving
//!   "expected expression in <context>"
//! - which production owns the leftover material? ([`Construct`]), giving
//!   "unexpected code '<text>' in <construct>"

use std::fmt;

use kes_diagnostic::ErrorCode;

/// Statement keywords that own a condition list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StmtKeyword {
    If,
    Guard,
    While,
}

impl StmtKeyword {
    pub fn as_str(self) -> &'static str {
        match self {
            StmtKeyword::If => "if",
            StmtKeyword::Guard => "guard",
            StmtKeyword::While => "while",
        }
    }
}

/// Formats as `'if' statement`.
impl fmt::Display for StmtKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' statement", self.as_str())
    }
}

/// Position in which an expression is being parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExprContext {
    /// Initializer of `let`/`var`.
    Variable,
    /// Operand of `!` / `-`.
    PrefixOperand,
    /// Right operand of a binary operator.
    InfixOperand,
    /// Either branch of `?:`.
    Ternary,
    /// Right side of `=`.
    Assignment,
    Return,
    /// Left side of a `case` condition.
    Pattern,
    /// Element of a parenthesized list.
    Tuple,
    /// Call argument.
    Call,
    /// A whole clause of a condition header.
    Header(StmtKeyword),
    /// Expression statement.
    Statement,
}

impl ExprContext {
    /// The "expected ..." message for a missing value in this position.
    pub fn expected_message(self) -> String {
        match self {
            ExprContext::Tuple => "expected value in tuple".to_owned(),
            ExprContext::Call => "expected value in function call".to_owned(),
            ExprContext::Statement => "expected expression".to_owned(),
            ExprContext::Variable => "expected expression in variable".to_owned(),
            ExprContext::PrefixOperand => {
                "expected expression in prefix operator expression".to_owned()
            }
            ExprContext::InfixOperand => {
                "expected expression in infix operator expression".to_owned()
            }
            ExprContext::Ternary => "expected expression in ternary expression".to_owned(),
            ExprContext::Assignment => "expected expression in assignment".to_owned(),
            ExprContext::Return => "expected expression in return statement".to_owned(),
            ExprContext::Pattern => "expected expression in pattern".to_owned(),
            ExprContext::Header(keyword) => format!("expected expression in {keyword}"),
        }
    }
}

/// Production that owns leftover material.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Construct {
    Availability,
    Tuple,
    Call,
    Header(StmtKeyword),
    Block,
    TopLevel,
}

impl Construct {
    pub fn error_code(self) -> ErrorCode {
        match self {
            Construct::Availability => ErrorCode::E1006,
            Construct::TopLevel => ErrorCode::E1009,
            Construct::Tuple | Construct::Call | Construct::Header(_) | Construct::Block => {
                ErrorCode::E1008
            }
        }
    }

    /// Message for `text` captured verbatim.
    pub fn unexpected_message(self, text: &str) -> String {
        match self {
            Construct::TopLevel => format!("extraneous code '{text}' at top level"),
            Construct::Availability => {
                format!("unexpected code '{text}' in availability condition")
            }
            Construct::Tuple => format!("unexpected code '{text}' in tuple"),
            Construct::Call => format!("unexpected code '{text}' in function call"),
            Construct::Header(keyword) => format!("unexpected code '{text}' in {keyword}"),
            Construct::Block => format!("unexpected code '{text}' in code block"),
        }
    }

    /// Name used by "expected ')' to end <name>".
    pub fn closing_name(self) -> &'static str {
        match self {
            Construct::Availability => "availability condition",
            Construct::Tuple => "tuple",
            Construct::Call => "function call",
            Construct::Block | Construct::Header(_) | Construct::TopLevel => "code block",
        }
    }
}

#[cfg(test)]
mod tests;
