//! Error codes for front-end diagnostics.
//!
//! Format: E#### where the first digit indicates the phase:
//! - E0xxx: Lexer errors
//! - E1xxx: Parser errors

use std::fmt;

/// Error codes for all front-end diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Invalid character or out-of-range literal
    E0001,

    // Parser Errors (E1xxx)
    /// Missing `(` after an availability keyword
    E1001,
    /// Missing `)` at the end of an availability list
    E1002,
    /// Unclosed delimiter (tuple, call, code block)
    E1003,
    /// Expected platform name
    E1004,
    /// Expected version number
    E1005,
    /// Illegal operator in availability list
    E1006,
    /// Expected expression or value
    E1007,
    /// Unexpected code in an enclosing construct
    E1008,
    /// Extraneous code at top level
    E1009,
    /// Missing statement body
    E1010,
    /// Expected a specific token
    E1011,
    /// Expected pattern
    E1012,
}

/// Recovery taxonomy a code belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCategory {
    /// Bad input at the character level.
    Lexical,
    /// A delimiter, keyword or body is missing.
    Structural,
    /// An expected name, version or pattern token was not found.
    Content,
    /// A forbidden connective inside an availability list.
    IllegalOperator,
    /// A value was expected where something else stands.
    Misuse,
    /// Leftover material captured verbatim.
    Trailing,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E1009,
        ErrorCode::E1010,
        ErrorCode::E1011,
        ErrorCode::E1012,
    ];

    /// Get the code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E1010 => "E1010",
            ErrorCode::E1011 => "E1011",
            ErrorCode::E1012 => "E1012",
        }
    }

    /// Short description for `--explain`-style listings.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "invalid token",
            ErrorCode::E1001 => "missing '(' in availability condition",
            ErrorCode::E1002 => "missing ')' in availability condition",
            ErrorCode::E1003 => "unclosed delimiter",
            ErrorCode::E1004 => "expected platform name",
            ErrorCode::E1005 => "expected version number",
            ErrorCode::E1006 => "illegal operator in availability condition",
            ErrorCode::E1007 => "expected expression",
            ErrorCode::E1008 => "unexpected code",
            ErrorCode::E1009 => "extraneous code at top level",
            ErrorCode::E1010 => "missing statement body",
            ErrorCode::E1011 => "expected token",
            ErrorCode::E1012 => "expected pattern",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorCode::E0001 => ErrorCategory::Lexical,
            ErrorCode::E1001
            | ErrorCode::E1002
            | ErrorCode::E1003
            | ErrorCode::E1010
            | ErrorCode::E1011 => ErrorCategory::Structural,
            ErrorCode::E1004 | ErrorCode::E1005 | ErrorCode::E1012 => ErrorCategory::Content,
            ErrorCode::E1006 => ErrorCategory::IllegalOperator,
            ErrorCode::E1007 => ErrorCategory::Misuse,
            ErrorCode::E1008 | ErrorCode::E1009 => ErrorCategory::Trailing,
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
