//! Error codes for all effect-expression diagnostics.
//!
//! The first digit of each code names the phase that raised it.

use std::fmt;

/// Error codes for all diagnostics.
///
/// Format: E#### where the first digit indicates phase:
/// - E0xxx: Tokenizer errors
/// - E1xxx: Parser errors
/// - E9xxx: Internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Tokenizer Errors (E0xxx)
    /// Unterminated logic string
    E0001,
    /// Character that cannot start any token
    E0002,
    /// Operator characters that do not form an operator
    E0003,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected operand
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Tokens after a complete expression
    E1004,
    /// Empty input
    E1005,

    // Internal Errors (E9xxx)
    /// Internal error
    E9001,
}

impl ErrorCode {
    /// The code as written in rendered output, e.g. `"E1002"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// One-line description of the error class.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated logic string",
            ErrorCode::E0002 => "unexpected character",
            ErrorCode::E0003 => "invalid operator",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected operand",
            ErrorCode::E1003 => "unclosed delimiter",
            ErrorCode::E1004 => "trailing tokens",
            ErrorCode::E1005 => "empty input",
            ErrorCode::E9001 => "internal error",
        }
    }

}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
