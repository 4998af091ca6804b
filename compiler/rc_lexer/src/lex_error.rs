//! Tokenizer error types.
//!
//! Errors follow the WHERE+WHAT+WHY+HOW shape:
//! - WHERE: `span` locating the error in source
//! - WHAT: `kind` describing what went wrong
//! - WHY: `context` explaining what the tokenizer was scanning
//! - HOW: `suggestions` with actionable fixes

use rc_diagnostic::{Diagnostic, ErrorCode};
use rc_ir::Span;
use std::fmt;

/// A fatal tokenizer error. No partial token list accompanies it.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at position {}", .span.start)]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// WHY: what the tokenizer was scanning.
    pub context: LexErrorContext,
    /// HOW to fix.
    pub suggestions: Vec<String>,
}

/// What kind of tokenizer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// The input ended before the closing string delimiter.
    #[error("unterminated logic string")]
    UnterminatedString,
    /// Operator characters that do not spell an operator.
    #[error("invalid operator `{text}`")]
    InvalidOperator { text: String },
    /// A character that cannot start any token.
    #[error("unexpected character `{ch}`")]
    UnexpectedCharacter { ch: char },
}

/// Scanning context at the point of error.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum LexErrorContext {
    /// Between tokens.
    #[default]
    TopLevel,
    /// Inside a logic string opened at `start`.
    InsideString { start: u32 },
    /// Inside an operator starting at `start`.
    InsideOperator { start: u32 },
}

impl fmt::Display for LexErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorContext::TopLevel => write!(f, "while looking for the next token"),
            LexErrorContext::InsideString { start } => {
                write!(f, "while reading the logic string opened at position {start}")
            }
            LexErrorContext::InsideOperator { start } => {
                write!(f, "while reading the operator starting at position {start}")
            }
        }
    }
}

impl LexError {
    /// A string opened by `delimiter` at offset `open` was never closed.
    #[cold]
    pub fn unterminated_string(open: u32, delimiter: char) -> Self {
        LexError {
            span: Span::new(open, open + 1),
            kind: LexErrorKind::UnterminatedString,
            context: LexErrorContext::InsideString { start: open },
            suggestions: vec![format!("add a closing `{delimiter}`")],
        }
    }

    /// `text` was scanned as operator characters but is not an operator.
    #[cold]
    pub fn invalid_operator(span: Span, text: impl Into<String>) -> Self {
        LexError {
            span,
            kind: LexErrorKind::InvalidOperator { text: text.into() },
            context: LexErrorContext::InsideOperator { start: span.start },
            suggestions: vec![
                "separate operators with whitespace, or check the operator spelling".to_string(),
            ],
        }
    }

    /// `ch` at offset `at` cannot start a token.
    #[cold]
    pub fn unexpected_character(at: u32, ch: char) -> Self {
        LexError {
            span: Span::new(at, at + 1),
            kind: LexErrorKind::UnexpectedCharacter { ch },
            context: LexErrorContext::TopLevel,
            suggestions: Vec::new(),
        }
    }

    /// The error code for this error's kind.
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnexpectedCharacter { .. } => ErrorCode::E0002,
            LexErrorKind::InvalidOperator { .. } => ErrorCode::E0003,
        }
    }

    /// Convert to a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match &self.kind {
            LexErrorKind::UnterminatedString => "logic string opened here is never closed",
            LexErrorKind::InvalidOperator { .. } => "not a recognized operator",
            LexErrorKind::UnexpectedCharacter { .. } => "no token can start here",
        };
        let mut diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_label(self.span, label)
            .with_note(self.context.to_string());
        for suggestion in &self.suggestions {
            diag = diag.with_suggestion(suggestion.clone());
        }
        diag
    }
}

#[cfg(test)]
mod tests;
