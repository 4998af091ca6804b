//! Parse error types.
//!
//! A [`ParseError`] carries:
//! - WHERE: the offending span, plus a related span for unclosed groups
//! - WHAT: a [`ParseErrorKind`]
//! - WHY: an [`ErrorContext`] for "while parsing X" messages
//! - HOW: an optional hint

use rc_diagnostic::{expected_operand, unclosed_delimiter, Diagnostic, ErrorCode};
use rc_ir::Span;

/// What was being parsed when an error occurred.
///
/// The innermost context wins: an error raised inside a group that sits on
/// the right of `=>` reports the group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    /// A whole item effect.
    #[default]
    Effect,
    /// The right side of `>>`.
    Chaining,
    /// The effect on the right side of `=>`.
    Conditional,
    /// The value on the right side of a compound assignment.
    Assignment,
    /// A parenthesized group.
    Grouping,
}

impl ErrorContext {
    /// A phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::Effect => "an item effect",
            Self::Chaining => "a chained effect",
            Self::Conditional => "a conditional effect",
            Self::Assignment => "a compound assignment",
            Self::Grouping => "a parenthesized group",
        }
    }
}

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("unclosed `(`")]
    UnclosedParen,
    #[error("unmatched `)`")]
    UnmatchedCloseParen,
    /// An operator or `)` where a name, number, string, or group belongs.
    #[error("expected an operand, found {found}")]
    ExpectedOperand { found: String },
    #[error("unexpected end of input, expected an operand")]
    UnexpectedEndOfInput,
    /// Tokens left over after a complete expression.
    #[error("unexpected {found} after a complete effect")]
    TrailingTokens { found: String },
    #[error("empty effect")]
    EmptyInput,
}

/// A fatal parse error. No partial tree accompanies it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{kind} while parsing {}", .context.description())]
pub struct ParseError {
    pub span: Span,
    pub kind: ParseErrorKind,
    pub context: ErrorContext,
    /// A second location, e.g. the `(` of an unclosed group.
    pub related: Option<Span>,
    pub hint: Option<String>,
}

impl ParseError {
    fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError {
            span,
            kind,
            context: ErrorContext::default(),
            related: None,
            hint: None,
        }
    }

    #[cold]
    pub fn unclosed_paren(open: Span, found: Span) -> Self {
        ParseError {
            related: Some(open),
            hint: Some("add `)` to close the group".to_string()),
            ..Self::new(ParseErrorKind::UnclosedParen, found)
        }
    }

    #[cold]
    pub fn unmatched_close_paren(span: Span) -> Self {
        ParseError {
            hint: Some("remove this `)` or add a matching `(`".to_string()),
            ..Self::new(ParseErrorKind::UnmatchedCloseParen, span)
        }
    }

    #[cold]
    pub fn expected_operand(span: Span, found: impl Into<String>) -> Self {
        Self::new(
            ParseErrorKind::ExpectedOperand {
                found: found.into(),
            },
            span,
        )
    }

    #[cold]
    pub fn unexpected_end_of_input(span: Span) -> Self {
        Self::new(ParseErrorKind::UnexpectedEndOfInput, span)
    }

    #[cold]
    pub fn trailing_tokens(span: Span, found: impl Into<String>) -> Self {
        ParseError {
            hint: Some("join effects with `>>`".to_string()),
            ..Self::new(
                ParseErrorKind::TrailingTokens {
                    found: found.into(),
                },
                span,
            )
        }
    }

    #[cold]
    pub fn empty_input() -> Self {
        Self::new(ParseErrorKind::EmptyInput, Span::DUMMY)
    }

    /// Attach `context` unless a more specific one is already set.
    #[must_use]
    pub fn in_context(mut self, context: ErrorContext) -> Self {
        if self.context == ErrorContext::default() {
            self.context = context;
        }
        self
    }

    /// The error code for this error's kind.
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::UnmatchedCloseParen => ErrorCode::E1001,
            ParseErrorKind::ExpectedOperand { .. } | ParseErrorKind::UnexpectedEndOfInput => {
                ErrorCode::E1002
            }
            ParseErrorKind::UnclosedParen => ErrorCode::E1003,
            ParseErrorKind::TrailingTokens { .. } => ErrorCode::E1004,
            ParseErrorKind::EmptyInput => ErrorCode::E1005,
        }
    }

    /// Convert to a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = match &self.kind {
            ParseErrorKind::UnclosedParen => {
                let open = self.related.unwrap_or(self.span);
                return unclosed_delimiter(open, self.span, '(').with_note(self.note());
            }
            ParseErrorKind::ExpectedOperand { found } => expected_operand(self.span, found),
            ParseErrorKind::UnexpectedEndOfInput => expected_operand(self.span, "end of input"),
            ParseErrorKind::UnmatchedCloseParen => Diagnostic::error(self.code())
                .with_message(self.kind.to_string())
                .with_label(self.span, "no `(` opens this group"),
            ParseErrorKind::TrailingTokens { .. } => Diagnostic::error(self.code())
                .with_message(self.kind.to_string())
                .with_label(self.span, "the effect already ended"),
            ParseErrorKind::EmptyInput => Diagnostic::error(self.code())
                .with_message(self.kind.to_string())
                .with_label(self.span, "nothing to parse"),
        };
        let diag = diag.with_note(self.note());
        match &self.hint {
            Some(hint) => diag.with_suggestion(hint.clone()),
            None => diag,
        }
    }

    fn note(&self) -> String {
        format!("while parsing {}", self.context.description())
    }
}
