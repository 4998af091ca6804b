//! Combined error type for the tokenize-then-parse pipeline.

use rc_diagnostic::{emitter, Diagnostic};
use rc_ir::Span;
use rc_lexer::LexError;
use rc_parse::ParseError;

/// Why effect text could not be turned into a tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EffectError {
    #[error("lexing failed: {0}")]
    Lex(#[from] LexError),
    #[error("parsing failed: {0}")]
    Parse(#[from] ParseError),
}

impl EffectError {
    /// Where the error was found.
    pub fn span(&self) -> Span {
        match self {
            EffectError::Lex(err) => err.span,
            EffectError::Parse(err) => err.span,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            EffectError::Lex(err) => err.to_diagnostic(),
            EffectError::Parse(err) => err.to_diagnostic(),
        }
    }

    /// Render a source-annotated report against the text that failed.
    pub fn render(&self, source: &str) -> String {
        emitter::render(&self.to_diagnostic(), source)
    }
}
