//! Per-token scanning state.
//!
//! Every token passes through three phases in order:
//!
//! ```text
//! LeadingTrivia ──advance──▶ Content ──advance──▶ TrailingTrivia
//! ```
//!
//! Each consumed character is appended to the accumulator of the current
//! phase. The content span is fixed by the two transitions: its start when
//! content begins, its end when trailing trivia begins.

use rc_ir::{Span, Token, TokenKind};
use rc_lexer_core::Cursor;

/// Where the scanner is within the current token.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum Phase {
    LeadingTrivia,
    Content,
    TrailingTrivia,
}

/// Accumulators and offsets for the token being scanned.
///
/// Created fresh for each token; never shared.
#[derive(Debug)]
pub(crate) struct ScanState {
    phase: Phase,
    start: u32,
    end: u32,
    leading: String,
    content: String,
    trailing: String,
}

impl ScanState {
    /// Start a new token at the cursor.
    pub(crate) fn new(cursor: &Cursor<'_>) -> Self {
        ScanState {
            phase: Phase::LeadingTrivia,
            start: cursor.offset(),
            end: cursor.offset(),
            leading: String::new(),
            content: String::new(),
            trailing: String::new(),
        }
    }

    /// The content scanned so far.
    #[inline]
    pub(crate) fn content(&self) -> &str {
        &self.content
    }

    /// Consume one character into the current phase's accumulator.
    pub(crate) fn consume(&mut self, cursor: &mut Cursor<'_>) -> Option<char> {
        let ch = cursor.bump()?;
        match self.phase {
            Phase::LeadingTrivia => self.leading.push(ch),
            Phase::Content => self.content.push(ch),
            Phase::TrailingTrivia => self.trailing.push(ch),
        }
        Some(ch)
    }

    /// Consume a run of whitespace into the current phase.
    pub(crate) fn eat_whitespace(&mut self, cursor: &mut Cursor<'_>) {
        while cursor.current().is_some_and(char::is_whitespace) {
            self.consume(cursor);
        }
    }

    /// Move to the next phase, recording the content boundary.
    pub(crate) fn advance(&mut self, cursor: &Cursor<'_>) {
        match self.phase {
            Phase::LeadingTrivia => {
                self.phase = Phase::Content;
                self.start = cursor.offset();
            }
            Phase::Content => {
                self.phase = Phase::TrailingTrivia;
                self.end = cursor.offset();
            }
            Phase::TrailingTrivia => phase_fault(Phase::Content, self, cursor),
        }
    }

    /// Abort unless the scanner is in `expected`.
    pub(crate) fn expect_phase(&self, expected: Phase, cursor: &Cursor<'_>) {
        if self.phase != expected {
            phase_fault(expected, self, cursor);
        }
    }

    /// The leading trivia, for input that ends before any content.
    pub(crate) fn into_leading(self) -> String {
        self.leading
    }

    /// Build the finished token.
    pub(crate) fn finish(self, kind: TokenKind) -> Token {
        Token::with_trivia(
            kind,
            Span::new(self.start, self.end),
            self.leading,
            self.trailing,
        )
    }
}

/// A phase transition out of order is a scanner bug, never bad input.
#[cold]
#[inline(never)]
fn phase_fault(expected: Phase, state: &ScanState, cursor: &Cursor<'_>) -> ! {
    let partial = format!("{}{}{}", state.leading, state.content, state.trailing);
    panic!(
        "tokenizing in bad state: expected {expected:?}, was {:?} at position {}; \
         current partial token: {partial:?}",
        state.phase,
        cursor.offset(),
    )
}

#[cfg(test)]
mod tests;
