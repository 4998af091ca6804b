//! Recursive descent parser for item-effect expressions.
//!
//! Produces one owned [`Expr`] tree per token list. Precedence, loosest to
//! tightest: `>>` chaining, `=>` conditional, compound assignment and
//! postfix increment, then groups and atoms.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ErrorContext, ParseError, ParseErrorKind};

use rc_ir::{Expr, StructuralKind, Token, TokenList};
use tracing::debug;

/// Parser state for one token list.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    /// Create a new parser.
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parse the whole token list as exactly one effect.
    ///
    /// # Errors
    ///
    /// Fails on an empty list, on any grammar mismatch, and when tokens are
    /// left over after a complete expression.
    pub fn parse(mut self) -> Result<Expr, ParseError> {
        if self.cursor.is_at_end() {
            return Err(ParseError::empty_input());
        }

        let root = self.parse_chain()?;

        if let Some(token) = self.cursor.current() {
            let err = if token.structural() == Some(StructuralKind::CloseParen) {
                ParseError::unmatched_close_paren(token.span)
            } else {
                ParseError::trailing_tokens(self.cursor.remaining_span(), token.kind.display_name())
            };
            return Err(err);
        }

        debug!(
            kind = root.kind_name(),
            tokens = self.cursor.token_count(),
            "parsed effect"
        );
        Ok(root)
    }

    /// Consume the current token, cloning it into the tree.
    fn bump_cloned(&mut self) -> Result<Token, ParseError> {
        self.cursor
            .advance()
            .cloned()
            .ok_or_else(|| ParseError::unexpected_end_of_input(self.cursor.end_span()))
    }
}

/// Parse `tokens` as one effect.
pub fn parse(tokens: &TokenList) -> Result<Expr, ParseError> {
    Parser::new(tokens).parse()
}
