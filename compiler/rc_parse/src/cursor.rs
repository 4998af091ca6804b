//! Token cursor for navigating the token stream.

use rc_ir::{ItemOperator, OperatorClass, Span, StructuralKind, Token, TokenList};
use tracing::trace;

/// Cursor over a borrowed token list.
///
/// Unlike the tokenizer's character cursor, the token stream has no EOF
/// token: `current()` is `None` once every token is consumed.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor {
            tokens: tokens.as_slice(),
            pos: 0,
        }
    }

    /// Get the total number of tokens in the stream.
    #[inline]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Index of the next unconsumed token.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The next unconsumed token.
    #[inline]
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Consume the current token.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.current()?;
        trace!(pos = self.pos, kind = %token.kind.display_name(), "advance");
        self.pos += 1;
        Some(token)
    }

    /// The grammar class of the current token, if it is an item operator.
    pub fn current_operator_class(&self) -> Option<OperatorClass> {
        self.current()
            .and_then(Token::operator)
            .and_then(ItemOperator::from_symbol)
            .map(ItemOperator::class)
    }

    /// Whether the current token is an operator of `class`.
    #[inline]
    pub fn check_class(&self, class: OperatorClass) -> bool {
        self.current_operator_class() == Some(class)
    }

    /// Whether the current token is the parenthesis `kind`.
    #[inline]
    pub fn check_structural(&self, kind: StructuralKind) -> bool {
        self.current().and_then(Token::structural) == Some(kind)
    }

    /// Span of the current token, or a point just past the last token.
    pub fn current_span(&self) -> Span {
        self.current().map_or_else(|| self.end_span(), |token| token.span)
    }

    /// A point just past the content of the last token.
    pub fn end_span(&self) -> Span {
        self.tokens
            .last()
            .map_or(Span::DUMMY, |token| Span::point(token.span.end))
    }

    /// Span from the current token through the last token.
    pub fn remaining_span(&self) -> Span {
        match (self.current(), self.tokens.last()) {
            (Some(first), Some(last)) => first.span.merge(last.span),
            _ => self.end_span(),
        }
    }
}
