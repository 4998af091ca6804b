//! Effect grammar, loosest level first.
//!
//! ```text
//! chain       = conditional [ ">>" chain ]
//! conditional = assignment [ "=>" conditional ]
//! assignment  = primary [ postfix-op | compound-op primary ]
//! primary     = "(" chain ")" | name | number | logic-string
//! ```
//!
//! `>>` and `=>` are right-associative. A group resets to the loosest
//! level, so parentheses may wrap any effect.

use rc_ir::{Expr, OperatorClass, StructuralKind, TokenKind};
use rc_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// Parse at the loosest level: `conditional [ ">>" chain ]`.
    pub(crate) fn parse_chain(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| {
            trace!(pos = self.cursor.position(), "parse_chain");
            let left = self.parse_conditional()?;
            if !self.cursor.check_class(OperatorClass::Chaining) {
                return Ok(left);
            }
            let operator = self.bump_cloned()?;
            let right = self
                .parse_chain()
                .map_err(|err| err.in_context(ErrorContext::Chaining))?;
            Ok(Expr::chaining(left, operator, right))
        })
    }

    /// `assignment [ "=>" conditional ]`.
    fn parse_conditional(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| {
            trace!(pos = self.cursor.position(), "parse_conditional");
            let condition = self.parse_assignment()?;
            if !self.cursor.check_class(OperatorClass::Conditional) {
                return Ok(condition);
            }
            let operator = self.bump_cloned()?;
            let effect = self
                .parse_conditional()
                .map_err(|err| err.in_context(ErrorContext::Conditional))?;
            Ok(Expr::conditional(condition, operator, effect))
        })
    }

    /// `primary [ postfix-op | compound-op primary ]`.
    ///
    /// Both operand positions are primaries, so `A += B => C` binds the
    /// assignment before the conditional.
    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        trace!(pos = self.cursor.position(), "parse_assignment");
        let operand = self.parse_primary()?;
        match self.cursor.current_operator_class() {
            Some(OperatorClass::Postfix) => {
                let operator = self.bump_cloned()?;
                Ok(Expr::increment(operand, operator))
            }
            Some(OperatorClass::CompoundAssignment) => {
                let operator = self.bump_cloned()?;
                let value = self
                    .parse_primary()
                    .map_err(|err| err.in_context(ErrorContext::Assignment))?;
                Ok(Expr::addition_assignment(operand, operator, value))
            }
            _ => Ok(operand),
        }
    }

    /// `"(" chain ")"` or a single atom token.
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let Some(token) = self.cursor.current() else {
            return Err(ParseError::unexpected_end_of_input(self.cursor.end_span()));
        };
        trace!(pos = self.cursor.position(), kind = %token.kind.display_name(), "parse_primary");

        match &token.kind {
            TokenKind::Structural(StructuralKind::OpenParen) => self.parse_grouping(),
            kind if kind.is_atom() => Ok(Expr::atom(self.bump_cloned()?)),
            kind => Err(ParseError::expected_operand(
                token.span,
                kind.display_name(),
            )),
        }
    }

    fn parse_grouping(&mut self) -> Result<Expr, ParseError> {
        let open = self.bump_cloned()?;
        let open_span = open.span;
        let grouped = ensure_sufficient_stack(|| {
            let inner = self.parse_chain()?;
            if !self.cursor.check_structural(StructuralKind::CloseParen) {
                return Err(ParseError::unclosed_paren(
                    open_span,
                    self.cursor.current_span(),
                ));
            }
            let close = self.bump_cloned()?;
            Ok((inner, close))
        });
        let (inner, close) = grouped.map_err(|err| err.in_context(ErrorContext::Grouping))?;
        Ok(Expr::grouping(open, inner, close))
    }
}
