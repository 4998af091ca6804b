//! Expression visitor.
//!
//! Walks an expression tree in source order. The visitor may mutate its own
//! state during traversal; the tree stays immutable.
//!
//! Default implementations call [`walk_expr`], which visits child
//! expressions and the tokens between them left to right. Override
//! [`Visitor::visit_token`] to see every token exactly once, in the order
//! it appeared in the source.
//!
//! # Example
//!
//! ```
//! use rc_ir::visitor::Visitor;
//! use rc_ir::{Expr, Token, TokenKind};
//!
//! struct CountOperators(usize);
//!
//! impl<'ast> Visitor<'ast> for CountOperators {
//!     fn visit_token(&mut self, token: &'ast Token) {
//!         if matches!(token.kind, TokenKind::Operator(_)) {
//!             self.0 += 1;
//!         }
//!     }
//! }
//!
//! let expr = Expr::increment(
//!     Expr::atom(Token::dummy(TokenKind::Name("Grubsong".into()))),
//!     Token::dummy(TokenKind::Operator("++".into())),
//! );
//! let mut counter = CountOperators(0);
//! counter.visit_expr(&expr);
//! assert_eq!(counter.0, 1);
//! ```

use rc_stack::ensure_sufficient_stack;

use crate::{Expr, Token};

/// Expression visitor trait.
pub trait Visitor<'ast> {
    /// Visit an expression node.
    fn visit_expr(&mut self, expr: &'ast Expr) {
        walk_expr(self, expr);
    }

    /// Visit a token.
    fn visit_token(&mut self, _token: &'ast Token) {}
}

/// Visit the children of `expr` in source order.
pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, expr: &'ast Expr) {
    ensure_sufficient_stack(|| match expr {
        Expr::Atom(atom) => visitor.visit_token(&atom.token),
        Expr::Grouping(group) => {
            visitor.visit_token(&group.open);
            visitor.visit_expr(&group.inner);
            visitor.visit_token(&group.close);
        }
        Expr::Increment(inc) => {
            visitor.visit_expr(&inc.operand);
            visitor.visit_token(&inc.operator);
        }
        Expr::AdditionAssignment(assign) => {
            visitor.visit_expr(&assign.left);
            visitor.visit_token(&assign.operator);
            visitor.visit_expr(&assign.right);
        }
        Expr::Conditional(cond) => {
            visitor.visit_expr(&cond.condition);
            visitor.visit_token(&cond.operator);
            visitor.visit_expr(&cond.effect);
        }
        Expr::Chaining(chain) => {
            visitor.visit_expr(&chain.left);
            visitor.visit_token(&chain.operator);
            visitor.visit_expr(&chain.right);
        }
    });
}
