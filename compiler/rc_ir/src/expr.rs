//! Expression tree for item effects.
//!
//! The tree is a closed sum type: one variant per grammatical form, each
//! owning its children and the operator or parenthesis tokens around them.
//! Trees are built once by the parser (or by hand in tests) and never
//! mutated afterwards.
//!
//! Every node answers three questions:
//! - [`Expr::validate`]: is this node locally well-formed?
//! - [`Expr::evaluate`]: which [`EvaluatedType`]s can it be read as?
//! - [`Expr::print`]: what text did it come from?
//!
//! Validation and evaluation report problems as data (`false`, or a type
//! set missing the expected tag); deciding whether to reject is the
//! caller's job.

use std::fmt;

use rc_stack::ensure_sufficient_stack;

use crate::visitor::Visitor;
use crate::{
    EvaluatedType, ItemOperator, OperatorClass, Span, StructuralKind, Token, TokenKind, TypeSet,
};

/// An item-effect expression.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expr {
    /// A single name, number, or logic string.
    Atom(AtomExpr),
    /// `( inner )`
    Grouping(GroupingExpr),
    /// `name++` or `name--`
    Increment(IncrementExpr),
    /// `name += value` or `name -= value`
    AdditionAssignment(AdditionAssignmentExpr),
    /// `condition => effect`
    Conditional(ConditionalExpr),
    /// `effect >> effect`
    Chaining(ChainingExpr),
}

/// A leaf wrapping exactly one token.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AtomExpr {
    pub token: Token,
}

/// A parenthesized sub-expression. Nested parentheses stay nested.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct GroupingExpr {
    pub open: Token,
    pub inner: Box<Expr>,
    pub close: Token,
}

/// A postfix increment or decrement.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IncrementExpr {
    pub operand: Box<Expr>,
    pub operator: Token,
}

/// A compound assignment (`+=`, `-=`).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AdditionAssignmentExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

/// An effect guarded by a condition.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ConditionalExpr {
    pub condition: Box<Expr>,
    pub operator: Token,
    pub effect: Box<Expr>,
}

/// Two effects applied in sequence.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ChainingExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

impl Expr {
    pub fn atom(token: Token) -> Self {
        Expr::Atom(AtomExpr { token })
    }

    pub fn grouping(open: Token, inner: Expr, close: Token) -> Self {
        Expr::Grouping(GroupingExpr {
            open,
            inner: Box::new(inner),
            close,
        })
    }

    pub fn increment(operand: Expr, operator: Token) -> Self {
        Expr::Increment(IncrementExpr {
            operand: Box::new(operand),
            operator,
        })
    }

    pub fn addition_assignment(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::AdditionAssignment(AdditionAssignmentExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    pub fn conditional(condition: Expr, operator: Token, effect: Expr) -> Self {
        Expr::Conditional(ConditionalExpr {
            condition: Box::new(condition),
            operator,
            effect: Box::new(effect),
        })
    }

    pub fn chaining(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Chaining(ChainingExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    /// Short name of the node kind, for logs and error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Atom(_) => "atom",
            Expr::Grouping(_) => "grouping",
            Expr::Increment(_) => "increment",
            Expr::AdditionAssignment(_) => "compound assignment",
            Expr::Conditional(_) => "conditional",
            Expr::Chaining(_) => "chaining",
        }
    }

    /// Check local structural legality.
    ///
    /// A grouping is valid whenever its contents are, even if the grouped
    /// expression is not itself an item effect.
    pub fn validate(&self) -> bool {
        self.check().0
    }

    /// Infer the set of types this expression can be read as.
    ///
    /// Never fails: a mismatch shows up as an empty set (or one missing the
    /// tag the caller wanted).
    pub fn evaluate(&self) -> TypeSet {
        self.check().1
    }

    /// Validity and type set in one bottom-up pass, so each subtree is
    /// visited once.
    fn check(&self) -> (bool, TypeSet) {
        match self {
            Expr::Atom(atom) => {
                let types = match atom.token.kind {
                    TokenKind::Name(_) => TypeSet::TERM_LIKE | TypeSet::BOOL,
                    TokenKind::Number(_) => TypeSet::INT,
                    TokenKind::LogicString(_) => TypeSet::BOOL,
                    TokenKind::Operator(_) | TokenKind::Structural(_) => TypeSet::empty(),
                };
                (atom.token.kind.is_atom(), types)
            }
            Expr::Grouping(group) => {
                let (inner_valid, types) = ensure_sufficient_stack(|| group.inner.check());
                let valid = group.open.structural() == Some(StructuralKind::OpenParen)
                    && group.close.structural() == Some(StructuralKind::CloseParen)
                    && inner_valid;
                (valid, types)
            }
            Expr::Increment(inc) => {
                let target = is_name_atom(&inc.operand);
                let valid =
                    target && operator_class(&inc.operator) == Some(OperatorClass::Postfix);
                (valid, effect_if(target))
            }
            Expr::AdditionAssignment(assign) => {
                let (right_valid, right) = ensure_sufficient_stack(|| assign.right.check());
                let target = is_name_atom(&assign.left) && is_numeric(right);
                let valid = target
                    && operator_class(&assign.operator) == Some(OperatorClass::CompoundAssignment)
                    && right_valid;
                (valid, effect_if(target))
            }
            Expr::Conditional(cond) => {
                let (condition_valid, condition) =
                    ensure_sufficient_stack(|| cond.condition.check());
                let (effect_valid, effect) = ensure_sufficient_stack(|| cond.effect.check());
                let guarded = condition.has(EvaluatedType::Bool);
                let valid = cond.operator.is_operator(ItemOperator::Conditional.as_str())
                    && condition_valid
                    && effect_valid
                    && guarded
                    && effect.has(EvaluatedType::ItemEffect);
                let types = if guarded { effect } else { TypeSet::empty() };
                (valid, types)
            }
            Expr::Chaining(chain) => {
                let (left_valid, left) = ensure_sufficient_stack(|| chain.left.check());
                let (right_valid, right) = ensure_sufficient_stack(|| chain.right.check());
                let both =
                    left.has(EvaluatedType::ItemEffect) && right.has(EvaluatedType::ItemEffect);
                let valid = chain.operator.is_operator(ItemOperator::Chain.as_str())
                    && left_valid
                    && right_valid
                    && both;
                (valid, effect_if(both))
            }
        }
    }

    /// Move boxed children with children of their own onto `worklist`,
    /// leaving leaves in their place.
    fn detach_children(&mut self, worklist: &mut Vec<Expr>) {
        let mut detach = |child: &mut Expr| {
            if !matches!(child, Expr::Atom(_)) {
                worklist.push(std::mem::replace(child, Expr::leaf()));
            }
        };
        match self {
            Expr::Atom(_) => {}
            Expr::Grouping(group) => detach(&mut *group.inner),
            Expr::Increment(inc) => detach(&mut *inc.operand),
            Expr::AdditionAssignment(assign) => {
                detach(&mut *assign.left);
                detach(&mut *assign.right);
            }
            Expr::Conditional(cond) => {
                detach(&mut *cond.condition);
                detach(&mut *cond.effect);
            }
            Expr::Chaining(chain) => {
                detach(&mut *chain.left);
                detach(&mut *chain.right);
            }
        }
    }

    /// A childless stand-in that owns no heap memory.
    fn leaf() -> Self {
        Expr::atom(Token::dummy(TokenKind::Structural(StructuralKind::OpenParen)))
    }

    /// Whether this expression can be used as an item effect.
    pub fn is_item_effect(&self) -> bool {
        let (valid, types) = self.check();
        valid && types.has(EvaluatedType::ItemEffect)
    }

    /// Reconstruct the source text, trivia included.
    pub fn print(&self) -> String {
        let mut printer = Printer::default();
        printer.visit_expr(self);
        printer.out
    }

    /// Every token of the expression, in source order.
    pub fn tokens(&self) -> Vec<&Token> {
        let mut collector = TokenCollector::default();
        collector.visit_expr(self);
        collector.tokens
    }

    /// Span from the first to the last content character.
    pub fn span(&self) -> Span {
        let tokens = self.tokens();
        match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) => first.span.merge(last.span),
            _ => Span::DUMMY,
        }
    }

    /// Names referenced anywhere in the expression, in source order.
    ///
    /// Logic-string bodies are opaque here and contribute nothing.
    pub fn referenced_names(&self) -> Vec<&str> {
        self.tokens().into_iter().filter_map(Token::name).collect()
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print())
    }
}

impl Drop for Expr {
    // Iterative, so dropping a deeply nested tree cannot exhaust the stack.
    fn drop(&mut self) {
        let mut worklist = Vec::new();
        self.detach_children(&mut worklist);
        while let Some(mut expr) = worklist.pop() {
            expr.detach_children(&mut worklist);
        }
    }
}

fn effect_if(condition: bool) -> TypeSet {
    if condition {
        TypeSet::ITEM_EFFECT
    } else {
        TypeSet::empty()
    }
}

fn is_name_atom(expr: &Expr) -> bool {
    matches!(expr, Expr::Atom(AtomExpr { token }) if matches!(token.kind, TokenKind::Name(_)))
}

fn is_numeric(types: TypeSet) -> bool {
    types.has(EvaluatedType::Int) || types.has(EvaluatedType::TermLike)
}

fn operator_class(token: &Token) -> Option<OperatorClass> {
    token
        .operator()
        .and_then(ItemOperator::from_symbol)
        .map(ItemOperator::class)
}

#[derive(Default)]
struct Printer {
    out: String,
}

impl<'ast> Visitor<'ast> for Printer {
    fn visit_token(&mut self, token: &'ast Token) {
        token.write_full(&mut self.out);
    }
}

#[derive(Default)]
struct TokenCollector<'ast> {
    tokens: Vec<&'ast Token>,
}

impl<'ast> Visitor<'ast> for TokenCollector<'ast> {
    fn visit_token(&mut self, token: &'ast Token) {
        self.tokens.push(token);
    }
}
