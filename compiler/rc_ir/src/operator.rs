//! Operator vocabulary of the item-effect grammar.
//!
//! The tokenizer treats the set of operator strings as an opaque
//! capability ([`OperatorCatalog`]); the parser classifies the strings it
//! receives through [`ItemOperator`].

use std::fmt;

/// Supplies the operator strings a tokenizer should recognize.
pub trait OperatorCatalog {
    /// Every operator string, in any order.
    fn operators(&self) -> Vec<&str>;
}

impl OperatorCatalog for [&str] {
    fn operators(&self) -> Vec<&str> {
        self.to_vec()
    }
}

impl<const N: usize> OperatorCatalog for [&str; N] {
    fn operators(&self) -> Vec<&str> {
        self.to_vec()
    }
}

impl OperatorCatalog for Vec<String> {
    fn operators(&self) -> Vec<&str> {
        self.iter().map(String::as_str).collect()
    }
}

/// The operators of the item-effect grammar.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ItemOperator {
    /// `++`
    Increment,
    /// `--`
    Decrement,
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
    /// `=>`
    Conditional,
    /// `>>`
    Chain,
}

/// How an operator participates in the grammar.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum OperatorClass {
    /// Postfix on a name: `X++`, `X--`.
    Postfix,
    /// Binary on a name and a value: `X += 1`.
    CompoundAssignment,
    /// `condition => effect`
    Conditional,
    /// `effect >> effect`
    Chaining,
}

impl ItemOperator {
    /// All item operators.
    pub const ALL: [ItemOperator; 6] = [
        ItemOperator::Increment,
        ItemOperator::Decrement,
        ItemOperator::AddAssign,
        ItemOperator::SubAssign,
        ItemOperator::Conditional,
        ItemOperator::Chain,
    ];

    /// The operator's source text.
    pub const fn as_str(self) -> &'static str {
        match self {
            ItemOperator::Increment => "++",
            ItemOperator::Decrement => "--",
            ItemOperator::AddAssign => "+=",
            ItemOperator::SubAssign => "-=",
            ItemOperator::Conditional => "=>",
            ItemOperator::Chain => ">>",
        }
    }

    /// Look up an operator by its source text.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == symbol)
    }

    /// The grammatical class of this operator.
    pub const fn class(self) -> OperatorClass {
        match self {
            ItemOperator::Increment | ItemOperator::Decrement => OperatorClass::Postfix,
            ItemOperator::AddAssign | ItemOperator::SubAssign => {
                OperatorClass::CompoundAssignment
            }
            ItemOperator::Conditional => OperatorClass::Conditional,
            ItemOperator::Chain => OperatorClass::Chaining,
        }
    }
}

impl fmt::Display for ItemOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog of the item-effect grammar's operators.
#[derive(Copy, Clone, Debug, Default)]
pub struct ItemOperators;

impl OperatorCatalog for ItemOperators {
    fn operators(&self) -> Vec<&str> {
        ItemOperator::ALL.iter().map(|op| op.as_str()).collect()
    }
}
