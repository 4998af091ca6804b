//! RC IR - shared types for the item-effect language.
//!
//! This crate contains the data structures every phase agrees on:
//! - Spans for source locations (character offsets)
//! - Tokens and `TokenList` for tokenizer output, trivia included
//! - The operator vocabulary and the `OperatorCatalog` seam
//! - Evaluated types and type sets
//! - The expression tree with its validate / evaluate / print contract
//!
//! # Round-trip law
//!
//! Tokens keep the whitespace around their content, so for every input the
//! parser accepts, printing the tree reproduces the input exactly.

mod expr;
mod operator;
mod span;
mod token;
mod types;
pub mod visitor;

pub use expr::{
    AdditionAssignmentExpr, AtomExpr, ChainingExpr, ConditionalExpr, Expr, GroupingExpr,
    IncrementExpr,
};
pub use operator::{ItemOperator, ItemOperators, OperatorCatalog, OperatorClass};
pub use span::Span;
pub use token::{StructuralKind, Token, TokenKind, TokenList};
pub use types::{EvaluatedType, TypeSet};
