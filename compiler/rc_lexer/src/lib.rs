//! Tokenizer for item-effect expressions.
//!
//! Converts effect text into a [`TokenList`] that keeps every character of
//! the input: whitespace around each token is stored as leading/trailing
//! trivia, so the list can be printed back byte-for-byte.
//!
//! ```text
//! "  Grubsong+=1 >> `Grubsong = 1`"
//!  ├─ Name "Grubsong"          lead "  "
//!  ├─ Operator "+="
//!  ├─ Number 1                 trail " "
//!  ├─ Operator ">>"            trail " "
//!  └─ LogicString "Grubsong = 1"  lead "`"  trail "`"
//! ```
//!
//! Operators come from an [`OperatorCatalog`]; the characters they use are
//! reserved and never appear in names.

mod config;
mod lex_error;
mod scan_state;
mod tokenizer;

pub use config::TokenizerConfig;
pub use lex_error::{LexError, LexErrorContext, LexErrorKind};
pub use tokenizer::{classify_word, Tokenizer};

use rc_ir::{OperatorCatalog, TokenList};
use rc_lexer_core::OperatorTable;

/// Build the reserved-character table and operator trie for `catalog`.
pub fn operator_table<C: OperatorCatalog + ?Sized>(catalog: &C) -> OperatorTable {
    OperatorTable::new(catalog.operators())
}

/// Tokenize `source` with `catalog` and the default configuration.
///
/// Builds a fresh [`OperatorTable`]; callers tokenizing many inputs should
/// build the table once and reuse a [`Tokenizer`].
pub fn tokenize<C: OperatorCatalog + ?Sized>(
    catalog: &C,
    source: &str,
) -> Result<TokenList, LexError> {
    let table = operator_table(catalog);
    Tokenizer::new(&table, TokenizerConfig::default()).tokenize(source)
}
