//! Low-level scanning primitives for the item-effect tokenizer.
//!
//! Standalone: no `rc_*` dependencies, so tools that only need operator
//! matching (highlighters, completion) can use it without the parser.
//!
//! - [`OperatorTrie`]: prefix tree for greedy operator scanning
//! - [`OperatorTable`]: trie plus the reserved-character set, built once
//! - [`Cursor`]: character cursor with span-ready offsets

mod cursor;
mod table;
mod trie;

pub use cursor::Cursor;
pub use table::OperatorTable;
pub use trie::OperatorTrie;
