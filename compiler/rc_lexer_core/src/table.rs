//! Operator lookup tables built once per operator set.

use rustc_hash::FxHashSet;

use crate::OperatorTrie;

/// The reserved-character set and operator trie for one operator set.
///
/// A character is *reserved* when it appears anywhere in any operator;
/// reserved characters can never be part of a name or number.
///
/// Built once and immutable afterwards; share it by reference across any
/// number of tokenizers.
#[derive(Clone, Debug, Default)]
pub struct OperatorTable {
    trie: OperatorTrie,
    reserved: FxHashSet<char>,
}

impl OperatorTable {
    /// Build the table from operator strings.
    pub fn new<I, S>(operators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let operators: Vec<S> = operators.into_iter().collect();
        let reserved = operators.iter().flat_map(|op| op.as_ref().chars()).collect();
        let trie = OperatorTrie::from_operators(&operators);
        OperatorTable { trie, reserved }
    }

    /// The operator trie.
    #[inline]
    pub fn trie(&self) -> &OperatorTrie {
        &self.trie
    }

    /// Whether `ch` appears in any operator.
    #[inline]
    pub fn is_reserved(&self, ch: char) -> bool {
        self.reserved.contains(&ch)
    }
}

#[cfg(test)]
mod tests;
