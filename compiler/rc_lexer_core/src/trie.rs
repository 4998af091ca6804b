//! Prefix tree over operator strings.
//!
//! Each node stands for one prefix. A node knows every operator that can
//! still be completed from it (its *candidates*, including its own operator
//! when it is terminal) and, if the prefix is itself an operator, that
//! operator's text.
//!
//! ```text
//! operators: ++  +=  =>  >>
//!
//! root {++, +=, =>, >>}
//!  ├─ '+' {++, +=}
//!  │   ├─ '+' {++}  = "++"
//!  │   └─ '=' {+=}  = "+="
//!  ├─ '=' {=>}
//!  │   └─ '>' {=>}  = "=>"
//!  └─ '>' {>>}
//!      └─ '>' {>>}  = ">>"
//! ```
//!
//! The trie is built once and read-only afterwards, so it can be shared
//! freely between tokenizers.

use std::collections::{BTreeMap, BTreeSet};

/// Shared dead-end node returned by [`OperatorTrie::advance`].
static EXHAUSTED: OperatorTrie = OperatorTrie::new();

/// A node of the operator prefix tree (the root is the empty prefix).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OperatorTrie {
    children: BTreeMap<char, OperatorTrie>,
    candidates: BTreeSet<String>,
    value: Option<String>,
}

impl OperatorTrie {
    /// Create an empty trie.
    pub const fn new() -> Self {
        OperatorTrie {
            children: BTreeMap::new(),
            candidates: BTreeSet::new(),
            value: None,
        }
    }

    /// Build a trie from a set of operator strings.
    pub fn from_operators<I, S>(operators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = OperatorTrie::new();
        for op in operators {
            trie.insert(op.as_ref());
        }
        trie
    }

    /// Add an operator, marking its final node as terminal.
    ///
    /// The empty string is not an operator and is ignored.
    pub fn insert(&mut self, operator: &str) {
        if operator.is_empty() {
            return;
        }
        let mut node = self;
        node.candidates.insert(operator.to_string());
        for ch in operator.chars() {
            node = node.children.entry(ch).or_default();
            node.candidates.insert(operator.to_string());
        }
        node.value = Some(operator.to_string());
    }

    /// Step to the child for `ch`.
    ///
    /// Returns a node with no candidates when no operator continues with
    /// `ch`, so callers can test exhaustion with
    /// [`has_candidates`](Self::has_candidates) instead of matching.
    pub fn advance(&self, ch: char) -> &OperatorTrie {
        self.children.get(&ch).unwrap_or(&EXHAUSTED)
    }

    /// Operators reachable from this node, including its own.
    pub fn candidates(&self) -> &BTreeSet<String> {
        &self.candidates
    }

    /// Whether any operator can still be completed from this node.
    #[inline]
    pub fn has_candidates(&self) -> bool {
        !self.candidates.is_empty()
    }

    /// The operator this node completes, if it is terminal.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

}
