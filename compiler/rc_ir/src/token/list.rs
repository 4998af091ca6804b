//! Ordered token sequence produced by the tokenizer.

use std::fmt;

use super::Token;

/// A list of tokens in source order.
///
/// `trailing_trivia` only holds text for inputs with no tokens at all
/// (whitespace-only input); otherwise trailing whitespace belongs to the
/// last token.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct TokenList {
    tokens: Vec<Token>,
    trailing_trivia: String,
}

impl TokenList {
    /// Create an empty token list.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from an existing vector of tokens.
    pub fn from_vec(tokens: Vec<Token>) -> Self {
        TokenList {
            tokens,
            trailing_trivia: String::new(),
        }
    }

    /// Add a token.
    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Record whitespace that no token owns.
    pub fn set_trailing_trivia(&mut self, trivia: impl Into<String>) {
        self.trailing_trivia = trivia.into();
    }

    /// Whitespace that no token owns (only for token-free input).
    pub fn trailing_trivia(&self) -> &str {
        &self.trailing_trivia
    }

    /// Get the number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get tokens as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterate over tokens.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Reassemble the source text from the tokens and their trivia.
    pub fn reconstruct(&self) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            token.write_full(&mut out);
        }
        out.push_str(&self.trailing_trivia);
        out
    }

}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.tokens).finish()
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl From<Vec<Token>> for TokenList {
    fn from(tokens: Vec<Token>) -> Self {
        TokenList::from_vec(tokens)
    }
}

impl IntoIterator for TokenList {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
