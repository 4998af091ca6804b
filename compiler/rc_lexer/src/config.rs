//! Tokenizer configuration.

/// Grammar-level settings for a [`Tokenizer`](crate::Tokenizer).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TokenizerConfig {
    /// The character that opens and closes a logic string, or `None` if the
    /// grammar has no string literals.
    pub string_delimiter: Option<char>,
}

impl TokenizerConfig {
    /// Backtick, the item-effect grammar's logic-string delimiter.
    pub const DEFAULT_STRING_DELIMITER: char = '`';

    /// A grammar whose strings are delimited by `delimiter`.
    pub const fn with_string_delimiter(delimiter: char) -> Self {
        TokenizerConfig {
            string_delimiter: Some(delimiter),
        }
    }

    /// A grammar with no string literals.
    pub const fn without_strings() -> Self {
        TokenizerConfig {
            string_delimiter: None,
        }
    }

    /// Whether `ch` opens a logic string under this configuration.
    #[inline]
    pub fn is_string_delimiter(&self, ch: char) -> bool {
        self.string_delimiter == Some(ch)
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig::with_string_delimiter(Self::DEFAULT_STRING_DELIMITER)
    }
}
