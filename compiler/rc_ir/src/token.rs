//! Token model for the item-effect language.
//!
//! Every token carries the exact whitespace around its content so the
//! original text can be reassembled character for character:
//!
//! ```text
//! "  Grubsong+=1"
//!  ^^ leading trivia of `Grubsong`
//!    ^^^^^^^^ content (offsets 2..=9)
//! ```
//!
//! For logic strings the delimiters are trivia too: the opening delimiter
//! ends the leading trivia and the closing delimiter starts the trailing
//! trivia, so the content span covers only the string body.

mod list;

pub use list::TokenList;

use std::borrow::Cow;
use std::fmt;

use crate::Span;

/// Which parenthesis a structural token is.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StructuralKind {
    OpenParen,
    CloseParen,
}

impl StructuralKind {
    /// The source character for this structural token.
    pub const fn as_char(self) -> char {
        match self {
            StructuralKind::OpenParen => '(',
            StructuralKind::CloseParen => ')',
        }
    }
}

/// What a token is, with its decoded value.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// A bare name such as `Grubsong` or `CHARMS`.
    Name(String),
    /// An integer literal. Only canonical decimal text lexes to a number.
    Number(i32),
    /// An operator from the active catalog, e.g. `+=` or `>>`.
    Operator(String),
    /// `(` or `)`.
    Structural(StructuralKind),
    /// The body of a delimited logic string, without its delimiters.
    LogicString(String),
}

impl TokenKind {
    /// Short description for error messages ("name", "operator `>>`", ...).
    pub fn display_name(&self) -> String {
        match self {
            TokenKind::Name(name) => format!("name `{name}`"),
            TokenKind::Number(value) => format!("number `{value}`"),
            TokenKind::Operator(op) => format!("operator `{op}`"),
            TokenKind::Structural(kind) => format!("`{}`", kind.as_char()),
            TokenKind::LogicString(_) => "logic string".to_string(),
        }
    }

    /// The text this kind occupies between the token's trivia.
    pub fn content_text(&self) -> Cow<'_, str> {
        match self {
            TokenKind::Name(text) | TokenKind::Operator(text) | TokenKind::LogicString(text) => {
                Cow::Borrowed(text)
            }
            TokenKind::Number(value) => Cow::Owned(value.to_string()),
            TokenKind::Structural(kind) => Cow::Owned(kind.as_char().to_string()),
        }
    }

    /// Whether this kind can stand alone as an atom.
    pub fn is_atom(&self) -> bool {
        matches!(
            self,
            TokenKind::Name(_) | TokenKind::Number(_) | TokenKind::LogicString(_)
        )
    }
}

/// A token: kind, content span, and the verbatim trivia around it.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// Character span of the content, excluding trivia.
    pub span: Span,
    pub leading_trivia: String,
    pub trailing_trivia: String,
}

impl Token {
    /// Create a token with no trivia.
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token {
            kind,
            span,
            leading_trivia: String::new(),
            trailing_trivia: String::new(),
        }
    }

    /// Create a token with the given leading and trailing trivia.
    pub fn with_trivia(
        kind: TokenKind,
        span: Span,
        leading: impl Into<String>,
        trailing: impl Into<String>,
    ) -> Self {
        Token {
            kind,
            span,
            leading_trivia: leading.into(),
            trailing_trivia: trailing.into(),
        }
    }

    /// Create a dummy token for hand-built trees.
    pub fn dummy(kind: TokenKind) -> Self {
        Token::new(kind, Span::DUMMY)
    }

    /// Inclusive offset of the first content character.
    #[inline]
    pub fn start_offset(&self) -> u32 {
        self.span.start
    }

    /// Inclusive offset of the last content character.
    #[inline]
    pub fn end_offset(&self) -> u32 {
        self.span.last()
    }

    /// The content text, without trivia.
    pub fn content_text(&self) -> Cow<'_, str> {
        self.kind.content_text()
    }

    /// Append `leading + content + trailing` to `out`.
    pub fn write_full(&self, out: &mut String) {
        out.push_str(&self.leading_trivia);
        out.push_str(&self.content_text());
        out.push_str(&self.trailing_trivia);
    }

    /// The token as it appeared in source, trivia included.
    pub fn full_text(&self) -> String {
        let mut out = String::new();
        self.write_full(&mut out);
        out
    }

    /// The operator symbol, if this is an operator token.
    pub fn operator(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Operator(op) => Some(op),
            _ => None,
        }
    }

    /// Check whether this is the operator `symbol`.
    pub fn is_operator(&self, symbol: &str) -> bool {
        self.operator() == Some(symbol)
    }

    /// The structural kind, if this is a parenthesis.
    pub fn structural(&self) -> Option<StructuralKind> {
        match self.kind {
            TokenKind::Structural(kind) => Some(kind),
            _ => None,
        }
    }

    /// The name, if this is a name token.
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Name(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} @ {} [{:?}|{:?}]",
            self.kind, self.span, self.leading_trivia, self.trailing_trivia
        )
    }
}

#[cfg(test)]
mod tests;
