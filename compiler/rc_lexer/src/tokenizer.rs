//! The trivia-preserving tokenizer.

use rc_ir::{Span, StructuralKind, TokenKind, TokenList};
use rc_lexer_core::{Cursor, OperatorTable};
use tracing::{debug, trace};

use crate::scan_state::{Phase, ScanState};
use crate::{LexError, TokenizerConfig};

/// Converts effect text into a [`TokenList`].
///
/// Borrows a prebuilt [`OperatorTable`], so one table can serve any number
/// of tokenizers, on any number of threads. Scanning state lives only for
/// the duration of one [`tokenize`](Self::tokenize) call.
#[derive(Copy, Clone, Debug)]
pub struct Tokenizer<'t> {
    table: &'t OperatorTable,
    config: TokenizerConfig,
}

impl<'t> Tokenizer<'t> {
    pub fn new(table: &'t OperatorTable, config: TokenizerConfig) -> Self {
        Tokenizer { table, config }
    }

    pub fn config(&self) -> TokenizerConfig {
        self.config
    }

    /// Tokenize `source`.
    ///
    /// On success, concatenating every token's full text followed by the
    /// list's trailing trivia reproduces `source` exactly.
    ///
    /// # Errors
    ///
    /// Returns the first [`LexError`] found; no partial list is produced.
    pub fn tokenize(&self, source: &str) -> Result<TokenList, LexError> {
        let mut cursor = Cursor::new(source);
        let mut tokens = TokenList::new();

        while !cursor.is_eof() {
            let mut state = ScanState::new(&cursor);
            state.expect_phase(Phase::LeadingTrivia, &cursor);
            state.eat_whitespace(&mut cursor);

            let Some(next) = cursor.current() else {
                tokens.set_trailing_trivia(state.into_leading());
                break;
            };

            let kind = match next {
                '(' => Self::read_structural(&mut state, &mut cursor, StructuralKind::OpenParen),
                ')' => Self::read_structural(&mut state, &mut cursor, StructuralKind::CloseParen),
                ch if self.config.is_string_delimiter(ch) => {
                    Self::read_string(&mut state, &mut cursor, ch)?
                }
                ch if self.table.is_reserved(ch) => self.read_operator(&mut state, &mut cursor)?,
                ch => self.read_name_or_number(&mut state, &mut cursor, ch)?,
            };

            state.expect_phase(Phase::TrailingTrivia, &cursor);
            state.eat_whitespace(&mut cursor);

            let token = state.finish(kind);
            trace!(?token, "scanned token");
            tokens.push(token);
        }

        debug!(tokens = tokens.len(), "tokenized effect text");
        Ok(tokens)
    }

    fn read_structural(
        state: &mut ScanState,
        cursor: &mut Cursor<'_>,
        kind: StructuralKind,
    ) -> TokenKind {
        state.advance(cursor);
        state.consume(cursor);
        state.advance(cursor);
        TokenKind::Structural(kind)
    }

    /// The delimiters are trivia: the opening one ends the leading trivia,
    /// the closing one starts the trailing trivia.
    fn read_string(
        state: &mut ScanState,
        cursor: &mut Cursor<'_>,
        delimiter: char,
    ) -> Result<TokenKind, LexError> {
        let open = cursor.offset();
        state.consume(cursor);
        state.advance(cursor);
        loop {
            match cursor.current() {
                None => return Err(LexError::unterminated_string(open, delimiter)),
                Some(ch) if ch == delimiter => break,
                Some(_) => {
                    state.consume(cursor);
                }
            }
        }
        state.advance(cursor);
        state.consume(cursor);
        Ok(TokenKind::LogicString(state.content().to_owned()))
    }

    /// Greedy maximal munch over the operator trie, without backtracking.
    ///
    /// The first character is always taken. Scanning then continues while
    /// some operator extends the text read so far; wherever it stops, the
    /// text must be a complete operator.
    fn read_operator(
        &self,
        state: &mut ScanState,
        cursor: &mut Cursor<'_>,
    ) -> Result<TokenKind, LexError> {
        state.advance(cursor);
        let start = cursor.offset();

        let mut node = self.table.trie();
        if let Some(first) = state.consume(cursor) {
            node = node.advance(first);
        }
        while let Some(next) = cursor.current() {
            let child = node.advance(next);
            if !child.has_candidates() {
                break;
            }
            state.consume(cursor);
            node = child;
        }

        if node.value().is_none() {
            return Err(LexError::invalid_operator(
                Span::new(start, cursor.offset()),
                state.content(),
            ));
        }
        state.advance(cursor);
        Ok(TokenKind::Operator(state.content().to_owned()))
    }

    fn read_name_or_number(
        &self,
        state: &mut ScanState,
        cursor: &mut Cursor<'_>,
        first: char,
    ) -> Result<TokenKind, LexError> {
        state.advance(cursor);
        let start = cursor.offset();
        while let Some(ch) = cursor.current() {
            if !self.is_word_char(ch) {
                break;
            }
            state.consume(cursor);
        }

        if state.content().is_empty() {
            return Err(LexError::unexpected_character(start, first));
        }
        state.advance(cursor);
        Ok(classify_word(state.content()))
    }

    /// Characters that may appear in a name or number.
    fn is_word_char(&self, ch: char) -> bool {
        !ch.is_whitespace()
            && !matches!(ch, '(' | ')' | '`')
            && !self.config.is_string_delimiter(ch)
            && !self.table.is_reserved(ch)
    }
}

/// Classify a scanned word as a number or a name.
///
/// Only canonical `i32` text is a number, so printing a number token
/// reproduces its source: `007`, `+5` and out-of-range digits stay names.
pub fn classify_word(text: &str) -> TokenKind {
    match text.parse::<i32>() {
        Ok(value) if value.to_string() == text => TokenKind::Number(value),
        _ => TokenKind::Name(text.to_owned()),
    }
}
