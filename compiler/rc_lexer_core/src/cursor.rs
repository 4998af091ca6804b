//! Character cursor over the source text.
//!
//! Tracks two positions at once: the byte index used for slicing the
//! `&str`, and the character offset reported in spans.

/// Cursor over a source string.
///
/// The cursor is [`Copy`], so callers can snapshot and restore it cheaply.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Byte index of the current character.
    byte_pos: usize,
    /// Character offset of the current character.
    offset: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Cursor {
            source,
            byte_pos: 0,
            offset: 0,
        }
    }

    /// The character under the cursor, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Whether the whole source has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.byte_pos >= self.source.len()
    }

    /// Consume the current character and return it.
    #[inline]
    pub fn bump(&mut self) -> Option<char> {
        let ch = self.current()?;
        self.byte_pos += ch.len_utf8();
        self.offset += 1;
        Some(ch)
    }

    /// Character offset of the current position.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// The unconsumed remainder of the source.
    #[inline]
    pub fn rest(&self) -> &'a str {
        self.source.get(self.byte_pos..).unwrap_or_default()
    }
}
