//! Source location spans.
//!
//! Offsets count characters (Unicode scalar values), not bytes, so they line
//! up with what an editor shows for the effect text.

use std::fmt;

/// Source location span.
///
/// Layout: 8 bytes total
/// - start: u32 - character offset of the first covered character
/// - end: u32 - character offset one past the last covered character
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Dummy span for hand-built tokens.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Create a span from inclusive first/last offsets.
    ///
    /// `Span::inclusive(2, 9)` covers the eight characters at 2 through 9.
    #[inline]
    pub const fn inclusive(first: u32, last: u32) -> Self {
        Span {
            start: first,
            end: last + 1,
        }
    }

    /// Inclusive offset of the last covered character.
    ///
    /// For an empty span this is one before `start` (saturating at zero),
    /// which is how an empty string body reports its end.
    #[inline]
    pub const fn last(&self) -> u32 {
        self.end.saturating_sub(1)
    }

    /// Merge two spans to create one covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Create a point span (zero-length).
    #[inline]
    pub const fn point(offset: u32) -> Span {
        Span {
            start: offset,
            end: offset,
        }
    }

    /// Convert to a `std::ops::Range`.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests;
