// Copyright 2025 the Spanwiz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::{Error, TextStorage};

/// A validated, non-empty character range into a text buffer.
///
/// This is a convenience wrapper around `Range<usize>` that carries invariants useful for
/// attributed text APIs:
///
/// - `start < end`
/// - `end` is within the text bounds
///
/// Offsets count characters (Unicode scalar values), not bytes. Use
/// [`TextStorage::byte_offset`] or [`AttributedText::byte_range`] to convert.
///
/// ## Important
///
/// `TextRange` does not currently encode which specific text buffer it was validated against. It
/// is the caller's responsibility to only reuse a `TextRange` with the same underlying text
/// content it was validated for.
///
/// ## Example
///
/// ```
/// use attributed_text::{AttributedText, TextRange};
///
/// let mut text = AttributedText::new("Hello!");
/// let range = TextRange::new(text.text(), 0..5).unwrap();
/// text.apply_attribute(range, ());
/// ```
///
/// [`AttributedText::byte_range`]: crate::AttributedText::byte_range
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextRange {
    start: usize,
    end: usize,
}

impl TextRange {
    /// Returns a validated `TextRange` for the provided text.
    #[inline]
    pub fn new<T: TextStorage + ?Sized>(text: &T, range: Range<usize>) -> Result<Self, Error> {
        // Offsets beyond `i64::MAX` are far past any text we could hold, so saturating keeps
        // the error message meaningful.
        let start = i64::try_from(range.start).unwrap_or(i64::MAX);
        let end = i64::try_from(range.end).unwrap_or(i64::MAX);
        Self::from_signed(text, start, end)
    }

    /// Validates a possibly negative `start..end` pair, as decoded from untrusted input.
    pub fn from_signed<T: TextStorage + ?Sized>(
        text: &T,
        start: i64,
        end: i64,
    ) -> Result<Self, Error> {
        let text_len = text.char_len();
        if start > end {
            return Err(Error::invalid_range(start, end, text_len));
        }
        let (Ok(ustart), Ok(uend)) = (usize::try_from(start), usize::try_from(end)) else {
            return Err(Error::invalid_bounds(start, end, text_len));
        };
        if uend > text_len {
            return Err(Error::invalid_bounds(start, end, text_len));
        }
        if ustart == uend {
            return Err(Error::empty_range(start, end, text_len));
        }
        Ok(Self {
            start: ustart,
            end: uend,
        })
    }

    /// The start character offset.
    #[must_use]
    #[inline]
    pub const fn start(self) -> usize {
        self.start
    }

    /// The end character offset (exclusive).
    #[must_use]
    #[inline]
    pub const fn end(self) -> usize {
        self.end
    }

    /// The number of characters covered.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    /// Always `false` for validated ranges.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start >= self.end
    }

    /// Returns `true` if `offset` lies within `start..end`.
    #[must_use]
    #[inline]
    pub const fn contains(self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Returns this range as a `Range<usize>`.
    #[must_use]
    #[inline]
    pub fn as_range(self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<TextRange> for Range<usize> {
    #[inline]
    fn from(value: TextRange) -> Self {
        value.as_range()
    }
}

#[cfg(test)]
mod tests {
    use super::TextRange;
    use crate::ErrorKind;

    #[test]
    fn validates_ok_ranges() {
        let t = "Hello!";
        assert!(TextRange::new(&t, 0..6).is_ok());
        assert!(TextRange::new(&t, 1..3).is_ok());
        assert!(TextRange::from_signed(&t, 5, 6).is_ok());
    }

    #[test]
    #[expect(
        clippy::reversed_empty_ranges,
        reason = "We want an invalid range for testing."
    )]
    fn rejects_start_greater_than_end() {
        let t = "Hello!";
        let err = TextRange::new(&t, 4..3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
        assert_eq!(err.start(), 4);
        assert_eq!(err.end(), 3);
        assert_eq!(err.len(), 6);
    }

    #[test]
    fn rejects_empty() {
        let t = "Hello!";
        let err = TextRange::new(&t, 2..2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyRange);
    }

    #[test]
    fn rejects_out_of_bounds() {
        let t = "Hello!";
        let err = TextRange::new(&t, 0..7).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBounds);
        assert_eq!(err.start(), 0);
        assert_eq!(err.end(), 7);
        assert_eq!(err.len(), 6);

        let err = TextRange::from_signed(&t, -1, 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBounds);
        assert_eq!(err.start(), -1);
    }

    #[test]
    fn bounds_count_characters_not_bytes() {
        // "é" is 2 bytes in UTF-8 but a single character.
        let t = "éclair";
        assert_eq!(t.len(), 7);
        assert!(TextRange::new(&t, 0..6).is_ok());
        let err = TextRange::new(&t, 0..7).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBounds);
        assert_eq!(err.len(), 6);
    }

    #[test]
    fn contains_is_half_open() {
        let r = TextRange::new("Hello world", 6..9).unwrap();
        assert!(!r.contains(5));
        assert!(r.contains(6));
        assert!(r.contains(8));
        assert!(!r.contains(9));
        assert_eq!(r.len(), 3);
    }
}
