// Copyright 2025 the Spanwiz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::Range;

use crate::{TextRange, TextStorage};

/// A block of text with attributes applied to character ranges within the text.
///
/// Attributes are kept in the order they were applied and may overlap freely; no merging or
/// conflict resolution happens here.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributedText<T: Debug + TextStorage, Attr: Debug> {
    text: T,
    attributes: Vec<(TextRange, Attr)>,
}

impl<T: Debug + TextStorage, Attr: Debug> AttributedText<T, Attr> {
    /// Create an `AttributedText` with no attributes applied.
    pub fn new(text: T) -> Self {
        Self {
            text,
            attributes: Vec::default(),
        }
    }

    /// Borrow the underlying text storage.
    pub fn text(&self) -> &T {
        &self.text
    }

    /// Returns the length of the underlying text, in characters.
    pub fn len(&self) -> usize {
        self.text.char_len()
    }

    /// Returns `true` if the underlying text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Borrow the underlying text as `&str` when the storage is contiguous.
    pub fn as_str(&self) -> &str
    where
        T: AsRef<str>,
    {
        self.text.as_ref()
    }

    /// Apply an `attribute` to an already validated `range`.
    pub fn apply_attribute(&mut self, range: TextRange, attribute: Attr) {
        self.attributes.push((range, attribute));
    }

    /// Converts a character range of this text into a byte range.
    ///
    /// Ranges validated against this text always convert; anything else is clamped to the end
    /// of the text.
    pub fn byte_range(&self, range: TextRange) -> Range<usize> {
        let len = self.text.byte_len();
        let start = self.text.byte_offset(range.start()).unwrap_or(len);
        let end = self.text.byte_offset(range.end()).unwrap_or(len);
        start..end
    }

    /// Iterate over all attributes and the ranges they apply to.
    ///
    /// Attributes are yielded in the order they were applied.
    pub fn attributes_iter(&self) -> impl ExactSizeIterator<Item = (TextRange, &Attr)> + '_ {
        self.attributes.iter().map(|(range, attr)| (*range, attr))
    }

    /// Get an iterator over the attributes whose range contains the character `index`.
    ///
    /// This doesn't handle conflicting attributes, it just reports everything in application
    /// order.
    pub fn attributes_at(&self, index: usize) -> impl Iterator<Item = (TextRange, &Attr)> + '_ {
        self.attributes_iter()
            .filter(move |(range, _)| range.contains(index))
    }
}

#[cfg(test)]
mod tests {
    use crate::{AttributedText, TextRange};
    use alloc::vec::Vec;

    #[derive(Debug, PartialEq)]
    enum TestAttribute {
        Keep,
        Remove,
    }

    #[test]
    fn attributes_at() {
        let t = "Hello!";
        let mut at = AttributedText::new(t);

        at.apply_attribute(TextRange::new(t, 1..3).unwrap(), TestAttribute::Keep);
        at.apply_attribute(TextRange::new(t, 2..5).unwrap(), TestAttribute::Remove);

        assert!(at.attributes_at(0).next().is_none());
        let at_two: Vec<_> = at.attributes_at(2).map(|(_, attr)| attr).collect();
        assert_eq!(at_two, [&TestAttribute::Keep, &TestAttribute::Remove]);
        let at_three: Vec<_> = at.attributes_at(3).map(|(_, attr)| attr).collect();
        assert_eq!(at_three, [&TestAttribute::Remove]);
        assert!(at.attributes_at(5).next().is_none());
    }

    #[test]
    fn attributes_keep_application_order() {
        let t = "Hello world";
        let mut at = AttributedText::new(t);
        at.apply_attribute(TextRange::new(t, 6..11).unwrap(), TestAttribute::Remove);
        at.apply_attribute(TextRange::new(t, 0..11).unwrap(), TestAttribute::Keep);
        at.apply_attribute(TextRange::new(t, 6..11).unwrap(), TestAttribute::Keep);

        let all: Vec<_> = at
            .attributes_iter()
            .map(|(range, attr)| (range.as_range(), attr))
            .collect();
        assert_eq!(
            all,
            [
                (6..11, &TestAttribute::Remove),
                (0..11, &TestAttribute::Keep),
                (6..11, &TestAttribute::Keep),
            ]
        );
        assert_eq!(at.attributes_iter().len(), 3);
        assert_eq!(at.len(), 11);
        assert!(!at.is_empty());
    }

    #[test]
    fn byte_range_for_multibyte_text() {
        let mut at = AttributedText::new("naïve café");
        let range = TextRange::new(at.text(), 6..10).unwrap();
        at.apply_attribute(range, ());
        assert_eq!(at.byte_range(range), 7..12);
        assert_eq!(&at.as_str()[at.byte_range(range)], "café");
    }

    #[test]
    fn byte_range_clamps_foreign_ranges() {
        let long = "Hello world";
        let at = AttributedText::<_, ()>::new("héllo");
        let range = TextRange::new(long, 3..9).unwrap();
        assert_eq!(at.byte_range(range), 4..6);
    }
}
