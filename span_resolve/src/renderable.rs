// Copyright 2025 the Spanwiz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::ops::Range;
use std::sync::Arc;

use attributed_text::{AttributedText, TextRange};

use crate::ResolvedAttributes;

/// A range of text registered under a tag, with its associated value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaggedRange {
    /// The characters covered.
    pub range: TextRange,
    /// The associated value, such as a link target.
    pub value: String,
}

/// Tagged ranges grouped by tag.
///
/// Tags are kept in the order they were first registered and ranges in the order they were
/// added, so iteration is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagTable {
    entries: Vec<(String, Vec<TaggedRange>)>,
}

impl TagTable {
    /// Registers `value` over `range` under `tag`.
    pub(crate) fn insert(&mut self, tag: &str, range: TextRange, value: String) {
        let entry = TaggedRange { range, value };
        match self.entries.iter_mut().find(|(name, _)| name == tag) {
            Some((_, ranges)) => ranges.push(entry),
            None => self.entries.push((tag.to_owned(), vec![entry])),
        }
    }

    /// The ranges registered under `tag`, in insertion order.
    pub fn get(&self, tag: &str) -> &[TaggedRange] {
        self.entries
            .iter()
            .find(|(name, _)| name == tag)
            .map(|(_, ranges)| ranges.as_slice())
            .unwrap_or_default()
    }

    /// Iterates over every tag and its ranges.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &[TaggedRange])> + '_ {
        self.entries
            .iter()
            .map(|(tag, ranges)| (tag.as_str(), ranges.as_slice()))
    }

    /// The number of distinct tags.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no range is tagged.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A resolved attribute run: the span's range and its merged attributes.
pub type AttributeRun<'a> = (TextRange, &'a ResolvedAttributes);

/// Resolved, renderer-ready text.
///
/// Holds the base string, one attribute run per resolved span (in span order, possibly
/// overlapping) and the [`TagTable`]. Offsets are character offsets; use
/// [`byte_range`](Self::byte_range) to index the UTF-8 string.
///
/// The value is immutable once built and cheap to clone.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderableText {
    text: AttributedText<Arc<str>, ResolvedAttributes>,
    tags: TagTable,
}

impl RenderableText {
    pub(crate) fn new(text: Arc<str>) -> Self {
        Self {
            text: AttributedText::new(text),
            tags: TagTable::default(),
        }
    }

    /// Text with no runs and no tags.
    pub fn plain(text: impl Into<Arc<str>>) -> Self {
        Self::new(text.into())
    }

    pub(crate) fn push_run(&mut self, range: TextRange, attributes: ResolvedAttributes) {
        self.text.apply_attribute(range, attributes);
    }

    pub(crate) fn tags_mut(&mut self) -> &mut TagTable {
        &mut self.tags
    }

    /// The base string.
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Length of the base string in characters.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the base string is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The attribute runs, in span order.
    pub fn runs(&self) -> impl ExactSizeIterator<Item = AttributeRun<'_>> + '_ {
        self.text.attributes_iter()
    }

    /// Every run that covers the character at `offset`, in span order.
    pub fn attributes_at(&self, offset: usize) -> impl Iterator<Item = AttributeRun<'_>> + '_ {
        self.text.attributes_at(offset)
    }

    /// The tag table.
    pub fn tag_table(&self) -> &TagTable {
        &self.tags
    }

    /// The ranges registered under `tag`, in insertion order.
    pub fn get_tag_ranges(&self, tag: &str) -> &[TaggedRange] {
        self.tags.get(tag)
    }

    /// Converts a character range of this text into a byte range of [`text`](Self::text).
    pub fn byte_range(&self, range: TextRange) -> Range<usize> {
        self.text.byte_range(range)
    }

    /// The characters covered by `range`.
    pub fn slice(&self, range: TextRange) -> &str {
        self.text().get(self.byte_range(range)).unwrap_or_default()
    }
}
