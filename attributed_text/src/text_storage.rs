// Copyright 2025 the Spanwiz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;

/// A block of text that will be wrapped by an [`AttributedText`].
///
/// [`AttributedText`]: crate::AttributedText
pub trait TextStorage {
    /// The length of the underlying text in characters.
    fn char_len(&self) -> usize;

    /// The length of the underlying text in bytes.
    fn byte_len(&self) -> usize;

    /// Return `true` if the underlying text is empty.
    fn is_empty(&self) -> bool {
        self.byte_len() == 0
    }

    /// Converts a character offset into a byte offset.
    ///
    /// `char_len()` maps to `byte_len()`; anything past that returns `None`.
    fn byte_offset(&self, char_index: usize) -> Option<usize>;
}

impl TextStorage for str {
    fn char_len(&self) -> usize {
        self.chars().count()
    }

    fn byte_len(&self) -> usize {
        self.len()
    }

    fn byte_offset(&self, char_index: usize) -> Option<usize> {
        self.char_indices()
            .map(|(ix, _)| ix)
            .chain(core::iter::once(self.len()))
            .nth(char_index)
    }
}

impl TextStorage for String {
    fn char_len(&self) -> usize {
        self.as_str().char_len()
    }

    fn byte_len(&self) -> usize {
        self.len()
    }

    fn byte_offset(&self, char_index: usize) -> Option<usize> {
        self.as_str().byte_offset(char_index)
    }
}

impl TextStorage for &str {
    fn char_len(&self) -> usize {
        str::char_len(self)
    }

    fn byte_len(&self) -> usize {
        str::len(self)
    }

    fn byte_offset(&self, char_index: usize) -> Option<usize> {
        str::byte_offset(self, char_index)
    }
}

impl TextStorage for Arc<str> {
    fn char_len(&self) -> usize {
        str::char_len(self)
    }

    fn byte_len(&self) -> usize {
        str::len(self)
    }

    fn byte_offset(&self, char_index: usize) -> Option<usize> {
        str::byte_offset(self, char_index)
    }
}
