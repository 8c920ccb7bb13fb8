// Copyright 2025 the Spanwiz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Rich error type for attributed text operations.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the attempted range and the length of the
/// text it was checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The start character index of the caller-provided range.
    start: i64,

    /// The end character index (exclusive) of the caller-provided range.
    end: i64,

    /// The length in characters of the underlying text at the time of failure.
    len: usize,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` reports source text length context; an `is_empty` method would be misleading and unused."
)]
impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The start character index of the range provided by the caller.
    ///
    /// This is signed because callers may hand over offsets decoded from untrusted input.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// The end character index of the range provided by the caller.
    pub fn end(&self) -> i64 {
        self.end
    }

    /// The length in characters of the underlying text at the time of the error.
    pub fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn invalid_bounds(start: i64, end: i64, len: usize) -> Self {
        Self {
            kind: ErrorKind::InvalidBounds,
            start,
            end,
            len,
        }
    }

    pub(crate) fn invalid_range(start: i64, end: i64, len: usize) -> Self {
        Self {
            kind: ErrorKind::InvalidRange,
            start,
            end,
            len,
        }
    }

    pub(crate) fn empty_range(start: i64, end: i64, len: usize) -> Self {
        Self {
            kind: ErrorKind::EmptyRange,
            start,
            end,
            len,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::InvalidBounds => write!(
                f,
                "range {}..{} out of bounds for len {}",
                self.start, self.end, self.len
            ),
            ErrorKind::InvalidRange => {
                write!(f, "invalid range {}..{}: start > end", self.start, self.end)
            }
            ErrorKind::EmptyRange => {
                write!(f, "empty range {}..{}: start == end", self.start, self.end)
            }
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// One of the range indices was negative or past the end of the text.
    InvalidBounds,

    /// The provided range had `start > end`.
    InvalidRange,

    /// The provided range had `start == end` and would cover no characters.
    EmptyRange,
}
