// Copyright 2025 the Spanwiz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

use crate::ColorFormatError;

/// A span, or one of its attributes, that was rejected during resolution.
///
/// Rejections are recovered: the span or attribute is skipped and the rest of the document
/// still resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    kind: ValidationErrorKind,
    span_index: usize,
    attribute: Option<&'static str>,
    detail: String,
    source: Option<attributed_text::Error>,
}

impl ValidationError {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    /// Position of the offending span in the document's span list.
    pub fn span_index(&self) -> usize {
        self.span_index
    }

    /// JSON name of the offending attribute, or `None` when the whole span was rejected.
    pub fn attribute(&self) -> Option<&'static str> {
        self.attribute
    }

    pub(crate) fn range(span_index: usize, error: attributed_text::Error) -> Self {
        let kind = match error.kind() {
            attributed_text::ErrorKind::EmptyRange => ValidationErrorKind::EmptyRange,
            _ => ValidationErrorKind::RangeOutOfBounds,
        };
        Self {
            kind,
            span_index,
            attribute: None,
            detail: error.to_string(),
            source: Some(error),
        }
    }

    pub(crate) fn invalid_value(
        span_index: usize,
        attribute: &'static str,
        value: impl fmt::Debug,
        expected: &str,
    ) -> Self {
        Self {
            kind: ValidationErrorKind::InvalidEnumValue,
            span_index,
            attribute: Some(attribute),
            detail: format!("`{attribute}` is {value:?}, expected {expected}"),
            source: None,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "span {}: {}", self.span_index, self.detail)
    }
}

impl core::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|source| source as &(dyn core::error::Error + 'static))
    }
}

/// The non-exhaustive category of a [`ValidationError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ValidationErrorKind {
    /// The span's range is negative, reversed, or reaches past the end of the text.
    RangeOutOfBounds,
    /// The span's range has `start == end`.
    EmptyRange,
    /// A `fontFamily` or `fontWeight` value is not one of the recognized values.
    InvalidEnumValue,
}

/// Something that was skipped while resolving a document.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Diagnostic {
    /// A span or attribute failed validation.
    Validation(ValidationError),
    /// A color attribute could not be parsed and was ignored.
    Color {
        /// Position of the span in the document's span list.
        span_index: usize,
        /// JSON name of the attribute, such as `backgroundColor`.
        attribute: &'static str,
        /// The parse failure.
        error: ColorFormatError,
    },
}

impl Diagnostic {
    /// Position of the span this diagnostic refers to.
    pub fn span_index(&self) -> usize {
        match self {
            Self::Validation(error) => error.span_index(),
            Self::Color { span_index, .. } => *span_index,
        }
    }

    /// The validation error, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(error) => Some(error),
            Self::Color { .. } => None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(error) => error.fmt(f),
            Self::Color {
                span_index,
                attribute,
                error,
            } => write!(f, "span {span_index}: `{attribute}` ignored: {error}"),
        }
    }
}

impl From<ValidationError> for Diagnostic {
    fn from(error: ValidationError) -> Self {
        Self::Validation(error)
    }
}
