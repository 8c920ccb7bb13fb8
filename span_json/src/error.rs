// Copyright 2025 the Spanwiz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::error::Error as StdError;
use std::fmt;

use serde::de::IgnoredAny;

/// Error returned when a document cannot be decoded.
///
/// A failed document produces no partial result. The [`kind`](Self::kind) is the same for every
/// [`JsonParser`](crate::JsonParser) implementation; the message is implementation specific.
#[derive(Debug)]
pub struct ParseError {
    kind: ParseErrorKind,
    message: String,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl ParseError {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// A human readable description of the failure.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn new(kind: ParseErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub(crate) fn with_source(
        mut self,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub(crate) fn missing_field(path: &str) -> Self {
        Self::new(
            ParseErrorKind::MissingField,
            format!("missing required field `{path}`"),
        )
    }

    pub(crate) fn type_mismatch(path: &str, expected: &str) -> Self {
        Self::new(
            ParseErrorKind::TypeMismatch,
            format!("`{path}` should be {expected}"),
        )
    }

    pub(crate) fn null_document() -> Self {
        Self::new(ParseErrorKind::NullDocument, "document is `null`")
    }

    /// Classifies a `serde_json` failure.
    ///
    /// Missing fields never reach this point because required fields are decoded as optional
    /// and checked afterwards.
    pub(crate) fn from_serde(error: serde_json::Error) -> Self {
        use serde_json::error::Category;

        let kind = match error.classify() {
            Category::Syntax | Category::Eof | Category::Io => ParseErrorKind::Syntax,
            Category::Data => ParseErrorKind::TypeMismatch,
        };
        Self::new(kind, error.to_string()).with_source(error)
    }

    /// Classifies a failure to decode `json`, letting syntax errors win over data errors.
    ///
    /// A decoder stops at its first error, and which error comes first depends on how much of
    /// the document the decoder looks at. A data error is therefore only reported once `json`
    /// is known to be well-formed.
    pub(crate) fn from_serde_in(json: &str, error: serde_json::Error) -> Self {
        if error.is_data() {
            if let Err(syntax) = serde_json::from_str::<IgnoredAny>(json) {
                return Self::from_serde(syntax);
            }
        }
        Self::from_serde(error)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl StdError for ParseError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn StdError + 'static))
    }
}

/// The non-exhaustive category of a [`ParseError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// The input is not well-formed JSON.
    Syntax,
    /// A required field (`text`, `spans`, or a span's `start`, `end` or `style`) is absent or
    /// `null`.
    MissingField,
    /// A field has the wrong JSON type, or a value outside its domain such as an unknown style
    /// name.
    TypeMismatch,
    /// The whole document is the JSON literal `null`.
    NullDocument,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Syntax => "syntax error",
            Self::MissingField => "missing field",
            Self::TypeMismatch => "type mismatch",
            Self::NullDocument => "null document",
        })
    }
}
