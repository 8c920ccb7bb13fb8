// Copyright 2025 the Spanwiz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoding styled text documents from JSON.
//!
//! [`JsonParser`] is the narrow interface the rest of the workspace depends on. Two
//! implementations are provided and are interchangeable:
//!
//! - [`TypedJsonParser`] decodes straight into `serde` records in one pass.
//! - [`TreeJsonParser`] decodes into a [`serde_json::Value`] tree and walks it by hand.
//!
//! For the same valid input both produce equal [`StyledText`] values, and for the same invalid
//! input both fail with the same [`ParseErrorKind`]. Messages may differ.
//!
//! Unknown fields are ignored so that documents can grow new fields without breaking older
//! readers. Style names are strict: an unknown `style` fails the whole document. Objects must
//! not repeat a key, and a document or span given as an array is a type mismatch.
//!
//! ```
//! use span_json::{JsonParser, ParseErrorKind, TypedJsonParser};
//!
//! let parser = TypedJsonParser::new();
//! let doc = parser
//!     .parse(r#"{ "text": "Hello", "spans": [{ "start": 0, "end": 5, "style": "Bold" }] }"#)
//!     .unwrap();
//! assert_eq!(doc.spans.len(), 1);
//!
//! let err = parser.parse("null").unwrap_err();
//! assert_eq!(err.kind(), ParseErrorKind::NullDocument);
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

mod encode;
mod error;
mod raw;
mod strict;
mod tree;
mod typed;


pub use encode::{to_json, to_json_pretty};
pub use error::{ParseError, ParseErrorKind};
pub use tree::TreeJsonParser;
pub use typed::TypedJsonParser;

use span_model::StyledText;

/// The outcome of parsing one document.
pub type ParseResult = Result<StyledText, ParseError>;

/// Decodes a JSON string into a [`StyledText`].
///
/// Implementations never panic on malformed input; every failure is reported as a
/// [`ParseError`].
pub trait JsonParser {
    /// Parses `json` into a document.
    fn parse(&self, json: &str) -> ParseResult;

    /// A short name for this implementation, used in diagnostics.
    fn name(&self) -> &'static str;
}

impl<P: JsonParser + ?Sized> JsonParser for &P {
    fn parse(&self, json: &str) -> ParseResult {
        (**self).parse(json)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<P: JsonParser + ?Sized> JsonParser for Box<P> {
    fn parse(&self, json: &str) -> ParseResult {
        (**self).parse(json)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Returns the parser registered under `name` (`"typed"` or `"tree"`).
pub fn parser_by_name(name: &str) -> Option<Box<dyn JsonParser + Send + Sync>> {
    match name {
        TypedJsonParser::NAME => Some(Box::new(TypedJsonParser::new())),
        TreeJsonParser::NAME => Some(Box::new(TreeJsonParser::new())),
        _ => None,
    }
}

/// The names accepted by [`parser_by_name`].
pub const PARSER_NAMES: [&str; 2] = [TypedJsonParser::NAME, TreeJsonParser::NAME];

fn log_failure(parser: &str, json: &str, error: &ParseError) {
    log::debug!(
        "{parser}: failed to parse styled text ({} bytes): {error}",
        json.len()
    );
}
