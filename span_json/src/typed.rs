// Copyright 2025 the Spanwiz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::raw::RawDocument;
use crate::{JsonParser, ParseError, ParseResult, log_failure};

/// A [`JsonParser`] that decodes straight into `serde` records.
///
/// This is the faster of the two decoders: the document is decoded in a single pass without
/// building an intermediate tree.
#[derive(Clone, Copy, Debug, Default)]
pub struct TypedJsonParser {
    _private: (),
}

impl TypedJsonParser {
    /// The name reported by [`JsonParser::name`].
    pub const NAME: &'static str = "typed";

    /// Creates a parser.
    pub const fn new() -> Self {
        Self { _private: () }
    }

    fn decode(json: &str) -> ParseResult {
        let document = serde_json::from_str::<Option<RawDocument>>(json)
            .map_err(|error| ParseError::from_serde_in(json, error))?
            .ok_or_else(ParseError::null_document)?;
        document.finish()
    }
}

impl JsonParser for TypedJsonParser {
    fn parse(&self, json: &str) -> ParseResult {
        Self::decode(json).inspect_err(|error| log_failure(Self::NAME, json, error))
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}
