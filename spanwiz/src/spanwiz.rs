// Copyright 2025 the Spanwiz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use span_json::{JsonParser, ParseError, TypedJsonParser};
use span_model::StyledText;
use span_resolve::{Diagnostic, RenderableText, ResolveOptions, Resolver};

/// A parser and a resolver in one value.
///
/// The resolver's color cache is kept for the life of the `SpanWiz`, so repeated documents
/// don't re-parse their colors.
#[derive(Clone, Debug, Default)]
pub struct SpanWiz<P = TypedJsonParser> {
    parser: P,
    resolver: Resolver,
}

impl<P: JsonParser> SpanWiz<P> {
    /// Creates a `SpanWiz` that decodes with `parser` and resolves with default options.
    pub fn new(parser: P) -> Self {
        Self::with_resolver(parser, Resolver::new(ResolveOptions::default()))
    }

    /// Creates a `SpanWiz` from its parts.
    pub fn with_resolver(parser: P, resolver: Resolver) -> Self {
        Self { parser, resolver }
    }

    /// The parser.
    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// The resolver.
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Parses and resolves `json`, returning `None` if it can't be parsed.
    ///
    /// The parse error is logged; use [`try_create_from_json`](Self::try_create_from_json) to
    /// inspect it.
    pub fn create_from_json(&self, json: &str) -> Option<RenderableText> {
        self.try_create_from_json(json)
            .inspect_err(|error| log::warn!("{}: {error}", self.parser.name()))
            .ok()
    }

    /// Parses and resolves `json`.
    pub fn try_create_from_json(&self, json: &str) -> Result<RenderableText, ParseError> {
        let document = self.parser.parse(json)?;
        Ok(self.create_from_styled_text(&document))
    }

    /// Parses and resolves `json`, also returning what was skipped during resolution.
    pub fn create_with_diagnostics(
        &self,
        json: &str,
    ) -> Result<(RenderableText, Vec<Diagnostic>), ParseError> {
        let document = self.parser.parse(json)?;
        Ok(self.resolver.resolve_with_diagnostics(&document))
    }

    /// Resolves an already decoded document.
    pub fn create_from_styled_text(&self, document: &StyledText) -> RenderableText {
        self.resolver.resolve(document)
    }
}
