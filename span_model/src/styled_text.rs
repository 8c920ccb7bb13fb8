// Copyright 2025 the Spanwiz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::Span;

/// A base string plus the spans to apply to it.
///
/// Spans keep the order they were given in. They are not required to be sorted and may overlap.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StyledText {
    /// The text the span offsets refer to.
    pub text: String,
    /// Style instructions, in input order.
    pub spans: Vec<Span>,
}

impl StyledText {
    /// Creates a document with no spans.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
        }
    }

    /// Returns the document with `span` appended.
    pub fn with_span(mut self, span: Span) -> Self {
        self.spans.push(span);
        self
    }

    /// Returns the document with all of `spans` appended, in order.
    pub fn with_spans(mut self, spans: impl IntoIterator<Item = Span>) -> Self {
        self.spans.extend(spans);
        self
    }
}
