// Copyright 2025 the Spanwiz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spanwiz turns JSON-described styled text into renderer-ready text.
//!
//! A document is a base string plus a list of spans, each naming a style over a character
//! range:
//!
//! ```json
//! {
//!   "text": "Hello Android! I'm Bold and I'm Italic",
//!   "spans": [
//!     { "style": "Bold", "start": 19, "end": 23 },
//!     { "style": "Italic", "start": 31, "end": 38 }
//!   ]
//! }
//! ```
//!
//! [`SpanWiz`] combines a [`JsonParser`] with a [`Resolver`]. The result is a
//! [`RenderableText`]: the base string, one attribute run per span, and a tag table of links
//! that [`hit_test`] and [`route_click`] consult when the user taps the text.
//!
//! ```
//! use spanwiz::{ClickEvent, SpanWiz, TypedJsonParser};
//!
//! let spanwiz = SpanWiz::new(TypedJsonParser::new());
//! let text = spanwiz
//!     .create_from_json(
//!         r#"{ "text": "Hello URL", "spans": [
//!             { "style": "Clickable", "start": 6, "end": 9, "link": "https://example.com" }
//!         ] }"#,
//!     )
//!     .unwrap();
//!
//! let mut opened = Vec::new();
//! let event = spanwiz::route_click(&text, 7, &[], &mut |link: &str| opened.push(link.to_owned()));
//! assert!(matches!(event, ClickEvent::Link(_)));
//! assert_eq!(opened, ["https://example.com"]);
//! ```
//!
//! The building blocks live in their own crates and are re-exported here: [`span_model`] for
//! the document types, [`span_json`] for decoding and [`span_resolve`] for resolution.
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

mod click;
mod spanwiz;

pub use span_json;
pub use span_model;
pub use span_resolve;

pub use span_json::{
    JsonParser, ParseError, ParseErrorKind, ParseResult, TreeJsonParser, TypedJsonParser,
};
pub use span_model::{FontFamilyName, FontWeight, Span, StyleKind, StyledText, URL_TAG};
pub use span_resolve::{
    Diagnostic, RenderableText, ResolveOptions, ResolvedAttributes, Resolver, TagHit, hit_test,
};

pub use click::{ClickEvent, LinkOpener, route_click};
pub use spanwiz::SpanWiz;
