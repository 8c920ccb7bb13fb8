// Copyright 2025 the Spanwiz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution of styled text documents into renderer-ready text.
//!
//! A [`Resolver`] walks the spans of a [`StyledText`](span_model::StyledText) in input order and
//! produces a [`RenderableText`]:
//!
//! - one attribute run per valid span, holding the merged [`ResolvedAttributes`] for that
//!   span's range;
//! - a tag table mapping annotation tags (such as [`URL_TAG`](span_model::URL_TAG)) to the
//!   ranges and values registered under them.
//!
//! Invalid spans and attribute values never abort resolution. They are skipped, logged, and
//! reported as [`Diagnostic`]s by [`Resolver::resolve_with_diagnostics`].
//!
//! [`hit_test`] answers which tagged ranges contain a character offset.
//!
//! ```
//! use span_model::{Span, StyleKind, StyledText};
//! use span_resolve::{Resolver, hit_test};
//!
//! let doc = StyledText::new("Hello URL")
//!     .with_span(Span::new(6, 9, StyleKind::Clickable).with_link("https://example.com"));
//! let text = Resolver::default().resolve(&doc);
//!
//! assert_eq!(text.runs().len(), 1);
//! let hits = hit_test(&text, 7, &[]);
//! assert_eq!(hits[0].value, "https://example.com");
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

mod attributes;
mod color;
mod diagnostics;
mod hit_test;
mod options;
mod renderable;
mod resolver;


pub use attributes::{
    AttributesBuilder, BaselineShift, FontStyle, ResolvedAttributes, ResolvedProperty, Shadow,
    TextDecoration,
};
pub use color::{ColorCache, ColorFormatError};
pub use diagnostics::{Diagnostic, ValidationError, ValidationErrorKind};
pub use hit_test::{TagHit, TagHits, hit_test};
pub use options::ResolveOptions;
pub use renderable::{AttributeRun, RenderableText, TagTable, TaggedRange};
pub use resolver::Resolver;

pub use attributed_text::TextRange;
pub use peniko::Color;
