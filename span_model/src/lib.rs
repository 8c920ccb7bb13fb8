// Copyright 2025 the Spanwiz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The style vocabulary for JSON-described rich text.
//!
//! - [`StyleKind`] is the closed set of style instructions.
//! - [`Span`] is one instruction over a character range, plus optional attributes that any kind
//!   may carry.
//! - [`StyledText`] is a base string plus its spans, in the order they were given.
//! - [`FontWeight`] and [`FontFamilyName`] are the recognized values for the `fontWeight` and
//!   `fontFamily` attributes.
//!
//! Everything here is a plain typed container: no validation happens at construction time.
//! Ranges and attribute values are checked when a document is resolved.
//!
//! All types implement `serde` traits matching the JSON schema:
//!
//! ```json
//! {
//!   "text": "Hello URL",
//!   "spans": [
//!     { "start": 6, "end": 9, "style": "Clickable", "link": "https://example.invalid" }
//!   ]
//! }
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Enables `std` support in `serde`.
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
#![no_std]

extern crate alloc;

mod font;
mod span;
mod style_kind;
mod styled_text;

#[cfg(test)]
mod tests;

pub use font::{FontFamilyName, FontWeight};
pub use span::Span;
pub use style_kind::{ParseStyleKindError, StyleKind};
pub use styled_text::StyledText;

/// The tag under which links are registered when a clickable span names no tag of its own.
pub const URL_TAG: &str = "URL";
