// Copyright 2025 the Spanwiz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Spanwiz Dev
//!
//! This crate provides sample documents for developing and testing Spanwiz.

/// A sample document to be used for development.
#[derive(Clone, Copy, Debug)]
pub struct Sample {
    /// The name of the sample.
    pub name: &'static str,
    /// The JSON source of the sample.
    pub json: &'static str,
}

/// A collection of valid sample documents.
#[derive(Debug)]
pub struct DocumentSamples {
    /// Every style kind at least once, with fonts and weights.
    pub showcase: Sample,
    /// Two links, one under the default tag and one under `"Click Me"`.
    pub clickable: Sample,
    /// A long paragraph with unsorted spans.
    pub story: Sample,
    /// Bold and italic.
    pub bold_italic: Sample,
    /// Underline and strikethrough.
    pub decorations: Sample,
    /// Superscript and subscript with colors.
    pub scripts: Sample,
    /// Foreground and background colors.
    pub colors: Sample,
    /// A single large font size.
    pub font_size: Sample,
    /// Letter spacing and a shadow.
    pub spacing_shadow: Sample,
    /// Adjacent links under different tags: `"Hello URL (Click Me)"`.
    pub hit_test: Sample,
    /// Multi-byte characters before and inside spans.
    pub unicode: Sample,
}

impl DocumentSamples {
    /// Creates a new collection of sample documents.
    pub const fn new() -> Self {
        Self {
            showcase: Sample {
                name: "showcase",
                json: include_str!("../assets/documents/showcase.json"),
            },
            clickable: Sample {
                name: "clickable",
                json: include_str!("../assets/documents/clickable.json"),
            },
            story: Sample {
                name: "story",
                json: include_str!("../assets/documents/story.json"),
            },
            bold_italic: Sample {
                name: "bold_italic",
                json: include_str!("../assets/documents/bold_italic.json"),
            },
            decorations: Sample {
                name: "decorations",
                json: include_str!("../assets/documents/decorations.json"),
            },
            scripts: Sample {
                name: "scripts",
                json: include_str!("../assets/documents/scripts.json"),
            },
            colors: Sample {
                name: "colors",
                json: include_str!("../assets/documents/colors.json"),
            },
            font_size: Sample {
                name: "font_size",
                json: include_str!("../assets/documents/font_size.json"),
            },
            spacing_shadow: Sample {
                name: "spacing_shadow",
                json: include_str!("../assets/documents/spacing_shadow.json"),
            },
            hit_test: Sample {
                name: "hit_test",
                json: include_str!("../assets/documents/hit_test.json"),
            },
            unicode: Sample {
                name: "unicode",
                json: include_str!("../assets/documents/unicode.json"),
            },
        }
    }

    /// All samples, in a stable order.
    pub fn all(&self) -> [Sample; 11] {
        [
            self.showcase,
            self.clickable,
            self.story,
            self.bold_italic,
            self.decorations,
            self.scripts,
            self.colors,
            self.font_size,
            self.spacing_shadow,
            self.hit_test,
            self.unicode,
        ]
    }

    /// Looks up a sample by name.
    pub fn get(&self, name: &str) -> Option<Sample> {
        self.all().into_iter().find(|sample| sample.name == name)
    }
}

impl Default for DocumentSamples {
    fn default() -> Self {
        Self::new()
    }
}

/// Documents that are not well-formed JSON.
pub const SYNTAX_ERRORS: &[&str] = &[
    "",
    "{",
    r#"{ "text": "a" "spans": [] }"#,
    r#"{ "text": "a", "spans": [], }"#,
    r#"{ "text": "a", "spans": [ }"#,
    r#"{ text: "a", spans: [] }"#,
    "not json",
    r#"{ "text": 5, "spans": [ }"#,
    r#"{ "text": "a", "text": "b", "spans": ["#,
];

/// Well-formed documents that lack a required field, or set one to `null`.
pub const MISSING_FIELDS: &[&str] = &[
    "{}",
    r#"{ "spans": [] }"#,
    r#"{ "text": "a" }"#,
    r#"{ "text": null, "spans": [] }"#,
    r#"{ "text": "a", "spans": null }"#,
    r#"{ "text": "a", "spans": [{ "end": 1, "style": "Bold" }] }"#,
    r#"{ "text": "a", "spans": [{ "start": 0, "style": "Bold" }] }"#,
    r#"{ "text": "a", "spans": [{ "start": 0, "end": 1 }] }"#,
    r#"{ "text": "a", "spans": [{ "start": 0, "end": 1, "style": null }] }"#,
];

/// Well-formed documents with a field of the wrong type, an unknown style name, an array where
/// an object belongs, or an object that repeats a key.
pub const TYPE_MISMATCHES: &[&str] = &[
    "[]",
    "42",
    r#""text""#,
    r#"{ "text": 5, "spans": [] }"#,
    r#"{ "text": "a", "spans": {} }"#,
    r#"{ "text": "a", "spans": [1] }"#,
    r#"{ "text": "a", "spans": [null] }"#,
    r#"{ "text": "a", "spans": [{ "start": "0", "end": 1, "style": "Bold" }] }"#,
    r#"{ "text": "a", "spans": [{ "start": 0.5, "end": 1, "style": "Bold" }] }"#,
    r#"{ "text": "a", "spans": [{ "start": 0, "end": 1, "style": "Blink" }] }"#,
    r#"{ "text": "a", "spans": [{ "start": 0, "end": 1, "style": 3 }] }"#,
    r#"{ "text": "a", "spans": [{ "start": 0, "end": 1, "style": "bold" }] }"#,
    r#"{ "text": "a", "spans": [{ "start": 0, "end": 1, "style": "Color", "color": 255 }] }"#,
    r#"{ "text": "a", "spans": [{ "start": 0, "end": 1, "style": "Custom", "fontWeight": "bold" }] }"#,
    r#"{ "text": "a", "spans": [{ "start": 0, "end": 1, "style": "Shadow", "radius": "2" }] }"#,
    r#"{ "text": "a", "spans": [{ "start": 0, "end": 1, "style": "Bold", "fontSize": 12.5 }] }"#,
    r#"{ "text": "a", "spans": [{ "start": 0, "style": "Bold", "end": 5000000000 }] }"#,
    r#"{ "text": "a", "spans": [{ "end": 1, "style": "Bold" }, { "start": 0, "end": 1, "style": "Nope" }] }"#,
    r#"{ "spans": [{ "start": 0, "end": 1, "style": "Nope" }] }"#,
    r#"["Hello", []]"#,
    "[null, null]",
    r#"{ "text": "a", "spans": [[0, 1, "Bold"]] }"#,
    r#"{ "text": "a", "spans": [{ "start": 0, "end": 1, "style": { "Bold": null } }] }"#,
    r#"{ "text": "a", "spans": [{ "start": 0, "end": 1, "style": true }] }"#,
    r#"{ "text": "a", "text": "b", "spans": [] }"#,
    r#"{ "text": "a", "text": null, "spans": [] }"#,
    r#"{ "text": "a", "spans": [{ "start": 0, "start": 0, "end": 1, "style": "Bold" }] }"#,
    r#"{ "text": "a", "spans": [], "extra": 1, "extra": 1 }"#,
    r#"{ "text": "a", "spans": [{ "start": 0, "end": 1, "style": "Bold", "meta": { "k": 1, "k": 2 } }] }"#,
];
