// Copyright 2025 the Spanwiz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end checks from JSON to resolved text, run against both decoders.

use spanwiz::span_json::parser_by_name;
use spanwiz::span_resolve::ValidationErrorKind;
use spanwiz::{
    FontFamilyName, FontWeight, JsonParser, ParseErrorKind, SpanWiz, StyleKind, TreeJsonParser,
    TypedJsonParser, URL_TAG,
};
use spanwiz_dev::{DocumentSamples, MISSING_FIELDS, SYNTAX_ERRORS, TYPE_MISMATCHES};

fn both() -> (SpanWiz<TypedJsonParser>, SpanWiz<TreeJsonParser>) {
    (
        SpanWiz::new(TypedJsonParser::new()),
        SpanWiz::new(TreeJsonParser::new()),
    )
}

#[test]
fn decoders_produce_equal_renderables() {
    let (typed, tree) = both();
    for sample in DocumentSamples::new().all() {
        let a = typed.create_from_json(sample.json).unwrap();
        let b = tree.create_from_json(sample.json).unwrap();
        assert_eq!(a, b, "{}", sample.name);
    }
}

#[test]
fn invalid_documents_produce_nothing() {
    let (typed, tree) = both();
    let cases = [
        (ParseErrorKind::Syntax, SYNTAX_ERRORS),
        (ParseErrorKind::MissingField, MISSING_FIELDS),
        (ParseErrorKind::TypeMismatch, TYPE_MISMATCHES),
        (ParseErrorKind::NullDocument, &["null"][..]),
    ];
    for (kind, documents) in cases {
        for json in documents {
            assert!(typed.create_from_json(json).is_none(), "{json}");
            assert!(tree.create_from_json(json).is_none(), "{json}");
            assert_eq!(typed.try_create_from_json(json).unwrap_err().kind(), kind, "{json}");
            assert_eq!(tree.try_create_from_json(json).unwrap_err().kind(), kind, "{json}");
        }
    }
}

/// A one-span document with `overrides` replacing or adding span fields.
fn span_document(overrides: &[(&str, &str)]) -> String {
    let mut fields = vec![("start", "0"), ("end", "5"), ("style", r#""Bold""#)];
    for &(name, value) in overrides {
        match fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(field) => field.1 = value,
            None => fields.push((name, value)),
        }
    }
    let body: Vec<String> = fields
        .iter()
        .map(|(name, value)| format!(r#""{name}": {value}"#))
        .collect();
    format!(r#"{{ "text": "Hello", "spans": [{{ {} }}] }}"#, body.join(", "))
}

#[test]
fn decoders_agree_on_every_field_value_shape() {
    let fields = [
        "start",
        "end",
        "style",
        "color",
        "backgroundColor",
        "fontFamily",
        "fontSize",
        "fontWeight",
        "link",
        "custom",
        "letterSpacing",
        "fontStyle",
        "shadow",
        "radius",
        "shadowOffsetX",
        "shadowOffsetY",
        "spanTag",
        "unknown",
    ];
    let values = [
        "null",
        "true",
        "3",
        "-1",
        "1.5",
        "5000000000",
        r#""x""#,
        r#""Bold""#,
        r##""#FF0000""##,
        "[]",
        "{}",
        r#"{ "Bold": null }"#,
        "[0, 1]",
        r#"{ "k": 1, "k": 1 }"#,
    ];
    let mut documents = Vec::new();
    for field in fields {
        for value in values {
            documents.push(span_document(&[(field, value)]));
        }
    }
    for value in values {
        documents.push(format!(r#"{{ "text": {value}, "spans": [] }}"#));
        documents.push(format!(r#"{{ "text": "Hello", "spans": {value} }}"#));
        documents.push(format!(r#"{{ "text": "Hello", "spans": [{value}] }}"#));
        documents.push(format!("[{value}]"));
        documents.push(value.to_owned());
    }
    for field in ["start", "end", "style"] {
        let span = span_document(&[]);
        let repeated = span.replacen(
            &format!(r#""{field}":"#),
            &format!(r#""{field}": null, "{field}":"#),
            1,
        );
        documents.push(repeated);
    }

    let (typed, tree) = both();
    for json in &documents {
        match (typed.try_create_from_json(json), tree.try_create_from_json(json)) {
            (Ok(a), Ok(b)) => assert_eq!(a, b, "{json}"),
            (Err(a), Err(b)) => assert_eq!(a.kind(), b.kind(), "{json}: {a} / {b}"),
            (a, b) => panic!("decoders disagree on {json}: typed {a:?}, tree {b:?}"),
        }
    }
}

#[test]
fn each_kind_yields_one_run_over_its_range() {
    let attributes = [
        ("Bold", ""),
        ("Italic", ""),
        ("Underline", ""),
        ("Strikethrough", ""),
        ("Superscript", ""),
        ("Subscript", ""),
        ("Color", r##", "color": "#FF0000""##),
        ("BackgroundColor", r##", "backgroundColor": "#FFFF00""##),
        ("FontSize", r#", "fontSize": 20"#),
        ("Clickable", r#", "link": "https://example.com""#),
        ("LetterSpacing", r#", "letterSpacing": 2.5"#),
        ("Shadow", r##", "shadow": "#000000""##),
        ("Custom", r#", "fontWeight": 500"#),
    ];
    assert_eq!(attributes.len(), StyleKind::ALL.len());
    let (typed, tree) = both();
    for (style, extra) in attributes {
        let json = format!(
            r#"{{ "text": "0123456789", "spans": [{{ "start": 2, "end": 7, "style": "{style}"{extra} }}] }}"#
        );
        for text in [
            typed.create_from_json(&json).unwrap(),
            tree.create_from_json(&json).unwrap(),
        ] {
            let ranges: Vec<_> = text.runs().map(|(range, _)| range.as_range()).collect();
            assert_eq!(ranges, [2..7], "{style}");
        }
    }
}

#[test]
fn resolving_twice_is_idempotent() {
    let spanwiz = SpanWiz::new(TypedJsonParser::new());
    for sample in DocumentSamples::new().all() {
        let first = spanwiz.create_from_json(sample.json).unwrap();
        let second = spanwiz.create_from_json(sample.json).unwrap();
        assert_eq!(first, second, "{}", sample.name);
    }
}

#[test]
fn repeated_color_is_cached_once() {
    let spans: Vec<_> = (0..10)
        .map(|i| format!(r##"{{ "start": {i}, "end": {}, "style": "Color", "color": "#FFC300" }}"##, i + 1))
        .collect();
    let json = format!(r#"{{ "text": "0123456789", "spans": [{}] }}"#, spans.join(","));
    let spanwiz = SpanWiz::new(TreeJsonParser::new());
    let text = spanwiz.create_from_json(&json).unwrap();
    assert_eq!(text.runs().len(), 10);
    assert_eq!(spanwiz.resolver().cache().len(), 1);
}

#[test]
fn font_weight_overrides_bold() {
    let json = r#"{ "text": "Hello", "spans": [{ "start": 0, "end": 5, "style": "Bold", "fontWeight": 300 }] }"#;
    let text = SpanWiz::new(TypedJsonParser::new())
        .create_from_json(json)
        .unwrap();
    let (_, attrs) = text.runs().next().unwrap();
    assert_eq!(attrs.font_weight, Some(FontWeight::LIGHT));
}

#[test]
fn out_of_range_span_is_dropped() {
    let json = r#"{ "text": "Hello", "spans": [
        { "start": 3, "end": 10, "style": "Bold" },
        { "start": 0, "end": 2, "style": "Italic" }
    ] }"#;
    let (text, diagnostics) = SpanWiz::new(TreeJsonParser::new())
        .create_with_diagnostics(json)
        .unwrap();
    assert_eq!(text.runs().len(), 1);
    let (range, attrs) = text.runs().next().unwrap();
    assert_eq!(range.as_range(), 0..2);
    assert_eq!(attrs.font_weight, None);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].as_validation().map(|e| e.kind()),
        Some(ValidationErrorKind::RangeOutOfBounds)
    );
}

#[test]
fn unknown_font_family_is_ignored() {
    let json = r#"{ "text": "Hello", "spans": [
        { "start": 0, "end": 5, "style": "Italic", "fontFamily": "comic-sans" },
        { "start": 0, "end": 5, "style": "Custom", "fontFamily": "sans-serif" }
    ] }"#;
    let (text, diagnostics) = SpanWiz::new(TypedJsonParser::new())
        .create_with_diagnostics(json)
        .unwrap();
    let families: Vec<_> = text.runs().map(|(_, attrs)| attrs.font_family).collect();
    assert_eq!(families, [None, Some(FontFamilyName::SansSerif)]);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].span_index(), 0);
}

#[test]
fn links_are_registered_per_tag() {
    let spanwiz = SpanWiz::new(TypedJsonParser::new());
    let text = spanwiz
        .create_from_json(DocumentSamples::new().clickable.json)
        .unwrap();
    let url: Vec<_> = text
        .get_tag_ranges(URL_TAG)
        .iter()
        .map(|tagged| (tagged.range.as_range(), tagged.value.as_str()))
        .collect();
    assert_eq!(url, [(19..22, "https://www.google.com")]);
    let click_me: Vec<_> = text
        .get_tag_ranges("Click Me")
        .iter()
        .map(|tagged| (tagged.range.as_range(), tagged.value.as_str()))
        .collect();
    assert_eq!(click_me, [(25..33, "https://www.outlook.com")]);
}

#[test]
fn parsers_by_name_plug_into_spanwiz() {
    for name in ["typed", "tree"] {
        let spanwiz = SpanWiz::new(parser_by_name(name).unwrap());
        assert_eq!(spanwiz.parser().name(), name);
        let text = spanwiz
            .create_from_json(DocumentSamples::new().story.json)
            .unwrap();
        assert!(text.runs().len() > 0);
    }
}
