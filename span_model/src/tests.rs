// Copyright 2025 the Spanwiz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{FontFamilyName, FontWeight, Span, StyleKind, StyledText};
use alloc::string::ToString;
use alloc::vec::Vec;

#[test]
fn style_kind_names_round_trip() {
    for kind in StyleKind::ALL {
        assert_eq!(kind.name().parse::<StyleKind>(), Ok(kind));
        assert_eq!(kind.to_string(), kind.name());
    }
    assert!("bold".parse::<StyleKind>().is_err());
    assert!("".parse::<StyleKind>().is_err());
}

#[test]
fn style_kind_serde_uses_exact_names() {
    let json = serde_json::to_string(&StyleKind::BackgroundColor).unwrap();
    assert_eq!(json, "\"BackgroundColor\"");
    let kind: StyleKind = serde_json::from_str("\"LetterSpacing\"").unwrap();
    assert_eq!(kind, StyleKind::LetterSpacing);
    assert!(serde_json::from_str::<StyleKind>("\"letterSpacing\"").is_err());
}

#[test]
fn font_weight_accepts_only_keyword_steps() {
    let recognized: Vec<_> = (0..=1000)
        .filter_map(FontWeight::from_css)
        .map(FontWeight::value)
        .collect();
    assert_eq!(recognized, [100, 200, 300, 400, 500, 600, 700, 800, 900]);
    assert_eq!(FontWeight::from_css(-100), None);
    assert_eq!(FontWeight::LIGHT.to_string(), "light");
    assert_eq!(FontWeight::default(), FontWeight::NORMAL);
}

#[test]
fn font_family_names() {
    for family in [
        FontFamilyName::Serif,
        FontFamilyName::SansSerif,
        FontFamilyName::Monospace,
        FontFamilyName::Cursive,
    ] {
        assert_eq!(FontFamilyName::parse(&family.to_string()), Some(family));
    }
    assert_eq!(FontFamilyName::parse(" monospace "), Some(FontFamilyName::Monospace));
    assert_eq!(FontFamilyName::parse("Serif"), None);
    assert_eq!(FontFamilyName::parse("fantasy"), None);
}

#[test]
fn span_serializes_camel_case_and_skips_absent_fields() {
    let span = Span::new(1, 4, StyleKind::Shadow)
        .with_shadow("#888888")
        .with_shadow_offset(2.0, 4.0)
        .with_background_color("FFFF00");
    let json = serde_json::to_value(&span).unwrap();
    let object = json.as_object().unwrap();
    let mut keys: Vec<_> = object.keys().map(|key| key.as_str()).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        [
            "backgroundColor",
            "end",
            "shadow",
            "shadowOffsetX",
            "shadowOffsetY",
            "start",
            "style"
        ]
    );
}

#[test]
fn styled_text_round_trips_through_json() {
    let doc = StyledText::new("Hello World").with_spans([
        Span::new(0, 5, StyleKind::Bold).with_font_weight(300),
        Span::new(6, 11, StyleKind::Clickable)
            .with_link("https://example.invalid")
            .with_span_tag("Docs"),
        Span::new(0, 11, StyleKind::Custom)
            .with_custom("payload")
            .with_font_family("serif"),
        Span::new(2, 3, StyleKind::LetterSpacing).with_letter_spacing(0.25),
    ]);
    let json = serde_json::to_string(&doc).unwrap();
    let back: StyledText = serde_json::from_str(&json).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn styled_text_ignores_unknown_fields() {
    let doc: StyledText = serde_json::from_str(
        r#"{"text":"Hi","version":2,"spans":[{"start":0,"end":2,"style":"Italic","extra":true}]}"#,
    )
    .unwrap();
    assert_eq!(
        doc,
        StyledText::new("Hi").with_span(Span::new(0, 2, StyleKind::Italic))
    );
}
