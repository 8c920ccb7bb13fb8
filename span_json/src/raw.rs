// Copyright 2025 the Spanwiz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intermediate records shared by both decoders.
//!
//! Required fields are optional here so that a decoder can finish type checking the whole
//! document before deciding that something is missing. That keeps the reported error kind
//! independent of the decoding strategy.
//!
//! The `Deserialize` impls are written out by hand rather than derived: a derived struct also
//! accepts a JSON array, and a derived enum also accepts `{"Bold": null}`. Both records only
//! accept JSON objects, reject repeated keys, and accept `style` only as a known name.

use core::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, Unexpected, Visitor};
use span_model::{Span, StyleKind, StyledText};

use crate::ParseError;
use crate::strict::{SeenKeys, StrictValue};

#[derive(Debug, Default)]
pub(crate) struct RawDocument {
    pub(crate) text: Option<String>,
    pub(crate) spans: Option<Vec<RawSpan>>,
}

#[derive(Debug, Default)]
pub(crate) struct RawSpan {
    pub(crate) start: Option<i32>,
    pub(crate) end: Option<i32>,
    pub(crate) style: Option<StyleKind>,
    pub(crate) color: Option<String>,
    pub(crate) background_color: Option<String>,
    pub(crate) font_family: Option<String>,
    pub(crate) font_size: Option<i32>,
    pub(crate) font_weight: Option<i32>,
    pub(crate) link: Option<String>,
    pub(crate) custom: Option<String>,
    pub(crate) letter_spacing: Option<f32>,
    pub(crate) font_style: Option<i32>,
    pub(crate) shadow: Option<String>,
    pub(crate) radius: Option<f32>,
    pub(crate) shadow_offset_x: Option<f32>,
    pub(crate) shadow_offset_y: Option<f32>,
    pub(crate) span_tag: Option<String>,
}

impl<'de> Deserialize<'de> for RawDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DocumentVisitor)
    }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = RawDocument;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a styled text object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawDocument, A::Error> {
        let mut document = RawDocument::default();
        let mut seen = SeenKeys::default();
        while let Some(key) = map.next_key::<String>()? {
            seen.insert::<A::Error>(&key)?;
            match key.as_str() {
                "text" => document.text = map.next_value()?,
                "spans" => document.spans = map.next_value()?,
                _ => {
                    map.next_value::<StrictValue>()?;
                }
            }
        }
        Ok(document)
    }
}

impl<'de> Deserialize<'de> for RawSpan {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SpanVisitor)
    }
}

struct SpanVisitor;

impl<'de> Visitor<'de> for SpanVisitor {
    type Value = RawSpan;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a span object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawSpan, A::Error> {
        let mut span = RawSpan::default();
        let mut seen = SeenKeys::default();
        while let Some(key) = map.next_key::<String>()? {
            seen.insert::<A::Error>(&key)?;
            match key.as_str() {
                "start" => span.start = map.next_value()?,
                "end" => span.end = map.next_value()?,
                "style" => {
                    span.style = map
                        .next_value::<Option<String>>()?
                        .map(|name| style_by_name::<A::Error>(&name))
                        .transpose()?;
                }
                "color" => span.color = map.next_value()?,
                "backgroundColor" => span.background_color = map.next_value()?,
                "fontFamily" => span.font_family = map.next_value()?,
                "fontSize" => span.font_size = map.next_value()?,
                "fontWeight" => span.font_weight = map.next_value()?,
                "link" => span.link = map.next_value()?,
                "custom" => span.custom = map.next_value()?,
                "letterSpacing" => span.letter_spacing = map.next_value()?,
                "fontStyle" => span.font_style = map.next_value()?,
                "shadow" => span.shadow = map.next_value()?,
                "radius" => span.radius = map.next_value()?,
                "shadowOffsetX" => span.shadow_offset_x = map.next_value()?,
                "shadowOffsetY" => span.shadow_offset_y = map.next_value()?,
                "spanTag" => span.span_tag = map.next_value()?,
                _ => {
                    map.next_value::<StrictValue>()?;
                }
            }
        }
        Ok(span)
    }
}

fn style_by_name<E: de::Error>(name: &str) -> Result<StyleKind, E> {
    StyleKind::from_name(name)
        .ok_or_else(|| E::invalid_value(Unexpected::Str(name), &"a known style name"))
}

impl RawDocument {
    /// Checks required fields and builds the document.
    pub(crate) fn finish(self) -> Result<StyledText, ParseError> {
        let text = self.text.ok_or_else(|| ParseError::missing_field("text"))?;
        let raw_spans = self.spans.ok_or_else(|| ParseError::missing_field("spans"))?;
        let spans = raw_spans
            .into_iter()
            .enumerate()
            .map(|(index, raw)| raw.finish(index))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(StyledText { text, spans })
    }
}

impl RawSpan {
    fn finish(self, index: usize) -> Result<Span, ParseError> {
        let missing = |field: &str| ParseError::missing_field(&format!("spans[{index}].{field}"));
        let start = self.start.ok_or_else(|| missing("start"))?;
        let end = self.end.ok_or_else(|| missing("end"))?;
        let style = self.style.ok_or_else(|| missing("style"))?;
        Ok(Span {
            start,
            end,
            style,
            color: self.color,
            background_color: self.background_color,
            font_family: self.font_family,
            font_size: self.font_size,
            font_weight: self.font_weight,
            link: self.link,
            custom: self.custom,
            letter_spacing: self.letter_spacing,
            font_style: self.font_style,
            shadow: self.shadow,
            radius: self.radius,
            shadow_offset_x: self.shadow_offset_x,
            shadow_offset_y: self.shadow_offset_y,
            span_tag: self.span_tag,
        })
    }
}
