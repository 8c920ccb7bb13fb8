// Copyright 2025 the Spanwiz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde_json::{Map, Value};
use span_model::StyleKind;

use crate::raw::{RawDocument, RawSpan};
use crate::strict::StrictValue;
use crate::{JsonParser, ParseError, ParseResult, log_failure};

/// A [`JsonParser`] that decodes into a [`serde_json::Value`] tree and walks it by hand.
///
/// Useful when the caller already holds a parsed tree: see [`TreeJsonParser::parse_value`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TreeJsonParser {
    _private: (),
}

impl TreeJsonParser {
    /// The name reported by [`JsonParser::name`].
    pub const NAME: &'static str = "tree";

    /// Creates a parser.
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Decodes a document from an already parsed JSON tree.
    ///
    /// A [`Value`] cannot hold repeated object keys, so unlike [`JsonParser::parse`] this
    /// cannot reject them; whatever produced `value` has already picked one.
    pub fn parse_value(&self, value: &Value) -> ParseResult {
        let object = match value {
            Value::Null => return Err(ParseError::null_document()),
            Value::Object(object) => object,
            _ => return Err(ParseError::type_mismatch("$", "an object")),
        };
        read_document(object)?.finish()
    }
}

impl JsonParser for TreeJsonParser {
    fn parse(&self, json: &str) -> ParseResult {
        serde_json::from_str::<StrictValue>(json)
            .map_err(|error| ParseError::from_serde_in(json, error))
            .and_then(|StrictValue(value)| self.parse_value(&value))
            .inspect_err(|error| log_failure(Self::NAME, json, error))
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}

fn read_document(object: &Map<String, Value>) -> Result<RawDocument, ParseError> {
    let text = string_field(object, "text", "text")?;
    let spans = match field(object, "spans") {
        None => None,
        Some(Value::Array(items)) => Some(
            items
                .iter()
                .enumerate()
                .map(|(index, item)| read_span(index, item))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Some(_) => return Err(ParseError::type_mismatch("spans", "an array")),
    };
    Ok(RawDocument { text, spans })
}

fn read_span(index: usize, value: &Value) -> Result<RawSpan, ParseError> {
    let Value::Object(object) = value else {
        return Err(ParseError::type_mismatch(
            &format!("spans[{index}]"),
            "an object",
        ));
    };
    let path = |name: &str| format!("spans[{index}].{name}");

    let style = match field(object, "style") {
        None => None,
        Some(Value::String(name)) => Some(StyleKind::from_name(name).ok_or_else(|| {
            ParseError::type_mismatch(&path("style"), "a known style name")
        })?),
        Some(_) => return Err(ParseError::type_mismatch(&path("style"), "a string")),
    };

    Ok(RawSpan {
        start: int_field(object, "start", &path("start"))?,
        end: int_field(object, "end", &path("end"))?,
        style,
        color: string_field(object, "color", &path("color"))?,
        background_color: string_field(object, "backgroundColor", &path("backgroundColor"))?,
        font_family: string_field(object, "fontFamily", &path("fontFamily"))?,
        font_size: int_field(object, "fontSize", &path("fontSize"))?,
        font_weight: int_field(object, "fontWeight", &path("fontWeight"))?,
        link: string_field(object, "link", &path("link"))?,
        custom: string_field(object, "custom", &path("custom"))?,
        letter_spacing: float_field(object, "letterSpacing", &path("letterSpacing"))?,
        font_style: int_field(object, "fontStyle", &path("fontStyle"))?,
        shadow: string_field(object, "shadow", &path("shadow"))?,
        radius: float_field(object, "radius", &path("radius"))?,
        shadow_offset_x: float_field(object, "shadowOffsetX", &path("shadowOffsetX"))?,
        shadow_offset_y: float_field(object, "shadowOffsetY", &path("shadowOffsetY"))?,
        span_tag: string_field(object, "spanTag", &path("spanTag"))?,
    })
}

/// Looks up `name`, treating an explicit `null` like an absent field.
fn field<'a>(object: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    object.get(name).filter(|value| !value.is_null())
}

fn string_field(
    object: &Map<String, Value>,
    name: &str,
    path: &str,
) -> Result<Option<String>, ParseError> {
    match field(object, name) {
        None => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(ParseError::type_mismatch(path, "a string")),
    }
}

fn int_field(
    object: &Map<String, Value>,
    name: &str,
    path: &str,
) -> Result<Option<i32>, ParseError> {
    match field(object, name) {
        None => Ok(None),
        Some(value) => value
            .as_i64()
            .and_then(|value| i32::try_from(value).ok())
            .map(Some)
            .ok_or_else(|| ParseError::type_mismatch(path, "a 32-bit integer")),
    }
}

fn float_field(
    object: &Map<String, Value>,
    name: &str,
    path: &str,
) -> Result<Option<f32>, ParseError> {
    match field(object, name) {
        None => Ok(None),
        Some(value) => value
            .as_f64()
            .map(|value| Some(narrow(value)))
            .ok_or_else(|| ParseError::type_mismatch(path, "a number")),
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "Attribute values are stored as `f32`, matching the typed decoder."
)]
fn narrow(value: f64) -> f32 {
    value as f32
}
