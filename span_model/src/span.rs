// Copyright 2025 the Spanwiz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use serde::{Deserialize, Serialize};

use crate::StyleKind;

/// One style instruction over the half-open character range `start..end`.
///
/// Every optional attribute can be set on any kind. Each kind only consumes the attributes it
/// needs; `fontFamily` and `fontWeight` apply to every kind.
///
/// Offsets are signed so that out-of-range input survives decoding and can be reported when
/// the document is resolved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Span {
    /// First character covered.
    pub start: i32,
    /// One past the last character covered.
    pub end: i32,
    /// The style instruction.
    pub style: StyleKind,
    /// Foreground color as a hex string, with or without a leading `#`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Background color as a hex string, with or without a leading `#`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// A generic family name such as `serif` or `monospace`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Font size in points.
    ///
    /// Sets the size for [`StyleKind::FontSize`] and replaces the default size of
    /// [`StyleKind::Superscript`] and [`StyleKind::Subscript`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<i32>,
    /// Numeric weight; one of 100, 200, …, 900.
    ///
    /// When recognized, this overrides the weight implied by the style kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<i32>,
    /// Link target for [`StyleKind::Clickable`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Opaque application data. Not used by resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<String>,
    /// Extra spacing between letters in points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f32>,
    /// Opaque font style code. Not used by resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<i32>,
    /// Shadow tint as a hex string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<String>,
    /// Shadow blur radius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f32>,
    /// Horizontal shadow offset. Only used when `shadowOffsetY` is also present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_offset_x: Option<f32>,
    /// Vertical shadow offset. Only used when `shadowOffsetX` is also present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_offset_y: Option<f32>,
    /// The annotation channel a link is registered under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span_tag: Option<String>,
}

impl Span {
    /// Creates a span with no optional attributes.
    pub fn new(start: i32, end: i32, style: StyleKind) -> Self {
        Self {
            start,
            end,
            style,
            color: None,
            background_color: None,
            font_family: None,
            font_size: None,
            font_weight: None,
            link: None,
            custom: None,
            letter_spacing: None,
            font_style: None,
            shadow: None,
            radius: None,
            shadow_offset_x: None,
            shadow_offset_y: None,
            span_tag: None,
        }
    }

    /// Returns the span with `color` set.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Returns the span with `backgroundColor` set.
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Returns the span with `fontFamily` set.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Returns the span with `fontSize` set.
    pub fn with_font_size(mut self, size: i32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Returns the span with `fontWeight` set.
    pub fn with_font_weight(mut self, weight: i32) -> Self {
        self.font_weight = Some(weight);
        self
    }

    /// Returns the span with `link` set.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Returns the span with `custom` set.
    pub fn with_custom(mut self, custom: impl Into<String>) -> Self {
        self.custom = Some(custom.into());
        self
    }

    /// Returns the span with `letterSpacing` set.
    pub fn with_letter_spacing(mut self, spacing: f32) -> Self {
        self.letter_spacing = Some(spacing);
        self
    }

    /// Returns the span with the shadow tint set.
    pub fn with_shadow(mut self, color: impl Into<String>) -> Self {
        self.shadow = Some(color.into());
        self
    }

    /// Returns the span with the shadow blur radius set.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Returns the span with both shadow offsets set.
    pub fn with_shadow_offset(mut self, x: f32, y: f32) -> Self {
        self.shadow_offset_x = Some(x);
        self.shadow_offset_y = Some(y);
        self
    }

    /// Returns the span with `spanTag` set.
    pub fn with_span_tag(mut self, tag: impl Into<String>) -> Self {
        self.span_tag = Some(tag.into());
        self
    }
}
