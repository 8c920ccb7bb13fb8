// Copyright 2025 the Spanwiz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use span_model::URL_TAG;

/// Configuration for a [`Resolver`](crate::Resolver).
///
/// The [`Default`] values are the ones documents are authored against; change them only when a
/// host needs a different look.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolveOptions {
    /// Foreground color forced onto every `Clickable` span.
    pub link_color: Color,
    /// Font size of `Superscript` and `Subscript` spans that don't set `fontSize`.
    pub script_font_size: f32,
    /// Shadow offset used unless a span sets both `shadowOffsetX` and `shadowOffsetY`.
    pub shadow_offset: (f32, f32),
    /// Tag under which links are registered when a span has no `spanTag`.
    ///
    /// [`hit_test`](crate::hit_test) always looks at [`URL_TAG`], so changing this moves
    /// untagged links out of the default hit set.
    pub link_tag: String,
}

impl ResolveOptions {
    /// ARGB `0xFF64B5F6`, a light blue.
    pub const DEFAULT_LINK_COLOR: Color = Color::from_rgba8(0x64, 0xB5, 0xF6, 0xFF);

    /// Default size for superscript and subscript text, in points.
    pub const DEFAULT_SCRIPT_FONT_SIZE: f32 = 16.0;

    /// Default shadow offset, in points.
    pub const DEFAULT_SHADOW_OFFSET: (f32, f32) = (5.0, 10.0);
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            link_color: Self::DEFAULT_LINK_COLOR,
            script_font_size: Self::DEFAULT_SCRIPT_FONT_SIZE,
            shadow_offset: Self::DEFAULT_SHADOW_OFFSET,
            link_tag: URL_TAG.to_owned(),
        }
    }
}
