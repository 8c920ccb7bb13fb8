// Copyright 2025 the Spanwiz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of style instructions a [`Span`](crate::Span) can carry.
///
/// Names are matched case-sensitively against the JSON `style` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleKind {
    /// Bold weight.
    Bold,
    /// Italic style.
    Italic,
    /// Underline decoration.
    Underline,
    /// Line-through decoration.
    Strikethrough,
    /// Raised baseline with a smaller default size.
    Superscript,
    /// Lowered baseline with a smaller default size.
    Subscript,
    /// Foreground color, taken from the `color` attribute.
    Color,
    /// Background color, taken from the `backgroundColor` attribute.
    BackgroundColor,
    /// Font size, taken from the `fontSize` attribute.
    FontSize,
    /// A link. Registers the `link` attribute under the span's tag.
    Clickable,
    /// No style of its own; a carrier for the cross-cutting attributes.
    Custom,
    /// Extra spacing between letters, taken from the `letterSpacing` attribute.
    LetterSpacing,
    /// A drop shadow tinted with the `shadow` attribute.
    Shadow,
}

impl StyleKind {
    /// Every style kind, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Bold,
        Self::Italic,
        Self::Underline,
        Self::Strikethrough,
        Self::Superscript,
        Self::Subscript,
        Self::Color,
        Self::BackgroundColor,
        Self::FontSize,
        Self::Clickable,
        Self::Custom,
        Self::LetterSpacing,
        Self::Shadow,
    ];

    /// The exact name used in JSON documents.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::Underline => "Underline",
            Self::Strikethrough => "Strikethrough",
            Self::Superscript => "Superscript",
            Self::Subscript => "Subscript",
            Self::Color => "Color",
            Self::BackgroundColor => "BackgroundColor",
            Self::FontSize => "FontSize",
            Self::Clickable => "Clickable",
            Self::Custom => "Custom",
            Self::LetterSpacing => "LetterSpacing",
            Self::Shadow => "Shadow",
        }
    }

    /// Looks up a style kind by its exact, case-sensitive name.
    ///
    /// ```
    /// use span_model::StyleKind;
    ///
    /// assert_eq!(StyleKind::from_name("Clickable"), Some(StyleKind::Clickable));
    /// assert_eq!(StyleKind::from_name("clickable"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleKind {
    type Err = ParseStyleKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or(ParseStyleKindError(()))
    }
}

/// Error returned when a string names no [`StyleKind`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseStyleKindError(());

impl fmt::Display for ParseStyleKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown style kind")
    }
}

impl core::error::Error for ParseStyleKindError {}
