// Copyright 2025 the Spanwiz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use span_model::{FontFamilyName, FontWeight};

/// Slant of the text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Upright glyphs.
    #[default]
    Normal,
    /// Italic glyphs.
    Italic,
}

/// Lines drawn through or under the text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextDecoration {
    /// Draw a line below the baseline.
    pub underline: bool,
    /// Draw a line through the middle of the text.
    pub line_through: bool,
}

impl TextDecoration {
    /// Returns `true` if no line is drawn.
    pub const fn is_none(self) -> bool {
        !self.underline && !self.line_through
    }
}

/// Vertical displacement of the text relative to the baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BaselineShift {
    /// Raised by half the font ascent.
    Superscript,
    /// Lowered by half the font ascent.
    Subscript,
}

impl BaselineShift {
    /// The shift as a signed fraction of the ascent; positive is up.
    pub const fn ascent_fraction(self) -> f32 {
        match self {
            Self::Superscript => 0.5,
            Self::Subscript => -0.5,
        }
    }
}

/// A drop shadow behind the glyphs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    /// Tint of the shadow.
    pub color: Color,
    /// Horizontal and vertical displacement, in points.
    pub offset: (f32, f32),
    /// Blur radius, in points. Zero draws a hard shadow.
    pub blur_radius: f32,
}

/// The merged presentation state of one attribute run.
///
/// Every field is optional; `None` (or the field's default) means the run does not touch that
/// property and the renderer's base style applies.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedAttributes {
    /// Foreground color.
    pub color: Option<Color>,
    /// Background fill.
    pub background: Option<Color>,
    /// Font size in points.
    pub font_size: Option<f32>,
    /// Generic font family.
    pub font_family: Option<FontFamilyName>,
    /// Font weight.
    pub font_weight: Option<FontWeight>,
    /// Font slant.
    pub font_style: Option<FontStyle>,
    /// Underline and line-through.
    pub decoration: TextDecoration,
    /// Superscript or subscript displacement.
    pub baseline_shift: Option<BaselineShift>,
    /// Extra space between letters, in points.
    pub letter_spacing: Option<f32>,
    /// Drop shadow.
    pub shadow: Option<Shadow>,
}

impl ResolvedAttributes {
    /// Returns `true` if applying these attributes would change nothing.
    pub fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.background.is_none()
            && self.font_size.is_none()
            && self.font_family.is_none()
            && self.font_weight.is_none()
            && self.font_style.is_none()
            && self.decoration.is_none()
            && self.baseline_shift.is_none()
            && self.letter_spacing.is_none()
            && self.shadow.is_none()
    }
}

/// A single resolved property, as contributed by one span.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ResolvedProperty {
    /// Foreground color.
    Color(Color),
    /// Background fill.
    Background(Color),
    /// Font size in points.
    FontSize(f32),
    /// Generic font family.
    FontFamily(FontFamilyName),
    /// Font weight.
    FontWeight(FontWeight),
    /// Font slant.
    FontStyle(FontStyle),
    /// Underline decoration.
    Underline(bool),
    /// Line-through decoration.
    LineThrough(bool),
    /// Baseline displacement.
    BaselineShift(BaselineShift),
    /// Extra space between letters.
    LetterSpacing(f32),
    /// Drop shadow.
    Shadow(Shadow),
}

/// Accumulates [`ResolvedProperty`] values for one span.
///
/// Later properties replace earlier ones of the same kind, which is how a numeric `fontWeight`
/// overrides the weight implied by `Bold`.
#[derive(Clone, Debug, Default)]
pub struct AttributesBuilder {
    attributes: ResolvedAttributes,
}

impl AttributesBuilder {
    /// Creates a builder with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `property`, replacing any previous value of the same kind.
    pub fn apply(&mut self, property: ResolvedProperty) {
        use ResolvedProperty::*;
        let attrs = &mut self.attributes;
        match property {
            Color(value) => attrs.color = Some(value),
            Background(value) => attrs.background = Some(value),
            FontSize(value) => attrs.font_size = Some(value),
            FontFamily(value) => attrs.font_family = Some(value),
            FontWeight(value) => attrs.font_weight = Some(value),
            FontStyle(value) => attrs.font_style = Some(value),
            Underline(value) => attrs.decoration.underline = value,
            LineThrough(value) => attrs.decoration.line_through = value,
            BaselineShift(value) => attrs.baseline_shift = Some(value),
            LetterSpacing(value) => attrs.letter_spacing = Some(value),
            Shadow(value) => attrs.shadow = Some(value),
        }
    }

    /// Returns `true` if nothing has been applied that changes the presentation.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Finishes the run.
    pub fn build(self) -> ResolvedAttributes {
        self.attributes
    }
}

#[cfg(test)]
mod tests {
    use peniko::Color;
    use span_model::{FontFamilyName, FontWeight};

    use super::{
        AttributesBuilder, BaselineShift, FontStyle, ResolvedAttributes, ResolvedProperty, Shadow,
        TextDecoration,
    };

    #[test]
    fn empty_builder_builds_empty_attributes() {
        let builder = AttributesBuilder::new();
        assert!(builder.is_empty());
        assert_eq!(builder.build(), ResolvedAttributes::default());
    }

    #[test]
    fn later_properties_replace_earlier_ones() {
        let mut builder = AttributesBuilder::new();
        builder.apply(ResolvedProperty::FontWeight(FontWeight::BOLD));
        builder.apply(ResolvedProperty::FontWeight(FontWeight::LIGHT));
        assert_eq!(builder.build().font_weight, Some(FontWeight::LIGHT));
    }

    #[test]
    fn decorations_combine() {
        let mut builder = AttributesBuilder::new();
        builder.apply(ResolvedProperty::Underline(true));
        builder.apply(ResolvedProperty::LineThrough(true));
        let attrs = builder.build();
        assert_eq!(
            attrs.decoration,
            TextDecoration {
                underline: true,
                line_through: true
            }
        );
        assert!(!attrs.is_empty());
    }

    #[test]
    fn clearing_a_decoration_leaves_nothing() {
        let mut builder = AttributesBuilder::new();
        builder.apply(ResolvedProperty::Underline(true));
        builder.apply(ResolvedProperty::Underline(false));
        assert!(builder.is_empty());
    }

    #[test]
    fn every_property_is_reflected() {
        let shadow = Shadow {
            color: Color::from_rgba8(0x88, 0x88, 0x88, 0xFF),
            offset: (5.0, 10.0),
            blur_radius: 2.0,
        };
        let properties = [
            ResolvedProperty::Color(Color::from_rgba8(0xFF, 0, 0, 0xFF)),
            ResolvedProperty::Background(Color::from_rgba8(0xFF, 0xFF, 0, 0xFF)),
            ResolvedProperty::FontSize(24.0),
            ResolvedProperty::FontFamily(FontFamilyName::Monospace),
            ResolvedProperty::FontWeight(FontWeight::EXTRA_BOLD),
            ResolvedProperty::FontStyle(FontStyle::Italic),
            ResolvedProperty::Underline(true),
            ResolvedProperty::LineThrough(true),
            ResolvedProperty::BaselineShift(BaselineShift::Subscript),
            ResolvedProperty::LetterSpacing(0.2),
            ResolvedProperty::Shadow(shadow),
        ];
        for property in properties {
            let mut builder = AttributesBuilder::new();
            builder.apply(property);
            assert!(!builder.is_empty(), "{property:?}");
            let attrs = builder.build();
            let reflected = match property {
                ResolvedProperty::Color(value) => attrs.color == Some(value),
                ResolvedProperty::Background(value) => attrs.background == Some(value),
                ResolvedProperty::FontSize(value) => attrs.font_size == Some(value),
                ResolvedProperty::FontFamily(value) => attrs.font_family == Some(value),
                ResolvedProperty::FontWeight(value) => attrs.font_weight == Some(value),
                ResolvedProperty::FontStyle(value) => attrs.font_style == Some(value),
                ResolvedProperty::Underline(value) => attrs.decoration.underline == value,
                ResolvedProperty::LineThrough(value) => attrs.decoration.line_through == value,
                ResolvedProperty::BaselineShift(value) => attrs.baseline_shift == Some(value),
                ResolvedProperty::LetterSpacing(value) => attrs.letter_spacing == Some(value),
                ResolvedProperty::Shadow(value) => attrs.shadow == Some(value),
            };
            assert!(reflected, "{property:?}");
        }
    }

    #[test]
    fn baseline_shift_direction() {
        assert_eq!(BaselineShift::Superscript.ascent_fraction(), 0.5);
        assert_eq!(BaselineShift::Subscript.ascent_fraction(), -0.5);
    }
}
