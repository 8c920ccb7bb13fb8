// Copyright 2025 the Spanwiz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Visual weight class of a font, restricted to the nine CSS keyword weights.
///
/// In CSS, this corresponds to the numeric values of the `font-weight` property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(u16);

impl FontWeight {
    /// Weight value of 100.
    pub const THIN: Self = Self(100);

    /// Weight value of 200.
    pub const EXTRA_LIGHT: Self = Self(200);

    /// Weight value of 300.
    pub const LIGHT: Self = Self(300);

    /// Weight value of 400. This is the default value.
    pub const NORMAL: Self = Self(400);

    /// Weight value of 500.
    pub const MEDIUM: Self = Self(500);

    /// Weight value of 600.
    pub const SEMI_BOLD: Self = Self(600);

    /// Weight value of 700.
    pub const BOLD: Self = Self(700);

    /// Weight value of 800.
    pub const EXTRA_BOLD: Self = Self(800);

    /// Weight value of 900.
    pub const BLACK: Self = Self(900);

    /// Maps a numeric weight onto one of the keyword weights.
    ///
    /// Only multiples of 100 from 100 through 900 are recognized.
    ///
    /// ```
    /// use span_model::FontWeight;
    ///
    /// assert_eq!(FontWeight::from_css(300), Some(FontWeight::LIGHT));
    /// assert_eq!(FontWeight::from_css(350), None);
    /// assert_eq!(FontWeight::from_css(1000), None);
    /// ```
    pub fn from_css(weight: i32) -> Option<Self> {
        if (100..=900).contains(&weight) && weight % 100 == 0 {
            u16::try_from(weight).ok().map(Self)
        } else {
            None
        }
    }

    /// Returns the underlying weight value.
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self.0 {
            100 => "thin",
            200 => "extra-light",
            300 => "light",
            400 => "normal",
            500 => "medium",
            600 => "semi-bold",
            700 => "bold",
            800 => "extra-bold",
            900 => "black",
            _ => return write!(f, "{}", self.0),
        };
        f.write_str(keyword)
    }
}

/// The font family names a span may request, named after the CSS generic families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontFamilyName {
    /// Glyphs have finishing strokes, flared or tapering ends, or have actual serifed endings.
    Serif,
    /// Glyphs have stroke endings that are plain.
    SansSerif,
    /// All glyphs have the same fixed width.
    Monospace,
    /// Glyphs have joining strokes or other cursive characteristics beyond those of italic
    /// typefaces.
    Cursive,
}

impl FontFamilyName {
    /// Parses a family from its CSS generic family name.
    ///
    /// ```
    /// use span_model::FontFamilyName;
    ///
    /// assert_eq!(
    ///     FontFamilyName::parse("sans-serif"),
    ///     Some(FontFamilyName::SansSerif)
    /// );
    /// assert_eq!(FontFamilyName::parse("comic-sans"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim() {
            "serif" => Self::Serif,
            "sans-serif" => Self::SansSerif,
            "monospace" => Self::Monospace,
            "cursive" => Self::Cursive,
            _ => return None,
        })
    }
}

impl fmt::Display for FontFamilyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Cursive => "cursive",
        };
        f.write_str(name)
    }
}
