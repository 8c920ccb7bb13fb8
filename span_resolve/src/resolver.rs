// Copyright 2025 the Spanwiz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use attributed_text::TextRange;
use peniko::Color;
use span_model::{FontFamilyName, FontWeight, Span, StyleKind, StyledText};

use crate::{
    AttributesBuilder, BaselineShift, ColorCache, Diagnostic, FontStyle, RenderableText,
    ResolveOptions, ResolvedProperty, Shadow, ValidationError,
};

/// Turns [`StyledText`] documents into [`RenderableText`].
///
/// A resolver owns a [`ColorCache`] that persists across documents. Resolution is otherwise
/// pure: resolving the same document twice yields equal results.
#[derive(Clone, Debug, Default)]
pub struct Resolver {
    options: ResolveOptions,
    colors: ColorCache,
}

impl Resolver {
    /// Creates a resolver with its own color cache.
    pub fn new(options: ResolveOptions) -> Self {
        Self::with_cache(options, ColorCache::new())
    }

    /// Creates a resolver that resolves colors through `cache`.
    pub fn with_cache(options: ResolveOptions, cache: ColorCache) -> Self {
        Self {
            options,
            colors: cache,
        }
    }

    /// The options this resolver was built with.
    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// The color cache.
    pub fn cache(&self) -> &ColorCache {
        &self.colors
    }

    /// Resolves `document`, skipping invalid spans and attribute values.
    pub fn resolve(&self, document: &StyledText) -> RenderableText {
        self.resolve_with_diagnostics(document).0
    }

    /// Resolves `document` and reports everything that was skipped.
    ///
    /// Diagnostics are ordered by span index, and within a span by the order the attributes
    /// were looked at.
    pub fn resolve_with_diagnostics(
        &self,
        document: &StyledText,
    ) -> (RenderableText, Vec<Diagnostic>) {
        let text: Arc<str> = Arc::from(document.text.as_str());
        let mut cx = ResolveContext {
            options: &self.options,
            colors: &self.colors,
            renderable: RenderableText::new(Arc::clone(&text)),
            diagnostics: Vec::new(),
        };
        for (index, span) in document.spans.iter().enumerate() {
            let range =
                match TextRange::from_signed(&*text, i64::from(span.start), i64::from(span.end)) {
                    Ok(range) => range,
                    Err(error) => {
                        cx.report(ValidationError::range(index, error));
                        continue;
                    }
                };
            cx.resolve_span(index, span, range);
        }
        (cx.renderable, cx.diagnostics)
    }
}

struct ResolveContext<'a> {
    options: &'a ResolveOptions,
    colors: &'a ColorCache,
    renderable: RenderableText,
    diagnostics: Vec<Diagnostic>,
}

impl ResolveContext<'_> {
    fn resolve_span(&mut self, index: usize, span: &Span, range: TextRange) {
        let mut builder = AttributesBuilder::new();
        match span.style {
            StyleKind::Bold => builder.apply(ResolvedProperty::FontWeight(FontWeight::BOLD)),
            StyleKind::Italic => builder.apply(ResolvedProperty::FontStyle(FontStyle::Italic)),
            StyleKind::Underline => builder.apply(ResolvedProperty::Underline(true)),
            StyleKind::Strikethrough => builder.apply(ResolvedProperty::LineThrough(true)),
            StyleKind::Color => {
                if let Some(color) = self.color(index, "color", span.color.as_deref()) {
                    builder.apply(ResolvedProperty::Color(color));
                }
            }
            StyleKind::BackgroundColor => {
                let hex = span.background_color.as_deref();
                if let Some(color) = self.color(index, "backgroundColor", hex) {
                    builder.apply(ResolvedProperty::Background(color));
                }
            }
            StyleKind::FontSize => {
                if let Some(size) = positive_size(index, span.font_size) {
                    builder.apply(ResolvedProperty::FontSize(size));
                }
            }
            StyleKind::Clickable => {
                if let Some(link) = &span.link {
                    let tag = span.span_tag.as_deref().unwrap_or(&self.options.link_tag);
                    self.renderable
                        .tags_mut()
                        .insert(tag, range, link.clone());
                }
                builder.apply(ResolvedProperty::Underline(true));
                builder.apply(ResolvedProperty::Color(self.options.link_color));
            }
            StyleKind::Superscript | StyleKind::Subscript => {
                let shift = if span.style == StyleKind::Superscript {
                    BaselineShift::Superscript
                } else {
                    BaselineShift::Subscript
                };
                let size = positive_size(index, span.font_size)
                    .unwrap_or(self.options.script_font_size);
                builder.apply(ResolvedProperty::BaselineShift(shift));
                builder.apply(ResolvedProperty::FontSize(size));
                if let Some(color) = self.color(index, "color", span.color.as_deref()) {
                    builder.apply(ResolvedProperty::Color(color));
                }
            }
            StyleKind::LetterSpacing => {
                if let Some(spacing) = span.letter_spacing {
                    builder.apply(ResolvedProperty::LetterSpacing(spacing));
                }
            }
            StyleKind::Shadow => {
                if let Some(color) = self.color(index, "shadow", span.shadow.as_deref()) {
                    let offset = match (span.shadow_offset_x, span.shadow_offset_y) {
                        (Some(x), Some(y)) => (x, y),
                        _ => self.options.shadow_offset,
                    };
                    builder.apply(ResolvedProperty::Shadow(Shadow {
                        color,
                        offset,
                        blur_radius: span.radius.unwrap_or(0.0),
                    }));
                }
            }
            StyleKind::Custom => {}
        }

        // Family and weight apply to every kind, after the kind's own contribution.
        if let Some(name) = &span.font_family {
            match FontFamilyName::parse(name) {
                Some(family) => builder.apply(ResolvedProperty::FontFamily(family)),
                None => self.report(ValidationError::invalid_value(
                    index,
                    "fontFamily",
                    name,
                    "serif, sans-serif, monospace or cursive",
                )),
            }
        }
        if let Some(weight) = span.font_weight {
            match FontWeight::from_css(weight) {
                Some(weight) => builder.apply(ResolvedProperty::FontWeight(weight)),
                None => self.report(ValidationError::invalid_value(
                    index,
                    "fontWeight",
                    weight,
                    "a multiple of 100 from 100 to 900",
                )),
            }
        }

        if !builder.is_empty() {
            self.renderable.push_run(range, builder.build());
        }
    }

    /// Resolves an optional color attribute, reporting strings that don't parse.
    fn color(&mut self, index: usize, attribute: &'static str, hex: Option<&str>) -> Option<Color> {
        match self.colors.get(hex?) {
            Ok(color) => Some(color),
            Err(error) => {
                self.report(Diagnostic::Color {
                    span_index: index,
                    attribute,
                    error,
                });
                None
            }
        }
    }

    fn report(&mut self, diagnostic: impl Into<Diagnostic>) {
        let diagnostic = diagnostic.into();
        log::warn!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }
}

/// Font sizes are only meaningful when positive; anything else leaves the size untouched.
fn positive_size(index: usize, size: Option<i32>) -> Option<f32> {
    match size {
        Some(size) if size > 0 => Some(size as f32),
        Some(size) => {
            log::debug!("span {index}: ignoring non-positive fontSize {size}");
            None
        }
        None => None,
    }
}
