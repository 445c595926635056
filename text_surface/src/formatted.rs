// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rich text model: an ordered list of [`Span`]s, each with its own style declarations.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use text_runs::{Attribute, AttributeSet, FontDescriptor, LineStyle, Rgba};

use crate::TextDecoration;
use crate::compose::decoration_attributes;

/// A single span style declaration: one `(attribute key, attribute value)` modifier.
#[derive(Clone, Debug, PartialEq)]
pub enum SpanDeclaration {
    /// Font family name.
    FontFamily(Arc<str>),
    /// Font size in points.
    FontSize(f32),
    /// Font weight.
    FontWeight(u16),
    /// Italic face.
    Italic(bool),
    /// Text color.
    ForegroundColor(Rgba),
    /// Highlight color.
    BackgroundColor(Rgba),
    /// Underline decoration.
    Underline(bool),
    /// Strikethrough decoration.
    Strikethrough(bool),
}

/// The declarations attached to a span or to a whole [`FormattedText`].
///
/// This is a declaration list: when multiple declarations of the same property are present,
/// the last one wins. A property with no declaration is inherited from the parent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpanStyle {
    declarations: Vec<SpanDeclaration>,
}

impl SpanStyle {
    /// Creates an empty style (no declarations).
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a style from an iterator of declarations.
    #[inline]
    pub fn from_declarations<I>(declarations: I) -> Self
    where
        I: IntoIterator<Item = SpanDeclaration>,
    {
        Self {
            declarations: declarations.into_iter().collect(),
        }
    }

    /// Returns the declarations in authoring order.
    #[inline]
    pub fn declarations(&self) -> &[SpanDeclaration] {
        &self.declarations
    }

    /// Appends an arbitrary declaration.
    #[inline]
    pub fn push(mut self, declaration: SpanDeclaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    /// Sets the font family.
    #[inline]
    pub fn with_font_family(self, family: impl Into<Arc<str>>) -> Self {
        self.push(SpanDeclaration::FontFamily(family.into()))
    }

    /// Sets the font size in points.
    #[inline]
    pub fn with_font_size(self, size: f32) -> Self {
        self.push(SpanDeclaration::FontSize(size))
    }

    /// Sets the font weight.
    #[inline]
    pub fn with_font_weight(self, weight: u16) -> Self {
        self.push(SpanDeclaration::FontWeight(weight))
    }

    /// Requests or cancels an italic face.
    #[inline]
    pub fn with_italic(self, italic: bool) -> Self {
        self.push(SpanDeclaration::Italic(italic))
    }

    /// Sets the text color.
    #[inline]
    pub fn with_foreground(self, color: Rgba) -> Self {
        self.push(SpanDeclaration::ForegroundColor(color))
    }

    /// Sets the highlight color.
    #[inline]
    pub fn with_background(self, color: Rgba) -> Self {
        self.push(SpanDeclaration::BackgroundColor(color))
    }

    /// Turns the underline on or off.
    #[inline]
    pub fn with_underline(self, underline: bool) -> Self {
        self.push(SpanDeclaration::Underline(underline))
    }

    /// Turns the strikethrough on or off.
    #[inline]
    pub fn with_strikethrough(self, strikethrough: bool) -> Self {
        self.push(SpanDeclaration::Strikethrough(strikethrough))
    }
}

/// A run of text with its own style.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Span {
    text: String,
    style: SpanStyle,
}

impl Span {
    /// Creates an unstyled span.
    #[inline]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::new(),
        }
    }

    /// Returns this span with `style` attached.
    #[inline]
    pub fn with_style(mut self, style: SpanStyle) -> Self {
        self.style = style;
        self
    }

    /// The span's text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The span's own declarations.
    #[inline]
    pub fn style(&self) -> &SpanStyle {
        &self.style
    }
}

/// Rich text: an ordered sequence of spans plus declarations shared by all of them.
///
/// Concatenating the span texts in order gives the flattened text; span order therefore
/// defines every offset in the materialized output.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormattedText {
    spans: Vec<Span>,
    style: SpanStyle,
}

impl FormattedText {
    /// Creates formatted text from spans.
    pub fn new<I>(spans: I) -> Self
    where
        I: IntoIterator<Item = Span>,
    {
        Self {
            spans: spans.into_iter().collect(),
            style: SpanStyle::new(),
        }
    }

    /// Returns this text with shared declarations that every span inherits.
    #[inline]
    pub fn with_style(mut self, style: SpanStyle) -> Self {
        self.style = style;
        self
    }

    /// Appends a span.
    #[inline]
    pub fn push_span(&mut self, span: Span) {
        self.spans.push(span);
    }

    /// The spans, in order.
    #[inline]
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// The shared declarations.
    #[inline]
    pub fn style(&self) -> &SpanStyle {
        &self.style
    }

    /// The flattened length in bytes: the sum of all span lengths.
    pub fn len(&self) -> usize {
        self.spans.iter().map(|span| span.text.len()).sum()
    }

    /// Returns `true` if there is no text in any span.
    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|span| span.text.is_empty())
    }
}

impl fmt::Display for FormattedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for span in &self.spans {
            f.write_str(&span.text)?;
        }
        Ok(())
    }
}

/// A span style with every property resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct ComputedSpanStyle {
    pub(crate) font: FontDescriptor,
    pub(crate) foreground: Option<Rgba>,
    pub(crate) background: Option<Rgba>,
    pub(crate) underline: bool,
    pub(crate) strikethrough: bool,
}

impl ComputedSpanStyle {
    /// The root style for a surface: its font, no colors and no decoration.
    pub fn from_font(font: FontDescriptor) -> Self {
        Self {
            font,
            foreground: None,
            background: None,
            underline: false,
            strikethrough: false,
        }
    }

    /// The resolved font.
    #[inline]
    pub fn font(&self) -> &FontDescriptor {
        &self.font
    }

    /// The resolved text color, if any.
    #[inline]
    pub fn foreground(&self) -> Option<Rgba> {
        self.foreground
    }

    /// The resolved highlight color, if any.
    #[inline]
    pub fn background(&self) -> Option<Rgba> {
        self.background
    }

    /// The resolved decoration.
    #[inline]
    pub fn decoration(&self) -> TextDecoration {
        TextDecoration::from_lines(self.underline, self.strikethrough)
    }

    /// Returns a copy with its decoration replaced.
    #[inline]
    pub fn with_decoration(mut self, decoration: TextDecoration) -> Self {
        self.underline = decoration.has_underline();
        self.strikethrough = decoration.has_line_through();
        self
    }

    /// Lowers this style to native attributes.
    ///
    /// The font is always present; colors only when resolved; decorations follow
    /// [`decoration_attributes`].
    pub fn modifiers(&self, line_style: LineStyle) -> AttributeSet {
        let mut set = AttributeSet::new().with(Attribute::Font(self.font.clone()));
        if let Some(color) = self.foreground {
            set.insert(Attribute::ForegroundColor(color));
        }
        if let Some(color) = self.background {
            set.insert(Attribute::BackgroundColor(color));
        }
        set.extend_from(&decoration_attributes(self.decoration(), line_style));
        set
    }
}

/// Resolves a declaration list against its parent.
///
/// The input is treated as a declaration list: if multiple declarations of the same property
/// are present, the last declaration wins. Undeclared properties are inherited.
pub fn resolve_span_declarations<'a, I>(
    declarations: I,
    parent: &ComputedSpanStyle,
) -> ComputedSpanStyle
where
    I: IntoIterator<Item = &'a SpanDeclaration>,
{
    let mut out = parent.clone();
    for declaration in declarations {
        match declaration {
            SpanDeclaration::FontFamily(family) => out.font.family = Some(Arc::clone(family)),
            SpanDeclaration::FontSize(size) => out.font.point_size = *size,
            SpanDeclaration::FontWeight(weight) => out.font.weight = *weight,
            SpanDeclaration::Italic(italic) => out.font.italic = *italic,
            SpanDeclaration::ForegroundColor(color) => out.foreground = Some(*color),
            SpanDeclaration::BackgroundColor(color) => out.background = Some(*color),
            SpanDeclaration::Underline(on) => out.underline = *on,
            SpanDeclaration::Strikethrough(on) => out.strikethrough = *on,
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use text_runs::{Attribute, AttributeKey, FontDescriptor, LineStyle, Rgba};

    use super::{
        ComputedSpanStyle, FormattedText, Span, SpanDeclaration, SpanStyle,
        resolve_span_declarations,
    };
    use crate::TextDecoration;

    fn hello_world() -> FormattedText {
        FormattedText::new([Span::new("Hello"), Span::new(" "), Span::new("World")])
    }

    #[test]
    fn flattened_text_and_length() {
        let text = hello_world();
        assert_eq!(text.to_string(), "Hello World");
        assert_eq!(text.len(), 11);
        assert!(!text.is_empty());
        assert!(FormattedText::new([Span::new("")]).is_empty());
    }

    #[test]
    fn last_declaration_wins() {
        let parent = ComputedSpanStyle::from_font(FontDescriptor::system(12.0));
        let style = SpanStyle::new().with_font_size(10.0).with_font_size(20.0);
        let computed = resolve_span_declarations(style.declarations(), &parent);
        assert_eq!(computed.font().point_size, 20.0);
    }

    #[test]
    fn builders_and_push_append_in_order() {
        let built = SpanStyle::new()
            .with_italic(true)
            .push(SpanDeclaration::FontWeight(300));
        let listed = SpanStyle::from_declarations([
            SpanDeclaration::Italic(true),
            SpanDeclaration::FontWeight(300),
        ]);
        assert_eq!(built, listed);
        assert_eq!(built.declarations().len(), 2);
    }

    #[test]
    fn undeclared_properties_inherit() {
        let red = Rgba::rgb(255, 0, 0);
        let parent = ComputedSpanStyle::from_font(FontDescriptor::system(12.0).with_family("Menlo"))
            .with_decoration(TextDecoration::Underline);
        let parent = resolve_span_declarations(
            SpanStyle::new().with_foreground(red).declarations(),
            &parent,
        );
        let computed = resolve_span_declarations(
            SpanStyle::new().with_font_weight(700).declarations(),
            &parent,
        );
        assert_eq!(computed.foreground(), Some(red));
        assert_eq!(computed.font().family.as_deref(), Some("Menlo"));
        assert_eq!(computed.font().weight, 700);
        assert_eq!(computed.decoration(), TextDecoration::Underline);
    }

    #[test]
    fn modifiers_lower_every_resolved_property() {
        let blue = Rgba::rgb(0, 0, 255);
        let computed = resolve_span_declarations(
            SpanStyle::new()
                .with_background(blue)
                .with_strikethrough(true)
                .declarations(),
            &ComputedSpanStyle::from_font(FontDescriptor::system(14.0)),
        );
        let set = computed.modifiers(LineStyle::Single);
        assert_eq!(
            set.get(AttributeKey::Font),
            Some(&Attribute::Font(FontDescriptor::system(14.0)))
        );
        assert_eq!(
            set.get(AttributeKey::BackgroundColor),
            Some(&Attribute::BackgroundColor(blue))
        );
        assert!(!set.contains(AttributeKey::ForegroundColor));
        assert!(set.is_active(AttributeKey::Strikethrough));
        assert!(set.contains(AttributeKey::Underline));
        assert!(!set.is_active(AttributeKey::Underline));
    }
}
