// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turning a text model plus a [`StyleIntent`] into what a native surface displays.
//!
//! Materialization never mutates its inputs. Run-level decoration and transform are pushed
//! down into a resolved copy of each span for the duration of one call, so materializing the
//! same [`FormattedText`] repeatedly always starts from the author's original text.
//!
//! Offsets advance by the byte length of the *transformed* span text, which may differ from the
//! original (`"ﬁ"` is 3 bytes and upper-cases to the 2 bytes of `"FI"`).

use alloc::string::String;

use text_runs::{Attribute, AttributeSet, AttributedString, FontDescriptor};

use crate::formatted::{ComputedSpanStyle, resolve_span_declarations};
use crate::{FormattedText, StyleIntent, TextConfig, compose, transform_text};

/// The output of materialization.
#[derive(Clone, Debug, PartialEq)]
pub enum Materialized {
    /// No attribute applies: assign as plain text.
    Plain(String),
    /// Attributed text, assigned in one piece.
    Rich(AttributedString),
}

impl Materialized {
    /// The text that will be displayed.
    #[inline]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Plain(text) => text,
            Self::Rich(rich) => rich.as_str(),
        }
    }

    /// The attributed form, if attributes apply.
    #[inline]
    pub fn as_rich(&self) -> Option<&AttributedString> {
        match self {
            Self::Plain(_) => None,
            Self::Rich(rich) => Some(rich),
        }
    }
}

/// Materializes a plain string.
///
/// The transform is applied to the content; [`compose`] supplies the attributes, with letter
/// spacing scaled by `font_point_size`. When [`compose`] yields nothing the result is
/// [`Materialized::Plain`] and no run is emitted. Otherwise a single run covers the whole text.
pub fn materialize_plain(
    text: &str,
    intent: &StyleIntent,
    font_point_size: f32,
    config: &TextConfig,
) -> Materialized {
    let content = transform_text(text, intent.transform, config.locale());
    let attributes = compose(intent, font_point_size, config);
    if attributes.is_empty() {
        Materialized::Plain(content.into_owned())
    } else {
        Materialized::Rich(AttributedString::with_attributes(content, attributes))
    }
}

/// Materializes formatted text.
///
/// 1. The shared declarations of `formatted` resolve against `base_font`; the intent's
///    decoration then replaces the inherited decoration, so every span that does not declare
///    its own underline or strikethrough takes the run-level decoration.
/// 2. Each span, in order, resolves against that parent, has its text transformed, and is
///    appended as exactly one run carrying its modifiers plus, when letter spacing is active,
///    a `Kern` of `letter_spacing * span font size`.
/// 3. Runs are never merged, even when adjacent spans resolve to equal attributes.
pub fn materialize(
    formatted: &FormattedText,
    intent: &StyleIntent,
    base_font: &FontDescriptor,
    config: &TextConfig,
) -> AttributedString {
    let root = ComputedSpanStyle::from_font(base_font.clone());
    let parent = resolve_span_declarations(formatted.style().declarations(), &root)
        .with_decoration(intent.decoration);
    let letter_spacing = intent.active_letter_spacing();

    let mut out = AttributedString::default();
    for span in formatted.spans() {
        let computed = resolve_span_declarations(span.style().declarations(), &parent);
        let mut attributes: AttributeSet = computed.modifiers(config.line_style());
        if let Some(spacing) = letter_spacing {
            attributes.insert(Attribute::Kern(spacing * computed.font().point_size));
        }
        let text = transform_text(span.text(), intent.transform, config.locale());
        out.push_run(&text, attributes);
    }

    debug_assert_eq!(
        out.runs_len(),
        formatted.spans().len(),
        "one run per span"
    );
    debug_assert!(out.is_fully_covered(), "runs must tile the text");
    tracing::trace!(
        spans = formatted.spans().len(),
        len = out.len(),
        "materialized formatted text"
    );
    out
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use text_runs::{Attribute, AttributeKey, FontDescriptor, Rgba};

    use super::{Materialized, materialize, materialize_plain};
    use crate::{
        FormattedText, Span, SpanStyle, StyleIntent, TextConfig, TextDecoration, TextTransform,
    };

    fn hello_world() -> FormattedText {
        FormattedText::new([
            Span::new("Hello").with_style(SpanStyle::new().with_font_size(20.0)),
            Span::new(" "),
            Span::new("World").with_style(SpanStyle::new().with_underline(true)),
        ])
    }

    #[test]
    fn plain_decoration_then_none_leaves_no_decoration() {
        let config = TextConfig::default();
        for decoration in TextDecoration::ALL {
            let intent = StyleIntent::default().with_decoration(*decoration);
            let first = materialize_plain("abc", &intent, 17.0, &config);
            if *decoration != TextDecoration::None {
                assert!(first.as_rich().is_some());
            }
            let cleared = intent.with_decoration(TextDecoration::None);
            let second = materialize_plain("abc", &cleared, 17.0, &config);
            assert_eq!(second, Materialized::Plain("abc".into()));
        }
    }

    #[test]
    fn plain_path_single_run_covers_transformed_text() {
        let intent = StyleIntent::default()
            .with_transform(TextTransform::Uppercase)
            .with_letter_spacing(0.5);
        let out = materialize_plain("straße", &intent, 10.0, &TextConfig::default());
        let rich = out.as_rich().expect("letter spacing is an attribute");
        assert_eq!(rich.as_str(), "STRASSE");
        assert_eq!(rich.runs_len(), 1);
        assert_eq!(rich.runs()[0].range, 0..7);
        assert_eq!(
            rich.runs()[0].attributes.get(AttributeKey::Kern),
            Some(&Attribute::Kern(5.0))
        );
    }

    #[test]
    fn span_offsets_and_mirror() {
        let out = materialize(
            &hello_world(),
            &StyleIntent::default(),
            &FontDescriptor::system(12.0),
            &TextConfig::default(),
        );
        assert_eq!(out.as_str(), "Hello World");
        let ranges: Vec<_> = out.runs().iter().map(|run| run.range.clone()).collect();
        assert_eq!(ranges, [0..5, 5..6, 6..11]);
    }

    #[test]
    fn adjacent_equal_spans_are_not_merged() {
        let text = FormattedText::new([Span::new("a"), Span::new("b"), Span::new("c")]);
        let out = materialize(
            &text,
            &StyleIntent::default(),
            &FontDescriptor::default(),
            &TextConfig::default(),
        );
        assert_eq!(out.runs_len(), 3);
        assert_eq!(out.runs()[0].attributes, out.runs()[1].attributes);
    }

    #[test]
    fn letter_spacing_uses_each_span_font_size() {
        let intent = StyleIntent::default().with_letter_spacing(0.1);
        let out = materialize(
            &hello_world(),
            &intent,
            &FontDescriptor::system(10.0),
            &TextConfig::default(),
        );
        let kerns: Vec<_> = out
            .runs()
            .iter()
            .map(|run| run.attributes.get(AttributeKey::Kern).cloned())
            .collect();
        assert_eq!(
            kerns,
            [
                Some(Attribute::Kern(0.1 * 20.0)),
                Some(Attribute::Kern(0.1 * 10.0)),
                Some(Attribute::Kern(0.1 * 10.0)),
            ]
        );
    }

    #[test]
    fn run_decoration_is_pushed_into_spans() {
        let text = FormattedText::new([
            Span::new("plain"),
            Span::new("opt-out").with_style(SpanStyle::new().with_strikethrough(false)),
        ])
        .with_style(SpanStyle::new().with_underline(true));

        let intent = StyleIntent::default().with_decoration(TextDecoration::LineThrough);
        let out = materialize(&text, &intent, &FontDescriptor::default(), &TextConfig::default());
        let first = &out.runs()[0].attributes;
        assert!(first.is_active(AttributeKey::Strikethrough));
        // The run-level decoration replaces the shared underline.
        assert!(!first.is_active(AttributeKey::Underline));
        let second = &out.runs()[1].attributes;
        assert!(!second.is_active(AttributeKey::Strikethrough));
        assert!(!second.contains(AttributeKey::Strikethrough));

        let none = materialize(
            &text,
            &StyleIntent::default(),
            &FontDescriptor::default(),
            &TextConfig::default(),
        );
        assert!(
            none.runs()
                .iter()
                .all(|run| !run.attributes.contains(AttributeKey::Underline))
        );
    }

    #[test]
    fn offsets_follow_transformed_length() {
        let text = FormattedText::new([Span::new("ﬁ"), Span::new("x"), Span::new("ﬁne")]);
        assert_eq!(text.len(), 9);
        let intent = StyleIntent::default().with_transform(TextTransform::Uppercase);
        let out = materialize(&text, &intent, &FontDescriptor::default(), &TextConfig::default());
        assert_eq!(out.as_str(), "FIXFINE");
        let ranges: Vec<_> = out.runs().iter().map(|run| run.range.clone()).collect();
        assert_eq!(ranges, [0..2, 2..3, 3..7]);
        assert!(out.is_fully_covered());

        let spaced = intent.with_letter_spacing(0.1);
        let plain = materialize_plain("ﬁ", &spaced, 10.0, &TextConfig::default());
        assert_eq!(
            plain.as_rich().map(|rich| rich.runs()[0].range.clone()),
            Some(0..2)
        );
    }

    #[test]
    fn transform_does_not_mutate_the_model() {
        let text = FormattedText::new([Span::new("straße "), Span::new("ok")]);
        let intent = StyleIntent::default().with_transform(TextTransform::Uppercase);
        let config = TextConfig::default();
        let first = materialize(&text, &intent, &FontDescriptor::default(), &config);
        let second = materialize(&text, &intent, &FontDescriptor::default(), &config);
        assert_eq!(first, second);
        assert_eq!(first.as_str(), "STRASSE OK");
        assert_eq!(first.runs()[1].range, 8..10);
        assert_eq!(text.spans()[0].text(), "straße ");
    }

    #[test]
    fn span_colors_are_modifiers() {
        let red = Rgba::rgb(255, 0, 0);
        let text = FormattedText::new([
            Span::new("red").with_style(SpanStyle::new().with_foreground(red))
        ]);
        let intent = StyleIntent::default().with_color(Some(Rgba::BLACK));
        let out = materialize(&text, &intent, &FontDescriptor::default(), &TextConfig::default());
        assert_eq!(
            out.runs()[0].attributes.get(AttributeKey::ForegroundColor),
            Some(&Attribute::ForegroundColor(red))
        );
    }
}
