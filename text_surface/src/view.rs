// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The hosting view: owns the text model and the style intent, and re-applies both to its
//! surface on every property write.

use alloc::string::String;

use text_runs::{AttributedString, FontDescriptor, Rgba};

use crate::materialize::{Materialized, materialize, materialize_plain};
use crate::{
    ColorValue, Error, FontValue, FormattedText, StyleIntent, TextAlignment, TextConfig,
    TextDecoration, TextSurface, TextTransform,
};

/// The text model of a view.
#[derive(Clone, Debug, PartialEq)]
pub enum TextValue {
    /// A plain string.
    Plain(String),
    /// Rich text.
    Formatted(FormattedText),
}

/// Which representation the surface currently holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextState {
    /// No text has been written yet.
    NoText,
    /// Plain text.
    Plain,
    /// Formatted text.
    Rich,
}

/// The layout engine and observers of a view.
pub trait ViewHost {
    /// Called after every write that changes the text content or its metrics.
    fn request_layout(&mut self);

    /// Called with the flattened text after formatted text has been rendered.
    fn text_changed(&mut self, _text: &str) {}
}

impl ViewHost for () {
    fn request_layout(&mut self) {}
}

/// A text view over a native surface.
///
/// Every style property can be written at any time and in any order; each write rebuilds
/// the whole output from the current text and style and assigns it to the surface once.
#[derive(Debug)]
pub struct TextView<S, H = ()> {
    surface: S,
    host: H,
    value: Option<TextValue>,
    intent: StyleIntent,
    config: TextConfig,
    mirror: String,
}

impl<S: TextSurface> TextView<S> {
    /// Creates a view with no host.
    pub fn new(surface: S) -> Self {
        Self::with_host(surface, ())
    }
}

impl<S: TextSurface, H: ViewHost> TextView<S, H> {
    /// Creates a view that reports layout requests to `host`.
    pub fn with_host(surface: S, host: H) -> Self {
        Self {
            surface,
            host,
            value: None,
            intent: StyleIntent::default(),
            config: TextConfig::default(),
            mirror: String::new(),
        }
    }

    /// Replaces the configuration and re-applies the current text.
    pub fn with_config(mut self, config: TextConfig) -> Self {
        self.config = config;
        self.refresh();
        self
    }

    /// The configuration.
    pub fn config(&self) -> &TextConfig {
        &self.config
    }

    /// The native surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The native surface, mutably.
    ///
    /// Changes made directly are overwritten by the next property write.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The current style intent.
    pub fn style(&self) -> &StyleIntent {
        &self.intent
    }

    /// Which representation is installed.
    pub fn text_state(&self) -> TextState {
        match self.value {
            None => TextState::NoText,
            Some(TextValue::Plain(_)) => TextState::Plain,
            Some(TextValue::Formatted(_)) => TextState::Rich,
        }
    }

    /// The rendered text: the plain value, or the concatenation of all spans, after transform.
    pub fn text(&self) -> &str {
        &self.mirror
    }

    /// Installs plain text. `None` installs the empty string.
    pub fn set_text(&mut self, text: Option<&str>) {
        self.replace_value(TextValue::Plain(text.unwrap_or_default().into()));
        self.host.request_layout();
    }

    /// The formatted text model, if the view holds one.
    pub fn formatted_text(&self) -> Option<&FormattedText> {
        match &self.value {
            Some(TextValue::Formatted(text)) => Some(text),
            _ => None,
        }
    }

    /// Installs formatted text. `None` returns to plain text with the empty string.
    pub fn set_formatted_text(&mut self, text: Option<FormattedText>) {
        let value = match text {
            Some(text) => TextValue::Formatted(text),
            None => TextValue::Plain(String::new()),
        };
        self.replace_value(value);
        self.host.request_layout();
    }

    /// The installed attributed text, if any.
    pub fn attributed_text(&self) -> Option<&AttributedString> {
        self.surface.attributed_text()
    }

    /// The surface's text color.
    pub fn color(&self) -> Option<Rgba> {
        self.surface.color()
    }

    /// Sets or resets the text color.
    pub fn set_color(&mut self, color: Option<&dyn ColorValue>) {
        let color = color.map(|color| color.to_native_color());
        self.intent.color = color;
        self.surface.set_color(color);
        self.refresh();
    }

    /// The font text renders with.
    pub fn font(&self) -> &FontDescriptor {
        self.surface.font()
    }

    /// Resolves `font` against the current font and installs it.
    pub fn set_font(&mut self, font: &dyn FontValue) {
        let font = font.to_native_font(self.surface.font());
        self.surface.set_font(font);
        self.refresh();
        self.host.request_layout();
    }

    /// The alignment.
    ///
    /// Fails with [`Error::UnsupportedAlignment`] when the surface reports a mode with no
    /// portable equivalent.
    pub fn text_alignment(&self) -> Result<TextAlignment, Error> {
        self.surface.alignment()
    }

    /// Sets the alignment.
    pub fn set_text_alignment(&mut self, alignment: TextAlignment) {
        self.surface.set_alignment(alignment);
    }

    /// The decoration.
    pub fn text_decoration(&self) -> TextDecoration {
        self.intent.decoration
    }

    /// Sets the decoration.
    pub fn set_text_decoration(&mut self, decoration: TextDecoration) {
        self.intent.decoration = decoration;
        self.refresh();
    }

    /// The case transform.
    pub fn text_transform(&self) -> TextTransform {
        self.intent.transform
    }

    /// Sets the case transform.
    pub fn set_text_transform(&mut self, transform: TextTransform) {
        self.intent.transform = transform;
        self.refresh();
        self.host.request_layout();
    }

    /// The letter spacing multiplier; `NaN` when unset.
    pub fn letter_spacing(&self) -> f32 {
        self.intent.letter_spacing
    }

    /// Sets the letter spacing as a multiple of the font size. `NaN` or `0.0` unset it.
    pub fn set_letter_spacing(&mut self, letter_spacing: f32) {
        self.intent.letter_spacing = letter_spacing;
        self.refresh();
        self.host.request_layout();
    }

    fn replace_value(&mut self, value: TextValue) {
        let from = self.text_state();
        self.value = Some(value);
        let to = self.text_state();
        if from != to {
            tracing::debug!(kind = ?self.surface.kind(), ?from, ?to, "text state changed");
        }
        self.refresh();
    }

    /// Rebuilds the output from the current text and style and assigns it to the surface.
    fn refresh(&mut self) {
        let Some(value) = &self.value else {
            return;
        };
        let runs = match value {
            TextValue::Plain(text) => {
                let size = self.surface.font().point_size;
                match materialize_plain(text, &self.intent, size, &self.config) {
                    Materialized::Plain(text) => {
                        self.surface.set_text(&text);
                        self.mirror = text;
                        0
                    }
                    Materialized::Rich(rich) => {
                        self.mirror = rich.as_str().into();
                        let runs = rich.runs_len();
                        self.surface.set_formatted(rich);
                        runs
                    }
                }
            }
            // No spans means no attributes: take the plain path.
            TextValue::Formatted(formatted) if formatted.spans().is_empty() => {
                self.surface.set_text("");
                self.mirror.clear();
                self.host.text_changed(&self.mirror);
                0
            }
            TextValue::Formatted(formatted) => {
                let rich = materialize(formatted, &self.intent, self.surface.font(), &self.config);
                self.mirror = rich.as_str().into();
                let runs = rich.runs_len();
                self.surface.set_formatted(rich);
                self.host.text_changed(&self.mirror);
                runs
            }
        };
        tracing::trace!(
            kind = ?self.surface.kind(),
            state = ?self.text_state(),
            runs,
            "applied text to surface"
        );
    }
}
