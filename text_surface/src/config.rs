// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use icu_locale_core::LanguageIdentifier;
use text_runs::LineStyle;

/// Per-view settings that shape materialization but are not style properties.
#[derive(Clone, Debug, PartialEq)]
pub struct TextConfig {
    locale: LanguageIdentifier,
    line_style: LineStyle,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            locale: LanguageIdentifier::UNKNOWN,
            line_style: LineStyle::Single,
        }
    }
}

impl TextConfig {
    /// Creates the default configuration: root locale, single-line decorations.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the locale used for case transforms.
    #[inline]
    pub fn with_locale(mut self, locale: LanguageIdentifier) -> Self {
        self.locale = locale;
        self
    }

    /// Sets the line style drawn for underline and strikethrough.
    ///
    /// [`LineStyle::None`] is ignored and treated as [`LineStyle::Single`], since decorations
    /// would otherwise become impossible to turn on.
    #[inline]
    pub fn with_line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = if line_style.is_visible() {
            line_style
        } else {
            LineStyle::Single
        };
        self
    }

    /// The locale used for case transforms.
    #[inline]
    pub fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    /// The line style drawn for active decorations.
    #[inline]
    pub fn line_style(&self) -> LineStyle {
        self.line_style
    }
}
