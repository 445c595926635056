// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The independently settable style properties of a text view.
//!
//! Each keyword enum is closed and matched exhaustively. The only way to obtain an
//! out-of-range value is through [`FromStr`], which is where
//! [`Error::InvalidStyleValue`] and [`Error::InvalidAlignment`] originate.

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use text_runs::Rgba;

use crate::Error;

macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $property:literal {
            $($(#[$vmeta:meta])* $variant:ident => $keyword:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// The keyword for every value, in declaration order.
            pub const KEYWORDS: &'static [&'static str] = &[$($keyword,)+];

            /// The property name used in error messages.
            pub const PROPERTY: &'static str = $property;

            /// Returns the keyword for this value.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $keyword,)+
                }
            }

            fn from_keyword(keyword: &str) -> Option<Self> {
                match keyword {
                    $($keyword => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

keyword_enum! {
    /// The `text-decoration` property.
    TextDecoration, "text-decoration" {
        /// No decoration.
        #[default]
        None => "none",
        /// Underline only.
        Underline => "underline",
        /// Strikethrough only.
        LineThrough => "line-through",
        /// Both underline and strikethrough.
        UnderlineLineThrough => "underline line-through",
    }
}

keyword_enum! {
    /// The `text-transform` property.
    TextTransform, "text-transform" {
        /// Text is rendered as written.
        #[default]
        None => "none",
        /// Every letter upper case.
        Uppercase => "uppercase",
        /// Every letter lower case.
        Lowercase => "lowercase",
        /// First letter of every word upper case, the rest lower case.
        Capitalize => "capitalize",
    }
}

keyword_enum! {
    /// The `text-align` property.
    TextAlignment, "text-align" {
        /// Start-aligned, left to right.
        #[default]
        Left => "left",
        /// Centered.
        Center => "center",
        /// Right-aligned.
        Right => "right",
    }
}

impl TextDecoration {
    /// Returns `true` if an underline is drawn.
    #[inline]
    pub const fn has_underline(self) -> bool {
        matches!(self, Self::Underline | Self::UnderlineLineThrough)
    }

    /// Returns `true` if a strikethrough is drawn.
    #[inline]
    pub const fn has_line_through(self) -> bool {
        matches!(self, Self::LineThrough | Self::UnderlineLineThrough)
    }

    /// Builds the decoration from its two independent lines.
    #[inline]
    pub const fn from_lines(underline: bool, line_through: bool) -> Self {
        match (underline, line_through) {
            (false, false) => Self::None,
            (true, false) => Self::Underline,
            (false, true) => Self::LineThrough,
            (true, true) => Self::UnderlineLineThrough,
        }
    }
}

impl FromStr for TextDecoration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(s)
            .ok_or_else(|| invalid_style_value(Self::PROPERTY, Self::KEYWORDS, s))
    }
}

impl FromStr for TextTransform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(s)
            .ok_or_else(|| invalid_style_value(Self::PROPERTY, Self::KEYWORDS, s))
    }
}

impl FromStr for TextAlignment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(s).ok_or_else(|| Error::InvalidAlignment {
            value: s.to_string(),
            expected: Self::KEYWORDS,
        })
    }
}

fn invalid_style_value(
    property: &'static str,
    expected: &'static [&'static str],
    value: &str,
) -> Error {
    Error::InvalidStyleValue {
        property,
        value: value.to_string(),
        expected,
    }
}

/// Returns the letter spacing multiplier if it should produce an attribute.
///
/// `NaN`, infinities and zero all mean "unset".
#[inline]
pub fn active_letter_spacing(letter_spacing: f32) -> Option<f32> {
    (letter_spacing.is_finite() && letter_spacing != 0.0).then_some(letter_spacing)
}

/// The style properties a text view composes with its text.
///
/// Each field is set independently and in any order; the rendered result depends only on the
/// final values. The default is also what the native surface reports before any write:
/// no decoration, no transform, unset (`NaN`) letter spacing and no color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleIntent {
    /// Underline / strikethrough.
    pub decoration: TextDecoration,
    /// Case transform applied to the text content.
    pub transform: TextTransform,
    /// Letter spacing as a multiple of the run's font size; `NaN` when unset.
    pub letter_spacing: f32,
    /// Foreground color, or `None` for the surface's inherited color.
    pub color: Option<Rgba>,
}

impl Default for StyleIntent {
    fn default() -> Self {
        Self {
            decoration: TextDecoration::None,
            transform: TextTransform::None,
            letter_spacing: f32::NAN,
            color: None,
        }
    }
}

impl StyleIntent {
    /// Returns a copy with the given decoration.
    #[inline]
    pub fn with_decoration(mut self, decoration: TextDecoration) -> Self {
        self.decoration = decoration;
        self
    }

    /// Returns a copy with the given transform.
    #[inline]
    pub fn with_transform(mut self, transform: TextTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Returns a copy with the given letter spacing multiplier.
    #[inline]
    pub fn with_letter_spacing(mut self, letter_spacing: f32) -> Self {
        self.letter_spacing = letter_spacing;
        self
    }

    /// Returns a copy with the given color.
    #[inline]
    pub fn with_color(mut self, color: Option<Rgba>) -> Self {
        self.color = color;
        self
    }

    /// See [`active_letter_spacing`].
    #[inline]
    pub fn active_letter_spacing(&self) -> Option<f32> {
        active_letter_spacing(self.letter_spacing)
    }
}
