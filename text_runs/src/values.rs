// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

/// An 8-bit-per-channel color in the surface's native color space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, `255` is opaque.
    pub a: u8,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Creates a color from all four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

/// The line style of an underline or strikethrough decoration.
///
/// [`LineStyle::None`] is a real value, not an absence: attaching it to a range explicitly
/// clears a decoration the native surface may still hold from an earlier assignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineStyle {
    /// No line.
    #[default]
    None,
    /// A single thin line.
    Single,
    /// Two thin lines.
    Double,
    /// A single thick line.
    Thick,
}

impl LineStyle {
    /// Returns `true` for every style that draws a line.
    #[inline]
    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// A resolved font, as the native surface understands it.
#[derive(Clone, Debug, PartialEq)]
pub struct FontDescriptor {
    /// Family name, or `None` for the platform's system font.
    pub family: Option<Arc<str>>,
    /// Size in points.
    pub point_size: f32,
    /// Weight on the usual `1..=1000` scale.
    pub weight: u16,
    /// Whether an italic face is requested.
    pub italic: bool,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: None,
            point_size: 17.0,
            weight: 400,
            italic: false,
        }
    }
}

impl FontDescriptor {
    /// The system font at `point_size`.
    #[inline]
    pub fn system(point_size: f32) -> Self {
        Self::default().with_point_size(point_size)
    }

    /// Returns a copy with the given point size.
    #[inline]
    pub fn with_point_size(mut self, point_size: f32) -> Self {
        self.point_size = point_size;
        self
    }

    /// Returns a copy with the given family.
    #[inline]
    pub fn with_family(mut self, family: impl Into<Arc<str>>) -> Self {
        self.family = Some(family.into());
        self
    }

    /// Returns a copy with the given weight.
    #[inline]
    pub fn with_weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    /// Returns a copy with italic enabled or disabled.
    #[inline]
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }
}
