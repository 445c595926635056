// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composition of a [`StyleIntent`] into run-level attributes.
//!
//! Composition is pure. Case transforms are not attributes; they rewrite the text content and
//! live in [`transform_text`](crate::transform_text).

use text_runs::{Attribute, AttributeSet, LineStyle};

use crate::{StyleIntent, TextConfig, TextDecoration};

/// Maps a decoration to its attributes.
///
/// A decoration that draws only one line explicitly clears the other one with
/// [`LineStyle::None`]. Native surfaces that keep attributed state between assignments rely on
/// this to drop a previously applied line. [`TextDecoration::None`] emits nothing.
pub fn decoration_attributes(decoration: TextDecoration, line_style: LineStyle) -> AttributeSet {
    let (underline, strikethrough) = match decoration {
        TextDecoration::None => return AttributeSet::new(),
        TextDecoration::Underline => (line_style, LineStyle::None),
        TextDecoration::LineThrough => (LineStyle::None, line_style),
        TextDecoration::UnderlineLineThrough => (line_style, line_style),
    };
    AttributeSet::new()
        .with(Attribute::Underline(underline))
        .with(Attribute::Strikethrough(strikethrough))
}

/// Computes the attributes for a run of plain text.
///
/// - decoration per [`decoration_attributes`],
/// - `Kern` of `letter_spacing * font_point_size` when letter spacing is active,
/// - `ForegroundColor` when a color is set.
///
/// An empty result means the surface should take the plain-string path.
pub fn compose(intent: &StyleIntent, font_point_size: f32, config: &TextConfig) -> AttributeSet {
    let mut set = decoration_attributes(intent.decoration, config.line_style());
    if let Some(spacing) = intent.active_letter_spacing() {
        set.insert(Attribute::Kern(spacing * font_point_size));
    }
    if let Some(color) = intent.color {
        set.insert(Attribute::ForegroundColor(color));
    }
    set
}
