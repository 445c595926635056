// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text Surface reconciles a text model with independently settable style properties and
//! applies the result to a native text widget.
//!
//! - [`StyleIntent`] holds decoration, case transform, letter spacing and color.
//! - [`compose`] turns an intent into run-level attributes for plain text.
//! - [`FormattedText`] is rich text made of [`Span`]s with their own declarations;
//!   [`materialize`] lowers it to an [`AttributedString`](text_runs::AttributedString) with one
//!   run per span.
//! - [`NativeSurface`] adapts input fields, labels and state-scoped buttons to one
//!   [`TextSurface`] contract.
//! - [`TextView`] owns the model and the intent and re-applies both on every property write,
//!   so the rendered result never depends on the order in which properties were set.
//!
//! ## Indices
//!
//! All ranges are **byte indices** into UTF-8 text.
//!
//! ## Example
//!
//! ```
//! use text_surface::{
//!     FormattedText, Span, SpanStyle, StyleIntent, TextConfig, TextDecoration, materialize,
//! };
//! use text_runs::{AttributeKey, FontDescriptor};
//!
//! let text = FormattedText::new([
//!     Span::new("Hello"),
//!     Span::new(" "),
//!     Span::new("World").with_style(SpanStyle::new().with_font_size(24.0)),
//! ]);
//! let intent = StyleIntent::default().with_decoration(TextDecoration::Underline);
//! let out = materialize(&text, &intent, &FontDescriptor::system(17.0), &TextConfig::default());
//!
//! assert_eq!(out.as_str(), "Hello World");
//! assert_eq!(out.runs()[2].range, 6..11);
//! assert!(out.runs().iter().all(|run| run.attributes.is_active(AttributeKey::Underline)));
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod compose;
mod config;
mod error;
mod formatted;
mod materialize;
mod style;
mod surface;
mod transform;
mod value;
mod view;

#[cfg(test)]
mod testing;

pub use compose::{compose, decoration_attributes};
pub use config::TextConfig;
pub use error::Error;
pub use formatted::{
    ComputedSpanStyle, FormattedText, Span, SpanDeclaration, SpanStyle, resolve_span_declarations,
};
pub use materialize::{Materialized, materialize, materialize_plain};
pub use style::{StyleIntent, TextAlignment, TextDecoration, TextTransform, active_letter_spacing};
pub use surface::{
    ButtonWidget, ControlState, NativeAlignment, NativeSurface, SurfaceKind, TextSurface,
    TextWidget,
};
pub use transform::transform_text;
pub use value::{ColorValue, FontValue};
pub use view::{TextState, TextValue, TextView, ViewHost};
