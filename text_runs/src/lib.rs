// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text Runs is the output side of styled-text materialization: a block of UTF-8 text plus an
//! ordered list of [`AttributeRun`]s, each carrying the [`AttributeSet`] a native rich-text
//! surface should apply to that byte range.
//!
//! ## Indices
//!
//! All ranges are **byte indices** into the text. Runs are only ever created by appending text,
//! so they lie on UTF-8 character boundaries and tile the text without gaps or overlaps.
//!
//! ## Example
//!
//! ```
//! use text_runs::{Attribute, AttributeKey, AttributeSet, AttributedString, LineStyle};
//!
//! let mut out = AttributedString::default();
//! out.push_run("Hello", AttributeSet::new().with(Attribute::Underline(LineStyle::Single)));
//! out.push_run(" world", AttributeSet::new());
//!
//! assert_eq!(out.as_str(), "Hello world");
//! assert!(out.is_fully_covered());
//! assert!(out.attributes_at(1).any(|set| set.contains(AttributeKey::Underline)));
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

mod attribute;
mod attributed_string;
mod values;

pub use crate::attribute::{Attribute, AttributeKey, AttributeSet};
pub use crate::attributed_string::{AttributeRun, AttributedString};
pub use crate::values::{FontDescriptor, LineStyle, Rgba};
