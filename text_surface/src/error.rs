// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

use crate::surface::NativeAlignment;

/// Contract violations reported by the styling entry points.
///
/// All of these are raised before the native surface is touched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A decoration or transform keyword outside the closed set of accepted values.
    #[error("invalid {property} value: {value:?}, valid values are: {}", OneOf(.expected))]
    InvalidStyleValue {
        /// The property being written, e.g. `text-decoration`.
        property: &'static str,
        /// The value that was received.
        value: String,
        /// Every value the property accepts.
        expected: &'static [&'static str],
    },

    /// An alignment keyword outside `left`, `center`, `right`.
    #[error("invalid text alignment value: {value:?}, valid values are: {}", OneOf(.expected))]
    InvalidAlignment {
        /// The value that was received.
        value: String,
        /// Every value the property accepts.
        expected: &'static [&'static str],
    },

    /// The native surface reported an alignment mode with no portable equivalent.
    #[error(
        "unsupported native text alignment: {mode:?}, supported modes are Left, Center, Right and Natural"
    )]
    UnsupportedAlignment {
        /// The native mode that was read.
        mode: NativeAlignment,
    },
}

struct OneOf<'a>(&'a [&'static str]);

impl fmt::Display for OneOf<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (ix, value) in self.0.iter().enumerate() {
            if ix > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value:?}")?;
        }
        Ok(())
    }
}
