// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary traits for color and font value objects.
//!
//! Values are opaque to this crate: it only asks them for their native representation.

use text_runs::{FontDescriptor, Rgba};

/// A color value that can produce its native representation.
pub trait ColorValue {
    /// Returns the native color.
    fn to_native_color(&self) -> Rgba;
}

impl ColorValue for Rgba {
    #[inline]
    fn to_native_color(&self) -> Rgba {
        *self
    }
}

/// A font value that resolves against the surface's current font.
///
/// Partial font values (for example "bold, keep family and size") derive the result from
/// `existing`; complete values ignore it.
pub trait FontValue {
    /// Returns the native font to install, given the font currently installed.
    fn to_native_font(&self, existing: &FontDescriptor) -> FontDescriptor;
}

impl FontValue for FontDescriptor {
    #[inline]
    fn to_native_font(&self, _existing: &FontDescriptor) -> FontDescriptor {
        self.clone()
    }
}
