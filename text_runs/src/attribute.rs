// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

use crate::{FontDescriptor, LineStyle, Rgba};

/// Names one attribute slot of a text range.
///
/// The declaration order is the order in which an [`AttributeSet`] stores its entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttributeKey {
    /// The font used to render the range.
    Font,
    /// Text color.
    ForegroundColor,
    /// Highlight color behind the glyphs.
    BackgroundColor,
    /// Underline decoration.
    Underline,
    /// Strikethrough decoration.
    Strikethrough,
    /// Extra spacing between letters, in points.
    Kern,
}

/// A single keyed attribute value.
#[derive(Clone, Debug, PartialEq)]
pub enum Attribute {
    /// See [`AttributeKey::Font`].
    Font(FontDescriptor),
    /// See [`AttributeKey::ForegroundColor`].
    ForegroundColor(Rgba),
    /// See [`AttributeKey::BackgroundColor`].
    BackgroundColor(Rgba),
    /// See [`AttributeKey::Underline`].
    Underline(LineStyle),
    /// See [`AttributeKey::Strikethrough`].
    Strikethrough(LineStyle),
    /// See [`AttributeKey::Kern`].
    Kern(f32),
}

impl Attribute {
    /// Returns the slot this attribute occupies.
    #[inline]
    pub const fn key(&self) -> AttributeKey {
        match self {
            Self::Font(_) => AttributeKey::Font,
            Self::ForegroundColor(_) => AttributeKey::ForegroundColor,
            Self::BackgroundColor(_) => AttributeKey::BackgroundColor,
            Self::Underline(_) => AttributeKey::Underline,
            Self::Strikethrough(_) => AttributeKey::Strikethrough,
            Self::Kern(_) => AttributeKey::Kern,
        }
    }

    /// Returns `false` for decoration attributes that only clear a line.
    #[inline]
    pub const fn is_active(&self) -> bool {
        match self {
            Self::Underline(style) | Self::Strikethrough(style) => style.is_visible(),
            _ => true,
        }
    }
}

/// A mapping from [`AttributeKey`] to [`Attribute`].
///
/// Inserting an attribute replaces any existing attribute with the same key. Entries are kept
/// sorted by key, so equality does not depend on insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeSet {
    entries: SmallVec<[Attribute; 4]>,
}

impl AttributeSet {
    /// Creates an empty set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `attribute`, returning the attribute it replaced, if any.
    pub fn insert(&mut self, attribute: Attribute) -> Option<Attribute> {
        match self.position(attribute.key()) {
            Ok(ix) => Some(core::mem::replace(&mut self.entries[ix], attribute)),
            Err(ix) => {
                self.entries.insert(ix, attribute);
                None
            }
        }
    }

    /// Builder form of [`AttributeSet::insert`].
    #[inline]
    #[must_use]
    pub fn with(mut self, attribute: Attribute) -> Self {
        self.insert(attribute);
        self
    }

    /// Returns the attribute stored under `key`.
    #[inline]
    pub fn get(&self, key: AttributeKey) -> Option<&Attribute> {
        self.position(key).ok().map(|ix| &self.entries[ix])
    }

    /// Returns `true` if an attribute is stored under `key`, including cleared decorations.
    #[inline]
    pub fn contains(&self, key: AttributeKey) -> bool {
        self.position(key).is_ok()
    }

    /// Returns `true` if `key` is present and actually draws something.
    #[inline]
    pub fn is_active(&self, key: AttributeKey) -> bool {
        self.get(key).is_some_and(Attribute::is_active)
    }

    /// Removes and returns the attribute stored under `key`.
    pub fn remove(&mut self, key: AttributeKey) -> Option<Attribute> {
        self.position(key).ok().map(|ix| self.entries.remove(ix))
    }

    /// Inserts every attribute of `other`; entries of `other` win on key collisions.
    pub fn extend_from(&mut self, other: &Self) {
        for attribute in other.iter() {
            self.insert(attribute.clone());
        }
    }

    /// Iterates over the attributes in key order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Attribute> {
        self.entries.iter()
    }

    /// Returns the number of attributes.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the set holds no attribute at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: AttributeKey) -> Result<usize, usize> {
        self.entries.binary_search_by_key(&key, Attribute::key)
    }
}

impl Extend<Attribute> for AttributeSet {
    fn extend<I: IntoIterator<Item = Attribute>>(&mut self, iter: I) {
        for attribute in iter {
            self.insert(attribute);
        }
    }
}

impl FromIterator<Attribute> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
