// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use crate::AttributeSet;

/// An [`AttributeSet`] applied to one byte range.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeRun {
    /// The byte range in the text.
    pub range: Range<usize>,
    /// The attributes for this range.
    pub attributes: AttributeSet,
}

impl AttributeRun {
    /// The first byte of the run.
    #[inline]
    pub fn start(&self) -> usize {
        self.range.start
    }

    /// The length of the run in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// Returns `true` if the run covers no text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Owned text with attribute sets applied to ranges within it.
///
/// This is the rich-text object handed to a native surface in a single assignment. Runs can
/// only be added by appending text, so they are always ordered, non-overlapping and jointly
/// cover the text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributedString {
    text: String,
    runs: Vec<AttributeRun>,
}

impl AttributedString {
    /// Creates an `AttributedString` with one run covering the whole text.
    pub fn with_attributes(text: impl Into<String>, attributes: AttributeSet) -> Self {
        let text = text.into();
        let runs = alloc::vec![AttributeRun {
            range: 0..text.len(),
            attributes,
        }];
        Self { text, runs }
    }

    /// Appends `text` and records one run covering exactly the appended bytes.
    ///
    /// Returns the range of the new run. Offsets advance by the byte length of `text`, so runs
    /// built this way are ordered, non-overlapping and contiguous.
    pub fn push_run(&mut self, text: &str, attributes: AttributeSet) -> Range<usize> {
        let start = self.text.len();
        self.text.push_str(text);
        let range = start..self.text.len();
        self.runs.push(AttributeRun {
            range: range.clone(),
            attributes,
        });
        range
    }

    /// Borrows the text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the length of the text, in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The runs, in the order they were applied.
    #[inline]
    pub fn runs(&self) -> &[AttributeRun] {
        &self.runs
    }

    /// Returns the number of runs.
    #[inline]
    pub fn runs_len(&self) -> usize {
        self.runs.len()
    }

    /// Iterates over the attribute sets that apply at byte `index`.
    pub fn attributes_at(&self, index: usize) -> impl Iterator<Item = &AttributeSet> {
        self.runs
            .iter()
            .filter(move |run| run.range.contains(&index))
            .map(|run| &run.attributes)
    }

    /// Iterates over the runs that intersect `range`.
    pub fn runs_for_range(&self, range: Range<usize>) -> impl Iterator<Item = &AttributeRun> {
        self.runs
            .iter()
            .filter(move |run| run.range.start < range.end && run.range.end > range.start)
    }

    /// Returns `true` if the runs are ordered, non-overlapping and jointly cover the text.
    ///
    /// Empty runs are allowed anywhere they do not break contiguity.
    pub fn is_fully_covered(&self) -> bool {
        let mut cursor = 0;
        for run in &self.runs {
            if run.range.start != cursor {
                return false;
            }
            cursor = run.range.end;
        }
        cursor == self.text.len()
    }
}
