// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;
use alloc::string::String;

use icu_casemap::options::TitlecaseOptions;
use icu_casemap::{CaseMapper, TitlecaseMapper};
use icu_locale_core::LanguageIdentifier;
use icu_segmenter::WordSegmenter;
use icu_segmenter::options::WordBreakInvariantOptions;

use crate::TextTransform;

/// Applies a case transform to text content.
///
/// Case mapping is full Unicode case mapping with `locale` tailoring (e.g. Turkish dotted and
/// dotless `i`), so the result may be longer or shorter than the input: the ligature `"ﬁ"`
/// (3 bytes) upper-cases to `"FI"` (2 bytes). [`TextTransform::None`] borrows the input.
///
/// Every transform is idempotent: applying it to its own output returns that output unchanged.
pub fn transform_text<'a>(
    text: &'a str,
    transform: TextTransform,
    locale: &LanguageIdentifier,
) -> Cow<'a, str> {
    match transform {
        TextTransform::None => Cow::Borrowed(text),
        TextTransform::Uppercase => CaseMapper::new().uppercase_to_string(text, locale).into(),
        TextTransform::Lowercase => CaseMapper::new().lowercase_to_string(text, locale).into(),
        TextTransform::Capitalize => Cow::Owned(capitalize(text, locale)),
    }
}

/// Title-cases each word-like segment and lower-cases the rest of that word.
///
/// Segments that are not words (spaces, punctuation) are copied through.
fn capitalize(text: &str, locale: &LanguageIdentifier) -> String {
    let titlecase = TitlecaseMapper::new();
    let segmenter = WordSegmenter::new_auto(WordBreakInvariantOptions::default());

    let mut out = String::with_capacity(text.len());
    let mut breaks = segmenter.segment_str(text);
    let mut last = 0;
    while let Some(next) = breaks.next() {
        if next == last {
            continue;
        }
        let segment = &text[last..next];
        if breaks.is_word_like() {
            out.push_str(&titlecase.titlecase_segment_to_string(
                segment,
                locale,
                TitlecaseOptions::default(),
            ));
        } else {
            out.push_str(segment);
        }
        last = next;
    }
    out
}
