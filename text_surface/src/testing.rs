// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory widgets that record every native write.

use alloc::borrow::ToOwned;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use text_runs::{AttributedString, FontDescriptor, Rgba};

use crate::{ButtonWidget, ControlState, NativeAlignment, NativeSurface, TextWidget, ViewHost};

/// One native write.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Call {
    SetText(String),
    SetAttributed(Option<String>),
    SetColor(Option<Rgba>),
    SetFont(FontDescriptor),
    SetAlignment(NativeAlignment),
    SetTitle(Option<String>, ControlState),
    SetAttributedTitle(Option<String>, ControlState),
    SetTitleColor(Option<Rgba>, ControlState),
}

#[derive(Clone, Debug)]
pub(crate) struct MockWidget {
    pub(crate) text: String,
    pub(crate) attributed: Option<AttributedString>,
    pub(crate) color: Option<Rgba>,
    pub(crate) font: FontDescriptor,
    pub(crate) alignment: NativeAlignment,
    pub(crate) calls: Vec<Call>,
}

impl Default for MockWidget {
    fn default() -> Self {
        Self {
            text: String::new(),
            attributed: None,
            color: None,
            font: FontDescriptor::default(),
            alignment: NativeAlignment::Natural,
            calls: Vec::new(),
        }
    }
}

impl MockWidget {
    pub(crate) fn with_font(font: FontDescriptor) -> Self {
        Self {
            font,
            ..Self::default()
        }
    }
}

impl TextWidget for MockWidget {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.calls.push(Call::SetText(text.into()));
        text.clone_into(&mut self.text);
    }

    fn attributed_text(&self) -> Option<&AttributedString> {
        self.attributed.as_ref()
    }

    fn set_attributed_text(&mut self, text: Option<AttributedString>) {
        self.calls
            .push(Call::SetAttributed(text.as_ref().map(|t| t.as_str().into())));
        // Native fields mirror attributed text into their plain text.
        if let Some(text) = &text {
            text.as_str().clone_into(&mut self.text);
        }
        self.attributed = text;
    }

    fn text_color(&self) -> Option<Rgba> {
        self.color
    }

    fn set_text_color(&mut self, color: Option<Rgba>) {
        self.calls.push(Call::SetColor(color));
        self.color = color;
    }

    fn font(&self) -> &FontDescriptor {
        &self.font
    }

    fn set_font(&mut self, font: FontDescriptor) {
        self.calls.push(Call::SetFont(font.clone()));
        self.font = font;
    }

    fn text_alignment(&self) -> NativeAlignment {
        self.alignment
    }

    fn set_text_alignment(&mut self, alignment: NativeAlignment) {
        self.calls.push(Call::SetAlignment(alignment));
        self.alignment = alignment;
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct MockButton {
    titles: BTreeMap<ControlState, String>,
    attributed_titles: BTreeMap<ControlState, AttributedString>,
    colors: BTreeMap<ControlState, Rgba>,
    font: FontDescriptor,
    pub(crate) label: MockWidget,
    pub(crate) calls: Vec<Call>,
}

impl MockButton {
    /// A button whose own font differs from its title label's font.
    pub(crate) fn new(button_font: FontDescriptor, label_font: FontDescriptor) -> Self {
        Self {
            font: button_font,
            label: MockWidget::with_font(label_font),
            ..Self::default()
        }
    }
}

fn set_slot<T>(slots: &mut BTreeMap<ControlState, T>, value: Option<T>, state: ControlState) {
    match value {
        Some(value) => {
            slots.insert(state, value);
        }
        None => {
            slots.remove(&state);
        }
    }
}

impl ButtonWidget for MockButton {
    type TitleLabel = MockWidget;

    fn title(&self, state: ControlState) -> Option<&str> {
        self.titles.get(&state).map(String::as_str)
    }

    fn set_title(&mut self, title: Option<&str>, state: ControlState) {
        self.calls
            .push(Call::SetTitle(title.map(ToString::to_string), state));
        set_slot(&mut self.titles, title.map(ToString::to_string), state);
    }

    fn attributed_title(&self, state: ControlState) -> Option<&AttributedString> {
        self.attributed_titles.get(&state)
    }

    fn set_attributed_title(&mut self, title: Option<AttributedString>, state: ControlState) {
        self.calls.push(Call::SetAttributedTitle(
            title.as_ref().map(|t| t.as_str().into()),
            state,
        ));
        if let Some(title) = &title {
            self.titles.insert(state, title.as_str().into());
        }
        set_slot(&mut self.attributed_titles, title, state);
    }

    fn title_color(&self, state: ControlState) -> Option<Rgba> {
        self.colors.get(&state).copied()
    }

    fn set_title_color(&mut self, color: Option<Rgba>, state: ControlState) {
        self.calls.push(Call::SetTitleColor(color, state));
        set_slot(&mut self.colors, color, state);
    }

    fn font(&self) -> &FontDescriptor {
        &self.font
    }

    fn title_label(&self) -> &MockWidget {
        &self.label
    }

    fn title_label_mut(&mut self) -> &mut MockWidget {
        &mut self.label
    }
}

pub(crate) type MockSurface = NativeSurface<MockWidget, MockButton>;

/// Counts layout requests and records published text.
#[derive(Debug, Default)]
pub(crate) struct RecordingHost {
    pub(crate) layouts: usize,
    pub(crate) published: Vec<String>,
}

impl ViewHost for RecordingHost {
    fn request_layout(&mut self) {
        self.layouts += 1;
    }

    fn text_changed(&mut self, text: &str) {
        self.published.push(text.into());
    }
}
