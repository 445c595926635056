// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The native surface adapter.
//!
//! Platform bindings implement [`TextWidget`] for their input fields and labels and
//! [`ButtonWidget`] for their buttons. [`NativeSurface`] wraps one of them, chosen once per
//! view, and exposes the uniform [`TextSurface`] contract.

use text_runs::{AttributedString, FontDescriptor, Rgba};

use crate::{Error, FormattedText, TextAlignment};

/// The interaction state a button title belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ControlState {
    /// The resting state. The only state this crate reads or writes.
    Normal,
    /// Pressed.
    Highlighted,
    /// Not interactive.
    Disabled,
    /// Toggled on.
    Selected,
    /// Has keyboard focus.
    Focused,
}

/// An alignment mode as reported by a native surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NativeAlignment {
    /// Left edge.
    Left,
    /// Centered.
    Center,
    /// Right edge.
    Right,
    /// Both edges.
    Justified,
    /// Leading edge for the script of the text.
    Natural,
}

impl NativeAlignment {
    /// Classifies a native mode into a portable alignment.
    ///
    /// `Natural` reads as [`TextAlignment::Left`]. `Justified` has no portable equivalent.
    pub fn classify(self) -> Result<TextAlignment, Error> {
        match self {
            Self::Left | Self::Natural => Ok(TextAlignment::Left),
            Self::Center => Ok(TextAlignment::Center),
            Self::Right => Ok(TextAlignment::Right),
            Self::Justified => Err(Error::UnsupportedAlignment { mode: self }),
        }
    }
}

impl From<TextAlignment> for NativeAlignment {
    fn from(alignment: TextAlignment) -> Self {
        match alignment {
            TextAlignment::Left => Self::Left,
            TextAlignment::Center => Self::Center,
            TextAlignment::Right => Self::Right,
        }
    }
}

/// The four shapes of native text surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    /// A one-line editable field.
    SingleLineInput,
    /// A scrolling editable text area.
    MultiLineInput,
    /// Static text.
    Label,
    /// A button whose title is stored per [`ControlState`].
    StateScopedButton,
}

/// A native widget holding a single text value.
pub trait TextWidget {
    /// The plain text.
    fn text(&self) -> &str;
    /// Replaces the plain text.
    fn set_text(&mut self, text: &str);
    /// The attributed text, if any is installed.
    fn attributed_text(&self) -> Option<&AttributedString>;
    /// Installs or clears the attributed text.
    fn set_attributed_text(&mut self, text: Option<AttributedString>);
    /// The text color, or `None` for the platform default.
    fn text_color(&self) -> Option<Rgba>;
    /// Sets or resets the text color.
    fn set_text_color(&mut self, color: Option<Rgba>);
    /// The font.
    fn font(&self) -> &FontDescriptor;
    /// Replaces the font.
    fn set_font(&mut self, font: FontDescriptor);
    /// The alignment mode.
    fn text_alignment(&self) -> NativeAlignment;
    /// Sets the alignment mode.
    fn set_text_alignment(&mut self, alignment: NativeAlignment);
}

/// A native button whose title text and color are stored per [`ControlState`].
///
/// The label that renders the title is a separate widget with its own font and alignment.
pub trait ButtonWidget {
    /// The nested widget that renders the title.
    type TitleLabel: TextWidget;

    /// The title for `state`.
    fn title(&self, state: ControlState) -> Option<&str>;
    /// Sets or clears the title for `state`.
    fn set_title(&mut self, title: Option<&str>, state: ControlState);
    /// The attributed title for `state`.
    fn attributed_title(&self, state: ControlState) -> Option<&AttributedString>;
    /// Sets or clears the attributed title for `state`.
    fn set_attributed_title(&mut self, title: Option<AttributedString>, state: ControlState);
    /// The title color for `state`.
    fn title_color(&self, state: ControlState) -> Option<Rgba>;
    /// Sets or resets the title color for `state`.
    fn set_title_color(&mut self, color: Option<Rgba>, state: ControlState);
    /// The button's own font, which is not the font the title renders with.
    fn font(&self) -> &FontDescriptor;
    /// The title label.
    fn title_label(&self) -> &Self::TitleLabel;
    /// The title label, mutably.
    fn title_label_mut(&mut self) -> &mut Self::TitleLabel;
}

/// The uniform read/write contract over every kind of native text surface.
pub trait TextSurface {
    /// Which kind of surface this is.
    fn kind(&self) -> SurfaceKind;

    /// The displayed plain text.
    fn text(&self) -> &str;

    /// Replaces the text with plain text.
    ///
    /// The attributed slot is cleared first on every call, so stale attributes never shadow
    /// the plain value.
    fn set_text(&mut self, text: &str);

    /// The installed attributed text, if any.
    fn attributed_text(&self) -> Option<&AttributedString>;

    /// Formatted text is never reconstructed from native state.
    fn formatted_text(&self) -> Option<&FormattedText> {
        None
    }

    /// Installs materialized rich text in a single assignment.
    fn set_formatted(&mut self, text: AttributedString);

    /// The text color.
    fn color(&self) -> Option<Rgba>;

    /// Sets or resets the text color.
    fn set_color(&mut self, color: Option<Rgba>);

    /// The font text renders with.
    fn font(&self) -> &FontDescriptor;

    /// Replaces the font text renders with.
    fn set_font(&mut self, font: FontDescriptor);

    /// The alignment, classified.
    ///
    /// Fails with [`Error::UnsupportedAlignment`] when the native mode has no portable
    /// equivalent.
    fn alignment(&self) -> Result<TextAlignment, Error>;

    /// Sets the alignment.
    fn set_alignment(&mut self, alignment: TextAlignment);
}

/// A native surface of one of the four [`SurfaceKind`]s.
#[derive(Clone, Debug)]
pub enum NativeSurface<T, B> {
    /// A one-line editable field.
    SingleLineInput(T),
    /// A scrolling editable text area.
    MultiLineInput(T),
    /// Static text.
    Label(T),
    /// A button with per-state titles.
    StateScopedButton(B),
}

impl<T: TextWidget, B: ButtonWidget> NativeSurface<T, B> {
    /// The wrapped widget, unless this is a button.
    pub fn as_text_widget(&self) -> Option<&T> {
        match self {
            Self::SingleLineInput(widget) | Self::MultiLineInput(widget) | Self::Label(widget) => {
                Some(widget)
            }
            Self::StateScopedButton(_) => None,
        }
    }

    /// The wrapped button, if this is one.
    pub fn as_button(&self) -> Option<&B> {
        match self {
            Self::StateScopedButton(button) => Some(button),
            _ => None,
        }
    }

    /// The widget that owns font and alignment: the widget itself, or a button's title label.
    fn label(&self) -> &dyn TextWidget {
        match self {
            Self::SingleLineInput(widget) | Self::MultiLineInput(widget) | Self::Label(widget) => {
                widget
            }
            Self::StateScopedButton(button) => button.title_label(),
        }
    }

    fn label_mut(&mut self) -> &mut dyn TextWidget {
        match self {
            Self::SingleLineInput(widget) | Self::MultiLineInput(widget) | Self::Label(widget) => {
                widget
            }
            Self::StateScopedButton(button) => button.title_label_mut(),
        }
    }
}

impl<T: TextWidget, B: ButtonWidget> TextSurface for NativeSurface<T, B> {
    fn kind(&self) -> SurfaceKind {
        match self {
            Self::SingleLineInput(_) => SurfaceKind::SingleLineInput,
            Self::MultiLineInput(_) => SurfaceKind::MultiLineInput,
            Self::Label(_) => SurfaceKind::Label,
            Self::StateScopedButton(_) => SurfaceKind::StateScopedButton,
        }
    }

    fn text(&self) -> &str {
        match self {
            Self::StateScopedButton(button) => button.title(ControlState::Normal).unwrap_or(""),
            _ => self.label().text(),
        }
    }

    fn set_text(&mut self, text: &str) {
        match self {
            Self::StateScopedButton(button) => {
                button.set_attributed_title(None, ControlState::Normal);
                button.set_title(Some(text), ControlState::Normal);
            }
            _ => {
                let widget = self.label_mut();
                widget.set_attributed_text(None);
                widget.set_text(text);
            }
        }
    }

    fn attributed_text(&self) -> Option<&AttributedString> {
        match self {
            Self::StateScopedButton(button) => button.attributed_title(ControlState::Normal),
            _ => self.label().attributed_text(),
        }
    }

    fn set_formatted(&mut self, text: AttributedString) {
        match self {
            Self::StateScopedButton(button) => {
                button.set_attributed_title(Some(text), ControlState::Normal);
            }
            _ => self.label_mut().set_attributed_text(Some(text)),
        }
    }

    fn color(&self) -> Option<Rgba> {
        match self {
            Self::StateScopedButton(button) => button.title_color(ControlState::Normal),
            _ => self.label().text_color(),
        }
    }

    fn set_color(&mut self, color: Option<Rgba>) {
        match self {
            Self::StateScopedButton(button) => button.set_title_color(color, ControlState::Normal),
            _ => self.label_mut().set_text_color(color),
        }
    }

    fn font(&self) -> &FontDescriptor {
        self.label().font()
    }

    fn set_font(&mut self, font: FontDescriptor) {
        self.label_mut().set_font(font);
    }

    fn alignment(&self) -> Result<TextAlignment, Error> {
        let mode = self.label().text_alignment();
        mode.classify().inspect_err(|_| {
            tracing::warn!(kind = ?self.kind(), ?mode, "native alignment has no portable equivalent");
        })
    }

    fn set_alignment(&mut self, alignment: TextAlignment) {
        self.label_mut().set_text_alignment(alignment.into());
    }
}
