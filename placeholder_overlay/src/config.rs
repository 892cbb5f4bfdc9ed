// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use crate::{ArcStr, AttributedText, PlaceholderColor, VerticalAlignment, theme};

/// The kind of view used to display the placeholder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OverlayVariant {
    /// A nested text view covering the host, sharing the host's inset.
    #[default]
    TextView,
    /// A nested text view which also supports [`VerticalAlignment`], and which
    /// raises the host's height constraint so the placeholder is never clipped.
    ConstrainedTextView,
    /// A label placed inside the host's inset.
    Label,
}

impl OverlayVariant {
    /// Whether [`VerticalAlignment`] and height constraint correction are supported.
    pub fn supports_layout(self) -> bool {
        matches!(self, Self::ConstrainedTextView)
    }
}

/// Initial configuration of a placeholder.
///
/// All of these can be changed later on the [`PlaceholderTextView`](crate::PlaceholderTextView).
#[derive(Clone, Debug)]
pub struct PlaceholderConfig {
    /// The kind of placeholder view.
    pub variant: OverlayVariant,
    /// The plain placeholder string.
    pub text: ArcStr,
    /// The rich placeholder, which is displayed instead of `text` when set.
    pub attributed: Option<AttributedText>,
    /// The color of the plain placeholder.
    pub color: PlaceholderColor,
    /// Whether the placeholder hides while the host is focused and empty.
    pub hide_on_editing: bool,
    /// Vertical placement, for [`OverlayVariant::ConstrainedTextView`].
    pub vertical_alignment: VerticalAlignment,
}

// --- MARK: BUILDERS
impl PlaceholderConfig {
    /// Creates the default configuration for `variant`.
    pub fn new(variant: OverlayVariant) -> Self {
        Self {
            variant,
            text: theme::DEFAULT_PLACEHOLDER_TEXT.into(),
            attributed: None,
            color: PlaceholderColor::default(),
            hide_on_editing: false,
            vertical_alignment: VerticalAlignment::None,
        }
    }

    /// Sets the plain placeholder string.
    pub fn with_placeholder(mut self, text: impl Into<ArcStr>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the rich placeholder.
    pub fn with_attributed_placeholder(mut self, attributed: AttributedText) -> Self {
        self.attributed = Some(attributed);
        self
    }

    /// Sets the color of the plain placeholder.
    pub fn with_placeholder_color(mut self, color: impl Into<PlaceholderColor>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets whether the placeholder hides while the host is focused and empty.
    pub fn with_hide_on_editing(mut self, hide_on_editing: bool) -> Self {
        self.hide_on_editing = hide_on_editing;
        self
    }

    /// Sets the vertical placement of the placeholder.
    ///
    /// Any alignment other than [`VerticalAlignment::None`] also enables hiding on editing.
    pub fn with_vertical_alignment(mut self, vertical_alignment: VerticalAlignment) -> Self {
        self.vertical_alignment = vertical_alignment;
        self
    }
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self::new(OverlayVariant::default())
    }
}
