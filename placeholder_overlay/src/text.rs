// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Text content and style types shared by the host and its placeholder.

use std::ops::Range;

use parley::{FontWeight, GenericFamily};

use crate::theme;

/// A reference counted string slice.
///
/// Placeholder strings are set once and read on every layout pass,
/// so they are stored in a form which is cheap to clone.
pub type ArcStr = std::sync::Arc<str>;

/// The Parley [`Brush`] used for attributed placeholders.
///
/// The inner value is an index into the palette of whichever renderer draws the text.
///
/// [`Brush`]: parley::Brush
#[derive(Clone, PartialEq, Default, Debug)]
pub struct BrushIndex(pub usize);

/// A style property specialised for use within attributed placeholders.
pub type StyleProperty = parley::StyleProperty<'static, BrushIndex>;

/// Horizontal alignment of text within its container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    /// Aligned to the start of the line, following the writing direction.
    #[default]
    Start,
    /// Aligned to the end of the line, following the writing direction.
    End,
    /// Aligned to the left edge.
    Left,
    /// Centered in the line.
    Center,
    /// Aligned to the right edge.
    Right,
    /// Stretched to fill the line.
    Justify,
}

/// The font used by the host, and mirrored onto the placeholder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextFont {
    /// The generic family the font is picked from.
    pub family: GenericFamily,
    /// The font size in logical pixels.
    pub size: f32,
    /// The font weight.
    pub weight: FontWeight,
}

impl TextFont {
    /// Creates a regular weight font.
    pub const fn new(family: GenericFamily, size: f32) -> Self {
        Self {
            family,
            size,
            weight: FontWeight::NORMAL,
        }
    }

    /// Returns this font with the given `weight`.
    pub const fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Returns this font with the given `size`.
    pub const fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

impl Default for TextFont {
    fn default() -> Self {
        theme::default_font()
    }
}

/// A run of text covered by a single style property.
#[derive(Clone, Debug)]
pub struct StyleSpan {
    /// Byte range of the styled text.
    pub range: Range<usize>,
    /// The property applied to the range.
    pub property: StyleProperty,
}

/// A string with styles applied to ranges of it.
///
/// This is the rich alternative to a plain placeholder string.
#[derive(Clone, Debug)]
pub struct AttributedText {
    text: ArcStr,
    spans: Vec<StyleSpan>,
}

impl AttributedText {
    /// Creates unstyled attributed text.
    pub fn new(text: impl Into<ArcStr>) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
        }
    }

    /// Applies `property` to the whole text.
    pub fn with_style(self, property: StyleProperty) -> Self {
        let len = self.text.len();
        self.with_style_range(0..len, property)
    }

    /// Applies `property` to the given byte range.
    ///
    /// The range is clamped to the length of the text.
    pub fn with_style_range(mut self, range: Range<usize>, property: StyleProperty) -> Self {
        let end = range.end.min(self.text.len());
        let start = range.start.min(end);
        debug_assert!(
            self.text.is_char_boundary(start) && self.text.is_char_boundary(end),
            "style range {start}..{end} doesn't fall on char boundaries"
        );
        self.spans.push(StyleSpan {
            range: start..end,
            property,
        });
        self
    }

    /// The unstyled text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The styles applied to the text, in insertion order.
    pub fn spans(&self) -> &[StyleSpan] {
        &self.spans
    }

    /// Returns `true` if there is no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<&str> for AttributedText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// The content currently rendered by the placeholder.
///
/// Exactly one of the plain and attributed placeholders is displayed at any time.
#[derive(Clone, Copy, Debug)]
pub enum PlaceholderContent<'a> {
    /// A plain string, drawn with the placeholder color and the host's font.
    Plain(&'a str),
    /// Rich text, whose own styles take precedence.
    Attributed(&'a AttributedText),
}

impl<'a> PlaceholderContent<'a> {
    /// The text without any styling.
    pub fn as_str(&self) -> &'a str {
        match self {
            Self::Plain(text) => text,
            Self::Attributed(attributed) => attributed.text(),
        }
    }

    /// Returns `true` if the rendered text is empty.
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}
