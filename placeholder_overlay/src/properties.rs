// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use crate::peniko::Color;
use crate::theme;

/// The color of a plain placeholder's text.
///
/// Attributed placeholders carry their own brushes, and ignore this color.
#[expect(missing_docs, reason = "field names are self-descriptive")]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaceholderColor {
    pub color: Color,
}

impl PlaceholderColor {
    /// Creates new `PlaceholderColor` with given value.
    pub const fn new(color: Color) -> Self {
        Self { color }
    }
}

// ---

impl Default for PlaceholderColor {
    fn default() -> Self {
        Self::new(theme::PLACEHOLDER_COLOR)
    }
}

impl From<Color> for PlaceholderColor {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}
