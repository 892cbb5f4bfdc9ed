// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Default values used when a placeholder is created without explicit configuration.

#![allow(missing_docs, reason = "Names are self-explanatory.")]

use parley::GenericFamily;

use crate::TextFont;
use crate::peniko::Color;

pub const DEFAULT_PLACEHOLDER_TEXT: &str = "Enter your placeholder";

/// A mid grey, readable on both light and dark text backgrounds.
pub const PLACEHOLDER_COLOR: Color = Color::from_rgb8(0x80, 0x80, 0x80);

pub const TEXT_SIZE_NORMAL: f32 = 15.0;

pub const fn default_font() -> TextFont {
    TextFont::new(GenericFamily::SystemUi, TEXT_SIZE_NORMAL)
}
