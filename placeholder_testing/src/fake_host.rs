// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use placeholder_overlay::kurbo::{Insets, Size};
use placeholder_overlay::{
    HeightConstraint, HostEvent, HostSignal, PlaceholderContent, SignalHub, TextAlign, TextFont,
    TextHost,
};
use tracing::trace;

/// An in-memory text host.
///
/// Text is measured with a fixed advance per character and a fixed line height,
/// so heights in tests can be computed by hand:
/// a placeholder of `n` characters in a host fitting `c` characters per line
/// is `ceil(n / c) * line_height` tall (per hard line break).
#[derive(Debug)]
pub struct FakeHost {
    signals: SignalHub<HostEvent>,
    text: String,
    focused: bool,
    size: Size,
    inset: Insets,
    font: TextFont,
    alignment: TextAlign,
    zoom: f64,
    height_constraint: Option<HeightConstraint>,
    char_width: f64,
    line_height: f64,
}

// --- MARK: BUILDERS
impl FakeHost {
    /// Default size of the host.
    pub const DEFAULT_SIZE: Size = Size::new(200., 100.);
    /// Default advance of every character.
    pub const DEFAULT_CHAR_WIDTH: f64 = 10.;
    /// Default height of every line.
    pub const DEFAULT_LINE_HEIGHT: f64 = 20.;

    /// Creates an empty, unfocused host.
    pub fn new() -> Self {
        Self {
            signals: SignalHub::new(),
            text: String::new(),
            focused: false,
            size: Self::DEFAULT_SIZE,
            inset: Insets::ZERO,
            font: TextFont::default(),
            alignment: TextAlign::default(),
            zoom: 1.,
            height_constraint: None,
            char_width: Self::DEFAULT_CHAR_WIDTH,
            line_height: Self::DEFAULT_LINE_HEIGHT,
        }
    }

    /// Sets the initial text, without emitting any event.
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the size of the host's bounds.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Sets the text inset.
    pub fn with_text_inset(mut self, inset: Insets) -> Self {
        self.inset = inset;
        self
    }

    /// Sets the font.
    pub fn with_font(mut self, font: TextFont) -> Self {
        self.font = font;
        self
    }

    /// Sets the zoom scale.
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    /// Gives the host a height constraint of `height`.
    pub fn with_height_constraint(mut self, height: f64) -> Self {
        self.height_constraint = Some(HeightConstraint::new(height));
        self
    }

    /// Sets the metrics used to measure text.
    pub fn with_text_metrics(mut self, char_width: f64, line_height: f64) -> Self {
        self.char_width = char_width;
        self.line_height = line_height;
        self
    }
}

// --- MARK: SIMULATION
impl FakeHost {
    /// Focuses the host, emitting [`HostSignal::EditBegin`].
    pub fn begin_editing(&mut self) {
        self.focused = true;
        self.emit(HostSignal::EditBegin);
    }

    /// Types `text` at the end of the host's text, emitting [`HostSignal::TextChanged`].
    pub fn type_text(&mut self, text: &str) {
        self.text.push_str(text);
        self.emit(HostSignal::TextChanged);
    }

    /// Deletes the last character, emitting [`HostSignal::TextChanged`].
    pub fn delete_backward(&mut self) {
        self.text.pop();
        self.emit(HostSignal::TextChanged);
    }

    /// Deletes all the text as a single edit, emitting [`HostSignal::TextChanged`].
    pub fn delete_all(&mut self) {
        self.text.clear();
        self.emit(HostSignal::TextChanged);
    }

    /// Unfocuses the host, emitting [`HostSignal::EditEnd`].
    pub fn end_editing(&mut self) {
        self.focused = false;
        self.emit(HostSignal::EditEnd);
    }

    /// Replaces the text from code, emitting [`HostSignal::TextReplaced`].
    pub fn replace_text(&mut self, text: &str) {
        self.text = text.into();
        self.emit(HostSignal::TextReplaced);
    }

    /// Resizes the host's bounds. Doesn't emit anything.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Changes the text inset. Doesn't emit anything.
    pub fn set_text_inset(&mut self, inset: Insets) {
        self.inset = inset;
    }

    /// Changes the font. Doesn't emit anything.
    pub fn set_font(&mut self, font: TextFont) {
        self.font = font;
    }

    /// Changes the text alignment. Doesn't emit anything.
    pub fn set_text_alignment(&mut self, alignment: TextAlign) {
        self.alignment = alignment;
    }

    /// Gives the host a height constraint of `height`, replacing any previous one.
    pub fn set_height_constraint(&mut self, height: f64) {
        self.height_constraint = Some(HeightConstraint::new(height));
    }

    fn emit(&self, signal: HostSignal) {
        let event = HostEvent {
            signal,
            text_is_empty: self.text.is_empty(),
            has_focus: self.focused,
        };
        trace!(?event, "FakeHost emitting");
        self.signals.emit(&event);
    }
}

// --- MARK: GETTERS
impl FakeHost {
    /// The host's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The current height of the host's constraint, if it has one.
    pub fn constraint_height(&self) -> Option<f64> {
        self.height_constraint
            .as_ref()
            .map(HeightConstraint::height)
    }
}

impl Default for FakeHost {
    fn default() -> Self {
        Self::new()
    }
}

impl TextHost for FakeHost {
    fn signals(&self) -> &SignalHub<HostEvent> {
        &self.signals
    }

    fn text_is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    fn size(&self) -> Size {
        self.size
    }

    fn text_inset(&self) -> Insets {
        self.inset
    }

    fn font(&self) -> TextFont {
        self.font
    }

    fn text_alignment(&self) -> TextAlign {
        self.alignment
    }

    fn zoom_scale(&self) -> f64 {
        self.zoom
    }

    fn height_constraint(&self) -> Option<HeightConstraint> {
        self.height_constraint.clone()
    }

    fn measure_placeholder(
        &self,
        content: PlaceholderContent<'_>,
        _font: &TextFont,
        width: f64,
    ) -> f64 {
        let text = content.as_str();
        if text.is_empty() {
            return 0.;
        }
        let chars_per_line = (width / self.char_width).floor().max(1.);
        let lines: f64 = text
            .split('\n')
            .map(|line| (line.chars().count() as f64 / chars_per_line).ceil().max(1.))
            .sum();
        lines * self.line_height
    }
}
