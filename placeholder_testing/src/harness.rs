// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use std::cell::Ref;

use placeholder_overlay::kurbo::{Insets, Size};
use placeholder_overlay::tracing_backend::try_init_test_tracing;
use placeholder_overlay::{
    PlaceholderConfig, PlaceholderOverlay, PlaceholderTextView, Subscription, TextHost,
    Visibility,
};

use crate::{FakeHost, Recording};

/// Parameters of the fake host created by a [`TestHarness`].
#[derive(Debug, Clone, Copy)]
pub struct TestHarnessParams {
    /// Size of the host's bounds.
    pub host_size: Size,
    /// The host's text inset.
    pub text_inset: Insets,
    /// The host's zoom scale.
    pub zoom: f64,
    /// The height of the host's height constraint, if it has one.
    pub height_constraint: Option<f64>,
    /// Advance of every character, see [`FakeHost`].
    pub char_width: f64,
    /// Height of every line, see [`FakeHost`].
    pub line_height: f64,
}

impl TestHarnessParams {
    /// Default values for a test harness.
    pub const DEFAULT: Self = Self {
        host_size: FakeHost::DEFAULT_SIZE,
        text_inset: Insets::ZERO,
        zoom: 1.,
        height_constraint: None,
        char_width: FakeHost::DEFAULT_CHAR_WIDTH,
        line_height: FakeHost::DEFAULT_LINE_HEIGHT,
    };
}

impl Default for TestHarnessParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A [`PlaceholderTextView`] around an empty [`FakeHost`], for tests.
///
/// Every event the host emits is also recorded, see [`recording`](Self::recording).
///
/// ```
/// use placeholder_overlay::{PlaceholderConfig, Visibility};
/// use placeholder_testing::TestHarness;
///
/// let mut harness = TestHarness::create(PlaceholderConfig::default());
/// harness.type_text("x");
/// assert_eq!(harness.visibility(), Visibility::Hidden);
/// ```
#[derive(Debug)]
pub struct TestHarness {
    view: PlaceholderTextView<FakeHost>,
    recording: Recording,
    _recording_subscription: Subscription,
}

// --- MARK: CREATE
impl TestHarness {
    /// Creates a harness with default parameters.
    pub fn create(config: PlaceholderConfig) -> Self {
        Self::create_with(config, TestHarnessParams::DEFAULT)
    }

    /// Creates a harness with the given parameters.
    pub fn create_with(config: PlaceholderConfig, params: TestHarnessParams) -> Self {
        // If there is an error, it's because a subscriber is already set, which is fine.
        let _ = try_init_test_tracing();

        let mut host = FakeHost::new()
            .with_size(params.host_size)
            .with_text_inset(params.text_inset)
            .with_zoom(params.zoom)
            .with_text_metrics(params.char_width, params.line_height);
        if let Some(height) = params.height_constraint {
            host = host.with_height_constraint(height);
        }

        let view = PlaceholderTextView::with_config(host, config);
        let recording = Recording::default();
        let recording_subscription = recording.listen(view.host().signals());
        Self {
            view,
            recording,
            _recording_subscription: recording_subscription,
        }
    }
}

// --- MARK: SIMULATE
impl TestHarness {
    /// Focuses the host.
    pub fn focus(&mut self) {
        self.view.host_mut().begin_editing();
    }

    /// Unfocuses the host.
    pub fn blur(&mut self) {
        self.view.host_mut().end_editing();
    }

    /// Types `text` into the host.
    pub fn type_text(&mut self, text: &str) {
        self.view.host_mut().type_text(text);
    }

    /// Deletes the last character of the host's text.
    pub fn delete_backward(&mut self) {
        self.view.host_mut().delete_backward();
    }

    /// Deletes all of the host's text.
    pub fn delete_all(&mut self) {
        self.view.host_mut().delete_all();
    }

    /// Replaces the host's text from code.
    pub fn replace_text(&mut self, text: &str) {
        self.view.host_mut().replace_text(text);
    }

    /// Resizes the host and runs a layout pass.
    pub fn resize(&mut self, size: Size) {
        self.view.host_mut().set_size(size);
        self.view.layout();
    }
}

// --- MARK: GETTERS
impl TestHarness {
    /// The view under test.
    pub fn view(&self) -> &PlaceholderTextView<FakeHost> {
        &self.view
    }

    /// The view under test, for configuring it.
    pub fn view_mut(&mut self) -> &mut PlaceholderTextView<FakeHost> {
        &mut self.view
    }

    /// The fake host.
    pub fn host(&self) -> &FakeHost {
        self.view.host()
    }

    /// The placeholder state.
    pub fn overlay(&self) -> Ref<'_, PlaceholderOverlay> {
        self.view.overlay()
    }

    /// Whether the placeholder is drawn.
    pub fn visibility(&self) -> Visibility {
        self.view.overlay().visibility()
    }

    /// The events the host emitted so far.
    pub fn recording(&self) -> &Recording {
        &self.recording
    }
}

// --- MARK: TESTS
#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use placeholder_overlay::HostSignal;

    use super::*;
    use crate::Record;

    #[test]
    fn records_host_events() {
        let mut harness = TestHarness::create(PlaceholderConfig::default());
        harness.focus();
        harness.type_text("ab");
        harness.delete_all();
        harness.blur();

        let signals: Vec<_> = harness
            .recording()
            .drain()
            .into_iter()
            .map(|record| record.signal)
            .collect();
        assert_eq!(
            signals,
            [
                HostSignal::EditBegin,
                HostSignal::TextChanged,
                HostSignal::TextChanged,
                HostSignal::EditEnd,
            ]
        );
    }

    #[test]
    fn replaced_text_is_recorded() {
        let mut harness = TestHarness::create(PlaceholderConfig::default());
        harness.replace_text("loaded from disk");
        assert_matches!(
            harness.recording().next(),
            Some(Record {
                signal: HostSignal::TextReplaced,
                text_is_empty: false
            })
        );
        assert_eq!(harness.host().text(), "loaded from disk");
    }
}
