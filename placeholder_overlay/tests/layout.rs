// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Tests for placeholder geometry: insets, vertical alignment and height constraints.

use float_cmp::assert_approx_eq;
use placeholder_overlay::kurbo::{Insets, Rect, Size};
use placeholder_overlay::{
    OverlayVariant, PlaceholderConfig, PlaceholderTextView, TextAlign, TextFont,
    VerticalAlignment,
};
use placeholder_testing::{FakeHost, TestHarness, TestHarnessParams};

// 45 characters: three lines of 20 characters in the default 200px wide host.
const LONG_PLACEHOLDER: &str = "A placeholder long enough to wrap three times";

fn constrained(vertical_alignment: VerticalAlignment) -> PlaceholderConfig {
    PlaceholderConfig::new(OverlayVariant::ConstrainedTextView)
        .with_placeholder("Hi")
        .with_vertical_alignment(vertical_alignment)
}

#[test]
fn centered_placeholder() {
    let harness = TestHarness::create(constrained(VerticalAlignment::Center));
    let overlay = harness.overlay();
    assert_approx_eq!(f64, overlay.metrics().content_height, 20.);
    assert_approx_eq!(f64, overlay.inset().y0, 40.);
    assert!(overlay.hide_on_editing());
}

#[test]
fn bottom_placeholder_with_zoom() {
    let params = TestHarnessParams {
        zoom: 2.,
        ..TestHarnessParams::DEFAULT
    };
    let harness = TestHarness::create_with(constrained(VerticalAlignment::Bottom), params);
    assert_approx_eq!(f64, harness.overlay().inset().y0, 60.);
}

#[test]
fn oversized_placeholder_is_pinned_to_top() {
    let params = TestHarnessParams {
        host_size: Size::new(200., 30.),
        ..TestHarnessParams::DEFAULT
    };
    let config = constrained(VerticalAlignment::Center).with_placeholder(LONG_PLACEHOLDER);
    let harness = TestHarness::create_with(config, params);
    assert_approx_eq!(f64, harness.overlay().metrics().content_height, 60.);
    assert_approx_eq!(f64, harness.overlay().inset().y0, 0.);
}

#[test]
fn alignment_follows_resize() {
    let mut harness = TestHarness::create(constrained(VerticalAlignment::Bottom));
    assert_approx_eq!(f64, harness.overlay().inset().y0, 80.);

    harness.resize(Size::new(200., 50.));
    assert_approx_eq!(f64, harness.overlay().inset().y0, 30.);
}

#[test]
fn alignment_set_after_creation_forces_hiding() {
    let mut harness = TestHarness::create(constrained(VerticalAlignment::None));
    assert!(!harness.overlay().hide_on_editing());

    harness
        .view_mut()
        .set_vertical_alignment(VerticalAlignment::Center);
    assert!(harness.overlay().hide_on_editing());
    assert_approx_eq!(f64, harness.overlay().inset().y0, 40.);

    harness.focus();
    assert!(harness.overlay().is_hidden());
}

#[test]
fn constraint_grows_to_fit_placeholder() {
    let params = TestHarnessParams {
        height_constraint: Some(30.),
        ..TestHarnessParams::DEFAULT
    };
    let config = PlaceholderConfig::new(OverlayVariant::ConstrainedTextView)
        .with_placeholder(LONG_PLACEHOLDER);
    let mut harness = TestHarness::create_with(config, params);

    // Layout alone doesn't correct the constraint.
    assert_eq!(harness.host().constraint_height(), Some(30.));
    assert_eq!(harness.overlay().content_size().baseline(), Some(30.));

    harness.focus();
    assert_eq!(harness.host().constraint_height(), Some(60.));
    harness.blur();
    assert_eq!(harness.host().constraint_height(), Some(60.));
}

#[test]
fn constraint_restored_while_placeholder_hidden() {
    let params = TestHarnessParams {
        height_constraint: Some(30.),
        ..TestHarnessParams::DEFAULT
    };
    let config = PlaceholderConfig::new(OverlayVariant::ConstrainedTextView)
        .with_placeholder(LONG_PLACEHOLDER)
        .with_hide_on_editing(true);
    let mut harness = TestHarness::create_with(config, params);

    harness.focus();
    assert_eq!(harness.host().constraint_height(), Some(30.));
    harness.blur();
    assert_eq!(harness.host().constraint_height(), Some(60.));
    harness.focus();
    assert_eq!(harness.host().constraint_height(), Some(30.));
}

#[test]
fn constraint_untouched_when_host_has_text() {
    let params = TestHarnessParams {
        height_constraint: Some(30.),
        ..TestHarnessParams::DEFAULT
    };
    let config = PlaceholderConfig::new(OverlayVariant::ConstrainedTextView)
        .with_placeholder(LONG_PLACEHOLDER);
    let mut harness = TestHarness::create_with(config, params);

    harness.replace_text("already filled in");
    harness.focus();
    harness.blur();
    assert_eq!(harness.host().constraint_height(), Some(30.));
}

#[test]
fn baseline_is_never_refreshed() {
    let host = FakeHost::new().with_height_constraint(30.);
    let config = PlaceholderConfig::new(OverlayVariant::ConstrainedTextView)
        .with_placeholder(LONG_PLACEHOLDER)
        .with_hide_on_editing(true);
    let mut view = PlaceholderTextView::with_config(host, config);

    // The host swaps its constraint for a new one; the placeholder keeps the first.
    view.host_mut().set_height_constraint(100.);
    view.layout();
    assert_eq!(view.overlay().content_size().baseline(), Some(30.));

    view.host_mut().begin_editing();
    view.host_mut().end_editing();
    assert_eq!(view.host().constraint_height(), Some(100.));
    let kept = view.overlay().content_size().constraint().map(|c| c.height());
    assert_eq!(kept, Some(60.));
}

#[test]
fn plain_text_view_ignores_constraint() {
    let params = TestHarnessParams {
        height_constraint: Some(30.),
        ..TestHarnessParams::DEFAULT
    };
    let config = PlaceholderConfig::new(OverlayVariant::TextView)
        .with_placeholder(LONG_PLACEHOLDER)
        .with_vertical_alignment(VerticalAlignment::Bottom);
    let mut harness = TestHarness::create_with(config, params);

    harness.focus();
    assert_eq!(harness.host().constraint_height(), Some(30.));
    assert_eq!(
        harness.overlay().vertical_alignment(),
        VerticalAlignment::None
    );
    assert_eq!(harness.overlay().content_size().baseline(), None);
}

#[test]
fn host_style_is_mirrored() {
    let mut harness = TestHarness::create(PlaceholderConfig::default());
    let font = TextFont::default().with_size(22.);
    let inset = Insets::new(6., 4., 6., 4.);

    let host = harness.view_mut().host_mut();
    host.set_font(font);
    host.set_text_alignment(TextAlign::End);
    host.set_text_inset(inset);
    harness.view_mut().host_style_changed();

    let overlay = harness.overlay();
    assert_eq!(*overlay.font(), font);
    assert_eq!(overlay.alignment(), TextAlign::End);
    assert_eq!(overlay.inset(), inset);
    assert_eq!(overlay.frame(), Rect::new(0., 0., 200., 100.));
}

#[test]
fn label_sits_inside_inset() {
    let params = TestHarnessParams {
        text_inset: Insets::new(10., 5., 10., 5.),
        ..TestHarnessParams::DEFAULT
    };
    let config = PlaceholderConfig::new(OverlayVariant::Label).with_placeholder(LONG_PLACEHOLDER);
    let harness = TestHarness::create_with(config, params);

    let overlay = harness.overlay();
    assert_eq!(overlay.frame(), Rect::new(10., 5., 190., 95.));
    assert_eq!(overlay.inset(), Insets::ZERO);
    // 180px fit 18 characters per line.
    assert_approx_eq!(f64, overlay.metrics().content_height, 60.);
}
