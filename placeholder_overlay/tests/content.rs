// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Tests for what the placeholder displays.

use assert_matches::assert_matches;
use placeholder_overlay::accesskit::Node;
use placeholder_overlay::peniko::Color;
use placeholder_overlay::{
    AttributedText, PlaceholderColor, PlaceholderConfig, PlaceholderContent, StyleProperty, theme,
};
use placeholder_testing::TestHarness;

fn underlined(text: &str) -> AttributedText {
    AttributedText::new(text)
        .with_style(StyleProperty::Underline(true))
        .with_style(StyleProperty::FontSize(15.0))
}

#[test]
fn defaults() {
    let harness = TestHarness::create(PlaceholderConfig::default());
    let overlay = harness.overlay();
    assert_matches!(
        overlay.content(),
        PlaceholderContent::Plain(theme::DEFAULT_PLACEHOLDER_TEXT)
    );
    assert_eq!(overlay.color(), PlaceholderColor::default());
    assert!(!overlay.hide_on_editing());
}

#[test]
fn attributed_placeholder_takes_precedence() {
    let config = PlaceholderConfig::default().with_placeholder("Plain");
    let mut harness = TestHarness::create(config);

    harness
        .view_mut()
        .set_attributed_placeholder(Some(underlined("Beautiful attributed placeholder text")));

    let overlay = harness.overlay();
    assert_matches!(
        overlay.content(),
        PlaceholderContent::Attributed(text) if text.text() == "Beautiful attributed placeholder text"
    );
    assert_eq!(overlay.placeholder(), "Plain");
}

#[test]
fn attributed_placeholder_from_config() {
    let config = PlaceholderConfig::default()
        .with_placeholder("Plain")
        .with_attributed_placeholder(underlined("Rich"));
    let harness = TestHarness::create(config);
    assert_eq!(harness.overlay().content().as_str(), "Rich");
}

#[test]
fn plain_placeholder_replaces_attributed() {
    let config = PlaceholderConfig::default().with_attributed_placeholder(underlined("Rich"));
    let mut harness = TestHarness::create(config);

    harness.view_mut().set_placeholder("Plain");
    assert_matches!(harness.overlay().content(), PlaceholderContent::Plain("Plain"));
    // The rich placeholder is kept, just no longer displayed.
    assert!(harness.overlay().attributed_placeholder().is_some());
}

#[test]
fn content_changes_are_measured() {
    let mut harness = TestHarness::create(PlaceholderConfig::default().with_placeholder("Hi"));
    assert_eq!(harness.overlay().metrics().content_height, 20.);

    // 41 characters wrap onto three lines of 20.
    harness
        .view_mut()
        .set_attributed_placeholder(Some(underlined(
            "An attributed placeholder which is longer",
        )));
    assert_eq!(harness.overlay().metrics().content_height, 60.);
}

#[test]
fn placeholder_color() {
    let mut harness = TestHarness::create(PlaceholderConfig::default());
    let color = Color::from_rgb8(0x3b, 0x7e, 0xe4);
    harness.view_mut().set_placeholder_color(color);
    assert_eq!(harness.overlay().color(), PlaceholderColor::new(color));
}

#[test]
fn accessibility_placeholder() {
    let mut harness = TestHarness::create(PlaceholderConfig::default().with_placeholder("Search"));

    let mut node = Node::new(harness.view().accessibility_role());
    harness.view().accessibility(&mut node);
    assert_eq!(node.placeholder(), Some("Search"));

    harness
        .view_mut()
        .set_attributed_placeholder(Some(underlined("Rich search")));
    harness.view().accessibility(&mut node);
    assert_eq!(node.placeholder(), Some("Rich search"));
}
