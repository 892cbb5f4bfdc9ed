// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! A headless walk through a form with two placeholders.
//!
//! The first field has a plain placeholder, and a switch controlling whether its
//! placeholder hides while editing. The second field has an attributed placeholder.
//!
//! Run with `RUST_LOG=debug` to see every visibility change.

use placeholder_overlay::peniko::Color;
use placeholder_overlay::tracing_backend::try_init_tracing;
use placeholder_overlay::{
    AttributedText, PlaceholderConfig, PlaceholderTextView, StyleProperty, TextHost,
};
use placeholder_testing::FakeHost;
use tracing::info;

const SECONDARY_LABEL: Color = Color::from_rgba8(0x3c, 0x3c, 0x43, 0x99);

fn attributed_example() -> AttributedText {
    AttributedText::new("Beautiful attributed placeholder text")
        .with_style(StyleProperty::Underline(true))
        .with_style(StyleProperty::FontSize(15.0))
}

fn report<H: TextHost>(name: &str, view: &PlaceholderTextView<H>) {
    let overlay = view.overlay();
    info!(
        field = name,
        placeholder = overlay.content().as_str(),
        visibility = ?overlay.visibility(),
        "Field state"
    );
}

fn main() {
    let _ = try_init_tracing();

    let mut hide_switch = false;

    let mut plain = PlaceholderTextView::with_config(
        FakeHost::new(),
        PlaceholderConfig::default()
            .with_placeholder("Beautiful placeholder text!")
            .with_hide_on_editing(hide_switch),
    );
    let mut attributed = PlaceholderTextView::new(FakeHost::new());
    attributed.set_attributed_placeholder(Some(attributed_example()));
    attributed.set_placeholder_color(SECONDARY_LABEL);

    report("plain", &plain);
    report("attributed", &attributed);

    // Tap into the first field and type.
    plain.host_mut().begin_editing();
    report("plain", &plain);
    plain.host_mut().type_text("Hello");
    report("plain", &plain);
    plain.host_mut().delete_all();
    report("plain", &plain);

    // Flip the switch, then tap outside of the fields.
    hide_switch = !hide_switch;
    plain.set_hide_on_editing(hide_switch);
    plain.host_mut().end_editing();
    report("plain", &plain);

    // Editing again now hides the placeholder.
    plain.host_mut().begin_editing();
    report("plain", &plain);
    plain.host_mut().end_editing();
    report("plain", &plain);

    attributed.host_mut().begin_editing();
    attributed.host_mut().type_text("Some notes");
    attributed.host_mut().end_editing();
    report("attributed", &attributed);
}
