// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Placeholder Overlay adds placeholder text to an editable text view.
//!
//! The crate doesn't render anything itself.
//! Instead, it models the state of a placeholder which sits on top of (or behind)
//! an editable text view, which we call the *host*, and derives what the toolkit
//! should draw from the host's state:
//!
//! - Whether the placeholder is visible, driven by the host's editing signals.
//! - The placeholder's style, mirrored from the host's font, alignment and inset.
//! - The placeholder's top inset when it is vertically centered or bottom-aligned.
//! - The host's height constraint, which may be raised so the placeholder is never clipped.
//!
//! The host is abstracted behind the [`TextHost`] trait, so the same logic drives
//! any toolkit, as well as the fake host used in tests.
//!
//! # Example
//!
//! ```
//! use placeholder_overlay::{PlaceholderConfig, PlaceholderTextView, Visibility};
//! use placeholder_testing::FakeHost;
//!
//! let config = PlaceholderConfig::default()
//!     .with_placeholder("Write a message")
//!     .with_hide_on_editing(true);
//! let mut view = PlaceholderTextView::with_config(FakeHost::new(), config);
//! assert_eq!(view.overlay().visibility(), Visibility::Shown);
//!
//! view.host_mut().begin_editing();
//! assert_eq!(view.overlay().visibility(), Visibility::Hidden);
//!
//! view.host_mut().end_editing();
//! assert_eq!(view.overlay().visibility(), Visibility::Shown);
//! ```
//!
//! # Variants
//!
//! Three flavours of the widget exist, selected with [`OverlayVariant`]:
//!
//! - [`TextView`](OverlayVariant::TextView) mirrors the host's inset onto a nested text view.
//! - [`ConstrainedTextView`](OverlayVariant::ConstrainedTextView) additionally supports
//!   [vertical alignment](VerticalAlignment) and height constraint correction.
//! - [`Label`](OverlayVariant::Label) uses a label, positioned inside the host's inset.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(
    test,
    expect(
        unused_crate_dependencies,
        reason = "False-positive with dev-dependencies only used in integration tests"
    )
)]

pub use {accesskit, kurbo, parley, peniko};

mod alignment;
mod config;
mod constraint;
mod host;
mod overlay;
mod properties;
mod signal;
mod text;
mod view;

pub mod theme;
pub mod tracing_backend;

pub use alignment::{
    VerticalAlignment, aligned_inset, apply_bottom_alignment, apply_center_alignment,
};
pub use config::{OverlayVariant, PlaceholderConfig};
pub use constraint::{ContentSizeCorrection, HeightConstraint};
pub use host::{HostEvent, HostSignal, TextHost};
pub use overlay::{LayoutMetrics, PlaceholderOverlay, Visibility};
pub use properties::PlaceholderColor;
pub use signal::{SignalHub, Subscription};
pub use text::{
    ArcStr, AttributedText, BrushIndex, PlaceholderContent, StyleProperty, StyleSpan, TextAlign,
    TextFont,
};
pub use view::PlaceholderTextView;
