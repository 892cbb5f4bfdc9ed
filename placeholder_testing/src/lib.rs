// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Helpers for testing placeholders without a GUI toolkit.
//!
//! - [`FakeHost`] implements [`TextHost`](placeholder_overlay::TextHost), with methods
//!   simulating what a user (or the application) does to a real text view.
//! - [`TestHarness`] wraps a [`PlaceholderTextView`](placeholder_overlay::PlaceholderTextView)
//!   around a fake host, with shorthands for common assertions.
//! - [`Recording`] records the events a host emits.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET

mod fake_host;
mod harness;
mod recording;

pub use fake_host::FakeHost;
pub use harness::{TestHarness, TestHarnessParams};
pub use recording::{Record, Recording};
