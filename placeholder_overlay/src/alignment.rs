// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use crate::kurbo::Insets;

/// Vertical placement of the placeholder inside the host.
///
/// Only honoured by [`OverlayVariant::ConstrainedTextView`](crate::OverlayVariant::ConstrainedTextView).
///
/// Selecting [`Center`](Self::Center) or [`Bottom`](Self::Bottom) forces the placeholder
/// to hide while editing, since the caret would otherwise be drawn away from the placeholder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    /// The placeholder uses the host's text inset unchanged.
    #[default]
    None,
    /// The placeholder is centered vertically.
    Center,
    /// The placeholder sits at the bottom of the host.
    Bottom,
}

impl VerticalAlignment {
    /// Whether this alignment requires hiding the placeholder while editing.
    pub fn forces_hide_on_editing(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Computes the top inset which vertically centers content of `content_height`
/// inside a host of `host_height`, when displayed at `zoom`.
///
/// Content taller than the host is pinned to the top rather than given a negative inset.
pub fn apply_center_alignment(host_height: f64, content_height: f64, zoom: f64) -> f64 {
    ((host_height - content_height * zoom) / 2.).max(0.)
}

/// Computes the top inset which places content of `content_height`
/// at the bottom of a host of `host_height`, when displayed at `zoom`.
///
/// Content taller than the host is pinned to the top rather than given a negative inset.
pub fn apply_bottom_alignment(host_height: f64, content_height: f64, zoom: f64) -> f64 {
    (host_height - content_height * zoom).max(0.)
}

/// Resolves the inset of the placeholder for the given `alignment`.
///
/// With [`VerticalAlignment::None`], this is `host_inset`.
/// Otherwise only the top edge is replaced.
pub fn aligned_inset(
    alignment: VerticalAlignment,
    host_inset: Insets,
    host_height: f64,
    content_height: f64,
    zoom: f64,
) -> Insets {
    let top = match alignment {
        VerticalAlignment::None => return host_inset,
        VerticalAlignment::Center => apply_center_alignment(host_height, content_height, zoom),
        VerticalAlignment::Bottom => apply_bottom_alignment(host_height, content_height, zoom),
    };
    Insets {
        y0: top,
        ..host_inset
    }
}

// --- MARK: TESTS
#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn center_and_bottom_offsets() {
        assert_approx_eq!(f64, apply_center_alignment(100., 20., 1.), 40.);
        assert_approx_eq!(f64, apply_bottom_alignment(100., 20., 1.), 80.);
        // Zoom scales the content, not the host.
        assert_approx_eq!(f64, apply_center_alignment(100., 20., 2.), 30.);
        assert_approx_eq!(f64, apply_bottom_alignment(100., 20., 2.), 60.);
    }

    #[test]
    fn insets_are_never_negative() {
        let heights = [0., 0.5, 1., 17., 44., 100., 1e6];
        let zooms = [0.01, 0.5, 1., 3., 100.];
        for host_height in heights {
            for content_height in heights {
                for zoom in zooms {
                    let center = apply_center_alignment(host_height, content_height, zoom);
                    let bottom = apply_bottom_alignment(host_height, content_height, zoom);
                    assert!(
                        center >= 0. && bottom >= 0.,
                        "negative inset for host {host_height}, content {content_height}, zoom {zoom}"
                    );
                }
            }
        }
    }

    #[test]
    fn none_keeps_host_inset() {
        let host_inset = Insets::new(4., 8., 4., 8.);
        let inset = aligned_inset(VerticalAlignment::None, host_inset, 100., 20., 1.);
        assert_eq!(inset, host_inset);

        let inset = aligned_inset(VerticalAlignment::Bottom, host_inset, 100., 20., 1.);
        assert_eq!(inset, Insets::new(4., 80., 4., 8.));
    }

    #[test]
    fn only_aligned_variants_force_hiding() {
        assert!(!VerticalAlignment::None.forces_hide_on_editing());
        assert!(VerticalAlignment::Center.forces_hide_on_editing());
        assert!(VerticalAlignment::Bottom.forces_hide_on_editing());
    }
}
