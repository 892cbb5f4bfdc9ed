// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

/// A shared handle to the height constraint of a host.
///
/// The host's layout engine and the placeholder both hold this handle:
/// the placeholder may raise (or restore) the height, and the layout engine
/// reads it on its next pass.
///
/// Cloning the handle doesn't clone the constraint.
#[derive(Clone, Debug)]
pub struct HeightConstraint(Rc<Cell<f64>>);

impl HeightConstraint {
    /// Creates a new constraint with the given height in logical pixels.
    pub fn new(height: f64) -> Self {
        Self(Rc::new(Cell::new(height)))
    }

    /// The current height.
    pub fn height(&self) -> f64 {
        self.0.get()
    }

    /// Changes the height seen by every holder of this handle.
    pub fn set_height(&self, height: f64) {
        self.0.set(height);
    }

    /// Returns `true` if both handles refer to the same constraint.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Keeps the host tall enough to show its placeholder.
///
/// The first constraint found during layout is kept, along with its height at that time,
/// the *baseline*. The baseline is a one-shot snapshot: it is never refreshed,
/// even if the constraint is later changed by someone else.
#[derive(Clone, Debug, Default)]
pub struct ContentSizeCorrection {
    constraint: Option<HeightConstraint>,
    baseline: Option<f64>,
}

impl ContentSizeCorrection {
    /// Records `constraint` if none has been recorded yet.
    ///
    /// Called on every layout pass; only the first call with a constraint has an effect.
    pub fn discover(&mut self, constraint: Option<HeightConstraint>) {
        if self.constraint.is_some() {
            return;
        }
        let Some(constraint) = constraint else {
            return;
        };
        let baseline = constraint.height();
        debug!(baseline, "Captured height constraint baseline");
        self.baseline = Some(baseline);
        self.constraint = Some(constraint);
    }

    /// The height of the constraint when it was discovered.
    pub fn baseline(&self) -> Option<f64> {
        self.baseline
    }

    /// The constraint being corrected, if one was found.
    pub fn constraint(&self) -> Option<&HeightConstraint> {
        self.constraint.as_ref()
    }

    /// Adjusts the live constraint for a placeholder of `content_height`.
    ///
    /// When the placeholder is hidden because the host is being edited, the constraint
    /// is restored to the baseline, provided the baseline is smaller than the placeholder.
    /// Otherwise the constraint is raised to at least `content_height`.
    ///
    /// Returns the new height if the constraint was changed.
    /// Does nothing if no constraint was discovered.
    pub fn apply(
        &self,
        content_height: f64,
        hide_on_editing: bool,
        host_focused: bool,
    ) -> Option<f64> {
        let (Some(constraint), Some(baseline)) = (&self.constraint, self.baseline) else {
            debug!("No height constraint, skipping content size correction");
            return None;
        };
        let live = constraint.height();
        let target = if hide_on_editing && host_focused {
            if baseline >= content_height {
                return None;
            }
            baseline
        } else {
            live.max(content_height)
        };
        if target == live {
            return None;
        }
        debug!(from = live, to = target, "Corrected height constraint");
        constraint.set_height(target);
        Some(target)
    }
}

// --- MARK: TESTS
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_is_captured_once() {
        let constraint = HeightConstraint::new(30.);
        let mut correction = ContentSizeCorrection::default();
        correction.discover(None);
        assert_eq!(correction.baseline(), None);

        correction.discover(Some(constraint.clone()));
        constraint.set_height(50.);
        correction.discover(Some(constraint.clone()));
        correction.discover(Some(HeightConstraint::new(10.)));

        assert_eq!(correction.baseline(), Some(30.));
        assert!(correction.constraint().unwrap().ptr_eq(&constraint));
    }

    #[test]
    fn grows_while_placeholder_visible() {
        let constraint = HeightConstraint::new(30.);
        let mut correction = ContentSizeCorrection::default();
        correction.discover(Some(constraint.clone()));

        assert_eq!(correction.apply(60., false, true), Some(60.));
        assert_eq!(constraint.height(), 60.);

        // Never shrinks while the placeholder is visible.
        assert_eq!(correction.apply(20., true, false), None);
        assert_eq!(constraint.height(), 60.);
    }

    #[test]
    fn restores_baseline_while_editing() {
        let constraint = HeightConstraint::new(30.);
        let mut correction = ContentSizeCorrection::default();
        correction.discover(Some(constraint.clone()));
        correction.apply(60., true, false);

        assert_eq!(correction.apply(60., true, true), Some(30.));
        assert_eq!(constraint.height(), 30.);
    }

    #[test]
    fn keeps_height_when_baseline_fits_placeholder() {
        let constraint = HeightConstraint::new(80.);
        let mut correction = ContentSizeCorrection::default();
        correction.discover(Some(constraint.clone()));
        constraint.set_height(120.);

        assert_eq!(correction.apply(60., true, true), None);
        assert_eq!(constraint.height(), 120.);
    }

    #[test]
    fn missing_constraint_is_skipped() {
        let correction = ContentSizeCorrection::default();
        assert_eq!(correction.apply(60., false, false), None);
    }
}
