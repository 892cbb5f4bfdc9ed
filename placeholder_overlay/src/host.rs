// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use crate::kurbo::{Insets, Size};
use crate::{HeightConstraint, PlaceholderContent, SignalHub, TextAlign, TextFont};

/// A change in the host's editing state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostSignal {
    /// The host gained focus and started editing.
    EditBegin,
    /// The user changed the host's text.
    TextChanged,
    /// The host lost focus and stopped editing.
    EditEnd,
    /// The host's text was replaced programmatically, outside of user editing.
    TextReplaced,
}

/// A [`HostSignal`] along with a snapshot of the host state it was emitted in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HostEvent {
    /// What happened.
    pub signal: HostSignal,
    /// Whether the host's text was empty after the change.
    pub text_is_empty: bool,
    /// Whether the host had focus after the change.
    pub has_focus: bool,
}

/// An editable text view which can carry a placeholder.
///
/// Implemented by toolkit integrations, and by the fake host in `placeholder_testing`.
/// The placeholder only ever reads from the host, except through the
/// [`HeightConstraint`] handle.
pub trait TextHost {
    /// The hub on which the host emits its [`HostEvent`]s.
    ///
    /// Events must be emitted in the order the host experiences them:
    /// `EditBegin`, any number of `TextChanged`, then `EditEnd`.
    fn signals(&self) -> &SignalHub<HostEvent>;

    /// Returns `true` if the host currently has no text.
    fn text_is_empty(&self) -> bool;

    /// Returns `true` if the host currently has focus.
    fn has_focus(&self) -> bool;

    /// The size of the host's bounds, in logical pixels.
    fn size(&self) -> Size;

    /// The inset between the host's bounds and its text.
    fn text_inset(&self) -> Insets;

    /// The font of the host's text.
    fn font(&self) -> TextFont;

    /// The alignment of the host's text.
    fn text_alignment(&self) -> TextAlign;

    /// The scale at which the host's content is displayed.
    fn zoom_scale(&self) -> f64 {
        1.0
    }

    /// The constraint controlling the host's height, if its layout uses one.
    fn height_constraint(&self) -> Option<HeightConstraint> {
        None
    }

    /// The natural height of `content` laid out with `font` in `width`, unzoomed.
    fn measure_placeholder(
        &self,
        content: PlaceholderContent<'_>,
        font: &TextFont,
        width: f64,
    ) -> f64;
}

impl<H: TextHost + ?Sized> TextHost for &H {
    fn signals(&self) -> &SignalHub<HostEvent> {
        (**self).signals()
    }

    fn text_is_empty(&self) -> bool {
        (**self).text_is_empty()
    }

    fn has_focus(&self) -> bool {
        (**self).has_focus()
    }

    fn size(&self) -> Size {
        (**self).size()
    }

    fn text_inset(&self) -> Insets {
        (**self).text_inset()
    }

    fn font(&self) -> TextFont {
        (**self).font()
    }

    fn text_alignment(&self) -> TextAlign {
        (**self).text_alignment()
    }

    fn zoom_scale(&self) -> f64 {
        (**self).zoom_scale()
    }

    fn height_constraint(&self) -> Option<HeightConstraint> {
        (**self).height_constraint()
    }

    fn measure_placeholder(
        &self,
        content: PlaceholderContent<'_>,
        font: &TextFont,
        width: f64,
    ) -> f64 {
        (**self).measure_placeholder(content, font, width)
    }
}
