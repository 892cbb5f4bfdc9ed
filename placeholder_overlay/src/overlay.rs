// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use tracing::{debug, warn};

use crate::kurbo::{Insets, Rect, Size};
use crate::{
    ArcStr, AttributedText, ContentSizeCorrection, HeightConstraint, HostEvent, HostSignal,
    OverlayVariant, PlaceholderColor, PlaceholderConfig, PlaceholderContent, TextAlign, TextFont,
    VerticalAlignment, aligned_inset,
};

/// Whether the placeholder is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// The placeholder is drawn.
    Shown,
    /// The placeholder is not drawn.
    Hidden,
}

impl Visibility {
    /// Returns `Hidden` if `hidden` is true, `Shown` otherwise.
    pub fn from_hidden(hidden: bool) -> Self {
        if hidden { Self::Hidden } else { Self::Shown }
    }

    /// Returns `true` for [`Visibility::Hidden`].
    pub fn is_hidden(self) -> bool {
        self == Self::Hidden
    }
}

/// Measurements of the host taken during its layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutMetrics {
    /// The size of the host's bounds.
    pub host_size: Size,
    /// The natural height of the placeholder's content, unzoomed.
    pub content_height: f64,
    /// The scale at which the host displays its content.
    pub zoom: f64,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            host_size: Size::ZERO,
            content_height: 0.,
            zoom: 1.,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ContentSource {
    Plain,
    Attributed,
}

/// The state of a placeholder, and the rules deriving it from its host.
///
/// Visibility can't be set directly: it only changes in response to [`HostEvent`]s,
/// following these rules:
///
/// | Event          | Without hiding on editing  | With hiding on editing                    |
/// |----------------|----------------------------|-------------------------------------------|
/// | `EditBegin`    | unchanged                  | hidden if the host is empty               |
/// | `TextChanged`  | hidden iff host not empty  | hidden if the host is empty, else unchanged |
/// | `EditEnd`      | unchanged                  | shown if the host is empty                |
/// | `TextReplaced` | hidden iff host not empty  | hidden iff host not empty                 |
///
/// Changing the hiding policy, through [`set_hide_on_editing`](Self::set_hide_on_editing)
/// or [`set_vertical_alignment`](Self::set_vertical_alignment), re-derives visibility
/// from the last known host state: hidden if the host has text, or if it is
/// focused and the placeholder hides on editing.
///
/// Style (font, alignment, inset) is mirrored from the host through
/// [`set_host_style`](Self::set_host_style).
#[derive(Clone, Debug)]
pub struct PlaceholderOverlay {
    variant: OverlayVariant,

    text: ArcStr,
    attributed: Option<AttributedText>,
    source: ContentSource,
    color: PlaceholderColor,

    font: TextFont,
    alignment: TextAlign,
    host_inset: Insets,

    /// The inset applied inside the overlay's frame.
    inset: Insets,
    frame: Rect,

    hide_on_editing: bool,
    vertical_alignment: VerticalAlignment,
    visibility: Visibility,
    host_empty: bool,
    host_focused: bool,

    metrics: LayoutMetrics,
    content_size: ContentSizeCorrection,
}

// --- MARK: BUILDERS
impl PlaceholderOverlay {
    /// Creates the placeholder of a host whose text is empty if `host_empty`.
    ///
    /// The host is assumed unfocused, see [`sync_host`](Self::sync_host) otherwise.
    /// The placeholder starts out shown if and only if the host is empty.
    pub fn new(config: &PlaceholderConfig, host_empty: bool) -> Self {
        let mut overlay = Self {
            variant: config.variant,
            text: config.text.clone(),
            attributed: None,
            source: ContentSource::Plain,
            color: config.color,
            font: TextFont::default(),
            alignment: TextAlign::default(),
            host_inset: Insets::ZERO,
            inset: Insets::ZERO,
            frame: Rect::ZERO,
            hide_on_editing: config.hide_on_editing,
            vertical_alignment: VerticalAlignment::None,
            visibility: Visibility::from_hidden(!host_empty),
            host_empty,
            host_focused: false,
            metrics: LayoutMetrics::default(),
            content_size: ContentSizeCorrection::default(),
        };
        if config.attributed.is_some() {
            overlay.set_attributed_placeholder(config.attributed.clone());
        }
        if config.vertical_alignment != VerticalAlignment::None {
            overlay.set_vertical_alignment(config.vertical_alignment);
        }
        overlay
    }
}

// --- MARK: GETTERS
impl PlaceholderOverlay {
    /// The kind of view displaying the placeholder.
    pub fn variant(&self) -> OverlayVariant {
        self.variant
    }

    /// The plain placeholder string, whether or not it is displayed.
    pub fn placeholder(&self) -> &str {
        &self.text
    }

    /// The rich placeholder, whether or not it is displayed.
    pub fn attributed_placeholder(&self) -> Option<&AttributedText> {
        self.attributed.as_ref()
    }

    /// The content which is displayed.
    pub fn content(&self) -> PlaceholderContent<'_> {
        match (self.source, &self.attributed) {
            (ContentSource::Attributed, Some(attributed)) => {
                PlaceholderContent::Attributed(attributed)
            }
            _ => PlaceholderContent::Plain(&self.text),
        }
    }

    /// The color of the plain placeholder.
    pub fn color(&self) -> PlaceholderColor {
        self.color
    }

    /// The font mirrored from the host.
    pub fn font(&self) -> &TextFont {
        &self.font
    }

    /// The text alignment mirrored from the host.
    pub fn alignment(&self) -> TextAlign {
        self.alignment
    }

    /// The inset applied inside the placeholder's [frame](Self::frame).
    ///
    /// This is the host's inset, with its top edge replaced when vertically aligned.
    /// Labels have no inset: the host's inset is applied to their frame instead.
    pub fn inset(&self) -> Insets {
        self.inset
    }

    /// The placeholder's frame, in the host's coordinate space.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Whether the placeholder hides while the host is focused and empty.
    pub fn hide_on_editing(&self) -> bool {
        self.hide_on_editing
    }

    /// The vertical placement of the placeholder.
    pub fn vertical_alignment(&self) -> VerticalAlignment {
        self.vertical_alignment
    }

    /// Whether the placeholder is drawn.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Returns `true` if the placeholder is not drawn.
    pub fn is_hidden(&self) -> bool {
        self.visibility.is_hidden()
    }

    /// The measurements of the most recent layout pass.
    pub fn metrics(&self) -> LayoutMetrics {
        self.metrics
    }

    /// The height constraint correction state.
    pub fn content_size(&self) -> &ContentSizeCorrection {
        &self.content_size
    }
}

// --- MARK: SETTERS
impl PlaceholderOverlay {
    /// Sets the plain placeholder string, and displays it instead of any rich placeholder.
    pub fn set_placeholder(&mut self, text: impl Into<ArcStr>) {
        self.text = text.into();
        self.source = ContentSource::Plain;
    }

    /// Sets the rich placeholder.
    ///
    /// A rich placeholder is displayed instead of the plain one.
    /// Passing `None` displays the plain placeholder again.
    pub fn set_attributed_placeholder(&mut self, attributed: Option<AttributedText>) {
        self.source = match attributed {
            Some(_) => ContentSource::Attributed,
            None => ContentSource::Plain,
        };
        self.attributed = attributed;
    }

    /// Sets the color of the plain placeholder.
    pub fn set_placeholder_color(&mut self, color: impl Into<PlaceholderColor>) {
        self.color = color.into();
    }

    /// Sets whether the placeholder hides while the host is focused and empty.
    ///
    /// This can't be disabled while a [`VerticalAlignment`] is selected.
    /// Visibility is re-derived under the new policy right away.
    pub fn set_hide_on_editing(&mut self, hide_on_editing: bool) {
        if !hide_on_editing && self.vertical_alignment.forces_hide_on_editing() {
            warn!(
                alignment = ?self.vertical_alignment,
                "Vertically aligned placeholders always hide on editing"
            );
            return;
        }
        self.hide_on_editing = hide_on_editing;
        self.rederive_visibility();
    }

    /// Sets the vertical placement of the placeholder, and recomputes its inset.
    ///
    /// Any alignment other than [`VerticalAlignment::None`] enables hiding on editing.
    /// Ignored by variants which don't [support layout](OverlayVariant::supports_layout).
    pub fn set_vertical_alignment(&mut self, alignment: VerticalAlignment) {
        if !self.variant.supports_layout() {
            if alignment != VerticalAlignment::None {
                warn!(
                    variant = ?self.variant,
                    ?alignment,
                    "Vertical alignment is not supported by this placeholder variant"
                );
            }
            return;
        }
        self.vertical_alignment = alignment;
        if alignment.forces_hide_on_editing() {
            self.hide_on_editing = true;
            self.rederive_visibility();
        }
        self.update_geometry();
    }

    /// Records the host's state, for hosts which changed it without emitting an event,
    /// and re-derives visibility from it.
    pub fn sync_host(&mut self, host_empty: bool, host_focused: bool) {
        self.host_empty = host_empty;
        self.host_focused = host_focused;
        self.rederive_visibility();
    }

    /// Mirrors the host's style onto the placeholder.
    pub fn set_host_style(&mut self, font: TextFont, alignment: TextAlign, inset: Insets) {
        self.font = font;
        self.alignment = alignment;
        self.host_inset = inset;
        self.update_geometry();
    }

    /// Applies the results of the host's layout pass.
    ///
    /// The first height `constraint` seen is kept for content size correction.
    pub fn layout(&mut self, metrics: LayoutMetrics, constraint: Option<HeightConstraint>) {
        self.metrics = metrics;
        if self.variant.supports_layout() {
            self.content_size.discover(constraint);
        }
        self.update_geometry();
    }

    fn update_geometry(&mut self) {
        let bounds = self.metrics.host_size.to_rect();
        match self.variant {
            OverlayVariant::TextView => {
                self.frame = bounds;
                self.inset = self.host_inset;
            }
            OverlayVariant::ConstrainedTextView => {
                self.frame = bounds;
                self.inset = aligned_inset(
                    self.vertical_alignment,
                    self.host_inset,
                    self.metrics.host_size.height,
                    self.metrics.content_height,
                    self.metrics.zoom,
                );
            }
            OverlayVariant::Label => {
                let frame = bounds - self.host_inset;
                // An inset larger than the host collapses the label rather than flipping it.
                self.frame = Rect::new(
                    frame.x0,
                    frame.y0,
                    frame.x1.max(frame.x0),
                    frame.y1.max(frame.y0),
                );
                self.inset = Insets::ZERO;
            }
        }
    }
}

// --- MARK: EVENTS
impl PlaceholderOverlay {
    /// Updates the placeholder in response to a host event.
    pub fn handle(&mut self, event: &HostEvent) {
        self.host_empty = event.text_is_empty;
        self.host_focused = event.has_focus;
        match event.signal {
            HostSignal::EditBegin => self.edit_began(),
            HostSignal::TextChanged => self.text_changed(),
            HostSignal::EditEnd => self.edit_ended(),
            HostSignal::TextReplaced => self.text_replaced(),
        }
    }

    /// The host gained focus and started editing.
    pub fn on_edit_begin(&mut self, host_empty: bool) {
        self.handle(&HostEvent {
            signal: HostSignal::EditBegin,
            text_is_empty: host_empty,
            has_focus: true,
        });
    }

    /// The user changed the host's text.
    ///
    /// When hiding on editing, this only ever hides the placeholder:
    /// showing it again is left to [`on_edit_end`](Self::on_edit_end).
    pub fn on_text_changed(&mut self, host_empty: bool) {
        self.handle(&HostEvent {
            signal: HostSignal::TextChanged,
            text_is_empty: host_empty,
            has_focus: self.host_focused,
        });
    }

    /// The host lost focus and stopped editing.
    pub fn on_edit_end(&mut self, host_empty: bool) {
        self.handle(&HostEvent {
            signal: HostSignal::EditEnd,
            text_is_empty: host_empty,
            has_focus: false,
        });
    }

    /// The host's text was replaced outside of user editing.
    pub fn on_text_replaced(&mut self, host_empty: bool) {
        self.handle(&HostEvent {
            signal: HostSignal::TextReplaced,
            text_is_empty: host_empty,
            has_focus: self.host_focused,
        });
    }

    fn edit_began(&mut self) {
        if !self.host_empty {
            return;
        }
        if self.hide_on_editing {
            self.set_visibility(Visibility::Hidden, HostSignal::EditBegin);
        }
        self.correct_content_size();
    }

    fn text_changed(&mut self) {
        if self.hide_on_editing {
            if self.host_empty {
                self.set_visibility(Visibility::Hidden, HostSignal::TextChanged);
            }
        } else {
            let visibility = Visibility::from_hidden(!self.host_empty);
            self.set_visibility(visibility, HostSignal::TextChanged);
        }
    }

    fn edit_ended(&mut self) {
        if !self.host_empty {
            return;
        }
        if self.hide_on_editing {
            self.set_visibility(Visibility::Shown, HostSignal::EditEnd);
        }
        self.correct_content_size();
    }

    fn text_replaced(&mut self) {
        let visibility = Visibility::from_hidden(!self.host_empty);
        self.set_visibility(visibility, HostSignal::TextReplaced);
    }

    fn set_visibility(&mut self, visibility: Visibility, cause: HostSignal) {
        if self.visibility != visibility {
            debug!(?visibility, ?cause, "Placeholder visibility changed");
        }
        self.visibility = visibility;
    }

    fn rederive_visibility(&mut self) {
        let hidden = !self.host_empty || (self.host_focused && self.hide_on_editing);
        let visibility = Visibility::from_hidden(hidden);
        if self.visibility != visibility {
            debug!(
                ?visibility,
                hide_on_editing = self.hide_on_editing,
                "Placeholder visibility changed with its policy"
            );
        }
        self.visibility = visibility;
    }

    fn correct_content_size(&mut self) {
        if !self.variant.supports_layout() {
            return;
        }
        self.content_size.apply(
            self.metrics.content_height,
            self.hide_on_editing,
            self.host_focused,
        );
    }
}
