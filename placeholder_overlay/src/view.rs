// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use accesskit::{Node, Role};
use tracing::trace_span;

use crate::{
    ArcStr, AttributedText, LayoutMetrics, PlaceholderColor, PlaceholderConfig,
    PlaceholderOverlay, Subscription, TextHost, VerticalAlignment,
};

/// An editable text host with a placeholder.
///
/// The view owns its host, and subscribes to the host's signals for as long as it lives:
/// dropping the view disconnects the placeholder from the host's [`SignalHub`](crate::SignalHub).
///
/// The toolkit is expected to call [`layout`](Self::layout) after each layout pass of the host,
/// and [`host_style_changed`](Self::host_style_changed) after changing the host's font,
/// alignment or inset.
pub struct PlaceholderTextView<H: TextHost> {
    host: H,
    overlay: Rc<RefCell<PlaceholderOverlay>>,
    subscription: Subscription,
}

// --- MARK: BUILDERS
impl<H: TextHost> PlaceholderTextView<H> {
    /// Adds a placeholder with the default configuration to `host`.
    pub fn new(host: H) -> Self {
        Self::with_config(host, PlaceholderConfig::default())
    }

    /// Adds a placeholder configured by `config` to `host`.
    pub fn with_config(host: H, config: PlaceholderConfig) -> Self {
        let mut overlay = PlaceholderOverlay::new(&config, host.text_is_empty());
        overlay.sync_host(host.text_is_empty(), host.has_focus());
        overlay.set_host_style(host.font(), host.text_alignment(), host.text_inset());
        let overlay = Rc::new(RefCell::new(overlay));

        let weak_overlay = Rc::downgrade(&overlay);
        let subscription = host.signals().connect(move |event| {
            if let Some(overlay) = weak_overlay.upgrade() {
                overlay.borrow_mut().handle(event);
            }
        });

        let mut view = Self {
            host,
            overlay,
            subscription,
        };
        view.layout();
        view
    }
}

// --- MARK: METHODS
impl<H: TextHost> PlaceholderTextView<H> {
    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, for editing it.
    ///
    /// Events emitted by the host are delivered to the placeholder immediately.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The placeholder state.
    ///
    /// # Panics
    ///
    /// The placeholder can't be updated while the returned guard is alive:
    /// if the host emits an event before it is dropped, the emit panics.
    /// Prefer [`with_overlay`](Self::with_overlay) when the host may emit in between.
    pub fn overlay(&self) -> Ref<'_, PlaceholderOverlay> {
        self.overlay.borrow()
    }

    /// Calls `f` with the placeholder state, and returns its result.
    pub fn with_overlay<R>(&self, f: impl FnOnce(&PlaceholderOverlay) -> R) -> R {
        f(&self.overlay.borrow())
    }

    /// Sets the plain placeholder string, and displays it instead of any rich placeholder.
    pub fn set_placeholder(&mut self, text: impl Into<ArcStr>) {
        self.overlay.borrow_mut().set_placeholder(text);
        self.layout();
    }

    /// Sets the rich placeholder, which is displayed instead of the plain one while set.
    pub fn set_attributed_placeholder(&mut self, attributed: Option<AttributedText>) {
        self.overlay
            .borrow_mut()
            .set_attributed_placeholder(attributed);
        self.layout();
    }

    /// Sets the color of the plain placeholder.
    pub fn set_placeholder_color(&mut self, color: impl Into<PlaceholderColor>) {
        self.overlay.borrow_mut().set_placeholder_color(color);
    }

    /// Sets whether the placeholder hides while the host is focused and empty.
    ///
    /// Visibility is re-derived from the host's current text and focus.
    pub fn set_hide_on_editing(&mut self, hide_on_editing: bool) {
        let mut overlay = self.overlay.borrow_mut();
        overlay.set_hide_on_editing(hide_on_editing);
        overlay.sync_host(self.host.text_is_empty(), self.host.has_focus());
    }

    /// Sets the vertical placement of the placeholder.
    ///
    /// Visibility is re-derived from the host's current text and focus.
    pub fn set_vertical_alignment(&mut self, alignment: VerticalAlignment) {
        let mut overlay = self.overlay.borrow_mut();
        overlay.set_vertical_alignment(alignment);
        overlay.sync_host(self.host.text_is_empty(), self.host.has_focus());
    }

    /// Mirrors the host's font, alignment and inset onto the placeholder.
    pub fn host_style_changed(&mut self) {
        self.overlay.borrow_mut().set_host_style(
            self.host.font(),
            self.host.text_alignment(),
            self.host.text_inset(),
        );
        self.layout();
    }

    /// Re-applies the host's style to the placeholder.
    ///
    /// For design tools which edit a host without running its normal lifecycle.
    pub fn refresh_style(&mut self) {
        self.host_style_changed();
    }

    /// Lays the placeholder out against the host's current bounds.
    ///
    /// This measures the placeholder, picks up the host's height constraint
    /// the first time one is available, and recomputes the placeholder's frame and inset.
    pub fn layout(&mut self) {
        let _span = trace_span!("PlaceholderTextView::layout").entered();

        let host_size = self.host.size();
        let inset = self.host.text_inset();
        let width = (host_size.width - inset.x0 - inset.x1).max(0.);
        let content_height = {
            let overlay = self.overlay.borrow();
            self.host
                .measure_placeholder(overlay.content(), overlay.font(), width)
        };
        let metrics = LayoutMetrics {
            host_size,
            content_height,
            zoom: self.host.zoom_scale(),
        };
        self.overlay
            .borrow_mut()
            .layout(metrics, self.host.height_constraint());
    }

    /// The accessibility role of the host.
    pub fn accessibility_role(&self) -> Role {
        Role::MultilineTextInput
    }

    /// Writes the placeholder into the host's accessibility node.
    ///
    /// Rich placeholders contribute their unstyled text.
    pub fn accessibility(&self, node: &mut Node) {
        let overlay = self.overlay.borrow();
        node.set_placeholder(overlay.content().as_str());
    }
}

impl<H: TextHost + std::fmt::Debug> std::fmt::Debug for PlaceholderTextView<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaceholderTextView")
            .field("host", &self.host)
            .field("overlay", &*self.overlay.borrow())
            .field("subscription", &self.subscription)
            .finish()
    }
}
