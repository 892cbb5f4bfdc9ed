// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use smallvec::SmallVec;
use tracing::warn;

type Handler<E> = Box<dyn FnMut(&E)>;

struct Slots<E> {
    next_id: u64,
    // Most hosts have a single listener: their placeholder.
    handlers: SmallVec<[(u64, Handler<E>); 2]>,
    emitting: bool,
    // Ids disconnected while their handler was checked out by `emit`.
    disconnected_during_emit: SmallVec<[u64; 2]>,
}

/// A list of handlers interested in the events of one host.
///
/// This replaces a process-wide notification center: each host owns its hub,
/// and each listener owns the [`Subscription`] which keeps it connected.
///
/// Handlers run synchronously, in connection order, on the thread which emits.
pub struct SignalHub<E> {
    slots: Rc<RefCell<Slots<E>>>,
}

/// Keeps a handler connected to a [`SignalHub`].
///
/// The handler is disconnected when this is dropped.
#[must_use = "the handler is disconnected as soon as the subscription is dropped"]
pub struct Subscription {
    disconnect: Option<Box<dyn FnOnce()>>,
}

impl<E: 'static> SignalHub<E> {
    /// Creates a hub with no handlers.
    pub fn new() -> Self {
        Self {
            slots: Rc::new(RefCell::new(Slots {
                next_id: 0,
                handlers: SmallVec::new(),
                emitting: false,
                disconnected_during_emit: SmallVec::new(),
            })),
        }
    }

    /// Registers `handler`, which will be called for every event until the
    /// returned [`Subscription`] is dropped.
    pub fn connect(&self, handler: impl FnMut(&E) + 'static) -> Subscription {
        let id = {
            let mut slots = self.slots.borrow_mut();
            let id = slots.next_id;
            slots.next_id += 1;
            slots.handlers.push((id, Box::new(handler)));
            id
        };
        let slots = Rc::downgrade(&self.slots);
        Subscription {
            disconnect: Some(Box::new(move || disconnect(&slots, id))),
        }
    }

    /// Calls every connected handler with `event`.
    ///
    /// Handlers may connect and disconnect while the event is delivered;
    /// newly connected handlers first see the next event.
    /// Emitting from within a handler is not supported, and such events are dropped.
    ///
    /// If a handler panics, the hub stays usable: every handler stays connected.
    pub fn emit(&self, event: &E) {
        let mut guard = {
            let mut slots = self.slots.borrow_mut();
            if slots.emitting {
                warn!("Event emitted from within a handler was dropped");
                return;
            }
            slots.emitting = true;
            EmitGuard {
                running: std::mem::take(&mut slots.handlers),
                slots: &self.slots,
            }
        };

        for (_, handler) in guard.running.iter_mut() {
            handler(event);
        }
    }

    /// The number of connected handlers.
    ///
    /// While an event is being delivered, this only counts handlers connected since.
    pub fn handler_count(&self) -> usize {
        self.slots.borrow().handlers.len()
    }
}

/// Puts the handlers checked out by `emit` back, even when a handler unwinds.
struct EmitGuard<'a, E> {
    running: SmallVec<[(u64, Handler<E>); 2]>,
    slots: &'a RefCell<Slots<E>>,
}

impl<E> Drop for EmitGuard<'_, E> {
    fn drop(&mut self) {
        let mut slots = self.slots.borrow_mut();
        let mut running = std::mem::take(&mut self.running);
        let disconnected = std::mem::take(&mut slots.disconnected_during_emit);
        running.retain(|(id, _)| !disconnected.contains(id));
        running.extend(slots.handlers.drain(..));
        slots.handlers = running;
        slots.emitting = false;
    }
}

fn disconnect<E>(slots: &Weak<RefCell<Slots<E>>>, id: u64) {
    // The hub may already be gone if the host was dropped first.
    let Some(slots) = slots.upgrade() else {
        return;
    };
    let mut slots = slots.borrow_mut();
    let count = slots.handlers.len();
    slots.handlers.retain(|(handler_id, _)| *handler_id != id);
    if slots.handlers.len() == count && slots.emitting {
        slots.disconnected_during_emit.push(id);
    }
}

impl<E: 'static> Default for SignalHub<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for SignalHub<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots = self.slots.borrow();
        f.debug_struct("SignalHub")
            .field("handlers", &slots.handlers.len())
            .field("emitting", &slots.emitting)
            .finish_non_exhaustive()
    }
}

impl Subscription {
    /// Disconnects the handler now, rather than when this is dropped.
    pub fn disconnect(mut self) {
        if let Some(disconnect) = self.disconnect.take() {
            disconnect();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(disconnect) = self.disconnect.take() {
            disconnect();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("connected", &self.disconnect.is_some())
            .finish()
    }
}
