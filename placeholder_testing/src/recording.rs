// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use placeholder_overlay::{HostEvent, HostSignal, SignalHub, Subscription};

/// A recording of the events emitted by a host.
///
/// Its intent is to let you observe the order in which a host notifies its placeholder:
///
/// ```
/// use assert_matches::assert_matches;
/// use placeholder_overlay::{HostSignal, TextHost};
/// use placeholder_testing::{FakeHost, Record, Recording};
///
/// let mut host = FakeHost::new();
/// let recording = Recording::default();
/// let _subscription = recording.listen(host.signals());
///
/// host.begin_editing();
/// host.type_text("a");
/// assert_matches!(recording.next(), Some(Record { signal: HostSignal::EditBegin, text_is_empty: true }));
/// assert_matches!(recording.next(), Some(Record { signal: HostSignal::TextChanged, text_is_empty: false }));
/// assert!(recording.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Recording(Rc<RefCell<VecDeque<Record>>>);

/// One recorded host event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    /// The signal emitted.
    pub signal: HostSignal,
    /// Whether the host was empty at the time.
    pub text_is_empty: bool,
}

impl Recording {
    /// Records every event emitted on `signals` until the returned subscription is dropped.
    pub fn listen(&self, signals: &SignalHub<HostEvent>) -> Subscription {
        let recording = self.clone();
        signals.connect(move |event| {
            recording.push(Record {
                signal: event.signal,
                text_is_empty: event.text_is_empty,
            });
        })
    }

    /// True if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// The number of events in the recording.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Clear recorded events.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Returns the next event in the recording, if one exists.
    ///
    /// This consumes the event.
    pub fn next(&self) -> Option<Record> {
        self.0.borrow_mut().pop_front()
    }

    /// Returns a vec of events drained from the recording.
    pub fn drain(&self) -> Vec<Record> {
        self.0.borrow_mut().drain(..).collect::<Vec<_>>()
    }

    fn push(&self, record: Record) {
        self.0.borrow_mut().push_back(record);
    }
}
