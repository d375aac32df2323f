//! Synchronous subscriber fan-out.
//!
//! Listeners run in registration order on every state change. A panic
//! in one listener is caught and logged so the remaining listeners and
//! the engine state are unaffected.

use serde::{Deserialize, Serialize};
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::warn;

/// State change notifications emitted by the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum BuilderEvent {
    ViewInstalled { view_id: String },
    ViewCleared,
    ComponentAdded { node_id: String },
    ComponentRemoved { node_id: String },
    ComponentUpdated { node_id: String },
    ComponentMoved { node_id: String },
    SelectionChanged { node_id: Option<String> },
    HistoryMoved,
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Listener = Box<dyn Fn(&BuilderEvent)>;

#[derive(Default)]
pub struct SubscriberSet {
    listeners: Vec<(SubscriberId, Listener)>,
    next_id: u64,
}

impl SubscriberSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl Fn(&BuilderEvent) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Invoke all listeners in registration order, isolating panics
    pub fn notify(&self, event: &BuilderEvent) {
        for (id, listener) in &self.listeners {
            if catch_unwind(AssertUnwindSafe(|| listener(event))).is_err() {
                warn!(subscriber = id.0, ?event, "subscriber panicked during notification");
            }
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for SubscriberSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriberSet")
            .field("listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_listeners_run_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut set = SubscriberSet::new();

        for tag in ["first", "second"] {
            let seen = Rc::clone(&seen);
            set.subscribe(move |_| seen.borrow_mut().push(tag));
        }

        set.notify(&BuilderEvent::HistoryMoved);
        assert_eq!(*seen.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_unsubscribe_removes_listener() {
        let seen = Rc::new(RefCell::new(0));
        let mut set = SubscriberSet::new();

        let seen_inner = Rc::clone(&seen);
        let id = set.subscribe(move |_| *seen_inner.borrow_mut() += 1);

        set.notify(&BuilderEvent::HistoryMoved);
        assert!(set.unsubscribe(id));
        set.notify(&BuilderEvent::HistoryMoved);

        assert_eq!(*seen.borrow(), 1);
        assert!(!set.unsubscribe(id));
    }

    #[test]
    fn test_panicking_listener_does_not_stop_others() {
        let seen = Rc::new(RefCell::new(0));
        let mut set = SubscriberSet::new();

        set.subscribe(|_| panic!("listener failure"));
        let seen_inner = Rc::clone(&seen);
        set.subscribe(move |_| *seen_inner.borrow_mut() += 1);

        set.notify(&BuilderEvent::HistoryMoved);
        assert_eq!(*seen.borrow(), 1);
    }
}
