//! Cross-view event bus.
//!
//! A synchronous, single-threaded publish/subscribe registry. Views publish
//! domain events (date selection, highlight requests) without knowing who
//! listens; subscribers are isolated from each other's failures. The bus
//! owns subscriber lifecycle only — it carries no domain logic and never
//! buffers: an event with no subscribers is dropped silently.
//!
//! Dispatch iterates a snapshot of the handler list, so a handler that
//! subscribes or unsubscribes mid-publish affects the next publish, not the
//! one in flight.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::Value;
use tracing::warn;

use crate::domain::error::StocklensError;

/// Closed set of cross-view event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    DateClick,
    DateRangeSelect,
    DataHighlight,
    DataReset,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::DateClick => "date_click",
            EventKind::DateRangeSelect => "date_range_select",
            EventKind::DataHighlight => "data_highlight",
            EventKind::DataReset => "data_reset",
        }
    }
}

/// Subscriber callback. A returned error is logged and isolated; it never
/// reaches the publisher or the remaining subscribers.
pub type Handler = Rc<dyn Fn(&Value) -> Result<(), StocklensError>>;

/// Identifies exactly one registration. The same handler subscribed twice
/// yields two distinct tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionToken {
    kind: EventKind,
    id: u64,
}

struct Subscription {
    id: u64,
    handler: Handler,
}

/// One bus instance per active analysis view; dropped with the view.
#[derive(Default)]
pub struct EventBus {
    next_id: Cell<u64>,
    registry: RefCell<HashMap<EventKind, Vec<Subscription>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `kind`. No deduplication: every call makes
    /// an independent registration with its own token.
    pub fn subscribe(&self, kind: EventKind, handler: Handler) -> SubscriptionToken {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        self.registry
            .borrow_mut()
            .entry(kind)
            .or_default()
            .push(Subscription { id, handler });

        SubscriptionToken { kind, id }
    }

    /// Remove the registration identified by `token`. Idempotent: a second
    /// call with the same token is a no-op.
    pub fn unsubscribe(&self, token: SubscriptionToken) {
        if let Some(subs) = self.registry.borrow_mut().get_mut(&token.kind) {
            subs.retain(|s| s.id != token.id);
        }
    }

    /// Invoke every currently-registered handler for `kind`, synchronously
    /// and in registration order. Handler errors are logged and do not stop
    /// the remaining handlers.
    pub fn publish(&self, kind: EventKind, payload: &Value) {
        // Snapshot before dispatch: the registry borrow must not be held
        // while handlers run, and mid-publish registration changes apply to
        // the next publish only.
        let snapshot: Vec<Handler> = self
            .registry
            .borrow()
            .get(&kind)
            .map(|subs| subs.iter().map(|s| Rc::clone(&s.handler)).collect())
            .unwrap_or_default();

        for handler in snapshot {
            if let Err(err) = handler(payload) {
                warn!(event = kind.as_str(), error = %err, "event handler failed");
            }
        }
    }

    /// Drop every registration. Used at full view reset.
    pub fn clear(&self) {
        self.registry.borrow_mut().clear();
    }

    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.registry
            .borrow()
            .get(&kind)
            .map_or(0, |subs| subs.len())
    }
}
