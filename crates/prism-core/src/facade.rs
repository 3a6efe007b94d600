//! Host-engine seam: the subscription facade and the bindings handed to it.
//!
//! The host guarantees it calls [`crate::Router::ensure_registered`] during
//! startup, before emitting any lifecycle event, and that each installed
//! binding is only ever invoked with an event of its declared kind.

use crate::events::{Event, EventKind};
use std::fmt;

/// Handler side of a binding. Invoked synchronously by the host on whatever
/// thread it emits events from.
pub type Handler = Box<dyn Fn(&Event) + Send + Sync>;

/// One (event kind, handler) pair. Built once at registration, never mutated.
pub struct Binding {
    kind: EventKind,
    handler: Handler,
}

impl Binding {
    pub fn new(kind: EventKind, handler: impl Fn(&Event) + Send + Sync + 'static) -> Self {
        Self {
            kind,
            handler: Box::new(handler),
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Called by the host when an event of this binding's kind occurs.
    pub fn deliver(&self, event: &Event) {
        (self.handler)(event);
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding").field("kind", &self.kind).finish()
    }
}

/// The host engine's subscription-registration API. Accepts one batch of
/// typed handlers; the router calls this at most once per process.
pub trait Subscriptions {
    fn subscribe(&mut self, bindings: Vec<Binding>);
}
