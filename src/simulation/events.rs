//! Events raised by overlaps, queued for the external event bus.
//!
//! The engine only ever emits one payload shape, so the payload is a small
//! tagged enum rather than an open map. The host drains the queue between
//! ticks; handlers are expected to react on the next tick, never to mutate
//! the current one.

use serde::{Deserialize, Serialize};

/// Payload attached to a physics event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventPayload {
    /// The other participant of the overlap.
    Object { id: String },
}

/// A named event, e.g. `sell-item` or `near-door`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicsEvent {
    pub name: String,
    pub payload: EventPayload,
}

impl PhysicsEvent {
    pub fn overlap(name: &str, other_id: &str) -> Self {
        Self {
            name: name.to_string(),
            payload: EventPayload::Object {
                id: other_id.to_string(),
            },
        }
    }
}
