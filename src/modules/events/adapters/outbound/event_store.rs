// Ports for the event collection.
//
// EventStore is the write side used by the create use case, EventQueries the
// read side used by the list endpoint. Neither can fail: the only backend is
// process memory.

use crate::modules::events::core::event::Event;
use async_trait::async_trait;

#[async_trait]
pub trait EventStore: Send + Sync {
    async fn append(&self, event: Event);
}

#[async_trait]
pub trait EventQueries: Send + Sync {
    async fn list_all(&self) -> Vec<Event>;
}
