// In memory implementation of the EventStore and EventQueries ports.
//
// Events are kept in insertion order for the lifetime of the process.
// Appends take the write lock, so concurrent creates never lose an event.

use crate::modules::events::adapters::outbound::event_store::{EventQueries, EventStore};
use crate::modules::events::core::event::Event;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryEventStore {
    events: RwLock<Vec<Event>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl EventStore for InMemoryEventStore {
    async fn append(&self, event: Event) {
        self.events.write().await.push(event);
    }
}

#[async_trait::async_trait]
impl EventQueries for InMemoryEventStore {
    async fn list_all(&self) -> Vec<Event> {
        self.events.read().await.clone()
    }
}
