use crate::modules::events::adapters::outbound::event_store::EventQueries;
use crate::modules::events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use crate::modules::events::use_cases::create_event::handler::CreateEventHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn EventQueries + Send + Sync>,
    pub create_event_handler: Arc<CreateEventHandler<InMemoryEventStore>>,
}

impl AppState {
    /// Wires both ports to one fresh in-memory store.
    pub fn in_memory() -> Self {
        let event_store = Arc::new(InMemoryEventStore::new());
        Self {
            queries: event_store.clone(),
            create_event_handler: Arc::new(CreateEventHandler::new(event_store)),
        }
    }
}
