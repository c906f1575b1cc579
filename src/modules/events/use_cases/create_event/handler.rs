use crate::modules::events::adapters::outbound::event_store::EventStore;
use crate::modules::events::core::event::Event;
use crate::modules::events::use_cases::create_event::command::CreateEvent;
use std::sync::Arc;

pub struct CreateEventHandler<TEventStore>
where
    TEventStore: EventStore + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> CreateEventHandler<TEventStore>
where
    TEventStore: EventStore + Send + Sync + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    pub async fn handle(&self, command: CreateEvent) -> Event {
        let event = Event {
            id: command.event_id,
            title: command.title,
            description: command.description,
        };
        self.event_store.append(event.clone()).await;
        event
    }
}
