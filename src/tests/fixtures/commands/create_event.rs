// Shared test fixture for the CreateEvent command.

use crate::modules::events::use_cases::create_event::command::CreateEvent;
use uuid::Uuid;

pub struct CreateEventBuilder {
    inner: CreateEvent,
}

impl Default for CreateEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateEventBuilder {
    pub fn new() -> Self {
        Self {
            inner: CreateEvent {
                event_id: Uuid::new_v4(),
                title: "Meetup".to_string(),
                description: "Monthly sync".to_string(),
            },
        }
    }

    pub fn event_id(mut self, v: Uuid) -> Self {
        self.inner.event_id = v;
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn build(self) -> CreateEvent {
        self.inner
    }
}

#[cfg(test)]
mod create_event_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_mints_a_fresh_id_per_command() {
        let first = CreateEventBuilder::new().build();
        let second = CreateEventBuilder::default().build();
        assert_ne!(first.event_id, second.event_id);
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let id = Uuid::new_v4();
        let custom = CreateEventBuilder::new()
            .event_id(id)
            .title("Standup")
            .description("Daily")
            .build();

        assert_eq!(custom.event_id, id);
        assert_eq!(custom.title, "Standup");
        assert_eq!(custom.description, "Daily");
    }
}
