use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEvent {
    pub event_id: Uuid,
    pub title: String,
    pub description: String,
}
