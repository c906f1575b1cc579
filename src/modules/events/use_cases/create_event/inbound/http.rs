use axum::{Json, body::Bytes, extract::State, http::StatusCode, response::IntoResponse};
use uuid::Uuid;

use crate::modules::events::use_cases::create_event::body::CreateEventBody;
use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    tracing::info!("create event endpoint called");

    let event_id = Uuid::new_v4();
    let CreateEventBody { title, description } = CreateEventBody::decode(&body);

    let command = CreateEvent {
        event_id,
        title,
        description,
    };

    let event = state.create_event_handler.handle(command).await;
    (StatusCode::CREATED, Json(event)).into_response()
}
