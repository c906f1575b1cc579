use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::events::adapters::outbound::event_store::EventQueries;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    tracing::info!("list events endpoint called");
    Json(state.queries.list_all().await)
}
