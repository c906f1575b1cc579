use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{any, get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::events::use_cases::create_event::inbound::http as create_http;
use crate::modules::events::use_cases::list_events::inbound::http as list_http;
use crate::modules::status::inbound::http as status_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", any(status_http::home))
        .route("/healt-check", get(status_http::health_check))
        .route("/events", get(list_http::handle))
        .route(
            "/event",
            post(create_http::handle).layer(DefaultBodyLimit::disable()),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
