use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use super::handlers::{current_state, destinations, health, index};
use super::ws::ws_upgrade;
use super::AppState;

/// Create the HTTP router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        // Pull-based state query
        .route("/state", get(current_state))
        .route("/moves/:row/:col", get(destinations))
        // Persistent channel
        .route("/ws", get(ws_upgrade))
        .with_state(state)
}
