//! HTTP route handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::protocol::parse_coordinate;
use super::AppState;
use crate::error::MoveError;
use crate::types::{Cell, Snapshot};

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status string.
    pub status: String,
    /// Open client connections.
    pub connections: usize,
}

/// Serve the bundled client page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Health check endpoint.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        connections: state.sessions.len(),
    })
}

/// Current snapshot, same payload as a `state` push.
pub async fn current_state(State(state): State<Arc<AppState>>) -> Json<Arc<Snapshot>> {
    Json(state.arena.snapshot())
}

/// Legal destinations of the piece on `row`/`col`.
///
/// Non-numeric segments are rejected as [`MoveError::BadCoordinates`].
pub async fn destinations(
    State(state): State<Arc<AppState>>,
    Path((row, col)): Path<(String, String)>,
) -> Result<Json<Vec<Cell>>, ApiError> {
    let (Some(row), Some(col)) = (parse_coordinate(&row), parse_coordinate(&col)) else {
        return Err(ApiError(MoveError::BadCoordinates));
    };
    let cells = state.arena.destinations_from(row, col)?;
    Ok(Json(cells))
}

/// A [`MoveError`] rendered as an HTTP response.
#[derive(Debug)]
pub struct ApiError(MoveError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            MoveError::NoPieceAtSource => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        };
        (
            status,
            Json(serde_json::json!({
                "code": self.0.code(),
                "message": self.0.to_string(),
            })),
        )
            .into_response()
    }
}

impl From<MoveError> for ApiError {
    fn from(err: MoveError) -> Self {
        Self(err)
    }
}
