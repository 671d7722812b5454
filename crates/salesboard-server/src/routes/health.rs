use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::state::AppState;

/// `GET /health` - liveness check.
///
/// Returns `200 OK` when the engine answers `SELECT 1`, `503 Service
/// Unavailable` otherwise (pool exhausted, database file unreadable).
///
/// Response shape:
/// ```json
/// { "status": "ok", "timestamp": "2024-01-01T00:00:00Z" }
/// ```
#[tracing::instrument(skip(state))]
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let timestamp = chrono::Utc::now().to_rfc3339();
    match state.analytics.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": timestamp
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Health check: database unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": timestamp
                })),
            )
                .into_response()
        }
    }
}
