use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::{error::ApiError, state::AppState};

pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let uptime = state.started_at.elapsed().as_secs();
    let now = chrono::Utc::now().to_rfc3339();
    let catalog = state.store.catalog();

    match catalog.count().await {
        Ok(items) => {
            tracing::debug!(uptime_secs = uptime, "health check passed");
            (
                StatusCode::OK,
                Json(json!({
                    "status": "ok",
                    "backend": catalog.backend(),
                    "catalog_items": items,
                    "timestamp": now,
                    "uptime_secs": uptime
                })),
            )
        }
        Err(err) => {
            tracing::warn!(uptime_secs = uptime, error = %err, "health check degraded, catalog unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "backend": catalog.backend(),
                    "timestamp": now,
                    "uptime_secs": uptime
                })),
            )
        }
    }
}

pub async fn route_not_found() -> ApiError {
    ApiError::not_found("Route not found.")
}
