use arcade_shared::{FeedbackEntry, FeedbackRequest};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
    validation::{json_rejection_error, Validatable, ValidatedJson},
};

const FEEDBACK_NOT_FOUND: &str = "Feedback not found.";

/// Non-numeric ids can never match an entry
fn parse_feedback_id(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

pub async fn list_feedback(State(state): State<AppState>) -> Json<Vec<FeedbackEntry>> {
    Json(state.store.feedback().list().await)
}

pub async fn create_feedback(
    State(state): State<AppState>,
    ValidatedJson(draft): ValidatedJson<FeedbackRequest>,
) -> (StatusCode, Json<Value>) {
    let entry = state.store.feedback().create(draft).await;
    tracing::info!(id = entry.id, "feedback added");

    (
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Feedback added!",
            "data": entry,
        })),
    )
}

/// Replace an entry. An unknown id wins over any problem with the body.
pub async fn update_feedback(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<FeedbackRequest>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let board = state.store.feedback();
    let id = match parse_feedback_id(&raw_id) {
        Some(id) if board.contains(id).await => id,
        _ => return Err(ApiError::not_found(FEEDBACK_NOT_FOUND)),
    };

    let Json(request) = body.map_err(json_rejection_error)?;
    let draft = request.into_valid()?;

    let entry = board
        .update(id, draft)
        .await
        .ok_or_else(|| ApiError::not_found(FEEDBACK_NOT_FOUND))?;
    tracing::info!(id, "feedback updated");

    Ok(Json(json!({
        "success": true,
        "message": "Feedback updated!",
        "data": entry,
    })))
}

pub async fn delete_feedback(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Value>> {
    let removed = match parse_feedback_id(&raw_id) {
        Some(id) => state.store.feedback().remove(id).await,
        None => false,
    };
    if !removed {
        return Err(ApiError::not_found(FEEDBACK_NOT_FOUND));
    }
    tracing::info!(id = %raw_id, "feedback deleted");

    Ok(Json(json!({
        "success": true,
        "message": "Feedback deleted!",
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_feedback_id() {
        assert_eq!(parse_feedback_id("1"), Some(1));
        assert_eq!(parse_feedback_id("abc"), None);
        assert_eq!(parse_feedback_id("-3"), None);
        assert_eq!(parse_feedback_id("1.5"), None);
    }
}
