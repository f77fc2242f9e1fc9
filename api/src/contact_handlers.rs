use arcade_shared::{ContactRequest, ContactSubmission};
use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::{state::AppState, validation::ValidatedJson};

pub async fn list_contacts(State(state): State<AppState>) -> Json<Vec<ContactSubmission>> {
    Json(state.store.contacts().list().await)
}

pub async fn submit_contact(
    State(state): State<AppState>,
    ValidatedJson(submission): ValidatedJson<ContactRequest>,
) -> Json<Value> {
    let stored = state.store.contacts().append(submission).await;
    tracing::info!(email = %stored.email, "contact message received");

    Json(json!({
        "success": true,
        "message": "Message received successfully!",
        "data": stored,
    }))
}
