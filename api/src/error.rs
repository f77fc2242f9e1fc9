use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use uuid::Uuid;

use crate::store::StoreError;
use crate::validation::ValidationError;

/// Error surfaced to HTTP clients as `{success: false, ...}`.
///
/// Not-found responses carry their text under `message`; every other failure
/// uses `error`. Existing frontends match on both shapes.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::bad_request(err.message())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "store operation failed");
        Self::internal("An unexpected error occurred")
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!(error = %err, "image storage failed");
        Self::internal("An unexpected error occurred")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let correlation_id = Uuid::new_v4().to_string();
        let key = if self.status == StatusCode::NOT_FOUND {
            "message"
        } else {
            "error"
        };

        if self.status.is_server_error() {
            tracing::error!(%correlation_id, status = self.status.as_u16(), message = %self.message, "request failed");
        } else {
            tracing::debug!(%correlation_id, status = self.status.as_u16(), message = %self.message, "request rejected");
        }

        let mut body = serde_json::Map::new();
        body.insert("success".into(), json!(false));
        body.insert(key.into(), json!(self.message));

        let mut response = (self.status, Json(body)).into_response();
        if let Ok(value) = HeaderValue::from_str(&correlation_id) {
            response
                .headers_mut()
                .insert(header::HeaderName::from_static("x-correlation-id"), value);
        }
        response
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
