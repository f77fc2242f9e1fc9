//! Custom Axum extractors for validated input
//!
//! This module provides `ValidatedJson<T>`, a drop-in replacement for `Json<T>`
//! that validates incoming JSON payloads before the handler runs.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::ApiError;

/// A field-level validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validation failure carrying every violated rule, in schema field order.
///
/// Only the first error reaches the client; the rest are kept for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError::new(field, message)],
        }
    }

    pub fn first(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    pub fn message(&self) -> &str {
        self.first()
            .map(|e| e.message.as_str())
            .unwrap_or("Validation failed")
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}

/// Trait for request schemas that can be validated and turned into a domain
/// value
pub trait Validatable: Sized {
    type Output;

    /// Validate the data and return any field errors
    fn validate(&self) -> Result<(), Vec<FieldError>>;

    /// Build the normalized value. Only called after `validate` succeeded.
    fn into_output(self) -> Self::Output;

    fn into_valid(self) -> Result<Self::Output, ValidationError> {
        if let Err(errors) = self.validate() {
            tracing::debug!(?errors, "request payload rejected");
            return Err(ValidationError::new(errors));
        }
        Ok(self.into_output())
    }
}

/// Convert a JSON body rejection into a single body-level validation error
pub fn json_rejection_error(err: JsonRejection) -> ValidationError {
    let message = match err {
        // Every schema field is untyped, so only a non-object body fails here
        JsonRejection::JsonDataError(_) => "\"value\" must be of type object".to_string(),
        JsonRejection::JsonSyntaxError(e) => format!("JSON syntax error: {}", e.body_text()),
        JsonRejection::MissingJsonContentType(_) => {
            "Content-Type must be application/json".to_string()
        }
        JsonRejection::BytesRejection(_) => "Failed to read request body".to_string(),
        _ => "Invalid JSON payload".to_string(),
    };
    ValidationError::single("body", message)
}

/// JSON extractor that yields the validated output of `T`
///
/// 1. Parse JSON from the request body
/// 2. Validate fields against the schema rules
/// 3. Reject with 400 `{success:false, error}` on the first violated rule
pub struct ValidatedJson<T: Validatable>(pub T::Output);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validatable + Send,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection_error)?;

        data.into_valid().map(ValidatedJson)
    }
}

/// Builder for accumulating validation errors
#[derive(Debug, Default)]
pub struct ValidationBuilder {
    errors: Vec<FieldError>,
}

impl ValidationBuilder {
    pub fn new() -> Self {
        Self { errors: vec![] }
    }

    /// Add an error if the result is Err
    pub fn check<F>(&mut self, field: &str, validator: F) -> &mut Self
    where
        F: FnOnce() -> Result<(), String>,
    {
        if let Err(message) = validator() {
            self.errors.push(FieldError::new(field, message));
        }
        self
    }

    pub fn build(self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}
