//! Validation implementations for API request types
//!
//! This module implements the `Validatable` trait for every write payload the
//! API accepts. Fields are checked in schema order, then unknown keys, so the
//! first reported error matches what clients have always seen.

use arcade_shared::models::{
    CatalogDraft, CatalogItemRequest, ContactRequest, ContactSubmission, FeedbackDraft,
    FeedbackRequest,
};
use serde_json::Value;

use super::extractors::{FieldError, Validatable, ValidationBuilder};
use super::validators::{
    validate_email, validate_no_unknown, validate_string, validate_string_list, validate_text,
};

// ─────────────────────────────────────────────────────────────────────────────
// Constants for validation rules
// ─────────────────────────────────────────────────────────────────────────────

const MIN_NAME_LENGTH: usize = 2;
const MAX_NAME_LENGTH: usize = 50;
const MIN_FEEDBACK_LENGTH: usize = 10;
const MAX_FEEDBACK_LENGTH: usize = 300;
const MIN_MESSAGE_LENGTH: usize = 3;
const MAX_MESSAGE_LENGTH: usize = 500;

/// Keys a client may echo back from a fetched item. The id comes from the path
/// and the image only changes through an upload, so both are ignored.
const CATALOG_ECHOED_KEYS: &[&str] = &["_id", "img"];

/// Take a field that already passed validation
fn into_text(value: Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s,
        _ => String::new(),
    }
}

fn into_text_list(value: Option<Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// CatalogItemRequest validation
// ─────────────────────────────────────────────────────────────────────────────

impl Validatable for CatalogItemRequest {
    type Output = CatalogDraft;

    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut builder = ValidationBuilder::new();

        builder.check("name", || validate_string(self.name.as_ref(), "name").map(drop));
        builder.check("price", || validate_string(self.price.as_ref(), "price").map(drop));
        builder.check("description", || {
            validate_string(self.description.as_ref(), "description").map(drop)
        });
        builder.check("rating", || validate_string(self.rating.as_ref(), "rating").map(drop));
        builder.check("reviews", || validate_string_list(self.reviews.as_ref(), "reviews"));
        builder.check("body", || validate_no_unknown(&self.unknown, CATALOG_ECHOED_KEYS));

        builder.build()
    }

    fn into_output(self) -> CatalogDraft {
        CatalogDraft {
            name: into_text(self.name),
            price: into_text(self.price),
            description: into_text(self.description),
            rating: into_text(self.rating),
            reviews: into_text_list(self.reviews),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// FeedbackRequest validation
// ─────────────────────────────────────────────────────────────────────────────

impl Validatable for FeedbackRequest {
    type Output = FeedbackDraft;

    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut builder = ValidationBuilder::new();

        builder.check("name", || {
            validate_text(self.name.as_ref(), "name", MIN_NAME_LENGTH, MAX_NAME_LENGTH)
        });
        builder.check("feedback", || {
            validate_text(
                self.feedback.as_ref(),
                "feedback",
                MIN_FEEDBACK_LENGTH,
                MAX_FEEDBACK_LENGTH,
            )
        });
        builder.check("body", || validate_no_unknown(&self.unknown, &[]));

        builder.build()
    }

    fn into_output(self) -> FeedbackDraft {
        FeedbackDraft {
            name: into_text(self.name),
            feedback: into_text(self.feedback),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ContactRequest validation
// ─────────────────────────────────────────────────────────────────────────────

impl Validatable for ContactRequest {
    type Output = ContactSubmission;

    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut builder = ValidationBuilder::new();

        builder.check("name", || {
            validate_text(self.name.as_ref(), "name", MIN_NAME_LENGTH, MAX_NAME_LENGTH)
        });
        builder.check("email", || {
            let email = validate_string(self.email.as_ref(), "email")?;
            validate_email(email, "email")
        });
        builder.check("message", || {
            validate_text(
                self.message.as_ref(),
                "message",
                MIN_MESSAGE_LENGTH,
                MAX_MESSAGE_LENGTH,
            )
        });
        builder.check("body", || validate_no_unknown(&self.unknown, &[]));

        builder.build()
    }

    fn into_output(self) -> ContactSubmission {
        ContactSubmission {
            name: into_text(self.name),
            email: into_text(self.email),
            message: into_text(self.message),
        }
    }
}
