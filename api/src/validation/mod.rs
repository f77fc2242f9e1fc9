//! Input Validation Module
//!
//! Every write payload is validated at the boundary before any domain value is
//! built or any collection is touched. Accepted values are stored exactly as
//! the client sent them.
//!
//! # Overview
//!
//! 1. **Extractors** - `ValidatedJson<T>` and the `Validatable` trait
//! 2. **Validators** - reusable rule functions (type, presence, length, email, unknown keys)
//! 3. **Requests** - `Validatable` impls for the catalog, feedback and contact schemas
//!
//! # Validation Error Response
//!
//! Only the first violated rule is reported:
//!
//! ```json
//! { "success": false, "error": "\"feedback\" length must be at least 10 characters long" }
//! ```

pub mod extractors;
pub mod requests;
pub mod validators;

pub use extractors::{
    json_rejection_error, FieldError, Validatable, ValidatedJson, ValidationBuilder,
    ValidationError,
};
pub use validators::{
    validate_email, validate_length, validate_no_unknown, validate_string, validate_string_list,
    validate_text,
};
