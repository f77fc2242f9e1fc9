//! Field validators for input validation
//!
//! Messages quote the field name the way the storefront frontend expects,
//! e.g. `"name" length must be at least 2 characters long`.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};

lazy_static! {
    /// Address with a dotted domain and a top-level label of two or more letters
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$"
    ).unwrap();
}

/// Validate that a string was supplied and is not empty, returning it as-is
pub fn validate_string<'a>(value: Option<&'a Value>, field: &str) -> Result<&'a str, String> {
    match value {
        None => Err(format!("\"{}\" is required", field)),
        Some(Value::String(s)) if s.is_empty() => {
            Err(format!("\"{}\" is not allowed to be empty", field))
        }
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(format!("\"{}\" must be a string", field)),
    }
}

/// Validate string length within inclusive bounds, counted in characters
pub fn validate_length(value: &str, field: &str, min: usize, max: usize) -> Result<(), String> {
    let len = value.chars().count();
    if len < min {
        return Err(format!(
            "\"{}\" length must be at least {} characters long",
            field, min
        ));
    }
    if len > max {
        return Err(format!(
            "\"{}\" length must be less than or equal to {} characters long",
            field, max
        ));
    }
    Ok(())
}

/// Required string with inclusive length bounds
pub fn validate_text(value: Option<&Value>, field: &str, min: usize, max: usize) -> Result<(), String> {
    let text = validate_string(value, field)?;
    validate_length(text, field, min, max)
}

/// Optional array whose every element is a string
pub fn validate_string_list(value: Option<&Value>, field: &str) -> Result<(), String> {
    match value {
        None => Ok(()),
        Some(Value::Array(items)) => match items.iter().position(|item| !item.is_string()) {
            Some(index) => Err(format!("\"{}[{}]\" must be a string", field, index)),
            None => Ok(()),
        },
        Some(_) => Err(format!("\"{}\" must be an array", field)),
    }
}

/// Reject the first key that is not part of the schema. Keys in `tolerated`
/// are accepted and ignored.
pub fn validate_no_unknown(unknown: &Map<String, Value>, tolerated: &[&str]) -> Result<(), String> {
    match unknown.keys().find(|key| !tolerated.contains(&key.as_str())) {
        Some(key) => Err(format!("\"{}\" is not allowed", key)),
        None => Ok(()),
    }
}

/// Validate email address format
pub fn validate_email(value: &str, field: &str) -> Result<(), String> {
    if value.len() > 254 || !EMAIL_REGEX.is_match(value) {
        return Err(format!("\"{}\" must be a valid email", field));
    }
    let local = value.split('@').next().unwrap_or_default();
    if local.len() > 64 {
        return Err(format!("\"{}\" must be a valid email", field));
    }
    Ok(())
}
