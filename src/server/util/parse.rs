//! Request field validation helpers.
//!
//! Request DTOs carry every field as `Option` so that missing input can be reported with
//! the standard `400` envelope. These helpers turn those raw fields into the checked
//! values stored by the repositories.

use crate::server::error::AppError;

/// Extracts a required, non-blank string field.
///
/// Surrounding whitespace is trimmed before the emptiness check and the trimmed value
/// is returned.
///
/// # Arguments
/// - `field` - Field name used in the error message
/// - `value` - Raw value from the request body
///
/// # Returns
/// - `Ok(String)` - Trimmed, non-empty value
/// - `Err(AppError::BadRequest)` - Field absent or blank
pub fn required_string(field: &str, value: Option<String>) -> Result<String, AppError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::BadRequest(format!("{} is required.", field))),
    }
}

/// Normalizes an optional string field, treating blank values as absent.
pub fn optional_string(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Validates an optional integer field that must be non-negative and fit in `i32`.
///
/// # Returns
/// - `Ok(Option<i32>)` - Value within range, or `None` when absent
/// - `Err(AppError::BadRequest)` - Negative or larger than `i32::MAX`
pub fn non_negative_i32(field: &str, value: Option<i64>) -> Result<Option<i32>, AppError> {
    match value {
        None => Ok(None),
        Some(v) if v < 0 => Err(negative(field)),
        Some(v) => i32::try_from(v)
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("{} is out of range.", field))),
    }
}

/// Validates an optional 64-bit integer field that must be non-negative.
pub fn non_negative_i64(field: &str, value: Option<i64>) -> Result<Option<i64>, AppError> {
    match value {
        Some(v) if v < 0 => Err(negative(field)),
        other => Ok(other),
    }
}

/// Validates an optional floating point field that must be finite and non-negative.
pub fn non_negative_f64(field: &str, value: Option<f64>) -> Result<Option<f64>, AppError> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(negative(field)),
        other => Ok(other),
    }
}

/// Extracts a required identifier field from a request body.
pub fn required_id(field: &str, value: Option<i32>) -> Result<i32, AppError> {
    value.ok_or_else(|| AppError::BadRequest(format!("{} is required.", field)))
}

fn negative(field: &str) -> AppError {
    AppError::BadRequest(format!("{} must be a non-negative number.", field))
}
