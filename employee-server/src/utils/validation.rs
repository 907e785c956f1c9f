//! Input validation helpers
//!
//! Custom validators plugged into `#[derive(Validate)]` and helpers that
//! turn [`ValidationErrors`] into API errors.

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

use crate::utils::AppError;

/// Reject strings that are empty after trimming.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::Borrowed("must not be empty"));
        return Err(err);
    }
    Ok(())
}

/// Reject non-positive or non-finite numbers.
pub fn validate_positive(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        let mut err = ValidationError::new("range");
        err.message = Some(Cow::Borrowed("must be greater than zero"));
        return Err(err);
    }
    Ok(())
}

/// Build an error for a field that was explicitly set to `null`.
pub fn null_field(field: &'static str) -> ValidationError {
    let mut err = ValidationError::new("null");
    err.message = Some(Cow::Owned(format!("{field} must not be null")));
    err
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}
