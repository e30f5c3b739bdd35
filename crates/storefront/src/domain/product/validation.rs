//! Validation helpers for product drafts.

use super::ProductValidationError;

pub(super) fn validate_name(value: Option<String>) -> Result<String, ProductValidationError> {
    match value {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => Err(ProductValidationError::MissingName),
    }
}

pub(super) fn ensure_price(value: f64, field: &'static str) -> Result<(), ProductValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ProductValidationError::InvalidPrice { field, value });
    }
    Ok(())
}
