//! Internal helpers for command validation and conversion.
//!
//! These utilities are **not** part of the public API. Every command goes
//! through them once, before the store is touched, so a command either turns
//! into a complete record or is rejected with [`EngineError::InvalidInput`].

use uuid::Uuid;

use crate::{EngineError, ResultEngine, money};

/// Upper bound accepted for a single price.
pub(crate) const MAX_PRICE: f64 = 1_000_000.0;
/// Upper bound accepted for a line item quantity.
pub(crate) const MAX_QUANTITY: i64 = 9_999;

/// Generate a fresh opaque identifier.
pub(crate) fn new_id() -> String {
    Uuid::new_v4().to_string()
}

pub(crate) fn require<T>(value: Option<T>, field: &str) -> ResultEngine<T> {
    value.ok_or_else(|| EngineError::InvalidInput(format!("{field} is required")))
}

/// A required text field: present and non-blank once trimmed.
pub(crate) fn require_text(value: Option<String>, field: &str) -> ResultEngine<String> {
    normalize_optional_text(value)
        .ok_or_else(|| EngineError::InvalidInput(format!("{field} must not be empty")))
}

pub(crate) fn normalize_optional_text(value: Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// Check a text length in characters, bounds inclusive.
pub(crate) fn validate_len(value: &str, field: &str, min: usize, max: usize) -> ResultEngine<()> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(EngineError::InvalidInput(format!(
            "{field} must be between {min} and {max} characters"
        )));
    }
    Ok(())
}

/// Validate a price and return it normalized to two decimals.
pub(crate) fn validate_price(value: f64, field: &str) -> ResultEngine<f64> {
    if !value.is_finite() {
        return Err(EngineError::InvalidInput(format!(
            "{field} must be a finite number"
        )));
    }
    if value < 0.0 {
        return Err(EngineError::InvalidInput(format!(
            "{field} must be non-negative"
        )));
    }
    if value > MAX_PRICE {
        return Err(EngineError::InvalidInput(format!(
            "{field} exceeds maximum allowed ({MAX_PRICE})"
        )));
    }
    Ok(money::normalize(value, money::PRICE_PRECISION))
}

pub(crate) fn validate_quantity(value: i64) -> ResultEngine<i64> {
    if value < 0 {
        return Err(EngineError::InvalidInput(
            "quantity must be non-negative".to_string(),
        ));
    }
    if value > MAX_QUANTITY {
        return Err(EngineError::InvalidInput(format!(
            "quantity exceeds maximum allowed ({MAX_QUANTITY})"
        )));
    }
    Ok(value)
}

/// Table numbers and guest counts are small positive integers.
pub(crate) fn validate_positive(value: i32, field: &str) -> ResultEngine<i32> {
    if value <= 0 {
        return Err(EngineError::InvalidInput(format!("{field} must be > 0")));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_is_normalized() {
        assert_eq!(validate_price(4.999, "price"), Ok(5.0));
        assert_eq!(validate_price(3.335, "price"), Ok(3.34));
    }

    #[test]
    fn rejects_bad_prices() {
        assert!(validate_price(-0.01, "price").is_err());
        assert!(validate_price(f64::NAN, "price").is_err());
        assert!(validate_price(MAX_PRICE + 1.0, "price").is_err());
    }

    #[test]
    fn blank_text_is_missing() {
        assert_eq!(
            require_text(Some("   ".to_string()), "name"),
            Err(EngineError::InvalidInput("name must not be empty".to_string()))
        );
        assert_eq!(require_text(Some(" Pizza ".to_string()), "name"), Ok("Pizza".to_string()));
    }

    #[test]
    fn quantity_bounds() {
        assert_eq!(validate_quantity(0), Ok(0));
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(MAX_QUANTITY + 1).is_err());
    }
}
