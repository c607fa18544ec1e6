//! Monetary helpers.
//!
//! Prices travel as `f64` (JSON numbers), but every price is rounded to
//! [`PRICE_PRECISION`] decimal places before it is stored or echoed back.
//! Arithmetic on amounts (line totals, order totals) goes through [`Decimal`]
//! so sums do not pick up floating-point drift.

use rust_decimal::{Decimal, RoundingStrategy, prelude::FromPrimitive};

/// Number of decimal places every stored price carries.
pub const PRICE_PRECISION: u32 = 2;

/// Rounds `amount` to `precision` decimal places, half away from zero.
///
/// Non-finite values and magnitudes outside the decimal range come back
/// unchanged.
///
/// # Examples
///
/// ```rust
/// use engine::normalize;
///
/// assert_eq!(normalize(2.345, 2), 2.35);
/// assert_eq!(normalize(-2.345, 2), -2.35);
/// assert_eq!(normalize(0.5, 0), 1.0);
/// assert_eq!(normalize(-0.5, 0), -1.0);
/// ```
#[must_use]
pub fn normalize(amount: f64, precision: u32) -> f64 {
    let Some(value) = to_decimal(amount) else {
        return amount;
    };
    from_decimal(value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero))
        .unwrap_or(amount)
}

/// Converts a float into a [`Decimal`].
///
/// The shortest round-trip text of the float is parsed first, so `2.345` is
/// read as written and not as `2.34499…`.
pub(crate) fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    value
        .to_string()
        .parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_f64(value))
}

/// Text round trip again, so the float is the one nearest to the decimal.
fn from_decimal(value: Decimal) -> Option<f64> {
    value.to_string().parse().ok()
}

/// Converts a decimal amount back to a price, rounded to [`PRICE_PRECISION`].
pub(crate) fn to_price(value: Decimal) -> f64 {
    from_decimal(value.round_dp_with_strategy(
        PRICE_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    ))
    .unwrap_or_default()
}

/// `unit_price * quantity`, or `None` when the product does not fit.
pub(crate) fn line_amount(unit_price: f64, quantity: i64) -> Option<Decimal> {
    to_decimal(unit_price)?.checked_mul(Decimal::from(quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(normalize(2.345, 2), 2.35);
        assert_eq!(normalize(-2.345, 2), -2.35);
        assert_eq!(normalize(1.005, 2), 1.01);
        assert_eq!(normalize(2.5, 0), 3.0);
        assert_eq!(normalize(-2.5, 0), -3.0);
        assert_eq!(normalize(2.344, 2), 2.34);
    }

    #[test]
    fn normalize_is_idempotent() {
        for value in [0.0, 0.1, 2.345, -7.125, 13.333_333, 99.995, 1e9 + 0.555, -0.004] {
            let once = normalize(value, 2);
            assert_eq!(normalize(once, 2), once, "value {value}");
        }
    }

    #[test]
    fn other_precisions() {
        assert_eq!(normalize(1.23456, 3), 1.235);
        assert_eq!(normalize(1234.5, 0), 1235.0);
        assert_eq!(normalize(9.999, 2), 10.0);
    }

    #[test]
    fn huge_and_non_finite_values_pass_through() {
        assert_eq!(normalize(1e300, 2), 1e300);
        assert_eq!(normalize(-1e300, 2), -1e300);
        assert_eq!(normalize(1e20, 2), 1e20);
        assert!(normalize(f64::NAN, 2).is_nan());
        assert_eq!(normalize(f64::INFINITY, 2), f64::INFINITY);
    }

    #[test]
    fn line_amount_multiplies_without_drift() {
        let amount = line_amount(0.1, 3).unwrap();
        assert_eq!(amount.to_string(), "0.3");
        assert_eq!(to_price(amount), 0.3);
        assert!(line_amount(f64::NAN, 1).is_none());
    }
}
