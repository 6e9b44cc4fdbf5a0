//! Numeric input validation.
//!
//! Every raw number that enters the engine passes through [`validate_number`]
//! before it is used in a formula. The check rejects non-finite values (a NaN
//! or infinity can only come from a failed upstream coercion) and, when
//! requested, values that are not strictly positive.

use crate::errors::{CalcError, CalcResult};

/// Validate that a value is a usable number, optionally strictly positive.
///
/// # Arguments
///
/// * `value` - Raw numeric value
/// * `field` - Field name used in the error message
/// * `positive` - When true, values <= 0 are rejected
///
/// # Example
///
/// ```rust
/// use axial_core::validation::validate_number;
///
/// assert_eq!(validate_number(3.0, "height_m", true).unwrap(), 3.0);
/// assert!(validate_number(-1.0, "height_m", true).is_err());
/// assert!(validate_number(f64::NAN, "height_m", false).is_err());
/// ```
pub fn validate_number(value: f64, field: &str, positive: bool) -> CalcResult<f64> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Must be a valid number",
        ));
    }

    if positive && value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Must be greater than zero",
        ));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_positive() {
        assert_eq!(validate_number(0.04, "area_m2", true).unwrap(), 0.04);
    }

    #[test]
    fn test_rejects_zero_when_positive_required() {
        let err = validate_number(0.0, "area_m2", true).unwrap_err();
        match err {
            CalcError::InvalidInput { field, value, .. } => {
                assert_eq!(field, "area_m2");
                assert_eq!(value, "0");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_negative_when_positive_required() {
        assert!(validate_number(-3.5, "height_m", true).is_err());
    }

    #[test]
    fn test_allows_nonpositive_when_not_required() {
        assert_eq!(validate_number(-3.5, "margin_kn", false).unwrap(), -3.5);
        assert_eq!(validate_number(0.0, "margin_kn", false).unwrap(), 0.0);
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(validate_number(f64::NAN, "height_m", true).is_err());
        assert!(validate_number(f64::INFINITY, "height_m", true).is_err());
        assert!(validate_number(f64::NEG_INFINITY, "height_m", false).is_err());
    }
}
