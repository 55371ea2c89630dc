//! Domain error types.
//!
//! Profiles validate their inputs at construction time. A failure here is
//! always a caller-input problem and is never defaulted away.

/// A physical parameter that violates its invariant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid {name}: {value} (must be {constraint})")]
pub struct InvalidParameter {
    name: &'static str,
    value: f64,
    constraint: &'static str,
}

impl InvalidParameter {
    /// Create an error for the named parameter.
    pub fn new(name: &'static str, value: f64, constraint: &'static str) -> Self {
        Self {
            name,
            value,
            constraint,
        }
    }

    /// Name of the offending parameter.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The rejected value.
    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Accept only finite values strictly greater than zero.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64, InvalidParameter> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(InvalidParameter::new(name, value, "positive and finite"))
    }
}

/// Accept only finite values greater than or equal to zero.
pub(crate) fn require_non_negative(
    name: &'static str,
    value: f64,
) -> Result<f64, InvalidParameter> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(InvalidParameter::new(name, value, "non-negative and finite"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = InvalidParameter::new("accel_rate", 0.0, "positive and finite");
        assert_eq!(
            err.to_string(),
            "invalid accel_rate: 0 (must be positive and finite)"
        );

        let err = InvalidParameter::new("headway", -30.0, "non-negative and finite");
        assert_eq!(
            err.to_string(),
            "invalid headway: -30 (must be non-negative and finite)"
        );
    }

    #[test]
    fn positive_bounds() {
        assert_eq!(require_positive("x", 1.5), Ok(1.5));
        assert!(require_positive("x", 0.0).is_err());
        assert!(require_positive("x", -1.0).is_err());
        assert!(require_positive("x", f64::NAN).is_err());
        assert!(require_positive("x", f64::INFINITY).is_err());
    }

    #[test]
    fn non_negative_bounds() {
        assert_eq!(require_non_negative("x", 0.0), Ok(0.0));
        assert_eq!(require_non_negative("x", 12.0), Ok(12.0));
        assert!(require_non_negative("x", -0.1).is_err());
        assert!(require_non_negative("x", f64::NAN).is_err());
        assert!(require_non_negative("x", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn accessors() {
        let err = require_positive("walk_speed", -2.0).unwrap_err();
        assert_eq!(err.name(), "walk_speed");
        assert_eq!(err.value(), -2.0);
    }
}
