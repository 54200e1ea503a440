/// An error type for the vector and matrix operations.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// The divisor of a scalar division was exactly zero.
    #[error("division by zero")]
    DivideByZero,
}

/// Returns `1.0 / divisor`, or [`MathError::DivideByZero`] when the divisor is exactly zero.
///
/// Both `0.0` and `-0.0` are rejected. No epsilon is applied: tiny divisors,
/// infinities and NaN are passed through to the floating-point arithmetic.
pub(crate) fn reciprocal(divisor: f64) -> Result<f64, MathError> {
    if divisor == 0.0 {
        log::debug!("rejecting scalar division by {divisor}");
        return Err(MathError::DivideByZero);
    }
    Ok(1.0 / divisor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reciprocal() {
        assert_eq!(reciprocal(2.0), Ok(0.5));
        assert_eq!(reciprocal(-4.0), Ok(-0.25));
        assert_eq!(reciprocal(f64::INFINITY), Ok(0.0));
    }

    #[test]
    fn test_reciprocal_of_zero() {
        assert_eq!(reciprocal(0.0), Err(MathError::DivideByZero));
        assert_eq!(reciprocal(-0.0), Err(MathError::DivideByZero));
    }

    #[test]
    fn test_reciprocal_of_nan_is_not_an_error() -> Result<(), MathError> {
        assert!(reciprocal(f64::NAN)?.is_nan());
        assert!(reciprocal(f64::MIN_POSITIVE)?.is_finite());
        Ok(())
    }

    #[test]
    fn test_error_message() {
        assert_eq!(MathError::DivideByZero.to_string(), "division by zero");
    }
}
