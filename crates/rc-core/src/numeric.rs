use crate::RcError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-300,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, RcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(RcError::NonFinite { what, value: v })
    }
}

/// Strictly positive and finite, as required of every conversion factor.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, RcError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(RcError::InvalidArg { what })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millisievert_doses_within_rounding_are_equal() {
        let tol = Tolerances::default();
        // 5 mSv after a trip through rem and back
        assert!(nearly_equal(0.005, 0.005 * (1.0 + 1e-12), tol));
        assert!(!nearly_equal(0.005, 0.0051, tol));
        assert!(nearly_equal(0.0, 0.0, tol));
    }

    #[test]
    fn default_tolerance_is_relative_for_tiny_doses() {
        // banana-scale doses must not compare equal just because they are small
        let tol = Tolerances::default();
        assert!(!nearly_equal(1e-7, 2e-7, tol));
        assert!(nearly_equal(1e-7, 1e-7 * (1.0 + 1e-12), tol));
    }

    #[test]
    fn ensure_finite_rejects_overflowed_dose() {
        let overflowed = 1.0e305 / 1.0e-7;
        let err = ensure_finite(overflowed, "converted value").unwrap_err();
        assert_eq!(
            err,
            RcError::NonFinite {
                what: "converted value",
                value: Real::INFINITY,
            }
        );
        assert_eq!(err.to_string(), "Non-finite numeric value for converted value: inf");

        assert_eq!(ensure_finite(0.07, "converted value"), Ok(0.07));
    }

    #[test]
    fn ensure_positive_rejects_zero_and_negative() {
        assert!(matches!(
            ensure_positive(0.0, "factor"),
            Err(RcError::InvalidArg { what: "factor" })
        ));
        assert!(ensure_positive(-1.0, "factor").is_err());
        assert!(matches!(
            ensure_positive(Real::INFINITY, "factor"),
            Err(RcError::NonFinite { .. })
        ));
        assert_eq!(ensure_positive(1e-10, "factor"), Ok(1e-10));
    }
}
