//! Validity rules for X data and for count-like data
//!
//! Validation is advisory: series never validate themselves on
//! construction, callers check with [`is_valid`] at their boundaries.

use crate::kinds::SeriesKind;
use crate::series::Series;
use num_traits::Float;

/// A validity predicate over raw series values
pub trait Validator {
    fn is_valid(values: &[f64]) -> bool;
}

/// Rule for bin edges and points
///
/// All values finite and strictly increasing, with every adjacent gap a
/// normal floating-point number. A subnormal value is accepted, a subnormal
/// gap is not, and a gap that overflows to infinity is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct XValidator;

/// Rule for counts, frequencies, variances and standard deviations
///
/// No infinities and no negative values. NaN marks an unknown value and is
/// accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct EValidator;

impl XValidator {
    pub fn check<F: Float>(values: &[F]) -> bool {
        if !values.iter().all(|&v| v.is_finite()) {
            return false;
        }
        values.windows(2).all(|pair| {
            let gap = pair[1] - pair[0];
            gap > F::zero() && gap.is_normal()
        })
    }
}

impl EValidator {
    pub fn check<F: Float>(values: &[F]) -> bool {
        values
            .iter()
            .all(|&v| !v.is_infinite() && !(v < F::zero()))
    }
}

impl Validator for XValidator {
    fn is_valid(values: &[f64]) -> bool {
        Self::check(values)
    }
}

impl Validator for EValidator {
    fn is_valid(values: &[f64]) -> bool {
        Self::check(values)
    }
}

/// Check `series` against the rule its kind declares
pub fn is_valid<K: SeriesKind>(series: &Series<K>) -> bool {
    K::Validator::is_valid(series.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_trivial_lengths() {
        assert!(XValidator::check::<f64>(&[]));
        assert!(XValidator::check(&[1.0]));
        assert!(XValidator::check(&[-3.0]));
    }

    #[test]
    fn test_x_subnormal_value_is_fine() {
        assert!(XValidator::check(&[f64::MIN_POSITIVE / 2.0]));
        assert!(XValidator::check(&[f64::MIN_POSITIVE / 2.0, 1.0]));
    }

    #[test]
    fn test_x_subnormal_gap_is_not() {
        assert!(!XValidator::check(&[0.0, f64::MIN_POSITIVE / 2.0]));
        assert!(XValidator::check(&[0.0, f64::MIN_POSITIVE]));
    }

    #[test]
    fn test_x_tiny_relative_step() {
        let x = 1.0;
        assert!(XValidator::check(&[x, x + f64::EPSILON]));
    }

    #[test]
    fn test_x_works_for_f32() {
        assert!(XValidator::check(&[1.0f32, 2.0]));
        assert!(!XValidator::check(&[1.0f32, f32::NAN]));
    }

    #[test]
    fn test_e_negative_zero_is_not_negative() {
        assert!(EValidator::check(&[-0.0]));
    }

    #[test]
    fn test_e_large_values() {
        assert!(EValidator::check(&[f64::MAX, 0.0, f64::MIN_POSITIVE / 2.0]));
        assert!(!EValidator::check(&[f64::NEG_INFINITY]));
        assert!(!EValidator::check(&[-f64::MIN_POSITIVE]));
    }
}
