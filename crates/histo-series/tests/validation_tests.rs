//! Validity of X data and of count-like data

mod common;

use common::special_values;
use histo_series::{
    is_valid, BinEdges, CountStandardDeviations, CountVariances, Counts, Frequencies,
    FrequencyStandardDeviations, FrequencyVariances, Points,
};

const DBL_MAX: f64 = f64::MAX;
const DBL_MIN: f64 = f64::MIN_POSITIVE;

#[test]
fn test_x_increasing() {
    assert!(is_valid(&BinEdges::from([1.0, 2.0])));
    assert!(is_valid(&Points::from([1.0, 2.0])));
}

#[test]
fn test_x_zero_width_bin() {
    assert!(!is_valid(&BinEdges::from([1.0, 2.0, 2.0, 3.0])));
    assert!(!is_valid(&Points::from([1.0, 2.0, 2.0, 3.0])));
}

#[test]
fn test_x_not_increasing() {
    assert!(!is_valid(&BinEdges::from([1.0, 3.0, 2.0, 4.0])));
    assert!(!is_valid(&Points::from([2.0, 1.0])));
}

#[test]
fn test_x_nan() {
    assert!(!is_valid(&BinEdges::from([f64::NAN, 1.0])));
    assert!(!is_valid(&BinEdges::from([0.0, f64::NAN])));
    assert!(!is_valid(&BinEdges::from([f64::NAN])));
}

#[test]
fn test_x_infinity() {
    assert!(!is_valid(&BinEdges::from([f64::INFINITY])));
    assert!(!is_valid(&BinEdges::from([f64::NEG_INFINITY])));
    assert!(!is_valid(&BinEdges::from([0.0, f64::INFINITY])));
    assert!(!is_valid(&Points::from([f64::NEG_INFINITY, 0.0])));
}

#[test]
fn test_x_denormal_gap() {
    assert!(!is_valid(&BinEdges::from([0.0, DBL_MIN / 2.0])));
    assert!(!is_valid(&Points::from([0.0, DBL_MIN / 2.0])));
}

#[test]
fn test_x_denormal_value() {
    assert!(is_valid(&BinEdges::from([DBL_MIN / 2.0])));
}

#[test]
fn test_x_range_limits() {
    assert!(is_valid(&BinEdges::from([-DBL_MAX / 2.0, DBL_MAX / 2.0])));
    assert!(!is_valid(&BinEdges::from([-DBL_MAX, DBL_MAX])));
}

#[test]
fn test_x_trivial_lengths() {
    assert!(is_valid(&BinEdges::empty()));
    assert!(is_valid(&Points::empty()));
    for value in special_values() {
        assert!(is_valid(&BinEdges::from([value])), "single edge {value:e}");
    }
}

#[test]
fn test_x_method_matches_free_function() {
    let edges = BinEdges::from([0.0, 1.0, 0.5]);
    assert_eq!(edges.is_valid(), is_valid(&edges));
}

/// Every E-kind series obeys the same rule
macro_rules! e_validity_tests {
    ($($name:ident: $series:ty,)*) => {
        $(
            mod $name {
                use super::*;

                #[test]
                fn negative() {
                    assert!(!is_valid(&<$series>::from([-1.0, 1.0, 1.0])));
                }

                #[test]
                fn nan() {
                    assert!(is_valid(&<$series>::from([f64::NAN])));
                }

                #[test]
                fn infinity() {
                    assert!(!is_valid(&<$series>::from([f64::INFINITY])));
                    assert!(!is_valid(&<$series>::from([f64::NEG_INFINITY])));
                }

                #[test]
                fn empty() {
                    assert!(is_valid(&<$series>::empty()));
                }

                #[test]
                fn ordinary() {
                    assert!(is_valid(&<$series>::from([0.0, 1.0, 0.5, DBL_MAX])));
                }
            }
        )*
    };
}

e_validity_tests! {
    counts: Counts,
    frequencies: Frequencies,
    count_variances: CountVariances,
    count_standard_deviations: CountStandardDeviations,
    frequency_variances: FrequencyVariances,
    frequency_standard_deviations: FrequencyStandardDeviations,
}

#[test]
fn test_construction_does_not_validate() {
    // Invalid data can exist; only the predicate reports it
    let edges = BinEdges::from([3.0, 2.0, 1.0]);
    let variances = CountVariances::from([-1.0]);
    assert_eq!(edges.len(), 3);
    assert_eq!(variances.len(), 1);
    assert!(!edges.is_valid());
    assert!(!variances.is_valid());
}
