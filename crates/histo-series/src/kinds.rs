//! Kind markers for typed series and the traits relating them
//!
//! Every concrete series is a [`Series<K>`](crate::Series) tagged with one of
//! the uninhabited marker types below. The marker decides which validator
//! applies and which conversions are available:
//!
//! | kind                              | validator | domain    | representation |
//! |-----------------------------------|-----------|-----------|----------------|
//! | `BinEdgesKind`, `PointsKind`      | X         |           |                |
//! | `CountsKind`                      | E         | count     | value          |
//! | `FrequenciesKind`                 | E         | frequency | value          |
//! | `CountVariancesKind`              | E         | count     | variance       |
//! | `CountStandardDeviationsKind`     | E         | count     | std. deviation |
//! | `FrequencyVariancesKind`          | E         | frequency | variance       |
//! | `FrequencyStandardDeviationsKind` | E         | frequency | std. deviation |

use crate::validation::{EValidator, Validator, XValidator};

/// Identity of a typed series
pub trait SeriesKind: 'static {
    /// Human readable name used in error messages and logs
    const NAME: &'static str;

    /// Validity rule applied by [`is_valid`](crate::is_valid)
    type Validator: Validator;
}

/// A count-domain quantity that has a frequency-domain counterpart
///
/// `count[i] = frequency[i] * width[i]^WIDTH_POWER`
pub trait CountKind: SeriesKind {
    /// Power of the bin width relating this kind to its frequency form
    const WIDTH_POWER: i32;

    type Frequency: FrequencyKind;
}

/// A frequency-domain quantity that has a count-domain counterpart
///
/// `frequency[i] = count[i] / width[i]^WIDTH_POWER`
pub trait FrequencyKind: SeriesKind {
    /// Power of the bin width relating this kind to its count form
    const WIDTH_POWER: i32;

    type Count: CountKind;
}

/// Variance form of an uncertainty
pub trait VarianceKind: SeriesKind {
    type StandardDeviation: StandardDeviationKind;
}

/// Standard-deviation form of an uncertainty
pub trait StandardDeviationKind: SeriesKind {
    type Variance: VarianceKind;
}

/// Boundaries of N bins, N + 1 values
#[derive(Debug)]
pub enum BinEdgesKind {}

/// One X coordinate per data point
#[derive(Debug)]
pub enum PointsKind {}

#[derive(Debug)]
pub enum CountsKind {}

#[derive(Debug)]
pub enum FrequenciesKind {}

#[derive(Debug)]
pub enum CountVariancesKind {}

#[derive(Debug)]
pub enum CountStandardDeviationsKind {}

#[derive(Debug)]
pub enum FrequencyVariancesKind {}

#[derive(Debug)]
pub enum FrequencyStandardDeviationsKind {}

impl SeriesKind for BinEdgesKind {
    const NAME: &'static str = "BinEdges";
    type Validator = XValidator;
}

impl SeriesKind for PointsKind {
    const NAME: &'static str = "Points";
    type Validator = XValidator;
}

impl SeriesKind for CountsKind {
    const NAME: &'static str = "Counts";
    type Validator = EValidator;
}

impl SeriesKind for FrequenciesKind {
    const NAME: &'static str = "Frequencies";
    type Validator = EValidator;
}

impl SeriesKind for CountVariancesKind {
    const NAME: &'static str = "CountVariances";
    type Validator = EValidator;
}

impl SeriesKind for CountStandardDeviationsKind {
    const NAME: &'static str = "CountStandardDeviations";
    type Validator = EValidator;
}

impl SeriesKind for FrequencyVariancesKind {
    const NAME: &'static str = "FrequencyVariances";
    type Validator = EValidator;
}

impl SeriesKind for FrequencyStandardDeviationsKind {
    const NAME: &'static str = "FrequencyStandardDeviations";
    type Validator = EValidator;
}

// Domain pairs

impl CountKind for CountsKind {
    const WIDTH_POWER: i32 = 1;
    type Frequency = FrequenciesKind;
}

impl FrequencyKind for FrequenciesKind {
    const WIDTH_POWER: i32 = 1;
    type Count = CountsKind;
}

impl CountKind for CountStandardDeviationsKind {
    const WIDTH_POWER: i32 = 1;
    type Frequency = FrequencyStandardDeviationsKind;
}

impl FrequencyKind for FrequencyStandardDeviationsKind {
    const WIDTH_POWER: i32 = 1;
    type Count = CountStandardDeviationsKind;
}

impl CountKind for CountVariancesKind {
    const WIDTH_POWER: i32 = 2;
    type Frequency = FrequencyVariancesKind;
}

impl FrequencyKind for FrequencyVariancesKind {
    const WIDTH_POWER: i32 = 2;
    type Count = CountVariancesKind;
}

// Representation pairs

impl VarianceKind for CountVariancesKind {
    type StandardDeviation = CountStandardDeviationsKind;
}

impl StandardDeviationKind for CountStandardDeviationsKind {
    type Variance = CountVariancesKind;
}

impl VarianceKind for FrequencyVariancesKind {
    type StandardDeviation = FrequencyStandardDeviationsKind;
}

impl StandardDeviationKind for FrequencyStandardDeviationsKind {
    type Variance = FrequencyVariancesKind;
}
