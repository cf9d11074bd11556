//! Typed histogram data: bin edges, counts, frequencies and their uncertainties
//!
//! Every series is a fixed-length, copy-on-write [`Series<K>`] tagged with a
//! kind from [`kinds`]. The kind decides which validator applies and which
//! conversions exist between series.
//!
//! # Key Features
//!
//! - **Value semantics**: copies share storage, writes detach
//! - **Null vs. empty**: `Option<Series<K>>::None` is "not yet computed",
//!   an empty series is initialized data of length zero
//! - **Validation**: [`is_valid`] with the X rule for bin edges and points
//!   and the E rule for everything else
//! - **Conversions**: variance ↔ standard deviation, count ↔ frequency,
//!   and bin edges ↔ points
//!
//! # Examples
//!
//! ## Domain conversion
//!
//! ```rust
//! use histo_series::{BinEdges, CountStandardDeviations, FrequencyStandardDeviations};
//!
//! let edges = BinEdges::from([0.1, 0.2, 0.4]);
//! let counts = CountStandardDeviations::from([1.0, 2.0]);
//!
//! let frequencies = FrequencyStandardDeviations::from_counts(&counts, &edges).unwrap();
//! assert!((frequencies[0] - 10.0).abs() < 1e-14);
//! assert!((frequencies[1] - 10.0).abs() < 1e-14);
//!
//! let back = CountStandardDeviations::from_frequencies(&frequencies, &edges).unwrap();
//! assert!((back[1] - 2.0).abs() < 1e-14);
//! ```
//!
//! ## Null propagation and logic errors
//!
//! ```rust
//! use histo_series::{to_frequencies, BinEdges, CountVariances, Error};
//!
//! // A null source gives a null result, whatever the edges
//! let none: Option<&CountVariances> = None;
//! assert!(to_frequencies(none, None).unwrap().is_none());
//!
//! // A present source needs edges of matching length
//! let variances = CountVariances::from([1.0, 2.0]);
//! let err = to_frequencies(Some(&variances), None).unwrap_err();
//! assert!(matches!(err, Error::NullBinEdges { .. }));
//!
//! let short = BinEdges::from([0.0, 1.0]);
//! let err = to_frequencies(Some(&variances), Some(&short)).unwrap_err();
//! assert!(matches!(err, Error::SizeMismatch { .. }));
//! ```
//!
//! ## Validation
//!
//! ```rust
//! use histo_series::{is_valid, BinEdges, CountVariances};
//!
//! assert!(is_valid(&BinEdges::from([1.0, 2.0])));
//! assert!(!is_valid(&BinEdges::from([1.0, 2.0, 2.0, 3.0])));
//! assert!(is_valid(&CountVariances::from([f64::NAN])));
//! assert!(!is_valid(&CountVariances::from([-1.0, 1.0, 1.0])));
//! ```

pub mod axis;
pub mod conversion;
pub mod histogram;
pub mod kinds;
pub mod series;
pub mod validation;

// Re-export main types and traits
pub use axis::{to_bin_edges, to_points};
pub use conversion::{
    into_counts, into_frequencies, into_standard_deviations, into_variances, to_counts,
    to_frequencies, to_standard_deviations, to_variances, ConversionError, OwnedResult,
};
pub use histogram::{Histogram, XData};
pub use kinds::{CountKind, FrequencyKind, SeriesKind, StandardDeviationKind, VarianceKind};
pub use series::{
    BinEdges, CountStandardDeviations, CountVariances, Counts, Frequencies,
    FrequencyStandardDeviations, FrequencyVariances, Points, Series,
};
pub use validation::{is_valid, EValidator, Validator, XValidator};

pub use histo_core::{Error, Result, SharedBuffer, TransformConfig};
