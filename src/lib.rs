//! Histogram data model: bin edges, counts, frequencies and their uncertainties
//!
//! This crate re-exports the histo-data workspace:
//!
//! - [`histo_core`]: copy-on-write storage, error type and transform tuning
//! - [`histo_series`]: typed series, validation, conversions and [`Histogram`]
//!
//! # Example
//!
//! ```rust
//! use histo_data::{BinEdges, Counts, CountStandardDeviations, Histogram};
//!
//! let histogram = Histogram::new(BinEdges::from([0.1, 0.2, 0.4]))
//!     .with_counts(Counts::from([1.0, 2.0]))
//!     .unwrap()
//!     .with_count_standard_deviations(CountStandardDeviations::from([1.0, 2.0]))
//!     .unwrap();
//!
//! let frequencies = histogram.frequencies().unwrap().unwrap();
//! assert!((frequencies[0] - 10.0).abs() < 1e-14);
//!
//! let variances = histogram.frequency_variances().unwrap().unwrap();
//! assert!((variances[1] - 100.0).abs() < 1e-12);
//! ```

pub use histo_core;
pub use histo_series;

pub use histo_core::{Error, Result, SharedBuffer, TransformConfig};
pub use histo_series::{
    into_counts, into_frequencies, into_standard_deviations, into_variances, is_valid,
    to_bin_edges, to_counts, to_frequencies, to_points, to_standard_deviations, to_variances,
    BinEdges, ConversionError, CountStandardDeviations, CountVariances, Counts, EValidator,
    Frequencies,
    FrequencyStandardDeviations, FrequencyVariances, Histogram, Points, Series, XData,
    XValidator,
};
