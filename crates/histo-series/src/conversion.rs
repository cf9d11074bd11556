//! Conversions between domains and representations
//!
//! Two independent conversions exist:
//!
//! - **representation**: variance ↔ standard deviation, element-wise square
//!   and square root, no further input needed;
//! - **domain**: count ↔ frequency, scaling element `i` by the width of bin
//!   `i` (squared for variances), which needs [`BinEdges`].
//!
//! Conversions that change both are chained from the two single-step ones.
//!
//! Every conversion comes in a borrowing form, which leaves the source
//! intact and allocates the result, and an `_owned`/`into_` form, which
//! transforms the source storage in place when nothing else shares it.
//! Bin edges are checked before the source is taken, so a rejected owned
//! conversion hands the source back ([`ConversionError`]) and a rejected
//! `into_` conversion leaves it in its slot.
//!
//! The free functions take and return `Option` so that a null source
//! propagates as a null result without error.

use crate::kinds::{CountKind, FrequencyKind, SeriesKind, StandardDeviationKind, VarianceKind};
use crate::series::{
    BinEdges, CountStandardDeviations, CountVariances, FrequencyStandardDeviations,
    FrequencyVariances, Series,
};
use histo_core::{Error, Result, SharedBuffer, TransformConfig};
use thiserror::Error;
use tracing::{debug, trace};

/// A rejected owned conversion, returning the moved-in source
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{error}")]
pub struct ConversionError<S> {
    error: Error,
    series: S,
}

impl<S> ConversionError<S> {
    fn new(error: Error, series: S) -> Self {
        Self { error, series }
    }

    /// Why the conversion was rejected
    pub fn error(&self) -> &Error {
        &self.error
    }

    /// The source series, untouched
    pub fn series(&self) -> &S {
        &self.series
    }

    /// Recover the source series
    pub fn into_series(self) -> S {
        self.series
    }

    pub fn into_parts(self) -> (Error, S) {
        (self.error, self.series)
    }
}

impl<S> From<ConversionError<S>> for Error {
    fn from(err: ConversionError<S>) -> Self {
        err.error
    }
}

/// Result of an owned conversion consuming a `Series<K>`
pub type OwnedResult<T, K> = std::result::Result<T, ConversionError<Series<K>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scaling {
    /// frequency to count
    Multiply,
    /// count to frequency
    Divide,
}

/// Check that `edges` delimit exactly `len` bins
///
/// The all-empty pair is accepted although it holds no bin at all.
fn check_bin_edges<'a>(
    target: &'static str,
    from: &'static str,
    len: usize,
    edges: Option<&'a BinEdges>,
) -> Result<&'a BinEdges> {
    let Some(edges) = edges else {
        debug!(
            target_kind = target,
            from_kind = from,
            len,
            "conversion rejected, bin edges are null"
        );
        return Err(Error::null_bin_edges(target, from));
    };
    let both_empty = len == 0 && edges.is_empty();
    if edges.len() != len + 1 && !both_empty {
        debug!(
            target_kind = target,
            from_kind = from,
            len,
            edges = edges.len(),
            "conversion rejected, size mismatch"
        );
        return Err(Error::size_mismatch(target, from, len + 1, edges.len()));
    }
    Ok(edges)
}

fn scale(value: f64, lo: f64, hi: f64, power: i32, scaling: Scaling) -> f64 {
    let factor = (hi - lo).powi(power);
    match scaling {
        Scaling::Multiply => value * factor,
        Scaling::Divide => value / factor,
    }
}

fn rescaled(
    source: &SharedBuffer,
    edges: &BinEdges,
    power: i32,
    scaling: Scaling,
    config: &TransformConfig,
) -> Result<SharedBuffer> {
    source.map_between_with(config, edges.as_slice(), move |v, lo, hi| {
        scale(v, lo, hi, power, scaling)
    })
}

/// Rescale in place; on error `source` is left untouched
fn rescale_in_place(
    source: &mut SharedBuffer,
    edges: &BinEdges,
    power: i32,
    scaling: Scaling,
) -> Result<()> {
    source.map_between_in_place(edges.as_slice(), move |v, lo, hi| {
        scale(v, lo, hi, power, scaling)
    })
}

/// Run an owned domain conversion, handing `source` back on rejection
fn rescale_owned<K: SeriesKind, T: SeriesKind>(
    source: Series<K>,
    edges: &BinEdges,
    power: i32,
    scaling: Scaling,
) -> OwnedResult<Series<T>, K> {
    if let Err(error) = check_bin_edges(T::NAME, K::NAME, source.len(), Some(edges)) {
        return Err(ConversionError::new(error, source));
    }
    trace!(
        target_kind = T::NAME,
        from_kind = K::NAME,
        len = source.len(),
        "domain conversion, owned"
    );
    let mut buffer = source.into_buffer();
    match rescale_in_place(&mut buffer, edges, power, scaling) {
        Ok(()) => Ok(Series::from_buffer(buffer)),
        Err(error) => Err(ConversionError::new(error, Series::from_buffer(buffer))),
    }
}

impl<K: FrequencyKind> Series<K> {
    /// Divide by bin widths (squared for variances)
    pub fn from_counts(counts: &Series<K::Count>, edges: &BinEdges) -> Result<Self> {
        Self::from_counts_with(counts, edges, &TransformConfig::default())
    }

    /// As [`Self::from_counts`], using `config` to pick the transform strategy
    pub fn from_counts_with(
        counts: &Series<K::Count>,
        edges: &BinEdges,
        config: &TransformConfig,
    ) -> Result<Self> {
        let edges = check_bin_edges(K::NAME, K::Count::NAME, counts.len(), Some(edges))?;
        trace!(
            target_kind = K::NAME,
            from_kind = K::Count::NAME,
            len = counts.len(),
            "domain conversion"
        );
        let buffer = rescaled(counts.buffer(), edges, K::WIDTH_POWER, Scaling::Divide, config)?;
        Ok(Self::from_buffer(buffer))
    }

    /// As [`Self::from_counts`], reusing the storage of `counts` when unshared
    ///
    /// On rejection `counts` is returned inside the error.
    pub fn from_counts_owned(
        counts: Series<K::Count>,
        edges: &BinEdges,
    ) -> OwnedResult<Self, K::Count> {
        rescale_owned(counts, edges, K::WIDTH_POWER, Scaling::Divide)
    }
}

impl<K: CountKind> Series<K> {
    /// Multiply by bin widths (squared for variances)
    pub fn from_frequencies(
        frequencies: &Series<K::Frequency>,
        edges: &BinEdges,
    ) -> Result<Self> {
        Self::from_frequencies_with(frequencies, edges, &TransformConfig::default())
    }

    /// As [`Self::from_frequencies`], using `config` to pick the transform strategy
    pub fn from_frequencies_with(
        frequencies: &Series<K::Frequency>,
        edges: &BinEdges,
        config: &TransformConfig,
    ) -> Result<Self> {
        let edges = check_bin_edges(K::NAME, K::Frequency::NAME, frequencies.len(), Some(edges))?;
        trace!(
            target_kind = K::NAME,
            from_kind = K::Frequency::NAME,
            len = frequencies.len(),
            "domain conversion"
        );
        let buffer = rescaled(
            frequencies.buffer(),
            edges,
            K::WIDTH_POWER,
            Scaling::Multiply,
            config,
        )?;
        Ok(Self::from_buffer(buffer))
    }

    /// As [`Self::from_frequencies`], reusing the storage of `frequencies` when unshared
    ///
    /// On rejection `frequencies` is returned inside the error.
    pub fn from_frequencies_owned(
        frequencies: Series<K::Frequency>,
        edges: &BinEdges,
    ) -> OwnedResult<Self, K::Frequency> {
        rescale_owned(frequencies, edges, K::WIDTH_POWER, Scaling::Multiply)
    }
}

impl<K: StandardDeviationKind> Series<K> {
    /// Element-wise square root
    pub fn from_variances(variances: &Series<K::Variance>) -> Self {
        Self::from_variances_with(variances, &TransformConfig::default())
    }

    /// As [`Self::from_variances`], using `config` to pick the transform strategy
    pub fn from_variances_with(variances: &Series<K::Variance>, config: &TransformConfig) -> Self {
        Self::from_buffer(variances.buffer().map_with(config, f64::sqrt))
    }

    /// As [`Self::from_variances`], reusing the storage of `variances` when unshared
    pub fn from_variances_owned(variances: Series<K::Variance>) -> Self {
        let mut buffer = variances.into_buffer();
        buffer.map_in_place(f64::sqrt);
        Self::from_buffer(buffer)
    }
}

impl<K: VarianceKind> Series<K> {
    /// Element-wise square
    pub fn from_standard_deviations(std_devs: &Series<K::StandardDeviation>) -> Self {
        Self::from_standard_deviations_with(std_devs, &TransformConfig::default())
    }

    /// As [`Self::from_standard_deviations`], using `config` to pick the transform strategy
    pub fn from_standard_deviations_with(
        std_devs: &Series<K::StandardDeviation>,
        config: &TransformConfig,
    ) -> Self {
        Self::from_buffer(std_devs.buffer().map_with(config, |v| v * v))
    }

    /// As [`Self::from_standard_deviations`], reusing the storage of `std_devs` when unshared
    pub fn from_standard_deviations_owned(std_devs: Series<K::StandardDeviation>) -> Self {
        let mut buffer = std_devs.into_buffer();
        buffer.map_in_place(|v| v * v);
        Self::from_buffer(buffer)
    }
}

// Conversions changing both domain and representation, chained from the
// single-step ones.

impl FrequencyStandardDeviations {
    pub fn from_count_variances(variances: &CountVariances, edges: &BinEdges) -> Result<Self> {
        let std_devs = CountStandardDeviations::from_variances(variances);
        Ok(Self::from_counts_owned(std_devs, edges)?)
    }
}

impl FrequencyVariances {
    pub fn from_count_standard_deviations(
        std_devs: &CountStandardDeviations,
        edges: &BinEdges,
    ) -> Result<Self> {
        let variances = CountVariances::from_standard_deviations(std_devs);
        Ok(Self::from_counts_owned(variances, edges)?)
    }
}

impl CountStandardDeviations {
    pub fn from_frequency_variances(
        variances: &FrequencyVariances,
        edges: &BinEdges,
    ) -> Result<Self> {
        let std_devs = FrequencyStandardDeviations::from_variances(variances);
        Ok(Self::from_frequencies_owned(std_devs, edges)?)
    }
}

impl CountVariances {
    pub fn from_frequency_standard_deviations(
        std_devs: &FrequencyStandardDeviations,
        edges: &BinEdges,
    ) -> Result<Self> {
        let variances = FrequencyVariances::from_standard_deviations(std_devs);
        Ok(Self::from_frequencies_owned(variances, edges)?)
    }
}

// Null-aware conversions

/// Count domain to frequency domain; a null source yields a null result
pub fn to_frequencies<K: CountKind>(
    counts: Option<&Series<K>>,
    edges: Option<&BinEdges>,
) -> Result<Option<Series<K::Frequency>>> {
    let Some(counts) = counts else {
        trace!(target_kind = K::Frequency::NAME, from_kind = K::NAME, "null source");
        return Ok(None);
    };
    let edges = check_bin_edges(K::Frequency::NAME, K::NAME, counts.len(), edges)?;
    trace!(
        target_kind = K::Frequency::NAME,
        from_kind = K::NAME,
        len = counts.len(),
        "domain conversion"
    );
    let buffer = rescaled(
        counts.buffer(),
        edges,
        K::WIDTH_POWER,
        Scaling::Divide,
        &TransformConfig::default(),
    )?;
    Ok(Some(Series::from_buffer(buffer)))
}

/// As [`to_frequencies`], moving the source out of `counts`
///
/// The slot is emptied only once the bin edges have been accepted; on
/// error it still holds the source.
pub fn into_frequencies<K: CountKind>(
    counts: &mut Option<Series<K>>,
    edges: Option<&BinEdges>,
) -> Result<Option<Series<K::Frequency>>> {
    let Some(len) = counts.as_ref().map(Series::len) else {
        trace!(target_kind = K::Frequency::NAME, from_kind = K::NAME, "null source");
        return Ok(None);
    };
    let edges = check_bin_edges(K::Frequency::NAME, K::NAME, len, edges)?;
    take_rescaled(counts, edges, K::WIDTH_POWER, Scaling::Divide)
}

/// Frequency domain to count domain; a null source yields a null result
pub fn to_counts<K: FrequencyKind>(
    frequencies: Option<&Series<K>>,
    edges: Option<&BinEdges>,
) -> Result<Option<Series<K::Count>>> {
    let Some(frequencies) = frequencies else {
        trace!(target_kind = K::Count::NAME, from_kind = K::NAME, "null source");
        return Ok(None);
    };
    let edges = check_bin_edges(K::Count::NAME, K::NAME, frequencies.len(), edges)?;
    trace!(
        target_kind = K::Count::NAME,
        from_kind = K::NAME,
        len = frequencies.len(),
        "domain conversion"
    );
    let buffer = rescaled(
        frequencies.buffer(),
        edges,
        K::WIDTH_POWER,
        Scaling::Multiply,
        &TransformConfig::default(),
    )?;
    Ok(Some(Series::from_buffer(buffer)))
}

/// As [`to_counts`], moving the source out of `frequencies`
///
/// The slot is emptied only once the bin edges have been accepted; on
/// error it still holds the source.
pub fn into_counts<K: FrequencyKind>(
    frequencies: &mut Option<Series<K>>,
    edges: Option<&BinEdges>,
) -> Result<Option<Series<K::Count>>> {
    let Some(len) = frequencies.as_ref().map(Series::len) else {
        trace!(target_kind = K::Count::NAME, from_kind = K::NAME, "null source");
        return Ok(None);
    };
    let edges = check_bin_edges(K::Count::NAME, K::NAME, len, edges)?;
    take_rescaled(frequencies, edges, K::WIDTH_POWER, Scaling::Multiply)
}

/// Take the checked source out of `slot` and rescale its storage in place
fn take_rescaled<K: SeriesKind, T: SeriesKind>(
    slot: &mut Option<Series<K>>,
    edges: &BinEdges,
    power: i32,
    scaling: Scaling,
) -> Result<Option<Series<T>>> {
    let Some(source) = slot.take() else {
        return Ok(None);
    };
    match rescale_owned(source, edges, power, scaling) {
        Ok(converted) => Ok(Some(converted)),
        Err(err) => {
            let (error, source) = err.into_parts();
            *slot = Some(source);
            Err(error)
        }
    }
}

/// Variance to standard deviation; a null source yields a null result
pub fn to_standard_deviations<K: VarianceKind>(
    variances: Option<&Series<K>>,
) -> Option<Series<K::StandardDeviation>> {
    trace!(
        target_kind = K::StandardDeviation::NAME,
        from_kind = K::NAME,
        null = variances.is_none(),
        "representation conversion"
    );
    variances.map(|v| Series::from_buffer(v.buffer().map(f64::sqrt)))
}

/// As [`to_standard_deviations`], consuming the source
///
/// This conversion cannot fail, so the source is taken by value.
pub fn into_standard_deviations<K: VarianceKind>(
    variances: Option<Series<K>>,
) -> Option<Series<K::StandardDeviation>> {
    trace!(
        target_kind = K::StandardDeviation::NAME,
        from_kind = K::NAME,
        null = variances.is_none(),
        "representation conversion, owned"
    );
    variances.map(|v| {
        let mut buffer = v.into_buffer();
        buffer.map_in_place(f64::sqrt);
        Series::from_buffer(buffer)
    })
}

/// Standard deviation to variance; a null source yields a null result
pub fn to_variances<K: StandardDeviationKind>(
    std_devs: Option<&Series<K>>,
) -> Option<Series<K::Variance>> {
    trace!(
        target_kind = K::Variance::NAME,
        from_kind = K::NAME,
        null = std_devs.is_none(),
        "representation conversion"
    );
    std_devs.map(|s| Series::from_buffer(s.buffer().map(|v| v * v)))
}

/// As [`to_variances`], consuming the source
pub fn into_variances<K: StandardDeviationKind>(
    std_devs: Option<Series<K>>,
) -> Option<Series<K::Variance>> {
    trace!(
        target_kind = K::Variance::NAME,
        from_kind = K::NAME,
        null = std_devs.is_none(),
        "representation conversion, owned"
    );
    std_devs.map(|s| {
        let mut buffer = s.into_buffer();
        buffer.map_in_place(|v| v * v);
        Series::from_buffer(buffer)
    })
}
