//! A histogram: X data plus optional counts and count uncertainties
//!
//! Y data is held in the count domain and uncertainties as standard
//! deviations. Every other form is derived on request through the
//! conversions in [`crate::conversion`], and frequency-domain input is
//! converted to counts on the way in.

use crate::conversion::{into_variances, to_variances};
use crate::series::{
    BinEdges, CountStandardDeviations, CountVariances, Counts, Frequencies,
    FrequencyStandardDeviations, FrequencyVariances, Points,
};
use histo_core::{Error, Result};
use std::fmt;

const NAME: &str = "Histogram";

/// X data stored either as bin edges or as points
#[derive(Debug, Clone, PartialEq)]
pub enum XData {
    BinEdges(BinEdges),
    Points(Points),
}

impl XData {
    /// Number of Y values this X data describes
    pub fn y_len(&self) -> usize {
        match self {
            Self::BinEdges(edges) => edges.bin_count(),
            Self::Points(points) => points.len(),
        }
    }

    pub fn is_valid(&self) -> bool {
        match self {
            Self::BinEdges(edges) => edges.is_valid(),
            Self::Points(points) => points.is_valid(),
        }
    }

    fn kind_name(&self) -> &'static str {
        match self {
            Self::BinEdges(edges) => edges.name(),
            Self::Points(points) => points.name(),
        }
    }
}

impl From<BinEdges> for XData {
    fn from(edges: BinEdges) -> Self {
        Self::BinEdges(edges)
    }
}

impl From<Points> for XData {
    fn from(points: Points) -> Self {
        Self::Points(points)
    }
}

/// A histogram representation of binned data
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    x: XData,
    counts: Option<Counts>,
    std_devs: Option<CountStandardDeviations>,
}

impl Histogram {
    /// Create a histogram with X data only; Y and E start null
    pub fn new(x: impl Into<XData>) -> Self {
        Self {
            x: x.into(),
            counts: None,
            std_devs: None,
        }
    }

    /// Builder-style [`Self::set_counts`]
    pub fn with_counts(mut self, counts: Counts) -> Result<Self> {
        self.set_counts(counts)?;
        Ok(self)
    }

    /// Builder-style [`Self::set_count_standard_deviations`]
    pub fn with_count_standard_deviations(
        mut self,
        std_devs: CountStandardDeviations,
    ) -> Result<Self> {
        self.set_count_standard_deviations(std_devs)?;
        Ok(self)
    }

    pub fn x(&self) -> &XData {
        &self.x
    }

    /// Number of Y values
    pub fn size(&self) -> usize {
        self.x.y_len()
    }

    /// X data as bin edges, derived from points if stored that way
    pub fn bin_edges(&self) -> BinEdges {
        match &self.x {
            XData::BinEdges(edges) => edges.clone(),
            XData::Points(points) => BinEdges::from_points(points),
        }
    }

    /// X data as points, derived from bin edges if stored that way
    pub fn points(&self) -> Result<Points> {
        match &self.x {
            XData::BinEdges(edges) => Points::from_bin_edges(edges),
            XData::Points(points) => Ok(points.clone()),
        }
    }

    pub fn counts(&self) -> Option<Counts> {
        self.counts.clone()
    }

    pub fn count_standard_deviations(&self) -> Option<CountStandardDeviations> {
        self.std_devs.clone()
    }

    pub fn count_variances(&self) -> Option<CountVariances> {
        to_variances(self.std_devs.as_ref())
    }

    pub fn frequencies(&self) -> Result<Option<Frequencies>> {
        self.counts
            .as_ref()
            .map(|counts| Frequencies::from_counts(counts, &self.bin_edges()))
            .transpose()
    }

    pub fn frequency_standard_deviations(&self) -> Result<Option<FrequencyStandardDeviations>> {
        self.std_devs
            .as_ref()
            .map(|e| FrequencyStandardDeviations::from_counts(e, &self.bin_edges()))
            .transpose()
    }

    pub fn frequency_variances(&self) -> Result<Option<FrequencyVariances>> {
        self.std_devs
            .as_ref()
            .map(|e| FrequencyVariances::from_count_standard_deviations(e, &self.bin_edges()))
            .transpose()
    }

    pub fn set_counts(&mut self, counts: Counts) -> Result<()> {
        self.check_len(counts.name(), counts.len())?;
        self.counts = Some(counts);
        Ok(())
    }

    pub fn set_frequencies(&mut self, frequencies: Frequencies) -> Result<()> {
        self.check_len(frequencies.name(), frequencies.len())?;
        self.counts = Some(Counts::from_frequencies_owned(frequencies, &self.bin_edges())?);
        Ok(())
    }

    pub fn set_count_standard_deviations(&mut self, std_devs: CountStandardDeviations) -> Result<()> {
        self.check_len(std_devs.name(), std_devs.len())?;
        self.std_devs = Some(std_devs);
        Ok(())
    }

    pub fn set_count_variances(&mut self, variances: CountVariances) -> Result<()> {
        self.check_len(variances.name(), variances.len())?;
        self.std_devs = Some(CountStandardDeviations::from_variances_owned(variances));
        Ok(())
    }

    pub fn set_frequency_standard_deviations(
        &mut self,
        std_devs: FrequencyStandardDeviations,
    ) -> Result<()> {
        self.check_len(std_devs.name(), std_devs.len())?;
        self.std_devs = Some(CountStandardDeviations::from_frequencies_owned(
            std_devs,
            &self.bin_edges(),
        )?);
        Ok(())
    }

    pub fn set_frequency_variances(&mut self, variances: FrequencyVariances) -> Result<()> {
        self.check_len(variances.name(), variances.len())?;
        self.std_devs = Some(CountStandardDeviations::from_frequency_variances(
            &variances,
            &self.bin_edges(),
        )?);
        Ok(())
    }

    /// Reset counts to null
    pub fn clear_y(&mut self) {
        self.counts = None;
    }

    /// Reset uncertainties to null
    pub fn clear_e(&mut self) {
        self.std_devs = None;
    }

    /// X data valid and every non-null Y/E series valid
    pub fn is_valid(&self) -> bool {
        self.x.is_valid()
            && self.counts.as_ref().map_or(true, Counts::is_valid)
            && self
                .std_devs
                .as_ref()
                .map_or(true, CountStandardDeviations::is_valid)
    }

    /// Take the uncertainties out as variances, leaving them null
    pub fn take_count_variances(&mut self) -> Option<CountVariances> {
        into_variances(self.std_devs.take())
    }

    fn check_len(&self, from: &'static str, len: usize) -> Result<()> {
        if len != self.size() {
            return Err(Error::size_mismatch(NAME, from, self.size(), len));
        }
        Ok(())
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = |set: bool| if set { "set" } else { "null" };
        write!(
            f,
            "Histogram({} bins, x={}, counts={}, errors={})",
            self.size(),
            self.x.kind_name(),
            state(self.counts.is_some()),
            state(self.std_devs.is_some())
        )
    }
}
