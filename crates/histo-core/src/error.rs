//! Error types for histogram data
//!
//! Provides a unified error type for all histo-data crates.

use thiserror::Error;

/// Core error type for histogram data operations
///
/// The `NullBinEdges`, `SizeMismatch` and `TooFewBinEdges` variants form the
/// logic-error family: they signal a programming error at the call site and
/// are never recovered from inside this library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A domain conversion was attempted without bin edges
    #[error("{target}: Cannot construct from {from} -- BinEdges are NULL")]
    NullBinEdges {
        target: &'static str,
        from: &'static str,
    },

    /// Lengths of two collaborating series disagree
    #[error("{target}: Cannot construct from {from} -- size mismatch, expected {expected}, got {actual}")]
    SizeMismatch {
        target: &'static str,
        from: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Points cannot be derived from a single bin edge
    #[error("{target}: Cannot construct from BinEdges of size {len}")]
    TooFewBinEdges { target: &'static str, len: usize },

    /// Checked element access outside the series
    #[error("Index {index} out of range for series of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a conversion that was handed null bin edges
    pub fn null_bin_edges(target: &'static str, from: &'static str) -> Self {
        Self::NullBinEdges { target, from }
    }

    /// Create an error for a length disagreement
    pub fn size_mismatch(
        target: &'static str,
        from: &'static str,
        expected: usize,
        actual: usize,
    ) -> Self {
        Self::SizeMismatch {
            target,
            from,
            expected,
            actual,
        }
    }

    /// Whether this error belongs to the logic-error family
    pub fn is_logic_error(&self) -> bool {
        matches!(
            self,
            Self::NullBinEdges { .. } | Self::SizeMismatch { .. } | Self::TooFewBinEdges { .. }
        )
    }
}
