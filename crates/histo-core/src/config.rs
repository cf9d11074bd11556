//! Tuning parameters for element-wise buffer transforms

/// Default minimum series length before the parallel path is taken
pub const DEFAULT_PARALLEL_MIN_LEN: usize = 16 * 1024;

/// Parameters for element-wise transforms over a [`SharedBuffer`](crate::SharedBuffer)
///
/// Only consulted when the `parallel` feature is enabled; without it every
/// transform runs sequentially.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformConfig {
    /// Minimum number of elements before work is split across threads
    pub parallel_min_len: usize,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            parallel_min_len: DEFAULT_PARALLEL_MIN_LEN,
        }
    }
}

impl TransformConfig {
    /// Configuration that never takes the parallel path
    pub fn sequential() -> Self {
        Self {
            parallel_min_len: usize::MAX,
        }
    }

    /// Override the parallel threshold
    pub fn with_parallel_min_len(mut self, len: usize) -> Self {
        self.parallel_min_len = len;
        self
    }

    /// Whether a transform over `len` elements should run in parallel
    pub fn use_parallel(&self, len: usize) -> bool {
        cfg!(feature = "parallel") && len >= self.parallel_min_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TransformConfig::default();
        assert_eq!(config.parallel_min_len, DEFAULT_PARALLEL_MIN_LEN);
        assert!(!config.use_parallel(0));
    }

    #[test]
    fn test_sequential_never_parallel() {
        let config = TransformConfig::sequential();
        assert!(!config.use_parallel(usize::MAX - 1));
    }

    #[test]
    fn test_threshold_override() {
        let config = TransformConfig::default().with_parallel_min_len(4);
        assert_eq!(config.parallel_min_len, 4);
        assert!(!config.use_parallel(3));
        assert_eq!(config.use_parallel(4), cfg!(feature = "parallel"));
    }
}
