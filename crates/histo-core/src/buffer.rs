//! Copy-on-write storage for fixed-length numeric series
//!
//! A [`SharedBuffer`] is cheap to clone: clones share one allocation and
//! the share count is tracked atomically. Any write goes through
//! [`SharedBuffer::make_mut`], which materialises a private copy first when
//! the allocation is shared, so other holders never observe the change.
//!
//! The length is fixed at construction. There is no "null" buffer; absence
//! of data is expressed by the caller as `Option<SharedBuffer>`.

use crate::config::TransformConfig;
use crate::error::{Error, Result};
use std::fmt;
use std::ops::{Deref, Index, IndexMut};
use std::sync::Arc;
use tracing::trace;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Shared, copy-on-write buffer of `f64` values
#[derive(Clone)]
pub struct SharedBuffer {
    data: Arc<Vec<f64>>,
}

impl SharedBuffer {
    /// Take ownership of `values` without copying
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            data: Arc::new(values),
        }
    }

    /// An initialized buffer holding no values
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// A buffer of `len` zeros
    pub fn zeroed(len: usize) -> Self {
        Self::filled(len, 0.0)
    }

    /// A buffer of `len` copies of `value`
    pub fn filled(len: usize, value: f64) -> Self {
        Self::new(vec![value; len])
    }

    /// Number of values
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no values
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read-only view of the values; never copies
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        self.data.as_slice()
    }

    /// Address of the first value, for observing allocation reuse
    #[inline]
    pub fn as_ptr(&self) -> *const f64 {
        self.data.as_ptr()
    }

    /// Number of handles currently sharing this allocation
    #[inline]
    pub fn share_count(&self) -> usize {
        Arc::strong_count(&self.data)
    }

    /// Whether another handle shares this allocation
    #[inline]
    pub fn is_shared(&self) -> bool {
        self.share_count() > 1
    }

    /// Whether both handles refer to the same allocation
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Bounds-checked read
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.data.get(index).copied()
    }

    /// Mutable view of the values
    ///
    /// If the allocation is shared, a private copy is made first.
    pub fn make_mut(&mut self) -> &mut [f64] {
        if self.is_shared() {
            trace!(
                len = self.len(),
                shares = self.share_count(),
                "copy-on-write: materialising private buffer"
            );
        }
        Arc::make_mut(&mut self.data).as_mut_slice()
    }

    /// Bounds-checked write
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        let len = self.len();
        match self.make_mut().get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::IndexOutOfRange { index, len }),
        }
    }

    /// Apply `f` to every value in place
    pub fn map_in_place<F>(&mut self, f: F)
    where
        F: Fn(f64) -> f64 + Send + Sync,
    {
        self.map_in_place_with(&TransformConfig::default(), f)
    }

    /// Apply `f` to every value in place, using `config` to pick the strategy
    pub fn map_in_place_with<F>(&mut self, config: &TransformConfig, f: F)
    where
        F: Fn(f64) -> f64 + Send + Sync,
    {
        let parallel = config.use_parallel(self.len());
        let values = self.make_mut();

        #[cfg(feature = "parallel")]
        if parallel {
            values.par_iter_mut().for_each(|v| *v = f(*v));
            return;
        }
        #[cfg(not(feature = "parallel"))]
        let _ = parallel;

        values.iter_mut().for_each(|v| *v = f(*v));
    }

    /// Combine every value with the pair of boundaries enclosing it, in place
    ///
    /// `boundaries` holds one more value than the buffer; `f` receives
    /// `(value, boundaries[i], boundaries[i + 1])`. An empty buffer also
    /// accepts empty boundaries. Any other length is a `SizeMismatch` and
    /// leaves the buffer untouched.
    pub fn map_between_in_place<F>(&mut self, boundaries: &[f64], f: F) -> Result<()>
    where
        F: Fn(f64, f64, f64) -> f64 + Send + Sync,
    {
        self.map_between_in_place_with(&TransformConfig::default(), boundaries, f)
    }

    /// As [`Self::map_between_in_place`], using `config` to pick the strategy
    pub fn map_between_in_place_with<F>(
        &mut self,
        config: &TransformConfig,
        boundaries: &[f64],
        f: F,
    ) -> Result<()>
    where
        F: Fn(f64, f64, f64) -> f64 + Send + Sync,
    {
        self.check_boundaries(boundaries)?;
        let parallel = config.use_parallel(self.len());
        let values = self.make_mut();

        #[cfg(feature = "parallel")]
        if parallel {
            values
                .par_iter_mut()
                .zip(boundaries.par_windows(2))
                .for_each(|(v, w)| *v = f(*v, w[0], w[1]));
            return Ok(());
        }
        #[cfg(not(feature = "parallel"))]
        let _ = parallel;

        values
            .iter_mut()
            .zip(boundaries.windows(2))
            .for_each(|(v, w)| *v = f(*v, w[0], w[1]));
        Ok(())
    }

    /// A new buffer holding `f` applied to every value; `self` is untouched
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync,
    {
        self.map_with(&TransformConfig::default(), f)
    }

    /// As [`Self::map`], using `config` to pick the strategy
    pub fn map_with<F>(&self, config: &TransformConfig, f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync,
    {
        #[cfg(feature = "parallel")]
        if config.use_parallel(self.len()) {
            return Self::new(self.as_slice().par_iter().map(|&v| f(v)).collect());
        }
        #[cfg(not(feature = "parallel"))]
        let _ = config;

        Self::new(self.data.iter().map(|&v| f(v)).collect())
    }

    /// A new buffer combining every value with its enclosing boundaries
    ///
    /// Same length rule as [`Self::map_between_in_place`].
    pub fn map_between<F>(&self, boundaries: &[f64], f: F) -> Result<Self>
    where
        F: Fn(f64, f64, f64) -> f64 + Send + Sync,
    {
        self.map_between_with(&TransformConfig::default(), boundaries, f)
    }

    /// As [`Self::map_between`], using `config` to pick the strategy
    pub fn map_between_with<F>(
        &self,
        config: &TransformConfig,
        boundaries: &[f64],
        f: F,
    ) -> Result<Self>
    where
        F: Fn(f64, f64, f64) -> f64 + Send + Sync,
    {
        self.check_boundaries(boundaries)?;

        #[cfg(feature = "parallel")]
        if config.use_parallel(self.len()) {
            return Ok(Self::new(
                self.as_slice()
                    .par_iter()
                    .zip(boundaries.par_windows(2))
                    .map(|(&v, w)| f(v, w[0], w[1]))
                    .collect(),
            ));
        }
        #[cfg(not(feature = "parallel"))]
        let _ = config;

        Ok(Self::new(
            self.data
                .iter()
                .zip(boundaries.windows(2))
                .map(|(&v, w)| f(v, w[0], w[1]))
                .collect(),
        ))
    }

    fn check_boundaries(&self, boundaries: &[f64]) -> Result<()> {
        let len = self.len();
        if boundaries.len() == len + 1 || (len == 0 && boundaries.is_empty()) {
            Ok(())
        } else {
            Err(Error::size_mismatch(
                "SharedBuffer",
                "boundaries",
                len + 1,
                boundaries.len(),
            ))
        }
    }

    /// Recover the values, copying only if the allocation is shared
    pub fn into_vec(self) -> Vec<f64> {
        Arc::try_unwrap(self.data).unwrap_or_else(|shared| shared.as_ref().clone())
    }
}

impl Deref for SharedBuffer {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl Index<usize> for SharedBuffer {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<usize> for SharedBuffer {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.make_mut()[index]
    }
}

impl PartialEq for SharedBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl fmt::Debug for SharedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl From<Vec<f64>> for SharedBuffer {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl From<&[f64]> for SharedBuffer {
    fn from(values: &[f64]) -> Self {
        Self::new(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for SharedBuffer {
    fn from(values: [f64; N]) -> Self {
        Self::new(values.to_vec())
    }
}

impl FromIterator<f64> for SharedBuffer {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
