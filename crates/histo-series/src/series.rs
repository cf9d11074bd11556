//! Typed, fixed-length, copy-on-write series
//!
//! [`Series<K>`] wraps a [`SharedBuffer`] and tags it with a kind marker so
//! that, for example, `CountVariances` and `FrequencyVariances` cannot be
//! mixed up. Copies are O(1) and share storage; writes detach.
//!
//! The "null" (not yet computed) state is not part of the series itself.
//! It is expressed as `Option<Series<K>>`: `None` is null, `Some` of an
//! empty series is initialized-but-empty.

use crate::kinds::{
    BinEdgesKind, CountStandardDeviationsKind, CountVariancesKind, CountsKind, FrequenciesKind,
    FrequencyStandardDeviationsKind, FrequencyVariancesKind, PointsKind, SeriesKind,
};
use histo_core::{Result, SharedBuffer};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, Index, IndexMut};

/// A fixed-length series of `f64` values of kind `K`
pub struct Series<K> {
    buffer: SharedBuffer,
    kind: PhantomData<fn() -> K>,
}

pub type BinEdges = Series<BinEdgesKind>;
pub type Points = Series<PointsKind>;
pub type Counts = Series<CountsKind>;
pub type Frequencies = Series<FrequenciesKind>;
pub type CountVariances = Series<CountVariancesKind>;
pub type CountStandardDeviations = Series<CountStandardDeviationsKind>;
pub type FrequencyVariances = Series<FrequencyVariancesKind>;
pub type FrequencyStandardDeviations = Series<FrequencyStandardDeviationsKind>;

impl<K: SeriesKind> Series<K> {
    /// Take ownership of `values`
    pub fn new(values: Vec<f64>) -> Self {
        Self::from_buffer(SharedBuffer::new(values))
    }

    /// Wrap an existing buffer, sharing it
    pub fn from_buffer(buffer: SharedBuffer) -> Self {
        Self {
            buffer,
            kind: PhantomData,
        }
    }

    /// An initialized series of length zero
    pub fn empty() -> Self {
        Self::from_buffer(SharedBuffer::empty())
    }

    /// A series of `len` zeros
    pub fn with_len(len: usize) -> Self {
        Self::from_buffer(SharedBuffer::zeroed(len))
    }

    /// A series of `len` copies of `value`
    pub fn filled(len: usize, value: f64) -> Self {
        Self::from_buffer(SharedBuffer::filled(len, value))
    }

    /// Name of the series kind
    pub fn name(&self) -> &'static str {
        K::NAME
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        self.buffer.as_slice()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.buffer.get(index)
    }

    /// Bounds-checked write, detaching shared storage first
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        self.buffer.set(index, value)
    }

    /// Mutable view of the values, detaching shared storage first
    pub fn make_mut(&mut self) -> &mut [f64] {
        self.buffer.make_mut()
    }

    /// Address of the storage, for observing reuse across conversions
    #[inline]
    pub fn as_ptr(&self) -> *const f64 {
        self.buffer.as_ptr()
    }

    /// Number of series sharing this storage
    #[inline]
    pub fn share_count(&self) -> usize {
        self.buffer.share_count()
    }

    #[inline]
    pub fn is_shared(&self) -> bool {
        self.buffer.is_shared()
    }

    /// Whether both series share one allocation
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.buffer.ptr_eq(&other.buffer)
    }

    pub fn buffer(&self) -> &SharedBuffer {
        &self.buffer
    }

    pub fn into_buffer(self) -> SharedBuffer {
        self.buffer
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.buffer.into_vec()
    }

    /// Check against the rule this kind declares
    pub fn is_valid(&self) -> bool {
        crate::validation::is_valid(self)
    }
}

impl<K> Clone for Series<K> {
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer.clone(),
            kind: PhantomData,
        }
    }
}

impl<K> PartialEq for Series<K> {
    fn eq(&self, other: &Self) -> bool {
        self.buffer == other.buffer
    }
}

impl<K: SeriesKind> fmt::Debug for Series<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", K::NAME, self.buffer)
    }
}

impl<K> Deref for Series<K> {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        self.buffer.as_slice()
    }
}

impl<K> Index<usize> for Series<K> {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.buffer[index]
    }
}

impl<K> IndexMut<usize> for Series<K> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.buffer[index]
    }
}

impl<K: SeriesKind> From<Vec<f64>> for Series<K> {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl<K: SeriesKind> From<&[f64]> for Series<K> {
    fn from(values: &[f64]) -> Self {
        Self::from_buffer(SharedBuffer::from(values))
    }
}

impl<K: SeriesKind, const N: usize> From<[f64; N]> for Series<K> {
    fn from(values: [f64; N]) -> Self {
        Self::from_buffer(SharedBuffer::from(values))
    }
}

impl<K: SeriesKind> FromIterator<f64> for Series<K> {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::from_buffer(iter.into_iter().collect())
    }
}

impl<'a, K> IntoIterator for &'a Series<K> {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.buffer.as_slice().iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_construction() {
        let counts = Counts::from([1.0, 2.0, 3.0]);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts[2], 3.0);
        assert_eq!(counts.name(), "Counts");
    }

    #[test]
    fn test_length_construction_is_zeroed() {
        let edges = BinEdges::with_len(4);
        assert_eq!(edges.as_slice(), &[0.0; 4]);
        assert_eq!(Frequencies::filled(2, 3.0).as_slice(), &[3.0, 3.0]);
    }

    #[test]
    fn test_null_vs_empty() {
        let null: Option<Counts> = None;
        let empty: Option<Counts> = Some(Counts::empty());
        assert!(null.is_none());
        assert!(empty.is_some());
        assert!(empty.as_ref().is_some_and(|c| c.is_empty()));
        assert_eq!(Option::<Counts>::default(), None);
    }

    #[test]
    fn test_copy_shares_and_write_detaches() {
        let a = CountVariances::from([1.0, 2.0]);
        let mut b = a.clone();
        assert!(a.ptr_eq(&b));
        assert_eq!(a.share_count(), 2);

        b[1] = 7.0;
        assert!(!a.ptr_eq(&b));
        assert_eq!(a.as_slice(), &[1.0, 2.0]);
        assert_eq!(b.as_slice(), &[1.0, 7.0]);
    }

    #[test]
    fn test_move_transfers_storage() {
        let a = Points::from([1.0, 2.0]);
        let ptr = a.as_ptr();
        let mut slot = Some(a);
        let moved = slot.take().unwrap();
        assert!(slot.is_none());
        assert_eq!(moved.as_ptr(), ptr);
    }

    #[test]
    fn test_checked_access() {
        let mut e = CountStandardDeviations::from([0.5]);
        assert_eq!(e.get(0), Some(0.5));
        assert_eq!(e.get(1), None);
        assert!(e.set(1, 1.0).is_err());
        e.set(0, 1.5).unwrap();
        assert_eq!(e[0], 1.5);
    }

    #[test]
    fn test_equality_and_debug() {
        let a = FrequencyVariances::from(vec![1.0, 2.0]);
        let b: FrequencyVariances = [1.0, 2.0].into_iter().collect();
        assert_eq!(a, b);
        assert_eq!(format!("{:?}", a), "FrequencyVariances([1.0, 2.0])");
    }

    #[test]
    fn test_iteration() {
        let p = Points::from([1.0, 2.0, 3.0]);
        let total: f64 = (&p).into_iter().sum();
        assert_eq!(total, 6.0);
        assert_eq!(p.iter().copied().fold(f64::MIN, f64::max), 3.0);
    }
}
