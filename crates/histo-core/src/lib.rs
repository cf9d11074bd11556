//! Core types for histogram data
//!
//! This crate provides the foundation shared by the histo-data crates:
//!
//! - [`SharedBuffer`]: fixed-length, copy-on-write storage of `f64` values
//! - [`Error`]/[`Result`]: the unified error type, including the
//!   logic-error family raised by invalid conversions
//! - [`TransformConfig`]: tuning for element-wise transforms
//!
//! # Example
//!
//! ```rust
//! use histo_core::SharedBuffer;
//!
//! let a = SharedBuffer::from([1.0, 4.0, 9.0]);
//! let mut b = a.clone(); // O(1), shares the allocation
//! assert!(a.ptr_eq(&b));
//!
//! b.map_in_place(f64::sqrt); // first write detaches `b`
//! assert!(!a.ptr_eq(&b));
//! assert_eq!(a.as_slice(), &[1.0, 4.0, 9.0]);
//! assert_eq!(b.as_slice(), &[1.0, 2.0, 3.0]);
//! ```

pub mod buffer;
pub mod config;
pub mod error;

// Re-export core types
pub use buffer::SharedBuffer;
pub use config::{TransformConfig, DEFAULT_PARALLEL_MIN_LEN};
pub use error::{Error, Result};
