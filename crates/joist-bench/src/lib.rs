//! Benchmark fixtures for the Joist primitive array library.
//!
//! Provides pre-built arrays for the criterion targets:
//!
//! - [`ramp_f64`] / [`ramp_i32`]: ascending-ramp sweep fixtures
//! - [`erased_set`]: the same fixtures behind the type-erased
//!   capability surface

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use joist_array::{F64Array, I32Array};
use joist_core::Array;

/// Build an f64 array holding `0.0, 1.0, …, len-1`.
pub fn ramp_f64(len: usize) -> F64Array {
    (0..len).map(|i| i as f64).collect()
}

/// Build an i32 array holding `0, 1, …, len-1`.
pub fn ramp_i32(len: usize) -> I32Array {
    (0..len).map(|i| i as i32).collect()
}

/// The ramp fixtures behind `dyn Array`, for dispatch-overhead runs.
pub fn erased_set(len: usize) -> Vec<Box<dyn Array>> {
    vec![Box::new(ramp_f64(len)), Box::new(ramp_i32(len))]
}
