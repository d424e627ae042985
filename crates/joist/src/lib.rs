//! Joist: fixed-length primitive arrays with managed-runtime access
//! semantics.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Joist sub-crates. For most users, adding `joist` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use joist::prelude::*;
//!
//! let mut samples = F64Array::from_slice(&[1.0, 2.0, 3.0]);
//!
//! assert_eq!(samples.get(1), Ok(2.0));
//! assert_eq!(samples.set(1, 9.5), Ok(9.5));
//! assert_eq!(samples.get(1), Ok(9.5));
//!
//! // Compound updates behave like the host language's ++/-- operators.
//! assert_eq!(samples.incr(0), Ok(2.0));
//! assert_eq!(samples.post_decr(2), Ok(3.0));
//! assert_eq!(samples.get(2), Ok(2.0));
//!
//! // Out-of-range access fails with a typed error instead of faulting.
//! assert_eq!(samples.get(3), Err(IndexError { index: 3, len: 3 }));
//!
//! // Bulk copy-out observes the same bounds discipline.
//! let mut dest = [0.0; 4];
//! assert!(samples.copy_out(&mut dest).is_err());
//! samples.copy_out(&mut dest[..3]).unwrap();
//! assert_eq!(dest[..3], [2.0, 9.5, 2.0]);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`array`] | `joist-array` | `PrimArray` and the per-kind aliases |
//! | [`types`] | `joist-core` | identity, element kinds, element traits, errors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Fixed-length array storage (`joist-array`).
///
/// Most users only need [`array::PrimArray`] and the per-kind aliases
/// from this module; they are also available in the [`prelude`].
pub use joist_array as array;

/// Core types, traits, and IDs (`joist-core`).
///
/// Contains the element-kind taxonomy, the element contracts, the
/// index fault type, and the shared [`types::Array`] capability trait.
pub use joist_core as types;

/// Common imports for typical Joist usage.
///
/// ```rust
/// use joist::prelude::*;
/// ```
///
/// This imports the concrete array aliases, the generic array type,
/// the capability trait, and the error and kind types.
pub mod prelude {
    // Concrete arrays
    pub use joist_array::{
        BoolArray, F32Array, F64Array, I16Array, I32Array, I64Array, I8Array, PrimArray,
        U16Array, U8Array,
    };

    // Core types and traits
    pub use joist_core::{Array, ArrayInstanceId, ElementKind, PrimElement, StepElement};

    // Errors
    pub use joist_core::IndexError;
}
