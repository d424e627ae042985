//! Fixed-length bounds-checked primitive array storage.
//!
//! Provides [`PrimArray`], the one concrete storage type behind every
//! primitive array kind. An array's length is fixed at construction and
//! its elements are individually mutable through checked accessors that
//! fail with [`joist_core::IndexError`] instead of faulting memory.
//!
//! # Layout
//!
//! ```text
//! PrimArray<E> (one instantiation per element kind)
//! ├── Box<[E]> (contiguous, exactly len slots, never resized)
//! └── ArrayInstanceId (object identity, fresh per construction)
//! ```
//!
//! # Concurrency
//!
//! There is no internal synchronization. The checked mutators take
//! `&mut self`, so unsynchronized concurrent mutation of the same slot
//! is unrepresentable; callers needing cross-thread sharing apply their
//! own exclusive-access discipline.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod access;
pub mod array;

// Public re-exports for the primary API surface.
pub use array::{
    BoolArray, F32Array, F64Array, I16Array, I32Array, I64Array, I8Array, PrimArray, U16Array,
    U8Array,
};
