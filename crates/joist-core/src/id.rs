//! Strongly-typed array identity.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`ArrayInstanceId`] allocation.
static ARRAY_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for an array object.
///
/// Allocated from a monotonic atomic counter via [`ArrayInstanceId::next`].
/// Two distinct live arrays always have different IDs, even when their
/// contents are equal, so the ID serves as the object-identity hook for
/// hosts that need reference semantics over a value-semantics buffer.
///
/// Cloning an array allocates a fresh instance ID: arrays are mutable,
/// and two buffers that can diverge must never share identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArrayInstanceId(u64);

impl ArrayInstanceId {
    /// Allocate a fresh, unique instance ID.
    ///
    /// Each call returns a new ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(ARRAY_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ArrayInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
