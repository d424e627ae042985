//! The index fault raised by every bounds-checked array operation.

use std::error::Error;
use std::fmt;

/// Error raised when an access index or copy length falls outside the
/// valid range for an array's fixed length.
///
/// Carries both numbers so callers can recover or convert
/// deterministically. For bulk copy-out the `index` field holds the
/// requested copy length; valid copy lengths are `0..=len`, so a
/// faulting request is out of range the same way a faulting index is.
///
/// Index parameters throughout the workspace are `usize`, so there is
/// no negative-index arm to report: the whole bounds rule is one
/// unsigned comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexError {
    /// The offending index, or the requested copy length.
    pub index: usize,
    /// The fixed length of the array that rejected the access.
    pub len: usize,
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { index, len } = self;
        write!(f, "index {index} out of bounds for length {len}")
    }
}

impl Error for IndexError {}
