//! Error types for spreadsort.
//!
//! Sorting itself cannot fail: contract violations in a key strategy or comparator
//! produce a badly ordered result rather than an error. The only fallible entry
//! points are the fixed-size network sorters, which reject inputs they have no
//! network for.

use thiserror::Error;

/// Result type alias for spreadsort operations.
pub type Result<T> = std::result::Result<T, SortError>;

/// Error type for spreadsort operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SortError {
    /// No sorting network exists for a slice of this length.
    #[error("no sorting network for {len} elements (largest supported size is {max})")]
    UnsupportedNetworkSize {
        /// Length of the rejected slice.
        len: usize,
        /// Largest supported length.
        max: usize,
    },
}
