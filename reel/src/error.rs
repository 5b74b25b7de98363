//! Error taxonomy for spin requests.
//!
//! Every variant is a caller precondition violation. They surface
//! synchronously from constructors and setters and are never raised from
//! inside a frame or timer callback.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned when a spin request is malformed.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SpinError {
    /// The item list was empty.
    #[error("item list cannot be empty")]
    EmptyItemList,
    /// The winning index was not a whole number (includes NaN and infinities).
    #[error("winning index must be an integer, received: {0}")]
    NonIntegerIndex(f64),
    /// The winning index was below zero.
    #[error("winning index must be non-negative, received: {0}")]
    NegativeIndex(f64),
    /// The winning index was at or past the end of the list.
    #[error("winning index ({index}) is out of bounds, must be less than item count ({len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Result alias used across the crate.
pub type SpinResult<T> = Result<T, SpinError>;
