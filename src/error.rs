//! Error types for byte buffer operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when accessing a [`ByteBuffer`](crate::ByteBuffer).
///
/// Every error is raised before the buffer is touched, so a failed call
/// leaves both the contents and the cursor as they were.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Position is not an integer (fractional, NaN or infinite).
    #[error("Illegal data position: {0}")]
    IllegalPosition(f64),

    /// Position is an integer outside `[0, length)`.
    #[error("Out of bounds: {position}")]
    OutOfBounds {
        /// Offending position.
        position: i128,
        /// Length of the backing store.
        length: usize,
    },

    /// Fill span is not a multiple of the pattern width.
    #[error("Illegal slice range: {start} - {end}")]
    IllegalRange {
        /// Start of the span (inclusive).
        start: usize,
        /// End of the span (exclusive).
        end: usize,
    },
}

impl Error {
    /// Returns true for position errors (`IllegalPosition` or `OutOfBounds`).
    #[must_use]
    pub const fn is_position_error(&self) -> bool {
        matches!(self, Self::IllegalPosition(_) | Self::OutOfBounds { .. })
    }
}
