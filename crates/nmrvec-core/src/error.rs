//! Error type for operations with explicit range arguments.
//!
//! Most operations in this crate treat invalid input as a silent no-op.
//! Only band moves and the normalization dispatcher take explicit ranges
//! that can be inconsistent, and those report it through [`VecError`].

use thiserror::Error;

/// Range validation failure.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VecError {
    /// A band reaches outside the source buffer.
    #[error("band [{lower}, {upper}] outside source of {len} points")]
    BandOutOfRange {
        /// Band lower bound
        lower: usize,
        /// Band upper bound
        upper: usize,
        /// Source length
        len: usize,
    },

    /// The bands need more room than the destination has.
    #[error("bands need {needed} points, destination holds {available}")]
    DestinationOverflow {
        /// Total points requested
        needed: usize,
        /// Destination length
        available: usize,
    },

    /// Range start lies after its end.
    #[error("range start {start} after end {end}")]
    InvertedRange {
        /// Range start
        start: usize,
        /// Range end
        end: usize,
    },

    /// Range end lies past the buffer.
    #[error("range end {end} outside buffer of {len} points")]
    RangeOutOfBounds {
        /// Range end (inclusive)
        end: usize,
        /// Buffer length
        len: usize,
    },
}

impl VecError {
    /// Legacy integer status for callers that still check return codes.
    ///
    /// Band errors map to `-1`, range errors to `1`.
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::BandOutOfRange { .. } | Self::DestinationOverflow { .. } => -1,
            Self::InvertedRange { .. } | Self::RangeOutOfBounds { .. } => 1,
        }
    }
}

/// Result alias for range-checked operations.
pub type VecResult<T> = Result<T, VecError>;
