//! Shared error types for statistics operations.
//!
//! ## Purpose
//!
//! This module defines the unified [`StatsError`] enum returned by every
//! fallible operation in the crate.
//!
//! ## Design notes
//!
//! * Errors are contract violations on input, not transient failures:
//!   they surface immediately to the caller and are never retried,
//!   logged, or defaulted.
//! * Variants carry the offending counts where that helps debugging.
//! * `std::error::Error` is implemented when the `std` feature is
//!   enabled; the enum itself is `no_std`-clean.
//!
//! ## Visibility
//!
//! Part of the public API; returned from all operations.

use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Unified error type for all statistics operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// The input slice was empty.
    EmptyInput,

    /// Every distinct value ties at the maximum frequency, so no value
    /// is strictly more frequent than the rest.
    NoUniqueMode,

    /// Too few values for the requested estimator.
    InsufficientSampleSize {
        /// Number of values supplied.
        got: usize,
        /// Minimum required.
        min: usize,
    },
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::EmptyInput => {
                write!(f, "input must contain at least one value")
            }
            StatsError::NoUniqueMode => {
                write!(f, "no unique mode: all distinct values are equally frequent")
            }
            StatsError::InsufficientSampleSize { got, min } => {
                write!(
                    f,
                    "sample estimator requires at least {} values, got {}",
                    min, got
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StatsError {}

#[cfg(test)]
mod tests {
    use super::StatsError;

    #[test]
    fn display_carries_counts() {
        let err = StatsError::InsufficientSampleSize { got: 1, min: 2 };
        let msg = err.to_string();
        assert!(msg.contains("at least 2"));
        assert!(msg.contains("got 1"));
    }

    #[test]
    fn display_empty_input() {
        assert_eq!(
            StatsError::EmptyInput.to_string(),
            "input must contain at least one value"
        );
    }
}
