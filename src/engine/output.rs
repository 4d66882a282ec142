//! Output types for descriptive summaries.
//!
//! ## Purpose
//!
//! This module defines the [`Summary`] struct returned by
//! `Descriptive::describe`, packaging every measure computed over one
//! input into a single result.
//!
//! ## Design notes
//!
//! * Generic over the element type `T` so the type-preserving measures
//!   (mode, range) keep the caller's numeric type.
//! * `mode` is `Option<T>`: a tie across all distinct values is an
//!   expected data shape when summarizing, carried as `None` rather than
//!   failing the whole summary.
//! * Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `count` is the length of the summarized input and is at least 1.
//! * `variance` and `std_dev` were computed under `variance_method`, and
//!   `std_dev` is the square root of `variance`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization/deserialization logic.
//!
//! ## Visibility
//!
//! Part of the public API; the primary result type of the builder.

use core::fmt;

use crate::math::spread::VarianceMethod;

// ============================================================================
// Summary
// ============================================================================

/// Every descriptive measure computed over a single input.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary<T> {
    /// Number of values summarized.
    pub count: usize,

    /// Arithmetic mean.
    pub mean: f64,

    /// Median.
    pub median: f64,

    /// Most frequent value; `None` when no value is strictly more
    /// frequent than the rest.
    pub mode: Option<T>,

    /// Variance under `variance_method`.
    pub variance: f64,

    /// Standard deviation under `variance_method`.
    pub std_dev: f64,

    /// Max − min, in the element type.
    pub range: T,

    /// Estimator used for variance and standard deviation.
    pub variance_method: VarianceMethod,
}

impl<T> Summary<T> {
    /// Check whether a unique mode was found.
    pub fn has_mode(&self) -> bool {
        self.mode.is_some()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: fmt::Display> fmt::Display for Summary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.count)?;
        writeln!(f, "  Variance method: {}", self.variance_method)?;
        writeln!(f)?;

        writeln!(f, "  {:>8}: {:.6}", "Mean", self.mean)?;
        writeln!(f, "  {:>8}: {:.6}", "Median", self.median)?;
        match &self.mode {
            Some(mode) => writeln!(f, "  {:>8}: {}", "Mode", mode)?,
            None => writeln!(f, "  {:>8}: (no unique mode)", "Mode")?,
        }
        writeln!(f, "  {:>8}: {:.6}", "Variance", self.variance)?;
        writeln!(f, "  {:>8}: {:.6}", "Std dev", self.std_dev)?;
        writeln!(f, "  {:>8}: {}", "Range", self.range)?;

        Ok(())
    }
}
