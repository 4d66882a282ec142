//! High-level API for descriptive statistics.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: six stateless
//! operations over numeric slices, plus the [`Descriptive`] builder for
//! computing every measure in one call.
//!
//! ## Design notes
//!
//! * Every operation validates fail-fast, then delegates to a math
//!   kernel; no error is ever swallowed or defaulted.
//! * Generic over the [`Number`] capability so integer and float slices
//!   share one API.
//! * Inputs are borrowed immutably and never retained beyond the call.
//! * All operations are pure, synchronous, and free of shared state, so
//!   they are safe to invoke from any number of threads without
//!   coordination.
//! * Calling an operation twice on the same unmodified input yields
//!   bit-identical results.
//!
//! ## Key concepts
//!
//! ### Estimator selection
//!
//! Variance and standard deviation take a [`VarianceMethod`] selecting
//! the sample (n − 1) or population (n) estimator. The sample estimator
//! is the default and requires at least two values.
//!
//! ### One-call summaries
//!
//! [`Descriptive`] computes all six measures over a single input and
//! packages them into a [`Summary`]. Unlike the standalone [`mode`]
//! function, the builder carries a missing mode as `None` instead of an
//! error.
//!
//! ## Visibility
//!
//! This is the primary public API. Everything re-exported here is
//! considered stable.

use core::result;

use crate::engine::output::Summary;
use crate::engine::validator::Validator;
use crate::math::center::{compute_mean, compute_median, compute_mode};
use crate::math::spread::{compute_range, compute_std_dev, compute_variance};
use crate::primitives::errors::StatsError;
use crate::primitives::number::Number;

pub use crate::math::spread::VarianceMethod;

/// Result type alias for statistics operations.
pub type Result<T> = result::Result<T, StatsError>;

/// Minimum number of values for the sample estimator (divisor n − 1).
const MIN_SAMPLE_LEN: usize = 2;

// ============================================================================
// Operations
// ============================================================================

/// Arithmetic mean (average) of `values`, computed in floating point.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] if `values` is empty.
///
/// # Example
///
/// ```
/// use simplestat::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0])?, 3.0);
/// assert_eq!(mean(&[1, 2, 3, 4])?, 2.5);
/// # Ok::<(), simplestat::StatsError>(())
/// ```
pub fn mean<T: Number>(values: &[T]) -> Result<f64> {
    Validator::validate_non_empty(values)?;
    Ok(compute_mean(values))
}

/// Median (middle value) of `values`.
///
/// Even-length inputs yield the average of the two middle values;
/// odd-length inputs yield the middle value itself.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] if `values` is empty.
///
/// # Example
///
/// ```
/// use simplestat::median;
///
/// assert_eq!(median(&[1, 2, 3, 4, 5])?, 3.0);
/// assert_eq!(median(&[1, 2, 3, 4])?, 2.5);
/// # Ok::<(), simplestat::StatsError>(())
/// ```
pub fn median<T: Number>(values: &[T]) -> Result<f64> {
    Validator::validate_non_empty(values)?;
    Ok(compute_median(values))
}

/// Mode (most frequent value) of `values`, preserving the element type.
///
/// When several values share the maximum count without every distinct
/// value being tied, the winner is the one seen first. A sequence in
/// which every distinct value is equally frequent (including the
/// all-unique case) has no mode.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] if `values` is empty, and
/// [`StatsError::NoUniqueMode`] when all distinct values tie for the
/// maximum frequency.
///
/// # Example
///
/// ```
/// use simplestat::{mode, StatsError};
///
/// assert_eq!(mode(&[1, 2, 2, 3, 4])?, 2);
/// assert_eq!(mode(&[1, 2, 3]), Err(StatsError::NoUniqueMode));
/// # Ok::<(), StatsError>(())
/// ```
pub fn mode<T: Number>(values: &[T]) -> Result<T> {
    Validator::validate_non_empty(values)?;
    compute_mode(values).ok_or(StatsError::NoUniqueMode)
}

/// Variance of `values` under the given estimator.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] if `values` is empty, and
/// [`StatsError::InsufficientSampleSize`] when the sample estimator is
/// selected and fewer than two values are supplied.
///
/// # Example
///
/// ```
/// use simplestat::{variance, VarianceMethod};
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(variance(&data, VarianceMethod::Sample)?, 2.5);
/// assert_eq!(variance(&data, VarianceMethod::Population)?, 2.0);
/// # Ok::<(), simplestat::StatsError>(())
/// ```
pub fn variance<T: Number>(values: &[T], method: VarianceMethod) -> Result<f64> {
    Validator::validate_non_empty(values)?;
    if method == VarianceMethod::Sample {
        Validator::validate_min_len(values, MIN_SAMPLE_LEN)?;
    }
    Ok(compute_variance(values, method))
}

/// Standard deviation of `values`: the square root of [`variance`].
///
/// # Errors
///
/// Propagates the failure conditions of [`variance`] unchanged.
pub fn standard_deviation<T: Number>(values: &[T], method: VarianceMethod) -> Result<f64> {
    Validator::validate_non_empty(values)?;
    if method == VarianceMethod::Sample {
        Validator::validate_min_len(values, MIN_SAMPLE_LEN)?;
    }
    Ok(compute_std_dev(values, method))
}

/// Range of `values` (max − min), preserving the element type.
///
/// Integer inputs yield an integer result; float inputs yield a float.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] if `values` is empty.
///
/// # Example
///
/// ```
/// use simplestat::range_of_values;
///
/// assert_eq!(range_of_values(&[1, 2, 3, 4, 5])?, 4);
/// # Ok::<(), simplestat::StatsError>(())
/// ```
pub fn range_of_values<T: Number>(values: &[T]) -> Result<T> {
    Validator::validate_non_empty(values)?;
    Ok(compute_range(values))
}

// ============================================================================
// Descriptive Builder
// ============================================================================

/// Fluent builder for computing a full descriptive [`Summary`] in one
/// call.
///
/// # Example
///
/// ```
/// use simplestat::{Descriptive, VarianceMethod};
///
/// let summary = Descriptive::new()
///     .variance_method(VarianceMethod::Population)
///     .describe(&[1.0, 2.0, 2.0, 3.0, 4.0])?;
///
/// assert_eq!(summary.count, 5);
/// assert_eq!(summary.mode, Some(2.0));
/// # Ok::<(), simplestat::StatsError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Descriptive {
    /// Estimator for variance and standard deviation.
    variance_method: VarianceMethod,
}

impl Descriptive {
    /// Create a builder with default settings (sample estimator).
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the estimator used for variance and standard deviation.
    pub fn variance_method(mut self, method: VarianceMethod) -> Self {
        self.variance_method = method;
        self
    }

    /// Compute every measure over `values`.
    ///
    /// A sequence without a unique mode is not an error here: the
    /// condition is carried as `mode: None` in the [`Summary`].
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptyInput`] for empty input, and
    /// [`StatsError::InsufficientSampleSize`] when the sample estimator
    /// is selected and fewer than two values are supplied.
    pub fn describe<T: Number>(&self, values: &[T]) -> Result<Summary<T>> {
        Validator::validate_non_empty(values)?;
        if self.variance_method == VarianceMethod::Sample {
            Validator::validate_min_len(values, MIN_SAMPLE_LEN)?;
        }

        Ok(Summary {
            count: values.len(),
            mean: compute_mean(values),
            median: compute_median(values),
            mode: compute_mode(values),
            variance: compute_variance(values, self.variance_method),
            std_dev: compute_std_dev(values, self.variance_method),
            range: compute_range(values),
            variance_method: self.variance_method,
        })
    }
}
