//! Dispersion kernels: variance, standard deviation, and range.
//!
//! ## Purpose
//!
//! This module provides the pure computation kernels for the measures of
//! dispersion, plus the [`VarianceMethod`] selector that chooses between
//! the sample and population estimators.
//!
//! ## Design notes
//!
//! * Kernels assume validated input: non-empty always, and at least two
//!   values when the sample estimator is selected. The API layer enforces
//!   both before delegating here.
//! * Variance and standard deviation are computed in `f64`; the range is
//!   type-preserving (integer inputs yield an integer result).
//! * Standard deviation is the square root of the variance and carries no
//!   independent logic; the kernel chain is std-dev → variance → mean.
//! * `Float::sqrt` comes from `num-traits` so `no_std` builds can route
//!   float math through the `libm` feature.
//!
//! ## Key concepts
//!
//! ### Sample vs. population
//!
//! The sample estimator divides the squared-deviation sum by n − 1
//! (Bessel's correction); the population estimator divides by n. Sample
//! is the default, matching the common case of data drawn from a larger
//! population.
//!
//! ## Invariants
//!
//! * `compute_variance`/`compute_std_dev` require `!values.is_empty()`,
//!   and `values.len() >= 2` under [`VarianceMethod::Sample`].
//! * `compute_range` requires `!values.is_empty()`.
//!
//! ## Visibility
//!
//! [`VarianceMethod`] is part of the public API; the kernels are internal
//! and surfaced through the API layer.

use num_traits::Float;

use crate::math::center::compute_mean;
use crate::primitives::number::Number;

// ============================================================================
// Variance Method
// ============================================================================

/// Variance estimator selection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum VarianceMethod {
    /// Sample variance - divides by n − 1, correcting bias when the data
    /// is a sample of a larger population. Default.
    #[default]
    Sample,

    /// Population variance - divides by n, for data constituting the
    /// entire population.
    Population,
}

impl VarianceMethod {
    /// Divisor for the squared-deviation sum over `n` values.
    fn divisor(self, n: usize) -> f64 {
        match self {
            VarianceMethod::Sample => (n - 1) as f64,
            VarianceMethod::Population => n as f64,
        }
    }
}

impl core::fmt::Display for VarianceMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            VarianceMethod::Sample => write!(f, "sample"),
            VarianceMethod::Population => write!(f, "population"),
        }
    }
}

// ============================================================================
// Variance and Standard Deviation
// ============================================================================

/// Variance of `values` under the given estimator, computed in `f64`.
///
/// # Formula
///
/// ```text
/// variance = Σ (x_i − mean)² / divisor
/// ```
///
/// where the divisor is n − 1 for [`VarianceMethod::Sample`] and n for
/// [`VarianceMethod::Population`].
pub fn compute_variance<T: Number>(values: &[T], method: VarianceMethod) -> f64 {
    let avg = compute_mean(values);

    let sum_sq: f64 = values
        .iter()
        .map(|&x| {
            let dev = x.to_f64().unwrap_or(f64::NAN) - avg;
            dev * dev
        })
        .sum();

    sum_sq / method.divisor(values.len())
}

/// Standard deviation of `values`: the square root of the variance.
pub fn compute_std_dev<T: Number>(values: &[T], method: VarianceMethod) -> f64 {
    Float::sqrt(compute_variance(values, method))
}

// ============================================================================
// Range
// ============================================================================

/// Range of `values` (max − min) in a single pass, preserving the element
/// type.
pub fn compute_range<T: Number>(values: &[T]) -> T {
    let mut min = values[0];
    let mut max = values[0];

    for &x in &values[1..] {
        if x < min {
            min = x;
        }
        if x > max {
            max = x;
        }
    }

    max - min
}

#[cfg(test)]
mod tests {
    use super::{compute_range, compute_std_dev, compute_variance, VarianceMethod};
    use approx::assert_relative_eq;

    #[test]
    fn sample_and_population_divisors_differ() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(compute_variance(&data, VarianceMethod::Sample), 2.5);
        assert_eq!(compute_variance(&data, VarianceMethod::Population), 2.0);
    }

    #[test]
    fn std_dev_is_sqrt_of_variance() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(
            compute_std_dev(&data, VarianceMethod::Sample),
            1.5811388300841898,
            epsilon = 1e-12
        );
    }

    #[test]
    fn range_preserves_integer_type() {
        let r: u32 = compute_range(&[7u32, 3, 9]);
        assert_eq!(r, 6);
        assert_eq!(compute_range(&[-5i32, 3]), 8);
        assert_eq!(compute_range(&[1.5, -0.5, 0.25]), 2.0);
    }

    #[test]
    fn default_method_is_sample() {
        assert_eq!(VarianceMethod::default(), VarianceMethod::Sample);
    }
}
