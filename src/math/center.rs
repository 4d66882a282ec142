//! Central tendency kernels: mean, median, and mode.
//!
//! ## Purpose
//!
//! This module provides the pure computation kernels for the measures of
//! central tendency. The public operations in the API layer validate
//! inputs and delegate here.
//!
//! ## Design notes
//!
//! * Kernels assume a non-empty input; the API layer validates first.
//! * `compute_mean` and `compute_median` work in `f64` regardless of the
//!   element type; `compute_mode` is type-preserving.
//! * The median uses Quickselect (`select_nth_unstable_by`) for O(n)
//!   average-case selection instead of a full sort.
//! * Mode counting preserves first-occurrence order, which decides the
//!   winner among equally frequent (but not all-tied) values.
//!
//! ## Invariants
//!
//! * `compute_mean` and `compute_median` require `!values.is_empty()`.
//! * `compute_mode` returns `None` exactly when every distinct value
//!   attains the maximum frequency (including the all-unique case).
//!
//! ## Non-goals
//!
//! * No streaming or incremental variants.
//! * No handling of non-finite values; each NaN compares unequal to
//!   everything, itself included, and counts as its own distinct value.
//!
//! ## Visibility
//!
//! Internal kernels; the public surface lives in the API layer.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::cmp::Ordering;

use crate::primitives::number::Number;

// ============================================================================
// Mean
// ============================================================================

/// Arithmetic mean of `values`, computed in `f64`.
pub fn compute_mean<T: Number>(values: &[T]) -> f64 {
    let sum: f64 = values
        .iter()
        .map(|&x| x.to_f64().unwrap_or(f64::NAN))
        .sum();

    sum / values.len() as f64
}

// ============================================================================
// Median
// ============================================================================

/// Median of `values`, computed in `f64`.
///
/// # Formula
///
/// For `n` values and `mid = n / 2`:
///
/// ```text
/// even n:  (sorted[mid - 1] + sorted[mid]) / 2
/// odd n:   sorted[mid]
/// ```
///
/// Selection replaces the full sort: after partitioning around `mid`, the
/// lower middle value for even `n` is the maximum of the lower partition.
pub fn compute_median<T: Number>(values: &[T]) -> f64 {
    let mut vals: Vec<f64> = values
        .iter()
        .map(|&x| x.to_f64().unwrap_or(f64::NAN))
        .collect();

    let n = vals.len();
    if n == 1 {
        return vals[0];
    }

    let mid = n / 2;

    if n % 2 == 0 {
        // Even length: average of the two middle values
        vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        let upper = vals[mid];

        // Largest value in the lower partition
        let lower = vals[..mid].iter().copied().fold(f64::NEG_INFINITY, f64::max);

        (lower + upper) / 2.0
    } else {
        // Odd length: middle value
        vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        vals[mid]
    }
}

// ============================================================================
// Mode
// ============================================================================

/// Most frequent value of `values`, preserving the element type.
///
/// Occurrences are counted per distinct value in first-occurrence order.
/// Returns `None` when every distinct value attains the maximum count,
/// since no value is then strictly more frequent than the rest. Otherwise the
/// first value (in first-occurrence order) among those attaining the
/// maximum count is returned.
pub fn compute_mode<T: Number>(values: &[T]) -> Option<T> {
    // First-occurrence-ordered frequency table. A linear scan per element
    // keeps the ordering without requiring Hash or a total order on T.
    let mut counts: Vec<(T, usize)> = Vec::new();
    for &x in values {
        match counts.iter_mut().find(|entry| entry.0 == x) {
            Some(entry) => entry.1 += 1,
            None => counts.push((x, 1)),
        }
    }

    let max_count = counts.iter().map(|entry| entry.1).max()?;

    // Every distinct value tied at the maximum: no mode.
    if counts.iter().all(|entry| entry.1 == max_count) {
        return None;
    }

    counts
        .iter()
        .find(|entry| entry.1 == max_count)
        .map(|entry| entry.0)
}
