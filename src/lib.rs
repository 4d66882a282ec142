//! Elementary descriptive statistics over in-memory numeric slices.
//!
//! ## Purpose
//!
//! `simplestat` provides six stateless operations (mean, median, mode,
//! variance, standard deviation, and range), generic over integer and
//! float element types, plus a [`Descriptive`] builder that computes
//! every measure in one call.
//!
//! ## Design notes
//!
//! * All operations are pure, synchronous, and borrow their input; there
//!   is no shared state anywhere in the crate.
//! * Inputs are generic over the [`Number`](primitives::number::Number)
//!   capability, so `&[i32]` and `&[f64]` share one API.
//! * Contract violations (empty input, too few values for the sample
//!   estimator, no unique mode) are typed errors, never NaN or a default.
//! * `no_std`-capable: disable default features and enable `libm` to
//!   route float math through `num-traits`/`libm`.
//!
//! ## Architecture
//!
//! ```text
//! Layer 4: API        (operations, Descriptive builder)
//!   ↓
//! Layer 3: Engine     (validator, output)
//!   ↓
//! Layer 2: Math       (center, spread kernels)
//!   ↓
//! Layer 1: Primitives (number, errors)
//! ```
//!
//! ## Example
//!
//! ```
//! use simplestat::prelude::*;
//!
//! let data = [1.0, 2.0, 2.0, 3.0, 4.0];
//!
//! assert_eq!(mean(&data)?, 2.4);
//! assert_eq!(mode(&data)?, 2.0);
//!
//! let summary = Descriptive::new().describe(&data)?;
//! assert_eq!(summary.range, 3.0);
//! # Ok::<(), StatsError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod api;
pub mod engine;
pub mod math;
pub mod primitives;

pub use api::{mean, median, mode, range_of_values, standard_deviation, variance};
pub use api::{Descriptive, Result, VarianceMethod};
pub use engine::output::Summary;
pub use primitives::errors::StatsError;

/// Convenience re-exports of the user-facing surface.
pub mod prelude {
    pub use crate::api::{
        mean, median, mode, range_of_values, standard_deviation, variance, Descriptive, Result,
        VarianceMethod,
    };
    pub use crate::engine::output::Summary;
    pub use crate::primitives::errors::StatsError;
    pub use crate::primitives::number::Number;
}
