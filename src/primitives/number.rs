//! Numeric capability bound for sample elements.
//!
//! ## Purpose
//!
//! Defines the [`Number`] trait used as the generic bound by every
//! operation in the crate: arithmetic, comparison, and conversion to
//! floating point.
//!
//! ## Design notes
//!
//! * Blanket-implemented; never implemented by hand.
//! * Integer and float primitives all qualify, so `&[i32]` and `&[f64]`
//!   flow through the same generic functions.
//! * Conversion to `f64` goes through `num_traits::NumCast`.

use num_traits::{Num, NumCast};

/// Capability bound for sample elements.
///
/// Covers arithmetic (`Num`), comparison (`PartialOrd`), and conversion
/// to floating point (`NumCast`).
pub trait Number: Num + NumCast + PartialOrd + Copy {}

impl<T> Number for T where T: Num + NumCast + PartialOrd + Copy {}
