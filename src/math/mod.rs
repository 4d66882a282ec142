//! Layer 2: Math
//!
//! Pure computation kernels. Kernels assume validated input (the API
//! layer checks emptiness and sample size first), rely on documented
//! invariants instead of re-checking them, and construct no error values.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API (operations, builder)
//!   ↓
//! Layer 3: Engine (validator, output)
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives (number, errors)
//! ```

/// Central tendency kernels.
///
/// Provides:
/// - Arithmetic mean in `f64`
/// - Selection-based median
/// - First-occurrence-ordered mode
pub mod center;

/// Dispersion kernels.
///
/// Provides:
/// - Sample/population variance and standard deviation
/// - Type-preserving range
/// - The [`VarianceMethod`](spread::VarianceMethod) estimator selector
pub mod spread;
