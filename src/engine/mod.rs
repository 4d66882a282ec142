//! Layer 3: Engine
//!
//! Input validation and result packaging between the public API and the
//! math kernels.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API (operations, builder)
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math (center, spread)
//!   ↓
//! Layer 1: Primitives (number, errors)
//! ```

/// Input validation.
///
/// Provides:
/// - The [`Validator`](validator::Validator) utility
/// - Fail-fast emptiness and sample-size checks
pub mod validator;

/// Output types.
///
/// Provides:
/// - The [`Summary`](output::Summary) result of `describe`
/// - Query helpers and `Display` rendering
pub mod output;
