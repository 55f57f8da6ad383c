// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons in viewer geometry tests.
//!
//! Re-exports the `approx` crate's assertion macros, which handle
//! floating-point precision issues that `assert_eq!` cannot.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Tolerance for geometry values (pixels and scale factors).
pub const F32_EPSILON: f32 = 1e-4;
