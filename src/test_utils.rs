// SPDX-License-Identifier: MPL-2.0
//! Float comparison helpers shared by unit tests.
//!
//! Eased progress values and gesture ratios are `f32`; speeds are `f64`.
//! Compare them with the `approx` macros rather than `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Tolerance for eased progress values.
pub const F32_EPSILON: f32 = 1e-4;

/// Tolerance for speed multipliers and other `f64` settings.
pub const F64_EPSILON: f64 = 1e-10;
