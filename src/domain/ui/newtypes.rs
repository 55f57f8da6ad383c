// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for viewer values,
//! ensuring they are always within valid ranges.

use crate::config::{
    DEFAULT_HINT_TIMEOUT_MS, DEFAULT_SWIPE_THRESHOLD_PX, DEFAULT_WHEEL_SENSITIVITY,
    MAX_HINT_TIMEOUT_MS, MAX_SCALE, MAX_SWIPE_THRESHOLD_PX, MAX_WHEEL_SENSITIVITY,
    MIN_HINT_TIMEOUT_MS, MIN_SCALE, MIN_SWIPE_THRESHOLD_PX, MIN_WHEEL_SENSITIVITY,
};
use std::time::Duration;

// =============================================================================
// ZoomScale
// =============================================================================

/// Magnification relative to the cover-fit size, guaranteed to be within
/// `[1.0, 3.0]`.
///
/// Every constructor clamps, so sequences of wheel and button zooms can never
/// leave the valid range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ZoomScale(f32);

impl ZoomScale {
    /// The resting scale (no magnification).
    pub const REST: Self = Self(MIN_SCALE);

    /// Creates a new scale, clamping the value to the valid range.
    ///
    /// Non-finite input collapses to the resting scale.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(MIN_SCALE, MAX_SCALE))
        } else {
            Self::REST
        }
    }

    /// Returns the raw multiplier.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the image is shown at rest (scale exactly 1).
    #[must_use]
    pub fn is_rest(self) -> bool {
        self.0 <= MIN_SCALE
    }

    /// Returns whether the scale is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_SCALE
    }

    /// Increases the scale by `step`.
    #[must_use]
    pub fn zoom_in(self, step: f32) -> Self {
        Self::new(self.0 + step)
    }

    /// Decreases the scale by `step`.
    #[must_use]
    pub fn zoom_out(self, step: f32) -> Self {
        Self::new(self.0 - step)
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self::REST
    }
}

// =============================================================================
// WheelSensitivity
// =============================================================================

/// Scale change per pixel of wheel delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelSensitivity(f32);

impl WheelSensitivity {
    /// Creates a new sensitivity, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(MIN_WHEEL_SENSITIVITY, MAX_WHEEL_SENSITIVITY))
        } else {
            Self::default()
        }
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for WheelSensitivity {
    fn default() -> Self {
        Self(DEFAULT_WHEEL_SENSITIVITY)
    }
}

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Minimum horizontal travel (in pixels) of a swipe gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold, clamping the value to the valid range.
    #[must_use]
    pub fn new(px: f32) -> Self {
        if px.is_finite() {
            Self(px.clamp(MIN_SWIPE_THRESHOLD_PX, MAX_SWIPE_THRESHOLD_PX))
        } else {
            Self::default()
        }
    }

    /// Returns the threshold in pixels.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(DEFAULT_SWIPE_THRESHOLD_PX)
    }
}

// =============================================================================
// HintTimeout
// =============================================================================

/// Auto-hide delay of the zoom/pan hint.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (0.5–30 seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintTimeout(u64);

impl HintTimeout {
    /// Creates a new timeout in milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(MIN_HINT_TIMEOUT_MS, MAX_HINT_TIMEOUT_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the timeout as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for HintTimeout {
    fn default() -> Self {
        Self(DEFAULT_HINT_TIMEOUT_MS)
    }
}

// =============================================================================
// Tests
// =============================================================================
