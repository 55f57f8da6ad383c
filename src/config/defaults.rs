// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Scale bounds, button step and wheel sensitivity
//! - **Pan**: Overflow tolerance used to decide whether panning is possible
//! - **Swipe**: Distance threshold for touch-swipe navigation
//! - **Hint**: Auto-hide delay of the zoom/pan hint overlay

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Scale when an image is shown at rest (cover-fit, no magnification).
pub const MIN_SCALE: f32 = 1.0;

/// Maximum magnification relative to the cover-fit size.
pub const MAX_SCALE: f32 = 3.0;

/// Scale change applied by the zoom-in and zoom-out buttons.
pub const ZOOM_BUTTON_STEP: f32 = 0.5;

/// Zooming out to this scale or below snaps the pan offset back to center.
pub const ZOOM_OUT_RECENTER_THRESHOLD: f32 = 1.5;

/// Scale change per pixel of vertical wheel delta.
pub const DEFAULT_WHEEL_SENSITIVITY: f32 = 0.001;

/// Minimum accepted wheel sensitivity.
pub const MIN_WHEEL_SENSITIVITY: f32 = 0.0001;

/// Maximum accepted wheel sensitivity.
pub const MAX_WHEEL_SENSITIVITY: f32 = 0.01;

/// Pixels per wheel "line" when the platform reports line-based deltas.
pub const WHEEL_LINE_HEIGHT_PX: f32 = 100.0;

// ==========================================================================
// Pan Defaults
// ==========================================================================

/// Cover-fit overflow (in pixels) above which an unzoomed image is draggable.
pub const OVERFLOW_TOLERANCE_PX: f32 = 1.0;

// ==========================================================================
// Swipe Defaults
// ==========================================================================

/// Horizontal distance a single touch must travel to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Minimum accepted swipe threshold.
pub const MIN_SWIPE_THRESHOLD_PX: f32 = 10.0;

/// Maximum accepted swipe threshold.
pub const MAX_SWIPE_THRESHOLD_PX: f32 = 400.0;

// ==========================================================================
// Hint Defaults
// ==========================================================================

/// Default auto-hide delay of the zoom/pan hint (in milliseconds).
pub const DEFAULT_HINT_TIMEOUT_MS: u64 = 3000;

/// Minimum hint timeout (in milliseconds).
pub const MIN_HINT_TIMEOUT_MS: u64 = 500;

/// Maximum hint timeout (in milliseconds).
pub const MAX_HINT_TIMEOUT_MS: u64 = 30_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Zoom validation
    assert!(MIN_SCALE > 0.0);
    assert!(MAX_SCALE > MIN_SCALE);
    assert!(ZOOM_BUTTON_STEP > 0.0);
    assert!(ZOOM_OUT_RECENTER_THRESHOLD >= MIN_SCALE);
    assert!(ZOOM_OUT_RECENTER_THRESHOLD <= MAX_SCALE);
    assert!(MIN_WHEEL_SENSITIVITY > 0.0);
    assert!(DEFAULT_WHEEL_SENSITIVITY >= MIN_WHEEL_SENSITIVITY);
    assert!(DEFAULT_WHEEL_SENSITIVITY <= MAX_WHEEL_SENSITIVITY);

    // Swipe validation
    assert!(MIN_SWIPE_THRESHOLD_PX > 0.0);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX >= MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX <= MAX_SWIPE_THRESHOLD_PX);

    // Hint timeout validation
    assert!(MIN_HINT_TIMEOUT_MS > 0);
    assert!(MAX_HINT_TIMEOUT_MS >= MIN_HINT_TIMEOUT_MS);
    assert!(DEFAULT_HINT_TIMEOUT_MS >= MIN_HINT_TIMEOUT_MS);
    assert!(DEFAULT_HINT_TIMEOUT_MS <= MAX_HINT_TIMEOUT_MS);
};
