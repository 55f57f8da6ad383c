// SPDX-License-Identifier: MPL-2.0
//! Zoom rules
//!
//! This module handles how wheel and button input changes the viewer scale:
//! - Wheel zoom proportional to the vertical delta
//! - Fixed-step zoom in/out buttons
//! - Re-centering when zooming out close to rest

use crate::config::{WHEEL_LINE_HEIGHT_PX, ZOOM_BUTTON_STEP, ZOOM_OUT_RECENTER_THRESHOLD};
use crate::domain::ui::newtypes::{WheelSensitivity, ZoomScale};
use iced::mouse::ScrollDelta;

/// Converts a wheel event into a pixel delta where positive means
/// "scrolled down" (away from the user), i.e. zoom out.
///
/// Line-based deltas are converted at [`WHEEL_LINE_HEIGHT_PX`] per line.
#[must_use]
pub fn wheel_delta_px(delta: ScrollDelta) -> f32 {
    // Iced reports scrolling down as a negative y.
    match delta {
        ScrollDelta::Lines { y, .. } => -y * WHEEL_LINE_HEIGHT_PX,
        ScrollDelta::Pixels { y, .. } => -y,
    }
}

/// Applies a wheel delta (see [`wheel_delta_px`]) to `scale`.
#[must_use]
pub fn wheel(scale: ZoomScale, delta_px: f32, sensitivity: WheelSensitivity) -> ZoomScale {
    if !delta_px.is_finite() {
        return scale;
    }
    ZoomScale::new(scale.value() - delta_px * sensitivity.value())
}

/// One button step in.
#[must_use]
pub fn zoom_in(scale: ZoomScale) -> ZoomScale {
    scale.zoom_in(ZOOM_BUTTON_STEP)
}

/// Result of a zoom-out button press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomOut {
    pub scale: ZoomScale,
    /// The offset must snap back to the center.
    pub recenter: bool,
}

/// One button step out; at or below the recenter threshold the pan is reset.
#[must_use]
pub fn zoom_out(scale: ZoomScale) -> ZoomOut {
    let scale = scale.zoom_out(ZOOM_BUTTON_STEP);
    ZoomOut {
        scale,
        recenter: scale.value() <= ZOOM_OUT_RECENTER_THRESHOLD,
    }
}
