// SPDX-License-Identifier: MPL-2.0
//! Pan limits
//!
//! The image is drawn centered in the container and translated by an offset.
//! The offset is clamped so that, on any axis where the scaled image is larger
//! than the container, no empty viewport area is ever exposed.

use crate::config::OVERFLOW_TOLERANCE_PX;
use crate::domain::ui::newtypes::ZoomScale;
use crate::ui::state::fit::CoverFit;
use iced::{Size, Vector};

/// Maximum absolute offset on each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanLimits {
    pub x: f32,
    pub y: f32,
}

impl PanLimits {
    /// Limits for `fit` drawn at `scale` inside `container`.
    ///
    /// Each axis allows `max(0, (rendered * scale - container) / 2)`.
    #[must_use]
    pub fn new(fit: &CoverFit, scale: ZoomScale, container: Size) -> Self {
        let s = scale.value();
        Self {
            x: ((fit.rendered.width * s - container.width) / 2.0).max(0.0),
            y: ((fit.rendered.height * s - container.height) / 2.0).max(0.0),
        }
    }

    /// No movement allowed on either axis.
    pub const LOCKED: Self = Self { x: 0.0, y: 0.0 };

    /// Clamps each axis of `offset` to `[-limit, +limit]`.
    #[must_use]
    pub fn clamp(&self, offset: Vector) -> Vector {
        Vector::new(
            offset.x.clamp(-self.x, self.x),
            offset.y.clamp(-self.y, self.y),
        )
    }
}

/// Whether a press may start a drag: the image is zoomed in, or it already
/// overflows the container by more than the tolerance at rest.
#[must_use]
pub fn can_drag(fit: &CoverFit, scale: ZoomScale, container: Size) -> bool {
    if !scale.is_rest() {
        return true;
    }
    let overflow = fit.overflow(container);
    overflow.width > OVERFLOW_TOLERANCE_PX || overflow.height > OVERFLOW_TOLERANCE_PX
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use crate::ui::state::fit::cover_fit;

    const CONTAINER: Size = Size {
        width: 400.0,
        height: 300.0,
    };

    fn square_fit() -> CoverFit {
        cover_fit(Size::new(300.0, 300.0), CONTAINER).expect("fit")
    }

    #[test]
    fn limits_at_rest_follow_overflow() {
        let fit = cover_fit(Size::new(800.0, 400.0), CONTAINER).expect("fit");
        let limits = PanLimits::new(&fit, ZoomScale::REST, CONTAINER);
        assert_abs_diff_eq!(limits.x, 100.0);
        assert_abs_diff_eq!(limits.y, 0.0);
    }

    #[test]
    fn limits_grow_with_scale() {
        let fit = square_fit(); // 400x400 in 400x300
        let limits = PanLimits::new(&fit, ZoomScale::new(2.0), CONTAINER);
        assert_abs_diff_eq!(limits.x, 200.0);
        assert_abs_diff_eq!(limits.y, 250.0);
    }

    #[test]
    fn clamp_pins_each_axis() {
        let limits = PanLimits { x: 50.0, y: 10.0 };
        let clamped = limits.clamp(Vector::new(-80.0, 4.0));
        assert_abs_diff_eq!(clamped.x, -50.0);
        assert_abs_diff_eq!(clamped.y, 4.0);
    }

    #[test]
    fn locked_limits_force_center() {
        assert_eq!(PanLimits::LOCKED.clamp(Vector::new(12.0, -3.0)), Vector::ZERO);
    }

    #[test]
    fn exact_fit_at_rest_cannot_drag() {
        let fit = cover_fit(Size::new(800.0, 600.0), CONTAINER).expect("fit");
        assert!(!can_drag(&fit, ZoomScale::REST, CONTAINER));
    }

    #[test]
    fn sub_pixel_overflow_is_tolerated() {
        let fit = CoverFit {
            rendered: Size::new(400.5, 300.0),
            is_wider: true,
        };
        assert!(!can_drag(&fit, ZoomScale::REST, CONTAINER));
    }

    #[test]
    fn overflowing_image_can_drag_at_rest() {
        let fit = cover_fit(Size::new(800.0, 400.0), CONTAINER).expect("fit");
        assert!(can_drag(&fit, ZoomScale::REST, CONTAINER));
    }

    #[test]
    fn zoomed_image_can_always_drag() {
        let fit = cover_fit(Size::new(800.0, 600.0), CONTAINER).expect("fit");
        assert!(can_drag(&fit, ZoomScale::new(1.1), CONTAINER));
    }
}
