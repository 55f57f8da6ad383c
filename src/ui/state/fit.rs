// SPDX-License-Identifier: MPL-2.0
//! Cover-fit sizing
//!
//! Scales an image so it fills the container completely, overflowing along
//! exactly one axis when the aspect ratios differ.

use iced::Size;

/// Result of fitting an image into a container in cover mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverFit {
    /// Size of the image at scale 1.
    pub rendered: Size,
    /// True when the image is relatively wider than the container
    /// (height matches, width overflows).
    pub is_wider: bool,
}

impl CoverFit {
    /// Overflow beyond the container on each axis at scale 1 (never negative).
    #[must_use]
    pub fn overflow(&self, container: Size) -> Size {
        Size::new(
            (self.rendered.width - container.width).max(0.0),
            (self.rendered.height - container.height).max(0.0),
        )
    }
}

fn is_usable(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}

/// Computes the cover-fit size of `natural` inside `container`.
///
/// Returns `None` while either size is zero, negative or non-finite, meaning
/// no rendering decision can be made yet.
#[must_use]
pub fn cover_fit(natural: Size, container: Size) -> Option<CoverFit> {
    if !is_usable(natural) || !is_usable(container) {
        return None;
    }

    let container_ratio = container.width / container.height;
    let image_ratio = natural.width / natural.height;

    let fit = if image_ratio > container_ratio {
        CoverFit {
            rendered: Size::new(container.height * image_ratio, container.height),
            is_wider: true,
        }
    } else {
        CoverFit {
            rendered: Size::new(container.width, container.width / image_ratio),
            is_wider: false,
        }
    };
    Some(fit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn wide_image_matches_container_height() {
        let fit = cover_fit(Size::new(800.0, 400.0), Size::new(400.0, 300.0)).expect("fit");
        assert!(fit.is_wider);
        assert_abs_diff_eq!(fit.rendered.width, 600.0);
        assert_abs_diff_eq!(fit.rendered.height, 300.0);
    }

    #[test]
    fn tall_image_matches_container_width() {
        let fit = cover_fit(Size::new(400.0, 800.0), Size::new(400.0, 300.0)).expect("fit");
        assert!(!fit.is_wider);
        assert_abs_diff_eq!(fit.rendered.width, 400.0);
        assert_abs_diff_eq!(fit.rendered.height, 800.0);
    }

    #[test]
    fn equal_ratio_fills_exactly() {
        let fit = cover_fit(Size::new(1600.0, 1200.0), Size::new(400.0, 300.0)).expect("fit");
        assert!(!fit.is_wider);
        assert_eq!(fit.overflow(Size::new(400.0, 300.0)), Size::new(0.0, 0.0));
    }

    #[test]
    fn zero_container_has_no_decision() {
        assert!(cover_fit(Size::new(800.0, 400.0), Size::new(0.0, 300.0)).is_none());
        assert!(cover_fit(Size::new(800.0, 400.0), Size::new(400.0, 0.0)).is_none());
    }

    #[test]
    fn zero_or_non_finite_image_has_no_decision() {
        let container = Size::new(400.0, 300.0);
        assert!(cover_fit(Size::new(0.0, 400.0), container).is_none());
        assert!(cover_fit(Size::new(f32::NAN, 400.0), container).is_none());
        assert!(cover_fit(Size::new(f32::INFINITY, 400.0), container).is_none());
    }

    #[test]
    fn overflow_is_reported_on_one_axis() {
        let container = Size::new(400.0, 300.0);
        let fit = cover_fit(Size::new(800.0, 400.0), container).expect("fit");
        let overflow = fit.overflow(container);
        assert_abs_diff_eq!(overflow.width, 200.0);
        assert_abs_diff_eq!(overflow.height, 0.0);
    }
}
