// SPDX-License-Identifier: MPL-2.0
//! Touch gestures: swipe vs. pan
//!
//! A single finger that travels mostly horizontally by more than the swipe
//! threshold is a swipe, but only while the image is at rest (scale 1). When
//! zoomed in, the same movement is a pan and never navigates. A second finger
//! cancels any pending swipe.

use crate::domain::ui::newtypes::{SwipeThreshold, ZoomScale};
use iced::Point;

/// Navigation requested by a swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right to left.
    Next,
    /// Finger moved left to right.
    Previous,
}

/// What a completed single-finger touch meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchGesture {
    Swipe(SwipeDirection),
    /// The movement panned a zoomed image.
    Pan,
    /// Too short, too vertical, or cancelled.
    None,
}

/// Decides between swipe and pan for a touch from `start` to `end`.
///
/// - `scale > 1`: always [`TouchGesture::Pan`].
/// - `scale == 1`: a swipe when `|dx| > |dy|` and `|dx| > threshold`;
///   `dx < 0` requests the next image, `dx > 0` the previous one.
#[must_use]
pub fn classify(
    start: Point,
    end: Point,
    scale: ZoomScale,
    threshold: SwipeThreshold,
) -> TouchGesture {
    if !scale.is_rest() {
        return TouchGesture::Pan;
    }

    let dx = end.x - start.x;
    let dy = end.y - start.y;
    if dx.abs() > dy.abs() && dx.abs() > threshold.value() {
        if dx > 0.0 {
            TouchGesture::Swipe(SwipeDirection::Previous)
        } else {
            TouchGesture::Swipe(SwipeDirection::Next)
        }
    } else {
        TouchGesture::None
    }
}

/// Tracks fingers on the surface to find single-finger gestures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TouchTracker {
    /// First finger down and where it started.
    primary: Option<(u64, Point)>,
    /// Fingers currently down.
    active: Vec<u64>,
    /// A second finger joined; the current gesture cannot be a swipe.
    multi_touch: bool,
}

impl TouchTracker {
    /// Records a finger going down. Returns true when it is the only finger.
    pub fn press(&mut self, id: u64, position: Point) -> bool {
        if !self.active.contains(&id) {
            self.active.push(id);
        }
        if self.active.len() == 1 {
            self.primary = Some((id, position));
            self.multi_touch = false;
            true
        } else {
            self.multi_touch = true;
            false
        }
    }

    /// True while exactly one finger, `id`, is down.
    #[must_use]
    pub fn is_single(&self, id: u64) -> bool {
        !self.multi_touch && self.active.len() == 1 && self.active[0] == id
    }

    /// Records a finger going up. Returns the start point when this ends an
    /// uninterrupted single-finger gesture.
    pub fn lift(&mut self, id: u64) -> Option<Point> {
        let single = self.is_single(id);
        self.active.retain(|&finger| finger != id);

        let start = match self.primary {
            Some((primary, start)) if single && primary == id => Some(start),
            _ => None,
        };
        if self.active.is_empty() {
            self.primary = None;
            self.multi_touch = false;
        }
        start
    }

    /// Forgets a finger the platform stopped tracking.
    pub fn lose(&mut self, id: u64) {
        self.active.retain(|&finger| finger != id);
        if self.active.is_empty() {
            self.primary = None;
            self.multi_touch = false;
        } else {
            self.multi_touch = true;
        }
    }

    /// Drops all touch state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn threshold() -> SwipeThreshold {
        SwipeThreshold::default()
    }

    #[test]
    fn left_swipe_at_rest_requests_next() {
        let gesture = classify(
            Point::new(200.0, 100.0),
            Point::new(140.0, 110.0),
            ZoomScale::REST,
            threshold(),
        );
        assert_eq!(gesture, TouchGesture::Swipe(SwipeDirection::Next));
    }

    #[test]
    fn right_swipe_at_rest_requests_previous() {
        let gesture = classify(
            Point::new(100.0, 100.0),
            Point::new(160.0, 100.0),
            ZoomScale::REST,
            threshold(),
        );
        assert_eq!(gesture, TouchGesture::Swipe(SwipeDirection::Previous));
    }

    #[test]
    fn zoomed_in_movement_is_a_pan() {
        let gesture = classify(
            Point::new(100.0, 100.0),
            Point::new(160.0, 100.0),
            ZoomScale::new(2.0),
            threshold(),
        );
        assert_eq!(gesture, TouchGesture::Pan);
    }

    #[test]
    fn short_or_vertical_moves_are_ignored() {
        let short = classify(
            Point::new(100.0, 100.0),
            Point::new(150.0, 100.0),
            ZoomScale::REST,
            threshold(),
        );
        assert_eq!(short, TouchGesture::None);

        let vertical = classify(
            Point::new(100.0, 100.0),
            Point::new(170.0, 190.0),
            ZoomScale::REST,
            threshold(),
        );
        assert_eq!(vertical, TouchGesture::None);
    }

    #[test]
    fn single_finger_lift_returns_start() {
        let mut tracker = TouchTracker::default();
        assert!(tracker.press(1, Point::new(10.0, 20.0)));
        assert!(tracker.is_single(1));
        assert_eq!(tracker.lift(1), Some(Point::new(10.0, 20.0)));
    }

    #[test]
    fn second_finger_cancels_swipe() {
        let mut tracker = TouchTracker::default();
        tracker.press(1, Point::new(10.0, 20.0));
        assert!(!tracker.press(2, Point::new(50.0, 20.0)));
        assert!(!tracker.is_single(1));

        assert_eq!(tracker.lift(2), None);
        assert_eq!(tracker.lift(1), None);

        // A fresh touch afterwards works again.
        tracker.press(3, Point::new(0.0, 0.0));
        assert_eq!(tracker.lift(3), Some(Point::new(0.0, 0.0)));
    }

    #[test]
    fn lost_finger_clears_state() {
        let mut tracker = TouchTracker::default();
        tracker.press(7, Point::ORIGIN);
        tracker.lose(7);
        assert_eq!(tracker, TouchTracker::default());
    }
}
