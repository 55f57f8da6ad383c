// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag interaction state for panning a zoomed image.

use iced::{Point, Vector};

/// Manages grab-and-drag state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    /// Pointer position minus the offset at press time, while dragging.
    anchor: Option<Point>,
    /// Last pointer position seen by the drag.
    pointer: Point,
}

impl DragState {
    /// Starts a drag so that the image stays pinned under the pointer.
    pub fn start(&mut self, pointer: Point, offset: Vector) {
        self.anchor = Some(pointer - offset);
        self.pointer = pointer;
    }

    /// Re-pins an active drag after the offset was moved to `offset` from
    /// outside the drag (reset, recenter).
    pub fn rebase(&mut self, offset: Vector) {
        if self.anchor.is_some() {
            self.anchor = Some(self.pointer - offset);
        }
    }

    /// Stops the drag operation (no inertia).
    pub fn stop(&mut self) {
        self.anchor = None;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    /// Records the pointer and returns the unclamped offset that keeps the
    /// grabbed point under it.
    pub fn follow(&mut self, pointer: Point) -> Option<Vector> {
        self.pointer = pointer;
        self.anchor.map(|anchor| pointer - anchor)
    }
}
