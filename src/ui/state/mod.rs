// SPDX-License-Identifier: MPL-2.0
//! Viewer interaction rules
//!
//! Pure geometry and gesture logic used by the image viewer, kept apart from
//! widgets and messages so each rule can be tested on its own.

pub mod drag;
pub mod fit;
pub mod hint;
pub mod pan;
pub mod swipe;
pub mod zoom;

// Re-export commonly used types for convenience
pub use drag::DragState;
pub use fit::{cover_fit, CoverFit};
pub use hint::{HintState, HintTimer};
pub use pan::{can_drag, PanLimits};
pub use swipe::{SwipeDirection, TouchGesture, TouchTracker};
