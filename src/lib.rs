// SPDX-License-Identifier: MPL-2.0
//! `gallery_lens` is a photo gallery viewer built with the Iced GUI framework.
//!
//! Images are shown cover-fit in a viewport that supports wheel and button
//! zoom, clamped drag panning and touch-swipe navigation between the images
//! of a category. The interaction rules live in [`ui::viewer::state`] and
//! [`ui::state`], independent of the widgets that feed them.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod media;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
