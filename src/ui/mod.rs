// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`gallery`] - Category picker and thumbnail strip
//! - [`viewer`] - Interactive image viewer with zoom, pan, and swipe navigation
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Gesture and geometry rules (cover-fit, zoom, pan, swipe, hint)
//! - [`widgets`] - Custom Iced widgets (image surface)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod state;
pub mod styles;
pub mod theming;
pub mod viewer;
pub mod widgets;
