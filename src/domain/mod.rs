// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types and rules with no GUI dependencies.
//!
//! # Modules
//!
//! - [`gallery`]: Gallery catalog ([`Gallery`](gallery::Gallery),
//!   [`Category`](gallery::Category), [`ImageRef`](gallery::ImageRef)) and the
//!   wrap-around [`GalleryCursor`](gallery::GalleryCursor)
//! - [`ui`]: UI value objects ([`ZoomScale`](ui::newtypes::ZoomScale),
//!   [`SwipeThreshold`](ui::newtypes::SwipeThreshold),
//!   [`HintTimeout`](ui::newtypes::HintTimeout))

pub mod gallery;
pub mod ui;
