// SPDX-License-Identifier: MPL-2.0
pub mod image_surface;

pub use image_surface::{image_surface, ImageSurface, SurfaceEvent};
