// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding (PNG, JPEG, GIF, WebP, BMP).

use crate::error::ImageLoadError;
use iced::widget::image;
use image_rs::GenericImageView;
use std::fs;
use std::path::{Path, PathBuf};

/// A decoded image ready for display, with its natural pixel size.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    /// Natural size as floats, the unit used by the viewer geometry.
    #[must_use]
    pub fn natural_size(&self) -> iced::Size {
        // Image dimensions stay well within f32's exact integer range.
        #[allow(clippy::cast_precision_loss)]
        iced::Size::new(self.width as f32, self.height as f32)
    }
}

/// Load an image from the given path and return its data.
///
/// # Errors
///
/// Returns an [`ImageLoadError`] categorizing why the file could not be shown:
/// missing file, unsupported format, undecodable data or another I/O error.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData, ImageLoadError> {
    let path = path.as_ref();
    let img_bytes = fs::read(path).map_err(|e| ImageLoadError::from_io(&e))?;

    let format = image_rs::guess_format(&img_bytes).map_err(ImageLoadError::from)?;
    // Bytes are already in memory, so a decoder-side I/O error means truncated data.
    let img = image_rs::load_from_memory_with_format(&img_bytes, format).map_err(|e| match e {
        image_rs::ImageError::IoError(io) => ImageLoadError::Corrupted(io.to_string()),
        other => ImageLoadError::from(other),
    })?;

    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(ImageLoadError::Corrupted("image has empty dimensions".into()));
    }

    let pixels = img.to_rgba8().into_vec();
    Ok(ImageData::from_rgba(width, height, pixels))
}

/// Decodes `path` on Tokio's blocking pool so the UI thread never waits on I/O.
///
/// # Errors
///
/// Same as [`load_image`]; a panicked or cancelled worker maps to
/// [`ImageLoadError::Io`].
pub async fn load_image_async(path: PathBuf) -> Result<ImageData, ImageLoadError> {
    tokio::task::spawn_blocking(move || load_image(&path))
        .await
        .map_err(|e| ImageLoadError::Io(e.to_string()))?
}
