// SPDX-License-Identifier: MPL-2.0
//! Image loading and gallery discovery on disk.

pub mod catalog;
pub mod image;

use std::path::Path;

pub use catalog::{load_gallery, load_gallery_async};
pub use extensions::IMAGE_EXTENSIONS;
pub use image::{load_image, load_image_async, ImageData};

/// Supported file extensions
pub mod extensions {
    /// Image file extensions shown in the gallery
    pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];
}

/// Returns true if the path has a supported image extension (case-insensitive).
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_extensions_are_case_insensitive() {
        assert!(is_supported_image(Path::new("a/b/photo.JPG")));
        assert!(is_supported_image(Path::new("render.webp")));
        assert!(!is_supported_image(Path::new("plan.pdf")));
        assert!(!is_supported_image(Path::new("README")));
    }
}
