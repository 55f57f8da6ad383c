// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Image(ImageLoadError),
    Gallery(GalleryError),
}

/// Specific error types for image loading issues.
/// Used to render a readable fallback message in the viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageLoadError {
    /// The referenced file does not exist
    NotFound(String),

    /// The file extension or content is not a supported image format
    UnsupportedFormat,

    /// File exists but its data could not be decoded
    Corrupted(String),

    /// Any other I/O failure (permission denied, read error, ...)
    Io(String),
}

impl ImageLoadError {
    /// Short, user-facing headline for the fallback view.
    pub fn headline(&self) -> &'static str {
        match self {
            ImageLoadError::NotFound(_) => "Image not found",
            ImageLoadError::UnsupportedFormat => "Unsupported image format",
            ImageLoadError::Corrupted(_) => "Image file is corrupted",
            ImageLoadError::Io(_) => "Could not read image",
        }
    }

    /// Categorizes an I/O error raised while reading an image file.
    pub fn from_io(err: &std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => ImageLoadError::NotFound(err.to_string()),
            _ => ImageLoadError::Io(err.to_string()),
        }
    }
}

impl fmt::Display for ImageLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageLoadError::NotFound(msg) => write!(f, "Image not found: {}", msg),
            ImageLoadError::UnsupportedFormat => write!(f, "Unsupported image format"),
            ImageLoadError::Corrupted(msg) => write!(f, "Image file is corrupted: {}", msg),
            ImageLoadError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl From<image_rs::ImageError> for ImageLoadError {
    fn from(err: image_rs::ImageError) -> Self {
        use image_rs::ImageError;

        match &err {
            ImageError::Unsupported(_) => ImageLoadError::UnsupportedFormat,
            ImageError::IoError(io) => ImageLoadError::from_io(io),
            _ => ImageLoadError::Corrupted(err.to_string()),
        }
    }
}

/// Errors raised while building a gallery catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    /// The gallery root is missing or not a directory
    NotADirectory(String),

    /// `gallery.toml` exists but could not be parsed
    InvalidManifest(String),

    /// No category contains a single displayable image
    Empty,
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::NotADirectory(path) => write!(f, "Not a directory: {}", path),
            GalleryError::InvalidManifest(msg) => write!(f, "Invalid gallery manifest: {}", msg),
            GalleryError::Empty => write!(f, "Gallery contains no images"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Gallery(e) => write!(f, "Gallery Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ImageLoadError> for Error {
    fn from(err: ImageLoadError) -> Self {
        Error::Image(err)
    }
}

impl From<GalleryError> for Error {
    fn from(err: GalleryError) -> Self {
        Error::Gallery(err)
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
