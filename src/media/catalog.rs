// SPDX-License-Identifier: MPL-2.0
//! Gallery discovery: builds a [`Gallery`] from a directory on disk.
//!
//! Two layouts are supported:
//!
//! - A `gallery.toml` manifest in the root directory listing categories and
//!   their images (paths relative to the root):
//!
//!   ```toml
//!   [[category]]
//!   title = "Shophouse"
//!   images = ["shophouse/front.jpg", { path = "shophouse/night.jpg", label = "At night" }]
//!   ```
//!
//! - Without a manifest, every sub-directory becomes a category (sorted by
//!   name) and its supported images are listed alphabetically. Images placed
//!   directly in the root form a leading category named after the root.
//!
//! Categories without any supported image are dropped.

use crate::domain::gallery::{Category, Gallery, ImageRef};
use crate::error::{Error, GalleryError, Result};
use crate::media::is_supported_image;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the optional gallery manifest.
pub const MANIFEST_FILE: &str = "gallery.toml";

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default, rename = "category")]
    categories: Vec<ManifestCategory>,
}

#[derive(Debug, Deserialize)]
struct ManifestCategory {
    title: String,
    #[serde(default)]
    images: Vec<ManifestImage>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ManifestImage {
    Path(PathBuf),
    Labeled { path: PathBuf, label: String },
}

impl ManifestImage {
    fn resolve(self, root: &Path) -> ImageRef {
        match self {
            ManifestImage::Path(path) => ImageRef::from_path(root.join(path)),
            ManifestImage::Labeled { path, label } => ImageRef::new(root.join(path), label),
        }
    }
}

/// Loads the gallery rooted at `root`.
///
/// # Errors
///
/// - [`GalleryError::NotADirectory`] if `root` is not a directory
/// - [`GalleryError::InvalidManifest`] if `gallery.toml` cannot be parsed
/// - [`GalleryError::Empty`] if no category has a supported image
/// - [`crate::error::Error::Io`] if the directory cannot be read
pub fn load_gallery(root: &Path) -> Result<Gallery> {
    if !root.is_dir() {
        return Err(GalleryError::NotADirectory(root.display().to_string()).into());
    }

    let manifest_path = root.join(MANIFEST_FILE);
    let categories = if manifest_path.is_file() {
        log::info!("Reading gallery manifest {}", manifest_path.display());
        from_manifest(root, &manifest_path)?
    } else {
        log::info!("Scanning gallery directory {}", root.display());
        from_directories(root)?
    };

    let gallery = Gallery::new(categories)?;
    log::info!(
        "Gallery ready: {} categories, {} images",
        gallery.categories().len(),
        gallery.image_count()
    );
    Ok(gallery)
}

/// Loads the gallery on Tokio's blocking pool.
///
/// # Errors
///
/// Same as [`load_gallery`]; a panicked scan is reported as
/// [`crate::error::Error::Io`].
pub async fn load_gallery_async(root: PathBuf) -> Result<Gallery> {
    tokio::task::spawn_blocking(move || load_gallery(&root))
        .await
        .map_err(|e| Error::Io(format!("gallery scan aborted: {e}")))?
}

fn from_manifest(root: &Path, manifest_path: &Path) -> Result<Vec<Category>> {
    let content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = toml::from_str(&content)
        .map_err(|e| GalleryError::InvalidManifest(e.to_string()))?;

    Ok(manifest
        .categories
        .into_iter()
        .filter_map(|entry| {
            let images: Vec<ImageRef> = entry
                .images
                .into_iter()
                .map(|image| image.resolve(root))
                .filter(|image| {
                    let supported = is_supported_image(image.path());
                    if !supported {
                        log::warn!("Skipping unsupported manifest entry {}", image.path().display());
                    }
                    supported
                })
                .collect();
            let category = Category::new(entry.title, images);
            if category.is_none() {
                log::debug!("Dropping empty manifest category");
            }
            category
        })
        .collect())
}

fn from_directories(root: &Path) -> Result<Vec<Category>> {
    let mut directories = Vec::new();
    for entry in fs::read_dir(root)? {
        let path = entry?.path();
        if path.is_dir() {
            directories.push(path);
        }
    }
    directories.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let mut categories = Vec::new();

    let root_title = root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string());
    if let Some(category) = Category::new(root_title, scan_images(root)?) {
        categories.push(category);
    }

    for directory in directories {
        let title = directory
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        match Category::new(title, scan_images(&directory)?) {
            Some(category) => categories.push(category),
            None => log::debug!("Skipping {} (no images)", directory.display()),
        }
    }

    Ok(categories)
}

/// Lists supported images directly inside `directory`, sorted by file name.
fn scan_images(directory: &Path) -> Result<Vec<ImageRef>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(directory)? {
        let path = entry?.path();
        if path.is_file() && is_supported_image(&path) {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files.into_iter().map(ImageRef::from_path).collect())
}
