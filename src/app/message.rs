// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::gallery::Gallery;
use crate::error::Error;
use crate::ui::gallery;
use crate::ui::theming::ThemeMode;
use crate::ui::viewer::component;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(component::Message),
    Gallery(gallery::Message),
    /// Result of the startup gallery scan.
    GalleryLoaded(Result<Gallery, Error>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Gallery root directory. Falls back to `general.gallery_dir`, then to
    /// the working directory.
    pub gallery_dir: Option<PathBuf>,
    /// Category to open directly instead of showing the picker.
    pub category: Option<String>,
    /// Theme override for this run only.
    pub theme: Option<ThemeMode>,
}
