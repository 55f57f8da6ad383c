// SPDX-License-Identifier: MPL-2.0
//! Gallery catalog types and wrap-around navigation.
//!
//! A [`Gallery`] is an ordered list of non-empty [`Category`] values. The
//! [`GalleryCursor`] tracks which image of which category is shown and
//! implements the wrap-around rules used by swipes, buttons and arrow keys.

use crate::error::GalleryError;
use std::path::{Path, PathBuf};

/// One displayable image: where to load it from and how to caption it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef {
    path: PathBuf,
    label: String,
}

impl ImageRef {
    /// Creates a reference with an explicit caption.
    pub fn new(path: impl Into<PathBuf>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
        }
    }

    /// Creates a reference captioned with the file stem.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, label }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A titled, ordered, non-empty list of images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    title: String,
    images: Vec<ImageRef>,
}

impl Category {
    /// Builds a category, or `None` when it has no images.
    pub fn new(title: impl Into<String>, images: Vec<ImageRef>) -> Option<Self> {
        if images.is_empty() {
            return None;
        }
        Some(Self {
            title: title.into(),
            images,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    /// Number of images (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// True when the category holds no images, which [`Category::new`] never builds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Cover image shown on the picker card.
    #[must_use]
    pub fn cover(&self) -> Option<&ImageRef> {
        self.images.first()
    }
}

/// Ordered collection of categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    categories: Vec<Category>,
}

impl Gallery {
    /// Builds a gallery from categories, rejecting an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Empty`] if `categories` is empty.
    pub fn new(categories: Vec<Category>) -> Result<Self, GalleryError> {
        if categories.is_empty() {
            return Err(GalleryError::Empty);
        }
        Ok(Self { categories })
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn category(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    /// Finds a category by title, ignoring ASCII case.
    #[must_use]
    pub fn position_of(&self, title: &str) -> Option<usize> {
        self.categories
            .iter()
            .position(|category| category.title.eq_ignore_ascii_case(title))
    }

    /// Total number of images across all categories.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.categories.iter().map(Category::len).sum()
    }
}

/// Index after `index` in a list of `len` items, wrapping to 0.
#[must_use]
pub fn wrap_next(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + 1) % len
    }
}

/// Index before `index` in a list of `len` items, wrapping to the end.
#[must_use]
pub fn wrap_previous(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index % len + len - 1) % len
    }
}

/// Counter snapshot for the "i / n" indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Zero-based index of the current image.
    pub index: usize,
    /// Number of images in the category.
    pub total: usize,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.index + 1, self.total)
    }
}

/// Current category and image within a [`Gallery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryCursor {
    category: usize,
    index: usize,
    len: usize,
}

impl GalleryCursor {
    /// Opens `category` at its first image, or `None` if out of range.
    #[must_use]
    pub fn open(gallery: &Gallery, category: usize) -> Option<Self> {
        gallery.category(category).map(|c| Self {
            category,
            index: 0,
            len: c.len(),
        })
    }

    #[must_use]
    pub fn category(self) -> usize {
        self.category
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    #[must_use]
    pub fn position(self) -> Position {
        Position {
            index: self.index,
            total: self.len,
        }
    }

    /// Moves to the next image, wrapping to the first.
    pub fn next(&mut self) {
        self.index = wrap_next(self.index, self.len);
    }

    /// Moves to the previous image, wrapping to the last.
    pub fn previous(&mut self) {
        self.index = wrap_previous(self.index, self.len);
    }

    /// Jumps to `index`. Returns false (and stays put) when out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// Resolves the cursor to the image it points at.
    #[must_use]
    pub fn current<'a>(&self, gallery: &'a Gallery) -> Option<&'a ImageRef> {
        gallery
            .category(self.category)
            .and_then(|c| c.images().get(self.index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(title: &str, count: usize) -> Category {
        let images = (0..count)
            .map(|i| ImageRef::from_path(format!("/gallery/{title}/{i:02}.jpg")))
            .collect();
        Category::new(title, images).expect("non-empty category")
    }

    fn gallery() -> Gallery {
        Gallery::new(vec![category("Exterior", 3), category("Interior", 5)]).expect("gallery")
    }

    #[test]
    fn empty_category_is_rejected() {
        assert!(Category::new("Empty", Vec::new()).is_none());
    }

    #[test]
    fn built_categories_are_never_empty() {
        let single = category("Single", 1);
        assert!(!single.is_empty());
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn empty_gallery_is_an_error() {
        assert_eq!(Gallery::new(Vec::new()), Err(GalleryError::Empty));
    }

    #[test]
    fn label_defaults_to_file_stem() {
        let image = ImageRef::from_path("/tmp/pool-side.webp");
        assert_eq!(image.label(), "pool-side");
    }

    #[test]
    fn wrap_helpers_cycle() {
        assert_eq!(wrap_next(2, 3), 0);
        assert_eq!(wrap_next(0, 3), 1);
        assert_eq!(wrap_previous(0, 3), 2);
        assert_eq!(wrap_previous(1, 3), 0);
        assert_eq!(wrap_next(0, 0), 0);
        assert_eq!(wrap_previous(0, 0), 0);
    }

    #[test]
    fn cursor_wraps_in_both_directions() {
        let gallery = gallery();
        let mut cursor = GalleryCursor::open(&gallery, 0).expect("cursor");

        cursor.previous();
        assert_eq!(cursor.index(), 2);
        cursor.next();
        assert_eq!(cursor.index(), 0);
        cursor.next();
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn select_is_bounds_checked() {
        let gallery = gallery();
        let mut cursor = GalleryCursor::open(&gallery, 1).expect("cursor");

        assert!(cursor.select(4));
        assert_eq!(cursor.index(), 4);
        assert!(!cursor.select(5));
        assert_eq!(cursor.index(), 4);
    }

    #[test]
    fn open_out_of_range_category_fails() {
        assert!(GalleryCursor::open(&gallery(), 2).is_none());
    }

    #[test]
    fn position_displays_one_based_counter() {
        let gallery = gallery();
        let mut cursor = GalleryCursor::open(&gallery, 1).expect("cursor");
        cursor.select(2);
        assert_eq!(cursor.position().to_string(), "3 / 5");
    }

    #[test]
    fn current_resolves_image() {
        let gallery = gallery();
        let mut cursor = GalleryCursor::open(&gallery, 0).expect("cursor");
        cursor.next();
        let image = cursor.current(&gallery).expect("image");
        assert_eq!(image.path(), Path::new("/gallery/Exterior/01.jpg"));
    }

    #[test]
    fn position_of_ignores_case() {
        assert_eq!(gallery().position_of("interior"), Some(1));
        assert_eq!(gallery().position_of("garden"), None);
    }

    #[test]
    fn image_count_sums_categories() {
        assert_eq!(gallery().image_count(), 8);
    }
}
