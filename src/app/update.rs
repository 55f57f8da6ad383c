// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The viewer never changes the image on its own: navigation requests come
//! back as [`Effect`]s, and the handlers here move the gallery cursor and hand
//! the new image reference to the viewer.

use super::{GalleryStatus, Message, Screen};
use crate::domain::gallery::{Gallery, GalleryCursor};
use crate::error::Error;
use crate::ui::gallery;
use crate::ui::viewer::{component, Effect, Navigation};
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub gallery: &'a mut GalleryStatus,
    pub cursor: &'a mut Option<GalleryCursor>,
    pub viewer: &'a mut component::State,
    pub startup_category: &'a mut Option<String>,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::GalleryLoaded(result) => handle_gallery_loaded(ctx, result),
        Message::Gallery(message) => handle_gallery_message(ctx, message),
        Message::Viewer(message) => {
            let (effect, task) = ctx.viewer.handle_message(message);
            Task::batch([task.map(Message::Viewer), apply_viewer_effect(ctx, effect)])
        }
    }
}

fn handle_gallery_loaded(ctx: &mut UpdateContext<'_>, result: Result<Gallery, Error>) -> Task<Message> {
    match result {
        Ok(gallery) => {
            *ctx.gallery = GalleryStatus::Ready(gallery);
            let Some(title) = ctx.startup_category.take() else {
                return Task::none();
            };
            let index = match &*ctx.gallery {
                GalleryStatus::Ready(gallery) => gallery.position_of(&title),
                _ => None,
            };
            match index {
                Some(index) => open_category(ctx, index),
                None => {
                    log::warn!("No category named \"{title}\"; showing the picker");
                    Task::none()
                }
            }
        }
        Err(error) => {
            log::error!("Cannot open gallery: {error}");
            *ctx.gallery = GalleryStatus::Unavailable(error.to_string());
            Task::none()
        }
    }
}

fn handle_gallery_message(ctx: &mut UpdateContext<'_>, message: gallery::Message) -> Task<Message> {
    match message {
        gallery::Message::OpenCategory(index) => open_category(ctx, index),
        gallery::Message::SelectImage(index) => {
            let selected = ctx
                .cursor
                .as_mut()
                .is_some_and(|cursor| cursor.select(index));
            if selected {
                show_current(ctx)
            } else {
                Task::none()
            }
        }
        gallery::Message::Close => {
            *ctx.screen = Screen::Picker;
            *ctx.cursor = None;
            Task::none()
        }
    }
}

fn apply_viewer_effect(ctx: &mut UpdateContext<'_>, effect: Effect) -> Task<Message> {
    let Some(cursor) = ctx.cursor.as_mut() else {
        return Task::none();
    };
    match effect {
        Effect::None => return Task::none(),
        Effect::NavigateNext => cursor.next(),
        Effect::NavigatePrevious => cursor.previous(),
    }
    show_current(ctx)
}

fn open_category(ctx: &mut UpdateContext<'_>, index: usize) -> Task<Message> {
    let GalleryStatus::Ready(gallery) = &*ctx.gallery else {
        return Task::none();
    };
    match GalleryCursor::open(gallery, index) {
        Some(cursor) => {
            log::info!("Opening category {index}");
            *ctx.cursor = Some(cursor);
            *ctx.screen = Screen::Viewer;
            show_current(ctx)
        }
        None => {
            log::warn!("Category {index} does not exist");
            Task::none()
        }
    }
}

/// Hands the image under the cursor to the viewer.
fn show_current(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let (GalleryStatus::Ready(gallery), Some(cursor)) = (&*ctx.gallery, *ctx.cursor) else {
        return Task::none();
    };
    let Some(image) = cursor.current(gallery).cloned() else {
        return Task::none();
    };
    // Navigation wraps around, so any category with a second image has both neighbors.
    let navigation = if cursor.position().total > 1 {
        Navigation::BOTH
    } else {
        Navigation::NONE
    };
    ctx.viewer.show(image, navigation).map(Message::Viewer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::{Category, ImageRef};
    use crate::error::GalleryError;
    use crate::ui::viewer::controls;
    use std::path::Path;

    struct Fixture {
        screen: Screen,
        gallery: GalleryStatus,
        cursor: Option<GalleryCursor>,
        viewer: component::State,
        startup_category: Option<String>,
    }

    impl Fixture {
        fn new(startup_category: Option<&str>) -> Self {
            Self {
                screen: Screen::Picker,
                gallery: GalleryStatus::Scanning,
                cursor: None,
                viewer: component::State::default(),
                startup_category: startup_category.map(str::to_owned),
            }
        }

        fn send(&mut self, message: Message) {
            let mut ctx = UpdateContext {
                screen: &mut self.screen,
                gallery: &mut self.gallery,
                cursor: &mut self.cursor,
                viewer: &mut self.viewer,
                startup_category: &mut self.startup_category,
            };
            let _ = update(&mut ctx, message);
        }

        fn current_path(&self) -> Option<&Path> {
            self.viewer.viewer().image_ref().map(ImageRef::path)
        }
    }

    fn sample_gallery() -> Gallery {
        let images = |title: &str, count: usize| -> Vec<ImageRef> {
            (0..count)
                .map(|i| ImageRef::from_path(format!("/gallery/{title}/{i}.jpg")))
                .collect()
        };
        Gallery::new(vec![
            Category::new("Villa", images("villa", 3)).expect("category"),
            Category::new("Studio", images("studio", 1)).expect("category"),
        ])
        .expect("gallery")
    }

    fn control(message: controls::Message) -> Message {
        Message::Viewer(component::Message::Controls(message))
    }

    #[test]
    fn loaded_gallery_shows_picker() {
        let mut app = Fixture::new(None);
        app.send(Message::GalleryLoaded(Ok(sample_gallery())));

        assert!(matches!(app.gallery, GalleryStatus::Ready(_)));
        assert_eq!(app.screen, Screen::Picker);
    }

    #[test]
    fn startup_category_opens_viewer() {
        let mut app = Fixture::new(Some("studio"));
        app.send(Message::GalleryLoaded(Ok(sample_gallery())));

        assert_eq!(app.screen, Screen::Viewer);
        assert_eq!(app.current_path(), Some(Path::new("/gallery/studio/0.jpg")));
        assert_eq!(app.viewer.viewer().navigation(), Navigation::NONE);
    }

    #[test]
    fn unknown_startup_category_falls_back_to_picker() {
        let mut app = Fixture::new(Some("penthouse"));
        app.send(Message::GalleryLoaded(Ok(sample_gallery())));
        assert_eq!(app.screen, Screen::Picker);
    }

    #[test]
    fn failed_scan_is_reported() {
        let mut app = Fixture::new(None);
        app.send(Message::GalleryLoaded(Err(GalleryError::Empty.into())));
        assert!(matches!(app.gallery, GalleryStatus::Unavailable(_)));
    }

    #[test]
    fn navigation_effects_move_the_cursor_and_wrap() {
        let mut app = Fixture::new(None);
        app.send(Message::GalleryLoaded(Ok(sample_gallery())));
        app.send(Message::Gallery(gallery::Message::OpenCategory(0)));

        app.send(control(controls::Message::NavigatePrevious));
        assert_eq!(app.current_path(), Some(Path::new("/gallery/villa/2.jpg")));

        app.send(control(controls::Message::NavigateNext));
        assert_eq!(app.current_path(), Some(Path::new("/gallery/villa/0.jpg")));
    }

    #[test]
    fn thumbnail_selection_is_bounds_checked() {
        let mut app = Fixture::new(None);
        app.send(Message::GalleryLoaded(Ok(sample_gallery())));
        app.send(Message::Gallery(gallery::Message::OpenCategory(0)));
        let generation = app.viewer.viewer().generation();

        app.send(Message::Gallery(gallery::Message::SelectImage(1)));
        assert_eq!(app.current_path(), Some(Path::new("/gallery/villa/1.jpg")));

        app.send(Message::Gallery(gallery::Message::SelectImage(9)));
        assert_eq!(app.current_path(), Some(Path::new("/gallery/villa/1.jpg")));
        assert_eq!(app.viewer.viewer().generation(), generation + 1);
    }

    #[test]
    fn close_returns_to_picker() {
        let mut app = Fixture::new(None);
        app.send(Message::GalleryLoaded(Ok(sample_gallery())));
        app.send(Message::Gallery(gallery::Message::OpenCategory(0)));
        app.send(Message::Gallery(gallery::Message::Close));

        assert_eq!(app.screen, Screen::Picker);
        assert!(app.cursor.is_none());
    }
}
