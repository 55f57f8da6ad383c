// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery screens and
//! the viewer.
//!
//! The `App` struct owns the gallery catalog, the cursor into it and the
//! viewer component. Boot reads the settings file, resolves the gallery root
//! and scans it in the background; everything else happens in `update`.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::domain::gallery::{Gallery, GalleryCursor};
use crate::media::load_gallery_async;
use crate::ui::theming::ThemeMode;
use crate::ui::viewer::{component, ViewerSettings};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};

/// Window title prefix.
pub const APP_TITLE: &str = "GalleryLens";

pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

/// Where the gallery catalog stands.
#[derive(Debug, Clone, Default)]
pub enum GalleryStatus {
    /// The startup scan is still running.
    #[default]
    Scanning,
    Ready(Gallery),
    /// The scan failed; holds a user-facing reason.
    Unavailable(String),
}

/// Root Iced application state.
#[derive(Default)]
pub struct App {
    screen: Screen,
    theme_mode: ThemeMode,
    /// Heading of the picker, derived from the root directory name.
    picker_title: String,
    gallery: GalleryStatus,
    cursor: Option<GalleryCursor>,
    viewer: component::State,
    /// Category requested on the command line, consumed once the scan ends.
    startup_category: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("picker_title", &self.picker_title)
            .field("cursor", &self.cursor)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires a reusable boot function
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Picks the gallery root: CLI flag, then config, then the working directory.
fn resolve_gallery_root(flag: Option<PathBuf>, configured: Option<PathBuf>) -> PathBuf {
    flag.or(configured).unwrap_or_else(|| PathBuf::from("."))
}

fn root_title(root: &Path) -> String {
    root.canonicalize()
        .ok()
        .as_deref()
        .and_then(Path::file_name)
        .or_else(|| root.file_name())
        .map_or_else(
            || APP_TITLE.to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
}

impl App {
    /// Initializes application state and kicks off the asynchronous gallery
    /// scan.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            log::warn!("{warning}");
        }

        let gallery_root =
            resolve_gallery_root(flags.gallery_dir, config.general.gallery_dir.clone());
        log::info!("Gallery root: {}", gallery_root.display());

        let app = App {
            theme_mode: flags.theme.unwrap_or(config.general.theme_mode),
            viewer: component::State::new(ViewerSettings::from_config(&config.viewer)),
            startup_category: flags.category,
            picker_title: root_title(&gallery_root),
            ..Self::default()
        };

        let task = Task::perform(load_gallery_async(gallery_root), Message::GalleryLoaded);
        (app, task)
    }

    fn title(&self) -> String {
        let category = match (&self.gallery, self.screen, self.cursor) {
            (GalleryStatus::Ready(gallery), Screen::Viewer, Some(cursor)) => gallery
                .category(cursor.category())
                .map(|category| (category.title(), cursor.position())),
            _ => None,
        };

        match category {
            Some((title, position)) => format!("{APP_TITLE} - {title} ({position})"),
            None => APP_TITLE.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.screen)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            gallery: &mut self.gallery,
            cursor: &mut self.cursor,
            viewer: &mut self.viewer,
            startup_category: &mut self.startup_category,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            title: &self.picker_title,
            gallery: &self.gallery,
            cursor: self.cursor,
            viewer: &self.viewer,
        })
    }
}
