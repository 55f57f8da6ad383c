// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{GalleryStatus, Message, Screen};
use crate::domain::gallery::{Gallery, GalleryCursor};
use crate::ui::gallery;
use crate::ui::viewer::component;
use iced::widget::{Column, Container};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub screen: Screen,
    /// Heading of the picker screen.
    pub title: &'a str,
    pub gallery: &'a GalleryStatus,
    pub cursor: Option<GalleryCursor>,
    pub viewer: &'a component::State,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.gallery {
        GalleryStatus::Scanning => gallery::loading_view().map(Message::Gallery),
        GalleryStatus::Unavailable(reason) => gallery::error_view(reason).map(Message::Gallery),
        GalleryStatus::Ready(data) => match (ctx.screen, ctx.cursor) {
            (Screen::Viewer, Some(cursor)) => view_viewer(ctx.viewer, data, cursor),
            _ => gallery::picker_view(ctx.title, data).map(Message::Gallery),
        },
    };

    Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_viewer<'a>(
    viewer: &'a component::State,
    data: &'a Gallery,
    cursor: GalleryCursor,
) -> Element<'a, Message> {
    let viewer_content = viewer
        .view(component::ViewEnv {
            position: Some(cursor.position()),
        })
        .map(Message::Viewer);

    let strip = gallery::thumbnail_strip(data, cursor).map(Message::Gallery);

    Column::new()
        .push(viewer_content)
        .push(strip)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
