// SPDX-License-Identifier: MPL-2.0
//! Image viewer module responsible for rendering the current image and its
//! interactive overlays.

pub mod component;
pub mod controls;
pub mod state;

use self::component::Message;
use crate::domain::gallery::Position;
use crate::error::ImageLoadError;
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Text};
use iced::{Element, Length};

pub use state::{Command, Effect, LoadState, Navigation, ViewerSettings, ViewerState};

/// Text shown in the first-use hint bubble.
pub const HINT_TEXT: &str = "Scroll or use + / − to zoom · drag to pan · swipe to browse";

fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

/// Fallback shown in place of an image that could not be decoded.
pub fn error_view(error: &ImageLoadError) -> Element<'_, Message> {
    let heading = Text::new(error.headline()).size(typography::TITLE_MD);
    let details = Text::new(error.to_string())
        .size(typography::BODY)
        .color(palette::GRAY_200);

    let retry = button(Text::new("Retry"))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::Retry);

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(heading)
        .push(details)
        .push(retry);

    centered(
        Container::new(content)
            .padding(spacing::LG)
            .max_width(480.0)
            .style(styles::overlay::error_banner(radius::MD)),
    )
}

pub fn loading_view<'a>() -> Element<'a, Message> {
    centered(
        Text::new("Loading…")
            .size(typography::BODY)
            .color(palette::GRAY_200),
    )
}

/// Zoom/pan hint pinned to the bottom of the viewport.
pub fn hint_view<'a>() -> Element<'a, Message> {
    let bubble = Container::new(Text::new(HINT_TEXT).size(typography::CAPTION))
        .padding([spacing::XS, spacing::MD])
        .style(styles::overlay::indicator(radius::FULL));

    Container::new(bubble)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Bottom)
        .into()
}

/// "i / n" counter with the image caption, pinned to the top-left corner.
pub fn counter_view<'a>(position: Position, label: &'a str) -> Element<'a, Message> {
    let text = if label.is_empty() {
        position.to_string()
    } else {
        format!("{position} · {label}")
    };

    Container::new(
        Container::new(Text::new(text).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::overlay::indicator(radius::SM)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::MD)
    .align_x(Horizontal::Left)
    .align_y(Vertical::Top)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_view_renders() {
        let error = ImageLoadError::NotFound("/gallery/missing.jpg".into());
        let _element = error_view(&error);
    }

    #[test]
    fn counter_view_renders_with_and_without_label() {
        let position = Position { index: 0, total: 4 };
        let _with = counter_view(position, "Lobby");
        let _without = counter_view(position, "");
    }
}
