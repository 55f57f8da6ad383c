// SPDX-License-Identifier: MPL-2.0
//! Gallery screens around the viewer: the category picker and the thumbnail
//! strip shown under the viewport.

use crate::domain::gallery::{Category, Gallery, GalleryCursor};
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, scrollable, Column, Container, Row, Text};
use iced::{ContentFit, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A category card was chosen on the picker.
    OpenCategory(usize),
    /// A thumbnail was clicked in the strip.
    SelectImage(usize),
    /// Leave the viewer and go back to the picker.
    Close,
}

/// Number of cards per picker row.
const CARDS_PER_ROW: usize = 3;

fn cover(category: &Category, width: f32, height: f32) -> Element<'_, Message> {
    match category.cover() {
        Some(image_ref) => image(image::Handle::from_path(image_ref.path()))
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .into(),
        None => Container::new(Text::new(""))
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .into(),
    }
}

fn card(index: usize, category: &Category) -> Element<'_, Message> {
    let caption = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(category.title()).size(typography::TITLE_MD))
        .push(
            Text::new(format!("{} photos", category.len()))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    let content = Column::new()
        .spacing(spacing::XS)
        .push(cover(
            category,
            sizing::CARD_WIDTH - 2.0 * spacing::XS,
            sizing::CARD_HEIGHT,
        ))
        .push(caption);

    button(content)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(spacing::XS)
        .style(styles::button::card)
        .on_press(Message::OpenCategory(index))
        .into()
}

/// Category picker: one card per category, laid out in rows.
pub fn picker_view<'a>(title: &'a str, gallery: &'a Gallery) -> Element<'a, Message> {
    let heading = Text::new(title).size(typography::TITLE_LG);

    let mut rows = Column::new().spacing(spacing::LG);
    let cards: Vec<_> = gallery.categories().iter().enumerate().collect();
    for chunk in cards.chunks(CARDS_PER_ROW) {
        let row = chunk
            .iter()
            .fold(Row::new().spacing(spacing::LG), |row, &(index, category)| {
                row.push(card(index, category))
            });
        rows = rows.push(row);
    }

    let content = Column::new()
        .spacing(spacing::XL)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(heading)
        .push(rows);

    scrollable(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Strip of thumbnails for the open category, current image highlighted.
pub fn thumbnail_strip<'a>(gallery: &'a Gallery, cursor: GalleryCursor) -> Element<'a, Message> {
    let images = gallery
        .category(cursor.category())
        .map(Category::images)
        .unwrap_or_default();

    let thumbnails = images.iter().enumerate().fold(
        Row::new().spacing(spacing::XS).align_y(Vertical::Center),
        |row, (index, image_ref)| {
            let thumb = image(image::Handle::from_path(image_ref.path()))
                .width(Length::Fixed(sizing::THUMBNAIL))
                .height(Length::Fixed(sizing::THUMBNAIL))
                .content_fit(ContentFit::Cover);
            row.push(
                button(thumb)
                    .padding(spacing::XXS)
                    .style(styles::button::thumbnail(index == cursor.index()))
                    .on_press(Message::SelectImage(index)),
            )
        },
    );

    let close = button(Text::new("Categories"))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::Close);

    let bar = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(close)
        .push(
            scrollable(thumbnails)
                .direction(scrollable::Direction::Horizontal(
                    scrollable::Scrollbar::new(),
                ))
                .width(Length::Fill),
        );

    Container::new(bar)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::panel)
        .into()
}

/// Full-window message for galleries that could not be opened.
pub fn error_view(message: &str) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(Text::new("Gallery unavailable").size(typography::TITLE_MD))
        .push(Text::new(message).size(typography::BODY));

    Container::new(
        Container::new(content)
            .padding(spacing::LG)
            .style(styles::overlay::error_banner(radius::MD)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .into()
}

pub fn loading_view<'a>() -> Element<'a, Message> {
    Container::new(Text::new("Scanning gallery…").size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
