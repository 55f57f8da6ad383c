// SPDX-License-Identifier: MPL-2.0
//! Viewer controls overlaid on the image: zoom buttons and previous/next arrows.

use crate::domain::ui::newtypes::ZoomScale;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::viewer::state::Navigation;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ZoomIn,
    ZoomOut,
    ResetZoom,
    NavigateNext,
    NavigatePrevious,
}

#[derive(Debug, Clone, Copy)]
pub struct ViewContext {
    pub scale: ZoomScale,
    /// Zoom buttons only react once an image is on screen.
    pub zoom_enabled: bool,
    pub navigation: Navigation,
}

fn control(label: &'static str, message: Option<Message>) -> button::Button<'static, Message> {
    let content = Container::new(Text::new(label).size(typography::TITLE_MD))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    button(content)
        .width(Length::Fixed(sizing::CONTROL_BUTTON))
        .height(Length::Fixed(sizing::CONTROL_BUTTON))
        .padding(0)
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press_maybe(message)
}

pub fn view(ctx: ViewContext) -> Element<'static, Message> {
    let zoom_in = (ctx.zoom_enabled && !ctx.scale.is_max()).then_some(Message::ZoomIn);
    let zoom_out = (ctx.zoom_enabled && !ctx.scale.is_rest()).then_some(Message::ZoomOut);
    let reset = (ctx.zoom_enabled && !ctx.scale.is_rest()).then_some(Message::ResetZoom);

    let zoom_column = Column::new()
        .spacing(spacing::XS)
        .push(control("+", zoom_in))
        .push(control("−", zoom_out))
        .push(control("1:1", reset));

    let mut stack = Stack::new().push(
        Container::new(zoom_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Top),
    );

    let mut arrows = Row::new().width(Length::Fill).align_y(Vertical::Center);
    if ctx.navigation.previous {
        arrows = arrows.push(control("◀", Some(Message::NavigatePrevious)));
    }
    arrows = arrows.push(iced::widget::Space::new().width(Length::Fill));
    if ctx.navigation.next {
        arrows = arrows.push(control("▶", Some(Message::NavigateNext)));
    }
    stack = stack.push(
        Container::new(arrows)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .align_y(Vertical::Center),
    );

    stack.into()
}
