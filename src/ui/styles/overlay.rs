// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the image counter, the zoom/pan hint and error banners.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn container_background() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

fn container_border() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..WHITE
    }
}

/// Generic style for overlay indicators like the counter and the hint.
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(container_background())),
        text_color: Some(WHITE),
        border: Border {
            color: container_border(),
            width: 1.0,
            radius: rad.into(),
        },
        ..Default::default()
    }
}

/// Failed-load banner shown in place of the image.
pub fn error_banner(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(container_background())),
        text_color: Some(WHITE),
        border: Border {
            color: palette::ERROR_500,
            width: 1.0,
            radius: rad.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_is_translucent_black() {
        let style = indicator(8.0)(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => {
                assert_eq!(color.a, opacity::OVERLAY_STRONG);
                assert_eq!(color.r, 0.0);
            }
            other => panic!("unexpected background {:?}", other),
        }
    }

    #[test]
    fn error_banner_uses_error_border() {
        let style = error_banner(8.0)(&Theme::Dark);
        assert_eq!(style.border.color, palette::ERROR_500);
    }
}
