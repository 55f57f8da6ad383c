// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts are only active while a category is open in the viewer:
//!
//! | Key | Action |
//! |---|---|
//! | Left / Right | previous / next image |
//! | `+` / `=` | zoom in |
//! | `-` | zoom out |
//! | `0` | reset zoom |
//! | Escape | back to the category picker |
//!
//! Pointer, wheel and touch input reach the viewer through its surface widget,
//! not through this subscription.

use super::{Message, Screen};
use crate::ui::gallery;
use crate::ui::viewer::{component, controls};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Subscription};

/// Creates the keyboard subscription for the current screen.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Viewer => event::listen_with(|event, status, _window_id| {
            if status == event::Status::Captured {
                return None;
            }
            match event {
                event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                    viewer_shortcut(&key)
                }
                _ => None,
            }
        }),
        Screen::Picker => Subscription::none(),
    }
}

/// Maps a pressed key to the viewer action it triggers.
fn viewer_shortcut(key: &Key) -> Option<Message> {
    let control = |message| Some(Message::Viewer(component::Message::Controls(message)));

    match key.as_ref() {
        Key::Named(Named::ArrowRight) => control(controls::Message::NavigateNext),
        Key::Named(Named::ArrowLeft) => control(controls::Message::NavigatePrevious),
        Key::Named(Named::Escape) => Some(Message::Gallery(gallery::Message::Close)),
        Key::Character("+" | "=") => control(controls::Message::ZoomIn),
        Key::Character("-") => control(controls::Message::ZoomOut),
        Key::Character("0") => control(controls::Message::ResetZoom),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(c: &str) -> Key {
        Key::Character(c.into())
    }

    #[test]
    fn arrows_navigate() {
        assert!(matches!(
            viewer_shortcut(&Key::Named(Named::ArrowRight)),
            Some(Message::Viewer(component::Message::Controls(
                controls::Message::NavigateNext
            )))
        ));
        assert!(matches!(
            viewer_shortcut(&Key::Named(Named::ArrowLeft)),
            Some(Message::Viewer(component::Message::Controls(
                controls::Message::NavigatePrevious
            )))
        ));
    }

    #[test]
    fn zoom_keys_map_to_controls() {
        assert!(matches!(
            viewer_shortcut(&character("+")),
            Some(Message::Viewer(component::Message::Controls(
                controls::Message::ZoomIn
            )))
        ));
        assert!(matches!(
            viewer_shortcut(&character("-")),
            Some(Message::Viewer(component::Message::Controls(
                controls::Message::ZoomOut
            )))
        ));
        assert!(matches!(
            viewer_shortcut(&character("0")),
            Some(Message::Viewer(component::Message::Controls(
                controls::Message::ResetZoom
            )))
        ));
    }

    #[test]
    fn escape_closes_viewer() {
        assert!(matches!(
            viewer_shortcut(&Key::Named(Named::Escape)),
            Some(Message::Gallery(gallery::Message::Close))
        ));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert!(viewer_shortcut(&character("q")).is_none());
        assert!(viewer_shortcut(&Key::Named(Named::Enter)).is_none());
    }
}
