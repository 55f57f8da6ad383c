// SPDX-License-Identifier: MPL-2.0
//! Image surface widget.
//!
//! Draws a decoded image at a caller-provided placement, clipped to the
//! widget bounds, and reports raw pointer, wheel and touch input in local
//! coordinates. It also watches its own laid-out size and reports it
//! whenever it changes, so the viewer geometry always follows the space the
//! surface actually occupies.

use iced::advanced::image::{self as advanced_image, Renderer as _};
use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer::{self, Renderer as _};
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::mouse::{self, ScrollDelta};
use iced::widget::image::Handle;
use iced::{touch, Element, Event, Length, Point, Rectangle, Size, Theme};

/// Input reported by the surface, positions relative to its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceEvent {
    Resized(Size),
    Pressed(Point),
    Moved(Point),
    Released,
    Wheel(ScrollDelta),
    FingerPressed { finger: u64, position: Point },
    FingerMoved { finger: u64, position: Point },
    FingerLifted { finger: u64, position: Point },
    FingerLost { finger: u64 },
}

#[derive(Debug, Default)]
struct State {
    reported: Option<Size>,
    /// Left button went down inside the surface and has not been released.
    pressed: bool,
}

/// Viewport surface for the interactive viewer.
pub struct ImageSurface<'a, Message> {
    image: Option<(&'a Handle, Rectangle)>,
    draggable: bool,
    dragging: bool,
    on_event: Box<dyn Fn(SurfaceEvent) -> Message + 'a>,
}

impl<'a, Message> ImageSurface<'a, Message> {
    pub fn new(on_event: impl Fn(SurfaceEvent) -> Message + 'a) -> Self {
        Self {
            image: None,
            draggable: false,
            dragging: false,
            on_event: Box::new(on_event),
        }
    }

    /// Image to draw and where, in local coordinates.
    #[must_use]
    pub fn image(mut self, handle: &'a Handle, placement: Rectangle) -> Self {
        self.image = Some((handle, placement));
        self
    }

    /// Shows a grab cursor when the image can be panned.
    #[must_use]
    pub fn draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    /// Shows a grabbing cursor while the viewer reports an active drag.
    #[must_use]
    pub fn dragging(mut self, dragging: bool) -> Self {
        self.dragging = dragging;
        self
    }
}

impl<Message> Widget<Message, Theme, iced::Renderer> for ImageSurface<'_, Message> {
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(
        &mut self,
        _tree: &mut widget::Tree,
        _renderer: &iced::Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::Node::new(limits.max())
    }

    fn draw(
        &self,
        _tree: &widget::Tree,
        renderer: &mut iced::Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let Some((handle, placement)) = self.image else {
            return;
        };
        let bounds = layout.bounds();
        let image_bounds = Rectangle {
            x: bounds.x + placement.x,
            y: bounds.y + placement.y,
            ..placement
        };

        renderer.with_layer(bounds, |renderer| {
            let image = advanced_image::Image::<Handle> {
                handle: handle.clone(),
                filter_method: advanced_image::FilterMethod::Linear,
                rotation: iced::Radians(0.0),
                opacity: 1.0,
                snap: true,
                border_radius: iced::border::Radius::default(),
            };
            renderer.draw_image(image, image_bounds, bounds);
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &iced::Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();

        let state = tree.state.downcast_mut::<State>();
        if state.reported != Some(bounds.size()) {
            state.reported = Some(bounds.size());
            shell.publish((self.on_event)(SurfaceEvent::Resized(bounds.size())));
        }

        if let Some(surface_event) = translate(event, bounds, cursor, &mut state.pressed) {
            if matches!(surface_event, SurfaceEvent::Wheel(_)) {
                shell.capture_event();
            }
            shell.publish((self.on_event)(surface_event));
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &iced::Renderer,
    ) -> mouse::Interaction {
        if self.dragging || (self.draggable && tree.state.downcast_ref::<State>().pressed) {
            mouse::Interaction::Grabbing
        } else if self.draggable && cursor.is_over(layout.bounds()) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message: 'a> From<ImageSurface<'a, Message>> for Element<'a, Message> {
    fn from(surface: ImageSurface<'a, Message>) -> Self {
        Element::new(surface)
    }
}

/// Helper function to create an image surface.
pub fn image_surface<'a, Message>(
    on_event: impl Fn(SurfaceEvent) -> Message + 'a,
) -> ImageSurface<'a, Message> {
    ImageSurface::new(on_event)
}

/// Maps a runtime event to surface input, or `None` when it is not ours.
///
/// `pressed` tracks the left button across events of the same batch, so
/// moves and the release after an in-bounds press are reported even
/// outside the surface.
fn translate(
    event: &Event,
    bounds: Rectangle,
    cursor: mouse::Cursor,
    pressed: &mut bool,
) -> Option<SurfaceEvent> {
    let local = |p: Point| Point::new(p.x - bounds.x, p.y - bounds.y);

    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            let position = cursor.position_in(bounds)?;
            *pressed = true;
            Some(SurfaceEvent::Pressed(position))
        }
        Event::Mouse(mouse::Event::CursorMoved { position }) if *pressed => {
            Some(SurfaceEvent::Moved(local(*position)))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            std::mem::take(pressed).then_some(SurfaceEvent::Released)
        }
        Event::Mouse(mouse::Event::WheelScrolled { delta }) if cursor.is_over(bounds) => {
            Some(SurfaceEvent::Wheel(*delta))
        }
        Event::Touch(touch::Event::FingerPressed { id, position })
            if bounds.contains(*position) =>
        {
            Some(SurfaceEvent::FingerPressed {
                finger: id.0,
                position: local(*position),
            })
        }
        Event::Touch(touch::Event::FingerMoved { id, position }) => {
            Some(SurfaceEvent::FingerMoved {
                finger: id.0,
                position: local(*position),
            })
        }
        Event::Touch(touch::Event::FingerLifted { id, position }) => {
            Some(SurfaceEvent::FingerLifted {
                finger: id.0,
                position: local(*position),
            })
        }
        Event::Touch(touch::Event::FingerLost { id, .. }) => {
            Some(SurfaceEvent::FingerLost { finger: id.0 })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Rectangle = Rectangle {
        x: 100.0,
        y: 50.0,
        width: 400.0,
        height: 300.0,
    };

    fn inside() -> mouse::Cursor {
        mouse::Cursor::Available(Point::new(150.0, 80.0))
    }

    #[test]
    fn press_inside_is_reported_locally() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert_eq!(
            translate(&event, BOUNDS, inside(), &mut false),
            Some(SurfaceEvent::Pressed(Point::new(50.0, 30.0)))
        );
    }

    #[test]
    fn press_outside_is_ignored() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let outside = mouse::Cursor::Available(Point::new(10.0, 10.0));
        let mut pressed = false;
        assert_eq!(translate(&event, BOUNDS, outside, &mut pressed), None);
        assert!(!pressed);
    }

    #[test]
    fn moves_are_only_reported_while_pressed() {
        let event = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(600.0, 60.0),
        });
        assert_eq!(translate(&event, BOUNDS, inside(), &mut false), None);
        assert_eq!(
            translate(&event, BOUNDS, inside(), &mut true),
            Some(SurfaceEvent::Moved(Point::new(500.0, 10.0)))
        );
    }

    #[test]
    fn release_in_same_batch_as_press_is_forwarded() {
        let press = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let moved = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(700.0, 60.0),
        });
        let release = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));
        let mut pressed = false;

        assert!(translate(&press, BOUNDS, inside(), &mut pressed).is_some());
        assert_eq!(
            translate(&moved, BOUNDS, inside(), &mut pressed),
            Some(SurfaceEvent::Moved(Point::new(600.0, 10.0)))
        );
        assert_eq!(
            translate(&release, BOUNDS, inside(), &mut pressed),
            Some(SurfaceEvent::Released)
        );
        assert!(!pressed);
        assert_eq!(translate(&release, BOUNDS, inside(), &mut pressed), None);
    }

    #[test]
    fn wheel_requires_hover() {
        let event = Event::Mouse(mouse::Event::WheelScrolled {
            delta: ScrollDelta::Lines { x: 0.0, y: 1.0 },
        });
        assert!(translate(&event, BOUNDS, inside(), &mut false).is_some());
        assert_eq!(
            translate(&event, BOUNDS, mouse::Cursor::Unavailable, &mut false),
            None
        );
    }

    #[test]
    fn finger_press_outside_is_ignored_but_lift_is_forwarded() {
        let press = Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(3),
            position: Point::new(0.0, 0.0),
        });
        assert_eq!(translate(&press, BOUNDS, inside(), &mut false), None);

        let lift = Event::Touch(touch::Event::FingerLifted {
            id: touch::Finger(3),
            position: Point::new(120.0, 60.0),
        });
        assert_eq!(
            translate(&lift, BOUNDS, inside(), &mut false),
            Some(SurfaceEvent::FingerLifted {
                finger: 3,
                position: Point::new(20.0, 10.0),
            })
        );
    }

    #[test]
    fn window_events_are_not_translated() {
        let event = Event::Window(iced::window::Event::Resized(Size::new(100.0, 50.0)));
        assert_eq!(translate(&event, BOUNDS, inside(), &mut false), None);
    }
}
