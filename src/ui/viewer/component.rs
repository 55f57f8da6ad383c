// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! Wraps [`ViewerState`] for the Iced runtime: surface input and control
//! presses are routed into the state machine, and the [`Command`]s it
//! returns become tasks (background decoding, hint timers).

use crate::domain::gallery::{ImageRef, Position};
use crate::error::ImageLoadError;
use crate::media::{load_image_async, ImageData};
use crate::ui::state::{zoom, SwipeDirection};
use crate::ui::styles;
use crate::ui::viewer::{self, controls, Command, Effect, LoadState, Navigation, ViewerSettings, ViewerState};
use crate::ui::widgets::{image_surface, SurfaceEvent};
use iced::widget::{Container, Stack};
use iced::{Element, Length, Task};

/// Messages emitted by viewer-related widgets.
#[derive(Debug, Clone)]
pub enum Message {
    Surface(SurfaceEvent),
    Controls(controls::Message),
    Retry,
    ImageLoaded {
        generation: u64,
        result: Result<ImageData, ImageLoadError>,
    },
    HintExpired(u64),
}

/// Environment information required to render the viewer.
pub struct ViewEnv {
    /// Counter shown in the corner, if the host tracks one.
    pub position: Option<Position>,
}

/// Complete viewer component state.
#[derive(Debug, Default)]
pub struct State {
    viewer: ViewerState,
}

impl State {
    #[must_use]
    pub fn new(settings: ViewerSettings) -> Self {
        Self {
            viewer: ViewerState::new(settings),
        }
    }

    /// Read-only access to the underlying state machine.
    #[must_use]
    pub fn viewer(&self) -> &ViewerState {
        &self.viewer
    }

    /// Displays `image`, discarding everything tied to the previous one.
    pub fn show(&mut self, image: ImageRef, navigation: Navigation) -> Task<Message> {
        log::debug!("Showing {}", image.path().display());
        let commands = self.viewer.show(image, navigation);
        Task::batch(commands.into_iter().map(command_task))
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::Surface(event) => (self.handle_surface_event(event), Task::none()),
            Message::Controls(control) => (self.handle_control(control), Task::none()),
            Message::Retry => {
                let task = self.viewer.retry().map_or_else(Task::none, command_task);
                (Effect::None, task)
            }
            Message::ImageLoaded { generation, result } => {
                self.viewer.load_finished(generation, result);
                (Effect::None, Task::none())
            }
            Message::HintExpired(token) => {
                self.viewer.hint_expired(token);
                (Effect::None, Task::none())
            }
        }
    }

    fn handle_surface_event(&mut self, event: SurfaceEvent) -> Effect {
        match event {
            SurfaceEvent::Resized(size) => self.viewer.resize(size),
            SurfaceEvent::Pressed(position) => self.viewer.pointer_pressed(position),
            SurfaceEvent::Moved(position) => self.viewer.pointer_moved(position),
            SurfaceEvent::Released => self.viewer.pointer_released(),
            SurfaceEvent::Wheel(delta) => self.viewer.wheel(zoom::wheel_delta_px(delta)),
            SurfaceEvent::FingerPressed { finger, position } => {
                self.viewer.touch_pressed(finger, position);
            }
            SurfaceEvent::FingerMoved { finger, position } => {
                self.viewer.touch_moved(finger, position);
            }
            SurfaceEvent::FingerLifted { finger, position } => {
                return self.viewer.touch_lifted(finger, position);
            }
            SurfaceEvent::FingerLost { finger } => self.viewer.touch_lost(finger),
        }
        Effect::None
    }

    fn handle_control(&mut self, message: controls::Message) -> Effect {
        match message {
            controls::Message::ZoomIn => self.viewer.zoom_in(),
            controls::Message::ZoomOut => self.viewer.zoom_out(),
            controls::Message::ResetZoom => self.viewer.reset(),
            controls::Message::NavigateNext => {
                return self.viewer.navigate(SwipeDirection::Next);
            }
            controls::Message::NavigatePrevious => {
                return self.viewer.navigate(SwipeDirection::Previous);
            }
        }
        Effect::None
    }

    pub fn view(&self, env: ViewEnv) -> Element<'_, Message> {
        let viewer = &self.viewer;

        let mut surface = image_surface(Message::Surface)
            .draggable(viewer.can_drag())
            .dragging(viewer.is_dragging());
        if let (Some(data), Some(placement)) = (viewer.image(), viewer.image_bounds()) {
            surface = surface.image(&data.handle, placement);
        }

        let mut stack = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(
                Container::new(surface)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(styles::container::viewport),
            );

        match viewer.load_state() {
            LoadState::Pending => stack = stack.push(viewer::loading_view()),
            LoadState::Failed(error) => stack = stack.push(viewer::error_view(error)),
            LoadState::Empty | LoadState::Loaded(_) => {}
        }

        stack = stack.push(
            controls::view(controls::ViewContext {
                scale: viewer.scale(),
                zoom_enabled: viewer.fit().is_some(),
                navigation: viewer.navigation(),
            })
            .map(Message::Controls),
        );

        if let Some(position) = env.position {
            let label = viewer.image_ref().map_or("", ImageRef::label);
            stack = stack.push(viewer::counter_view(position, label));
        }

        if viewer.hint_visible() {
            stack = stack.push(viewer::hint_view());
        }

        stack.into()
    }
}

/// Turns a state-machine request into a runtime task.
fn command_task(command: Command) -> Task<Message> {
    match command {
        Command::Load { generation, path } => {
            Task::perform(load_image_async(path), move |result| {
                Message::ImageLoaded { generation, result }
            })
        }
        Command::ArmHint(timer) => Task::perform(timer.wait(), Message::HintExpired),
    }
}
