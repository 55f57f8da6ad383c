// SPDX-License-Identifier: MPL-2.0
//! Viewer state machine.
//!
//! [`ViewerState`] owns everything the viewer knows about the image on
//! screen: load lifecycle, zoom scale, pan offset, drag and touch tracking,
//! and the hint visibility. It never talks to the GUI toolkit directly.
//! Asynchronous work (decoding, hint expiry) is requested through
//! [`Command`] values that the component turns into tasks, and navigation
//! requests come back as an [`Effect`] for the application to act on.
//!
//! Geometry uses the container's local coordinate space: `(0, 0)` is the
//! top-left corner of the viewport and the image center sits at the
//! viewport center shifted by the pan offset.

use crate::config::ViewerConfig;
use crate::domain::gallery::ImageRef;
use crate::domain::ui::newtypes::{HintTimeout, SwipeThreshold, WheelSensitivity, ZoomScale};
use crate::error::ImageLoadError;
use crate::media::ImageData;
use crate::ui::state::swipe::{self, SwipeDirection, TouchGesture};
use crate::ui::state::{
    can_drag, cover_fit, zoom, CoverFit, DragState, HintState, HintTimer, PanLimits, TouchTracker,
};
use iced::{Point, Rectangle, Size, Vector};
use std::path::PathBuf;

/// Tunables read from the `[viewer]` config section.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewerSettings {
    pub hint_timeout: HintTimeout,
    pub swipe_threshold: SwipeThreshold,
    pub wheel_sensitivity: WheelSensitivity,
}

impl ViewerSettings {
    #[must_use]
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self {
            hint_timeout: config.hint_timeout(),
            swipe_threshold: config.swipe_threshold(),
            wheel_sensitivity: config.wheel_sensitivity(),
        }
    }
}

/// Which navigation requests the host is able to honor.
///
/// A swipe toward a missing neighbor is still recognized, it just produces
/// [`Effect::None`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigation {
    pub next: bool,
    pub previous: bool,
}

impl Navigation {
    pub const BOTH: Self = Self {
        next: true,
        previous: true,
    };
    pub const NONE: Self = Self {
        next: false,
        previous: false,
    };
}

/// Where the current image reference is in its load lifecycle.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    /// No image reference has been shown yet.
    #[default]
    Empty,
    /// Decoding is in flight.
    Pending,
    Loaded(ImageData),
    Failed(ImageLoadError),
}

impl LoadState {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Pending)
    }

    #[must_use]
    pub fn error(&self) -> Option<&ImageLoadError> {
        match self {
            LoadState::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Asynchronous work requested by the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Decode `path`; the result must be fed back with the same generation.
    Load { generation: u64, path: PathBuf },
    /// Wait for the hint deadline, then report the timer token.
    ArmHint(HintTimer),
}

/// Side effects the host should perform after a viewer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Effect {
    #[default]
    None,
    NavigateNext,
    NavigatePrevious,
}

/// Complete interactive state of one viewer instance.
#[derive(Debug, Clone, Default)]
pub struct ViewerState {
    settings: ViewerSettings,
    image: Option<ImageRef>,
    navigation: Navigation,
    load: LoadState,
    generation: u64,
    container: Size,
    scale: ZoomScale,
    offset: Vector,
    drag: DragState,
    touch: TouchTracker,
    hint: HintState,
}

impl ViewerState {
    #[must_use]
    pub fn new(settings: ViewerSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    // ------------------------------------------------------------------
    // Image reference lifecycle
    // ------------------------------------------------------------------

    /// Switches to a new image reference.
    ///
    /// Resets zoom, pan and gesture tracking, shows the hint and starts a
    /// fresh load. Any load or hint timer issued for an earlier reference
    /// becomes stale.
    pub fn show(&mut self, image: ImageRef, navigation: Navigation) -> Vec<Command> {
        self.reset_view();
        self.touch.reset();
        self.navigation = navigation;

        let path = image.path().to_path_buf();
        self.image = Some(image);
        let generation = self.begin_load();
        let timer = self.hint.show(self.settings.hint_timeout);

        vec![Command::Load { generation, path }, Command::ArmHint(timer)]
    }

    /// Updates which neighbors exist without touching the current image.
    pub fn set_navigation(&mut self, navigation: Navigation) {
        self.navigation = navigation;
    }

    /// Re-issues the load of a failed image under a new generation.
    ///
    /// Returns `None` unless the current image is in the failed state.
    pub fn retry(&mut self) -> Option<Command> {
        if !matches!(self.load, LoadState::Failed(_)) {
            return None;
        }
        let path = self.image.as_ref()?.path().to_path_buf();
        let generation = self.begin_load();
        log::info!("Retrying {}", path.display());
        Some(Command::Load { generation, path })
    }

    /// Applies a decode result. Results from an earlier generation are
    /// dropped and `false` is returned.
    pub fn load_finished(
        &mut self,
        generation: u64,
        result: Result<ImageData, ImageLoadError>,
    ) -> bool {
        if generation != self.generation || !self.load.is_pending() {
            log::debug!(
                "Discarding stale load result (generation {generation}, current {})",
                self.generation
            );
            return false;
        }

        let path = self
            .image
            .as_ref()
            .map(|image| image.path().display().to_string())
            .unwrap_or_default();
        self.load = match result {
            Ok(data) => {
                log::info!("Loaded {path} ({}x{})", data.width, data.height);
                LoadState::Loaded(data)
            }
            Err(error) => {
                log::warn!("Failed to load {path}: {error}");
                LoadState::Failed(error)
            }
        };
        self.reclamp();
        true
    }

    /// Hides the hint if `token` belongs to the latest timer.
    pub fn hint_expired(&mut self, token: u64) -> bool {
        self.hint.expire(token)
    }

    fn begin_load(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.load = LoadState::Pending;
        self.generation
    }

    fn reset_view(&mut self) {
        self.scale = ZoomScale::REST;
        self.offset = Vector::ZERO;
        self.drag.stop();
    }

    // ------------------------------------------------------------------
    // Container
    // ------------------------------------------------------------------

    /// Records the measured container size and re-clamps the offset.
    pub fn resize(&mut self, container: Size) {
        self.container = container;
        if self.fit().is_none() {
            self.drag.stop();
        }
        self.reclamp();
    }

    // ------------------------------------------------------------------
    // Zoom
    // ------------------------------------------------------------------

    /// Applies a wheel delta expressed in pixels (positive zooms out).
    pub fn wheel(&mut self, delta_px: f32) {
        if self.fit().is_none() {
            return;
        }
        self.scale = zoom::wheel(self.scale, delta_px, self.settings.wheel_sensitivity);
        self.reclamp();
    }

    pub fn zoom_in(&mut self) {
        if self.fit().is_none() {
            return;
        }
        self.scale = zoom::zoom_in(self.scale);
        self.reclamp();
    }

    /// Steps the zoom down; close to rest the image is recentered.
    pub fn zoom_out(&mut self) {
        if self.fit().is_none() {
            return;
        }
        let step = zoom::zoom_out(self.scale);
        self.scale = step.scale;
        if step.recenter {
            self.offset = Vector::ZERO;
            self.rebase_drag();
        }
        self.reclamp();
    }

    pub fn reset(&mut self) {
        self.scale = ZoomScale::REST;
        self.offset = Vector::ZERO;
        self.rebase_drag();
    }

    /// Keeps a drag in progress from snapping back to the offset it started
    /// from; stops it when the image can no longer move.
    fn rebase_drag(&mut self) {
        if self.can_drag() {
            self.drag.rebase(self.offset);
        } else {
            self.drag.stop();
        }
    }

    // ------------------------------------------------------------------
    // Pointer
    // ------------------------------------------------------------------

    pub fn pointer_pressed(&mut self, pointer: Point) {
        if self.can_drag() {
            self.drag.start(pointer, self.offset);
        }
    }

    pub fn pointer_moved(&mut self, pointer: Point) {
        if let Some(proposed) = self.drag.follow(pointer) {
            self.offset = self.limits().clamp(proposed);
        }
    }

    pub fn pointer_released(&mut self) {
        self.drag.stop();
    }

    // ------------------------------------------------------------------
    // Touch
    // ------------------------------------------------------------------

    /// A finger went down. Only a lone finger can pan or swipe; a second
    /// one cancels both.
    pub fn touch_pressed(&mut self, finger: u64, position: Point) {
        if self.touch.press(finger, position) {
            if self.can_drag() {
                self.drag.start(position, self.offset);
            }
        } else {
            self.drag.stop();
        }
    }

    pub fn touch_moved(&mut self, finger: u64, position: Point) {
        if self.touch.is_single(finger) {
            self.pointer_moved(position);
        }
    }

    /// A finger was lifted. At rest, a long enough horizontal move becomes a
    /// navigation request.
    pub fn touch_lifted(&mut self, finger: u64, position: Point) -> Effect {
        self.drag.stop();
        let Some(start) = self.touch.lift(finger) else {
            return Effect::None;
        };

        match swipe::classify(start, position, self.scale, self.settings.swipe_threshold) {
            TouchGesture::Swipe(direction) => self.navigate(direction),
            TouchGesture::Pan | TouchGesture::None => Effect::None,
        }
    }

    pub fn touch_lost(&mut self, finger: u64) {
        self.touch.lose(finger);
        self.drag.stop();
    }

    /// Maps a navigation direction to an effect, honoring missing neighbors.
    #[must_use]
    pub fn navigate(&self, direction: SwipeDirection) -> Effect {
        match direction {
            SwipeDirection::Next if self.navigation.next => Effect::NavigateNext,
            SwipeDirection::Previous if self.navigation.previous => Effect::NavigatePrevious,
            _ => Effect::None,
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    #[must_use]
    pub fn scale(&self) -> ZoomScale {
        self.scale
    }

    #[must_use]
    pub fn offset(&self) -> Vector {
        self.offset
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        !self.scale.is_rest()
    }

    #[must_use]
    pub fn hint_visible(&self) -> bool {
        self.hint.is_visible()
    }

    #[must_use]
    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    #[must_use]
    pub fn image_ref(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn navigation(&self) -> Navigation {
        self.navigation
    }

    #[must_use]
    pub fn container(&self) -> Size {
        self.container
    }

    #[must_use]
    pub fn settings(&self) -> ViewerSettings {
        self.settings
    }

    /// Decoded image, once loaded.
    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        match &self.load {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Cover-fit of the loaded image into the current container, or `None`
    /// while there is nothing to lay out.
    #[must_use]
    pub fn fit(&self) -> Option<CoverFit> {
        cover_fit(self.image()?.natural_size(), self.container)
    }

    #[must_use]
    pub fn can_drag(&self) -> bool {
        self.fit()
            .is_some_and(|fit| can_drag(&fit, self.scale, self.container))
    }

    #[must_use]
    pub fn limits(&self) -> PanLimits {
        self.fit().map_or(PanLimits::LOCKED, |fit| {
            PanLimits::new(&fit, self.scale, self.container)
        })
    }

    /// Where the scaled image lands, in container coordinates.
    #[must_use]
    pub fn image_bounds(&self) -> Option<Rectangle> {
        let fit = self.fit()?;
        let s = self.scale.value();
        let size = Size::new(fit.rendered.width * s, fit.rendered.height * s);
        let center = Point::new(self.container.width / 2.0, self.container.height / 2.0)
            + self.offset;
        Some(Rectangle::new(
            Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
            size,
        ))
    }

    fn reclamp(&mut self) {
        self.offset = self.limits().clamp(self.offset);
    }
}
