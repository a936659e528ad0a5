//! Vertical slider control
//!
//! A rounded track with a fill that grows from the bottom edge in proportion
//! to `progress / max`, plus an optional icon picked from three tiers.
//! The core here is host-agnostic: a host feeds it its size and touch events
//! and lets it paint onto a [`Canvas`].

mod canvas;
mod error;
mod geometry;
mod listener;
mod mapping;

use std::cell::Cell;
use std::sync::Arc;

use iced::{Color, Size};

use crate::assets::{IconIds, Icons, Image, ResourceId, ResourceLoader};
use crate::config::SliderAttributes;

pub use canvas::Canvas;
pub use error::SliderError;
pub use geometry::{Geometry, RoundedRect};
pub use listener::SliderListener;
pub use mapping::{IconTier, dp_to_px, fill_ratio, progress_from_position};

#[cfg(test)]
pub(crate) use canvas::recording;

/// Default translucent gray used when no background image is set
pub const TRACK_COLOR: Color =
    Color::from_rgba(120.0 / 255.0, 120.0 / 255.0, 120.0 / 255.0, 170.0 / 255.0);
/// Default fill color used when no fill image is set
pub const FILL_COLOR: Color = Color::WHITE;

pub const DEFAULT_MAX: u32 = 10;
pub const DEFAULT_PROGRESS: u32 = 5;
/// Default corner radius, in density-independent units
pub const DEFAULT_CORNER_RADIUS_DP: f32 = 10.0;
/// Edge length of the icon square, in density-independent units
pub const ICON_SIZE_DP: f32 = 36.0;

/// Phase of a touch or pointer gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Pressed,
    Moved,
    Released,
    /// The gesture was cancelled by the host
    Lost,
}

/// A single touch sample, `y` measured from the top of the slider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub y: f32,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase, y: f32) -> Self {
        Self { phase, y }
    }
}

/// The slider state: value, appearance and listener
pub struct Slider {
    size: Size,
    progress: u32,
    max: u32,
    corner_radius: f32,
    density: f32,
    icons: Icons,
    background: Option<Image>,
    fill_image: Option<Image>,
    listener: Option<Arc<dyn SliderListener>>,
    pressed: bool,
    redraw_requested: Cell<bool>,
}

impl Slider {
    /// Creates a slider with default values at a density of 1
    pub fn new() -> Self {
        Self::with_density(1.0)
    }

    /// Creates a slider with default values for the given display density
    pub fn with_density(density: f32) -> Self {
        Self {
            size: Size::ZERO,
            progress: DEFAULT_PROGRESS,
            max: DEFAULT_MAX,
            corner_radius: dp_to_px(DEFAULT_CORNER_RADIUS_DP, density),
            density,
            icons: Icons::default(),
            background: None,
            fill_image: None,
            listener: None,
            pressed: false,
            redraw_requested: Cell::new(true),
        }
    }

    /// Builds a slider from its attributes.
    ///
    /// Background and fill images are decoded immediately. The icon names are
    /// returned instead of loaded so the caller can decode them off the UI
    /// thread and install the result with [`Slider::install_icons`].
    pub fn from_attributes(
        attributes: &SliderAttributes,
        loader: &dyn ResourceLoader,
    ) -> Result<(Self, IconIds), SliderError> {
        let mut slider = Self::with_density(attributes.density);
        slider.set_max(attributes.max);
        slider.set_progress(attributes.progress)?;
        if let Some(radius) = attributes.corner_radius {
            slider.set_corner_radius(radius * attributes.density);
        }
        if let Some(id) = &attributes.fill {
            slider.set_fill_resource(loader, id)?;
        }
        if let Some(id) = &attributes.background {
            slider.set_background_resource(loader, id)?;
        }

        Ok((slider, attributes.icon_ids()))
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Records the size given by the host's layout pass
    pub fn resize(&mut self, size: Size) {
        if self.size != size {
            tracing::trace!("Slider resized to {}x{}", size.width, size.height);
            self.size = size;
            self.invalidate();
        }
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    /// Sets the progress and notifies the listener with `from_user = false`.
    ///
    /// Fails without touching the current value when `progress > max`.
    /// Setting the same value twice notifies twice.
    pub fn set_progress(&mut self, progress: u32) -> Result<(), SliderError> {
        self.update_progress(progress)?;
        if let Some(listener) = &self.listener {
            listener.on_changed(self, progress, false);
        }
        Ok(())
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Sets the upper bound. The current progress is not revalidated.
    pub fn set_max(&mut self, max: u32) {
        self.max = max;
        self.invalidate();
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    pub fn set_corner_radius(&mut self, radius: f32) {
        self.corner_radius = radius;
        self.invalidate();
    }

    pub fn density(&self) -> f32 {
        self.density
    }

    /// Icon edge length in pixels
    pub fn icon_size(&self) -> f32 {
        dp_to_px(ICON_SIZE_DP, self.density)
    }

    pub fn icons(&self) -> &Icons {
        &self.icons
    }

    /// Replaces all three icons at once
    pub fn set_icons(&mut self, icons: Icons) {
        self.icons = icons;
        self.invalidate();
    }

    /// Installs a decoded icon batch. Tiers the batch lacks keep their icon.
    pub fn install_icons(&mut self, loaded: Icons) {
        self.icons.merge(loaded);
        self.invalidate();
    }

    pub fn set_icon_low(&mut self, image: Image) {
        self.icons.low = Some(image);
        self.invalidate();
    }

    pub fn set_icon_medium(&mut self, image: Image) {
        self.icons.medium = Some(image);
        self.invalidate();
    }

    pub fn set_icon_high(&mut self, image: Image) {
        self.icons.high = Some(image);
        self.invalidate();
    }

    pub fn set_icon_low_resource(
        &mut self,
        loader: &dyn ResourceLoader,
        id: &ResourceId,
    ) -> Result<(), SliderError> {
        self.set_icon_low(loader.load(id)?);
        Ok(())
    }

    pub fn set_icon_medium_resource(
        &mut self,
        loader: &dyn ResourceLoader,
        id: &ResourceId,
    ) -> Result<(), SliderError> {
        self.set_icon_medium(loader.load(id)?);
        Ok(())
    }

    pub fn set_icon_high_resource(
        &mut self,
        loader: &dyn ResourceLoader,
        id: &ResourceId,
    ) -> Result<(), SliderError> {
        self.set_icon_high(loader.load(id)?);
        Ok(())
    }

    /// Draws `image` instead of the flat track color
    pub fn set_background_image(&mut self, image: Image) {
        self.background = Some(image);
        self.invalidate();
    }

    pub fn set_background_resource(
        &mut self,
        loader: &dyn ResourceLoader,
        id: &ResourceId,
    ) -> Result<(), SliderError> {
        self.set_background_image(loader.load(id)?);
        Ok(())
    }

    /// Draws `image` instead of the flat fill color
    pub fn set_fill_image(&mut self, image: Image) {
        self.fill_image = Some(image);
        self.invalidate();
    }

    pub fn set_fill_resource(
        &mut self,
        loader: &dyn ResourceLoader,
        id: &ResourceId,
    ) -> Result<(), SliderError> {
        self.set_fill_image(loader.load(id)?);
        Ok(())
    }

    pub fn listener(&self) -> Option<&Arc<dyn SliderListener>> {
        self.listener.as_ref()
    }

    pub fn set_listener(&mut self, listener: Option<Arc<dyn SliderListener>>) {
        self.listener = listener;
    }

    /// Whether a touch is currently down on the slider
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Geometry for the current size and state
    pub fn geometry(&self) -> Geometry {
        Geometry::compute(
            self.size,
            self.progress,
            self.max,
            self.corner_radius,
            self.icon_size(),
        )
    }

    /// Feeds a touch sample to the slider.
    ///
    /// Returns `false` when the event is not handled and should fall through
    /// to the host.
    pub fn handle_touch(&mut self, event: TouchEvent) -> bool {
        match event.phase {
            TouchPhase::Pressed => {
                self.pressed = true;
                if let Some(listener) = &self.listener {
                    listener.on_pressed(self);
                }
                true
            }
            TouchPhase::Moved | TouchPhase::Released => {
                let progress = progress_from_position(event.y, self.size.height, self.max);
                self.store_progress(progress);

                if event.phase == TouchPhase::Released {
                    self.pressed = false;
                    if let Some(listener) = &self.listener {
                        listener.on_released(self);
                    }
                } else if let Some(listener) = &self.listener {
                    listener.on_changed(self, self.progress, true);
                }
                true
            }
            TouchPhase::Lost => {
                self.pressed = false;
                false
            }
        }
    }

    /// Paints the slider: rounded clip, track, fill, then the tier icon
    pub fn render(&self, canvas: &mut dyn Canvas) {
        let geometry = self.geometry();

        canvas.clip_rounded(geometry.clip.bounds, geometry.clip.radius);

        match &self.background {
            Some(image) => canvas.draw_image(image, geometry.track),
            None => canvas.fill_rect(geometry.track, TRACK_COLOR),
        }

        match &self.fill_image {
            Some(image) => canvas.draw_image(image, geometry.fill),
            None => canvas.fill_rect(geometry.fill, FILL_COLOR),
        }

        let tier = IconTier::select(self.progress, self.max);
        if let Some(icon) = self.icons.for_tier(tier) {
            canvas.draw_image(icon, geometry.icon);
        }
    }

    /// Returns and clears the pending redraw request
    pub fn take_redraw_request(&self) -> bool {
        self.redraw_requested.replace(false)
    }

    fn invalidate(&self) {
        self.redraw_requested.set(true);
    }

    fn update_progress(&mut self, progress: u32) -> Result<(), SliderError> {
        if progress > self.max {
            return Err(SliderError::ProgressOutOfRange {
                progress,
                max: self.max,
            });
        }
        self.store_progress(progress);
        Ok(())
    }

    fn store_progress(&mut self, progress: u32) {
        tracing::trace!("Slider progress {} -> {}", self.progress, progress);
        self.progress = progress;
        self.invalidate();
    }
}

impl Default for Slider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Slider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slider")
            .field("size", &self.size)
            .field("progress", &self.progress)
            .field("max", &self.max)
            .field("corner_radius", &self.corner_radius)
            .field("icons_loaded", &self.icons.is_complete())
            .field("pressed", &self.pressed)
            .finish_non_exhaustive()
    }
}
