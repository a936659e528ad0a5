//! Demo application showing a single vertical slider

mod icons;
mod resources;
mod status;

use std::sync::Arc;

use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length, Task, Theme};

use crate::assets::{Icons, ResourceLoader, load_icons};
use crate::config::SliderAttributes;
use crate::slider::Slider;
use crate::ui::theme;
use crate::ui::widgets::{SliderInput, vertical_slider};

pub use icons::{VOLUME_HIGH, VOLUME_LOW, VOLUME_MEDIUM, volume_icon};
pub use resources::DemoResources;
pub use status::{StatusLine, percent, whole_percent};

/// Demo max, overriding the attribute default
const DEMO_MAX: u32 = 100;
const DEMO_PROGRESS: u32 = 10;
/// Demo corner radius in density-independent units
const DEMO_CORNER_RADIUS_DP: f32 = 30.0;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// No-op message for failed background work
    Noop,
    /// Input from the slider widget
    Slider(SliderInput),
    /// Icons named in the attributes finished decoding
    IconsLoaded(Icons),
}

/// Main application state
pub struct App {
    slider: Slider,
    status: Arc<StatusLine>,
}

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let attributes = SliderAttributes::load();
        let loader: Arc<dyn ResourceLoader> =
            Arc::new(DemoResources::new(attributes.density, SliderAttributes::asset_dir()));

        let (slider, icon_ids) = match Slider::from_attributes(&attributes, loader.as_ref()) {
            Ok(built) => built,
            Err(e) => {
                tracing::warn!("Invalid slider attributes, using defaults: {}", e);
                (Slider::with_density(attributes.density), attributes.icon_ids())
            }
        };

        let app = Self::with_slider(slider, loader.as_ref());

        let load_task = if icon_ids.is_empty() {
            Task::none()
        } else {
            tracing::info!("Decoding slider icons in the background");
            Task::perform(load_icons(loader, icon_ids), |result| match result {
                Ok(icons) => Message::IconsLoaded(icons),
                Err(e) => {
                    tracing::warn!("Failed to load slider icons: {:#}", e);
                    Message::Noop
                }
            })
        };

        (app, load_task)
    }

    /// Apply the demo settings to `slider` and attach the status listener
    fn with_slider(mut slider: Slider, loader: &dyn ResourceLoader) -> Self {
        slider.set_max(DEMO_MAX);
        if let Err(e) = slider.set_progress(DEMO_PROGRESS) {
            tracing::warn!("Could not set demo progress: {}", e);
        }
        slider.set_corner_radius(slider.density() * DEMO_CORNER_RADIUS_DP);

        let icons = [
            (VOLUME_HIGH, Slider::set_icon_high_resource as IconSetter),
            (VOLUME_MEDIUM, Slider::set_icon_medium_resource),
            (VOLUME_LOW, Slider::set_icon_low_resource),
        ];
        for (name, set_icon) in icons {
            if let Err(e) = set_icon(&mut slider, loader, &name.into()) {
                tracing::warn!("Demo icon unavailable: {}", e);
            }
        }

        let status = Arc::new(StatusLine::new(format!(
            "{}%",
            whole_percent(slider.progress(), slider.max())
        )));
        slider.set_listener(Some(status.clone()));

        Self { slider, status }
    }

    pub fn title(&self) -> String {
        "Vertical Slider".to_string()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Handle messages
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Noop => {}
            Message::Slider(input) => {
                input.apply(&mut self.slider);
            }
            Message::IconsLoaded(icons) => {
                tracing::debug!("Slider icons ready (complete: {})", icons.is_complete());
                self.slider.install_icons(icons);
            }
        }
        Task::none()
    }

    /// Build the view
    pub fn view(&self) -> Element<'_, Message> {
        let status = text(self.status.text())
            .size(20)
            .color(theme::TEXT_PRIMARY);

        let slider = vertical_slider(&self.slider, Message::Slider)
            .width(Length::Fixed(120.0))
            .height(Length::Fixed(360.0));

        container(
            column![status, slider]
                .spacing(24)
                .align_x(Alignment::Center),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(theme::screen)
        .into()
    }
}

type IconSetter = fn(
    &mut Slider,
    &dyn ResourceLoader,
    &crate::assets::ResourceId,
) -> Result<(), crate::slider::SliderError>;
