//! Vertical slider control with progress-tier icons
//!
//! The [`slider`] module holds the host-agnostic control. [`ui`] hosts it in
//! iced, and [`app`] is a small demo screen built on top.

pub mod app;
pub mod assets;
pub mod config;
pub mod slider;
pub mod ui;

pub use assets::{Icons, Image, ResourceId, ResourceLoader};
pub use config::SliderAttributes;
pub use slider::{Slider, SliderError, SliderListener, TouchEvent, TouchPhase};
