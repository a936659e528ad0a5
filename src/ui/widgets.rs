//! Reusable UI widgets
//!
//! Widgets wrap host-agnostic controls for iced. They use generic Message
//! types and never depend on `crate::app`.

mod vertical_slider;

pub use vertical_slider::{FrameCanvas, SliderInput, VerticalSlider, vertical_slider};
