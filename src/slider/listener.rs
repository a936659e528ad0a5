//! Progress notifications

use super::Slider;

/// Receives press, change and release notifications from a slider.
///
/// Every callback carries the slider that fired it, so one listener can be
/// shared by several sliders. Callbacks run synchronously on the thread that
/// handled the triggering event.
pub trait SliderListener {
    /// Progress changed, either from a drag (`from_user`) or from code
    fn on_changed(&self, slider: &Slider, progress: u32, from_user: bool);

    /// A touch went down on the slider
    fn on_pressed(&self, slider: &Slider);

    /// The touch was lifted
    fn on_released(&self, slider: &Slider);
}
