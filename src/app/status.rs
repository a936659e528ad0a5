//! Status line driven by slider notifications

use parking_lot::Mutex;

use crate::slider::{Slider, SliderListener};

/// Progress as a percentage of `max`
pub fn percent(progress: u32, max: u32) -> f32 {
    if max == 0 {
        0.0
    } else {
        progress as f32 * 100.0 / max as f32
    }
}

/// Percentage rounded to a whole number, halves rounding up
pub fn whole_percent(progress: u32, max: u32) -> u32 {
    percent(progress, max).round() as u32
}

/// Text shown above the slider, rewritten on every notification
#[derive(Debug, Default)]
pub struct StatusLine {
    text: Mutex<String>,
}

impl StatusLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Mutex::new(text.into()),
        }
    }

    pub fn text(&self) -> String {
        self.text.lock().clone()
    }

    fn set(&self, text: String) {
        *self.text.lock() = text;
    }
}

impl SliderListener for StatusLine {
    fn on_changed(&self, slider: &Slider, progress: u32, _from_user: bool) {
        self.set(format!("{}%", whole_percent(progress, slider.max())));
    }

    fn on_pressed(&self, slider: &Slider) {
        self.set(format!(
            "Pressed {}%",
            whole_percent(slider.progress(), slider.max())
        ));
    }

    fn on_released(&self, slider: &Slider) {
        self.set(format!(
            "Released {}%",
            whole_percent(slider.progress(), slider.max())
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_percent() {
        assert_eq!(percent(10, 100), 10.0);
        assert!((percent(1, 3) - 33.333).abs() < 0.01);
        assert_eq!(percent(5, 0), 0.0);
    }

    #[test]
    fn test_halves_round_up() {
        assert_eq!(whole_percent(1, 200), 1);
        assert_eq!(whole_percent(5, 200), 3);
        assert_eq!(whole_percent(1, 201), 0);
        assert_eq!(whole_percent(3, 0), 0);
    }

    #[test]
    fn test_programmatic_change_updates_text() {
        let status = Arc::new(StatusLine::default());
        let mut slider = Slider::new();
        slider.set_max(400);
        slider.set_listener(Some(status.clone()));

        slider.set_progress(100).unwrap();
        assert_eq!(status.text(), "25%");

        slider.set_progress(1).unwrap();
        assert_eq!(status.text(), "0%");

        slider.set_progress(2).unwrap();
        assert_eq!(status.text(), "1%");
    }
}
