//! Slider geometry derived from size and progress

use iced::{Point, Rectangle, Size};

use super::mapping::fill_ratio;

/// Rounded clip region covering the whole track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    pub bounds: Rectangle,
    pub radius: f32,
}

/// Everything the renderer needs to paint one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub track: Rectangle,
    pub fill: Rectangle,
    pub icon: Rectangle,
    pub clip: RoundedRect,
}

impl Geometry {
    /// Compute the geometry for a slider of `size`.
    ///
    /// All rectangles are relative to the slider's own origin.
    pub fn compute(
        size: Size,
        progress: u32,
        max: u32,
        corner_radius: f32,
        icon_size: f32,
    ) -> Self {
        let track = Rectangle::new(Point::ORIGIN, size);

        let fill_top = (1.0 - fill_ratio(progress, max)) * size.height;
        let fill = Rectangle {
            x: 0.0,
            y: fill_top,
            width: size.width,
            height: size.height - fill_top,
        };

        let icon = Rectangle {
            x: size.width / 2.0 - icon_size / 2.0,
            y: size.height / 2.0 - icon_size / 2.0,
            width: icon_size,
            height: icon_size,
        };

        Self {
            track,
            fill,
            icon,
            clip: RoundedRect {
                bounds: track,
                radius: corner_radius,
            },
        }
    }

    /// Top edge of the fill region
    pub fn fill_top(&self) -> f32 {
        self.fill.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_covers_bounds() {
        let geometry = Geometry::compute(Size::new(80.0, 200.0), 5, 10, 10.0, 36.0);
        assert_eq!(geometry.track, Rectangle::new(Point::ORIGIN, Size::new(80.0, 200.0)));
        assert_eq!(geometry.clip.bounds, geometry.track);
        assert_eq!(geometry.clip.radius, 10.0);
    }

    #[test]
    fn test_fill_is_bottom_aligned() {
        let geometry = Geometry::compute(Size::new(80.0, 200.0), 50, 100, 0.0, 36.0);
        assert_eq!(geometry.fill_top(), 100.0);
        assert_eq!(geometry.fill.height, 100.0);
        assert_eq!(geometry.fill.y + geometry.fill.height, 200.0);
        assert_eq!(geometry.fill.width, 80.0);
    }

    #[test]
    fn test_fill_extremes() {
        let empty = Geometry::compute(Size::new(80.0, 200.0), 0, 100, 0.0, 36.0);
        assert_eq!(empty.fill_top(), 200.0);
        assert_eq!(empty.fill.height, 0.0);

        let full = Geometry::compute(Size::new(80.0, 200.0), 100, 100, 0.0, 36.0);
        assert_eq!(full.fill_top(), 0.0);
        assert_eq!(full.fill.height, 200.0);
    }

    #[test]
    fn test_zero_max_draws_empty_fill() {
        let geometry = Geometry::compute(Size::new(80.0, 200.0), 0, 0, 0.0, 36.0);
        assert_eq!(geometry.fill_top(), 200.0);
    }

    #[test]
    fn test_icon_is_centered() {
        let geometry = Geometry::compute(Size::new(80.0, 200.0), 0, 10, 0.0, 36.0);
        assert_eq!(
            geometry.icon,
            Rectangle {
                x: 22.0,
                y: 82.0,
                width: 36.0,
                height: 36.0,
            }
        );
        assert_eq!(geometry.icon.center(), geometry.track.center());
    }
}
