//! Minimal drawing surface the slider paints onto
//!
//! Hosts implement [`Canvas`] over their own renderer. The slider only needs a
//! rounded clip, solid rectangles and image blits.

use iced::{Color, Rectangle};

use crate::assets::Image;

/// Drawing operations required to render a slider
pub trait Canvas {
    /// Clip all following operations to a rounded rectangle
    fn clip_rounded(&mut self, bounds: Rectangle, radius: f32);

    /// Fill a rectangle with a solid color
    fn fill_rect(&mut self, rect: Rectangle, color: Color);

    /// Draw an image scaled into `rect`
    fn draw_image(&mut self, image: &Image, rect: Rectangle);
}
