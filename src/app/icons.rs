//! Generated volume icons for the demo

use image::{Rgba, RgbaImage};

use crate::assets::Image;

pub const VOLUME_LOW: &str = "volume_low";
pub const VOLUME_MEDIUM: &str = "volume_medium";
pub const VOLUME_HIGH: &str = "volume_high";

const GREY_600: Rgba<u8> = Rgba([0x75, 0x75, 0x75, 0xff]);
const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Speaker glyph with `waves` sound waves, `size` pixels square
pub fn volume_icon(waves: u32, size: u32) -> Image {
    let scale = size as f32;
    let pixels = RgbaImage::from_fn(size, size, |x, y| {
        let u = (x as f32 + 0.5) / scale;
        let v = (y as f32 + 0.5) / scale;
        if covers(u, v, waves) { GREY_600 } else { CLEAR }
    });
    Image::from_dynamic(image::DynamicImage::ImageRgba8(pixels))
}

/// Whether the unit-square point `(u, v)` is inked
fn covers(u: f32, v: f32, waves: u32) -> bool {
    let dy = (v - 0.5).abs();

    let body = (0.12..=0.30).contains(&u) && dy <= 0.12;
    let cone = (0.30..=0.50).contains(&u) && dy <= 0.12 + (u - 0.30) * 0.9;

    let du = u - 0.42;
    let distance = (du * du + dy * dy).sqrt();
    let wave = u > 0.55
        && dy <= du
        && (1..=waves).any(|k| (distance - (0.12 + 0.12 * k as f32)).abs() <= 0.03);

    body || cone || wave
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speaker_is_always_drawn() {
        for waves in 1..=3 {
            assert!(covers(0.2, 0.5, waves));
            assert!(covers(0.45, 0.5, waves));
        }
        assert!(!covers(0.05, 0.05, 3));
    }

    #[test]
    fn test_outer_wave_only_on_high() {
        // Third wave sits at distance 0.48 from the cone tip
        let (u, v) = (0.42 + 0.48, 0.5);
        assert!(!covers(u, v, 1));
        assert!(!covers(u, v, 2));
        assert!(covers(u, v, 3));
    }

    #[test]
    fn test_icon_size() {
        let icon = volume_icon(2, 36);
        assert_eq!((icon.width(), icon.height()), (36, 36));
    }
}
