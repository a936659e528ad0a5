//! Value mappings shared by touch handling and rendering

/// Convert a pointer offset from the top of the slider into a progress value.
///
/// The top edge maps to `max` and the bottom edge to `0`. Positions beyond
/// either edge saturate instead of going through float rounding.
pub fn progress_from_position(y: f32, height: f32, max: u32) -> u32 {
    // Not laid out yet
    if height <= 0.0 || height.is_nan() {
        return 0;
    }

    let percent = (height - y) / height;
    if percent >= 1.0 {
        max
    } else if percent <= 0.0 || percent.is_nan() {
        0
    } else {
        (max as f32 * percent) as u32
    }
}

/// Fraction of the track covered by the fill, in `[0, 1]`
pub fn fill_ratio(progress: u32, max: u32) -> f32 {
    if max == 0 {
        0.0
    } else {
        (progress as f32 / max as f32).min(1.0)
    }
}

/// Convert density-independent units to whole pixels
pub fn dp_to_px(dp: f32, density: f32) -> f32 {
    (dp * density).trunc()
}

/// Which of the three icons represents the current progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconTier {
    Low,
    Medium,
    High,
}

impl IconTier {
    /// Select the tier for `progress` using integer thirds of `max`
    pub fn select(progress: u32, max: u32) -> Self {
        if progress < max / 3 {
            IconTier::Low
        } else if progress < max * 2 / 3 {
            IconTier::Medium
        } else {
            IconTier::High
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_extremes_saturate() {
        assert_eq!(progress_from_position(0.0, 200.0, 100), 100);
        assert_eq!(progress_from_position(-15.0, 200.0, 100), 100);
        assert_eq!(progress_from_position(200.0, 200.0, 100), 0);
        assert_eq!(progress_from_position(260.0, 200.0, 100), 0);
    }

    #[test]
    fn test_position_truncates_toward_zero() {
        // (200 - 101) / 200 = 0.495 -> 49.5 -> 49
        assert_eq!(progress_from_position(101.0, 200.0, 100), 49);
        assert_eq!(progress_from_position(100.0, 200.0, 100), 50);
        assert_eq!(progress_from_position(100.0, 200.0, 10), 5);
    }

    #[test]
    fn test_position_monotonic_bottom_to_top() {
        let height = 317.0;
        let max = 100;
        let mut last = progress_from_position(height, height, max);
        assert_eq!(last, 0);

        let mut y = height;
        while y >= 0.0 {
            let progress = progress_from_position(y, height, max);
            assert!(
                progress >= last,
                "progress decreased at y={}: {} < {}",
                y,
                progress,
                last
            );
            assert!(progress <= max);
            last = progress;
            y -= 0.5;
        }
        assert_eq!(progress_from_position(0.0, height, max), max);
    }

    #[test]
    fn test_zero_height_maps_to_zero() {
        assert_eq!(progress_from_position(0.0, 0.0, 100), 0);
        assert_eq!(progress_from_position(10.0, 0.0, 100), 0);
        assert_eq!(progress_from_position(-25.0, 0.0, 100), 0);
        assert_eq!(progress_from_position(-25.0, -4.0, 100), 0);
    }

    #[test]
    fn test_icon_tier_boundaries() {
        assert_eq!(IconTier::select(29, 90), IconTier::Low);
        assert_eq!(IconTier::select(30, 90), IconTier::Medium);
        assert_eq!(IconTier::select(59, 90), IconTier::Medium);
        assert_eq!(IconTier::select(60, 90), IconTier::High);
        assert_eq!(IconTier::select(90, 90), IconTier::High);
    }

    #[test]
    fn test_icon_tier_uses_integer_thirds() {
        // max / 3 == 3 and max * 2 / 3 == 6 for max = 10
        assert_eq!(IconTier::select(2, 10), IconTier::Low);
        assert_eq!(IconTier::select(3, 10), IconTier::Medium);
        assert_eq!(IconTier::select(5, 10), IconTier::Medium);
        assert_eq!(IconTier::select(6, 10), IconTier::High);
    }

    #[test]
    fn test_fill_ratio() {
        assert_eq!(fill_ratio(0, 100), 0.0);
        assert_eq!(fill_ratio(50, 100), 0.5);
        assert_eq!(fill_ratio(100, 100), 1.0);
        assert_eq!(fill_ratio(0, 0), 0.0);
        // Lowering max below progress is allowed and clamps the fill
        assert_eq!(fill_ratio(20, 10), 1.0);
    }

    #[test]
    fn test_dp_to_px_truncates() {
        assert_eq!(dp_to_px(36.0, 1.0), 36.0);
        assert_eq!(dp_to_px(36.0, 2.75), 99.0);
        assert_eq!(dp_to_px(10.0, 1.5), 15.0);
    }
}
