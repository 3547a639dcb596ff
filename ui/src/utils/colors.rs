//! Shared color constants for the UI.

use egui::Color32;
use sedir_business::format::ReputationTier;

/// Forest green for reputation gains.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red for reputation losses and error banners.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

pub const COLOR_GOLD: Color32 = Color32::from_rgb(255, 204, 1);
pub const COLOR_SILVER: Color32 = Color32::from_rgb(180, 184, 188);
pub const COLOR_BRONZE: Color32 = Color32::from_rgb(209, 166, 132);
pub const COLOR_BLUE: Color32 = Color32::from_rgb(0, 116, 204);
pub const COLOR_GRAY: Color32 = Color32::from_rgb(132, 141, 149);

/// Background of the error banner.
pub const COLOR_ERROR_FILL: Color32 = Color32::from_rgb(253, 236, 238);

pub fn tier_color(tier: ReputationTier) -> Color32 {
    match tier {
        ReputationTier::Gold => COLOR_GOLD,
        ReputationTier::Green => COLOR_GREEN,
        ReputationTier::Blue => COLOR_BLUE,
        ReputationTier::Gray => COLOR_GRAY,
    }
}

pub fn delta_color(delta: i64) -> Color32 {
    if delta >= 0 { COLOR_GREEN } else { COLOR_RED }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_map_to_distinct_colors() {
        assert_eq!(tier_color(ReputationTier::of(150_000)), COLOR_GOLD);
        assert_eq!(tier_color(ReputationTier::of(15_000)), COLOR_GREEN);
        assert_eq!(tier_color(ReputationTier::of(1_500)), COLOR_BLUE);
        assert_eq!(tier_color(ReputationTier::of(15)), COLOR_GRAY);
    }

    #[test]
    fn zero_delta_counts_as_gain() {
        assert_eq!(delta_color(0), COLOR_GREEN);
        assert_eq!(delta_color(-1), COLOR_RED);
    }
}
