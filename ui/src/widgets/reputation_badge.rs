use egui::{Color32, Frame, Margin, Response, RichText, Ui};
use sedir_business::format::{ReputationTier, compact_reputation};

use crate::utils::colors::tier_color;

/// Compact reputation (`1.5k`) on a pill colored by tier.
pub fn reputation_badge(ui: &mut Ui, reputation: i64) -> Response {
    Frame::new()
        .fill(tier_color(ReputationTier::of(reputation)))
        .corner_radius(8.0)
        .inner_margin(Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(
                RichText::new(compact_reputation(reputation))
                    .color(Color32::WHITE)
                    .strong(),
            )
        })
        .inner
}

#[cfg(test)]
mod tests {
    use egui_kittest::Harness;
    use kittest::Queryable;

    #[test]
    fn renders_compact_value() {
        let mut harness = Harness::new_ui(|ui| {
            super::reputation_badge(ui, 25_300);
        });
        harness.step();

        assert!(harness.query_by_label("25.3k").is_some(), "badge should read 25.3k");
    }
}
