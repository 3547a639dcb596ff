use egui::{Frame, Margin, RichText, Ui};

use crate::utils::colors::{COLOR_ERROR_FILL, COLOR_RED};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerAction {
    Retry,
    Dismiss,
}

/// Inline error with Retry and Dismiss buttons. Returns the button pressed
/// this frame, if any.
pub fn error_banner(ui: &mut Ui, message: &str) -> Option<BannerAction> {
    let mut action = None;
    Frame::new()
        .fill(COLOR_ERROR_FILL)
        .stroke((1.0, COLOR_RED))
        .corner_radius(6.0)
        .inner_margin(Margin::same(8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new(message).color(COLOR_RED));
            });
            ui.horizontal(|ui| {
                if ui.button("Retry").clicked() {
                    action = Some(BannerAction::Retry);
                }
                if ui.button("Dismiss").clicked() {
                    action = Some(BannerAction::Dismiss);
                }
            });
        });
    action
}
