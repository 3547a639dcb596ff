use egui::{Align2, Color32, FontId, Image, Response, Sense, Ui, Vec2};
use sedir_business::User;
use sedir_business::format::{ReputationTier, initial};

use crate::utils::colors::tier_color;

/// Round profile picture, or a colored circle with the user's initial when
/// the API did not return an image.
pub fn avatar(ui: &mut Ui, user: &User, size: f32) -> Response {
    match user.profile_image.as_deref().filter(|url| !url.trim().is_empty()) {
        Some(url) => ui.add(
            Image::new(url)
                .fit_to_exact_size(Vec2::splat(size))
                .corner_radius(size / 2.0),
        ),
        None => initial_avatar(ui, user, size),
    }
}

fn initial_avatar(ui: &mut Ui, user: &User, size: f32) -> Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.circle_filled(
            rect.center(),
            size / 2.0,
            tier_color(ReputationTier::of(user.reputation)),
        );
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            initial(&user.username),
            FontId::proportional(size * 0.45),
            Color32::WHITE,
        );
    }
    response
}
