use egui::{Frame, Label, Margin, Response, RichText, Sense, Ui};
use sedir_business::User;

use super::{avatar, reputation_badge};

const ROW_AVATAR_SIZE: f32 = 36.0;

/// One list entry: avatar, name, location and reputation badge. The whole
/// row is clickable.
pub fn user_row(ui: &mut Ui, user: &User) -> Response {
    let inner = Frame::new()
        .inner_margin(Margin::symmetric(6, 4))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                avatar(ui, user, ROW_AVATAR_SIZE);
                let name = ui
                    .vertical(|ui| {
                        let name = ui.add(
                            Label::new(RichText::new(&user.username).strong())
                                .sense(Sense::click()),
                        );
                        if let Some(location) = user.location.as_deref() {
                            ui.weak(location);
                        }
                        name
                    })
                    .inner;
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    reputation_badge(ui, user.reputation);
                });
                name
            })
            .inner
        });

    let row = inner.response.interact(Sense::click());
    let name = inner.inner;
    if name.hovered() || row.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    row.union(name)
}
