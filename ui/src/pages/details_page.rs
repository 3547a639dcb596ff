//! Profile of the user picked on the search page.

use egui::{Frame, Grid, Key, Margin, Response, RichText, Ui};
use sedir_business::format::{reputation_label, signed_delta, website_display, website_href};
use sedir_business::{User, UserDetailsState, navigation};

use crate::state::State;
use crate::utils::colors::{COLOR_BRONZE, COLOR_GOLD, COLOR_SILVER, delta_color};
use crate::widgets::avatar;

const DETAILS_AVATAR_SIZE: f32 = 96.0;

pub fn details_page(state: &mut State, ui: &mut Ui) -> Response {
    let user = state
        .ctx
        .state::<UserDetailsState>()
        .and_then(|details| details.user.clone());
    let mut back = ui.input(|i| i.key_pressed(Key::Escape));

    let response = ui
        .vertical(|ui| {
            if ui.button("< Back").clicked() {
                back = true;
            }
            ui.add_space(8.0);

            match &user {
                Some(user) => {
                    egui::ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui| profile(ui, user));
                }
                None => {
                    ui.label("No user selected");
                }
            }
        })
        .response;

    if back {
        navigation::back_to_search(&mut state.ctx);
    }
    response
}

fn profile(ui: &mut Ui, user: &User) {
    ui.vertical_centered(|ui| {
        avatar(ui, user, DETAILS_AVATAR_SIZE);
        ui.heading(&user.username);
        ui.label(reputation_label(user.reputation));
        if let Some(badges) = user.badge_counts {
            ui.horizontal(|ui| {
                badge(ui, COLOR_GOLD, "gold", badges.gold);
                badge(ui, COLOR_SILVER, "silver", badges.silver);
                badge(ui, COLOR_BRONZE, "bronze", badges.bronze);
            });
        }
    });
    ui.add_space(12.0);

    card(ui, "Information", |ui| {
        Grid::new("user_info").num_columns(2).spacing([16.0, 6.0]).show(ui, |ui| {
            info_row(ui, "Member since", user.creation_date.as_deref());
            info_row(ui, "Last seen", user.last_access_date.as_deref());
            info_row(ui, "Location", user.location.as_deref());
            if let Some(website) = user.website() {
                ui.weak("Website");
                ui.hyperlink_to(website_display(website), website_href(website));
                ui.end_row();
            }
        });
    });

    if !user.reputation_changes.is_empty() {
        ui.add_space(8.0);
        card(ui, "Reputation changes", |ui| {
            Grid::new("reputation_changes").num_columns(2).spacing([16.0, 6.0]).show(ui, |ui| {
                for (label, delta) in user.reputation_changes.entries() {
                    ui.weak(label);
                    ui.label(RichText::new(signed_delta(delta)).color(delta_color(delta)));
                    ui.end_row();
                }
            });
        });
    }
}

fn badge(ui: &mut Ui, color: egui::Color32, name: &str, count: u32) {
    ui.label(RichText::new("●").color(color))
        .on_hover_text(format!("{count} {name} badges"));
    ui.label(count.to_string());
}

fn info_row(ui: &mut Ui, label: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        ui.weak(label);
        ui.label(value);
        ui.end_row();
    }
}

fn card(ui: &mut Ui, title: &str, body: impl FnOnce(&mut Ui)) {
    Frame::group(ui.style())
        .inner_margin(Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.strong(title);
            ui.add_space(4.0);
            body(ui);
        });
}
