//! User list with a search bar.

use egui::{Key, Response, ScrollArea, TextEdit, Ui};
use sedir_business::search::{dismiss_error, retry, set_query, submit_search};
use sedir_business::{SearchState, User, navigation};

use crate::state::State;
use crate::widgets::{BannerAction, error_banner, user_row};

/// Things the user did this frame, applied after rendering so the UI only
/// borrows the context once.
enum SearchAction {
    Query(String),
    Submit,
    Banner(BannerAction),
    Open(User),
}

pub fn search_page(state: &mut State, ui: &mut Ui) -> Response {
    let search = state
        .ctx
        .state::<SearchState>()
        .cloned()
        .unwrap_or_default();
    let mut actions = Vec::new();

    let response = ui
        .vertical(|ui| {
            search_bar(ui, &search.query, &mut actions);
            ui.add_space(8.0);

            if let Some(message) = search.error_message.as_deref()
                && let Some(action) = error_banner(ui, message)
            {
                actions.push(SearchAction::Banner(action));
            }

            if search.is_loading {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading users...");
                });
            } else if search.users.is_empty() && search.error_message.is_none() {
                ui.label("No users found");
            }

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for user in &search.users {
                        if user_row(ui, user).clicked() {
                            actions.push(SearchAction::Open(user.clone()));
                        }
                        ui.separator();
                    }
                });
        })
        .response;

    for action in actions {
        match action {
            SearchAction::Query(query) => set_query(&mut state.ctx, query),
            SearchAction::Submit => {
                submit_search(&mut state.ctx);
            }
            SearchAction::Banner(BannerAction::Retry) => {
                retry(&mut state.ctx);
            }
            SearchAction::Banner(BannerAction::Dismiss) => dismiss_error(&mut state.ctx),
            SearchAction::Open(user) => navigation::open_details(&mut state.ctx, user),
        }
    }

    response
}

fn search_bar(ui: &mut Ui, current: &str, actions: &mut Vec<SearchAction>) {
    let mut query = current.to_owned();
    ui.horizontal(|ui| {
        let edit = ui.add(
            TextEdit::singleline(&mut query)
                .hint_text("Search users...")
                .desired_width(ui.available_width() - 80.0),
        );
        if edit.changed() {
            actions.push(SearchAction::Query(query.clone()));
        }
        let entered = edit.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
        if ui.button("Search").clicked() || entered {
            actions.push(SearchAction::Submit);
        }
    });
}
