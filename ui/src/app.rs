use std::time::Duration;

use sedir_business::navigation::{self, Route};
use sedir_business::search;

use crate::{pages, state::State, widgets};

/// How often to poll for finished fetches while any are in flight.
const PENDING_REPAINT: Duration = Duration::from_millis(50);

pub struct DirectoryApp {
    state: State,
    loaded: bool,
}

impl DirectoryApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            loaded: false,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }
}

impl eframe::App for DirectoryApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply results from finished commands before rendering.
        self.state.ctx.sync();

        if !self.loaded {
            self.loaded = true;
            search::load_users(&mut self.state.ctx);
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.strong("StackExchange Users");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    widgets::version_label(ui);
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match navigation::current_route(&self.state.ctx) {
                Route::Search => pages::search_page(&mut self.state, ui),
                Route::Details => pages::details_page(&mut self.state, ui),
            };
        });

        if self.state.ctx.has_pending_tasks() {
            ctx.request_repaint_after(PENDING_REPAINT);
        }
    }
}
