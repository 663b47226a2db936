//! eframe::App implementation for CellgrepApp
//!
//! Contains the main update loop that runs every frame.

use eframe::egui;

use super::alerts::render_alerts;
use super::app::CellgrepApp;
use super::results_table::render_results_table;
use super::search_panel::{render_search_form, FormAction, SearchFormState};
use super::status_bar::render_status_bar;

impl eframe::App for CellgrepApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply any scan events that arrived since the last frame.
        self.poll_search_events();

        // Bottom status bar first so the central panel accounts for its
        // height.
        render_status_bar(ctx, self.phase, &self.status_message(), self.results.len());

        let searching = self.searching();
        let action = render_search_form(
            ctx,
            &mut SearchFormState {
                term: &mut self.term,
                case_sensitive: &mut self.case_sensitive,
                whole_word: &mut self.whole_word,
                column_mode: &mut self.column_mode,
                columns_input: &mut self.columns_input,
                searching,
            },
        );

        render_results_table(ctx, &self.results);
        render_alerts(ctx, &mut self.alerts);

        match action {
            Some(FormAction::PickFiles) => self.pick_files(),
            Some(FormAction::Search) => self.start_search(),
            None => {}
        }

        // While scans run, events arrive without user input; keep polling.
        if self.searching() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
