//! Search form panel
//!
//! The top panel: term field, match options, column restriction, and the
//! Select Files / Search buttons.

use eframe::egui::{self, RichText};

use super::app::ColumnMode;
use super::theme::{ACCENT_CYAN, ACCENT_GREEN, BG_PRIMARY, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY};

/// Form state that can be modified by the panel UI
pub struct SearchFormState<'a> {
    pub term: &'a mut String,
    pub case_sensitive: &'a mut bool,
    pub whole_word: &'a mut bool,
    pub column_mode: &'a mut ColumnMode,
    pub columns_input: &'a mut String,
    /// Disables the Search button while a search is in flight.
    pub searching: bool,
}

/// Button actions triggered from the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    PickFiles,
    Search,
}

/// Render the top input panel; returns the button action clicked this
/// frame, if any.
pub fn render_search_form(
    ctx: &egui::Context,
    state: &mut SearchFormState<'_>,
) -> Option<FormAction> {
    let mut action = None;

    egui::TopBottomPanel::top("search_form")
        .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(10.0))
        .show(ctx, |ui| {
            ui.label(RichText::new("Search").strong().color(TEXT_PRIMARY));
            ui.horizontal(|ui| {
                ui.label(RichText::new("Search term:").color(TEXT_DIM));
                ui.add(egui::TextEdit::singleline(state.term).desired_width(280.0));
            });

            ui.add_space(6.0);
            ui.label(RichText::new("Options").strong().color(TEXT_PRIMARY));
            ui.horizontal(|ui| {
                ui.checkbox(state.case_sensitive, "Case sensitive");
                ui.add_space(12.0);
                ui.checkbox(state.whole_word, "Whole word only");
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new("Search in:").color(TEXT_DIM));
                ui.radio_value(state.column_mode, ColumnMode::All, "All columns");
                ui.radio_value(state.column_mode, ColumnMode::Specific, "Specific columns");
                let columns_field = egui::TextEdit::singleline(state.columns_input)
                    .hint_text("Name, Age")
                    .desired_width(180.0);
                ui.add_enabled(*state.column_mode == ColumnMode::Specific, columns_field);
                ui.label(RichText::new("(comma-separated)").small().color(TEXT_MUTED));
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui
                    .button(RichText::new("Select Files").color(ACCENT_CYAN))
                    .clicked()
                {
                    action = Some(FormAction::PickFiles);
                }
                ui.add_space(4.0);
                let search_button = egui::Button::new(RichText::new("Search").color(ACCENT_GREEN));
                if ui.add_enabled(!state.searching, search_button).clicked() {
                    action = Some(FormAction::Search);
                }
            });
            ui.add_space(4.0);
        });

    action
}
