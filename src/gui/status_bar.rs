//! Status bar component for the GUI
//!
//! Renders the bottom bar: the current status text on the left, the match
//! count on the right once results exist.

use eframe::egui::{self, RichText};

use super::app::SearchPhase;
use super::theme::{ACCENT_CYAN, BG_SECONDARY, STATUS_DONE, STATUS_RUNNING, TEXT_MUTED};

/// Render the bottom status bar.
pub fn render_status_bar(ctx: &egui::Context, phase: SearchPhase, status: &str, matches: usize) {
    egui::TopBottomPanel::bottom("status_bar")
        .frame(egui::Frame::NONE.fill(BG_SECONDARY).inner_margin(4.0))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let color = match phase {
                    SearchPhase::Idle | SearchPhase::NoFiles => TEXT_MUTED,
                    SearchPhase::FilesSelected => ACCENT_CYAN,
                    SearchPhase::Searching => STATUS_RUNNING,
                    SearchPhase::Completed => STATUS_DONE,
                };
                ui.label(RichText::new(status).small().monospace().color(color));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if phase == SearchPhase::Searching || phase == SearchPhase::Completed {
                        ui.label(
                            RichText::new(format!("{} match(es)", matches))
                                .small()
                                .monospace()
                                .color(TEXT_MUTED),
                        );
                    }
                });
            });
        });
}
