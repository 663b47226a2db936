//! Results table panel
//!
//! Central panel showing one row per matching cell, columns fixed to
//! [File, Sheet, Row, Column, Value], in arrival order.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use super::theme::{BG_PRIMARY, TEXT_DIM, TEXT_PRIMARY};
use crate::domain::MatchRecord;

/// Render the central match table.
pub fn render_results_table(ctx: &egui::Context, records: &[MatchRecord]) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(10.0))
        .show(ctx, |ui| {
            let row_height = egui::TextStyle::Body.resolve(ui.style()).size + 6.0;

            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::auto().at_least(100.0)) // File
                .column(Column::auto().at_least(70.0)) // Sheet
                .column(Column::auto().at_least(44.0)) // Row
                .column(Column::auto().at_least(70.0)) // Column
                .column(Column::remainder().clip(true)) // Value
                .header(20.0, |mut header| {
                    for title in ["File", "Sheet", "Row", "Column", "Value"] {
                        header.col(|ui| {
                            ui.label(RichText::new(title).strong().color(TEXT_PRIMARY));
                        });
                    }
                })
                .body(|body| {
                    body.rows(row_height, records.len(), |mut row| {
                        let record = &records[row.index()];
                        row.col(|ui| {
                            ui.label(RichText::new(&record.file).color(TEXT_DIM));
                        });
                        row.col(|ui| {
                            ui.label(RichText::new(&record.sheet).color(TEXT_DIM));
                        });
                        row.col(|ui| {
                            ui.label(RichText::new(record.row.to_string()).color(TEXT_DIM));
                        });
                        row.col(|ui| {
                            ui.label(RichText::new(&record.column).color(TEXT_DIM));
                        });
                        row.col(|ui| {
                            ui.label(
                                RichText::new(&record.value)
                                    .monospace()
                                    .color(TEXT_PRIMARY),
                            );
                        });
                    });
                });
        });
}
