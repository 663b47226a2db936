//! GUI runner - launches the cellgrep window

use anyhow::Result;
use eframe::egui;
use tracing::info;

use super::app::CellgrepApp;

/// Run the GUI application, blocking until the window closes.
pub fn run_gui() -> Result<()> {
    info!("[cellgrep] Starting GUI...");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([500.0, 400.0])
            .with_min_inner_size([400.0, 300.0])
            .with_decorations(true)
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "cellgrep - Excel Data Finder",
        options,
        Box::new(|_cc| Ok(Box::new(CellgrepApp::new()))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}
