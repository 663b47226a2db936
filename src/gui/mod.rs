//! GUI module for the cellgrep application
//!
//! An eframe desktop window: a search form on top, the match table in the
//! middle, and a one-line status bar at the bottom. Scan results arrive
//! over a channel and are applied to app state once per frame.

pub mod alerts;
pub mod app;
pub mod app_eframe;
pub mod app_update;
pub mod results_table;
pub mod runner;
pub mod search_panel;
pub mod status_bar;
pub mod theme;

pub use app::CellgrepApp;
pub use runner::run_gui;
