//! Shared test utilities: workbook fixtures and event collection

use std::path::{Path, PathBuf};
use std::sync::mpsc;

use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

use cellgrep::search::{start_search, SearchEvent};
use cellgrep::{MatchRecord, SearchRequest};

/// One sheet's worth of fixture data: name, header row, data rows.
pub struct SheetSpec<'a> {
    pub name: &'a str,
    pub headers: &'a [&'a str],
    pub rows: &'a [&'a [&'a str]],
}

/// Write a workbook with the given sheets into `dir` and return its path.
pub fn write_workbook(dir: &Path, file_name: &str, sheets: &[SheetSpec<'_>]) -> PathBuf {
    let mut workbook = Workbook::new();
    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(sheet.name)
            .expect("Failed to set sheet name");
        for (col, header) in sheet.headers.iter().enumerate() {
            worksheet
                .write(0, col as u16, *header)
                .expect("Failed to write header cell");
        }
        for (row, cells) in sheet.rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                worksheet
                    .write((row + 1) as u32, col as u16, *cell)
                    .expect("Failed to write data cell");
            }
        }
    }
    let path = dir.join(file_name);
    workbook.save(&path).expect("Failed to save workbook");
    path
}

/// A single-sheet workbook named "Sheet1".
pub fn write_simple_workbook(
    dir: &Path,
    file_name: &str,
    headers: &[&str],
    rows: &[&[&str]],
) -> PathBuf {
    write_workbook(
        dir,
        file_name,
        &[SheetSpec {
            name: "Sheet1",
            headers,
            rows,
        }],
    )
}

/// Create a temp dir for fixture workbooks.
pub fn fixture_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Everything a finished search produced, collected off the event channel.
pub struct SearchOutcome {
    /// All records across all files, in arrival order.
    pub records: Vec<MatchRecord>,
    /// (file, error message) per failed file.
    pub failures: Vec<(PathBuf, String)>,
    /// Whether the terminal `Completed` event arrived.
    pub completed: bool,
}

/// Run a search to completion and collect its events.
///
/// Panics if validation rejects the request; tests for that path call
/// `start_search` directly.
pub fn run_search(request: SearchRequest) -> SearchOutcome {
    let (tx, rx) = mpsc::channel();
    start_search(request, tx).expect("Request was rejected before dispatch");

    let mut outcome = SearchOutcome {
        records: Vec::new(),
        failures: Vec::new(),
        completed: false,
    };
    for event in rx {
        match event {
            SearchEvent::FileScanned { records, .. } => outcome.records.extend(records),
            SearchEvent::FileFailed { file, error } => outcome.failures.push((file, error)),
            SearchEvent::Completed => {
                outcome.completed = true;
                break;
            }
        }
    }
    outcome
}
