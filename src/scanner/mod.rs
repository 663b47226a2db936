//! Workbook scanner: applies a compiled pattern to every cell of one file
//!
//! The first row of each sheet's used range is the header row; the cells
//! below a header are that column's data rows. Records come out in
//! sheet-then-column-then-row order, with display row numbers offset past
//! the header (first data row = row 2).

use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;
use tracing::debug;

use crate::domain::MatchRecord;
use crate::pattern::SearchPattern;

/// Error type for a single file scan. Never aborts the batch; the search
/// layer forwards it to the UI as a per-file failure.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Cannot open workbook: {0}")]
    Open(#[source] calamine::Error),

    #[error("Cannot read sheet '{sheet}': {source}")]
    Sheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },
}

/// Scans workbooks for cells matching one compiled pattern.
pub struct CellScanner {
    pattern: SearchPattern,
    /// Column restriction; `None` scans every declared column.
    columns: Option<Vec<String>>,
}

impl CellScanner {
    pub fn new(pattern: SearchPattern, columns: Option<Vec<String>>) -> Self {
        Self { pattern, columns }
    }

    /// Scan one workbook and return all of its matching cells.
    ///
    /// The format is auto-detected from the extension (`.xlsx`/`.xls`).
    /// Sheets are visited in declaration order.
    pub fn scan_file(&self, path: &Path) -> Result<Vec<MatchRecord>, ScanError> {
        let mut workbook = open_workbook_auto(path).map_err(ScanError::Open)?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let mut records = Vec::new();
        for sheet in workbook.sheet_names() {
            let range = workbook
                .worksheet_range(&sheet)
                .map_err(|e| ScanError::Sheet {
                    sheet: sheet.clone(),
                    source: e,
                })?;
            self.scan_sheet(&range, &file_name, &sheet, &mut records);
        }

        debug!("Scanned {}: {} match(es)", file_name, records.len());
        Ok(records)
    }

    /// Scan one sheet's range, column by column, appending matches to `out`.
    fn scan_sheet(&self, range: &Range<Data>, file: &str, sheet: &str, out: &mut Vec<MatchRecord>) {
        let Some(header_row) = range.rows().next() else {
            return; // sheet has no used range at all
        };

        let targets = select_columns(header_row, self.columns.as_deref());
        let data_rows = range.height().saturating_sub(1);

        for (col_idx, column) in &targets {
            for data_idx in 0..data_rows {
                let Some(cell) = range.get((data_idx + 1, *col_idx)) else {
                    continue;
                };
                let Some(text) = cell_text(cell) else {
                    continue;
                };
                if self.pattern.matches(&text) {
                    out.push(MatchRecord {
                        file: file.to_string(),
                        sheet: sheet.to_string(),
                        row: (data_idx + 2) as u32,
                        column: column.clone(),
                        value: text,
                    });
                }
            }
        }
    }
}

/// Resolve which columns to scan, as (position, header name) pairs.
///
/// Declared columns are the non-empty header cells. Without a filter, all of
/// them in sheet order; with one, the filter's names in the filter's own
/// order, silently skipping names the sheet does not declare.
fn select_columns(header: &[Data], filter: Option<&[String]>) -> Vec<(usize, String)> {
    let declared: Vec<(usize, String)> = header
        .iter()
        .enumerate()
        .filter_map(|(idx, cell)| cell_text(cell).map(|name| (idx, name)))
        .collect();

    match filter {
        None => declared,
        Some(names) => names
            .iter()
            .filter_map(|name| {
                declared
                    .iter()
                    .find(|(_, declared_name)| declared_name == name)
                    .map(|(idx, _)| (*idx, name.clone()))
            })
            .collect(),
    }
}

/// Text form of a cell, or `None` for an empty cell.
///
/// Dates stringify as their serial number; matching on formatted dates is
/// not offered.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(f.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTime(dt) => Some(dt.as_f64().to_string()),
        Data::DateTimeIso(s) => Some(s.clone()),
        Data::DurationIso(s) => Some(s.clone()),
        Data::Error(e) => Some(e.to_string()),
    }
}
