//! Main application state for the cellgrep GUI

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use tracing::debug;

use super::alerts::{Alert, AlertQueue};
use crate::domain::{parse_column_list, MatchRecord, SearchRequest};
use crate::search::{self, SearchError, SearchEvent};

/// Which columns a search covers, as chosen by the radio pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnMode {
    #[default]
    All,
    Specific,
}

/// Where the status line is in its lifecycle.
///
/// Warnings (empty term, no files) deliberately leave the phase unchanged;
/// only picking files or running a search moves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// Fresh app; nothing picked yet.
    #[default]
    Idle,
    /// The last pick selected at least one file.
    FilesSelected,
    /// The last pick was cancelled or empty.
    NoFiles,
    /// A search is in flight.
    Searching,
    /// The last search ran to completion.
    Completed,
}

/// Main application state
#[derive(Default)]
pub struct CellgrepApp {
    /// Workbooks chosen in the most recent picker interaction. Cancelling
    /// the picker overwrites this with empty.
    pub(crate) selected_files: Vec<PathBuf>,
    /// Contents of the search term field.
    pub(crate) term: String,
    /// "Case sensitive" toggle.
    pub(crate) case_sensitive: bool,
    /// "Whole word only" toggle.
    pub(crate) whole_word: bool,
    /// "All columns" / "Specific columns" radio pair.
    pub(crate) column_mode: ColumnMode,
    /// Comma-separated column list, consumed only in Specific mode.
    pub(crate) columns_input: String,
    /// Rows of the results table, in arrival order.
    pub(crate) results: Vec<MatchRecord>,
    /// Current status line state.
    pub(crate) phase: SearchPhase,
    /// Receiver for the in-flight search; `None` while idle.
    pub(crate) search_rx: Option<Receiver<SearchEvent>>,
    /// Queued warning/error dialogs.
    pub(crate) alerts: AlertQueue,
}

impl CellgrepApp {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a search is running; the Search button is inert then.
    pub(crate) fn searching(&self) -> bool {
        self.search_rx.is_some()
    }

    /// The single status line, one text per phase.
    pub(crate) fn status_message(&self) -> String {
        match self.phase {
            SearchPhase::Idle => String::new(),
            SearchPhase::FilesSelected => {
                format!("{} file(s) selected", self.selected_files.len())
            }
            SearchPhase::NoFiles => "No files selected".to_string(),
            SearchPhase::Searching => "Searching...".to_string(),
            SearchPhase::Completed => "Search completed".to_string(),
        }
    }

    /// Open the native picker. The result overwrites the previous selection
    /// even when the user cancels.
    pub(crate) fn pick_files(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("Excel files", &["xlsx", "xls"])
            .pick_files()
            .unwrap_or_default();

        debug!("Picker returned {} file(s)", picked.len());
        self.selected_files = picked;
        self.phase = if self.selected_files.is_empty() {
            SearchPhase::NoFiles
        } else {
            SearchPhase::FilesSelected
        };
    }

    /// Snapshot the form into an immutable request.
    pub(crate) fn build_request(&self) -> SearchRequest {
        let columns = match self.column_mode {
            ColumnMode::All => None,
            ColumnMode::Specific => Some(parse_column_list(&self.columns_input)),
        };

        SearchRequest {
            files: self.selected_files.clone(),
            term: self.term.clone(),
            case_sensitive: self.case_sensitive,
            whole_word: self.whole_word,
            columns,
        }
    }

    /// Validate and dispatch a search on a fresh channel.
    ///
    /// On a validation failure a warning dialog is queued and nothing else
    /// changes: prior results stay on screen and the phase keeps its value.
    pub(crate) fn start_search(&mut self) {
        if self.search_rx.is_some() {
            return;
        }

        let request = self.build_request();
        let (tx, rx) = mpsc::channel();

        match search::start_search(request, tx) {
            Ok(()) => {
                self.results.clear();
                self.phase = SearchPhase::Searching;
                self.search_rx = Some(rx);
            }
            Err(e) => {
                self.alerts.push(Alert::warning(warning_text(&e)));
            }
        }
    }
}

/// Dialog wording for each rejected-input case.
fn warning_text(error: &SearchError) -> String {
    match error {
        SearchError::MissingTerm => "Please enter a search term.".to_string(),
        SearchError::NoFiles => "No files selected.".to_string(),
        SearchError::Pattern(e) => e.to_string(),
    }
}
