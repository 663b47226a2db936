//! Search event polling
//!
//! The dispatcher thread owns the scans; this is the only place their
//! events touch app state, so the table and status stay single-threaded.

use std::sync::mpsc::TryRecvError;
use tracing::{debug, warn};

use super::alerts::Alert;
use super::app::{CellgrepApp, SearchPhase};
use crate::search::SearchEvent;

impl CellgrepApp {
    /// Drain pending search events without blocking the frame.
    ///
    /// Per-file batches append to the table in arrival order; failures queue
    /// an error dialog naming the file; `Completed` (or a dispatcher that
    /// went away) finishes the search.
    pub(crate) fn poll_search_events(&mut self) {
        let Some(rx) = self.search_rx.take() else {
            return;
        };

        let mut completed = false;
        loop {
            match rx.try_recv() {
                Ok(SearchEvent::FileScanned { file, records }) => {
                    debug!("{}: {} match(es)", file.display(), records.len());
                    self.results.extend(records);
                }
                Ok(SearchEvent::FileFailed { file, error }) => {
                    warn!("Failed to read {}: {}", file.display(), error);
                    self.alerts.push(Alert::error(format!(
                        "Error reading file {}: {}",
                        file.display(),
                        error
                    )));
                }
                Ok(SearchEvent::Completed) => {
                    completed = true;
                    break;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    completed = true;
                    break;
                }
            }
        }

        if completed {
            self.phase = SearchPhase::Completed;
        } else {
            self.search_rx = Some(rx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MatchRecord;
    use std::path::PathBuf;
    use std::sync::mpsc;

    fn app_with_channel() -> (CellgrepApp, mpsc::Sender<SearchEvent>) {
        let mut app = CellgrepApp::new();
        app.phase = SearchPhase::Searching;
        let (tx, rx) = mpsc::channel();
        app.search_rx = Some(rx);
        (app, tx)
    }

    #[test]
    fn test_records_append_in_arrival_order() {
        let (mut app, tx) = app_with_channel();

        tx.send(SearchEvent::FileScanned {
            file: PathBuf::from("b.xlsx"),
            records: vec![MatchRecord::new("b.xlsx", "S", 2, "A", "x")],
        })
        .unwrap();
        tx.send(SearchEvent::FileScanned {
            file: PathBuf::from("a.xlsx"),
            records: vec![MatchRecord::new("a.xlsx", "S", 3, "A", "y")],
        })
        .unwrap();

        app.poll_search_events();
        assert_eq!(app.results.len(), 2);
        assert_eq!(app.results[0].file, "b.xlsx");
        assert_eq!(app.results[1].file, "a.xlsx");
        assert!(app.search_rx.is_some(), "search is still running");
        assert_eq!(app.phase, SearchPhase::Searching);
    }

    #[test]
    fn test_file_failure_queues_error_dialog() {
        let (mut app, tx) = app_with_channel();

        tx.send(SearchEvent::FileFailed {
            file: PathBuf::from("/tmp/broken.xlsx"),
            error: "not a workbook".to_string(),
        })
        .unwrap();

        app.poll_search_events();
        assert!(app.results.is_empty());
        assert_eq!(app.alerts.len(), 1);
        assert!(app.search_rx.is_some(), "a failed file does not end the search");
    }

    #[test]
    fn test_completed_ends_the_search() {
        let (mut app, tx) = app_with_channel();

        tx.send(SearchEvent::Completed).unwrap();
        app.poll_search_events();

        assert_eq!(app.phase, SearchPhase::Completed);
        assert!(app.search_rx.is_none());
    }

    #[test]
    fn test_disconnected_dispatcher_ends_the_search() {
        let (mut app, tx) = app_with_channel();
        drop(tx);

        app.poll_search_events();
        assert_eq!(app.phase, SearchPhase::Completed);
        assert!(app.search_rx.is_none());
    }
}
