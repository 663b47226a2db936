//! Search dispatcher
//!
//! Validates a request, compiles its pattern, then fans one scan task per
//! file onto the rayon pool from a detached coordinator thread. Each file's
//! outcome is sent over the channel as it finishes; `Completed` follows the
//! join point, so it is always the last event.

mod event;

use rayon::prelude::*;
use std::sync::mpsc::Sender;
use std::thread;
use tracing::{info, warn};

use crate::domain::SearchRequest;
use crate::pattern::{PatternError, SearchPattern};
use crate::scanner::CellScanner;

pub use event::SearchEvent;

/// Error type for request validation. Raised before any task is dispatched;
/// per-file failures travel as [`SearchEvent::FileFailed`] instead.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("No search term provided")]
    MissingTerm,

    #[error("No files selected")]
    NoFiles,

    #[error(transparent)]
    Pattern(#[from] PatternError),
}

/// Validate `request` and start its scans in the background.
///
/// Fails fast, dispatching nothing, when the term is missing, no files are
/// selected, or the pattern does not compile. On success the caller's
/// receiver sees one event per file and then `Completed`; a failing file
/// never cancels its siblings. Send errors are ignored so a dropped
/// receiver just lets the remaining scans finish quietly.
pub fn start_search(request: SearchRequest, tx: Sender<SearchEvent>) -> Result<(), SearchError> {
    if request.term.is_empty() {
        return Err(SearchError::MissingTerm);
    }
    if request.files.is_empty() {
        return Err(SearchError::NoFiles);
    }

    let pattern = SearchPattern::compile(&request.term, request.case_sensitive, request.whole_word)?;
    let scanner = CellScanner::new(pattern, request.columns.clone());

    info!(
        "Searching {} file(s) for {:?} (case_sensitive={}, whole_word={})",
        request.files.len(),
        request.term,
        request.case_sensitive,
        request.whole_word
    );

    thread::spawn(move || {
        request.files.par_iter().for_each_with(tx.clone(), |tx, path| {
            let event = match scanner.scan_file(path) {
                Ok(records) => SearchEvent::FileScanned {
                    file: path.clone(),
                    records,
                },
                Err(e) => {
                    warn!("Scan failed for {}: {}", path.display(), e);
                    SearchEvent::FileFailed {
                        file: path.clone(),
                        error: e.to_string(),
                    }
                }
            };
            let _ = tx.send(event);
        });

        let _ = tx.send(SearchEvent::Completed);
    });

    Ok(())
}
