//! Events sent from the search dispatcher to the GUI

use std::path::PathBuf;

use crate::domain::MatchRecord;

/// Events crossing from scan workers back to the presentation thread.
///
/// One `FileScanned`/`FileFailed` arrives per requested file, in completion
/// order, followed by exactly one `Completed` after the join point.
#[derive(Debug, Clone)]
pub enum SearchEvent {
    /// A file finished scanning; carries every match found in it
    /// (possibly none).
    FileScanned {
        file: PathBuf,
        records: Vec<MatchRecord>,
    },
    /// A file could not be opened or parsed. The rest of the batch
    /// continues; this file contributes zero records.
    FileFailed { file: PathBuf, error: String },
    /// Every file in the request has been processed.
    Completed,
}
