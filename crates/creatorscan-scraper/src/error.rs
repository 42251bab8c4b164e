use thiserror::Error;

/// Errors that can occur while acquiring a profile snapshot.
///
/// Extraction itself never errors — every field degrades to its default —
/// so this is the only fallible surface of the crate.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("HTTP error fetching profile page: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// Failure reported by an external navigation collaborator (e.g. a
    /// headless-browser session). The message is surfaced verbatim in the
    /// degraded output row.
    #[error("{message}")]
    Navigation { message: String },
}
