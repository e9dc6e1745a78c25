use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between a deep link and a bundle on disk.
///
/// During a one-shot export any of these is fatal. During watch-mode ticks
/// they are reported and swallowed; the watcher keeps polling.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("not a valid note link: {0}")]
    InvalidLink(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("cannot open note database at {}: {source}", path.display())]
    StoreUnavailable {
        path: PathBuf,
        source: rusqlite::Error,
    },

    #[error("no note found with id {0}")]
    NotFound(String),

    #[error("note lookup failed: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("bundle write failed: {0}")]
    FileSystem(#[from] std::io::Error),
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        ExportError::FileSystem(e.into())
    }
}
