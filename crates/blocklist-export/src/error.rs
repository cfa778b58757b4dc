//! Error types for blocklist-export

use std::path::PathBuf;

/// Result type for blocklist-export operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while writing or compiling outputs
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output root {path} exists and is not a directory")]
    OutputRootConflict { path: PathBuf },

    #[error(transparent)]
    Content(#[from] blocklist_content::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
