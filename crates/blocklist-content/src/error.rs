//! Error types for blocklist-content

/// Result type for blocklist-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading blocks
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed domains directive at line {line}: {message}")]
    Directive { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn directive(line: usize, message: impl Into<String>) -> Self {
        Self::Directive {
            line,
            message: message.into(),
        }
    }
}
