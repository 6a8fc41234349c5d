//! Error types for protokit-fs

use std::path::PathBuf;

/// Result type for protokit-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in protokit-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Config section `{section}` not found in {path}")]
    MissingSection { path: PathBuf, section: String },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },

    /// The destination could not be overwritten. `restored` reports whether
    /// the original bytes were put back from the backup.
    #[error("Failed to write {path} (original restored: {restored}): {source}")]
    WriteFailed {
        path: PathBuf,
        restored: bool,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
