//! Error types for protokit-status

use std::path::PathBuf;

/// Result type for protokit-status operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while synchronizing status codes
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] protokit_fs::Error),

    #[error("{kind} file not found: {path}")]
    MissingInput { kind: &'static str, path: PathBuf },

    #[error("Could not find enum {name} in proto file")]
    EnumNotFound { name: String },

    #[error("Invalid pattern for {section} anchor: {source}")]
    InvalidAnchorPattern {
        section: String,
        #[source]
        source: regex::Error,
    },
}
