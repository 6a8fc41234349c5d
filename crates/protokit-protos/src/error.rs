//! Error types for protokit-protos

use std::path::PathBuf;

/// Result type for protokit-protos operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] protokit_fs::Error),

    #[error("Invalid proto file: {file}")]
    InvalidProtoFile { file: String },

    #[error("No proto files to generate")]
    NothingToGenerate,

    #[error("Failed to run {program}: {source}")]
    ProtocSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// `protoc` ran but exited unsuccessfully; `stderr` holds its diagnostics.
    #[error("{program} exited with {status}")]
    ProtocFailed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },
}
