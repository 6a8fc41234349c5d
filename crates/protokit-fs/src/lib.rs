//! Filesystem layer for protokit
//!
//! Normalized paths, text I/O, atomic writes, the backup-and-restore writer
//! used when rewriting hand-maintained sources, and a format-agnostic config
//! store.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use io::BACKUP_SUFFIX;
pub use path::NormalizedPath;
