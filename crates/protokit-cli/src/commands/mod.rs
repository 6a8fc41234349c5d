//! Command implementations for protokit-cli

pub mod fetch;
pub mod imports;
pub mod status;

pub use fetch::run_fetch;
pub use imports::run_rewrite_imports;
pub use status::{StatusArgs, run_status_codes};

use std::path::Path;

use protokit_fs::{ConfigStore, NormalizedPath};
use serde::de::DeserializeOwned;

use crate::error::{CliError, Result};

/// Config file looked up in the project root when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "protokit.toml";

/// Project root plus the config file commands read their section from.
#[derive(Debug, Clone)]
pub struct Project {
    root: NormalizedPath,
    config: Option<NormalizedPath>,
}

impl Project {
    /// Resolve `root` and pick the config file.
    ///
    /// An explicit config path must exist. Without one, `protokit.toml` in
    /// the root is used when present, and built-in defaults otherwise.
    pub fn open(root: &Path, config: Option<&Path>) -> Result<Self> {
        if !root.is_dir() {
            return Err(CliError::user(format!(
                "Project root not found: {}",
                root.display()
            )));
        }
        let root = NormalizedPath::canonicalize(root)?;

        let config = match config {
            Some(path) => {
                if !path.is_file() {
                    return Err(CliError::user(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Some(NormalizedPath::new(path))
            }
            None => Some(root.join(DEFAULT_CONFIG_FILE)).filter(NormalizedPath::is_file),
        };

        if let Some(path) = &config {
            tracing::debug!(path = %path, "Using config file");
        }
        Ok(Self { root, config })
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Resolve a configured or user-supplied path against the root.
    pub fn resolve(&self, path: &str) -> NormalizedPath {
        self.root.join(path)
    }

    /// Load `[section]` from the config file, falling back to defaults when
    /// there is no config file or it has no such section.
    pub fn section<T: DeserializeOwned + Default>(&self, section: &str) -> Result<T> {
        let Some(path) = &self.config else {
            return Ok(T::default());
        };
        match ConfigStore::new().load_section(path, section) {
            Ok(value) => Ok(value),
            Err(protokit_fs::Error::MissingSection { .. }) => {
                tracing::debug!(section, "No config section, using defaults");
                Ok(T::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Render a path argument as a string for [`Project::resolve`].
pub(crate) fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
