//! Format-agnostic configuration loading and saving

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, NormalizedPath, Result, io};

/// Format-agnostic configuration store.
///
/// Detects the format from the file extension:
/// - `.toml` -> TOML
/// - `.json` -> JSON
/// - `.yaml`, `.yml` -> YAML
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load a whole file as `T`.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let value = self.load_value(path)?;
        from_value(path, value)
    }

    /// Load one top-level table of a file as `T`.
    ///
    /// Lets several tools share a single `protokit.toml`, each reading its
    /// own `[section]`.
    pub fn load_section<T: DeserializeOwned>(
        &self,
        path: &NormalizedPath,
        section: &str,
    ) -> Result<T> {
        let mut value = self.load_value(path)?;
        let section_value = value
            .get_mut(section)
            .map(serde_json::Value::take)
            .ok_or_else(|| Error::MissingSection {
                path: path.to_native(),
                section: section.to_string(),
            })?;
        from_value(path, section_value)
    }

    /// Save configuration atomically, in the format named by the extension.
    pub fn save<T: Serialize>(&self, path: &NormalizedPath, value: &T) -> Result<()> {
        let extension = path.extension().unwrap_or("");
        let serialize_error = |format: &str, message: String| Error::ConfigParse {
            path: path.to_native(),
            format: format.into(),
            message,
        };

        let content = match extension.to_lowercase().as_str() {
            "toml" => toml::to_string_pretty(value).map_err(|e| serialize_error("TOML", e.to_string()))?,
            "json" => {
                serde_json::to_string_pretty(value).map_err(|e| serialize_error("JSON", e.to_string()))?
            }
            "yaml" | "yml" => {
                serde_yaml::to_string(value).map_err(|e| serialize_error("YAML", e.to_string()))?
            }
            _ => {
                return Err(Error::UnsupportedFormat {
                    extension: extension.to_string(),
                });
            }
        };

        io::write_atomic(path, content.as_bytes())
    }

    fn load_value(&self, path: &NormalizedPath) -> Result<serde_json::Value> {
        let content = io::read_text(path)?;
        let extension = path.extension().unwrap_or("");
        let parse_error = |format: &str, message: String| Error::ConfigParse {
            path: path.to_native(),
            format: format.into(),
            message,
        };

        match extension.to_lowercase().as_str() {
            "toml" => toml::from_str(&content).map_err(|e| parse_error("TOML", e.to_string())),
            "json" => serde_json::from_str(&content).map_err(|e| parse_error("JSON", e.to_string())),
            "yaml" | "yml" => {
                serde_yaml::from_str(&content).map_err(|e| parse_error("YAML", e.to_string()))
            }
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }
}

fn from_value<T: DeserializeOwned>(path: &NormalizedPath, value: serde_json::Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| Error::ConfigParse {
        path: path.to_native(),
        format: path.extension().unwrap_or("unknown").to_uppercase(),
        message: e.to_string(),
    })
}
