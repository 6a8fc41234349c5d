//! Copying proto files from an upstream checkout into the local tree.

use std::collections::HashSet;

use protokit_fs::{NormalizedPath, io};

/// What [`organize`] did with each requested file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizeReport {
    /// Relative paths copied, in request order.
    pub copied: Vec<String>,
    /// Relative paths with no source file.
    pub not_found: Vec<String>,
    /// Relative paths whose copy failed, with the error message.
    pub failed: Vec<(String, String)>,
}

/// Copy each relative path in `files` from `source_base` to `dest_base`.
///
/// Missing sources and failed copies are recorded in the report rather than
/// aborting the batch. Duplicate entries are copied once.
pub fn organize(source_base: &NormalizedPath, dest_base: &NormalizedPath, files: &[String]) -> OrganizeReport {
    let mut report = OrganizeReport::default();
    let mut seen = HashSet::new();

    for file in files {
        if !seen.insert(file.as_str()) {
            continue;
        }

        let source = source_base.join(file);
        let dest = dest_base.join(file);

        if !source.is_file() {
            tracing::warn!(source = %source, "Source file not found");
            report.not_found.push(file.clone());
            continue;
        }

        match io::copy_file(&source, &dest) {
            Ok(_) => {
                tracing::debug!(file = %file, "Copied");
                report.copied.push(file.clone());
            }
            Err(e) => {
                tracing::warn!(file = %file, error = %e, "Copy failed");
                report.failed.push((file.clone(), e.to_string()));
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn duplicates_are_copied_once() {
        let temp = TempDir::new().unwrap();
        let source = NormalizedPath::new(temp.path().join("upstream"));
        fs::create_dir_all(source.join("block/stream").to_native()).unwrap();
        fs::write(source.join("block/stream/proof.proto").to_native(), "syntax = \"proto3\";").unwrap();

        let files = vec!["block/stream/proof.proto".to_string(), "block/stream/proof.proto".to_string()];
        let report = organize(&source, &NormalizedPath::new(temp.path().join("Protos")), &files);

        assert_eq!(report.copied, vec!["block/stream/proof.proto".to_string()]);
        assert!(report.not_found.is_empty());
    }
}
