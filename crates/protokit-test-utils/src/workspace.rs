//! [`TestWorkspace`] builder for synchronizer and proto tooling tests.

use std::fs;
use std::path::Path;

use protokit_fs::NormalizedPath;
use tempfile::TempDir;

use crate::{PROTO_REL_PATH, RESPONSE_CODE_PROTO, STATUS_SWIFT, SWIFT_REL_PATH};

/// A temporary project directory.
///
/// # Example
///
/// ```rust,no_run
/// use protokit_test_utils::TestWorkspace;
///
/// let ws = TestWorkspace::with_status_fixtures();
/// assert!(ws.swift_path().exists());
/// ```
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    /// An empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("TestWorkspace::new: failed to create temp dir"),
        }
    }

    /// A workspace holding the sample proto and Swift files at their default paths.
    pub fn with_status_fixtures() -> Self {
        let ws = Self::new();
        ws.write(PROTO_REL_PATH, RESPONSE_CODE_PROTO);
        ws.write(SWIFT_REL_PATH, STATUS_SWIFT);
        ws
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn path(&self, rel: &str) -> NormalizedPath {
        NormalizedPath::new(self.root()).join(rel)
    }

    pub fn proto_path(&self) -> NormalizedPath {
        self.path(PROTO_REL_PATH)
    }

    pub fn swift_path(&self) -> NormalizedPath {
        self.path(SWIFT_REL_PATH)
    }

    /// Write `content` to `rel`, creating parent directories.
    pub fn write(&self, rel: &str, content: &str) {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("failed to create {}: {}", parent.display(), e));
        }
        fs::write(&path, content).unwrap_or_else(|e| panic!("failed to write {}: {}", path.display(), e));
    }

    pub fn read(&self, rel: &str) -> String {
        let path = self.root().join(rel);
        fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
    }

    pub fn read_swift(&self) -> String {
        self.read(SWIFT_REL_PATH)
    }

    pub fn assert_file_exists(&self, rel: &str) {
        assert!(self.root().join(rel).exists(), "expected {rel} to exist");
    }

    pub fn assert_file_missing(&self, rel: &str) {
        assert!(!self.root().join(rel).exists(), "expected {rel} to be absent");
    }
}
