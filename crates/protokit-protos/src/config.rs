//! Configuration for the proto tree commands (`[protos]` in `protokit.toml`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtosConfig {
    /// Upstream proto root the file list is relative to.
    pub source_dir: String,
    /// Local proto tree, also passed to protoc as `--proto_path`.
    pub dest_dir: String,
    /// Where protoc writes generated Swift.
    pub output_dir: String,
    /// protoc executable.
    pub protoc: String,
    /// Proto files to copy and generate, relative to `source_dir`.
    pub files: Vec<String>,
    /// Directory names whose files keep their import paths.
    pub skip_dirs: Vec<String>,
}

impl Default for ProtosConfig {
    fn default() -> Self {
        Self {
            source_dir: "../../protobufs/hapi/hedera-protobuf-java-api/src/main/proto".to_string(),
            dest_dir: "Protos".to_string(),
            output_dir: "Generated".to_string(),
            protoc: "protoc".to_string(),
            files: Vec::new(),
            skip_dirs: vec!["sdk".to_string(), "mirror".to_string()],
        }
    }
}
