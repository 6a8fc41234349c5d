//! protoc invocation for Swift bindings.

use std::process::{Command, Output};

use protokit_fs::NormalizedPath;

use crate::config::ProtosConfig;
use crate::error::{Error, Result};

/// Which bindings to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codegen {
    /// Message types via `protoc-gen-swift`.
    Messages,
    /// gRPC service stubs via `protoc-gen-grpc-swift`.
    Services,
}

impl Codegen {
    fn plugin_args(&self, output_dir: &NormalizedPath) -> Vec<String> {
        match self {
            Self::Messages => vec![
                "--swift_opt=Visibility=Public".to_string(),
                "--swift_opt=FileNaming=FullPath".to_string(),
                format!("--swift_out={output_dir}"),
            ],
            Self::Services => vec![
                "--grpc-swift_opt=Visibility=Public".to_string(),
                format!("--grpc-swift_out={output_dir}"),
            ],
        }
    }
}

impl std::fmt::Display for Codegen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Messages => f.write_str("Swift protobuf"),
            Self::Services => f.write_str("gRPC"),
        }
    }
}

/// A configured protoc executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Protoc {
    program: String,
    proto_path: NormalizedPath,
    output_dir: NormalizedPath,
}

impl Protoc {
    pub fn new(program: impl Into<String>, proto_path: NormalizedPath, output_dir: NormalizedPath) -> Self {
        Self {
            program: program.into(),
            proto_path,
            output_dir,
        }
    }

    /// Build from config, resolving directories against `root`.
    pub fn from_config(config: &ProtosConfig, root: &NormalizedPath) -> Self {
        Self::new(
            config.protoc.clone(),
            root.join(&config.dest_dir),
            root.join(&config.output_dir),
        )
    }

    pub fn output_dir(&self) -> &NormalizedPath {
        &self.output_dir
    }

    /// The full argument list, without running anything.
    pub fn args(&self, kind: Codegen, files: &[String]) -> Result<Vec<String>> {
        if files.is_empty() {
            return Err(Error::NothingToGenerate);
        }
        if let Some(bad) = files.iter().find(|f| !f.ends_with(".proto")) {
            return Err(Error::InvalidProtoFile { file: bad.clone() });
        }

        let mut args = kind.plugin_args(&self.output_dir);
        args.push(format!("--proto_path={}", self.proto_path));
        args.extend(files.iter().cloned());
        Ok(args)
    }

    /// Run protoc, creating the output directory first.
    ///
    /// A non-zero exit becomes [`Error::ProtocFailed`] carrying protoc's stderr.
    pub fn generate(&self, kind: Codegen, files: &[String]) -> Result<Output> {
        let args = self.args(kind, files)?;
        let out = self.output_dir.to_native();
        std::fs::create_dir_all(&out).map_err(|e| protokit_fs::Error::io(&out, e))?;

        tracing::info!(%kind, count = files.len(), "Generating code");
        for file in files {
            tracing::debug!(file = %file, "Input");
        }

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|source| Error::ProtocSpawn {
                program: self.program.clone(),
                source,
            })?;

        if output.status.success() {
            Ok(output)
        } else {
            Err(Error::ProtocFailed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn protoc() -> Protoc {
        Protoc::new("protoc", NormalizedPath::new("./Protos"), NormalizedPath::new("./Generated"))
    }

    #[test]
    fn message_args() {
        let args = protoc()
            .args(Codegen::Messages, &["services/query.proto".to_string()])
            .unwrap();
        assert_eq!(
            args,
            vec![
                "--swift_opt=Visibility=Public",
                "--swift_opt=FileNaming=FullPath",
                "--swift_out=./Generated",
                "--proto_path=./Protos",
                "services/query.proto",
            ]
        );
    }

    #[test]
    fn service_args() {
        let args = protoc()
            .args(Codegen::Services, &["services/crypto_service.proto".to_string()])
            .unwrap();
        assert_eq!(
            args,
            vec![
                "--grpc-swift_opt=Visibility=Public",
                "--grpc-swift_out=./Generated",
                "--proto_path=./Protos",
                "services/crypto_service.proto",
            ]
        );
    }

    #[test]
    fn non_proto_inputs_are_rejected() {
        let result = protoc().args(Codegen::Messages, &["README.md".to_string()]);
        assert!(matches!(result, Err(Error::InvalidProtoFile { .. })));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            protoc().args(Codegen::Messages, &[]),
            Err(Error::NothingToGenerate)
        ));
    }
}
