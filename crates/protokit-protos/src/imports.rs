//! Flattening of proto import paths.
//!
//! protoc is invoked with a single `--proto_path`, so `import
//! "services/basic_types.proto"` must become `import "basic_types.proto"`.
//! Imports mentioning `google` (well-known types) are left alone, as is
//! every file under a skipped directory.

use std::fs;
use std::sync::LazyLock;

use protokit_fs::{NormalizedPath, io};
use regex::Regex;

use crate::error::{Error, Result};

static IMPORT_PATH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s+"([^/"]+/)*([^"]+)""#).expect("Invalid import path regex")
});

/// Rewrite the import lines of one file. Returns `None` when nothing changes.
pub fn rewrite_import_lines(content: &str) -> Option<String> {
    let rewritten = content
        .split('\n')
        .map(|line| {
            if line.trim().starts_with("import") && !line.contains("google") {
                IMPORT_PATH_REGEX.replace(line, r#"import "$2""#).into_owned()
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    (rewritten != content).then_some(rewritten)
}

/// Rewrite every `.proto` file under `root`, skipping files inside any
/// directory named in `skip_dirs`. Returns the files that were changed.
pub fn rewrite_imports(root: &NormalizedPath, skip_dirs: &[String]) -> Result<Vec<NormalizedPath>> {
    if !root.is_dir() {
        return Err(Error::DirectoryNotFound { path: root.to_native() });
    }

    let mut files = Vec::new();
    collect_protos(root, &NormalizedPath::new(""), skip_dirs, &mut files)?;

    let mut updated = Vec::new();
    for path in files {
        tracing::debug!(path = %path, "Processing");
        let content = io::read_text(&path)?;
        if let Some(rewritten) = rewrite_import_lines(&content) {
            tracing::info!(path = %path, "Updating imports");
            io::write_text(&path, &rewritten)?;
            updated.push(path);
        }
    }

    Ok(updated)
}

/// Depth-first, name-ordered walk. `rel` is the path below the walk root,
/// which is what `skip_dirs` is matched against.
fn collect_protos(
    dir: &NormalizedPath,
    rel: &NormalizedPath,
    skip_dirs: &[String],
    out: &mut Vec<NormalizedPath>,
) -> Result<()> {
    let native = dir.to_native();
    let mut entries = fs::read_dir(&native)
        .map_err(|e| protokit_fs::Error::io(&native, e))?
        .filter_map(|entry| entry.ok())
        .collect::<Vec<_>>();
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = dir.join(&name);
        let rel_path = rel.join(&name);

        if path.is_dir() {
            if rel_path.has_component(skip_dirs) {
                tracing::debug!(dir = %rel_path, "Skipping directory");
                continue;
            }
            collect_protos(&path, &rel_path, skip_dirs, out)?;
        } else if path.extension() == Some("proto") {
            out.push(path);
        }
    }

    Ok(())
}
