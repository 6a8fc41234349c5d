//! The rewrite-imports command

use std::path::Path;

use colored::Colorize;

use protokit_protos::{ProtosConfig, rewrite_imports};

use super::{Project, path_arg};
use crate::error::Result;

/// Flatten imports under `dir`, or the configured proto tree.
///
/// `skip` replaces the configured skip list when non-empty.
pub fn run_rewrite_imports(project: &Project, dir: Option<&Path>, skip: &[String]) -> Result<()> {
    let config: ProtosConfig = project.section("protos")?;
    let root = match dir {
        Some(dir) => project.resolve(&path_arg(dir)),
        None => project.resolve(&config.dest_dir),
    };
    let skip_dirs = if skip.is_empty() { config.skip_dirs } else { skip.to_vec() };

    println!("{} Rewriting imports under {}...", "=>".blue().bold(), root.as_str().cyan());
    if !skip_dirs.is_empty() {
        println!("   Skipping: {}", skip_dirs.join(", ").dimmed());
    }

    let updated = rewrite_imports(&root, &skip_dirs)?;

    if updated.is_empty() {
        println!("{} All imports already flat.", "OK".green().bold());
        return Ok(());
    }
    for path in &updated {
        println!("   {} {}", "~".green(), path.as_str().cyan());
    }
    println!("{} Updated {} files", "OK".green().bold(), updated.len());
    Ok(())
}
