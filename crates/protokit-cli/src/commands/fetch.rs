//! The fetch command: copy upstream protos, flatten imports, run protoc

use colored::Colorize;

use protokit_protos::{Codegen, Error as ProtosError, OrganizeReport, Protoc, ProtosConfig, organize, rewrite_imports};

use super::Project;
use crate::error::{CliError, Result};

/// Run the proto pipeline described by the `[protos]` config section.
///
/// Copy problems are reported and skipped. Generation runs for the files
/// that were copied; any protoc failure fails the command once both kinds
/// have been attempted.
pub fn run_fetch(project: &Project, skip_grpc: bool, no_generate: bool) -> Result<()> {
    let config: ProtosConfig = project.section("protos")?;
    if config.files.is_empty() {
        return Err(CliError::user(
            "No proto files configured. Add a `files` list to the [protos] section of protokit.toml.",
        ));
    }

    let source = project.resolve(&config.source_dir);
    let dest = project.resolve(&config.dest_dir);

    println!("{} Copying proto files from {}...", "=>".blue().bold(), source.as_str().cyan());
    let report = organize(&source, &dest, &config.files);
    print_organize(&report);

    if report.copied.is_empty() {
        return Err(CliError::user("No proto files were copied"));
    }

    println!("{} Rewriting imports...", "=>".blue().bold());
    let rewritten = rewrite_imports(&dest, &config.skip_dirs)?;
    println!("   Updated {} files", rewritten.len());

    if no_generate {
        return Ok(());
    }

    let protoc = Protoc::from_config(&config, project.root());
    let mut kinds = vec![Codegen::Messages];
    if !skip_grpc {
        kinds.push(Codegen::Services);
    }

    let mut failures = 0;
    for kind in kinds {
        println!("{} Generating {}...", "=>".blue().bold(), kind);
        match protoc.generate(kind, &report.copied) {
            Ok(_) => println!(
                "{} Generated {} into {}",
                "OK".green().bold(),
                kind,
                protoc.output_dir().as_str().cyan()
            ),
            Err(ProtosError::ProtocFailed { status, stderr, .. }) => {
                failures += 1;
                println!("{} protoc exited with {}", "FAILED".red().bold(), status);
                for line in stderr.lines() {
                    println!("   {}", line.dimmed());
                }
            }
            Err(e) => return Err(e.into()),
        }
    }

    if failures > 0 {
        return Err(CliError::user(format!("{failures} protoc run(s) failed")));
    }
    Ok(())
}

fn print_organize(report: &OrganizeReport) {
    println!("   Copied {} files", report.copied.len());
    if !report.not_found.is_empty() {
        println!("{} {} files not found:", "MISSING".yellow().bold(), report.not_found.len());
        for file in &report.not_found {
            println!("   {} {}", "-".yellow(), file.cyan());
        }
    }
    for (file, error) in &report.failed {
        println!("{} {}: {}", "FAILED".red().bold(), file.cyan(), error);
    }
}
