//! The status-codes command

use std::path::PathBuf;

use colored::Colorize;

use protokit_status::{StatusSync, SyncConfig, SyncOptions, SyncReport};

use super::{Project, path_arg};
use crate::error::Result;

/// Arguments of `protokit status-codes`.
#[derive(Debug, Clone, Default)]
pub struct StatusArgs {
    pub dry_run: bool,
    pub update_comments: bool,
    pub proto: Option<PathBuf>,
    pub swift: Option<PathBuf>,
}

/// Synchronize the Swift status enum with the proto and print a summary.
pub fn run_status_codes(project: &Project, args: &StatusArgs) -> Result<()> {
    let mut config: SyncConfig = project.section("status")?;
    if let Some(proto) = &args.proto {
        config.proto_path = path_arg(proto);
    }
    if let Some(swift) = &args.swift {
        config.swift_path = path_arg(swift);
    }

    let proto_path = project.resolve(&config.proto_path);
    let swift_path = project.resolve(&config.swift_path);
    let swift_name = swift_path.file_name().unwrap_or("Status.swift").to_string();
    let proto_name = proto_path.file_name().unwrap_or("response_code.proto").to_string();

    println!(
        "{} Synchronizing {} with {}...",
        "=>".blue().bold(),
        swift_name.cyan(),
        proto_name.cyan()
    );
    if args.dry_run {
        println!("{}", "[DRY RUN MODE]".yellow().bold());
    }

    let sync = StatusSync::new(config)?;
    let report = sync.run(
        &proto_path,
        &swift_path,
        SyncOptions {
            dry_run: args.dry_run,
            update_comments: args.update_comments,
        },
    )?;

    print_report(&report, &swift_name, args.dry_run);
    Ok(())
}

fn print_report(report: &SyncReport, swift_name: &str, dry_run: bool) {
    let plan = &report.plan;
    println!("   Found {} status codes in proto", plan.proto_count);
    println!("   Found {} status codes in {}", plan.existing_count, swift_name);

    if plan.is_in_sync() {
        println!("{} {} is in sync. No changes needed.", "OK".green().bold(), swift_name);
        return;
    }

    if !plan.missing.is_empty() {
        println!();
        println!(
            "{} {} missing status codes:",
            "MISSING".yellow().bold(),
            plan.missing.len()
        );
        for code in &plan.missing {
            println!("   {} {} ({})", "-".yellow(), code.name.cyan(), code.code);
        }
    }

    if !plan.updates.is_empty() {
        println!();
        println!(
            "{} {} doc comments to update:",
            "DRIFTED".yellow().bold(),
            plan.updates.len()
        );
        for update in &plan.updates {
            println!(
                "   {} {} ({})",
                "~".yellow(),
                update.existing.identifier.cyan(),
                update.proto.code
            );
        }
    }

    for warning in &plan.warnings {
        println!("{} {}", "WARNING".yellow().bold(), warning);
    }

    println!();
    if dry_run {
        println!(
            "{} Would add {} and update {} in {}",
            "[DRY RUN]".yellow().bold(),
            count(plan.missing.len(), "status code"),
            count(plan.updates.len(), "doc comment"),
            swift_name
        );
        if plan.has_changes() {
            println!();
            print!("{}", plan.unified_diff(swift_name));
        }
    } else if report.written {
        println!(
            "{} Updated {}: added {}, updated {}",
            "OK".green().bold(),
            swift_name,
            count(plan.missing.len(), "status code"),
            count(plan.updates.len(), "doc comment")
        );
    } else {
        println!("{} {} was not modified", "WARNING".yellow().bold(), swift_name);
    }
}

fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}
