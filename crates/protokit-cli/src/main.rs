//! protokit CLI
//!
//! Maintenance commands for the Swift SDK's protobuf sources.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use commands::{Project, StatusArgs};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        // Only fails if a subscriber is already installed.
        let _ = tracing::subscriber::set_global_default(subscriber);
        tracing::debug!("Verbose mode enabled");
    }

    let Some(command) = cli.command else {
        println!("{} protobuf maintenance for the Swift SDK", "protokit".green().bold());
        println!();
        println!("Run {} for available commands.", "protokit --help".cyan());
        return Ok(());
    };

    let project = Project::open(&cli.root, cli.config.as_deref())?;
    execute_command(&project, command)
}

fn execute_command(project: &Project, command: Commands) -> Result<()> {
    match command {
        Commands::StatusCodes {
            dry_run,
            update_comments,
            proto,
            swift,
        } => commands::run_status_codes(
            project,
            &StatusArgs {
                dry_run,
                update_comments,
                proto,
                swift,
            },
        ),
        Commands::Fetch { skip_grpc, no_generate } => commands::run_fetch(project, skip_grpc, no_generate),
        Commands::RewriteImports { dir, skip } => commands::run_rewrite_imports(project, dir.as_deref(), &skip),
    }
}
