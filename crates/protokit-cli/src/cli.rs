//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// protokit - proto maintenance for the Hiero Swift SDK
#[derive(Parser, Debug)]
#[command(name = "protokit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Show step-by-step progress
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root that configured paths are relative to
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Config file (defaults to protokit.toml in the root, when present)
    #[arg(long, global = true, env = "PROTOKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Synchronize Status.swift with response_code.proto
    ///
    /// Adds every status code missing from Status.swift at its five
    /// insertion points.
    ///
    /// Examples:
    ///   protokit status-codes --dry-run
    ///   protokit status-codes --update-comments
    StatusCodes {
        /// Preview changes without modifying files
        #[arg(long)]
        dry_run: bool,

        /// Also rewrite doc comments that drifted from the proto
        #[arg(long)]
        update_comments: bool,

        /// Override the proto file path
        #[arg(long)]
        proto: Option<PathBuf>,

        /// Override the Swift file path
        #[arg(long)]
        swift: Option<PathBuf>,
    },

    /// Copy the configured proto files from upstream and run protoc
    Fetch {
        /// Only generate message bindings
        #[arg(long)]
        skip_grpc: bool,

        /// Copy files without running protoc
        #[arg(long)]
        no_generate: bool,
    },

    /// Strip directory prefixes from proto import statements
    RewriteImports {
        /// Proto tree to rewrite (defaults to the configured proto directory)
        dir: Option<PathBuf>,

        /// Directory names to leave untouched (repeatable)
        #[arg(long = "skip")]
        skip: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_no_args() {
        let cli = Cli::parse_from(["protokit"]);
        assert!(!cli.verbose);
        assert!(cli.command.is_none());
        assert_eq!(cli.root, PathBuf::from("."));
    }

    #[test]
    fn parse_status_codes_defaults() {
        let cli = Cli::parse_from(["protokit", "status-codes"]);
        assert_eq!(
            cli.command,
            Some(Commands::StatusCodes {
                dry_run: false,
                update_comments: false,
                proto: None,
                swift: None,
            })
        );
    }

    #[test]
    fn parse_status_codes_flags() {
        let cli = Cli::parse_from([
            "protokit",
            "status-codes",
            "--dry-run",
            "--update-comments",
            "-v",
            "--swift",
            "Status.swift",
        ]);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Some(Commands::StatusCodes { dry_run: true, update_comments: true, swift: Some(ref s), .. })
                if s == &PathBuf::from("Status.swift")
        ));
    }

    #[test]
    fn parse_rewrite_imports_with_skips() {
        let cli = Cli::parse_from(["protokit", "rewrite-imports", "Protos", "--skip", "sdk", "--skip", "mirror"]);
        assert_eq!(
            cli.command,
            Some(Commands::RewriteImports {
                dir: Some(PathBuf::from("Protos")),
                skip: vec!["sdk".to_string(), "mirror".to_string()],
            })
        );
    }

    #[test]
    fn parse_fetch() {
        let cli = Cli::parse_from(["protokit", "--root", "Sources/HieroProtobufs", "fetch", "--skip-grpc"]);
        assert_eq!(cli.root, PathBuf::from("Sources/HieroProtobufs"));
        assert_eq!(
            cli.command,
            Some(Commands::Fetch {
                skip_grpc: true,
                no_generate: false
            })
        );
    }
}
