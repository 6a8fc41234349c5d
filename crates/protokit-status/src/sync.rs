//! Status code synchronization engine.

use protokit_fs::{NormalizedPath, io};
use similar::TextDiff;

use crate::config::SyncConfig;
use crate::diff::{CommentUpdate, find_comment_updates, find_missing};
use crate::error::{Error, Result};
use crate::existing::{parse_existing, parse_existing_details};
use crate::generate::SwiftGenerator;
use crate::proto::{ProtoStatusCode, parse_proto};
use crate::splice::{AnchorSet, AnchorWarning, replace_comments};

/// Options for a single run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOptions {
    /// Compute everything, write nothing.
    pub dry_run: bool,
    /// Also rewrite doc comments that drifted from the proto.
    pub update_comments: bool,
}

/// Everything one run would change, computed in memory.
#[derive(Debug, Clone)]
pub struct SyncPlan {
    pub proto_count: usize,
    pub existing_count: usize,
    /// Codes absent from `Status.swift`, ascending.
    pub missing: Vec<ProtoStatusCode>,
    /// Drifted doc comments; empty unless comment updates were requested.
    pub updates: Vec<CommentUpdate>,
    pub warnings: Vec<AnchorWarning>,
    pub original: String,
    pub updated: String,
}

impl SyncPlan {
    pub fn is_in_sync(&self) -> bool {
        self.missing.is_empty() && self.updates.is_empty()
    }

    pub fn has_changes(&self) -> bool {
        self.original != self.updated
    }

    /// Unified diff of the pending change.
    pub fn unified_diff(&self, file_name: &str) -> String {
        TextDiff::from_lines(&self.original, &self.updated)
            .unified_diff()
            .context_radius(2)
            .header(&format!("a/{file_name}"), &format!("b/{file_name}"))
            .to_string()
    }
}

/// Outcome of [`StatusSync::run`].
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub plan: SyncPlan,
    /// True when the Swift file was rewritten.
    pub written: bool,
}

/// Synchronizes `Status.swift` with `ResponseCodeEnum`.
#[derive(Debug, Clone)]
pub struct StatusSync {
    config: SyncConfig,
    anchors: AnchorSet,
}

impl StatusSync {
    /// Fails when an anchor pattern does not compile.
    pub fn new(config: SyncConfig) -> Result<Self> {
        let anchors = AnchorSet::compile(&config.anchors)?;
        Ok(Self { config, anchors })
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub fn generator(&self) -> SwiftGenerator<'_> {
        SwiftGenerator::new(&self.config.acronyms, &self.config.deprecated_marker)
    }

    /// Compute the updated Swift text without touching the filesystem.
    ///
    /// Comment updates are applied to the original text first, since their
    /// line numbers refer to it; the five insertions follow.
    pub fn plan(&self, proto_text: &str, swift_text: &str, update_comments: bool) -> Result<SyncPlan> {
        let proto_codes = parse_proto(proto_text, &self.config.enum_name)?;
        let existing = parse_existing(swift_text);
        let generator = self.generator();

        let missing = find_missing(&proto_codes, &existing);
        let updates = if update_comments {
            let details = parse_existing_details(swift_text, &self.config.deprecated_marker);
            find_comment_updates(&proto_codes, &existing, &details)
        } else {
            Vec::new()
        };

        let mut updated = swift_text.to_string();
        if !updates.is_empty() {
            tracing::debug!(count = updates.len(), "Updating drifted doc comments");
            updated = replace_comments(&updated, &updates, &generator);
        }

        let mut warnings = Vec::new();
        if !missing.is_empty() {
            let fragments = generator.fragments(&missing);
            let (inserted, anchor_warnings) = self.anchors.apply(&updated, &fragments);
            updated = inserted;
            warnings = anchor_warnings;
        }

        Ok(SyncPlan {
            proto_count: proto_codes.len(),
            existing_count: existing.len(),
            missing,
            updates,
            warnings,
            original: swift_text.to_string(),
            updated,
        })
    }

    /// Read both files, plan, and write the Swift file unless `dry_run`.
    pub fn run(
        &self,
        proto_path: &NormalizedPath,
        swift_path: &NormalizedPath,
        options: SyncOptions,
    ) -> Result<SyncReport> {
        require_file("Proto", proto_path)?;
        require_file("Swift", swift_path)?;

        tracing::debug!(path = %proto_path, "Reading proto file");
        let proto_text = io::read_text(proto_path)?;
        tracing::debug!(path = %swift_path, "Reading Swift file");
        let swift_text = io::read_text(swift_path)?;

        let plan = self.plan(&proto_text, &swift_text, options.update_comments)?;

        let written = if options.dry_run || !plan.has_changes() {
            false
        } else {
            io::write_with_backup(swift_path, &plan.updated)?;
            true
        };

        Ok(SyncReport { plan, written })
    }
}

fn require_file(kind: &'static str, path: &NormalizedPath) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::MissingInput {
            kind,
            path: path.to_native(),
        })
    }
}
