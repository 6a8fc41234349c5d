//! Splicing generated text into `Status.swift`.
//!
//! Insertions go in front of a marker or pattern anchor. A missing anchor is
//! not fatal: the section is left unchanged and an [`AnchorWarning`] is
//! returned so the remaining sections still apply.

use regex::Regex;

use crate::config::{Anchor, Anchors, Section};
use crate::diff::CommentUpdate;
use crate::error::{Error, Result};
use crate::generate::{Fragments, SwiftGenerator};

/// An anchor that could not be found in the target text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorWarning {
    pub section: Section,
}

impl std::fmt::Display for AnchorWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Could not find insertion point for {}", self.section)
    }
}

/// An [`Anchor`] with its pattern compiled.
#[derive(Debug, Clone)]
pub enum CompiledAnchor {
    Marker(String),
    Pattern(Regex),
}

impl CompiledAnchor {
    pub fn compile(section: Section, anchor: &Anchor) -> Result<Self> {
        match anchor {
            Anchor::Marker { text } => Ok(Self::Marker(text.clone())),
            Anchor::Pattern { regex } => Regex::new(regex)
                .map(Self::Pattern)
                .map_err(|source| Error::InvalidAnchorPattern {
                    section: section.to_string(),
                    source,
                }),
        }
    }

    /// Byte offset where new content should be inserted.
    fn position(&self, content: &str) -> Option<usize> {
        match self {
            Self::Marker(text) => content.find(text.as_str()),
            Self::Pattern(re) => re
                .captures(content)
                .and_then(|caps| caps.get(1).or_else(|| caps.get(0)))
                .map(|m| m.start()),
        }
    }
}

/// The five compiled anchors, in application order.
#[derive(Debug, Clone)]
pub struct AnchorSet {
    anchors: Vec<(Section, CompiledAnchor)>,
}

impl AnchorSet {
    pub fn compile(anchors: &Anchors) -> Result<Self> {
        let anchors = Section::ALL
            .into_iter()
            .map(|section| {
                CompiledAnchor::compile(section, anchors.get(section)).map(|anchor| (section, anchor))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { anchors })
    }

    /// Insert every fragment at its anchor.
    pub fn apply(&self, content: &str, fragments: &Fragments) -> (String, Vec<AnchorWarning>) {
        let mut content = content.to_string();
        let mut warnings = Vec::new();

        for (section, anchor) in &self.anchors {
            tracing::debug!(%section, "Adding generated entries");
            match insert_at(&content, anchor, fragments.get(*section)) {
                Some(updated) => content = updated,
                None => {
                    let warning = AnchorWarning { section: *section };
                    tracing::warn!("{}", warning);
                    warnings.push(warning);
                }
            }
        }

        (content, warnings)
    }
}

/// Insert `generated` and a newline directly before `anchor`.
///
/// Returns `None` when the anchor is absent.
pub fn insert_at(content: &str, anchor: &CompiledAnchor, generated: &str) -> Option<String> {
    let at = anchor.position(content)?;
    let mut out = String::with_capacity(content.len() + generated.len() + 1);
    out.push_str(&content[..at]);
    out.push_str(generated);
    out.push('\n');
    out.push_str(&content[at..]);
    Some(out)
}

/// Rewrite the doc comments of drifted declarations.
///
/// Works on the line numbers recorded when `content` was parsed, so updates
/// are applied bottom-up to keep earlier indices valid.
pub fn replace_comments(
    content: &str,
    updates: &[CommentUpdate],
    generator: &SwiftGenerator<'_>,
) -> String {
    let mut lines: Vec<String> = content.split('\n').map(str::to_string).collect();

    let mut ordered: Vec<&CommentUpdate> = updates.iter().collect();
    ordered.sort_by(|a, b| b.existing.start_line.cmp(&a.existing.start_line));

    for update in ordered {
        let existing = &update.existing;
        let Some(case_line) = lines.get(existing.case_line) else {
            tracing::warn!(code = existing.code, "Declaration line out of range, skipping");
            continue;
        };
        let indent: String = case_line.chars().take_while(|c| c.is_whitespace()).collect();

        let replacement: Vec<String> = generator
            .doc_comment(&update.proto.comment, update.proto.deprecated)
            .map(|doc| format!("{indent}/// {doc}"))
            .into_iter()
            .collect();

        tracing::debug!(code = existing.code, identifier = %existing.identifier, "Updating doc comment");
        lines.splice(existing.start_line..existing.case_line, replacement);
    }

    lines.join("\n")
}
