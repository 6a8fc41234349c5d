//! Parsing of the `ResponseCodeEnum` block in `response_code.proto`.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// A status code declared in the proto enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtoStatusCode {
    /// Proto identifier, e.g. `INVALID_TRANSACTION`.
    pub name: String,
    pub code: i32,
    /// Preceding comment lines and any inline comment, space-joined.
    pub comment: String,
    pub deprecated: bool,
}

static ENUM_VALUE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\w+)\s*=\s*(\d+)\s*(?:\[deprecated\s*=\s*true\])?\s*;?\s*(?://\s*(.*))?$")
        .expect("Invalid enum value regex")
});

static BLOCK_COMMENT_MARKERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*\*?\s*|\s*\*/").expect("Invalid block comment regex"));

/// Extract every value of `enum <enum_name> { ... }`, in source order.
///
/// Comments attach to the next value; a blank line discards any pending
/// comment. Lines that are neither comments nor values are skipped.
pub fn parse_proto(content: &str, enum_name: &str) -> Result<Vec<ProtoStatusCode>> {
    let body = enum_body(content, enum_name).ok_or_else(|| Error::EnumNotFound {
        name: enum_name.to_string(),
    })?;

    let mut codes = Vec::new();
    let mut pending: Vec<String> = Vec::new();

    for raw in body.split('\n') {
        let line = raw.trim();

        if line.is_empty() {
            pending.clear();
            continue;
        }

        if collect_comment(line, &mut pending) {
            continue;
        }

        if let Some(code) = parse_value(line, &pending) {
            codes.push(code);
            pending.clear();
        }
    }

    tracing::debug!(count = codes.len(), "Parsed proto status codes");
    Ok(codes)
}

fn enum_body<'a>(content: &'a str, enum_name: &str) -> Option<&'a str> {
    let pattern = format!(r"(?s)enum\s+{}\s*\{{(.*?)\}}", regex::escape(enum_name));
    let re = Regex::new(&pattern).ok()?;
    re.captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Returns true when `line` is a comment line, appending its text to `pending`.
fn collect_comment(line: &str, pending: &mut Vec<String>) -> bool {
    if line.starts_with("/*") {
        pending.clear();
        if line.contains("*/") {
            let text = BLOCK_COMMENT_MARKERS.replace_all(line, "");
            let text = text.trim();
            if !text.is_empty() {
                pending.push(text.to_string());
            }
        }
        return true;
    }

    if line.starts_with('*') {
        let text = line.trim_start_matches(['*', ' ']).trim_end();
        if !text.is_empty() && text != "/" {
            pending.push(text.to_string());
        }
        return true;
    }

    if line.starts_with("//") {
        let text = line.trim_start_matches(['/', ' ']).trim();
        if !text.is_empty() {
            pending.push(text.to_string());
        }
        return true;
    }

    false
}

fn parse_value(line: &str, pending: &[String]) -> Option<ProtoStatusCode> {
    let caps = ENUM_VALUE_REGEX.captures(line)?;
    let name = caps.get(1)?.as_str();
    let code = match caps[2].parse::<i32>() {
        Ok(code) => code,
        Err(_) => {
            tracing::warn!(line, "Enum value out of range, skipping");
            return None;
        }
    };

    let mut comment = pending.join(" ");
    if let Some(inline) = caps.get(3).map(|m| m.as_str().trim()).filter(|s| !s.is_empty()) {
        if !comment.is_empty() {
            comment.push(' ');
        }
        comment.push_str(inline);
    }

    Some(ProtoStatusCode {
        name: name.to_string(),
        code,
        comment: comment.trim().to_string(),
        deprecated: line.to_lowercase().contains("deprecated"),
    })
}
