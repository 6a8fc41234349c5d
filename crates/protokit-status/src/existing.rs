//! Parsing of the hand-maintained `Status.swift`.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

/// Raw value -> Swift identifier, as found in `init(rawValue:)`.
pub type ExistingCodes = BTreeMap<i32, String>;

/// A case declaration together with the doc comment directly above it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistingCodeDetail {
    pub code: i32,
    pub identifier: String,
    /// Doc comment text with the deprecation marker removed.
    pub comment: String,
    pub deprecated: bool,
    /// First line of the declaration (the first doc line, or the case line).
    pub start_line: usize,
    /// Line of `case <identifier>  // = <code>`.
    pub case_line: usize,
}

static INIT_CASE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"case\s+(\d+):\s*self\s*=\s*\.(\w+)").expect("Invalid init case regex")
});

static CASE_DECLARATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*case\s+(\w+)\s*//\s*=\s*(\d+)\s*$").expect("Invalid case declaration regex")
});

/// Collect every `case N: self = .name` mapping in the file.
///
/// When a number appears twice the later mapping wins.
pub fn parse_existing(content: &str) -> ExistingCodes {
    let mut codes = ExistingCodes::new();

    for caps in INIT_CASE_REGEX.captures_iter(content) {
        let Ok(code) = caps[1].parse::<i32>() else {
            continue;
        };
        let identifier = &caps[2];
        if let Some(previous) = codes.insert(code, identifier.to_string()) {
            tracing::warn!(code, %previous, %identifier, "Raw value mapped twice");
        }
    }

    tracing::debug!(count = codes.len(), "Parsed existing status codes");
    codes
}

/// Collect case declarations annotated with `// = N` and their doc comments.
///
/// Line indices are 0-based positions in `content.split('\n')`.
pub fn parse_existing_details(content: &str, deprecated_marker: &str) -> Vec<ExistingCodeDetail> {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut details = Vec::new();

    for (case_line, line) in lines.iter().enumerate() {
        let Some(caps) = CASE_DECLARATION_REGEX.captures(line.trim_end_matches('\r')) else {
            continue;
        };
        let Ok(code) = caps[2].parse::<i32>() else {
            continue;
        };

        let mut start_line = case_line;
        while start_line > 0 && is_doc_line(lines[start_line - 1]) {
            start_line -= 1;
        }

        let text = lines[start_line..case_line]
            .iter()
            .map(|l| l.trim().trim_start_matches("///").trim())
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        let (comment, deprecated) = match text.strip_prefix(deprecated_marker) {
            Some(rest) if !deprecated_marker.is_empty() => (rest.trim().to_string(), true),
            _ => (text, false),
        };

        details.push(ExistingCodeDetail {
            code,
            identifier: caps[1].to_string(),
            comment,
            deprecated,
            start_line,
            case_line,
        });
    }

    details
}

fn is_doc_line(line: &str) -> bool {
    line.trim_start().starts_with("///")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SWIFT: &str = "public enum Status {
    /// The transaction passed the precheck validations.
    case ok  // = 0

    /// [Deprecated] Old code.
    /// Continued.
    case oldCode  // = 7
    case bare  // = 9

    /// swift-format-ignore: AlwaysUseLowerCamelCase
    case unrecognized(Int32)
}

extension Status {
    public init?(rawValue: Int) {
        switch rawValue {
        case 0: self = .ok
        case 7: self = .oldCode
        case 9: self = .bare
        default: self = .unrecognized(rawValue)
        }
    }
}
";

    #[test]
    fn init_mapping_is_extracted() {
        let codes = parse_existing(SWIFT);
        assert_eq!(
            codes.into_iter().collect::<Vec<_>>(),
            vec![(0, "ok".to_string()), (7, "oldCode".to_string()), (9, "bare".to_string())]
        );
    }

    #[test]
    fn later_duplicate_overwrites() {
        let codes = parse_existing("case 1: self = .first\ncase 1: self = .second\n");
        assert_eq!(codes.get(&1).map(String::as_str), Some("second"));
    }

    #[test]
    fn details_capture_comment_ranges() {
        let details = parse_existing_details(SWIFT, "[Deprecated]");
        assert_eq!(
            details,
            vec![
                ExistingCodeDetail {
                    code: 0,
                    identifier: "ok".into(),
                    comment: "The transaction passed the precheck validations.".into(),
                    deprecated: false,
                    start_line: 1,
                    case_line: 2,
                },
                ExistingCodeDetail {
                    code: 7,
                    identifier: "oldCode".into(),
                    comment: "Old code. Continued.".into(),
                    deprecated: true,
                    start_line: 4,
                    case_line: 6,
                },
                ExistingCodeDetail {
                    code: 9,
                    identifier: "bare".into(),
                    comment: String::new(),
                    deprecated: false,
                    start_line: 7,
                    case_line: 7,
                },
            ]
        );
    }

    #[test]
    fn marker_only_comment_is_deprecated_without_text() {
        let details = parse_existing_details("    /// [Deprecated]\n    case gone  // = 3\n", "[Deprecated]");
        assert_eq!(details.len(), 1);
        assert!(details[0].deprecated);
        assert_eq!(details[0].comment, "");
    }
}
