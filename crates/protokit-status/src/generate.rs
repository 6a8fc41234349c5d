//! Swift source generation for status codes.

use crate::case::to_swift_case;
use crate::config::{AcronymTable, Section};
use crate::proto::ProtoStatusCode;

/// Renders the Swift text for each of the five sections.
#[derive(Debug, Clone, Copy)]
pub struct SwiftGenerator<'a> {
    acronyms: &'a AcronymTable,
    deprecated_marker: &'a str,
}

/// Generated text for a batch of codes, one entry per [`Section`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragments {
    pub case_declarations: String,
    pub init_cases: String,
    pub raw_value_cases: String,
    pub all_cases: String,
    pub name_map: String,
}

impl Fragments {
    pub fn get(&self, section: Section) -> &str {
        match section {
            Section::CaseDeclarations => &self.case_declarations,
            Section::InitCases => &self.init_cases,
            Section::RawValueCases => &self.raw_value_cases,
            Section::AllCases => &self.all_cases,
            Section::NameMap => &self.name_map,
        }
    }
}

impl<'a> SwiftGenerator<'a> {
    pub fn new(acronyms: &'a AcronymTable, deprecated_marker: &'a str) -> Self {
        Self {
            acronyms,
            deprecated_marker,
        }
    }

    pub fn swift_name(&self, status: &ProtoStatusCode) -> String {
        to_swift_case(&status.name, self.acronyms)
    }

    /// Doc comment body for a code, or `None` when it needs no comment.
    pub fn doc_comment(&self, comment: &str, deprecated: bool) -> Option<String> {
        match (comment.is_empty(), deprecated) {
            (false, true) => Some(format!("{} {}", self.deprecated_marker, comment)),
            (false, false) => Some(comment.to_string()),
            (true, true) => Some(self.deprecated_marker.to_string()),
            (true, false) => None,
        }
    }

    pub fn case_declaration(&self, status: &ProtoStatusCode) -> String {
        let mut out = String::new();
        if let Some(doc) = self.doc_comment(&status.comment, status.deprecated) {
            out.push_str(&format!("    /// {doc}\n"));
        }
        out.push_str(&format!("    case {}  // = {}", self.swift_name(status), status.code));
        out
    }

    pub fn init_case(&self, status: &ProtoStatusCode) -> String {
        format!("        case {}: self = .{}", status.code, self.swift_name(status))
    }

    pub fn raw_value_case(&self, status: &ProtoStatusCode) -> String {
        format!("        case .{}: return {}", self.swift_name(status), status.code)
    }

    pub fn all_cases_entry(&self, status: &ProtoStatusCode) -> String {
        format!("        .{},", self.swift_name(status))
    }

    pub fn name_map_entry(&self, status: &ProtoStatusCode) -> String {
        format!("            {}: \"{}\",", status.code, status.name)
    }

    /// Render all sections for `codes`.
    ///
    /// Declarations are separated by blank lines and end with one, so the
    /// `unrecognized` case that follows stays visually separate.
    pub fn fragments(&self, codes: &[ProtoStatusCode]) -> Fragments {
        let join = |render: fn(&Self, &ProtoStatusCode) -> String, sep: &str| {
            codes.iter().map(|c| render(self, c)).collect::<Vec<_>>().join(sep)
        };

        let mut case_declarations = join(Self::case_declaration, "\n\n");
        case_declarations.push('\n');

        Fragments {
            case_declarations,
            init_cases: join(Self::init_case, "\n"),
            raw_value_cases: join(Self::raw_value_case, "\n"),
            all_cases: join(Self::all_cases_entry, "\n"),
            name_map: join(Self::name_map_entry, "\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SyncConfig;
    use pretty_assertions::assert_eq;

    fn status(name: &str, code: i32, comment: &str, deprecated: bool) -> ProtoStatusCode {
        ProtoStatusCode {
            name: name.into(),
            code,
            comment: comment.into(),
            deprecated,
        }
    }

    #[test]
    fn declaration_comment_variants() {
        let config = SyncConfig::default();
        let generator = SwiftGenerator::new(&config.acronyms, &config.deprecated_marker);

        assert_eq!(
            generator.case_declaration(&status("INVALID_FILE_ID", 15, "The file id is invalid.", false)),
            "    /// The file id is invalid.\n    case invalidFileID  // = 15"
        );
        assert_eq!(
            generator.case_declaration(&status("OLD_CODE", 70, "Gone.", true)),
            "    /// [Deprecated] Gone.\n    case oldCode  // = 70"
        );
        assert_eq!(
            generator.case_declaration(&status("OLD_CODE", 70, "", true)),
            "    /// [Deprecated]\n    case oldCode  // = 70"
        );
        assert_eq!(
            generator.case_declaration(&status("BUSY", 12, "", false)),
            "    case busy  // = 12"
        );
    }

    #[test]
    fn fragments_cover_every_section() {
        let config = SyncConfig::default();
        let generator = SwiftGenerator::new(&config.acronyms, &config.deprecated_marker);
        let codes = vec![
            status("INSUFFICIENT_TX_FEE", 9, "The fee is too low.", false),
            status("INVALID_NFT_ID", 226, "", true),
        ];

        let fragments = generator.fragments(&codes);

        assert_eq!(
            fragments.case_declarations,
            "    /// The fee is too low.\n    case insufficientTxFee  // = 9\n\n    /// [Deprecated]\n    case invalidNftID  // = 226\n"
        );
        assert_eq!(
            fragments.init_cases,
            "        case 9: self = .insufficientTxFee\n        case 226: self = .invalidNftID"
        );
        assert_eq!(
            fragments.raw_value_cases,
            "        case .insufficientTxFee: return 9\n        case .invalidNftID: return 226"
        );
        assert_eq!(fragments.all_cases, "        .insufficientTxFee,\n        .invalidNftID,");
        assert_eq!(
            fragments.name_map,
            "            9: \"INSUFFICIENT_TX_FEE\",\n            226: \"INVALID_NFT_ID\","
        );
    }
}
