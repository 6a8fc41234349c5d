//! Synchronizer configuration.
//!
//! The acronym table and the anchor literals depend on the current formatting
//! of `Status.swift`, so they are data rather than code. Every field has a
//! default matching the Hiero SDK layout; a `[status]` table in
//! `protokit.toml` overrides any subset of them.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Segment text -> desired casing, e.g. `ID -> ID`, `NFT -> Nft`.
pub type AcronymTable = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Name of the enum block in the proto file.
    pub enum_name: String,
    /// Proto file, relative to the project root.
    pub proto_path: String,
    /// Hand-maintained Swift file, relative to the project root.
    pub swift_path: String,
    /// Prefix written into doc comments of deprecated codes.
    pub deprecated_marker: String,
    pub acronyms: AcronymTable,
    pub anchors: Anchors,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            enum_name: "ResponseCodeEnum".to_string(),
            proto_path: "Sources/HieroProtobufs/Protos/services/response_code.proto".to_string(),
            swift_path: "Sources/Hiero/Status.swift".to_string(),
            deprecated_marker: "[Deprecated]".to_string(),
            acronyms: default_acronyms(),
            anchors: Anchors::default(),
        }
    }
}

fn default_acronyms() -> AcronymTable {
    [
        ("ID", "ID"),
        ("IPV4", "Ipv4"),
        ("FQDN", "Fqdn"),
        ("NFT", "Nft"),
        ("KYC", "Kyc"),
        ("GRPC", "Grpc"),
        ("LCM", "Lcm"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Where generated text is spliced into the Swift source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Anchor {
    /// Exact text; new content goes immediately before its first occurrence.
    Marker { text: String },
    /// Regular expression; new content goes before capture group 1 (or the
    /// whole match when the pattern has no groups).
    Pattern { regex: String },
}

impl Anchor {
    fn marker(text: &str) -> Self {
        Self::Marker {
            text: text.to_string(),
        }
    }

    fn pattern(regex: &str) -> Self {
        Self::Pattern {
            regex: regex.to_string(),
        }
    }
}

/// The five insertion points of `Status.swift`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Anchors {
    pub case_declarations: Anchor,
    pub init_cases: Anchor,
    pub raw_value_cases: Anchor,
    pub all_cases: Anchor,
    pub name_map: Anchor,
}

impl Default for Anchors {
    fn default() -> Self {
        Self {
            case_declarations: Anchor::marker(
                "    /// swift-format-ignore: AlwaysUseLowerCamelCase\n    case unrecognized(Int32)",
            ),
            init_cases: Anchor::marker("        default: self = .unrecognized(rawValue)"),
            raw_value_cases: Anchor::marker("        case .unrecognized(let i): return i"),
            all_cases: Anchor::pattern(r"(    \]\n\})\n\n// minimal edit from proto-generated file:"),
            name_map: Anchor::pattern(r"(        \]\n\})\n\nextension Status: Sendable"),
        }
    }
}

impl Anchors {
    pub fn get(&self, section: Section) -> &Anchor {
        match section {
            Section::CaseDeclarations => &self.case_declarations,
            Section::InitCases => &self.init_cases,
            Section::RawValueCases => &self.raw_value_cases,
            Section::AllCases => &self.all_cases,
            Section::NameMap => &self.name_map,
        }
    }
}

/// One of the five generated sections, in the order they are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    CaseDeclarations,
    InitCases,
    RawValueCases,
    AllCases,
    NameMap,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::CaseDeclarations,
        Section::InitCases,
        Section::RawValueCases,
        Section::AllCases,
        Section::NameMap,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CaseDeclarations => "enum case declarations",
            Self::InitCases => "init(rawValue:) cases",
            Self::RawValueCases => "rawValue cases",
            Self::AllCases => "allCases entries",
            Self::NameMap => "nameMap entries",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
