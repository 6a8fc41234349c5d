//! Shared test fixtures for the protokit workspace.
//!
//! Dev-dependency only. [`TestWorkspace`] lays out a temporary project that
//! looks like the Hiero Swift SDK: a `response_code.proto` under
//! `Sources/HieroProtobufs/Protos` and a hand-maintained `Status.swift`.

pub mod workspace;

pub use workspace::TestWorkspace;

/// `response_code.proto` declaring codes 0, 1, 2, 3, 9, 15 and 70.
pub const RESPONSE_CODE_PROTO: &str = include_str!("../../../test-fixtures/status/response_code.proto");

/// `Status.swift` mapping codes 0, 1 and 2, with all five anchors present.
pub const STATUS_SWIFT: &str = include_str!("../../../test-fixtures/status/Status.swift");

/// Proto path relative to the workspace root, matching the default config.
pub const PROTO_REL_PATH: &str = "Sources/HieroProtobufs/Protos/services/response_code.proto";

/// Swift path relative to the workspace root, matching the default config.
pub const SWIFT_REL_PATH: &str = "Sources/Hiero/Status.swift";
