//! Status code synchronization for protokit.
//!
//! Keeps the hand-maintained Swift `Status` enum in step with the
//! `ResponseCodeEnum` block of `response_code.proto`:
//!
//! 1. [`proto`] parses the enum values with their comments and deprecation.
//! 2. [`existing`] reads which raw values `Status.swift` already maps.
//! 3. [`diff`] finds missing codes and drifted doc comments.
//! 4. [`generate`] renders Swift for the missing codes.
//! 5. [`splice`] inserts that text at five anchors and rewrites drifted comments.
//!
//! [`StatusSync`] ties the steps together and writes the result through
//! [`protokit_fs::io::write_with_backup`].

pub mod case;
pub mod config;
pub mod diff;
pub mod error;
pub mod existing;
pub mod generate;
pub mod proto;
pub mod splice;
pub mod sync;

pub use case::to_swift_case;
pub use config::{AcronymTable, Anchor, Anchors, Section, SyncConfig};
pub use diff::{CommentUpdate, find_comment_updates, find_missing};
pub use error::{Error, Result};
pub use existing::{ExistingCodeDetail, ExistingCodes, parse_existing, parse_existing_details};
pub use generate::{Fragments, SwiftGenerator};
pub use proto::{ProtoStatusCode, parse_proto};
pub use splice::AnchorWarning;
pub use sync::{StatusSync, SyncOptions, SyncPlan, SyncReport};
