//! Proto tree maintenance for protokit.
//!
//! - [`organize`] copies a fixed list of `.proto` files from an upstream
//!   checkout into the local `Protos` tree.
//! - [`imports`] flattens `import` paths so every file resolves against a
//!   single include directory.
//! - [`protoc`] runs `protoc` for Swift message and gRPC service bindings.

pub mod config;
pub mod error;
pub mod imports;
pub mod organize;
pub mod protoc;

pub use config::ProtosConfig;
pub use error::{Error, Result};
pub use imports::{rewrite_import_lines, rewrite_imports};
pub use organize::{OrganizeReport, organize};
pub use protoc::{Codegen, Protoc};
