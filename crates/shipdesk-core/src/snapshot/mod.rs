//! Snapshot document and codec.
//!
//! A snapshot is a complete, point-in-time copy of every entity collection,
//! grouped by type under a fixed set of named arrays.
//!
//! ## Responsibilities
//!
//! - Define the document schema ([`Snapshot`])
//! - Serialize / parse the document (JSON) and read / write it at a path
//! - Compute a deterministic content digest
//!
//! ## Non-Responsibilities
//!
//! - Reading entities out of the store or replaying inserts (handled by
//!   `shipdesk-store`)

pub mod codec;
pub mod digest;
pub mod document;

pub use codec::{parse, read_from_path, serialize, write_to_path};
pub use digest::compute_snapshot_digest;
pub use document::Snapshot;
