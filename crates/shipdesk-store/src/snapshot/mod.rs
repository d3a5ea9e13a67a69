//! Dataset-wide snapshot transfer.
//!
//! ## Responsibilities
//!
//! - Export every entity collection into a [`Snapshot`] (and optionally a file)
//! - Replay a snapshot as inserts, in dependency order, in either
//!   [`ImportMode`]
//!
//! ## Non-Responsibilities
//!
//! - The document format itself (handled by `shipdesk_core::snapshot`)
//! - Deduplication or upsert: ids already present are constraint violations
//!
//! [`Snapshot`]: shipdesk_core::Snapshot

pub mod export;
pub mod import;

pub use export::{export_snapshot, export_to_path};
pub use import::{import_from_path, import_snapshot, ImportMode, ImportReport};
