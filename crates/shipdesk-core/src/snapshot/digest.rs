//! Content digest for snapshot documents.
//!
//! The digest is a SHA256 over the compact JSON form of the document, so two
//! snapshots with the same collections in the same order share a digest.

use crate::errors::CodecError;
use crate::snapshot::document::Snapshot;
use sha2::{Digest, Sha256};

/// Compute the hex-encoded SHA256 digest (64 characters) of a snapshot
pub fn compute_snapshot_digest(snapshot: &Snapshot) -> Result<String, CodecError> {
    let canonical = serde_json::to_string(snapshot)?;
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}
