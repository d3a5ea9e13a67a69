//! Snapshot codec: document ⇄ text, and text ⇄ file.

use std::fs;
use std::path::Path;

use crate::errors::CodecError;
use crate::snapshot::document::Snapshot;

/// Serialize a snapshot as pretty-printed JSON
pub fn serialize(snapshot: &Snapshot) -> Result<String, CodecError> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Parse a snapshot document
///
/// Fails on malformed JSON, on a missing collection array, and on items
/// whose fields do not match the entity schema.
pub fn parse(document: &str) -> Result<Snapshot, CodecError> {
    Ok(serde_json::from_str(document)?)
}

/// Write a snapshot document to `path`, creating parent directories
pub fn write_to_path(snapshot: &Snapshot, path: &Path) -> Result<(), CodecError> {
    let document = serialize(snapshot)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| CodecError::Write {
            path: path.display().to_string(),
            source,
        })?;
    }

    fs::write(path, document).map_err(|source| CodecError::Write {
        path: path.display().to_string(),
        source,
    })
}

/// Read and parse a snapshot document from `path`
pub fn read_from_path(path: &Path) -> Result<Snapshot, CodecError> {
    let document = fs::read_to_string(path).map_err(|source| CodecError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse(&document)
}
