//! Error handling for shipdesk-store
//!
//! Wraps shipdesk-core ExError with store-specific helpers. Every
//! `rusqlite::Error` is classified here so callers can match on kind:
//! constraint failures, hydration mismatches and an unreachable store each
//! get their own kind instead of a generic persistence error.

use rusqlite::ffi;
use rusqlite::ErrorCode;
use shipdesk_core::errors::{ConstraintKind, ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Classify a rusqlite::Error into an ExError
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    match &err {
        rusqlite::Error::SqliteFailure(failure, _) => match failure.code {
            ErrorCode::ConstraintViolation => ExError::new(ExErrorKind::ConstraintViolation)
                .with_constraint(constraint_kind(failure.extended_code)),
            ErrorCode::CannotOpen | ErrorCode::NotADatabase | ErrorCode::PermissionDenied => {
                ExError::new(ExErrorKind::StoreUnavailable)
            }
            _ => ExError::new(ExErrorKind::Persistence),
        },
        rusqlite::Error::InvalidColumnName(_)
        | rusqlite::Error::InvalidColumnIndex(_)
        | rusqlite::Error::InvalidColumnType(..)
        | rusqlite::Error::FromSqlConversionFailure(..)
        | rusqlite::Error::IntegralValueOutOfRange(..) => {
            ExError::new(ExErrorKind::HydrationMismatch)
        }
        _ => ExError::new(ExErrorKind::Persistence),
    }
    .with_op("sqlite")
    .with_message(err.to_string())
}

fn constraint_kind(extended_code: std::os::raw::c_int) -> ConstraintKind {
    match extended_code {
        ffi::SQLITE_CONSTRAINT_PRIMARYKEY => ConstraintKind::PrimaryKey,
        ffi::SQLITE_CONSTRAINT_FOREIGNKEY => ConstraintKind::ForeignKey,
        ffi::SQLITE_CONSTRAINT_UNIQUE => ConstraintKind::Unique,
        ffi::SQLITE_CONSTRAINT_CHECK => ConstraintKind::Check,
        ffi::SQLITE_CONSTRAINT_NOTNULL => ConstraintKind::NotNull,
        _ => ConstraintKind::Other,
    }
}
