//! Migration framework
//!
//! - Embedded SQL migrations, applied in order
//! - Idempotent application, recorded in `schema_version`
//! - Checksums detect an applied migration whose SQL has since changed

mod checksums;
mod embedded;
mod runner;

pub use runner::apply_migrations;
