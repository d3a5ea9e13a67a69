//! shipdesk store - SQLite persistence for the shipdesk entity model
//!
//! Provides:
//! - A connection factory with scoped, per-operation acquisition
//! - Embedded, checksummed schema migrations
//! - Row hydration (including the aliased shipment join)
//! - One entity store per table, with a search capability where it applies
//! - Snapshot export and dependency-ordered import

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod snapshot;

// Re-export key types
pub use db::Database;
pub use errors::Result;
pub use repo::{
    Couriers, CustomerDetails, Customers, EntityStore, OrderLines, Orders, Products, SalesAgents,
    Searchable, Shipments,
};
pub use snapshot::{
    export_snapshot, export_to_path, import_from_path, import_snapshot, ImportMode, ImportReport,
};
