//! shipdesk core - entity model, dependency ordering and snapshot codec
//!
//! This crate holds everything that does not touch the backing store:
//! - Entity records for customers, products, orders, staff and shipments,
//!   including the by-value views a hydrated shipment embeds
//! - The declared dependency table and the insert order derived from it
//! - The snapshot document and its JSON codec
//! - The error and logging facilities shared by every crate

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ordering;
pub mod snapshot;

// Re-export commonly used types
pub use errors::{ConstraintKind, ExError, ExErrorKind, Result};
pub use model::{Entity, EntityKind};
pub use snapshot::Snapshot;

// Paths used by the exported logging macros
#[doc(hidden)]
pub mod __private {
    pub use shipdesk_core_types::schema;
    pub use tracing;
}
