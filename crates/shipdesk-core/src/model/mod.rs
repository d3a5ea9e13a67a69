//! Entity model
//!
//! Plain value records for every table in the store, plus the embedded
//! view types a hydrated Shipment carries by value.

pub mod customer;
pub mod kind;
pub mod order;
pub mod product;
pub mod shipment;
pub mod staff;

pub use customer::{Customer, CustomerDetail};
pub use kind::EntityKind;
pub use order::{Order, OrderLine};
pub use product::Product;
pub use shipment::{CourierView, OrderView, SalesAgentView, Shipment};
pub use staff::{Courier, SalesAgent};

/// Identifier types. All identifiers are positive integers, unique per type.
pub type CustomerId = i64;
pub type ProductId = i64;
pub type OrderId = i64;
pub type SalesAgentId = i64;
pub type CourierId = i64;
pub type ShipmentId = i64;

/// A record that belongs to exactly one entity table
pub trait Entity {
    /// Which table this record lives in
    const KIND: EntityKind;

    /// Human-readable rendering of the record's key, used for error context
    /// and logs (`"7"`, or `"3/12"` for composite keys)
    fn key(&self) -> String;
}
