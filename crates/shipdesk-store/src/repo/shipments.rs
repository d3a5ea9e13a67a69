//! Shipments
//!
//! Reads go through the aliased four-way join in
//! [`SHIPMENT_PROJECTION`](super::hydration::SHIPMENT_PROJECTION). Writes
//! persist the shipment's own id and the three referenced ids; the embedded
//! views are never written back.

use super::hydration::SHIPMENT_PROJECTION;
use super::{execute_insert, query_one, EntityStore};
use crate::errors::Result;
use rusqlite::{params, Connection};
use shipdesk_core::model::{Entity, Shipment, ShipmentId};
use shipdesk_core::{ExError, ExErrorKind};

pub struct Shipments;

impl EntityStore for Shipments {
    type Entity = Shipment;
    type Key = ShipmentId;

    const SELECT: &'static str = SHIPMENT_PROJECTION;
    const ORDER_BY: &'static str = "s.id";

    /// Returns the shipment re-read through the join, so the embedded views
    /// reflect the stored order, agent and courier
    fn insert(conn: &Connection, shipment: &Shipment) -> Result<Shipment> {
        execute_insert(
            conn,
            Shipment::KIND,
            shipment.key(),
            "INSERT INTO shipment (id, order_id, sales_agent_id, courier_id)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                shipment.id,
                shipment.order.id,
                shipment.sales_agent.id,
                shipment.courier.id
            ],
        )?;

        Self::find_by_id(conn, shipment.id)?.ok_or_else(|| {
            ExError::new(ExErrorKind::Internal)
                .with_op("insert")
                .with_entity(Shipment::KIND)
                .with_entity_id(shipment.key())
                .with_message("inserted shipment not visible through join")
        })
    }

    fn find_by_id(conn: &Connection, id: ShipmentId) -> Result<Option<Shipment>> {
        query_one(conn, &format!("{} WHERE s.id = ?1", Self::SELECT), [id])
    }
}
