//! Row hydration - turns one flat result row into one entity
//!
//! Every column is read by name, never by position. Single-table entities
//! map their own column names directly. A shipment row comes from a
//! four-way join, so each joined table's columns are projected under a
//! distinct alias (see [`SHIPMENT_PROJECTION`]) and the hydrator reads the
//! aliases only. A missing or mistyped column surfaces as
//! `ExErrorKind::HydrationMismatch` once the rusqlite error is classified;
//! nothing is defaulted and no secondary query is issued.

use crate::errors::{from_rusqlite, Result};
use rusqlite::{Params, Row, Statement};
use shipdesk_core::model::{
    Courier, CourierView, Customer, CustomerDetail, Order, OrderLine, OrderView, Product,
    SalesAgent, SalesAgentView, Shipment,
};

/// Build an entity from a single result row
pub trait Hydrate: Sized {
    fn hydrate(row: &Row<'_>) -> rusqlite::Result<Self>;
}

/// Projection of the shipment join
///
/// Column aliases keep the shipment's own id apart from the ids of the
/// order, sales agent and courier it references, and the agent's name apart
/// from the courier's.
pub const SHIPMENT_PROJECTION: &str = "SELECT
        s.id AS shipment_id,
        o.id AS order_id, o.customer_id AS customer_id,
        a.id AS agent_id, a.name AS agent_name, a.sales_zone AS sales_zone,
        c.id AS courier_id, c.name AS courier_name, c.vehicle AS vehicle
    FROM shipment s
    JOIN orders o ON s.order_id = o.id
    JOIN sales_agent a ON s.sales_agent_id = a.id
    JOIN courier c ON s.courier_id = c.id";

impl Hydrate for Customer {
    fn hydrate(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Customer {
            id: row.get("id")?,
            name: row.get("name")?,
            email: row.get("email")?,
        })
    }
}

impl Hydrate for CustomerDetail {
    fn hydrate(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(CustomerDetail {
            customer_id: row.get("customer_id")?,
            address: row.get("address")?,
            phone: row.get("phone")?,
            notes: row.get("notes")?,
        })
    }
}

impl Hydrate for Product {
    fn hydrate(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Product {
            id: row.get("id")?,
            name: row.get("name")?,
            price: row.get("price")?,
        })
    }
}

impl Hydrate for Order {
    fn hydrate(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Order {
            id: row.get("id")?,
            customer_id: row.get("customer_id")?,
            date: row.get("date")?,
        })
    }
}

impl Hydrate for OrderLine {
    fn hydrate(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(OrderLine {
            order_id: row.get("order_id")?,
            product_id: row.get("product_id")?,
            quantity: row.get("quantity")?,
            unit_price: row.get("unit_price")?,
        })
    }
}

impl Hydrate for SalesAgent {
    fn hydrate(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(SalesAgent {
            id: row.get("id")?,
            name: row.get("name")?,
            sales_zone: row.get("sales_zone")?,
        })
    }
}

impl Hydrate for Courier {
    fn hydrate(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Courier {
            id: row.get("id")?,
            name: row.get("name")?,
            vehicle: row.get("vehicle")?,
        })
    }
}

impl Hydrate for Shipment {
    fn hydrate(row: &Row<'_>) -> rusqlite::Result<Self> {
        // Embedded views first, from the projected aliases only
        let order = OrderView {
            id: row.get("order_id")?,
            customer_id: row.get("customer_id")?,
        };
        let sales_agent = SalesAgentView {
            id: row.get("agent_id")?,
            name: row.get("agent_name")?,
            sales_zone: row.get("sales_zone")?,
        };
        let courier = CourierView {
            id: row.get("courier_id")?,
            name: row.get("courier_name")?,
            vehicle: row.get("vehicle")?,
        };

        Ok(Shipment::new(
            row.get("shipment_id")?,
            order,
            sales_agent,
            courier,
        ))
    }
}

/// Run a prepared query and hydrate every row, in result order
pub fn hydrate_all<T: Hydrate, P: Params>(stmt: &mut Statement<'_>, params: P) -> Result<Vec<T>> {
    let rows = stmt
        .query_map(params, |row| T::hydrate(row))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    tracing::debug!(rows = rows.len(), "hydrated rows");

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;
    use shipdesk_core::ExErrorKind;

    #[test]
    fn test_hydrate_single_table_row() {
        let conn = Connection::open_in_memory().unwrap();
        let mut stmt = conn
            .prepare("SELECT 2 AS id, 'Luis' AS name, 'North' AS sales_zone")
            .unwrap();

        let agents: Vec<SalesAgent> = hydrate_all(&mut stmt, []).unwrap();
        assert_eq!(agents, vec![SalesAgent::new(2, "Luis", "North")]);
    }

    #[test]
    fn test_hydrate_ignores_column_order() {
        let conn = Connection::open_in_memory().unwrap();
        let mut stmt = conn
            .prepare("SELECT 'Van' AS vehicle, 'Max' AS name, 3 AS id")
            .unwrap();

        let couriers: Vec<Courier> = hydrate_all(&mut stmt, []).unwrap();
        assert_eq!(couriers, vec![Courier::new(3, "Max", "Van")]);
    }

    #[test]
    fn test_shipment_row_with_missing_alias_is_fatal() {
        let conn = Connection::open_in_memory().unwrap();
        // Un-aliased `id` instead of `shipment_id`
        let mut stmt = conn
            .prepare(
                "SELECT 9 AS id, 5 AS order_id, 1 AS customer_id,
                        2 AS agent_id, 'Luis' AS agent_name, 'North' AS sales_zone,
                        3 AS courier_id, 'Max' AS courier_name, 'Van' AS vehicle",
            )
            .unwrap();

        let err = hydrate_all::<Shipment, _>(&mut stmt, []).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::HydrationMismatch);
    }

    #[test]
    fn test_mistyped_column_is_fatal() {
        let conn = Connection::open_in_memory().unwrap();
        let mut stmt = conn
            .prepare("SELECT 'seven' AS id, 'Pen' AS name, 1.5 AS price")
            .unwrap();

        let err = hydrate_all::<Product, _>(&mut stmt, []).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::HydrationMismatch);
    }
}
