//! Orders and their lines

use super::{execute_insert, query_all, query_one, EntityStore};
use crate::errors::{from_rusqlite, Result};
use rusqlite::{params, Connection};
use shipdesk_core::model::{Entity, Order, OrderId, OrderLine, ProductId};

pub struct Orders;

impl Orders {
    /// Sum of `quantity * unit_price` over the order's lines; 0 when it has none
    pub fn total(conn: &Connection, order_id: OrderId) -> Result<f64> {
        conn.query_row(
            "SELECT COALESCE(SUM(quantity * unit_price), 0.0) FROM order_line WHERE order_id = ?1",
            [order_id],
            |row| row.get(0),
        )
        .map_err(|e| from_rusqlite(e).with_op("order_total"))
    }
}

impl EntityStore for Orders {
    type Entity = Order;
    type Key = OrderId;

    const SELECT: &'static str = "SELECT id, customer_id, date FROM orders";
    const ORDER_BY: &'static str = "id";

    fn insert(conn: &Connection, order: &Order) -> Result<Order> {
        execute_insert(
            conn,
            Order::KIND,
            order.key(),
            "INSERT INTO orders (id, customer_id, date) VALUES (?1, ?2, ?3)",
            params![order.id, order.customer_id, order.date],
        )?;
        Ok(order.clone())
    }

    fn find_by_id(conn: &Connection, id: OrderId) -> Result<Option<Order>> {
        query_one(conn, &format!("{} WHERE id = ?1", Self::SELECT), [id])
    }
}

pub struct OrderLines;

impl OrderLines {
    /// Lines of one order, ascending by product id
    pub fn find_by_order(conn: &Connection, order_id: OrderId) -> Result<Vec<OrderLine>> {
        query_all(
            conn,
            &format!("{} WHERE order_id = ?1 ORDER BY product_id", Self::SELECT),
            [order_id],
        )
    }
}

impl EntityStore for OrderLines {
    type Entity = OrderLine;
    type Key = (OrderId, ProductId);

    const SELECT: &'static str =
        "SELECT order_id, product_id, quantity, unit_price FROM order_line";
    const ORDER_BY: &'static str = "order_id, product_id";

    fn insert(conn: &Connection, line: &OrderLine) -> Result<OrderLine> {
        execute_insert(
            conn,
            OrderLine::KIND,
            line.key(),
            "INSERT INTO order_line (order_id, product_id, quantity, unit_price)
             VALUES (?1, ?2, ?3, ?4)",
            params![line.order_id, line.product_id, line.quantity, line.unit_price],
        )?;
        Ok(line.clone())
    }

    fn find_by_id(
        conn: &Connection,
        (order_id, product_id): (OrderId, ProductId),
    ) -> Result<Option<OrderLine>> {
        query_one(
            conn,
            &format!("{} WHERE order_id = ?1 AND product_id = ?2", Self::SELECT),
            [order_id, product_id],
        )
    }
}
