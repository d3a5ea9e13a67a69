use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::kind::EntityKind;
use super::{CustomerId, Entity, OrderId, ProductId};

/// An order placed by a customer on a given day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub date: NaiveDate,
}

impl Order {
    pub fn new(id: OrderId, customer_id: CustomerId, date: NaiveDate) -> Self {
        Self {
            id,
            customer_id,
            date,
        }
    }
}

impl Entity for Order {
    const KIND: EntityKind = EntityKind::Order;

    fn key(&self) -> String {
        self.id.to_string()
    }
}

/// One product line of an order (junction of Order and Product)
///
/// Keyed by `(order_id, product_id)`; `quantity` is always positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: i64,
    pub unit_price: f64,
}

impl OrderLine {
    pub fn new(order_id: OrderId, product_id: ProductId, quantity: i64, unit_price: f64) -> Self {
        Self {
            order_id,
            product_id,
            quantity,
            unit_price,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

impl Entity for OrderLine {
    const KIND: EntityKind = EntityKind::OrderLine;

    fn key(&self) -> String {
        format!("{}/{}", self.order_id, self.product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let line = OrderLine::new(1, 2, 3, 2.5);
        assert!((line.line_total() - 7.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_order_line_key_is_composite() {
        assert_eq!(OrderLine::new(3, 12, 1, 1.0).key(), "3/12");
    }

    #[test]
    fn test_order_serializes_camel_case() {
        let order = Order::new(5, 1, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["customerId"], 1);
        assert_eq!(json["date"], "2024-03-09");
    }
}
