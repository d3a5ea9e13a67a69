//! Snapshot document schema.
//!
//! ```json
//! {
//!   "customers": [], "customerDetails": [], "products": [], "orders": [],
//!   "orderLines": [], "salesAgents": [], "couriers": [], "shipments": []
//! }
//! ```
//!
//! All eight arrays are required. Field names inside each element mirror the
//! entity attributes in camelCase.

use serde::{Deserialize, Serialize};

use crate::model::{
    Courier, Customer, CustomerDetail, EntityKind, Order, OrderLine, Product, SalesAgent, Shipment,
};

/// Every entity collection of the store at one point in time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub customers: Vec<Customer>,
    pub customer_details: Vec<CustomerDetail>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub order_lines: Vec<OrderLine>,
    pub sales_agents: Vec<SalesAgent>,
    pub couriers: Vec<Courier>,
    pub shipments: Vec<Shipment>,
}

impl Snapshot {
    /// Number of items held for one kind
    pub fn len_of(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Customer => self.customers.len(),
            EntityKind::CustomerDetail => self.customer_details.len(),
            EntityKind::Product => self.products.len(),
            EntityKind::Order => self.orders.len(),
            EntityKind::OrderLine => self.order_lines.len(),
            EntityKind::SalesAgent => self.sales_agents.len(),
            EntityKind::Courier => self.couriers.len(),
            EntityKind::Shipment => self.shipments.len(),
        }
    }

    /// Total number of rows across every collection
    pub fn total_rows(&self) -> usize {
        EntityKind::ALL.iter().map(|k| self.len_of(*k)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_rows() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_per_kind() {
        let snapshot = Snapshot {
            customers: vec![Customer::new(1, "Ana", "ana@x.com")],
            products: vec![
                Product::new(1, "Pen", 1.5),
                Product::new(2, "Ink", 4.0),
            ],
            ..Default::default()
        };

        assert_eq!(snapshot.len_of(EntityKind::Customer), 1);
        assert_eq!(snapshot.len_of(EntityKind::Product), 2);
        assert_eq!(snapshot.len_of(EntityKind::Shipment), 0);
        assert_eq!(snapshot.total_rows(), 3);
        assert!(!snapshot.is_empty());
        assert!(Snapshot::default().is_empty());
    }

    #[test]
    fn test_top_level_array_names() {
        let json = serde_json::to_value(Snapshot::default()).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();

        let mut expected: Vec<_> = EntityKind::ALL
            .iter()
            .map(|k| k.collection().to_string())
            .collect();
        expected.sort();

        assert_eq!(keys, expected);
    }
}
