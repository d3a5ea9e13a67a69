use serde::{Deserialize, Serialize};

use super::kind::EntityKind;
use super::{
    Courier, CourierId, CustomerId, Entity, Order, OrderId, SalesAgent, SalesAgentId, ShipmentId,
};

/// A shipment composes one order, one sales agent and one courier by value
///
/// The embedded views are independent copies holding only the columns the
/// shipment join projects. They are never written back to their own tables;
/// inserting a shipment only persists the three referenced ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub id: ShipmentId,
    pub order: OrderView,
    pub sales_agent: SalesAgentView,
    pub courier: CourierView,
}

impl Shipment {
    pub fn new(
        id: ShipmentId,
        order: OrderView,
        sales_agent: SalesAgentView,
        courier: CourierView,
    ) -> Self {
        Self {
            id,
            order,
            sales_agent,
            courier,
        }
    }

    /// Build a shipment from the canonical records it links
    pub fn linking(id: ShipmentId, order: &Order, agent: &SalesAgent, courier: &Courier) -> Self {
        Self::new(id, order.into(), agent.into(), courier.into())
    }
}

impl Entity for Shipment {
    const KIND: EntityKind = EntityKind::Shipment;

    fn key(&self) -> String {
        self.id.to_string()
    }
}

/// The part of an order visible through the shipment join
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub id: OrderId,
    pub customer_id: CustomerId,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            customer_id: order.customer_id,
        }
    }
}

/// The part of a sales agent visible through the shipment join
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesAgentView {
    pub id: SalesAgentId,
    pub name: String,
    pub sales_zone: String,
}

impl From<&SalesAgent> for SalesAgentView {
    fn from(agent: &SalesAgent) -> Self {
        Self {
            id: agent.id,
            name: agent.name.clone(),
            sales_zone: agent.sales_zone.clone(),
        }
    }
}

/// The part of a courier visible through the shipment join
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourierView {
    pub id: CourierId,
    pub name: String,
    pub vehicle: String,
}

impl From<&Courier> for CourierView {
    fn from(courier: &Courier) -> Self {
        Self {
            id: courier.id,
            name: courier.name.clone(),
            vehicle: courier.vehicle.clone(),
        }
    }
}
