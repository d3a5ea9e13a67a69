use serde::{Deserialize, Serialize};

use super::kind::EntityKind;
use super::{CourierId, Entity, SalesAgentId};

/// Sales agent who manages shipments in a sales zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesAgent {
    pub id: SalesAgentId,
    pub name: String,
    pub sales_zone: String,
}

impl SalesAgent {
    pub fn new(id: SalesAgentId, name: impl Into<String>, sales_zone: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            sales_zone: sales_zone.into(),
        }
    }
}

impl Entity for SalesAgent {
    const KIND: EntityKind = EntityKind::SalesAgent;

    fn key(&self) -> String {
        self.id.to_string()
    }
}

/// Courier who delivers shipments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Courier {
    pub id: CourierId,
    pub name: String,
    pub vehicle: String,
}

impl Courier {
    pub fn new(id: CourierId, name: impl Into<String>, vehicle: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            vehicle: vehicle.into(),
        }
    }
}

impl Entity for Courier {
    const KIND: EntityKind = EntityKind::Courier;

    fn key(&self) -> String {
        self.id.to_string()
    }
}
