use serde::{Deserialize, Serialize};

use super::kind::EntityKind;
use super::{CustomerId, Entity};

/// A customer. Owns at most one [`CustomerDetail`] and any number of orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
}

impl Customer {
    pub fn new(id: CustomerId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Entity for Customer {
    const KIND: EntityKind = EntityKind::Customer;

    fn key(&self) -> String {
        self.id.to_string()
    }
}

/// Contact details of a customer (1:1, keyed by the owning customer's id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetail {
    pub customer_id: CustomerId,
    pub address: String,
    pub phone: String,
    pub notes: String,
}

impl CustomerDetail {
    pub fn new(
        customer_id: CustomerId,
        address: impl Into<String>,
        phone: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            customer_id,
            address: address.into(),
            phone: phone.into(),
            notes: notes.into(),
        }
    }
}

impl Entity for CustomerDetail {
    const KIND: EntityKind = EntityKind::CustomerDetail;

    fn key(&self) -> String {
        self.customer_id.to_string()
    }
}
