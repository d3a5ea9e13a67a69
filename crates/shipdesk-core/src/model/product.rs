use serde::{Deserialize, Serialize};

use super::kind::EntityKind;
use super::{Entity, ProductId};

/// A sellable product. `price` is never negative (enforced by the store).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

impl Entity for Product {
    const KIND: EntityKind = EntityKind::Product;

    fn key(&self) -> String {
        self.id.to_string()
    }
}
