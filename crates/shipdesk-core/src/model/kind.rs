use serde::{Deserialize, Serialize};

/// Every entity type the store knows about, in declaration order
///
/// Declaration order doubles as the tie-breaker when the insert order is
/// derived from the dependency table (see [`crate::ordering`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    Customer,
    CustomerDetail,
    Product,
    Order,
    OrderLine,
    SalesAgent,
    Courier,
    Shipment,
}

impl EntityKind {
    pub const ALL: [EntityKind; 8] = [
        EntityKind::Customer,
        EntityKind::CustomerDetail,
        EntityKind::Product,
        EntityKind::Order,
        EntityKind::OrderLine,
        EntityKind::SalesAgent,
        EntityKind::Courier,
        EntityKind::Shipment,
    ];

    /// Kinds whose rows must exist before a row of this kind can be inserted
    pub fn depends_on(self) -> &'static [EntityKind] {
        match self {
            EntityKind::Customer => &[],
            EntityKind::CustomerDetail => &[EntityKind::Customer],
            EntityKind::Product => &[],
            EntityKind::Order => &[EntityKind::Customer],
            EntityKind::OrderLine => &[EntityKind::Order, EntityKind::Product],
            EntityKind::SalesAgent => &[],
            EntityKind::Courier => &[],
            EntityKind::Shipment => &[
                EntityKind::Order,
                EntityKind::SalesAgent,
                EntityKind::Courier,
            ],
        }
    }

    /// Name of the array holding this kind in a snapshot document
    pub fn collection(self) -> &'static str {
        match self {
            EntityKind::Customer => "customers",
            EntityKind::CustomerDetail => "customerDetails",
            EntityKind::Product => "products",
            EntityKind::Order => "orders",
            EntityKind::OrderLine => "orderLines",
            EntityKind::SalesAgent => "salesAgents",
            EntityKind::Courier => "couriers",
            EntityKind::Shipment => "shipments",
        }
    }

    /// Backing table name
    pub fn table(self) -> &'static str {
        match self {
            EntityKind::Customer => "customer",
            EntityKind::CustomerDetail => "customer_detail",
            EntityKind::Product => "product",
            EntityKind::Order => "orders",
            EntityKind::OrderLine => "order_line",
            EntityKind::SalesAgent => "sales_agent",
            EntityKind::Courier => "courier",
            EntityKind::Shipment => "shipment",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.collection())
    }
}
