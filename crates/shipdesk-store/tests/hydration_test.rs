// Integration tests for shipment hydration through the aliased join

mod common;

use common::{date, fresh_db};
use shipdesk_core::model::{
    Courier, CourierView, Customer, Order, OrderView, SalesAgent, SalesAgentView, Shipment,
};
use shipdesk_core::{ConstraintKind, ExErrorKind};
use shipdesk_store::{Couriers, Customers, Orders, SalesAgents, Shipments};

fn seed_references(db: &shipdesk_store::Database) -> (Order, SalesAgent, Courier) {
    let order = Order::new(5, 1, date(2024, 3, 9));
    let agent = SalesAgent::new(2, "Luis", "North");
    let courier = Courier::new(3, "Max", "Van");

    db.insert::<Customers>(&Customer::new(1, "Ana", "ana@x.com"))
        .unwrap();
    db.insert::<Orders>(&order).unwrap();
    db.insert::<SalesAgents>(&agent).unwrap();
    db.insert::<Couriers>(&courier).unwrap();

    (order, agent, courier)
}

#[test]
fn test_shipment_hydrates_embedded_views() {
    // Given: an order, a sales agent and a courier
    let db = fresh_db();
    let (order, agent, courier) = seed_references(&db);

    // When: a shipment linking them is inserted and read back
    db.insert::<Shipments>(&Shipment::linking(9, &order, &agent, &courier))
        .unwrap();
    let shipment = db.find_by_id::<Shipments>(9).unwrap().unwrap();

    // Then: the embedded views hold exactly the projected columns
    assert_eq!(shipment.id, 9);
    assert_eq!(
        shipment.order,
        OrderView {
            id: 5,
            customer_id: 1
        }
    );
    assert_eq!(
        shipment.sales_agent,
        SalesAgentView {
            id: 2,
            name: "Luis".to_string(),
            sales_zone: "North".to_string()
        }
    );
    assert_eq!(
        shipment.courier,
        CourierView {
            id: 3,
            name: "Max".to_string(),
            vehicle: "Van".to_string()
        }
    );
}

#[test]
fn test_shipment_ids_never_collide_with_referenced_ids() {
    // Every id differs, so a positional or un-aliased read would be visible
    let db = fresh_db();
    let (order, agent, courier) = seed_references(&db);

    db.insert::<Shipments>(&Shipment::linking(42, &order, &agent, &courier))
        .unwrap();

    let all = db.find_all::<Shipments>().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, 42);
    assert_eq!(all[0].order.id, 5);
    assert_eq!(all[0].sales_agent.id, 2);
    assert_eq!(all[0].courier.id, 3);
}

#[test]
fn test_shipment_insert_returns_stored_views() {
    // Given: a shipment whose embedded copies are stale
    let db = fresh_db();
    let (order, agent, courier) = seed_references(&db);
    let mut shipment = Shipment::linking(9, &order, &agent, &courier);
    shipment.sales_agent.name = "Stale".to_string();

    // When: it is inserted
    let stored = db.insert::<Shipments>(&shipment).unwrap();

    // Then: only the ids were written; the agent table is untouched
    assert_eq!(stored.sales_agent.name, "Luis");
    assert_eq!(
        db.find_by_id::<SalesAgents>(2).unwrap().unwrap().name,
        "Luis"
    );
}

#[test]
fn test_shipment_with_missing_reference_is_rejected() {
    let db = fresh_db();
    let (order, agent, _) = seed_references(&db);
    let ghost = Courier::new(30, "Ghost", "None");

    let err = db
        .insert::<Shipments>(&Shipment::linking(9, &order, &agent, &ghost))
        .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(err.constraint(), Some(ConstraintKind::ForeignKey));
    assert!(db.find_all::<Shipments>().unwrap().is_empty());
}
