// Integration tests for the per-entity stores: insert, find_by_id, find_all
// and constraint reporting

mod common;

use common::{date, fresh_db};
use shipdesk_core::model::{
    Courier, Customer, CustomerDetail, Order, OrderLine, Product, SalesAgent,
};
use shipdesk_core::{ConstraintKind, EntityKind, ExErrorKind};
use shipdesk_store::{
    Couriers, CustomerDetails, Customers, OrderLines, Orders, Products, SalesAgents,
};

#[test]
fn test_insert_then_find_by_id_returns_equal_entity() {
    // Given: one row of every single-table kind
    let db = fresh_db();
    let customer = Customer::new(1, "Ana", "ana@x.com");
    let detail = CustomerDetail::new(1, "Calle 1", "555", "");
    let product = Product::new(10, "Pen", 1.5);
    let order = Order::new(5, 1, date(2024, 3, 9));
    let line = OrderLine::new(5, 10, 4, 1.5);
    let agent = SalesAgent::new(2, "Luis", "North");
    let courier = Courier::new(3, "Max", "Van");

    // When: they are inserted in dependency order
    assert_eq!(db.insert::<Customers>(&customer).unwrap(), customer);
    assert_eq!(db.insert::<CustomerDetails>(&detail).unwrap(), detail);
    assert_eq!(db.insert::<Products>(&product).unwrap(), product);
    assert_eq!(db.insert::<Orders>(&order).unwrap(), order);
    assert_eq!(db.insert::<OrderLines>(&line).unwrap(), line);
    assert_eq!(db.insert::<SalesAgents>(&agent).unwrap(), agent);
    assert_eq!(db.insert::<Couriers>(&courier).unwrap(), courier);

    // Then: each reads back field for field
    assert_eq!(db.find_by_id::<Customers>(1).unwrap(), Some(customer));
    assert_eq!(db.find_by_id::<CustomerDetails>(1).unwrap(), Some(detail));
    assert_eq!(db.find_by_id::<Products>(10).unwrap(), Some(product));
    assert_eq!(db.find_by_id::<Orders>(5).unwrap(), Some(order));
    assert_eq!(db.find_by_id::<OrderLines>((5, 10)).unwrap(), Some(line));
    assert_eq!(db.find_by_id::<SalesAgents>(2).unwrap(), Some(agent));
    assert_eq!(db.find_by_id::<Couriers>(3).unwrap(), Some(courier));
}

#[test]
fn test_find_by_id_absent_is_none() {
    let db = fresh_db();
    assert_eq!(db.find_by_id::<Customers>(42).unwrap(), None);
    assert_eq!(db.find_by_id::<OrderLines>((1, 1)).unwrap(), None);
}

#[test]
fn test_customer_detail_scenario() {
    // Given: customer Ana
    let db = fresh_db();
    db.insert::<Customers>(&Customer::new(1, "Ana", "ana@x.com"))
        .unwrap();

    // When: her detail is inserted
    let detail = CustomerDetail::new(1, "Calle 1", "555", "");
    db.insert::<CustomerDetails>(&detail).unwrap();

    // Then: a second detail for the same customer is a duplicate key
    let err = db
        .insert::<CustomerDetails>(&CustomerDetail::new(1, "Calle 2", "556", "again"))
        .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(err.constraint(), Some(ConstraintKind::PrimaryKey));
    assert_eq!(err.entity(), Some(EntityKind::CustomerDetail));
    assert_eq!(err.entity_id(), Some("1"));

    // And: a detail for a missing customer is a missing reference
    let err = db
        .insert::<CustomerDetails>(&CustomerDetail::new(99, "Nowhere", "000", ""))
        .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(err.constraint(), Some(ConstraintKind::ForeignKey));

    // And: only the first detail is stored
    assert_eq!(db.find_all::<CustomerDetails>().unwrap(), vec![detail]);
}

#[test]
fn test_duplicate_id_is_constraint_violation_for_every_kind() {
    let db = fresh_db();
    db.insert::<Customers>(&Customer::new(1, "Ana", "ana@x.com"))
        .unwrap();
    db.insert::<Products>(&Product::new(10, "Pen", 1.5)).unwrap();
    db.insert::<Orders>(&Order::new(5, 1, date(2024, 3, 9)))
        .unwrap();
    db.insert::<OrderLines>(&OrderLine::new(5, 10, 1, 1.5))
        .unwrap();
    db.insert::<SalesAgents>(&SalesAgent::new(2, "Luis", "North"))
        .unwrap();
    db.insert::<Couriers>(&Courier::new(3, "Max", "Van")).unwrap();

    let errors = vec![
        db.insert::<Customers>(&Customer::new(1, "Other", "o@x.com"))
            .unwrap_err(),
        db.insert::<Products>(&Product::new(10, "Other", 2.0))
            .unwrap_err(),
        db.insert::<Orders>(&Order::new(5, 1, date(2024, 4, 1)))
            .unwrap_err(),
        db.insert::<OrderLines>(&OrderLine::new(5, 10, 9, 1.0))
            .unwrap_err(),
        db.insert::<SalesAgents>(&SalesAgent::new(2, "Other", "South"))
            .unwrap_err(),
        db.insert::<Couriers>(&Courier::new(3, "Other", "Bike"))
            .unwrap_err(),
    ];

    for err in errors {
        assert!(err.is_constraint_violation(), "unexpected error: {}", err);
        assert_eq!(err.op(), Some("insert"));
    }
}

#[test]
fn test_missing_reference_is_constraint_violation() {
    let db = fresh_db();
    db.insert::<Customers>(&Customer::new(1, "Ana", "ana@x.com"))
        .unwrap();
    db.insert::<Orders>(&Order::new(5, 1, date(2024, 3, 9)))
        .unwrap();

    // Order for a missing customer
    let err = db
        .insert::<Orders>(&Order::new(6, 99, date(2024, 3, 9)))
        .unwrap_err();
    assert_eq!(err.constraint(), Some(ConstraintKind::ForeignKey));

    // Line for a missing product
    let err = db
        .insert::<OrderLines>(&OrderLine::new(5, 77, 1, 1.0))
        .unwrap_err();
    assert_eq!(err.constraint(), Some(ConstraintKind::ForeignKey));
    assert_eq!(err.entity_id(), Some("5/77"));
}

#[test]
fn test_check_constraints_reject_invalid_values() {
    let db = fresh_db();
    db.insert::<Customers>(&Customer::new(1, "Ana", "ana@x.com"))
        .unwrap();
    db.insert::<Products>(&Product::new(10, "Pen", 1.5)).unwrap();
    db.insert::<Orders>(&Order::new(5, 1, date(2024, 3, 9)))
        .unwrap();

    let err = db
        .insert::<Products>(&Product::new(11, "Refund", -1.0))
        .unwrap_err();
    assert_eq!(err.constraint(), Some(ConstraintKind::Check));

    let err = db
        .insert::<OrderLines>(&OrderLine::new(5, 10, 0, 1.5))
        .unwrap_err();
    assert_eq!(err.constraint(), Some(ConstraintKind::Check));
}

#[test]
fn test_find_all_is_ascending_by_id() {
    // Given: customers inserted out of order
    let db = fresh_db();
    for id in [7, 2, 9, 1, 4] {
        db.insert::<Customers>(&Customer::new(id, format!("c{}", id), "c@x.com"))
            .unwrap();
    }

    // Then: find_all returns them by ascending id
    let ids: Vec<i64> = db
        .find_all::<Customers>()
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 4, 7, 9]);
}

#[test]
fn test_order_lines_by_order_and_total() {
    let db = fresh_db();
    db.insert::<Customers>(&Customer::new(1, "Ana", "ana@x.com"))
        .unwrap();
    for product in [Product::new(11, "Notebook", 4.0), Product::new(10, "Pen", 1.5)] {
        db.insert::<Products>(&product).unwrap();
    }
    db.insert::<Orders>(&Order::new(5, 1, date(2024, 3, 9)))
        .unwrap();
    db.insert::<Orders>(&Order::new(6, 1, date(2024, 3, 10)))
        .unwrap();
    db.insert::<OrderLines>(&OrderLine::new(5, 11, 1, 4.0))
        .unwrap();
    db.insert::<OrderLines>(&OrderLine::new(5, 10, 4, 1.5))
        .unwrap();

    let (lines, total, empty_total) = db
        .with_connection(|conn| {
            Ok((
                OrderLines::find_by_order(conn, 5)?,
                Orders::total(conn, 5)?,
                Orders::total(conn, 6)?,
            ))
        })
        .unwrap();

    let products: Vec<i64> = lines.iter().map(|l| l.product_id).collect();
    assert_eq!(products, vec![10, 11]);
    assert!((total - 10.0).abs() < 1e-9);
    assert_eq!(empty_total, 0.0);
}
