// Shared fixtures for store integration tests
#![allow(dead_code)]

use chrono::NaiveDate;
use shipdesk_core::model::{
    Courier, Customer, CustomerDetail, Order, OrderLine, Product, SalesAgent, Shipment,
};
use shipdesk_core::Snapshot;
use shipdesk_store::Database;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn fresh_db() -> Database {
    Database::in_memory().expect("Failed to create in-memory database")
}

/// A small dataset touching every table
pub fn sample_snapshot() -> Snapshot {
    let order = Order::new(5, 1, date(2024, 3, 9));
    let agent = SalesAgent::new(2, "Luis", "North");
    let courier = Courier::new(3, "Max", "Van");

    Snapshot {
        customers: vec![
            Customer::new(1, "Ana", "ana@x.com"),
            Customer::new(2, "Bruno", "bruno@y.org"),
        ],
        customer_details: vec![CustomerDetail::new(1, "Calle 1", "555", "")],
        products: vec![Product::new(10, "Pen", 1.5), Product::new(11, "Notebook", 4.0)],
        orders: vec![order.clone(), Order::new(6, 2, date(2024, 3, 10))],
        order_lines: vec![
            OrderLine::new(5, 10, 4, 1.5),
            OrderLine::new(5, 11, 1, 4.0),
            OrderLine::new(6, 10, 2, 1.25),
        ],
        sales_agents: vec![agent.clone()],
        couriers: vec![courier.clone()],
        shipments: vec![Shipment::linking(7, &order, &agent, &courier)],
    }
}
