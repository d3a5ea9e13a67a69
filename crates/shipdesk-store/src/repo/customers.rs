use super::{execute_insert, query_one, EntityStore, Searchable};
use crate::errors::Result;
use rusqlite::{params, Connection};
use shipdesk_core::model::{Customer, CustomerDetail, CustomerId, Entity};

pub struct Customers;

impl EntityStore for Customers {
    type Entity = Customer;
    type Key = CustomerId;

    const SELECT: &'static str = "SELECT id, name, email FROM customer";
    const ORDER_BY: &'static str = "id";

    fn insert(conn: &Connection, customer: &Customer) -> Result<Customer> {
        execute_insert(
            conn,
            Customer::KIND,
            customer.key(),
            "INSERT INTO customer (id, name, email) VALUES (?1, ?2, ?3)",
            params![customer.id, customer.name, customer.email],
        )?;
        Ok(customer.clone())
    }

    fn find_by_id(conn: &Connection, id: CustomerId) -> Result<Option<Customer>> {
        query_one(conn, &format!("{} WHERE id = ?1", Self::SELECT), [id])
    }
}

impl Searchable for Customers {
    const SEARCH_COLUMNS: &'static [&'static str] = &["name", "email"];
}

/// Contact details, keyed by the owning customer's id
pub struct CustomerDetails;

impl EntityStore for CustomerDetails {
    type Entity = CustomerDetail;
    type Key = CustomerId;

    const SELECT: &'static str =
        "SELECT customer_id, address, phone, notes FROM customer_detail";
    const ORDER_BY: &'static str = "customer_id";

    fn insert(conn: &Connection, detail: &CustomerDetail) -> Result<CustomerDetail> {
        execute_insert(
            conn,
            CustomerDetail::KIND,
            detail.key(),
            "INSERT INTO customer_detail (customer_id, address, phone, notes)
             VALUES (?1, ?2, ?3, ?4)",
            params![detail.customer_id, detail.address, detail.phone, detail.notes],
        )?;
        Ok(detail.clone())
    }

    fn find_by_id(conn: &Connection, customer_id: CustomerId) -> Result<Option<CustomerDetail>> {
        query_one(
            conn,
            &format!("{} WHERE customer_id = ?1", Self::SELECT),
            [customer_id],
        )
    }
}
