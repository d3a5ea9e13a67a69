use super::{execute_insert, query_one, EntityStore, Searchable};
use crate::errors::Result;
use rusqlite::{params, Connection};
use shipdesk_core::model::{Entity, Product, ProductId};

pub struct Products;

impl EntityStore for Products {
    type Entity = Product;
    type Key = ProductId;

    const SELECT: &'static str = "SELECT id, name, price FROM product";
    const ORDER_BY: &'static str = "id";

    fn insert(conn: &Connection, product: &Product) -> Result<Product> {
        execute_insert(
            conn,
            Product::KIND,
            product.key(),
            "INSERT INTO product (id, name, price) VALUES (?1, ?2, ?3)",
            params![product.id, product.name, product.price],
        )?;
        Ok(product.clone())
    }

    fn find_by_id(conn: &Connection, id: ProductId) -> Result<Option<Product>> {
        query_one(conn, &format!("{} WHERE id = ?1", Self::SELECT), [id])
    }
}

impl Searchable for Products {
    const SEARCH_COLUMNS: &'static [&'static str] = &["name"];
}
