//! Subcommands, one module per area
//!
//! Read commands print one line per row; `add` prints the stored row.

pub mod catalog;
pub mod customers;
pub mod orders;
pub mod render;
pub mod shipments;
pub mod snapshot;
pub mod staff;

use render::Render;
use shipdesk_core::model::Entity;
use shipdesk_core::{ExError, ExErrorKind};
use shipdesk_store::{Database, EntityStore, Searchable};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

pub(crate) fn print_rows<T: Render>(rows: &[T]) {
    if rows.is_empty() {
        println!("(no rows)");
    }
    for row in rows {
        println!("{}", row.render());
    }
}

pub(crate) fn list<S: EntityStore>(db: &Database) -> CliResult
where
    S::Entity: Render,
{
    print_rows(&db.find_all::<S>()?);
    Ok(())
}

pub(crate) fn get<S: EntityStore>(db: &Database, key: S::Key) -> CliResult
where
    S::Entity: Render,
{
    let found = db
        .find_by_id::<S>(key)?
        .ok_or_else(|| not_found::<S>(key))?;
    println!("{}", found.render());
    Ok(())
}

pub(crate) fn add<S: EntityStore>(db: &Database, entity: S::Entity) -> CliResult
where
    S::Entity: Render,
{
    let stored = db.insert::<S>(&entity)?;
    println!("✓ Added {} {}", <S::Entity as Entity>::KIND, stored.key());
    println!("{}", stored.render());
    Ok(())
}

pub(crate) fn search<S: Searchable>(db: &Database, needle: &str) -> CliResult
where
    S::Entity: Render,
{
    print_rows(&db.search::<S>(needle)?);
    Ok(())
}

/// Absence is an `Option` in the store; the driver reports it as an error
pub(crate) fn not_found<S: EntityStore>(key: S::Key) -> ExError {
    ExError::new(ExErrorKind::NotFound)
        .with_op("get")
        .with_entity(<S::Entity as Entity>::KIND)
        .with_entity_id(format!("{:?}", key))
        .with_message("no such row")
}
