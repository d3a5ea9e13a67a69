//! Entity stores - insert / find-by-id / find-all / search per entity type
//!
//! Each table has a zero-sized store type implementing [`EntityStore`]. The
//! store functions take a borrowed connection so they compose inside a
//! transaction; [`Database`] wraps them so each call acquires (and releases)
//! its own connection.
//!
//! Inserts never check referenced rows up front. Duplicate keys, dangling
//! foreign keys and failed CHECKs are reported by SQLite and surface as
//! `ExErrorKind::ConstraintViolation`.

pub mod catalog;
pub mod customers;
pub mod hydration;
pub mod orders;
pub mod shipments;
pub mod staff;

pub use catalog::Products;
pub use customers::{CustomerDetails, Customers};
pub use hydration::Hydrate;
pub use orders::{OrderLines, Orders};
pub use shipments::Shipments;
pub use staff::{Couriers, SalesAgents};

use crate::db::{Database, CASEFOLD_FN};
use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, OptionalExtension, Params};
use shipdesk_core::model::{Entity, EntityKind};

/// Persistence contract for one entity table
pub trait EntityStore {
    type Entity: Entity + Hydrate + Clone;
    type Key: Copy + std::fmt::Debug;

    /// Projection and FROM clause, without WHERE or ORDER BY
    const SELECT: &'static str;

    /// Key ordering used by `find_all` and `search` (ascending id)
    const ORDER_BY: &'static str;

    /// Insert one row; returns the entity as stored
    fn insert(conn: &Connection, entity: &Self::Entity) -> Result<Self::Entity>;

    /// Look up one row; `Ok(None)` when absent
    fn find_by_id(conn: &Connection, key: Self::Key) -> Result<Option<Self::Entity>>;

    /// Every row, ascending by key
    fn find_all(conn: &Connection) -> Result<Vec<Self::Entity>> {
        let sql = format!("{} ORDER BY {}", Self::SELECT, Self::ORDER_BY);
        query_all(conn, &sql, [])
    }
}

/// Capability: case-insensitive substring search over the id (as text) and
/// a declared set of text columns
///
/// Both sides go through the connection's Unicode case fold, so `"MÁLAGA"`
/// finds `"Málaga"`.
pub trait Searchable: EntityStore {
    /// Id column, matched as text
    const ID_COLUMN: &'static str = "id";

    /// Text columns matched besides the id
    const SEARCH_COLUMNS: &'static [&'static str];

    fn search(conn: &Connection, needle: &str) -> Result<Vec<Self::Entity>> {
        let predicates: Vec<String> = std::iter::once(format!("CAST({} AS TEXT)", Self::ID_COLUMN))
            .chain(Self::SEARCH_COLUMNS.iter().map(|c| c.to_string()))
            .map(|column| {
                format!(
                    "{fold}({column}) LIKE {fold}(?1) ESCAPE '\\'",
                    fold = CASEFOLD_FN,
                    column = column
                )
            })
            .collect();

        let sql = format!(
            "{} WHERE {} ORDER BY {}",
            Self::SELECT,
            predicates.join(" OR "),
            Self::ORDER_BY
        );
        query_all(conn, &sql, [like_pattern(needle)])
    }
}

/// Wrap a user needle as a LIKE substring pattern, matching `%`, `_` and
/// `\` literally
fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Execute a parameterized INSERT, tagging failures with the entity
pub(crate) fn execute_insert<P: Params>(
    conn: &Connection,
    kind: EntityKind,
    key: String,
    sql: &str,
    params: P,
) -> Result<()> {
    conn.execute(sql, params).map_err(|e| {
        from_rusqlite(e)
            .with_op("insert")
            .with_entity(kind)
            .with_entity_id(key.clone())
    })?;

    tracing::debug!(entity = %kind, entity_id = %key, "inserted row");
    Ok(())
}

pub(crate) fn query_one<T: Hydrate, P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> Result<Option<T>> {
    conn.query_row(sql, params, |row| T::hydrate(row))
        .optional()
        .map_err(from_rusqlite)
}

pub(crate) fn query_all<T: Hydrate, P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> Result<Vec<T>> {
    let mut stmt = conn.prepare(sql).map_err(from_rusqlite)?;
    hydration::hydrate_all(&mut stmt, params)
}

/// Driver-facing surface: every store operation on its own connection
impl Database {
    pub fn insert<S: EntityStore>(&self, entity: &S::Entity) -> Result<S::Entity> {
        self.with_connection(|conn| S::insert(conn, entity))
    }

    pub fn find_by_id<S: EntityStore>(&self, key: S::Key) -> Result<Option<S::Entity>> {
        self.with_connection(|conn| S::find_by_id(conn, key))
    }

    pub fn find_all<S: EntityStore>(&self) -> Result<Vec<S::Entity>> {
        self.with_connection(|conn| S::find_all(conn))
    }

    pub fn search<S: Searchable>(&self, needle: &str) -> Result<Vec<S::Entity>> {
        self.with_connection(|conn| S::search(conn, needle))
    }
}
