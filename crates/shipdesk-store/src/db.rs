//! Database connection management
//!
//! [`Database`] is the connection factory. It does not hold an open
//! connection for callers: every operation acquires its own connection
//! through [`Database::with_connection`] (or [`Database::with_transaction`])
//! and the connection is dropped when the closure returns, on success and on
//! failure alike.

use crate::errors::{from_rusqlite, Result};
use crate::migrations;
use rusqlite::functions::{Context, FunctionFlags};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, Transaction};
use std::path::{Path, PathBuf};

/// Where the backing store lives
#[derive(Debug, Clone)]
enum Target {
    File(PathBuf),
    /// Shared-cache in-memory database, addressed by URI
    Memory(String),
}

/// Connection factory for the shipdesk store
pub struct Database {
    target: Target,
    // A shared-cache in-memory database is discarded once its last
    // connection closes, so in-memory stores keep one idle connection.
    _keep_alive: Option<Connection>,
}

impl Database {
    /// Open (creating the file if needed) a database and apply migrations
    ///
    /// The parent directory must already exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db = Self {
            target: Target::File(path.as_ref().to_path_buf()),
            _keep_alive: None,
        };
        db.migrate()?;
        Ok(db)
    }

    /// Create an isolated in-memory database (for tests and demos)
    pub fn in_memory() -> Result<Self> {
        let uri = format!(
            "file:shipdesk-{}?mode=memory&cache=shared",
            uuid::Uuid::new_v4().simple()
        );
        let keeper = Connection::open(&uri).map_err(from_rusqlite)?;

        let db = Self {
            target: Target::Memory(uri),
            _keep_alive: Some(keeper),
        };
        db.migrate()?;
        Ok(db)
    }

    /// Path of the database file, if file-backed
    pub fn path(&self) -> Option<&Path> {
        match &self.target {
            Target::File(path) => Some(path),
            Target::Memory(_) => None,
        }
    }

    /// Acquire a new configured connection
    ///
    /// Prefer [`Database::with_connection`], which scopes the connection to
    /// a single operation.
    pub fn connect(&self) -> Result<Connection> {
        let conn = match &self.target {
            Target::File(path) => Connection::open(path),
            Target::Memory(uri) => Connection::open(uri),
        }
        .map_err(|e| from_rusqlite(e).with_op("connect"))?;

        configure(&conn, matches!(self.target, Target::File(_)))?;
        Ok(conn)
    }

    /// Run `f` with a connection acquired for its duration only
    pub fn with_connection<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.connect()?;
        f(&conn)
    }

    /// Run `f` inside one transaction
    ///
    /// Commits when `f` succeeds. When `f` fails the transaction is dropped
    /// uncommitted, which rolls back every write it made.
    pub fn with_transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T>,
    {
        let mut conn = self.connect()?;
        let tx = conn.transaction().map_err(from_rusqlite)?;
        let value = f(&tx)?;
        tx.commit().map_err(from_rusqlite)?;
        Ok(value)
    }

    fn migrate(&self) -> Result<()> {
        let mut conn = self.connect()?;
        migrations::apply_migrations(&mut conn)
    }
}

/// Name of the Unicode lower-casing SQL function registered on every
/// connection. SQLite's own `lower()` and `LIKE` fold ASCII only.
pub(crate) const CASEFOLD_FN: &str = "casefold";

/// Configure a connection
///
/// Foreign keys are off by default in SQLite; the store relies on them to
/// reject dangling references.
fn configure(conn: &Connection, file_backed: bool) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", "ON")
        .map_err(from_rusqlite)?;

    conn.create_scalar_function(
        CASEFOLD_FN,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        casefold,
    )
    .map_err(from_rusqlite)?;

    if file_backed {
        // journal_mode answers with the mode now in effect
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| {
            row.get::<_, String>(0)
        })
        .map_err(from_rusqlite)?;
    }

    Ok(())
}

fn casefold(ctx: &Context<'_>) -> rusqlite::Result<Option<String>> {
    Ok(match ctx.get_raw(0) {
        ValueRef::Text(bytes) => Some(String::from_utf8_lossy(bytes).to_lowercase()),
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Null | ValueRef::Blob(_) => None,
    })
}
