//! Snapshot export

use crate::db::Database;
use crate::errors::Result;
use crate::repo::{
    Couriers, CustomerDetails, Customers, EntityStore, OrderLines, Orders, Products, SalesAgents,
    Shipments,
};
use rusqlite::Connection;
use shipdesk_core::snapshot::{compute_snapshot_digest, write_to_path};
use shipdesk_core::{log_op_end, log_op_error, log_op_start, Snapshot};
use std::path::Path;

const OP_EXPORT: &str = "export_snapshot";

/// Read every collection, each ascending by key, inside one read transaction
///
/// The transaction pins one view of the store, so rows committed by other
/// connections while the export runs are either wholly in or wholly out.
pub fn export_snapshot(db: &Database) -> Result<Snapshot> {
    log_op_start!(OP_EXPORT);
    let start = std::time::Instant::now();

    let snapshot = db
        .with_transaction(|tx| read_all(tx))
        .map_err(|e| {
            let e = e.with_op(OP_EXPORT);
            log_op_error!(
                OP_EXPORT,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!(
        OP_EXPORT,
        duration_ms = start.elapsed().as_millis() as u64,
        rows = snapshot.total_rows() as u64
    );

    Ok(snapshot)
}

fn read_all(conn: &Connection) -> Result<Snapshot> {
    Ok(Snapshot {
        customers: Customers::find_all(conn)?,
        customer_details: CustomerDetails::find_all(conn)?,
        products: Products::find_all(conn)?,
        orders: Orders::find_all(conn)?,
        order_lines: OrderLines::find_all(conn)?,
        sales_agents: SalesAgents::find_all(conn)?,
        couriers: Couriers::find_all(conn)?,
        shipments: Shipments::find_all(conn)?,
    })
}

/// Export to a JSON file at `path`, returning the snapshot's content digest
pub fn export_to_path(db: &Database, path: &Path) -> Result<String> {
    let snapshot = export_snapshot(db)?;
    write_to_path(&snapshot, path)?;
    let digest = compute_snapshot_digest(&snapshot)?;

    tracing::debug!(path = %path.display(), digest = %digest, "snapshot written");

    Ok(digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shipdesk_core::model::Customer;

    #[test]
    fn test_read_transaction_ignores_concurrent_commits() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(dir.path().join("shipdesk.db")).unwrap();
        db.insert::<Customers>(&Customer::new(1, "Ana", "ana@x.com"))
            .unwrap();

        let (first, second) = db
            .with_transaction(|tx| {
                let first = read_all(tx)?;
                // Committed on a separate connection while the read is open
                db.insert::<Customers>(&Customer::new(2, "Bruno", "bruno@y.org"))?;
                let second = read_all(tx)?;
                Ok((first, second))
            })
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(second.customers.len(), 1);

        // A fresh export sees the new row
        let after = export_snapshot(&db).unwrap();
        assert_eq!(after.customers.len(), 2);
    }
}
