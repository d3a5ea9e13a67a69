//! Snapshot import
//!
//! Replays a snapshot through the entity stores in the insert order computed
//! by `shipdesk_core::ordering`. There is no deduplication and no upsert; the
//! first rejected item stops the import and is reported with its entity kind
//! and zero-based ordinal. What happens to the rows inserted before it
//! depends on the [`ImportMode`].

use crate::db::Database;
use crate::errors::Result;
use crate::repo::{
    Couriers, CustomerDetails, Customers, EntityStore, OrderLines, Orders, Products, SalesAgents,
    Shipments,
};
use rusqlite::Connection;
use shipdesk_core::model::{Entity, EntityKind};
use shipdesk_core::ordering::insert_order;
use shipdesk_core::snapshot::read_from_path;
use shipdesk_core::{log_op_end, log_op_error, log_op_start, ExError, Snapshot};
use std::collections::BTreeMap;
use std::path::Path;

const OP_IMPORT: &str = "import_snapshot";

/// How inserts of one import are committed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportMode {
    /// Each insert commits on its own connection. A failure leaves the rows
    /// already inserted in place; since earlier kinds never depend on later
    /// ones, that partial state is referentially sound.
    #[default]
    Incremental,
    /// The whole import is one transaction: all rows or none
    Atomic,
}

/// Rows inserted by a successful import, per entity kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    counts: BTreeMap<EntityKind, usize>,
}

impl ImportReport {
    fn record(&mut self, kind: EntityKind) {
        *self.counts.entry(kind).or_insert(0) += 1;
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Non-zero counts, in declaration order of the kinds
    pub fn counts(&self) -> impl Iterator<Item = (EntityKind, usize)> + '_ {
        self.counts.iter().map(|(kind, count)| (*kind, *count))
    }
}

/// One insert, ready to run against whatever connection the mode provides
type Step<'a> = &'a dyn Fn(&Connection) -> Result<()>;

/// Insert every item of `snapshot` into `db`
pub fn import_snapshot(db: &Database, snapshot: &Snapshot, mode: ImportMode) -> Result<ImportReport> {
    log_op_start!(OP_IMPORT, mode = ?mode, rows = snapshot.total_rows() as u64);
    let start = std::time::Instant::now();

    let result = match mode {
        ImportMode::Incremental => replay(snapshot, |step: Step<'_>| db.with_connection(step)),
        ImportMode::Atomic => db.with_transaction(|tx| {
            let conn: &Connection = tx;
            replay(snapshot, |step: Step<'_>| step(conn))
        }),
    };

    let report = result.map_err(|e| {
        log_op_error!(
            OP_IMPORT,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        OP_IMPORT,
        duration_ms = start.elapsed().as_millis() as u64,
        rows_inserted = report.total() as u64
    );

    Ok(report)
}

/// Parse the document at `path`, then import it
///
/// A missing or malformed file fails before any insert is attempted.
pub fn import_from_path(db: &Database, path: &Path, mode: ImportMode) -> Result<ImportReport> {
    let snapshot = read_from_path(path)?;
    import_snapshot(db, &snapshot, mode)
}

fn replay<R>(snapshot: &Snapshot, mut run: R) -> Result<ImportReport>
where
    R: FnMut(Step<'_>) -> Result<()>,
{
    let mut report = ImportReport::default();

    for kind in insert_order()? {
        let run = &mut run;
        let report = &mut report;
        match kind {
            EntityKind::Customer => replay_kind::<Customers, _>(&snapshot.customers, run, report),
            EntityKind::CustomerDetail => {
                replay_kind::<CustomerDetails, _>(&snapshot.customer_details, run, report)
            }
            EntityKind::Product => replay_kind::<Products, _>(&snapshot.products, run, report),
            EntityKind::Order => replay_kind::<Orders, _>(&snapshot.orders, run, report),
            EntityKind::OrderLine => {
                replay_kind::<OrderLines, _>(&snapshot.order_lines, run, report)
            }
            EntityKind::SalesAgent => {
                replay_kind::<SalesAgents, _>(&snapshot.sales_agents, run, report)
            }
            EntityKind::Courier => replay_kind::<Couriers, _>(&snapshot.couriers, run, report),
            EntityKind::Shipment => replay_kind::<Shipments, _>(&snapshot.shipments, run, report),
        }?;
    }

    Ok(report)
}

fn replay_kind<S, R>(items: &[S::Entity], run: &mut R, report: &mut ImportReport) -> Result<()>
where
    S: EntityStore,
    R: FnMut(Step<'_>) -> Result<()>,
{
    let kind = <S::Entity as Entity>::KIND;

    for (ordinal, item) in items.iter().enumerate() {
        run(&|conn: &Connection| S::insert(conn, item).map(|_| ()))
            .map_err(|err| annotate(err, kind, ordinal, item.key()))?;
        report.record(kind);
    }

    if !items.is_empty() {
        tracing::debug!(entity = %kind, rows = items.len(), "replayed collection");
    }

    Ok(())
}

/// Re-tag a store error with the import position, keeping its kind and
/// constraint detail
fn annotate(err: ExError, kind: EntityKind, ordinal: usize, key: String) -> ExError {
    let mut annotated = ExError::new(err.kind())
        .with_op(OP_IMPORT)
        .with_entity(kind)
        .with_ordinal(ordinal)
        .with_message(format!(
            "{} item #{} (key {}) rejected: {}",
            kind,
            ordinal,
            key,
            err.message()
        ))
        .with_entity_id(key);

    if let Some(constraint) = err.constraint() {
        annotated = annotated.with_constraint(constraint);
    }

    annotated.with_source(err)
}
