//! Snapshot export / import

use super::CliResult;
use clap::{Args, Subcommand};
use shipdesk_store::{export_to_path, import_from_path, Database, ImportMode};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SnapshotArgs {
    #[command(subcommand)]
    pub command: SnapshotCommand,
}

#[derive(Debug, Subcommand)]
pub enum SnapshotCommand {
    /// Write every collection to a JSON document
    Export { path: PathBuf },
    /// Insert every item of a JSON document, in dependency order
    Import {
        path: PathBuf,
        /// Run the whole import in one transaction (all rows or none)
        #[arg(long)]
        atomic: bool,
    },
}

pub fn execute(args: SnapshotArgs, db: &Database) -> CliResult {
    match args.command {
        SnapshotCommand::Export { path } => {
            let digest = export_to_path(db, &path)?;
            println!("Snapshot exported:");
            println!("  path: {}", path.display());
            println!("  digest: {}", digest);
        }
        SnapshotCommand::Import { path, atomic } => {
            let mode = if atomic {
                ImportMode::Atomic
            } else {
                ImportMode::Incremental
            };
            let report = import_from_path(db, &path, mode)?;
            println!("Snapshot imported ({:?}):", mode);
            for (kind, count) in report.counts() {
                println!("  {}: {}", kind, count);
            }
            println!("  total: {}", report.total());
        }
    }
    Ok(())
}
