//! shipdesk CLI
//!
//! Command-line driver over the shipdesk store

use clap::{Parser, Subcommand, ValueEnum};
use shipdesk_core::logging_facility::{self, Profile};
use shipdesk_store::Database;
use std::path::{Path, PathBuf};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "shipdesk")]
#[command(about = "shipdesk - customers, orders and shipments over SQLite", long_about = None)]
struct Cli {
    /// Path of the SQLite database file
    #[arg(long, global = true, env = "SHIPDESK_DB", default_value = "shipdesk.db")]
    db: PathBuf,

    /// Log output format (written to stderr)
    #[arg(long, global = true, env = "SHIPDESK_LOG", value_enum, default_value_t = LogFormat::Dev)]
    log: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    /// Human-readable
    Dev,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    fn profile(self) -> Profile {
        match self {
            LogFormat::Dev => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Customers
    Customers(commands::customers::CustomersArgs),
    /// Customer contact details
    Details(commands::customers::DetailsArgs),
    /// Product catalog
    Products(commands::catalog::ProductsArgs),
    /// Orders
    Orders(commands::orders::OrdersArgs),
    /// Order lines
    Lines(commands::orders::LinesArgs),
    /// Sales agents
    Agents(commands::staff::AgentsArgs),
    /// Couriers
    Couriers(commands::staff::CouriersArgs),
    /// Shipments
    Shipments(commands::shipments::ShipmentsArgs),
    /// Whole-dataset export and import
    Snapshot(commands::snapshot::SnapshotArgs),
}

fn open_database(path: &Path) -> Result<Database, Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(Database::open(path)?)
}

fn run(command: Commands, db: &Database) -> commands::CliResult {
    match command {
        Commands::Customers(args) => commands::customers::execute_customers(args, db),
        Commands::Details(args) => commands::customers::execute_details(args, db),
        Commands::Products(args) => commands::catalog::execute(args, db),
        Commands::Orders(args) => commands::orders::execute_orders(args, db),
        Commands::Lines(args) => commands::orders::execute_lines(args, db),
        Commands::Agents(args) => commands::staff::execute_agents(args, db),
        Commands::Couriers(args) => commands::staff::execute_couriers(args, db),
        Commands::Shipments(args) => commands::shipments::execute(args, db),
        Commands::Snapshot(args) => commands::snapshot::execute(args, db),
    }
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log.profile());

    let result = open_database(&cli.db).and_then(|db| run(cli.command, &db));

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
