use super::{add, get, list, search, CliResult};
use clap::{Args, Subcommand};
use shipdesk_core::model::Product;
use shipdesk_store::{Database, Products};

#[derive(Debug, Args)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub command: ProductCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProductCommand {
    List,
    Get { id: i64 },
    Add { id: i64, name: String, price: f64 },
    /// Case-insensitive substring search over id and name
    Search { needle: String },
}

pub fn execute(args: ProductsArgs, db: &Database) -> CliResult {
    match args.command {
        ProductCommand::List => list::<Products>(db),
        ProductCommand::Get { id } => get::<Products>(db, id),
        ProductCommand::Add { id, name, price } => add::<Products>(db, Product::new(id, name, price)),
        ProductCommand::Search { needle } => search::<Products>(db, &needle),
    }
}
