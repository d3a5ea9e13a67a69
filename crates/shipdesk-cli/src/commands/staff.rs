use super::{add, get, list, search, CliResult};
use clap::{Args, Subcommand};
use shipdesk_core::model::{Courier, SalesAgent};
use shipdesk_store::{Couriers, Database, SalesAgents};

#[derive(Debug, Args)]
pub struct AgentsArgs {
    #[command(subcommand)]
    pub command: AgentCommand,
}

#[derive(Debug, Subcommand)]
pub enum AgentCommand {
    List,
    Get { id: i64 },
    Add { id: i64, name: String, zone: String },
    /// Case-insensitive substring search over id, name and sales zone
    Search { needle: String },
}

pub fn execute_agents(args: AgentsArgs, db: &Database) -> CliResult {
    match args.command {
        AgentCommand::List => list::<SalesAgents>(db),
        AgentCommand::Get { id } => get::<SalesAgents>(db, id),
        AgentCommand::Add { id, name, zone } => add::<SalesAgents>(db, SalesAgent::new(id, name, zone)),
        AgentCommand::Search { needle } => search::<SalesAgents>(db, &needle),
    }
}

#[derive(Debug, Args)]
pub struct CouriersArgs {
    #[command(subcommand)]
    pub command: CourierCommand,
}

#[derive(Debug, Subcommand)]
pub enum CourierCommand {
    List,
    Get { id: i64 },
    Add { id: i64, name: String, vehicle: String },
    /// Case-insensitive substring search over id, name and vehicle
    Search { needle: String },
}

pub fn execute_couriers(args: CouriersArgs, db: &Database) -> CliResult {
    match args.command {
        CourierCommand::List => list::<Couriers>(db),
        CourierCommand::Get { id } => get::<Couriers>(db, id),
        CourierCommand::Add { id, name, vehicle } => {
            add::<Couriers>(db, Courier::new(id, name, vehicle))
        }
        CourierCommand::Search { needle } => search::<Couriers>(db, &needle),
    }
}
