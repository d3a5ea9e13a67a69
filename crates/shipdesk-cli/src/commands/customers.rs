use super::{add, get, list, search, CliResult};
use clap::{Args, Subcommand};
use shipdesk_core::model::{Customer, CustomerDetail};
use shipdesk_store::{CustomerDetails, Customers, Database};

#[derive(Debug, Args)]
pub struct CustomersArgs {
    #[command(subcommand)]
    pub command: CustomerCommand,
}

#[derive(Debug, Subcommand)]
pub enum CustomerCommand {
    /// List every customer by ascending id
    List,
    /// Show one customer
    Get { id: i64 },
    /// Add a customer
    Add {
        id: i64,
        name: String,
        email: String,
    },
    /// Case-insensitive substring search over id, name and email
    Search { needle: String },
}

pub fn execute_customers(args: CustomersArgs, db: &Database) -> CliResult {
    match args.command {
        CustomerCommand::List => list::<Customers>(db),
        CustomerCommand::Get { id } => get::<Customers>(db, id),
        CustomerCommand::Add { id, name, email } => {
            add::<Customers>(db, Customer::new(id, name, email))
        }
        CustomerCommand::Search { needle } => search::<Customers>(db, &needle),
    }
}

#[derive(Debug, Args)]
pub struct DetailsArgs {
    #[command(subcommand)]
    pub command: DetailCommand,
}

#[derive(Debug, Subcommand)]
pub enum DetailCommand {
    /// List every detail record by ascending customer id
    List,
    /// Show the detail record of one customer
    Get { customer_id: i64 },
    /// Add the detail record of an existing customer
    Add {
        customer_id: i64,
        address: String,
        phone: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
}

pub fn execute_details(args: DetailsArgs, db: &Database) -> CliResult {
    match args.command {
        DetailCommand::List => list::<CustomerDetails>(db),
        DetailCommand::Get { customer_id } => get::<CustomerDetails>(db, customer_id),
        DetailCommand::Add {
            customer_id,
            address,
            phone,
            notes,
        } => add::<CustomerDetails>(
            db,
            CustomerDetail::new(customer_id, address, phone, notes),
        ),
    }
}
