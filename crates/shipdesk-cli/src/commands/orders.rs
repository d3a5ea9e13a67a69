use super::render::Render;
use super::{add, get, list, not_found, print_rows, CliResult};
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use shipdesk_core::model::{Order, OrderLine};
use shipdesk_store::{Database, EntityStore, OrderLines, Orders};

#[derive(Debug, Args)]
pub struct OrdersArgs {
    #[command(subcommand)]
    pub command: OrderCommand,
}

#[derive(Debug, Subcommand)]
pub enum OrderCommand {
    /// List every order with its total
    List,
    /// Show one order, its lines and its total
    Get { id: i64 },
    /// Add an order for an existing customer
    Add {
        id: i64,
        customer_id: i64,
        /// Order date, YYYY-MM-DD
        date: NaiveDate,
    },
}

pub fn execute_orders(args: OrdersArgs, db: &Database) -> CliResult {
    match args.command {
        OrderCommand::List => list_with_totals(db),
        OrderCommand::Get { id } => show_order(db, id),
        OrderCommand::Add {
            id,
            customer_id,
            date,
        } => add::<Orders>(db, Order::new(id, customer_id, date)),
    }
}

fn list_with_totals(db: &Database) -> CliResult {
    let rows = db.with_connection(|conn| {
        Orders::find_all(conn)?
            .into_iter()
            .map(|order| Ok((Orders::total(conn, order.id)?, order)))
            .collect::<shipdesk_store::Result<Vec<_>>>()
    })?;

    if rows.is_empty() {
        println!("(no rows)");
    }
    for (total, order) in rows {
        println!("{}  total {:>10.2}", order.render(), total);
    }
    Ok(())
}

fn show_order(db: &Database, id: i64) -> CliResult {
    let (order, lines, total) = db.with_connection(|conn| {
        let order = Orders::find_by_id(conn, id)?;
        let lines = OrderLines::find_by_order(conn, id)?;
        let total = Orders::total(conn, id)?;
        Ok((order, lines, total))
    })?;

    let order = order.ok_or_else(|| not_found::<Orders>(id))?;
    println!("{}", order.render());
    print_rows(&lines);
    println!("total {:>10.2}", total);
    Ok(())
}

#[derive(Debug, Args)]
pub struct LinesArgs {
    #[command(subcommand)]
    pub command: LineCommand,
}

#[derive(Debug, Subcommand)]
pub enum LineCommand {
    /// List every line by order, then product
    List,
    /// Show the line of one product in one order
    Get { order_id: i64, product_id: i64 },
    /// Add a product line to an existing order
    Add {
        order_id: i64,
        product_id: i64,
        quantity: i64,
        unit_price: f64,
    },
}

pub fn execute_lines(args: LinesArgs, db: &Database) -> CliResult {
    match args.command {
        LineCommand::List => list::<OrderLines>(db),
        LineCommand::Get {
            order_id,
            product_id,
        } => get::<OrderLines>(db, (order_id, product_id)),
        LineCommand::Add {
            order_id,
            product_id,
            quantity,
            unit_price,
        } => add::<OrderLines>(
            db,
            OrderLine::new(order_id, product_id, quantity, unit_price),
        ),
    }
}
