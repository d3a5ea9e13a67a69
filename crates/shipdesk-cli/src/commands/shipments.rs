use super::render::Render;
use super::{add, get, not_found, CliResult};
use clap::{Args, Subcommand};
use shipdesk_core::model::Shipment;
use shipdesk_store::{Couriers, Database, EntityStore, Orders, SalesAgents, Shipments};

#[derive(Debug, Args)]
pub struct ShipmentsArgs {
    #[command(subcommand)]
    pub command: ShipmentCommand,
}

#[derive(Debug, Subcommand)]
pub enum ShipmentCommand {
    /// List every shipment with its order total
    List,
    Get { id: i64 },
    /// Ship an existing order with an existing agent and courier
    Add {
        id: i64,
        order_id: i64,
        agent_id: i64,
        courier_id: i64,
    },
}

pub fn execute(args: ShipmentsArgs, db: &Database) -> CliResult {
    match args.command {
        ShipmentCommand::List => list_with_totals(db),
        ShipmentCommand::Get { id } => get::<Shipments>(db, id),
        ShipmentCommand::Add {
            id,
            order_id,
            agent_id,
            courier_id,
        } => {
            let shipment = link(db, id, order_id, agent_id, courier_id)?;
            add::<Shipments>(db, shipment)
        }
    }
}

fn list_with_totals(db: &Database) -> CliResult {
    let rows = db.with_connection(|conn| {
        Shipments::find_all(conn)?
            .into_iter()
            .map(|shipment| Ok((Orders::total(conn, shipment.order.id)?, shipment)))
            .collect::<shipdesk_store::Result<Vec<_>>>()
    })?;

    if rows.is_empty() {
        println!("(no rows)");
    }
    for (total, shipment) in rows {
        println!("{}  total {:>10.2}", shipment.render(), total);
    }
    Ok(())
}

/// Resolve the referenced rows into the views a shipment embeds
fn link(
    db: &Database,
    id: i64,
    order_id: i64,
    agent_id: i64,
    courier_id: i64,
) -> Result<Shipment, Box<dyn std::error::Error>> {
    let (order, agent, courier) = db.with_connection(|conn| {
        Ok((
            Orders::find_by_id(conn, order_id)?,
            SalesAgents::find_by_id(conn, agent_id)?,
            Couriers::find_by_id(conn, courier_id)?,
        ))
    })?;

    let order = order.ok_or_else(|| not_found::<Orders>(order_id))?;
    let agent = agent.ok_or_else(|| not_found::<SalesAgents>(agent_id))?;
    let courier = courier.ok_or_else(|| not_found::<Couriers>(courier_id))?;

    Ok(Shipment::linking(id, &order, &agent, &courier))
}
