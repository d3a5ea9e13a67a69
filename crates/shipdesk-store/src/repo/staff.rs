use super::{execute_insert, query_one, EntityStore, Searchable};
use crate::errors::Result;
use rusqlite::{params, Connection};
use shipdesk_core::model::{Courier, CourierId, Entity, SalesAgent, SalesAgentId};

pub struct SalesAgents;

impl EntityStore for SalesAgents {
    type Entity = SalesAgent;
    type Key = SalesAgentId;

    const SELECT: &'static str = "SELECT id, name, sales_zone FROM sales_agent";
    const ORDER_BY: &'static str = "id";

    fn insert(conn: &Connection, agent: &SalesAgent) -> Result<SalesAgent> {
        execute_insert(
            conn,
            SalesAgent::KIND,
            agent.key(),
            "INSERT INTO sales_agent (id, name, sales_zone) VALUES (?1, ?2, ?3)",
            params![agent.id, agent.name, agent.sales_zone],
        )?;
        Ok(agent.clone())
    }

    fn find_by_id(conn: &Connection, id: SalesAgentId) -> Result<Option<SalesAgent>> {
        query_one(conn, &format!("{} WHERE id = ?1", Self::SELECT), [id])
    }
}

impl Searchable for SalesAgents {
    const SEARCH_COLUMNS: &'static [&'static str] = &["name", "sales_zone"];
}

pub struct Couriers;

impl EntityStore for Couriers {
    type Entity = Courier;
    type Key = CourierId;

    const SELECT: &'static str = "SELECT id, name, vehicle FROM courier";
    const ORDER_BY: &'static str = "id";

    fn insert(conn: &Connection, courier: &Courier) -> Result<Courier> {
        execute_insert(
            conn,
            Courier::KIND,
            courier.key(),
            "INSERT INTO courier (id, name, vehicle) VALUES (?1, ?2, ?3)",
            params![courier.id, courier.name, courier.vehicle],
        )?;
        Ok(courier.clone())
    }

    fn find_by_id(conn: &Connection, id: CourierId) -> Result<Option<Courier>> {
        query_one(conn, &format!("{} WHERE id = ?1", Self::SELECT), [id])
    }
}

impl Searchable for Couriers {
    const SEARCH_COLUMNS: &'static [&'static str] = &["name", "vehicle"];
}
