//! Embedded SQL migrations
//!
//! Migrations are embedded at compile time using include_str!

/// Migration metadata
pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

/// Get all embedded migrations in order
pub fn get_migrations() -> Vec<Migration> {
    vec![Migration {
        id: "001_initial_schema",
        sql: include_str!("../../migrations/001_initial_schema.sql"),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_schema_creates_every_table() {
        let migrations = get_migrations();
        let sql = migrations[0].sql;
        for table in [
            "customer ",
            "customer_detail",
            "product",
            "orders",
            "order_line",
            "sales_agent",
            "courier",
            "shipment",
        ] {
            assert!(
                sql.contains(&format!("CREATE TABLE {}", table)),
                "missing table {}",
                table
            );
        }
    }
}
