//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod order_repo;
pub mod product_repo;


use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};

use crate::error::DomainError;

pub use order_repo::PostgresOrderRepository;
pub use product_repo::PostgresProductRepository;

const SCHEMA_SQL: &str = include_str!("../../../migrations/schema.sql");

/// Open a connection pool, failing fast when the server is unreachable
pub async fn connect(url: &str, timeout: Duration) -> Result<DatabaseConnection, DomainError> {
    let mut options = ConnectOptions::new(url.to_string());
    options
        .connect_timeout(timeout)
        .acquire_timeout(timeout)
        .sqlx_logging(false);

    Ok(Database::connect(options).await?)
}

/// Create tables and indexes that do not exist yet
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DomainError> {
    db.execute_unprepared(SCHEMA_SQL).await?;
    Ok(())
}

pub(crate) fn to_quantity(quantity: i32) -> u32 {
    u32::try_from(quantity).unwrap_or(0)
}

pub(crate) fn to_stock(quantity: u32) -> i32 {
    i32::try_from(quantity).unwrap_or(i32::MAX)
}
