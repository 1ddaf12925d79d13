//! Database abstraction layer for sqldeck.
//!
//! Provides a trait-based interface for database operations, allowing the
//! PostgreSQL backend and the in-memory test doubles to be used
//! interchangeably.

mod mock;
mod postgres;
mod types;

pub use mock::{FailingDatabaseClient, MockDatabaseClient};
pub use postgres::PostgresClient;
pub use types::{Column, Row, RowSet, Value};

use crate::config::ConnectionConfig;
use crate::error::Result;
use async_trait::async_trait;

/// Opens a database connection for the given configuration.
///
/// This is the central factory function for database connections.
pub async fn connect(config: &ConnectionConfig) -> Result<Box<dyn DatabaseClient>> {
    let client = PostgresClient::connect(config).await?;
    Ok(Box::new(client))
}

/// Trait defining the interface for database clients.
///
/// All database operations are async and return Results with DeckError.
/// Statements run in autocommit mode: a mutation is durable as soon as
/// `execute_mutation` returns, independent of any later statement.
#[async_trait]
pub trait DatabaseClient: Send + Sync {
    /// Executes a read statement and returns all rows with column metadata.
    async fn execute_read(&self, sql: &str) -> Result<RowSet>;

    /// Executes a mutating statement and returns the affected-row count.
    /// Zero affected rows is a normal outcome, not an error.
    async fn execute_mutation(&self, sql: &str) -> Result<u64>;

    /// Closes the database connection.
    async fn close(&self) -> Result<()>;
}
