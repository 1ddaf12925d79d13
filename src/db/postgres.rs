//! PostgreSQL client backed by sqlx.
//!
//! Wraps a pool capped at a single connection: every statement of a run
//! goes through the same connection, one at a time, in autocommit mode.

use crate::config::ConnectionConfig;
use crate::db::{Column, DatabaseClient, Row, RowSet, Value};
use crate::error::{DeckError, Result};
use async_trait::async_trait;
use sqlx::postgres::{PgDatabaseError, PgPool, PgPoolOptions, PgRow};
use sqlx::{Column as SqlxColumn, Decode, Executor, Postgres, Row as SqlxRow, Type, TypeInfo};
use std::time::Duration;
use tracing::debug;

#[derive(Debug)]
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Opens the connection. A failure here is fatal to the invocation;
    /// no statements run.
    pub async fn connect(config: &ConnectionConfig) -> Result<Self> {
        let url = config.to_url()?;

        debug!("Connecting to {}", config.describe());
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(10))
            .connect(&url)
            .await
            .map_err(|e| connection_error(e, config))?;

        Ok(Self { pool })
    }

    /// Recovers the column header for a statement that matched no rows.
    /// Administrative statements have no columns to recover; that case
    /// reports as no-columns rather than empty-result.
    async fn describe_columns(&self, sql: &str) -> Vec<Column> {
        match (&self.pool).describe(sql).await {
            Ok(described) => described
                .columns()
                .iter()
                .map(|c| Column::new(c.name(), c.type_info().name()))
                .collect(),
            Err(_) => Vec::new(),
        }
    }
}

#[async_trait]
impl DatabaseClient for PostgresClient {
    async fn execute_read(&self, sql: &str) -> Result<RowSet> {
        let fetched = sqlx::query(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(statement_error)?;

        let columns = match fetched.first() {
            Some(row) => columns_of(row),
            None => self.describe_columns(sql).await,
        };
        let rows = fetched.iter().map(decode_row).collect();

        Ok(RowSet { columns, rows })
    }

    async fn execute_mutation(&self, sql: &str) -> Result<u64> {
        let done = sqlx::query(sql)
            .execute(&self.pool)
            .await
            .map_err(statement_error)?;

        Ok(done.rows_affected())
    }

    async fn close(&self) -> Result<()> {
        self.pool.close().await;
        Ok(())
    }
}

fn columns_of(row: &PgRow) -> Vec<Column> {
    row.columns()
        .iter()
        .map(|c| Column::new(c.name(), c.type_info().name()))
        .collect()
}

fn decode_row(row: &PgRow) -> Row {
    row.columns()
        .iter()
        .enumerate()
        .map(|(i, c)| decode_cell(row, i, c.type_info().name()))
        .collect()
}

/// Decodes one cell by its reported type name. Types outside the common
/// set are fetched as text, which PostgreSQL can do for any value.
fn decode_cell(row: &PgRow, index: usize, type_name: &str) -> Value {
    match type_name.to_uppercase().as_str() {
        "BOOL" | "BOOLEAN" => cell::<bool>(row, index).map(Value::Bool),
        "INT2" | "SMALLINT" => cell::<i16>(row, index).map(|n| Value::Int(n.into())),
        "INT4" | "INT" | "INTEGER" => cell::<i32>(row, index).map(|n| Value::Int(n.into())),
        "INT8" | "BIGINT" => cell::<i64>(row, index).map(Value::Int),
        "FLOAT4" | "REAL" => cell::<f32>(row, index).map(|x| Value::Float(x.into())),
        "FLOAT8" | "DOUBLE PRECISION" => cell::<f64>(row, index).map(Value::Float),
        "BYTEA" => cell::<Vec<u8>>(row, index).map(Value::Bytes),
        _ => cell::<String>(row, index).map(Value::Text),
    }
    .unwrap_or(Value::Null)
}

fn cell<'r, T>(row: &'r PgRow, index: usize) -> Option<T>
where
    T: Decode<'r, Postgres> + Type<Postgres>,
{
    row.try_get::<Option<T>, _>(index).ok().flatten()
}

/// Turns a driver connect failure into a message that names the endpoint
/// instead of echoing driver internals.
fn connection_error(error: sqlx::Error, config: &ConnectionConfig) -> DeckError {
    let text = error.to_string();
    let lower = text.to_lowercase();
    let endpoint = format!(
        "{}:{}",
        config.host.as_deref().unwrap_or("localhost"),
        config.port_or_default()
    );

    let message = if lower.contains("connection refused") || lower.contains("could not connect") {
        format!("Nothing is listening at {endpoint}. Is the server running?")
    } else if lower.contains("authentication failed") {
        format!(
            "Authentication failed for user '{}'.",
            config.user.as_deref().unwrap_or("?")
        )
    } else if lower.contains("database") && lower.contains("does not exist") {
        format!(
            "Database '{}' does not exist at {endpoint}.",
            config.database.as_deref().unwrap_or("?")
        )
    } else if lower.contains("tls") || lower.contains("ssl") {
        "The server requires TLS. Append ?sslmode=require to the connection URL.".to_string()
    } else if lower.contains("timed out") || lower.contains("timeout") {
        format!("Connection to {endpoint} timed out.")
    } else {
        text
    };

    DeckError::connection(message)
}

/// Surfaces the server's structured error fields (detail, hint, table,
/// column, constraint) alongside the message.
fn statement_error(error: sqlx::Error) -> DeckError {
    let Some(db_error) = error.as_database_error() else {
        return DeckError::statement(error.to_string());
    };

    let mut parts = vec![format!("ERROR: {}", db_error.message())];
    if let Some(pg) = db_error.try_downcast_ref::<PgDatabaseError>() {
        let extras = [
            ("DETAIL", pg.detail()),
            ("HINT", pg.hint()),
            ("TABLE", pg.table()),
            ("COLUMN", pg.column()),
            ("CONSTRAINT", pg.constraint()),
        ];
        parts.extend(
            extras
                .into_iter()
                .filter_map(|(tag, text)| text.map(|t| format!("  {tag}: {t}"))),
        );
    }

    DeckError::statement(parts.join("\n"))
}
