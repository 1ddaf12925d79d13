//! Mock database clients for testing.
//!
//! Provides in-memory implementations of `DatabaseClient` so run modes can
//! be exercised without a server.

use super::{Column, DatabaseClient, RowSet, Value};
use crate::error::{DeckError, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// A mock database client that returns predefined results and records
/// every statement it is asked to execute.
pub struct MockDatabaseClient {
    rows: RowSet,
    affected: u64,
    executed: Mutex<Vec<String>>,
}

impl MockDatabaseClient {
    /// Creates a mock client that answers reads with a single canned row.
    pub fn new() -> Self {
        let rows = RowSet::from_parts(
            vec![Column::new("result", "text")],
            vec![vec![Value::Text("mock".to_string())]],
        );
        Self::with_rows(rows)
    }

    /// Creates a mock client that answers every read with the given rows.
    pub fn with_rows(rows: RowSet) -> Self {
        Self {
            rows,
            affected: 1,
            executed: Mutex::new(Vec::new()),
        }
    }

    /// Sets the affected-row count reported for mutations.
    pub fn with_affected(mut self, affected: u64) -> Self {
        self.affected = affected;
        self
    }

    /// Returns the statements executed so far, in order.
    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().expect("mock lock poisoned").clone()
    }

    fn record(&self, sql: &str) {
        self.executed
            .lock()
            .expect("mock lock poisoned")
            .push(sql.to_string());
    }
}

impl Default for MockDatabaseClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DatabaseClient for MockDatabaseClient {
    async fn execute_read(&self, sql: &str) -> Result<RowSet> {
        self.record(sql);
        Ok(self.rows.clone())
    }

    async fn execute_mutation(&self, sql: &str) -> Result<u64> {
        self.record(sql);
        Ok(self.affected)
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}

/// A client whose every statement fails, for exercising the best-effort
/// batch policy.
pub struct FailingDatabaseClient {
    attempts: Mutex<usize>,
}

impl FailingDatabaseClient {
    pub fn new() -> Self {
        Self {
            attempts: Mutex::new(0),
        }
    }

    /// Number of statements that were attempted before failing.
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().expect("mock lock poisoned")
    }

    fn bump(&self) {
        *self.attempts.lock().expect("mock lock poisoned") += 1;
    }
}

impl Default for FailingDatabaseClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DatabaseClient for FailingDatabaseClient {
    async fn execute_read(&self, _sql: &str) -> Result<RowSet> {
        self.bump();
        Err(DeckError::statement("relation does not exist"))
    }

    async fn execute_mutation(&self, _sql: &str) -> Result<u64> {
        self.bump();
        Err(DeckError::statement("constraint violation"))
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}
