//! Single-entry execution.
//!
//! Classifies one deck entry and executes it through the database client,
//! producing the report for the caller to render.

use crate::classify::classify;
use crate::db::{DatabaseClient, RowSet};
use crate::deck::DeckEntry;
use crate::error::Result;
use tracing::debug;

/// Result of running one deck entry, rendered and then discarded.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionReport {
    /// A read statement's rows and column metadata.
    Rows(RowSet),
    /// A mutation's affected-row count. The change is durable as soon as
    /// this report exists; it is never rolled back by later entries.
    Mutation { affected: u64 },
}

/// Executes one entry against an open connection.
///
/// Mutations go through the mutation path and commit immediately
/// (autocommit per statement); everything else is fetched as a row set.
pub async fn execute_entry(
    db: &dyn DatabaseClient,
    entry: &DeckEntry,
) -> Result<ExecutionReport> {
    let kind = classify(&entry.statement);
    debug!("Executing entry '{}' as {}", entry.label, kind);

    if kind.commits() {
        let affected = db.execute_mutation(&entry.statement).await?;
        Ok(ExecutionReport::Mutation { affected })
    } else {
        let rows = db.execute_read(&entry.statement).await?;
        Ok(ExecutionReport::Rows(rows))
    }
}
