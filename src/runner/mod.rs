//! Run modes over a parsed deck.
//!
//! Three entry operations: list the deck without touching the database,
//! run a single entry by number, or run every entry in file order. Each is
//! a linear pipeline: parse, validate where needed, then execute, report,
//! and (for mutations) commit per statement.

mod executor;

pub use executor::{execute_entry, ExecutionReport};

use crate::db::DatabaseClient;
use crate::deck::{Deck, DeckEntry};
use crate::error::Result;
use crate::report;
use tracing::{error, info};

/// Outcome of a multi-entry run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Entries that executed successfully.
    pub executed: usize,
    /// Entries whose statement failed.
    pub failed: usize,
}

/// Executes deck entries against one open connection.
pub struct Runner<'a> {
    db: &'a dyn DatabaseClient,
}

impl<'a> Runner<'a> {
    /// Creates a runner over an open connection.
    pub fn new(db: &'a dyn DatabaseClient) -> Self {
        Self { db }
    }

    /// Runs a single entry by its 1-based number.
    ///
    /// An out-of-range number is an error naming the valid range; a
    /// statement failure is reported but, like everywhere else, does not
    /// become a process failure.
    pub async fn run_one(&self, deck: &Deck, number: usize) -> Result<()> {
        let entry = deck.get(number)?;
        info!("Running query #{number}");
        self.run_entry(entry).await;
        Ok(())
    }

    /// Runs every entry in file order.
    ///
    /// Failures are per-entry: a failing statement is logged and the run
    /// continues with the next entry. Mutations committed by earlier
    /// entries stay committed.
    pub async fn run_all(&self, deck: &Deck) -> RunSummary {
        let mut summary = RunSummary::default();

        for entry in deck.entries() {
            if self.run_entry(entry).await {
                summary.executed += 1;
            } else {
                summary.failed += 1;
            }
        }

        info!(
            "Run finished: {} executed, {} failed",
            summary.executed, summary.failed
        );
        summary
    }

    /// Executes one entry and prints its report. Returns false on a
    /// statement failure, which is logged with the label and statement
    /// text and never propagated.
    async fn run_entry(&self, entry: &DeckEntry) -> bool {
        println!("{}", report::render_banner(entry));

        match execute_entry(self.db, entry).await {
            Ok(ExecutionReport::Rows(rows)) => {
                println!("{}", report::render_rowset(&rows));
                true
            }
            Ok(ExecutionReport::Mutation { affected }) => {
                println!("{}", report::render_mutation(affected));
                true
            }
            Err(e) => {
                error!(
                    "Statement failed for '{}' ({}): {e}",
                    entry.label, entry.statement
                );
                println!("{e}");
                false
            }
        }
    }
}

/// Renders the deck listing. Never touches the database.
pub fn list_available(deck: &Deck) -> String {
    report::render_listing(deck)
}
