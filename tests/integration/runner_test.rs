//! Run-mode integration tests against the in-memory doubles.
//!
//! These cover the public contract of the three run modes without a
//! database server.

use sqldeck::db::{Column, FailingDatabaseClient, MockDatabaseClient, RowSet, Value};
use sqldeck::deck::Deck;
use sqldeck::error::DeckError;
use sqldeck::runner::{execute_entry, ExecutionReport, Runner, RunSummary};

const DECK_TEXT: &str = "\
-- sample deck
-- 1. Open tasks
SELECT id, title FROM tasks WHERE status_id = 1;
-- 2. Close task 7
UPDATE tasks SET status_id = 3 WHERE id = 7;
-- 3. Drop stale sessions
DELETE FROM sessions WHERE expired;
";

fn deck() -> Deck {
    Deck::parse(DECK_TEXT).unwrap()
}

#[tokio::test]
async fn test_run_all_commits_each_mutation_separately() {
    let db = MockDatabaseClient::new().with_affected(1);
    let runner = Runner::new(&db);

    let summary = runner.run_all(&deck()).await;

    assert_eq!(
        summary,
        RunSummary {
            executed: 3,
            failed: 0
        }
    );
    // Every entry went through the connection, in file order
    assert_eq!(
        db.executed(),
        vec![
            "SELECT id, title FROM tasks WHERE status_id = 1",
            "UPDATE tasks SET status_id = 3 WHERE id = 7",
            "DELETE FROM sessions WHERE expired",
        ]
    );
}

#[tokio::test]
async fn test_run_one_touches_only_the_selected_entry() {
    let db = MockDatabaseClient::new();
    let runner = Runner::new(&db);

    runner.run_one(&deck(), 3).await.unwrap();

    assert_eq!(db.executed(), vec!["DELETE FROM sessions WHERE expired"]);
}

#[tokio::test]
async fn test_out_of_range_reports_valid_range_and_runs_nothing() {
    let db = MockDatabaseClient::new();
    let runner = Runner::new(&db);

    let err = runner.run_one(&deck(), 4).await.unwrap_err();
    match err {
        DeckError::OutOfRange { requested, count } => {
            assert_eq!(requested, 4);
            assert_eq!(count, 3);
        }
        other => panic!("Expected OutOfRange, got {other:?}"),
    }
    assert!(db.executed().is_empty());
}

#[tokio::test]
async fn test_failures_do_not_block_later_entries() {
    let db = FailingDatabaseClient::new();
    let runner = Runner::new(&db);

    let summary = runner.run_all(&deck()).await;

    assert_eq!(summary.failed, 3);
    assert_eq!(db.attempts(), 3);
}

#[tokio::test]
async fn test_read_report_carries_rows_and_columns() {
    let rows = RowSet::from_parts(
        vec![
            Column::new("id", "int4"),
            Column::new("title", "varchar"),
        ],
        vec![vec![Value::Int(7), Value::Text("Write report".to_string())]],
    );
    let db = MockDatabaseClient::with_rows(rows);
    let deck = deck();

    let report = execute_entry(&db, deck.get(1).unwrap()).await.unwrap();

    match report {
        ExecutionReport::Rows(rows) => {
            assert_eq!(rows.columns[1].name, "title");
            assert_eq!(rows.rows[0][0], Value::Int(7));
        }
        other => panic!("Expected Rows report, got {other:?}"),
    }
}

#[tokio::test]
async fn test_mutation_report_carries_affected_count() {
    let db = MockDatabaseClient::new().with_affected(0);
    let deck = deck();

    let report = execute_entry(&db, deck.get(2).unwrap()).await.unwrap();

    // Zero matched rows is a normal outcome
    assert_eq!(report, ExecutionReport::Mutation { affected: 0 });
}
