//! PostgreSQL integration tests.
//!
//! These tests require a running PostgreSQL database.
//! Set DATABASE_URL environment variable to run them.

use sqldeck::config::ConnectionConfig;
use sqldeck::db::{DatabaseClient, PostgresClient};
use sqldeck::deck::Deck;
use sqldeck::runner::{Runner, RunSummary};

/// Helper to get test database URL from environment.
fn get_test_database_url() -> Option<String> {
    std::env::var("DATABASE_URL").ok()
}

/// Helper to create a test client.
async fn get_test_client() -> Option<PostgresClient> {
    let url = get_test_database_url()?;
    let config = ConnectionConfig::from_url(&url).ok()?;
    PostgresClient::connect(&config).await.ok()
}

#[tokio::test]
async fn test_connect_with_valid_credentials() {
    let Some(client) = get_test_client().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };

    // Connection succeeded if we got here
    client.close().await.unwrap();
}

#[tokio::test(flavor = "current_thread")]
async fn test_connect_with_invalid_host() {
    let config = ConnectionConfig {
        host: Some("invalid.host.that.does.not.exist.local".to_string()),
        database: Some("testdb".to_string()),
        user: Some("testuser".to_string()),
        password: Some("testpass".to_string()),
        ..Default::default()
    };

    let result = PostgresClient::connect(&config).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_run_deck_against_scratch_table() {
    let Some(client) = get_test_client().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };

    client
        .execute_mutation("CREATE TEMP TABLE deck_people (id int, fullname text)")
        .await
        .unwrap();
    client
        .execute_mutation("INSERT INTO deck_people VALUES (1, 'Alice'), (2, NULL)")
        .await
        .unwrap();

    let deck = Deck::parse(
        "-- scratch deck\n\
         -- 1. Everyone\n\
         SELECT id, fullname FROM deck_people ORDER BY id;\n\
         -- 2. Rename Alice\n\
         UPDATE deck_people SET fullname = 'Alice Marsh' WHERE id = 1;\n\
         -- 3. Nobody matches\n\
         UPDATE deck_people SET fullname = 'X' WHERE id = 999999;\n",
    )
    .unwrap();

    let runner = Runner::new(&client);
    let summary = runner.run_all(&deck).await;

    assert_eq!(
        summary,
        RunSummary {
            executed: 3,
            failed: 0
        }
    );

    // The rename is durable; the zero-match update changed nothing
    let rows = client
        .execute_read("SELECT fullname FROM deck_people WHERE id = 1")
        .await
        .unwrap();
    assert_eq!(rows.rows[0][0].render(), "Alice Marsh");

    client.close().await.unwrap();
}

#[tokio::test]
async fn test_failed_statement_does_not_block_the_rest() {
    let Some(client) = get_test_client().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };

    let deck = Deck::parse(
        "-- failure deck\n\
         -- 1. Broken\n\
         SELECT * FROM table_that_does_not_exist_xyz;\n\
         -- 2. Fine\n\
         SELECT 1 AS one;\n",
    )
    .unwrap();

    let runner = Runner::new(&client);
    let summary = runner.run_all(&deck).await;

    assert_eq!(summary.executed, 1);
    assert_eq!(summary.failed, 1);

    client.close().await.unwrap();
}
