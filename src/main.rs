//! sqldeck - run labeled SQL statements from a query-deck file against
//! PostgreSQL.

use sqldeck::cli::{Cli, Selection};
use sqldeck::config::{Config, ConnectionConfig};
use sqldeck::db;
use sqldeck::deck::Deck;
use sqldeck::error::{DeckError, Result};
use sqldeck::runner::{self, Runner};
use sqldeck::{logging, report};
use std::path::PathBuf;
use tracing::{error, info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    logging::init();

    if let Err(e) = run().await {
        if e.is_fatal() {
            error!("{}: {}", e.category(), e);
            std::process::exit(1);
        }
        // FileNotFound and OutOfRange stop the run but are not failures
        warn!("{e}");
        println!("{e}");
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();
    let selection = cli.selection().map_err(DeckError::usage)?;

    // Load configuration file
    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let config = Config::load(&config_path)?;

    // The deck is parsed fresh on every invocation
    let deck = Deck::load(&deck_path(&cli, &config))?;

    match selection {
        Selection::List => {
            println!("{}", runner::list_available(&deck));
            Ok(())
        }
        Selection::One(number) => {
            if deck.is_empty() {
                println!("{}", report::render_listing(&deck));
                return Ok(());
            }
            // Validate the number before any database contact
            deck.get(number)?;
            execute(&cli, &config, &deck, Some(number)).await
        }
        Selection::All => {
            if deck.is_empty() {
                println!("{}", report::render_listing(&deck));
                return Ok(());
            }
            execute(&cli, &config, &deck, None).await
        }
    }
}

/// Connects, runs the selected entry (or all of them), and closes the
/// connection on every exit path before the outcome propagates.
async fn execute(
    cli: &Cli,
    config: &Config,
    deck: &Deck,
    number: Option<usize>,
) -> Result<()> {
    let connection = resolve_connection(cli, config)?.ok_or_else(|| {
        DeckError::config(
            "No database connection configured. \
             Pass --url or -H/-d/-U, or add [connections.default] to the config file.",
        )
    })?;

    info!("Connection: {}", connection.describe());
    let db = db::connect(&connection).await?;

    let runner = Runner::new(db.as_ref());
    let outcome = match number {
        Some(n) => runner.run_one(deck, n).await,
        None => {
            runner.run_all(deck).await;
            Ok(())
        }
    };

    db.close().await?;
    outcome
}

/// Returns the deck file path: the --file argument if provided, otherwise
/// the path from the config file.
fn deck_path(cli: &Cli, config: &Config) -> PathBuf {
    cli.file
        .clone()
        .unwrap_or_else(|| config.queries.file.clone())
}

/// Resolves the final connection configuration from CLI args, config file,
/// and environment.
fn resolve_connection(cli: &Cli, config: &Config) -> Result<Option<ConnectionConfig>> {
    // Start with CLI connection config if provided
    let mut connection = cli.to_connection_config()?;

    // If no CLI connection, try named connection from config
    if connection.is_none() {
        if let Some(name) = cli.connection_name() {
            connection = config.get_connection(Some(name)).cloned();
            if connection.is_none() {
                return Err(DeckError::config(format!(
                    "Connection '{}' not found in config file",
                    name
                )));
            }
        }
    }

    // If still no connection, try default from config
    if connection.is_none() {
        connection = config.get_connection(None).cloned();
    }

    // The environment fills whatever is still open, and may supply the
    // whole connection on its own
    let mut conn = connection.unwrap_or_default();
    conn.fill_from_env();

    if conn == ConnectionConfig::default() {
        return Ok(None);
    }
    Ok(Some(conn))
}
