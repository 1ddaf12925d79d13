//! Integration tests for sqldeck.
//!
//! Deck and runner tests run against in-memory doubles; the postgres tests
//! require a running PostgreSQL database and DATABASE_URL.

pub mod deck_test;
pub mod postgres_test;
pub mod runner_test;
