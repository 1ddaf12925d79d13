//! Deck loading integration tests.
//!
//! Exercises the fixture deck file end to end: parsing, numbering,
//! previews, and listing output.

use sqldeck::deck::Deck;
use sqldeck::runner;
use std::path::Path;

fn fixture_path() -> &'static Path {
    Path::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/queries.sql"
    ))
}

#[test]
fn test_load_fixture_deck() {
    let deck = Deck::load(fixture_path()).unwrap();
    assert_eq!(deck.len(), 5);

    let first = deck.get(1).unwrap();
    assert_eq!(first.label, "1. All users with their emails");
    assert_eq!(
        first.statement,
        "SELECT id, fullname, email\nFROM users\nORDER BY id"
    );
}

#[test]
fn test_fixture_comment_lines_are_stripped() {
    let deck = Deck::load(fixture_path()).unwrap();

    // Block 4 carries an inline comment line that must not survive
    let fourth = deck.get(4).unwrap();
    assert!(!fourth.statement.contains("correlated subquery"));
    assert!(fourth.statement.starts_with("SELECT u.fullname"));
}

#[test]
fn test_fixture_trailing_semicolons_are_stripped() {
    let deck = Deck::load(fixture_path()).unwrap();
    for entry in deck.entries() {
        assert!(
            !entry.statement.ends_with(';'),
            "statement {} keeps its terminator",
            entry.ordinal
        );
    }
}

#[test]
fn test_reparsing_is_deterministic() {
    let first = Deck::load(fixture_path()).unwrap();
    let second = Deck::load(fixture_path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_listing_shows_every_entry() {
    let deck = Deck::load(fixture_path()).unwrap();
    let listing = runner::list_available(&deck);

    for entry in deck.entries() {
        assert!(listing.contains(&entry.label));
        assert!(listing.contains(&entry.preview()));
    }
}
