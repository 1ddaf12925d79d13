//! Query-deck model.
//!
//! A deck is an ordered collection of labeled SQL statements parsed from a
//! text file. It is parsed fresh on every invocation; nothing is cached
//! between runs.

mod parser;

use crate::error::{DeckError, Result};
use std::io;
use std::path::Path;

/// One labeled statement from the deck file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckEntry {
    /// 1-based position of the entry in the deck.
    pub ordinal: usize,
    /// Human-readable label, stored as `"<ordinal>. <label text>"`.
    pub label: String,
    /// The SQL body, with comment lines, blank lines, and the trailing
    /// terminator stripped.
    pub statement: String,
}

impl DeckEntry {
    /// Returns a short preview of the statement for listings: the first
    /// four words followed by an ellipsis.
    pub fn preview(&self) -> String {
        let head: Vec<&str> = self.statement.split_whitespace().take(4).collect();
        format!("{}...", head.join(" "))
    }
}

/// An ordered sequence of deck entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    entries: Vec<DeckEntry>,
}

impl Deck {
    /// Parses a deck from raw file text.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(Self {
            entries: parser::parse(text)?,
        })
    }

    /// Loads and parses the deck file at `path`.
    ///
    /// A missing file yields [`DeckError::FileNotFound`], which callers
    /// treat as "no queries available" rather than a failure.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(DeckError::file_not_found(path.display().to_string()));
            }
            Err(e) => {
                return Err(DeckError::internal(format!(
                    "Failed to read {}: {e}",
                    path.display()
                )));
            }
        };
        Self::parse(&text)
    }

    /// Returns the entry with the given 1-based number, or `OutOfRange`
    /// naming the valid range.
    pub fn get(&self, number: usize) -> Result<&DeckEntry> {
        if number < 1 || number > self.entries.len() {
            return Err(DeckError::OutOfRange {
                requested: number,
                count: self.entries.len(),
            });
        }
        Ok(&self.entries[number - 1])
    }

    /// Returns the entries in file order.
    pub fn entries(&self) -> &[DeckEntry] {
        &self.entries
    }

    /// Number of entries in the deck.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the deck has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
