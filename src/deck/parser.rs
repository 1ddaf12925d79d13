//! Deck file parsing.
//!
//! Splits the raw file text into labeled query blocks. A block starts at a
//! line matching `-- <integer>.` and runs until the next such line or end
//! of file; the first line of the block is the label, the remaining lines
//! (after dropping blank and comment lines) are the SQL body.

use crate::error::{DeckError, Result};
use regex::Regex;

use super::DeckEntry;

/// A block begins at a line of the form `-- 3.` (task-numbering marker).
const BLOCK_MARKER: &str = r"(?m)^-- \d+\.";

/// Parses raw deck-file text into entries.
///
/// Text before the first marker is a file header and is discarded. Blocks
/// that contain no SQL lines are skipped without emitting an entry; the
/// surviving entries are numbered by their 1-based emission position, not
/// by the marker integers written in the source text.
pub(crate) fn parse(text: &str) -> Result<Vec<DeckEntry>> {
    let marker = Regex::new(BLOCK_MARKER)
        .map_err(|e| DeckError::internal(format!("Invalid block marker pattern: {e}")))?;

    let mut entries = Vec::new();
    for (i, segment) in marker.split(text).enumerate() {
        if i == 0 {
            // File header or comment before the first marker
            continue;
        }
        if let Some(entry) = parse_block(segment, entries.len() + 1) {
            entries.push(entry);
        }
    }
    Ok(entries)
}

/// Parses one block into an entry, or `None` if the block has no SQL.
fn parse_block(segment: &str, ordinal: usize) -> Option<DeckEntry> {
    let block = segment.trim();
    let mut lines = block.lines();

    let label_text = lines.next().unwrap_or("").trim();

    let sql_lines: Vec<&str> = lines
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with("--")
        })
        .collect();

    if sql_lines.is_empty() {
        return None;
    }

    let mut statement = sql_lines.join("\n").trim().to_string();
    if statement.ends_with(';') {
        statement.pop();
    }

    Some(DeckEntry {
        ordinal,
        label: format!("{ordinal}. {label_text}"),
        statement,
    })
}
