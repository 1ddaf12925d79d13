//! Report rendering.
//!
//! Turns execution results into the text the user sees. Rendering is kept
//! separate from execution so the run modes stay testable without capturing
//! stdout.

use crate::db::{RowSet, Value};
use crate::deck::{Deck, DeckEntry};

const BANNER_WIDTH: usize = 60;

/// Fixed delimiter between cells and column names.
pub const CELL_DELIMITER: &str = "  |  ";

/// Marker printed for a read that produced columns but zero rows.
pub const EMPTY_RESULT_MARKER: &str = "Empty result set";

/// Marker printed for a statement that produced no column metadata.
pub const NO_COLUMNS_MARKER: &str = "Statement returned no columns";

/// Renders the banner printed before each executed entry: the label and
/// the statement about to run.
pub fn render_banner(entry: &DeckEntry) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    format!(
        "{rule}\n{label}\n{rule}\nSQL: {sql}\n{dashes}",
        label = entry.label,
        sql = entry.statement,
        dashes = "-".repeat(BANNER_WIDTH),
    )
}

/// Renders a read result: column header, dash rule, one line per row,
/// and the row count. NULL cells render as the literal `NULL`.
pub fn render_rowset(rows: &RowSet) -> String {
    if rows.has_no_columns() {
        return NO_COLUMNS_MARKER.to_string();
    }
    if rows.is_empty() {
        return EMPTY_RESULT_MARKER.to_string();
    }

    let header: String = rows
        .columns
        .iter()
        .map(|col| col.name.as_str())
        .collect::<Vec<_>>()
        .join(CELL_DELIMITER);

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"-".repeat(header.len() + 10));
    out.push('\n');

    for row in &rows.rows {
        let line: String = row
            .iter()
            .map(Value::render)
            .collect::<Vec<_>>()
            .join(CELL_DELIMITER);
        out.push_str(&line);
        out.push('\n');
    }

    out.push_str(&format!("\nRows returned: {}", rows.row_count()));
    out
}

/// Renders a mutation result.
pub fn render_mutation(affected: u64) -> String {
    format!("Rows affected: {affected}")
}

/// Renders the list-mode output: every entry's label and a short preview
/// of its statement, plus usage hints.
pub fn render_listing(deck: &Deck) -> String {
    if deck.is_empty() {
        return "No queries found in file".to_string();
    }

    let mut out = String::new();
    out.push_str("Available queries\n");
    out.push_str(&"=".repeat(BANNER_WIDTH));
    out.push('\n');

    for entry in deck.entries() {
        out.push_str(&format!("\n{}\n   {}\n", entry.label, entry.preview()));
    }

    out.push_str("\nRun one query:  sqldeck <number>\n");
    out.push_str("Run all:        sqldeck all");
    out
}
