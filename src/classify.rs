//! Statement classification module.
//!
//! Classifies statements as read or mutating to determine the commit policy
//! and the report shape. This is a textual prefix check on the trimmed
//! statement, not a SQL parser: semantics beyond the leading keyword
//! (comments, multi-statement text, DDL) are not inspected, and anything
//! that is not a data modification is reported as a read.

use std::fmt;

/// Statement prefixes that classify as mutating.
const MUTATING_PREFIXES: [&str; 3] = ["UPDATE", "INSERT", "DELETE"];

/// The kind of statement, as far as the report and commit policy care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    /// Anything reported by returned rows and columns (SELECT, WITH, DDL,
    /// administrative statements, multi-statement text).
    Read,
    /// Data modification reported by affected-row count (UPDATE, INSERT,
    /// DELETE). Committed immediately after execution.
    Mutating,
}

impl StatementKind {
    /// Returns true if the statement changes stored data and must be
    /// committed right after it runs.
    pub fn commits(&self) -> bool {
        matches!(self, Self::Mutating)
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "Read"),
            Self::Mutating => write!(f, "Mutating"),
        }
    }
}

/// Classifies a SQL statement by its leading keyword, case-insensitively.
pub fn classify(sql: &str) -> StatementKind {
    let head = sql.trim_start().to_uppercase();
    if MUTATING_PREFIXES.iter().any(|p| head.starts_with(p)) {
        StatementKind::Mutating
    } else {
        StatementKind::Read
    }
}
