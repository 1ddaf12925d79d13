//! Error types for sqldeck.
//!
//! Defines the main error enum used throughout the application.

use thiserror::Error;

/// Main error type for sqldeck operations.
#[derive(Error, Debug)]
pub enum DeckError {
    /// Database connection errors (host unreachable, auth failed, etc.).
    /// Fatal to the whole invocation.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Per-statement execution errors (syntax errors, constraint
    /// violations, connectivity loss mid-run).
    #[error("Statement error: {0}")]
    Statement(String),

    /// The queries file does not exist. Callers treat this as "no queries
    /// available" rather than a failure.
    #[error("Queries file not found: {0}")]
    FileNotFound(String),

    /// A requested query number is outside the deck.
    #[error("Query {requested} is out of range. Available queries: 1-{count}")]
    OutOfRange { requested: usize, count: usize },

    /// Bad command-line input (selector that is neither a number nor 'all').
    #[error("Usage error: {0}")]
    Usage(String),

    /// Configuration errors (invalid config file, missing required fields, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal application errors (unexpected states, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DeckError {
    /// Creates a connection error with the given message.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a statement execution error with the given message.
    pub fn statement(msg: impl Into<String>) -> Self {
        Self::Statement(msg.into())
    }

    /// Creates a file-not-found error for the given path.
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound(path.into())
    }

    /// Creates a usage error with the given message.
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Connection(_) => "Connection Error",
            Self::Statement(_) => "Statement Error",
            Self::FileNotFound(_) => "File Not Found",
            Self::OutOfRange { .. } => "Out Of Range",
            Self::Usage(_) => "Usage Error",
            Self::Config(_) => "Configuration Error",
            Self::Internal(_) => "Internal Error",
        }
    }

    /// Returns true if this error aborts the whole invocation rather than
    /// a single statement.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Connection(_) | Self::Usage(_) | Self::Config(_) | Self::Internal(_)
        )
    }
}

/// Result type alias using DeckError.
pub type Result<T> = std::result::Result<T, DeckError>;
