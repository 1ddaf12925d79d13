//! Result-set types.
//!
//! A read statement yields a [`RowSet`]; its cells are [`Value`]s, which
//! keep NULL distinct from every real value until the report renders them.

use std::fmt;

/// Rows and column metadata returned by one read statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowSet {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

impl RowSet {
    /// An empty result with no columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a result from columns and rows.
    pub fn from_parts(columns: Vec<Column>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// True when the statement matched no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True when the statement produced no column metadata at all, which
    /// some administrative statements legitimately do. Distinct from an
    /// empty result that still names its columns.
    pub fn has_no_columns(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Name and type of one result column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub type_name: String,
}

impl Column {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// One result row, cell per column.
pub type Row = Vec<Value>;

/// A single nullable cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Renders the cell for report output. NULL becomes the literal token
    /// `NULL`; everything else uses its natural string form.
    pub fn render(&self) -> String {
        match self {
            Value::Null => "NULL".into(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(x) => x.to_string(),
            Value::Text(s) => s.clone(),
            Value::Bytes(raw) => format!("<{} bytes>", raw.len()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
