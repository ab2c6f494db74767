//! In-memory table of typed cells.
//!
//! [`Table`] keeps the header row and data rows exactly as loaded. Cells are
//! typed loosely ([`Cell`]) so that numeric coercion can be deferred to the
//! caller, which decides what counts as missing.

use std::fmt;

use degviz_core::{DegvizError, Result, Summarizable};

/// A single spreadsheet or CSV cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Blank cell.
    Empty,
    /// Numeric cell (integers, floats and Excel date serials).
    Number(f64),
    /// Free text, kept verbatim.
    Text(String),
    /// Boolean cell.
    Bool(bool),
}

impl Cell {
    /// Coerce the cell to a number.
    ///
    /// Text is trimmed and parsed, booleans map to `1.0`/`0.0`. Returns `None`
    /// for blanks and anything that does not parse. The result may be
    /// non-finite (`"inf"`, `"NaN"`); filtering those is up to the caller.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Cell::Empty => None,
            Cell::Number(v) => Some(*v),
            Cell::Text(s) => s.trim().parse::<f64>().ok(),
            Cell::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        }
    }

    /// Whether the cell is blank.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Build a text cell, mapping the empty string to [`Cell::Empty`].
    pub fn text(s: impl Into<String>) -> Self {
        let s = s.into();
        if s.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(s)
        }
    }
}

/// Render a float the way a dataframe library writes it to CSV: always with
/// a fractional part or exponent (`2.0`, `0.001`, `1e-300`).
pub fn format_number(v: f64) -> String {
    format!("{v:?}")
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Number(v) => f.write_str(&format_number(*v)),
            Cell::Text(s) => f.write_str(s),
            Cell::Bool(true) => f.write_str("True"),
            Cell::Bool(false) => f.write_str("False"),
        }
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Number(v)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::text(s)
    }
}

/// A rectangular table: one header row plus data rows of equal width.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create a table, padding short rows with [`Cell::Empty`].
    ///
    /// Rows wider than the header are rejected.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self> {
        let width = headers.len();
        let mut padded = Vec::with_capacity(rows.len());
        for (i, mut row) in rows.into_iter().enumerate() {
            if row.len() > width {
                return Err(DegvizError::InvalidInput(format!(
                    "row {i} has {} cells, header has {width}",
                    row.len()
                )));
            }
            row.resize(width, Cell::Empty);
            padded.push(row);
        }
        Ok(Self {
            headers,
            rows: padded,
        })
    }

    /// Column names in table order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Consume the table, returning headers and rows.
    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<Cell>>) {
        (self.headers, self.rows)
    }

    /// Number of data rows.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.headers.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Summarizable for Table {
    fn summary(&self) -> String {
        format!("{} rows x {} columns", self.n_rows(), self.n_cols())
    }
}
