//! Structured error types for the degviz workspace.

use thiserror::Error;

/// Unified error type for all degviz operations.
#[derive(Debug, Error)]
pub enum DegvizError {
    /// I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error (malformed spreadsheet or CSV input)
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid input (empty sheet, bad arguments, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A required semantic column (fold-change, p-value) could not be found.
    #[error("could not detect {0} column")]
    ColumnNotFound(&'static str),

    /// Chart rendering or image encoding failure
    #[error("render error: {0}")]
    Render(String),

    /// Malformed configuration file
    #[error("config error: {0}")]
    Config(String),
}

impl DegvizError {
    /// Whether this is the fatal missing-column condition.
    pub fn is_column_not_found(&self) -> bool {
        matches!(self, DegvizError::ColumnNotFound(_))
    }
}

/// Convenience alias used throughout the degviz workspace.
pub type Result<T> = std::result::Result<T, DegvizError>;
