//! Table I/O for the degviz toolkit.
//!
//! Supported formats:
//! - **XLSX/XLS/XLSM/ODS**: first worksheet, via the `xlsx` feature (enabled by default)
//! - **CSV/TSV**: via the `csv` feature (enabled by default)
//!
//! [`read_table`] picks the reader from the file extension.

pub mod table;

#[cfg(feature = "csv")]
pub mod csv;

#[cfg(feature = "xlsx")]
pub mod xlsx;

use std::path::Path;

use degviz_core::{DegvizError, Result};

pub use table::{format_number, Cell, Table};

/// Load a table, choosing the reader from the file extension.
pub fn read_table(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        #[cfg(feature = "xlsx")]
        "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => self::xlsx::read_xlsx(path),
        #[cfg(feature = "csv")]
        "csv" => self::csv::read_csv(path),
        #[cfg(feature = "csv")]
        "tsv" | "txt" => self::csv::read_delimited(path, b'\t'),
        _ => Err(DegvizError::InvalidInput(format!(
            "{}: unsupported table format '{ext}'",
            path.display()
        ))),
    }
}
