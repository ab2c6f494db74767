//! CSV/TSV table reading and writing.

use std::fs::File;
use std::path::Path;

use ::csv::{ReaderBuilder, WriterBuilder};
use degviz_core::{DegvizError, Result};

use crate::table::{Cell, Table};

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        DegvizError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })
}

/// Read a delimited text file with a header row into a [`Table`].
///
/// Every field is kept as text; blank fields become [`Cell::Empty`].
pub fn read_delimited(path: impl AsRef<Path>, delimiter: u8) -> Result<Table> {
    let path = path.as_ref();
    let file = open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| DegvizError::Parse(e.to_string()))?
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| DegvizError::Parse(e.to_string()))?;
        rows.push(record.iter().map(Cell::text).collect());
    }

    Table::new(headers, rows)
}

/// Read a comma-separated file.
pub fn read_csv(path: impl AsRef<Path>) -> Result<Table> {
    read_delimited(path, b',')
}

/// Write `table` as comma-separated text with a header row.
///
/// The file is created or truncated.
pub fn write_csv(path: impl AsRef<Path>, table: &Table) -> Result<()> {
    let path = path.as_ref();
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .map_err(|e| DegvizError::Io(std::io::Error::other(format!("{}: {e}", path.display()))))?;

    writer
        .write_record(table.headers())
        .map_err(|e| DegvizError::Parse(e.to_string()))?;
    for row in table.rows() {
        writer
            .write_record(row.iter().map(|c| c.to_string()))
            .map_err(|e| DegvizError::Parse(e.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}
