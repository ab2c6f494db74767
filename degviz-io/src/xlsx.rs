//! Excel/ODS worksheet reading.
//!
//! Loads the first worksheet of a workbook into a [`Table`]. The first row
//! of the used range is the header; blank header cells are named
//! `Unnamed: <index>`.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use degviz_core::{DegvizError, Result};
use tracing::debug;

use crate::table::{Cell, Table};

/// Read the first worksheet of `path` into a [`Table`].
pub fn read_xlsx(path: impl AsRef<Path>) -> Result<Table> {
    read_xlsx_sheet(path, 0)
}

/// Read the worksheet at position `sheet_idx` into a [`Table`].
pub fn read_xlsx_sheet(path: impl AsRef<Path>, sheet_idx: usize) -> Result<Table> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DegvizError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{}: no such file", path.display()),
        )));
    }

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| DegvizError::Parse(format!("{}: {e}", path.display())))?;
    let range = workbook
        .worksheet_range_at(sheet_idx)
        .ok_or_else(|| {
            DegvizError::InvalidInput(format!(
                "{}: worksheet {sheet_idx} missing",
                path.display()
            ))
        })?
        .map_err(|e| DegvizError::Parse(format!("{}: {e}", path.display())))?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .ok_or_else(|| DegvizError::InvalidInput(format!("{}: empty sheet", path.display())))?
        .iter()
        .enumerate()
        .map(|(i, cell)| header_name(i, cell))
        .collect();
    debug!(?headers, "worksheet header");

    let body: Vec<Vec<Cell>> = rows.map(|row| row.iter().map(to_cell).collect()).collect();
    Table::new(headers, body)
}

// Whole-number headers such as a year keep their integer spelling.
fn header_name(idx: usize, cell: &Data) -> String {
    match to_cell(cell) {
        Cell::Empty => format!("Unnamed: {idx}"),
        Cell::Number(v) if v.fract() == 0.0 && v.abs() < 1e15 => format!("{}", v as i64),
        other => other.to_string(),
    }
}

fn to_cell(cell: &Data) -> Cell {
    match cell {
        Data::Empty => Cell::Empty,
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::text(s.as_str()),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::Error(e) => Cell::Text(e.to_string()),
    }
}
