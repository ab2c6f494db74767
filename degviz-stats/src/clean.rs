//! Numeric coercion and row filtering.
//!
//! [`clean`] turns a raw [`Table`] plus the detected columns into a
//! [`WorkingTable`]: fold-change and p-value are coerced to numbers, rows
//! where either is missing or non-finite are dropped, and the three detected
//! headers are renamed to fixed internal names.

use degviz_core::{Result, Summarizable};
use degviz_io::{Cell, Table};
use tracing::{debug, warn};

use crate::detect::DetectedColumns;

/// Internal name of the fold-change column.
pub const WORK_COL_LOGFC: &str = "logfc";
/// Internal name of the p-value column.
pub const WORK_COL_PVAL: &str = "pval";
/// Internal name of the gene id column.
pub const WORK_COL_GENE: &str = "gene_id";

/// One kept row: the parsed values plus every original cell.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkingRow {
    pub log2_fold_change: f64,
    pub p_value: f64,
    pub cells: Vec<Cell>,
}

/// A cleaned table. Every row has a finite fold-change and p-value.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkingTable {
    headers: Vec<String>,
    rows: Vec<WorkingRow>,
    log_fc_idx: usize,
    p_value_idx: usize,
    gene_idx: usize,
}

impl WorkingTable {
    /// Renamed headers in table order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Kept rows.
    pub fn rows(&self) -> &[WorkingRow] {
        &self.rows
    }

    /// Number of kept rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no rows survived cleaning.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Fold-change values in row order.
    pub fn log2_fold_changes(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.log2_fold_change).collect()
    }

    /// P-values in row order.
    pub fn p_values(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.p_value).collect()
    }

    /// Gene label of a row as text.
    pub fn gene_label(&self, row: &WorkingRow) -> String {
        row.cells[self.gene_idx].to_string()
    }

    /// A table with the same columns holding `rows`.
    pub fn with_rows(&self, rows: Vec<WorkingRow>) -> WorkingTable {
        WorkingTable {
            headers: self.headers.clone(),
            rows,
            log_fc_idx: self.log_fc_idx,
            p_value_idx: self.p_value_idx,
            gene_idx: self.gene_idx,
        }
    }

    /// Flatten back into a [`Table`] for writing. The fold-change and
    /// p-value columns hold the coerced numbers.
    pub fn to_table(&self) -> Result<Table> {
        let rows: Vec<Vec<Cell>> = self
            .rows
            .iter()
            .map(|r| {
                let mut cells = r.cells.clone();
                cells[self.log_fc_idx] = Cell::Number(r.log2_fold_change);
                cells[self.p_value_idx] = Cell::Number(r.p_value);
                cells
            })
            .collect();
        Table::new(self.headers.clone(), rows)
    }
}

impl Summarizable for WorkingTable {
    fn summary(&self) -> String {
        format!("{} rows x {} columns", self.len(), self.headers.len())
    }
}

fn finite(cell: &Cell) -> Option<f64> {
    cell.to_f64().filter(|v| v.is_finite())
}

/// Coerce, filter and rename. Row count never increases.
pub fn clean(table: Table, cols: &DetectedColumns) -> WorkingTable {
    let n_input = table.n_rows();
    let (mut headers, raw_rows) = table.into_parts();

    let log_fc_idx = cols.log_fc.index;
    let p_value_idx = cols.p_value.index;
    let gene_idx = cols.gene_id.index;

    headers[log_fc_idx] = WORK_COL_LOGFC.to_string();
    if p_value_idx != log_fc_idx {
        headers[p_value_idx] = WORK_COL_PVAL.to_string();
    }
    if gene_idx != log_fc_idx && gene_idx != p_value_idx {
        headers[gene_idx] = WORK_COL_GENE.to_string();
    }

    let rows: Vec<WorkingRow> = raw_rows
        .into_iter()
        .filter_map(|cells| {
            let log2_fold_change = finite(&cells[log_fc_idx])?;
            let p_value = finite(&cells[p_value_idx])?;
            Some(WorkingRow {
                log2_fold_change,
                p_value,
                cells,
            })
        })
        .collect();

    let dropped = n_input - rows.len();
    if dropped > 0 {
        warn!(dropped, kept = rows.len(), "dropped rows with missing fold-change or p-value");
    } else {
        debug!(kept = rows.len(), "all rows kept");
    }

    WorkingTable {
        headers,
        rows,
        log_fc_idx,
        p_value_idx,
        gene_idx,
    }
}
