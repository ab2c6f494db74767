//! Volcano-plot derivation and top-hit selection.
//!
//! [`volcano_points`] maps every cleaned row to a [`VolcanoPoint`]
//! (log2 fold-change vs. −log10 p-value plus a significance flag).
//! [`top_by_p_value`] and [`sort_by_fold_change`] build the lollipop table.

use degviz_core::{Result, Summarizable};
use degviz_io::{Cell, Table};

use crate::clean::WorkingTable;

/// Substitute for a p-value of zero before the log transform.
pub const P_VALUE_FLOOR: f64 = 1e-300;

/// Name of the derived −log10 p-value column.
pub const WORK_COL_NEG_LOG10_P: &str = "neglog10_p";

/// Significance cutoffs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// A gene must have `p_value < p_value` ...
    pub p_value: f64,
    /// ... and `|log2_fold_change| >= abs_log2_fc`.
    pub abs_log2_fc: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            p_value: 0.05,
            abs_log2_fc: 1.0,
        }
    }
}

impl Thresholds {
    /// Whether a gene passes both cutoffs.
    pub fn is_significant(&self, log2_fold_change: f64, p_value: f64) -> bool {
        p_value < self.p_value && log2_fold_change.abs() >= self.abs_log2_fc
    }

    /// Height of the horizontal p-value guide line.
    pub fn neg_log10_p_line(&self) -> f64 {
        neg_log10_p(self.p_value)
    }
}

/// `-log10(p)`, with non-positive p-values floored to [`P_VALUE_FLOOR`].
pub fn neg_log10_p(p_value: f64) -> f64 {
    let p = if p_value <= 0.0 { P_VALUE_FLOOR } else { p_value };
    -p.log10()
}

/// A point for a volcano plot.
#[derive(Debug, Clone, PartialEq)]
pub struct VolcanoPoint {
    /// Gene label from the gene id column.
    pub gene: String,
    /// Log2 fold-change.
    pub log2_fold_change: f64,
    /// −log10(p-value), finite.
    pub neg_log10_p: f64,
    /// Whether this gene passes the significance thresholds.
    pub significant: bool,
}

/// Convert every cleaned row into a volcano-plot point, in row order.
pub fn volcano_points(table: &WorkingTable, thresholds: &Thresholds) -> Vec<VolcanoPoint> {
    table
        .rows()
        .iter()
        .map(|row| VolcanoPoint {
            gene: table.gene_label(row),
            log2_fold_change: row.log2_fold_change,
            neg_log10_p: neg_log10_p(row.p_value),
            significant: thresholds.is_significant(row.log2_fold_change, row.p_value),
        })
        .collect()
}

/// Counts over a set of volcano points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolcanoSummary {
    pub total: usize,
    pub significant: usize,
    pub up: usize,
    pub down: usize,
}

impl VolcanoSummary {
    pub fn from_points(points: &[VolcanoPoint]) -> Self {
        let sig = points.iter().filter(|p| p.significant);
        let up = sig.clone().filter(|p| p.log2_fold_change > 0.0).count();
        let significant = sig.count();
        Self {
            total: points.len(),
            significant,
            up,
            down: significant - up,
        }
    }
}

impl Summarizable for VolcanoSummary {
    fn summary(&self) -> String {
        format!(
            "{} genes, {} significant ({} up, {} down)",
            self.total, self.significant, self.up, self.down
        )
    }
}

/// The `n` rows with the smallest p-values, ascending. Ties keep table order.
///
/// The result is an owned copy; the source table is untouched.
pub fn top_by_p_value(table: &WorkingTable, n: usize) -> WorkingTable {
    let mut rows = table.rows().to_vec();
    rows.sort_by(|a, b| a.p_value.total_cmp(&b.p_value));
    rows.truncate(n);
    table.with_rows(rows)
}

/// Reorder rows by ascending fold-change for display.
pub fn sort_by_fold_change(table: &WorkingTable) -> WorkingTable {
    let mut rows = table.rows().to_vec();
    rows.sort_by(|a, b| a.log2_fold_change.total_cmp(&b.log2_fold_change));
    table.with_rows(rows)
}

/// Flatten `table` with an extra trailing `neglog10_p` column.
pub fn with_neg_log10_column(table: &WorkingTable) -> Result<Table> {
    let (mut headers, mut rows) = table.to_table()?.into_parts();
    headers.push(WORK_COL_NEG_LOG10_P.to_string());
    for (cells, row) in rows.iter_mut().zip(table.rows()) {
        cells.push(Cell::Number(neg_log10_p(row.p_value)));
    }
    Table::new(headers, rows)
}
