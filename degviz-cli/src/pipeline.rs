//! The single linear run: load, detect, clean, write, plot.

use std::fs;
use std::path::PathBuf;

use degviz_core::{Result, Summarizable};
use degviz_io::csv::write_csv;
use degviz_io::read_table;
use degviz_stats::descriptive::describe;
use degviz_stats::volcano::{
    neg_log10_p, sort_by_fold_change, top_by_p_value, volcano_points, with_neg_log10_column,
    VolcanoSummary,
};
use degviz_stats::{clean, detect_columns, Thresholds};
use degviz_viz::{draw_distributions, draw_lollipop, draw_volcano, Figure, Lollipop};
use tracing::{info, warn};

use crate::config::Config;

pub const CLEAN_CSV: &str = "gse86202_clean.csv";
pub const TOP_CSV: &str = "top20_genes.csv";
pub const VOLCANO_PNG: &str = "volcano_gse86202.png";
pub const LOLLIPOP_PNG: &str = "lollipop_top20.png";
pub const DISTRIBUTIONS_PNG: &str = "distributions.png";

/// Number of lowest-p-value genes kept for the lollipop chart.
pub const TOP_N: usize = 20;

pub const LOLLIPOP_TITLE: &str = "Top 20 Significant Genes (Lollipop Plot)";

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub rows_read: usize,
    pub rows_kept: usize,
    pub summary: VolcanoSummary,
    /// Written files, in the order they are announced.
    pub saved: Vec<PathBuf>,
}

impl Summarizable for RunReport {
    fn summary(&self) -> String {
        format!(
            "{} rows read, {} kept, {} dropped; {}",
            self.rows_read,
            self.rows_kept,
            self.rows_read - self.rows_kept,
            self.summary.summary()
        )
    }
}

/// Execute every stage for `config`.
///
/// Column detection runs before the output directory is created, so a
/// table without fold-change or p-value columns leaves nothing on disk.
pub fn run(config: &Config) -> Result<RunReport> {
    let input = config.input_path();
    info!(path = %input.display(), "reading input table");
    let table = read_table(&input)?;
    let rows_read = table.n_rows();
    info!("loaded {}", table.summary());

    let columns = detect_columns(table.headers(), &config.columns.overrides())?;
    info!(
        log_fc = %columns.log_fc.name,
        p_value = %columns.p_value.name,
        gene_id = %columns.gene_id.name,
        "detected columns"
    );

    let out_dir = config.out_dir();
    fs::create_dir_all(&out_dir)?;

    let working = clean(table, &columns);
    let clean_path = out_dir.join(CLEAN_CSV);
    write_csv(&clean_path, &working.to_table()?)?;
    info!(path = %clean_path.display(), rows = working.len(), "wrote cleaned table");

    let thresholds = Thresholds::default();
    let points = volcano_points(&working, &thresholds);
    let summary = VolcanoSummary::from_points(&points);

    let volcano_path = out_dir.join(VOLCANO_PNG);
    let title = format!("Volcano Plot - {}", config.plot.dataset);
    draw_volcano(&volcano_path, &points, &thresholds, &title, &Figure::volcano(config.plot.dpi))?;

    let top = top_by_p_value(&working, TOP_N);
    let top_path = out_dir.join(TOP_CSV);
    write_csv(&top_path, &with_neg_log10_column(&top)?)?;

    let display = sort_by_fold_change(&top);
    let items: Vec<Lollipop> = display
        .rows()
        .iter()
        .map(|row| Lollipop {
            gene: display.gene_label(row),
            log2_fold_change: row.log2_fold_change,
        })
        .collect();
    let lollipop_path = out_dir.join(LOLLIPOP_PNG);
    draw_lollipop(&lollipop_path, &items, LOLLIPOP_TITLE, &Figure::lollipop(config.plot.dpi))?;

    let fold_changes = working.log2_fold_changes();
    let neg_log_p: Vec<f64> = working.p_values().into_iter().map(neg_log10_p).collect();
    let dist_path = out_dir.join(DISTRIBUTIONS_PNG);
    draw_distributions(
        &dist_path,
        &fold_changes,
        &neg_log_p,
        &Figure::distributions(config.plot.dpi),
    )?;

    match describe(&fold_changes) {
        Ok(stats) => info!("log2 fold change: {}", stats.summary()),
        Err(_) => warn!("no rows survived cleaning"),
    }

    let report = RunReport {
        rows_read,
        rows_kept: working.len(),
        summary,
        saved: vec![clean_path, volcano_path, lollipop_path, dist_path, top_path],
    };
    info!("{}", report.summary());
    Ok(report)
}
