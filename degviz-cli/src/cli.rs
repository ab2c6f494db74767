use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Every flag is optional; with none the run reads
/// `data/GSE86202_Gene_differential_expression.xlsx` and writes `outputs/`
/// under the current directory.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about)]
pub struct Args {
    /// Project root holding `data/` and `outputs/`
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Input table (.xlsx, .xls, .ods, .csv, .tsv)
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output directory
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Force the fold-change column (used only if present)
    #[arg(long, value_name = "NAME")]
    pub logfc_col: Option<String>,

    /// Force the p-value column (used only if present)
    #[arg(long, value_name = "NAME")]
    pub pval_col: Option<String>,

    /// Force the gene id column (used only if present)
    #[arg(long, value_name = "NAME")]
    pub gene_col: Option<String>,

    /// Optional TOML config file; flags override its values
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Image resolution in dots per inch
    #[arg(long)]
    pub dpi: Option<u32>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
