use std::fs;
use std::path::{Path, PathBuf};

use degviz_core::{DegvizError, Result};
use degviz_stats::ColumnOverrides;
use degviz_viz::style::DEFAULT_DPI;
use serde::Deserialize;

use crate::cli::Args;

/// Input location relative to the project root.
pub const DEFAULT_INPUT: &str = "data/GSE86202_Gene_differential_expression.xlsx";
/// Output directory relative to the project root.
pub const DEFAULT_OUT_DIR: &str = "outputs";
pub const DEFAULT_DATASET: &str = "GSE86202";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnsConfig {
    pub log_fc: Option<String>,
    pub p_value: Option<String>,
    pub gene_id: Option<String>,
}

impl ColumnsConfig {
    pub fn overrides(&self) -> ColumnOverrides {
        ColumnOverrides {
            log_fc: self.log_fc.clone(),
            p_value: self.p_value.clone(),
            gene_id: self.gene_id.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    pub root: PathBuf,
    pub input: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            input: None,
            out_dir: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfig {
    /// Dataset label shown in the volcano title.
    pub dataset: String,
    pub dpi: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            dataset: DEFAULT_DATASET.to_string(),
            dpi: DEFAULT_DPI,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub columns: ColumnsConfig,
    pub paths: PathsConfig,
    pub plot: PlotConfig,
}

impl Config {
    /// Parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            DegvizError::Io(std::io::Error::new(
                e.kind(),
                format!("{}: {}", path.display(), e),
            ))
        })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text).map_err(|e| DegvizError::Config(e.to_string()))?;
        if config.plot.dpi == 0 {
            return Err(DegvizError::Config("plot.dpi must be positive".into()));
        }
        Ok(config)
    }

    /// Config file (if any) with command-line flags layered on top.
    pub fn resolve(args: &Args) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_args(args);
        if config.plot.dpi == 0 {
            return Err(DegvizError::Config("--dpi must be positive".into()));
        }
        Ok(config)
    }

    pub fn apply_args(&mut self, args: &Args) {
        if let Some(root) = &args.root {
            self.paths.root = root.clone();
        }
        if let Some(input) = &args.input {
            self.paths.input = Some(input.clone());
        }
        if let Some(out_dir) = &args.out_dir {
            self.paths.out_dir = Some(out_dir.clone());
        }
        if let Some(c) = &args.logfc_col {
            self.columns.log_fc = Some(c.clone());
        }
        if let Some(c) = &args.pval_col {
            self.columns.p_value = Some(c.clone());
        }
        if let Some(c) = &args.gene_col {
            self.columns.gene_id = Some(c.clone());
        }
        if let Some(dpi) = args.dpi {
            self.plot.dpi = dpi;
        }
    }

    /// Explicit input, else the default file under the root.
    pub fn input_path(&self) -> PathBuf {
        self.paths
            .input
            .clone()
            .unwrap_or_else(|| self.paths.root.join(DEFAULT_INPUT))
    }

    /// Explicit output directory, else `outputs/` under the root.
    pub fn out_dir(&self) -> PathBuf {
        self.paths
            .out_dir
            .clone()
            .unwrap_or_else(|| self.paths.root.join(DEFAULT_OUT_DIR))
    }
}
