//! Heuristic detection of the semantic columns in a differential-expression
//! table.
//!
//! Each [`ColumnRole`] owns an ordered list of [`Rule`]s. Rules are tried in
//! priority order; for each rule the columns are scanned in table order and
//! the first column whose trimmed, lowercased name satisfies the rule wins.
//! A forced override name, when present verbatim among the headers, short
//! circuits the scan.

use degviz_core::{DegvizError, Result};
use tracing::debug;

/// A predicate over a trimmed, lowercased column name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The name contains every token.
    AllTokens(&'static [&'static str]),
    /// The name equals the token.
    Exact(&'static str),
}

impl Rule {
    /// Whether `lowered` satisfies this rule.
    pub fn matches(&self, lowered: &str) -> bool {
        match self {
            Rule::AllTokens(tokens) => tokens.iter().all(|t| lowered.contains(t)),
            Rule::Exact(name) => lowered == *name,
        }
    }
}

/// Fold-change rules, strongest first.
pub const LOG_FC_RULES: &[Rule] = &[
    Rule::AllTokens(&["log", "fc"]),
    Rule::AllTokens(&["log2", "fold"]),
    Rule::AllTokens(&["fold_change"]),
    Rule::AllTokens(&["log2"]),
];

/// P-value rules, strongest first.
pub const P_VALUE_RULES: &[Rule] = &[
    Rule::AllTokens(&["p_value"]),
    Rule::AllTokens(&["p", "value"]),
    Rule::AllTokens(&["pval"]),
    Rule::AllTokens(&["p", "val"]),
    Rule::AllTokens(&["p_"]),
];

/// Gene identifier rules, strongest first.
pub const GENE_ID_RULES: &[Rule] = &[
    Rule::Exact("gene"),
    Rule::Exact("gene_id"),
    Rule::Exact("ensembl_gene_id"),
    Rule::Exact("symbol"),
    Rule::AllTokens(&["gene"]),
];

/// The semantic meaning of a detected column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    LogFoldChange,
    PValue,
    GeneId,
}

impl ColumnRole {
    /// Human-readable label used in diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            ColumnRole::LogFoldChange => "fold-change",
            ColumnRole::PValue => "p-value",
            ColumnRole::GeneId => "gene id",
        }
    }

    /// The ordered rule list for this role.
    pub fn rules(self) -> &'static [Rule] {
        match self {
            ColumnRole::LogFoldChange => LOG_FC_RULES,
            ColumnRole::PValue => P_VALUE_RULES,
            ColumnRole::GeneId => GENE_ID_RULES,
        }
    }
}

/// A column picked by the detector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedColumn {
    /// Position in the table header.
    pub index: usize,
    /// Header name exactly as loaded.
    pub name: String,
}

/// Optional forced column names, one per role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnOverrides {
    pub log_fc: Option<String>,
    pub p_value: Option<String>,
    pub gene_id: Option<String>,
}

impl ColumnOverrides {
    fn get(&self, role: ColumnRole) -> Option<&str> {
        match role {
            ColumnRole::LogFoldChange => self.log_fc.as_deref(),
            ColumnRole::PValue => self.p_value.as_deref(),
            ColumnRole::GeneId => self.gene_id.as_deref(),
        }
    }
}

/// The three resolved columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedColumns {
    pub log_fc: DetectedColumn,
    pub p_value: DetectedColumn,
    pub gene_id: DetectedColumn,
    /// True when no gene rule matched and the first column was used.
    pub gene_id_fallback: bool,
}

/// First column satisfying the earliest matching rule.
pub fn find_column(headers: &[String], rules: &[Rule]) -> Option<DetectedColumn> {
    let lowered: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
    rules.iter().find_map(|rule| {
        lowered
            .iter()
            .position(|name| rule.matches(name))
            .map(|index| DetectedColumn {
                index,
                name: headers[index].clone(),
            })
    })
}

/// Resolve one role: the override if it names an existing header, otherwise
/// the rule scan.
pub fn detect_column(
    headers: &[String],
    role: ColumnRole,
    forced: Option<&str>,
) -> Option<DetectedColumn> {
    if let Some(name) = forced {
        if let Some(index) = headers.iter().position(|h| h == name) {
            debug!(role = role.label(), column = name, "using forced column");
            return Some(DetectedColumn {
                index,
                name: name.to_string(),
            });
        }
        debug!(
            role = role.label(),
            column = name,
            "forced column not present, falling back to heuristics"
        );
    }
    let found = find_column(headers, role.rules());
    if let Some(col) = &found {
        debug!(role = role.label(), column = %col.name, "detected column");
    }
    found
}

/// Detect fold-change, p-value and gene id columns.
///
/// Fails with [`DegvizError::ColumnNotFound`] when fold-change or p-value
/// cannot be resolved. The gene id falls back to the first column.
pub fn detect_columns(headers: &[String], overrides: &ColumnOverrides) -> Result<DetectedColumns> {
    let log_fc = detect_column(headers, ColumnRole::LogFoldChange, overrides.get(ColumnRole::LogFoldChange));
    let p_value = detect_column(headers, ColumnRole::PValue, overrides.get(ColumnRole::PValue));
    let gene_id = detect_column(headers, ColumnRole::GeneId, overrides.get(ColumnRole::GeneId));

    let log_fc = log_fc.ok_or(DegvizError::ColumnNotFound(ColumnRole::LogFoldChange.label()))?;
    let p_value = p_value.ok_or(DegvizError::ColumnNotFound(ColumnRole::PValue.label()))?;

    let (gene_id, gene_id_fallback) = match gene_id {
        Some(col) => (col, false),
        None => {
            debug!(column = %headers[0], "no gene id column, using first column");
            (
                DetectedColumn {
                    index: 0,
                    name: headers[0].clone(),
                },
                true,
            )
        }
    };

    Ok(DetectedColumns {
        log_fc,
        p_value,
        gene_id,
        gene_id_fallback,
    })
}
