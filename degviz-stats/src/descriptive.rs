//! Summary statistics for a numeric column.
//!
//! [`describe`] backs the run summary; [`std_dev`] feeds the KDE bandwidth.

use degviz_core::{DegvizError, Result, Summarizable};

/// Location and spread of one cleaned column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation; NaN below two values.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl Summarizable for ColumnStats {
    fn summary(&self) -> String {
        format!(
            "n={} mean={:.3} sd={:.3} median={:.3} range=[{:.3}, {:.3}]",
            self.count, self.mean, self.std_dev, self.median, self.min, self.max,
        )
    }
}

fn require_values(what: &str, data: &[f64]) -> Result<()> {
    if data.is_empty() {
        Err(DegvizError::InvalidInput(format!("{what}: no values")))
    } else {
        Ok(())
    }
}

/// Summarize a non-empty column of finite values.
pub fn describe(data: &[f64]) -> Result<ColumnStats> {
    require_values("describe", data)?;

    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(ColumnStats {
        count: sorted.len(),
        mean: mean(data)?,
        median: percentile(&sorted, 0.5),
        std_dev: std_dev(data, 1).unwrap_or(f64::NAN),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
    })
}

pub fn mean(data: &[f64]) -> Result<f64> {
    require_values("mean", data)?;
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Standard deviation dividing by `n - ddof`.
pub fn std_dev(data: &[f64], ddof: usize) -> Result<f64> {
    if data.len() <= ddof {
        return Err(DegvizError::InvalidInput(format!(
            "std_dev: {} values, ddof {ddof}",
            data.len()
        )));
    }
    let m = mean(data)?;
    let sum_sq = data.iter().fold(0.0, |acc, &x| acc + (x - m) * (x - m));
    Ok((sum_sq / (data.len() - ddof) as f64).sqrt())
}

// Linear interpolation between closest ranks; `sorted` is non-empty.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let last = sorted.len() - 1;
    let rank = q * last as f64;
    let below = rank.floor() as usize;
    if below >= last {
        return sorted[last];
    }
    let w = rank - below as f64;
    sorted[below] + w * (sorted[below + 1] - sorted[below])
}
