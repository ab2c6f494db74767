//! Fixed-width histograms and Gaussian kernel density estimates.
//!
//! Binning follows the usual dataframe convention: `n_bins` equal-width bins
//! spanning `[min, max]`, the last bin closed on the right. A constant sample
//! is spread over `[v - 0.5, v + 0.5]`.

use std::f64::consts::PI;

use degviz_core::{DegvizError, Result};

use crate::descriptive;

/// Largest magnitude used for a bin range, so that `hi - lo` stays finite.
pub const RANGE_LIMIT: f64 = f64::MAX / 4.0;

/// Bin counts over an equal-width partition of `[lo, hi]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub lo: f64,
    pub hi: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Width of every bin.
    pub fn bin_width(&self) -> f64 {
        (self.hi - self.lo) / self.counts.len() as f64
    }

    /// `(left edge, right edge, count)` per bin.
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        let w = self.bin_width();
        self.counts.iter().enumerate().map(move |(i, &c)| {
            let x0 = self.lo + i as f64 * w;
            (x0, x0 + w, c)
        })
    }

    /// Tallest bin.
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Number of binned observations.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Bin `data` into `n_bins` equal-width bins.
pub fn histogram(data: &[f64], n_bins: usize) -> Result<Histogram> {
    if n_bins == 0 {
        return Err(DegvizError::InvalidInput(
            "histogram: n_bins must be positive".into(),
        ));
    }
    if data.is_empty() {
        return Err(DegvizError::InvalidInput(
            "histogram: data must not be empty".into(),
        ));
    }
    if data.iter().any(|v| !v.is_finite()) {
        return Err(DegvizError::InvalidInput(
            "histogram: data must be finite".into(),
        ));
    }

    let (mut lo, mut hi) = data
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    if !(hi - lo).is_finite() {
        lo = lo.max(-RANGE_LIMIT);
        hi = hi.min(RANGE_LIMIT);
    }

    let width = (hi - lo) / n_bins as f64;
    let mut counts = vec![0usize; n_bins];
    for &v in data {
        let idx = (((v - lo) / width).floor() as usize).min(n_bins - 1);
        counts[idx] += 1;
    }

    Ok(Histogram { lo, hi, counts })
}

/// Scott's rule bandwidth `σ · n^(-1/5)` with the sample standard deviation.
///
/// `None` when fewer than two observations or zero spread.
pub fn scott_bandwidth(data: &[f64]) -> Option<f64> {
    if data.len() < 2 {
        return None;
    }
    let sd = descriptive::std_dev(data, 1).ok()?;
    let bw = sd * (data.len() as f64).powf(-0.2);
    (bw.is_finite() && bw > 0.0).then_some(bw)
}

/// Gaussian kernel density of `data` evaluated at each point of `at`.
pub fn gaussian_kde(data: &[f64], bandwidth: f64, at: &[f64]) -> Vec<f64> {
    let norm = 1.0 / (data.len() as f64 * bandwidth * (2.0 * PI).sqrt());
    at.iter()
        .map(|&x| {
            let s: f64 = data
                .iter()
                .map(|&xi| {
                    let z = (x - xi) / bandwidth;
                    (-0.5 * z * z).exp()
                })
                .sum();
            s * norm
        })
        .collect()
}

/// `n` evenly spaced values from `lo` to `hi` inclusive.
pub fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let step = (hi - lo) / (n - 1) as f64;
            (0..n).map(|i| lo + i as f64 * step).collect()
        }
    }
}

/// KDE curve over the histogram's span, scaled from density to bin counts
/// so it overlays the bars.
pub fn kde_count_curve(data: &[f64], hist: &Histogram, n_points: usize) -> Option<Vec<(f64, f64)>> {
    let bw = scott_bandwidth(data)?;
    let xs = linspace(hist.lo, hist.hi, n_points);
    let scale = data.len() as f64 * hist.bin_width();
    let ys = gaussian_kde(data, bw, &xs);
    if ys.iter().any(|y| !y.is_finite()) {
        return None;
    }
    Some(xs.into_iter().zip(ys).map(|(x, y)| (x, y * scale)).collect())
}
