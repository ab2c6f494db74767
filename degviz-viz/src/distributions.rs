//! Side-by-side histograms of fold-change and −log10 p-value, each with a
//! KDE curve scaled to bin counts.

use std::path::Path;

use degviz_core::Result;
use degviz_stats::histogram::{histogram, kde_count_curve};
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::{info, warn};

use crate::render_err;
use crate::style::{Figure, FONT_FAMILY, LABEL_PT, POINT_BLUE, SIGNIFICANT_RED, TICK_PT, TITLE_PT};

/// Number of histogram bins per panel.
pub const N_BINS: usize = 40;
const KDE_POINTS: usize = 200;

/// One histogram panel.
pub struct Panel<'a> {
    pub title: &'a str,
    pub x_desc: &'a str,
    pub values: &'a [f64],
    pub color: RGBColor,
}

pub fn draw_distributions(
    path: &Path,
    log2_fold_changes: &[f64],
    neg_log10_p: &[f64],
    figure: &Figure,
) -> Result<()> {
    let root = BitMapBackend::new(path, figure.pixels()).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let areas = root.split_evenly((1, 2));
    let panels = [
        Panel {
            title: "Distribution of log2 Fold Change",
            x_desc: "log2 Fold Change",
            values: log2_fold_changes,
            color: POINT_BLUE,
        },
        Panel {
            title: "Distribution of -log10(p-value)",
            x_desc: "-log10(p-value)",
            values: neg_log10_p,
            color: SIGNIFICANT_RED,
        },
    ];
    for (area, panel) in areas.iter().zip(panels.iter()) {
        draw_panel(area, panel, figure)?;
    }

    root.present().map_err(render_err)?;
    info!(path = %path.display(), values = log2_fold_changes.len(), "distribution plots saved");
    Ok(())
}

fn draw_panel(area: &DrawingArea<BitMapBackend<'_>, Shift>, panel: &Panel<'_>, figure: &Figure) -> Result<()> {
    let hist = if panel.values.is_empty() {
        warn!(panel = panel.title, "no values to plot");
        None
    } else {
        Some(histogram(panel.values, N_BINS)?)
    };
    let curve = hist.as_ref().and_then(|h| kde_count_curve(panel.values, h, KDE_POINTS));

    let (x_lo, x_hi) = hist.as_ref().map_or((0.0, 1.0), |h| (h.lo, h.hi));
    let curve_max = curve
        .as_ref()
        .map_or(0.0, |c| c.iter().map(|p| p.1).fold(0.0, f64::max));
    let bar_max = hist.as_ref().map_or(0, |h| h.max_count()) as f64;
    let y_hi = (bar_max.max(curve_max) * 1.05).max(1.0);

    let mut chart = ChartBuilder::on(area)
        .margin(figure.pt(8.0))
        .caption(panel.title, (FONT_FAMILY, figure.pt(TITLE_PT)))
        .x_label_area_size(figure.pt(36.0))
        .y_label_area_size(figure.pt(44.0))
        .build_cartesian_2d(x_lo..x_hi, 0.0..y_hi)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(panel.x_desc)
        .y_desc("Count")
        .axis_desc_style((FONT_FAMILY, figure.pt(LABEL_PT)))
        .label_style((FONT_FAMILY, figure.pt(TICK_PT)))
        .draw()
        .map_err(render_err)?;

    if let Some(h) = &hist {
        let fill = panel.color.mix(0.5).filled();
        let edge = WHITE.stroke_width(1);
        chart
            .draw_series(h.bins().map(|(x0, x1, c)| Rectangle::new([(x0, 0.0), (x1, c as f64)], fill)))
            .map_err(render_err)?;
        chart
            .draw_series(h.bins().map(|(x0, x1, c)| Rectangle::new([(x0, 0.0), (x1, c as f64)], edge)))
            .map_err(render_err)?;
    }
    if let Some(c) = curve {
        chart
            .draw_series(LineSeries::new(c, panel.color.stroke_width(figure.pt(1.5))))
            .map_err(render_err)?;
    }
    Ok(())
}
