//! Volcano plot: log2 fold-change vs. −log10 p-value.

use std::path::Path;

use degviz_core::Result;
use degviz_stats::{Thresholds, VolcanoPoint};
use plotters::prelude::*;
use tracing::info;

use crate::render_err;
use crate::style::{padded_range, Figure, FONT_FAMILY, GUIDE_GREY, LABEL_PT, POINT_BLUE, SIGNIFICANT_RED, TICK_PT, TITLE_PT};

/// Render all points in blue, overlay significant points in red, and draw
/// dashed guides at `x = ±abs_log2_fc` and `y = -log10(p_value)`.
pub fn draw_volcano(
    path: &Path,
    points: &[VolcanoPoint],
    thresholds: &Thresholds,
    title: &str,
    figure: &Figure,
) -> Result<()> {
    let fc_line = thresholds.abs_log2_fc;
    let p_line = thresholds.neg_log10_p_line();

    let (x_lo, x_hi) = points.iter().fold((-fc_line, fc_line), |(lo, hi), p| {
        (lo.min(p.log2_fold_change), hi.max(p.log2_fold_change))
    });
    let y_hi = points.iter().map(|p| p.neg_log10_p).fold(p_line, f64::max);
    let (x_lo, x_hi) = padded_range(x_lo, x_hi, 0.05);
    let (_, y_hi) = padded_range(0.0, y_hi, 0.05);

    let root = BitMapBackend::new(path, figure.pixels()).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(figure.pt(8.0))
        .caption(title, (FONT_FAMILY, figure.pt(TITLE_PT)))
        .x_label_area_size(figure.pt(36.0))
        .y_label_area_size(figure.pt(44.0))
        .build_cartesian_2d(x_lo..x_hi, 0.0..y_hi)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("log2 Fold Change")
        .y_desc("-log10(p-value)")
        .axis_desc_style((FONT_FAMILY, figure.pt(LABEL_PT)))
        .label_style((FONT_FAMILY, figure.pt(TICK_PT)))
        .draw()
        .map_err(render_err)?;

    // Points past a clamped axis are pinned to its edge.
    let on_axis = |x: f64| x.clamp(x_lo, x_hi);

    let base_r = figure.marker_radius(10.0);
    chart
        .draw_series(points.iter().map(|p| {
            Circle::new((on_axis(p.log2_fold_change), p.neg_log10_p), base_r, POINT_BLUE.mix(0.6).filled())
        }))
        .map_err(render_err)?;

    let n_sig = points.iter().filter(|p| p.significant).count();
    if n_sig > 0 {
        let sig_r = figure.marker_radius(18.0);
        chart
            .draw_series(points.iter().filter(|p| p.significant).map(|p| {
                Circle::new((on_axis(p.log2_fold_change), p.neg_log10_p), sig_r, SIGNIFICANT_RED.mix(0.9).filled())
            }))
            .map_err(render_err)?;
    }

    let guide = GUIDE_GREY.stroke_width(figure.pt(1.0));
    let dash = figure.pt(4.0) as i32;
    let gap = figure.pt(2.0) as i32;
    for x in [fc_line, -fc_line] {
        chart
            .draw_series(DashedLineSeries::new(vec![(x, 0.0), (x, y_hi)], dash, gap, guide))
            .map_err(render_err)?;
    }
    chart
        .draw_series(DashedLineSeries::new(vec![(x_lo, p_line), (x_hi, p_line)], dash, gap, guide))
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    info!(path = %path.display(), points = points.len(), significant = n_sig, "volcano plot saved");
    Ok(())
}
