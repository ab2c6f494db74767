//! Lollipop chart of per-gene fold-change.
//!
//! Genes are drawn bottom to top in the order given, one row each, with a
//! stem from zero to the fold-change and a dot colored by sign.

use std::path::Path;

use degviz_core::Result;
use plotters::prelude::*;
use tracing::info;

use crate::render_err;
use crate::style::{
    padded_range, Figure, FONT_FAMILY, LABEL_PT, NEGATIVE_BLUE, SIGNIFICANT_RED, STEM_GREY, TICK_PT, TITLE_PT,
};

/// One lollipop: a gene label and its fold-change.
#[derive(Debug, Clone, PartialEq)]
pub struct Lollipop {
    pub gene: String,
    pub log2_fold_change: f64,
}

/// Dot color: red above zero, blue otherwise.
pub fn lollipop_color(log2_fold_change: f64) -> RGBColor {
    if log2_fold_change > 0.0 {
        SIGNIFICANT_RED
    } else {
        NEGATIVE_BLUE
    }
}

pub fn draw_lollipop(path: &Path, items: &[Lollipop], title: &str, figure: &Figure) -> Result<()> {
    let (x_lo, x_hi) = items
        .iter()
        .fold((0.0_f64, 0.0_f64), |(lo, hi), it| (lo.min(it.log2_fold_change), hi.max(it.log2_fold_change)));
    let (x_lo, x_hi) = padded_range(x_lo, x_hi, 0.08);
    let n = items.len().max(1);
    let y_range = -0.5..(n as f64 - 0.5);

    let root = BitMapBackend::new(path, figure.pixels()).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(figure.pt(8.0))
        .caption(title, (FONT_FAMILY, figure.pt(TITLE_PT)))
        .x_label_area_size(figure.pt(36.0))
        .y_label_area_size(figure.pt(90.0))
        .build_cartesian_2d(x_lo..x_hi, y_range.clone())
        .map_err(render_err)?;

    let label_for = |y: &f64| -> String {
        let idx = y.round();
        if (y - idx).abs() > 1e-6 || idx < 0.0 {
            return String::new();
        }
        items
            .get(idx as usize)
            .map(|it| it.gene.clone())
            .unwrap_or_default()
    };

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("log2 Fold Change")
        .y_labels(n)
        .y_label_formatter(&label_for)
        .axis_desc_style((FONT_FAMILY, figure.pt(LABEL_PT)))
        .label_style((FONT_FAMILY, figure.pt(TICK_PT)))
        .draw()
        .map_err(render_err)?;

    let on_axis = |x: f64| x.clamp(x_lo, x_hi);
    let stem = STEM_GREY.stroke_width(figure.pt(1.5));
    chart
        .draw_series(items.iter().enumerate().map(|(i, it)| {
            PathElement::new(vec![(0.0, i as f64), (on_axis(it.log2_fold_change), i as f64)], stem)
        }))
        .map_err(render_err)?;

    let r = figure.marker_radius(60.0);
    chart
        .draw_series(items.iter().enumerate().map(|(i, it)| {
            Circle::new((on_axis(it.log2_fold_change), i as f64), r, lollipop_color(it.log2_fold_change).filled())
        }))
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(
            vec![(0.0, y_range.start), (0.0, y_range.end)],
            BLACK.stroke_width(figure.pt(1.0)),
        ))
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    info!(path = %path.display(), genes = items.len(), "lollipop plot saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_by_sign() {
        assert_eq!(lollipop_color(2.0), SIGNIFICANT_RED);
        assert_eq!(lollipop_color(-0.5), NEGATIVE_BLUE);
        assert_eq!(lollipop_color(0.0), NEGATIVE_BLUE);
    }
}
