//! Static charts for differential-expression results.
//!
//! Every renderer writes one PNG through the `plotters` bitmap backend:
//!
//! - [`volcano::draw_volcano`]: fold-change vs. −log10 p-value
//! - [`lollipop::draw_lollipop`]: per-gene fold-change stems
//! - [`distributions::draw_distributions`]: two histograms with KDE overlays

pub mod distributions;
pub mod lollipop;
pub mod style;
pub mod volcano;

use degviz_core::DegvizError;

pub use distributions::draw_distributions;
pub use lollipop::{draw_lollipop, Lollipop};
pub use style::Figure;
pub use volcano::draw_volcano;

/// Wrap a plotting backend failure.
pub(crate) fn render_err<E: std::fmt::Display>(e: E) -> DegvizError {
    DegvizError::Render(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use degviz_stats::{Thresholds, VolcanoPoint};
    use std::path::Path;
    use tempfile::TempDir;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn assert_png(path: &Path, (w, h): (u32, u32)) {
        let bytes = std::fs::read(path).unwrap();
        assert_eq!(&bytes[..8], &PNG_MAGIC);
        // IHDR width/height, big-endian
        let width = u32::from_be_bytes(bytes[16..20].try_into().unwrap());
        let height = u32::from_be_bytes(bytes[20..24].try_into().unwrap());
        assert_eq!((width, height), (w, h));
    }

    fn points() -> Vec<VolcanoPoint> {
        vec![
            VolcanoPoint { gene: "TP53".into(), log2_fold_change: 2.0, neg_log10_p: 3.0, significant: true },
            VolcanoPoint { gene: "MYC".into(), log2_fold_change: -0.3, neg_log10_p: 0.5, significant: false },
            VolcanoPoint { gene: "EGFR".into(), log2_fold_change: -2.5, neg_log10_p: 300.0, significant: true },
        ]
    }

    #[test]
    fn volcano_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("volcano.png");
        let fig = Figure::volcano(40);
        draw_volcano(&path, &points(), &Thresholds::default(), "Volcano Plot - test", &fig).unwrap();
        assert_png(&path, fig.pixels());
    }

    #[test]
    fn volcano_png_without_points() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.png");
        let fig = Figure::volcano(40);
        draw_volcano(&path, &[], &Thresholds::default(), "empty", &fig).unwrap();
        assert_png(&path, fig.pixels());
    }

    #[test]
    fn lollipop_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lollipop.png");
        let items: Vec<Lollipop> = points()
            .into_iter()
            .map(|p| Lollipop { gene: p.gene, log2_fold_change: p.log2_fold_change })
            .collect();
        let fig = Figure::lollipop(40);
        draw_lollipop(&path, &items, "Top genes", &fig).unwrap();
        assert_png(&path, fig.pixels());
    }

    #[test]
    fn distributions_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dist.png");
        let fc: Vec<f64> = (0..50).map(|i| (i as f64 - 25.0) / 10.0).collect();
        let p: Vec<f64> = (0..50).map(|i| (i % 7) as f64).collect();
        let fig = Figure::distributions(40);
        draw_distributions(&path, &fc, &p, &fig).unwrap();
        assert_png(&path, fig.pixels());
    }

    #[test]
    fn distributions_png_single_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("one.png");
        let fig = Figure::distributions(40);
        draw_distributions(&path, &[2.0], &[3.0], &fig).unwrap();
        assert_png(&path, fig.pixels());
    }

    #[test]
    fn near_overflow_fold_changes_render() {
        let dir = TempDir::new().unwrap();
        let extreme = [1e308, -1e308, 0.5];

        let pts: Vec<VolcanoPoint> = extreme
            .iter()
            .map(|&fc| VolcanoPoint { gene: "G".into(), log2_fold_change: fc, neg_log10_p: 2.0, significant: true })
            .collect();
        let fig = Figure::volcano(20);
        let path = dir.path().join("v.png");
        draw_volcano(&path, &pts, &Thresholds::default(), "extreme", &fig).unwrap();
        assert_png(&path, fig.pixels());

        let items: Vec<Lollipop> = extreme
            .iter()
            .map(|&fc| Lollipop { gene: "G".into(), log2_fold_change: fc })
            .collect();
        let fig = Figure::lollipop(20);
        let path = dir.path().join("l.png");
        draw_lollipop(&path, &items, "extreme", &fig).unwrap();
        assert_png(&path, fig.pixels());

        let fig = Figure::distributions(20);
        let path = dir.path().join("d.png");
        draw_distributions(&path, &extreme, &[2.0, 1.7, 0.5], &fig).unwrap();
        assert_png(&path, fig.pixels());
    }

    #[test]
    fn unwritable_path_is_render_error() {
        let fig = Figure::volcano(20);
        let err = draw_volcano(
            Path::new("/nonexistent/dir/v.png"),
            &points(),
            &Thresholds::default(),
            "x",
            &fig,
        )
        .unwrap_err();
        assert!(matches!(err, DegvizError::Render(_)));
    }
}
