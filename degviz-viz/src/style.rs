//! Figure geometry and the shared palette.
//!
//! Sizes are given the way a print figure is: inches at a DPI, fonts in
//! points, scatter markers as an area in points². [`Figure`] converts them
//! to pixels for the bitmap backend.

use degviz_stats::histogram::RANGE_LIMIT;
use plotters::style::RGBColor;

/// Default print resolution.
pub const DEFAULT_DPI: u32 = 300;

/// Base scatter points.
pub const POINT_BLUE: RGBColor = RGBColor(0x4C, 0x72, 0xB0);
/// Significant points, positive fold-change dots, p-value histogram.
pub const SIGNIFICANT_RED: RGBColor = RGBColor(0xDD, 0x2C, 0x00);
/// Negative fold-change dots.
pub const NEGATIVE_BLUE: RGBColor = RGBColor(0x1F, 0x77, 0xB4);
/// Threshold guide lines.
pub const GUIDE_GREY: RGBColor = RGBColor(0x80, 0x80, 0x80);
/// Lollipop stems.
pub const STEM_GREY: RGBColor = RGBColor(0xD3, 0xD3, 0xD3);

pub const FONT_FAMILY: &str = "sans-serif";
pub const TITLE_PT: f64 = 12.0;
pub const LABEL_PT: f64 = 10.0;
pub const TICK_PT: f64 = 8.0;

/// A fixed-size figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Figure {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
}

impl Figure {
    pub const fn new(width_in: f64, height_in: f64, dpi: u32) -> Self {
        Self {
            width_in,
            height_in,
            dpi,
        }
    }

    /// 8 x 6 in.
    pub const fn volcano(dpi: u32) -> Self {
        Self::new(8.0, 6.0, dpi)
    }

    /// 7 x 10 in.
    pub const fn lollipop(dpi: u32) -> Self {
        Self::new(7.0, 10.0, dpi)
    }

    /// 11 x 5 in, two panels side by side.
    pub const fn distributions(dpi: u32) -> Self {
        Self::new(11.0, 5.0, dpi)
    }

    /// Canvas size in pixels.
    pub fn pixels(&self) -> (u32, u32) {
        let d = self.dpi as f64;
        (
            (self.width_in * d).round() as u32,
            (self.height_in * d).round() as u32,
        )
    }

    /// Convert a length in points to pixels, at least 1.
    pub fn pt(&self, points: f64) -> u32 {
        ((points * self.dpi as f64 / 72.0).round() as u32).max(1)
    }

    /// Radius in pixels of a circular marker whose area is `area_pt2` points².
    pub fn marker_radius(&self, area_pt2: f64) -> u32 {
        self.pt((area_pt2 / std::f64::consts::PI).sqrt())
    }
}

/// `[lo, hi]` widened by `frac` of its span on both sides; a zero-width
/// span is widened by one unit. Bounds are clamped to `±RANGE_LIMIT` first
/// so the padded axis stays finite.
pub fn padded_range(lo: f64, hi: f64, frac: f64) -> (f64, f64) {
    if !(lo.is_finite() && hi.is_finite()) || lo > hi {
        return (-1.0, 1.0);
    }
    let (lo, hi) = (lo.max(-RANGE_LIMIT), hi.min(RANGE_LIMIT));
    let span = hi - lo;
    if span == 0.0 {
        return (lo - 1.0, hi + 1.0);
    }
    (lo - span * frac, hi + span * frac)
}
