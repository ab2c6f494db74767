//! Statistics for differential-expression tables.
//!
//! - **Column detection** ([`detect`]): ordered first-match-wins rules over
//!   column names
//! - **Cleaning** ([`clean`]): numeric coercion and row filtering
//! - **Volcano** ([`volcano`]): significance calls and top hits
//! - **Histograms** ([`histogram`]): binning and Gaussian KDE
//! - **Descriptive statistics** ([`descriptive`])

pub mod clean;
pub mod descriptive;
pub mod detect;
pub mod histogram;
pub mod volcano;

pub use clean::{clean, WorkingRow, WorkingTable};
pub use detect::{detect_columns, ColumnOverrides, ColumnRole, DetectedColumns};
pub use volcano::{Thresholds, VolcanoPoint};
