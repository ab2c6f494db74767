//! Shared primitives for the degviz differential-expression toolkit.
//!
//! `degviz-core` provides the foundation the other degviz crates build on:
//!
//! - **Error types**: [`DegvizError`] and [`Result`] for structured error handling
//! - **Traits**: [`Summarizable`] for one-line run summaries

pub mod error;
pub mod traits;

pub use error::{DegvizError, Result};
pub use traits::*;
