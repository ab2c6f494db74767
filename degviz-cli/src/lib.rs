//! Command-line front end for degviz.
//!
//! [`pipeline::run`] drives one pass over a differential-expression table;
//! [`config::Config`] merges an optional TOML file with the [`cli::Args`]
//! flags.

pub mod cli;
pub mod config;
pub mod pipeline;

pub use cli::Args;
pub use config::Config;
pub use pipeline::{run, RunReport};
