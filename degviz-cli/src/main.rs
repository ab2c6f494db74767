use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use degviz_cli::{run, Args, Config};
use degviz_core::DegvizError;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn try_main(args: &Args) -> anyhow::Result<Vec<String>> {
    let config = Config::resolve(args).context("loading configuration")?;
    let report = run(&config)?;
    Ok(report
        .saved
        .iter()
        .map(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| p.display().to_string())
        })
        .collect())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match try_main(&args) {
        Ok(saved) => {
            println!("DONE");
            for name in saved {
                println!("Saved: {name}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            let missing_column = err
                .downcast_ref::<DegvizError>()
                .is_some_and(DegvizError::is_column_not_found);
            if missing_column {
                println!("Could not detect required columns.");
            } else {
                eprintln!("error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}
