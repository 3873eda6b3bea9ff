use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::Cli;
use orthomap_core::OrthomapError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = cli::run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);

        let exit_code = e
            .downcast_ref::<OrthomapError>()
            .map(OrthomapError::exit_code)
            .unwrap_or(1);
        process::exit(exit_code);
    }
}

/// `RUST_LOG` wins, then `-v` repetitions, then `ORTHOMAP_LOG` (default `warn`)
fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => std::env::var("ORTHOMAP_LOG").unwrap_or_else(|_| "warn".to_string()),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();
}
