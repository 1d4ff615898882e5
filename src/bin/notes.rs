//! Notes CLI Binary
//!
//! Command-line interface for the sandboxed note store.

use clap::Parser;
use notes_store::config::ConfigLoader;
use notes_store::logging::init_logging;
use notes_store::tooling::cli::{Cli, CliContext};
use std::process;

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    // Before the context, so root initialization is logged.
    let logging = cli.logging_config(&config.logging);
    if let Err(e) = init_logging(Some(&logging)) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    let context = match CliContext::from_config(config, cli.root.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error initializing notes store: {}", e);
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
