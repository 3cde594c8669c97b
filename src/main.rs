// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use clap::Parser;
use sample_tally::{app, cli::Args, config::Config, logging};

fn main() -> ExitCode {
    let result = Config::try_from(Args::parse())
        .map_err(anyhow::Error::from)
        .and_then(|config| {
            logging::init(&config);
            app::run(&config, std::io::stdin().lock(), std::io::stdout().lock())
        });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
