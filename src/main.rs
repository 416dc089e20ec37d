// src/main.rs
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use dirls::{app, cli::Args, config::Config, logging};

fn main() -> ExitCode {
    let config = Config::from(Args::parse());
    logging::init(config.verbosity);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("dirls: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    app::run(config)?;
    Ok(())
}
