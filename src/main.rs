//! CLI entry point for the Kuwahara filter

use std::process::ExitCode;

use clap::Parser;
use imageops_kuwahara::cli::{run, Cli};
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
