//! hashwalker: CRC-32 inventory of a directory tree

use std::process::ExitCode;

use clap::Parser;
use hashwalker_cli::commands;
use hashwalker_cli::logging::setup_logging;
use hashwalker_cli::Cli;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match commands::walk::run(&cli.root, &cli.trim).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Every error's Display already carries its cause
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
