//! Command-line interface for the `qa` question answering tool.

use std::process::ExitCode;

use clap::Parser;
use qa::cli::{Cli, logging, run};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    run(&cli)
}
