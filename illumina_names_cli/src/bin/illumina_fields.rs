//! illumina_fields
//!
//! If an error occurs, the process returns 1 and writes a message to stderr.

use anyhow::Result;
use clap::Parser;
use illumina_names_cli::config::Parameters;
use illumina_names_cli::logging::{effective_level, init_logging};
use illumina_names_cli::{run, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match try_main(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // write message and cause chain
            eprintln!("{e}");
            for c in e.chain().skip(1) {
                eprintln!("\tCaused by: {c}");
            }
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: Cli) -> Result<()> {
    let loaded = Parameters::load(cli.config.as_deref())?;
    init_logging(effective_level(loaded.parameters.log_level, cli.verbose))?;
    loaded.report();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(cli.command, &loaded.parameters, stdin.lock(), &mut stdout.lock())
}
