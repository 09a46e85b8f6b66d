use std::process::ExitCode;

use clap::Parser;

use unidup::args::Cli;
use unidup::commands;
use unidup::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(&cli.log);

    match commands::run(&cli.resolved_command()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error ({:?}): {e}", e.kind());
            ExitCode::FAILURE
        }
    }
}
