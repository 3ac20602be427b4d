use std::process::ExitCode;

use extnet_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable: {err:#}");
    }

    match CliCommand::run_from_args() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("extnet error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
