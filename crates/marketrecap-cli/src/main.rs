mod cli;
mod commands;
mod error;
mod logging;
mod output;

use clap::Parser;
use std::io::ErrorKind;
use std::process::ExitCode;

use crate::cli::Cli;
use crate::error::CliError;

fn main() -> ExitCode {
    // Logging is not installed yet, so problems go straight to stderr.
    if let Some(warning) = dotenv_warning(dotenvy::dotenv()) {
        eprintln!("warning: {warning}");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref())?;
    commands::run(&cli)
}

/// A missing `.env` is the normal case; anything else is worth a warning.
fn dotenv_warning<T>(result: Result<T, dotenvy::Error>) -> Option<String> {
    match result {
        Ok(_) => None,
        Err(dotenvy::Error::Io(error)) if error.kind() == ErrorKind::NotFound => None,
        Err(error) => Some(format!(".env could not be loaded: {error}")),
    }
}
