//! Command-line interface for serving and auditing Wayfarer datasets.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod check;
mod error;
mod serve;

pub use error::CliError;

use check::{CheckArgs, CheckReport, run_check};
use serve::{ServeArgs, run_serve};

pub(crate) const ARG_DATA_DIR: &str = "data-dir";
pub(crate) const ARG_HOST: &str = "host";
pub(crate) const ARG_PORT: &str = "port";

/// Dataset directory used when none is configured.
pub(crate) const DEFAULT_DATA_DIR: &str = "database";
/// Listen address used when none is configured.
pub(crate) const DEFAULT_HOST: &str = "0.0.0.0";
/// Listen port used when none is configured.
pub(crate) const DEFAULT_PORT: u16 = 3000;

/// Run the Wayfarer CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, when the
/// dataset cannot be loaded, when the server fails, or when `check` finds
/// experiences whose relation does not exist.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Serve(args) => run_serve(args.into_config()?),
        Command::Check(args) => run_check(&args.into_config()?).and_then(CheckReport::into_result),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "wayfarer",
    about = "Serve travel relations and experiences over a read-only JSON API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load a dataset directory and serve the API.
    Serve(ServeArgs),
    /// Load a dataset directory and report dangling references.
    Check(CheckArgs),
}

#[cfg(test)]
mod tests;
