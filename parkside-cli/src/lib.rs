//! Command-line interface for the Parkside recommendation engine.
//!
//! Every subcommand reads a JSON catalog and a JSON state file, layered from
//! flags, `PARKSIDE_*` environment variables and configuration files, and
//! prints a pretty JSON report on stdout.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};

mod error;
mod files;
mod list;
mod output;
mod recommend;
mod record;
mod weights;

pub use error::CliError;

use list::{AreasArgs, ListArgs, run_areas, run_list};
use recommend::{RecommendArgs, run_recommend};
use record::{RecordArgs, run_record};
use weights::{WeightsArgs, run_weights};

/// Run the Parkside CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, when the
/// catalog or state file cannot be used, or when writing the report fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    run_command(cli.command, &mut stdout)
}

fn run_command(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Recommend(args) => run_recommend(args, writer),
        Command::List(args) => run_list(args, writer),
        Command::Areas(args) => run_areas(args, writer),
        Command::Record(args) => run_record(args, writer),
        Command::Weights(args) => run_weights(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "parkside",
    about = "Recommend theme-park attractions from live wait times and location",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the best attractions to visit next.
    Recommend(RecommendArgs),
    /// List attractions with filters and sorting.
    List(ListArgs),
    /// List the distinct park areas.
    Areas(AreasArgs),
    /// Record a wait time, status change or visit.
    Record(RecordArgs),
    /// Update the scoring weights.
    Weights(WeightsArgs),
}

#[cfg(test)]
mod tests;
