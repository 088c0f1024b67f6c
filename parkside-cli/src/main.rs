//! Entry point for the `parkside` command-line interface.
#![forbid(unsafe_code)]

use std::error::Error;
use std::process::ExitCode;

use parkside_cli::CliError;
use tracing_subscriber::{EnvFilter, fmt};

#[expect(clippy::print_stderr, reason = "errors are reported on stderr")]
fn main() -> ExitCode {
    init_logging();
    match parkside_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("parkside: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

/// Route `log` records from the core crates to stderr, filtered by `RUST_LOG`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_err()
    {
        log::debug!("a global subscriber is already installed");
    }
}
