//! Error types emitted by the Parkside CLI.
//!
//! Every command helper returns `Result<_, CliError>`, so large payloads such
//! as configuration errors sit behind an `Arc`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use parkside_core::{JsonStoreError, ParseSortKeyError, ParseStatusError, StoreError};
use thiserror::Error;

/// Errors emitted by the Parkside CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Merging configuration files, environment and flags failed.
    #[error("could not merge configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// No layer supplied a required option.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Option name without leading dashes.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// No catalog exists at the configured path.
    #[error("{field} file {path:?} was not found")]
    MissingSourceFile {
        /// Flag the path came from.
        field: &'static str,
        /// Catalog path as configured.
        path: Utf8PathBuf,
    },
    /// The catalog path names a directory or other non-file entry.
    #[error("{field} {path:?} is not a regular file")]
    SourcePathNotFile {
        /// Flag the path came from.
        field: &'static str,
        /// Catalog path as configured.
        path: Utf8PathBuf,
    },
    /// Checking the catalog path failed before it could be read.
    #[error("could not check {field} {path:?}")]
    InspectSourcePath {
        /// Flag the path came from.
        field: &'static str,
        /// Catalog path as configured.
        path: Utf8PathBuf,
        /// I/O failure from the metadata lookup.
        #[source]
        source: std::io::Error,
    },
    /// A weight was NaN or infinite.
    #[error("--{field} must be a finite number, got {value}")]
    InvalidWeight {
        /// Weight flag without leading dashes.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// A `--sort` value was not recognised.
    #[error(transparent)]
    InvalidSort(#[from] ParseSortKeyError),
    /// A `--status` value was not recognised.
    #[error(transparent)]
    InvalidStatus(#[from] ParseStatusError),
    /// Reading the catalog or reading/writing the state file failed.
    #[error(transparent)]
    Store(#[from] JsonStoreError),
    /// The command addressed an attraction outside the catalog.
    #[error(transparent)]
    Attraction(#[from] StoreError),
    /// Serialising the command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
