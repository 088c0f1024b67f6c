//! `record` command: report a wait time or status change for one attraction.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use parkside_core::{
    AttractionId, AttractionStatus, DEFAULT_RECOMMENDATIONS, ParkSession, StoreError,
};
use serde::{Deserialize, Serialize};

use crate::CliError;
use crate::files::{ARG_CATALOG, ARG_STATE, SessionFiles};
use crate::output::{RecommendationReport, write_json};

pub(crate) const ARG_RECORD_ID: &str = "id";
pub(crate) const ENV_RECORD_ID: &str = "PARKSIDE_CMDS_RECORD_ID";
pub(crate) const ENV_RECORD_CATALOG: &str = "PARKSIDE_CMDS_RECORD_CATALOG";

/// CLI arguments for the `record` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "record",
    long_about = "Update one attraction's live state, save it, and print \
                 fresh recommendations. Wait text that is blank or not a \
                 whole number of minutes is stored as unknown.",
    about = "Record a wait time or status change"
)]
#[ortho_config(prefix = "PARKSIDE")]
pub(crate) struct RecordArgs {
    /// Identifier of the attraction in the catalog.
    #[arg(value_name = "id")]
    #[serde(default)]
    pub(crate) id: Option<u64>,
    /// Path to the JSON attraction catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Path to the JSON state file.
    #[arg(long = ARG_STATE, value_name = "path")]
    #[serde(default)]
    pub(crate) state: Option<Utf8PathBuf>,
    /// Reported wait in minutes.
    #[arg(long, value_name = "minutes")]
    #[serde(default)]
    pub(crate) wait: Option<String>,
    /// New status: not-visited, visited or suspended.
    #[arg(long, value_name = "status")]
    #[serde(default)]
    pub(crate) status: Option<String>,
    /// Mark the attraction visited and take it as the current location.
    #[arg(long)]
    #[serde(default)]
    pub(crate) here: bool,
}

impl RecordArgs {
    pub(crate) fn into_config(self) -> Result<RecordConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecordConfig::try_from(merged)
    }
}

/// Resolved `record` configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecordConfig {
    pub(crate) files: SessionFiles,
    pub(crate) id: AttractionId,
    pub(crate) wait: Option<String>,
    pub(crate) status: Option<AttractionStatus>,
    pub(crate) here: bool,
}

impl TryFrom<RecordArgs> for RecordConfig {
    type Error = CliError;

    fn try_from(args: RecordArgs) -> Result<Self, Self::Error> {
        let id = args.id.ok_or(CliError::MissingArgument {
            field: ARG_RECORD_ID,
            env: ENV_RECORD_ID,
        })?;
        let files = SessionFiles::resolve(args.catalog, args.state, ENV_RECORD_CATALOG)?;
        let status = args
            .status
            .as_deref()
            .map(str::parse::<AttractionStatus>)
            .transpose()?;
        Ok(Self {
            files,
            id: AttractionId::new(id),
            wait: args.wait,
            status,
            here: args.here,
        })
    }
}

impl RecordConfig {
    /// Apply the requested changes in order: wait, status, then location.
    pub(crate) fn apply(&self, session: &mut ParkSession) -> Result<(), CliError> {
        if session.attraction(self.id).is_none() {
            return Err(StoreError::UnknownAttraction { id: self.id }.into());
        }
        if let Some(wait) = &self.wait {
            session.set_wait_time_input(self.id, wait)?;
        }
        if let Some(status) = self.status {
            session.set_status(self.id, status)?;
        }
        if self.here {
            let location = session.mark_visited_here(self.id)?;
            debug!("current location is now {}", location.name);
        }
        Ok(())
    }
}

pub(crate) fn run_record(args: RecordArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_record(&config, writer)
}

pub(crate) fn execute_record(
    config: &RecordConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    config.files.validate_sources()?;
    let (mut session, state) = config.files.open()?;
    config.apply(&mut session)?;
    SessionFiles::save(&session, &state)?;
    let report = RecommendationReport::build(&mut session, DEFAULT_RECOMMENDATIONS);
    write_json(writer, &report)
}
