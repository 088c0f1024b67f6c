//! `weights` command: tune how much each criterion counts.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use parkside_core::{DEFAULT_RECOMMENDATIONS, WeightProfile};
use serde::{Deserialize, Serialize};

use crate::CliError;
use crate::files::{ARG_CATALOG, ARG_STATE, SessionFiles};
use crate::output::{RecommendationReport, write_json};

pub(crate) const ENV_WEIGHTS_CATALOG: &str = "PARKSIDE_CMDS_WEIGHTS_CATALOG";
pub(crate) const ARG_PRIORITY: &str = "priority";
pub(crate) const ARG_WAIT_TIME: &str = "wait-time";
pub(crate) const ARG_DISTANCE: &str = "distance";

/// CLI arguments for the `weights` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "weights",
    long_about = "Replace any of the three scoring weights, save them, and \
                 print fresh recommendations. Weights that do not sum to one \
                 are kept and reported as unbalanced.",
    about = "Update the scoring weights"
)]
#[ortho_config(prefix = "PARKSIDE")]
pub(crate) struct WeightsArgs {
    /// Path to the JSON attraction catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Path to the JSON state file.
    #[arg(long = ARG_STATE, value_name = "path")]
    #[serde(default)]
    pub(crate) state: Option<Utf8PathBuf>,
    /// Weight of the priority rank.
    #[arg(long, value_name = "weight")]
    #[serde(default)]
    pub(crate) priority: Option<f64>,
    /// Weight of the reported wait.
    #[arg(long, value_name = "weight")]
    #[serde(default)]
    pub(crate) wait_time: Option<f64>,
    /// Weight of the distance from the current location.
    #[arg(long, value_name = "weight")]
    #[serde(default)]
    pub(crate) distance: Option<f64>,
}

impl WeightsArgs {
    pub(crate) fn into_config(self) -> Result<WeightsConfig, CliError> {
        // Layer merging goes through JSON, which would turn NaN into null.
        self.check_finite()?;
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        WeightsConfig::try_from(merged)
    }

    fn check_finite(&self) -> Result<(), CliError> {
        finite_weight(ARG_PRIORITY, self.priority)?;
        finite_weight(ARG_WAIT_TIME, self.wait_time)?;
        finite_weight(ARG_DISTANCE, self.distance)?;
        Ok(())
    }
}

/// Resolved `weights` configuration; unset weights keep their saved value.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WeightsConfig {
    pub(crate) files: SessionFiles,
    pub(crate) priority: Option<f64>,
    pub(crate) wait_time: Option<f64>,
    pub(crate) distance: Option<f64>,
}

impl TryFrom<WeightsArgs> for WeightsConfig {
    type Error = CliError;

    fn try_from(args: WeightsArgs) -> Result<Self, Self::Error> {
        let files = SessionFiles::resolve(args.catalog, args.state, ENV_WEIGHTS_CATALOG)?;
        Ok(Self {
            files,
            priority: finite_weight(ARG_PRIORITY, args.priority)?,
            wait_time: finite_weight(ARG_WAIT_TIME, args.wait_time)?,
            distance: finite_weight(ARG_DISTANCE, args.distance)?,
        })
    }
}

fn finite_weight(field: &'static str, value: Option<f64>) -> Result<Option<f64>, CliError> {
    match value {
        Some(weight) if !weight.is_finite() => Err(CliError::InvalidWeight {
            field,
            value: weight,
        }),
        _ => Ok(value),
    }
}

impl WeightsConfig {
    /// Overlay the requested weights on `current`.
    pub(crate) fn merged_with(&self, current: WeightProfile) -> WeightProfile {
        current.update(
            self.priority.unwrap_or(current.priority),
            self.wait_time.unwrap_or(current.wait_time),
            self.distance.unwrap_or(current.distance),
        )
    }
}

pub(crate) fn run_weights(args: WeightsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_weights(&config, writer)
}

pub(crate) fn execute_weights(
    config: &WeightsConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    config.files.validate_sources()?;
    let (mut session, state) = config.files.open()?;
    let target = config.merged_with(session.weights());
    let balanced = session.update_weights(target.priority, target.wait_time, target.distance);
    debug!("weights updated to {target:?} (balanced: {balanced})");
    SessionFiles::save(&session, &state)?;
    let report = RecommendationReport::build(&mut session, DEFAULT_RECOMMENDATIONS);
    write_json(writer, &report)
}
