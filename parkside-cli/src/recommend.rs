//! `recommend` command: print the best attractions to visit next.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use parkside_core::DEFAULT_RECOMMENDATIONS;
use serde::{Deserialize, Serialize};

use crate::CliError;
use crate::files::{ARG_CATALOG, ARG_STATE, SessionFiles};
use crate::output::{RecommendationReport, write_json};

pub(crate) const ENV_RECOMMEND_CATALOG: &str = "PARKSIDE_CMDS_RECOMMEND_CATALOG";

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "recommend",
    long_about = "Rank every attraction not yet visited by priority, reported \
                 wait and distance from the last visited attraction, then \
                 print the best few.",
    about = "Print the top recommendations"
)]
#[ortho_config(prefix = "PARKSIDE")]
pub(crate) struct RecommendArgs {
    /// Path to the JSON attraction catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Path to the JSON state file.
    #[arg(long = ARG_STATE, value_name = "path")]
    #[serde(default)]
    pub(crate) state: Option<Utf8PathBuf>,
    /// Number of recommendations to print.
    #[arg(long, value_name = "n")]
    #[serde(default)]
    pub(crate) count: Option<usize>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    pub(crate) files: SessionFiles,
    pub(crate) count: usize,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let files = SessionFiles::resolve(args.catalog, args.state, ENV_RECOMMEND_CATALOG)?;
        Ok(Self {
            files,
            count: args.count.unwrap_or(DEFAULT_RECOMMENDATIONS),
        })
    }
}

pub(crate) fn run_recommend(args: RecommendArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_recommend(&config, writer)
}

pub(crate) fn execute_recommend(
    config: &RecommendConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    config.files.validate_sources()?;
    let (mut session, _state) = config.files.open()?;
    let report = RecommendationReport::build(&mut session, config.count);
    write_json(writer, &report)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
