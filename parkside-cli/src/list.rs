//! `list` and `areas` commands: views of the attraction table.
//!
//! `list` starts from the listing preferences saved with the live state and
//! saves them back when a flag changes them. `areas` never writes.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use parkside_core::{ListingQuery, SortKey};
use serde::{Deserialize, Serialize};

use crate::CliError;
use crate::files::{ARG_CATALOG, ARG_STATE, SessionFiles};
use crate::output::{AreasReport, ListingReport, write_json};

pub(crate) const ENV_LIST_CATALOG: &str = "PARKSIDE_CMDS_LIST_CATALOG";
pub(crate) const ENV_AREAS_CATALOG: &str = "PARKSIDE_CMDS_AREAS_CATALOG";

/// CLI arguments for the `list` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "list",
    long_about = "Print every attraction with its live state and current \
                 score, optionally restricted to one area and sorted by \
                 priority, wait-time, name or score. Filters and order are \
                 remembered in the state file until changed.",
    about = "List attractions"
)]
#[ortho_config(prefix = "PARKSIDE")]
pub(crate) struct ListArgs {
    /// Path to the JSON attraction catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Path to the JSON state file.
    #[arg(long = ARG_STATE, value_name = "path")]
    #[serde(default)]
    pub(crate) state: Option<Utf8PathBuf>,
    /// Only list attractions in this area.
    #[arg(long, value_name = "area")]
    #[serde(default)]
    pub(crate) area: Option<String>,
    /// Clear a remembered area filter.
    #[arg(long, conflicts_with = "area")]
    #[serde(default)]
    pub(crate) all_areas: bool,
    /// Leave out attractions already visited.
    #[arg(long)]
    #[serde(default)]
    pub(crate) hide_visited: bool,
    /// List visited attractions again after `--hide-visited`.
    #[arg(long, conflicts_with = "hide_visited")]
    #[serde(default)]
    pub(crate) show_visited: bool,
    /// Sort key: priority, wait-time, name or score.
    #[arg(long, value_name = "key")]
    #[serde(default)]
    pub(crate) sort: Option<String>,
}

impl ListArgs {
    pub(crate) fn into_config(self) -> Result<ListConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ListConfig::try_from(merged)
    }
}

/// Area part of a listing override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AreaFilter {
    /// Drop any remembered area filter.
    All,
    /// Keep only this area.
    Only(String),
}

/// Listing settings given on this run; unset ones keep the saved value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ListingOverrides {
    pub(crate) area: Option<AreaFilter>,
    pub(crate) hide_visited: Option<bool>,
    pub(crate) sort: Option<SortKey>,
}

impl ListingOverrides {
    /// Overlay these settings on the saved preferences.
    pub(crate) fn applied_to(&self, saved: &ListingQuery) -> ListingQuery {
        let mut query = saved.clone();
        match &self.area {
            Some(AreaFilter::All) => query.area = None,
            Some(AreaFilter::Only(area)) => query.area = Some(area.clone()),
            None => {}
        }
        if let Some(hide_visited) = self.hide_visited {
            query.hide_visited = hide_visited;
        }
        if let Some(sort) = self.sort {
            query.sort = sort;
        }
        query
    }
}

/// Resolved `list` configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ListConfig {
    pub(crate) files: SessionFiles,
    pub(crate) overrides: ListingOverrides,
}

impl TryFrom<ListArgs> for ListConfig {
    type Error = CliError;

    fn try_from(args: ListArgs) -> Result<Self, Self::Error> {
        let files = SessionFiles::resolve(args.catalog, args.state, ENV_LIST_CATALOG)?;
        let sort = args.sort.as_deref().map(str::parse::<SortKey>).transpose()?;
        // An explicit area wins over --all-areas, and --show-visited over
        // --hide-visited, when layering sets both.
        let area = match (args.area, args.all_areas) {
            (Some(area), _) => Some(AreaFilter::Only(area)),
            (None, true) => Some(AreaFilter::All),
            (None, false) => None,
        };
        let hide_visited = if args.show_visited {
            Some(false)
        } else {
            args.hide_visited.then_some(true)
        };
        Ok(Self {
            files,
            overrides: ListingOverrides {
                area,
                hide_visited,
                sort,
            },
        })
    }
}

pub(crate) fn run_list(args: ListArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_list(&config, writer)
}

pub(crate) fn execute_list(config: &ListConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    config.files.validate_sources()?;
    let (mut session, state) = config.files.open()?;
    let query = config.overrides.applied_to(session.listing_preferences());
    if &query != session.listing_preferences() {
        debug!("remembering listing preferences {query:?}");
        session.set_listing_preferences(query.clone());
        SessionFiles::save(&session, &state)?;
    }
    let report = ListingReport {
        weights_balanced: session.weights_balanced(),
        listing: &query,
        attractions: session.listing(&query),
    };
    write_json(writer, &report)
}

/// CLI arguments for the `areas` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "areas", about = "List the distinct park areas")]
#[ortho_config(prefix = "PARKSIDE")]
pub(crate) struct AreasArgs {
    /// Path to the JSON attraction catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Path to the JSON state file.
    #[arg(long = ARG_STATE, value_name = "path")]
    #[serde(default)]
    pub(crate) state: Option<Utf8PathBuf>,
}

impl AreasArgs {
    pub(crate) fn into_config(self) -> Result<SessionFiles, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SessionFiles::resolve(merged.catalog, merged.state, ENV_AREAS_CATALOG)
    }
}

pub(crate) fn run_areas(args: AreasArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let files = args.into_config()?;
    execute_areas(&files, writer)
}

pub(crate) fn execute_areas(files: &SessionFiles, writer: &mut dyn Write) -> Result<(), CliError> {
    files.validate_sources()?;
    let (session, _state) = files.open()?;
    let report = AreasReport {
        weights_balanced: session.weights_balanced(),
        areas: session.areas(),
    };
    write_json(writer, &report)
}
