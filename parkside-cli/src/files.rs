//! Catalog and state file resolution shared by every subcommand.

use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, info};
use parkside_core::{JsonStateFile, ParkSession, read_catalog_file};

use crate::CliError;

pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_STATE: &str = "state";
pub(crate) const DEFAULT_STATE_FILE: &str = "parkside-state.json";

/// Resolved locations of the catalog and the live-state file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SessionFiles {
    /// JSON catalog of attractions.
    pub(crate) catalog: Utf8PathBuf,
    /// JSON state file, created on first save.
    pub(crate) state: Utf8PathBuf,
}

impl SessionFiles {
    /// Apply defaults to merged options; the catalog is mandatory.
    pub(crate) fn resolve(
        catalog: Option<Utf8PathBuf>,
        state: Option<Utf8PathBuf>,
        catalog_env: &'static str,
    ) -> Result<Self, CliError> {
        let catalog = catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: catalog_env,
        })?;
        let state = state.unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_STATE_FILE));
        Ok(Self { catalog, state })
    }

    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.catalog, ARG_CATALOG)
    }

    /// Load the catalog and saved state into a session.
    pub(crate) fn open(&self) -> Result<(ParkSession, JsonStateFile), CliError> {
        let catalog = read_catalog_file(&self.catalog)?;
        let state = JsonStateFile::new(self.state.clone());
        let session = ParkSession::open(catalog, &state)?;
        debug!(
            "opened session with {} attractions from {}",
            session.attractions().len(),
            self.catalog
        );
        Ok((session, state))
    }

    /// Persist the session's live state.
    pub(crate) fn save(session: &ParkSession, state: &JsonStateFile) -> Result<(), CliError> {
        session.save(state)?;
        info!("saved state to {}", state.path());
        Ok(())
    }
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match parkside_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}
