//! JSON file collaborators: the catalog reader and the live-state file.

use std::io::{self, BufReader};

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use parkside_fs::{open_utf8_file, write_utf8_file};
use thiserror::Error;

use crate::{Catalog, CatalogEntry, CatalogError, StateRepository, StateSnapshot};

/// Errors raised while reading or writing JSON artefacts.
#[derive(Debug, Error)]
pub enum JsonStoreError {
    /// Opening or reading a file failed.
    #[error("failed to read {path}")]
    ReadFile {
        /// File that could not be read.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: io::Error,
    },
    /// The file content was not the expected JSON document.
    #[error("failed to parse JSON in {path}")]
    Parse {
        /// File with invalid content.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The catalog parsed but failed validation.
    #[error("catalog {path} is unusable")]
    Catalog {
        /// Catalog file path.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: CatalogError,
    },
    /// Encoding the snapshot failed.
    #[error("failed to serialise state for {path}")]
    Serialise {
        /// Target file path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Writing the state file failed.
    #[error("failed to write {path}")]
    WriteFile {
        /// Target file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: io::Error,
    },
}

/// Read and validate a JSON catalog: an array of catalog entries.
///
/// # Errors
/// Returns [`JsonStoreError`] when the file is missing or unreadable, when
/// it is not a JSON array of entries, or when the catalog is empty or has
/// duplicate ids.
pub fn read_catalog_file(path: &Utf8Path) -> Result<Catalog, JsonStoreError> {
    let file = open_utf8_file(path).map_err(|source| JsonStoreError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let entries: Vec<CatalogEntry> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| JsonStoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("read {} catalog entries from {path}", entries.len());
    Catalog::new(entries).map_err(|source| JsonStoreError::Catalog {
        path: path.to_path_buf(),
        source,
    })
}

/// Live state persisted as a single pretty-printed JSON document.
///
/// A missing file loads as the empty snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonStateFile {
    path: Utf8PathBuf,
}

impl JsonStateFile {
    /// Use the state file at `path`; nothing is read until [`StateRepository::load`].
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the state file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl StateRepository for JsonStateFile {
    type Error = JsonStoreError;

    fn load(&self) -> Result<StateSnapshot, Self::Error> {
        let file = match open_utf8_file(&self.path) {
            Ok(file) => file,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                debug!("no saved state at {}; starting fresh", self.path);
                return Ok(StateSnapshot::default());
            }
            Err(source) => {
                return Err(JsonStoreError::ReadFile {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_reader(BufReader::new(file)).map_err(|source| JsonStoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, snapshot: &StateSnapshot) -> Result<(), Self::Error> {
        let payload =
            serde_json::to_vec_pretty(snapshot).map_err(|source| JsonStoreError::Serialise {
                path: self.path.clone(),
                source,
            })?;
        write_utf8_file(&self.path, &payload).map_err(|source| JsonStoreError::WriteFile {
            path: self.path.clone(),
            source,
        })
    }
}
