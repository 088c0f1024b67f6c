//! The static attraction catalog supplied at start-up.

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::AttractionId;

/// One record of the park catalog, as read from the catalog file.
///
/// # Examples
/// ```
/// use parkside_core::CatalogEntry;
///
/// let entry = CatalogEntry::new(1, "Coaster", "Frontier", 1).with_location(35.63, 139.88);
/// assert_eq!(entry.lat, Some(35.63));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CatalogEntry {
    /// Catalog identifier; must be unique.
    pub id: AttractionId,
    /// Display name.
    pub name: String,
    /// Park area.
    pub area: String,
    /// Priority rank, 1 being the most wanted.
    pub priority: u32,
    /// Latitude in degrees.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lat: Option<f64>,
    /// Longitude in degrees.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lon: Option<f64>,
    /// Free-form notes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub notes: Option<String>,
}

impl CatalogEntry {
    /// Construct an entry without coordinates or notes.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>, area: impl Into<String>, priority: u32) -> Self {
        Self {
            id: AttractionId::new(id),
            name: name.into(),
            area: area.into(),
            priority,
            lat: None,
            lon: None,
            notes: None,
        }
    }

    /// Attach coordinates, returning `self` for chaining.
    #[must_use]
    pub fn with_location(mut self, lat: f64, lon: f64) -> Self {
        self.lat = Some(lat);
        self.lon = Some(lon);
        self
    }

    /// Attach notes, returning `self` for chaining.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Errors returned by [`Catalog::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The catalog contained no attractions, so there is nothing to rank.
    #[error("attraction catalog is empty")]
    Empty,
    /// Two entries shared an identifier.
    #[error("attraction id {id} appears more than once in the catalog")]
    DuplicateId {
        /// The repeated identifier.
        id: AttractionId,
    },
}

/// A validated, non-empty catalog with unique identifiers.
///
/// Entry order is preserved and becomes the stable catalog order used for
/// listings and tie-breaks.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Validate and wrap catalog entries.
    ///
    /// # Errors
    /// Returns [`CatalogError::Empty`] for an empty list and
    /// [`CatalogError::DuplicateId`] when an identifier repeats.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::with_capacity(entries.len());
        if let Some(entry) = entries.iter().find(|entry| !seen.insert(entry.id)) {
            return Err(CatalogError::DuplicateId { id: entry.id });
        }
        Ok(Self { entries })
    }

    /// Borrow the entries in catalog order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of attractions in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries; never true once validated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the catalog and return its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<CatalogEntry> {
        self.entries
    }
}
