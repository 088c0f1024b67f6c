//! Facade crate for the Parkside recommendation engine.
//!
//! This crate re-exports the core domain types and, behind the `store-json`
//! feature, the JSON catalog reader and state file.

#![forbid(unsafe_code)]

pub use parkside_core::{
    Attraction, AttractionId, AttractionStateStore, AttractionStatus, CalibrationRange, Catalog,
    CatalogEntry, CatalogError, CurrentLocation, ListingQuery, ParkSession, Scorer, SortKey,
    StateRepository, StateSnapshot, StoreError, WeightProfile, WeightedScorer,
};

#[cfg(feature = "store-json")]
pub use parkside_core::{JsonStateFile, JsonStoreError, read_catalog_file};
