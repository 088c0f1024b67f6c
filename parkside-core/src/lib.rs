//! Core domain types for the Parkside recommendation engine.
//!
//! The crate ranks the unvisited attractions of a theme park by a weighted
//! score built from three normalised criteria: the catalog priority rank, the
//! visitor-reported wait time and the great-circle distance from the
//! visitor's last confirmed position.
//!
//! [`ParkSession`] owns the live state and is the usual entry point:
//!
//! ```
//! use parkside_core::{AttractionId, Catalog, CatalogEntry, ParkSession, StateSnapshot};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::new(vec![
//!     CatalogEntry::new(1, "Coaster", "Frontier", 1),
//!     CatalogEntry::new(2, "Carousel", "Fantasy", 3),
//! ])?;
//! let mut session = ParkSession::load(catalog, StateSnapshot::default());
//! session.set_wait_time(AttractionId::new(1), Some(20))?;
//!
//! let top = session.recommend_default();
//! assert_eq!(top.first().map(|a| a.id), Some(AttractionId::new(1)));
//! # Ok(())
//! # }
//! ```
//!
//! Persistence and catalog retrieval stay outside the scoring code: the
//! [`StateRepository`] trait describes the load/save collaborator and the
//! `store-json` feature provides a JSON file implementation.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod attraction;
mod calibration;
mod catalog;
pub mod geodesy;
pub mod listing;
mod location;
mod profile;
pub mod ranker;
pub mod scorer;
mod session;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

pub use attraction::{Attraction, AttractionId, AttractionStatus, ParseStatusError};
pub use calibration::{CalibrationRange, calibrate};
pub use catalog::{Catalog, CatalogEntry, CatalogError};
pub use listing::{ListingQuery, ParseSortKeyError, SortKey};
pub use location::CurrentLocation;
pub use profile::WeightProfile;
pub use ranker::{DEFAULT_RECOMMENDATIONS, recommend};
pub use scorer::{MAX_PRIORITY, ScoreBreakdown, Scored, Scorer, WeightedScorer};
pub use session::ParkSession;
pub use store::{AttractionStateStore, LiveState, StateRepository, StateSnapshot, StoreError};

#[cfg(feature = "store-json")]
pub use store::json::{JsonStateFile, JsonStoreError, read_catalog_file};
