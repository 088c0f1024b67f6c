//! Explicitly owned session state: the attraction table, the active weight
//! profile, the calibration range fixed at load time and the visitor's saved
//! listing preferences.

use log::{debug, warn};

use crate::listing::{self, ListingQuery};
use crate::{
    Attraction, AttractionId, AttractionStateStore, AttractionStatus, CalibrationRange, Catalog,
    CurrentLocation, DEFAULT_RECOMMENDATIONS, StateRepository, StateSnapshot, StoreError,
    WeightProfile, WeightedScorer, calibrate,
};

/// A visitor's session over one park catalog.
///
/// Every mutation rescores the whole table, so [`ParkSession::attractions`]
/// always carries scores and distances consistent with the current inputs.
///
/// # Examples
/// ```
/// use parkside_core::{AttractionId, Catalog, CatalogEntry, ParkSession, StateSnapshot};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = Catalog::new(vec![
///     CatalogEntry::new(1, "Coaster", "Frontier", 1).with_location(35.0, 139.0),
///     CatalogEntry::new(2, "Carousel", "Fantasy", 2).with_location(35.001, 139.001),
/// ])?;
/// let mut session = ParkSession::load(catalog, StateSnapshot::default());
/// let here = session.mark_visited_here(AttractionId::new(1))?;
/// assert_eq!(here.name, "Coaster");
///
/// let ids: Vec<_> = session.recommend_default().iter().map(|a| a.id.get()).collect();
/// assert_eq!(ids, [2]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ParkSession {
    store: AttractionStateStore,
    weights: WeightProfile,
    range: CalibrationRange,
    listing: ListingQuery,
}

impl ParkSession {
    /// Build a session from a catalog and previously saved live state.
    ///
    /// The calibration range is derived here once and kept for the whole
    /// session.
    #[must_use]
    pub fn load(catalog: Catalog, snapshot: StateSnapshot) -> Self {
        let mut store = AttractionStateStore::from_catalog(catalog);
        store.restore(&snapshot);
        if snapshot.weights.is_some_and(|saved| !saved.is_finite()) {
            warn!("saved weights are not finite; using defaults");
        }
        let weights = WeightProfile::load(snapshot.weights);
        if !weights.check_sum() {
            warn!("weights sum to {:.3}, not 1.0", weights.sum());
        }
        let range = calibrate(store.get_all(), CalibrationRange::DEFAULT_MAX_WAIT_TIME);
        let mut session = Self {
            store,
            weights,
            range,
            listing: snapshot.listing.unwrap_or_default(),
        };
        session.rescore();
        session
    }

    /// Build a session from the snapshot held by `repository`.
    ///
    /// # Errors
    /// Propagates the repository's load failure.
    pub fn open<R>(catalog: Catalog, repository: &R) -> Result<Self, R::Error>
    where
        R: StateRepository + ?Sized,
    {
        let snapshot = repository.load()?;
        Ok(Self::load(catalog, snapshot))
    }

    /// Persist the session's live state through `repository`.
    ///
    /// # Errors
    /// Propagates the repository's save failure.
    pub fn save<R>(&self, repository: &R) -> Result<(), R::Error>
    where
        R: StateRepository + ?Sized,
    {
        repository.save(&self.snapshot())
    }

    /// Best `limit` attractions still to visit, highest score first.
    pub fn recommend(&mut self, limit: usize) -> Vec<Attraction> {
        let scorer = self.scorer();
        self.store.recommend(&scorer, limit)
    }

    /// [`Self::recommend`] with [`DEFAULT_RECOMMENDATIONS`].
    pub fn recommend_default(&mut self) -> Vec<Attraction> {
        self.recommend(DEFAULT_RECOMMENDATIONS)
    }

    /// Record a wait time in minutes; negative values become unknown.
    ///
    /// # Errors
    /// Returns [`StoreError::UnknownAttraction`] for an id outside the catalog.
    pub fn set_wait_time(
        &mut self,
        id: AttractionId,
        minutes: Option<i64>,
    ) -> Result<(), StoreError> {
        self.store.set_wait_time(id, minutes)?;
        self.rescore();
        Ok(())
    }

    /// Record a wait time from raw visitor input.
    ///
    /// # Errors
    /// Returns [`StoreError::UnknownAttraction`] for an id outside the catalog.
    pub fn set_wait_time_input(
        &mut self,
        id: AttractionId,
        input: &str,
    ) -> Result<(), StoreError> {
        self.store.set_wait_time_input(id, input)?;
        self.rescore();
        Ok(())
    }

    /// Change an attraction's status.
    ///
    /// # Errors
    /// Returns [`StoreError::UnknownAttraction`] for an id outside the catalog.
    pub fn set_status(
        &mut self,
        id: AttractionId,
        status: AttractionStatus,
    ) -> Result<(), StoreError> {
        self.store.set_status(id, status)?;
        self.rescore();
        Ok(())
    }

    /// Mark an attraction visited and take its position as the current one.
    ///
    /// Returns the new current location.
    ///
    /// # Errors
    /// Returns [`StoreError::UnknownAttraction`] for an id outside the catalog.
    pub fn mark_visited_here(&mut self, id: AttractionId) -> Result<CurrentLocation, StoreError> {
        let location = self.store.mark_visited_here(id)?.clone();
        self.rescore();
        Ok(location)
    }

    /// Replace the weight profile and return whether it is balanced.
    ///
    /// Unbalanced weights are kept and used; the result is advisory. A NaN or
    /// infinite weight is ignored and the previous value stays in force.
    pub fn update_weights(&mut self, priority: f64, wait_time: f64, distance: f64) -> bool {
        if ![priority, wait_time, distance].into_iter().all(f64::is_finite) {
            warn!("ignoring non-finite weights in ({priority}, {wait_time}, {distance})");
        }
        self.weights = self.weights.update(priority, wait_time, distance);
        let balanced = self.weights.check_sum();
        if !balanced {
            warn!("weights sum to {:.3}, not 1.0", self.weights.sum());
        }
        self.rescore();
        balanced
    }

    /// Whether the active weights sum to one within tolerance.
    #[must_use]
    pub fn weights_balanced(&self) -> bool {
        self.weights.check_sum()
    }

    /// Active weight profile.
    #[must_use]
    pub const fn weights(&self) -> WeightProfile {
        self.weights
    }

    /// Ceilings fixed when the session was loaded.
    #[must_use]
    pub const fn calibration(&self) -> CalibrationRange {
        self.range
    }

    /// Every attraction in catalog order with current scores.
    #[must_use]
    pub fn attractions(&self) -> &[Attraction] {
        self.store.get_all()
    }

    /// Look up one attraction.
    #[must_use]
    pub fn attraction(&self, id: AttractionId) -> Option<&Attraction> {
        self.store.get(id)
    }

    /// The visitor's last confirmed position.
    #[must_use]
    pub const fn current_location(&self) -> Option<&CurrentLocation> {
        self.store.current_location()
    }

    /// Live state in the shape a [`StateRepository`] saves.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            attractions: self.store.live_states(),
            current_location: self.store.current_location().cloned(),
            weights: Some(self.weights),
            listing: Some(self.listing.clone()),
        }
    }

    /// Listing filters and order the visitor chose last.
    #[must_use]
    pub const fn listing_preferences(&self) -> &ListingQuery {
        &self.listing
    }

    /// Remember `query` as the visitor's listing preferences.
    pub fn set_listing_preferences(&mut self, query: ListingQuery) {
        self.listing = query;
    }

    /// Filtered and sorted view of the table.
    #[must_use]
    pub fn listing(&self, query: &ListingQuery) -> Vec<&Attraction> {
        query.apply(self.store.get_all())
    }

    /// Distinct areas in ascending order.
    #[must_use]
    pub fn areas(&self) -> Vec<String> {
        listing::areas(self.store.get_all())
    }

    fn scorer(&self) -> WeightedScorer {
        WeightedScorer::new(self.weights, self.range)
    }

    fn rescore(&mut self) {
        let scorer = self.scorer();
        self.store.rescore(&scorer);
        debug!("rescored {} attractions", self.store.get_all().len());
    }
}
