//! The authoritative attraction table and its persistence seam.
//!
//! [`AttractionStateStore`] holds every catalog attraction with its live
//! fields plus the visitor's current location. Mutations are synchronous and
//! visible to the next read. [`StateRepository`] describes the collaborator
//! that makes the live state durable; the store itself never touches disk.

use std::collections::HashMap;

use log::{debug, warn};
use thiserror::Error;

use crate::{
    Attraction, AttractionId, AttractionStatus, Catalog, CurrentLocation, Scorer, ranker,
};

#[cfg(feature = "store-json")]
pub mod json;
mod snapshot;

pub use snapshot::{LiveState, StateSnapshot};

/// Load and save live state between sessions.
///
/// Implementations must return an empty [`StateSnapshot`] rather than an
/// error when nothing has been saved yet.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use std::convert::Infallible;
/// use parkside_core::{StateRepository, StateSnapshot};
///
/// #[derive(Default)]
/// struct Scratch(RefCell<StateSnapshot>);
///
/// impl StateRepository for Scratch {
///     type Error = Infallible;
///
///     fn load(&self) -> Result<StateSnapshot, Infallible> {
///         Ok(self.0.borrow().clone())
///     }
///
///     fn save(&self, snapshot: &StateSnapshot) -> Result<(), Infallible> {
///         *self.0.borrow_mut() = snapshot.clone();
///         Ok(())
///     }
/// }
///
/// let repo = Scratch::default();
/// assert_eq!(repo.load(), Ok(StateSnapshot::default()));
/// ```
pub trait StateRepository {
    /// Failure raised by the backing medium.
    type Error: std::error::Error + 'static;

    /// Read the last saved snapshot.
    fn load(&self) -> Result<StateSnapshot, Self::Error>;

    /// Persist `snapshot`, replacing any previous one.
    fn save(&self, snapshot: &StateSnapshot) -> Result<(), Self::Error>;
}

/// Errors returned by [`AttractionStateStore`] mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No catalog attraction carries the requested identifier.
    #[error("no attraction with id {id} in the catalog")]
    UnknownAttraction {
        /// Identifier that was requested.
        id: AttractionId,
    },
}

/// In-memory table of attractions in catalog order.
#[derive(Debug, Clone)]
pub struct AttractionStateStore {
    attractions: Vec<Attraction>,
    positions: HashMap<AttractionId, usize>,
    current_location: Option<CurrentLocation>,
}

impl AttractionStateStore {
    /// Build the table from a validated catalog with default live fields.
    #[must_use]
    pub fn from_catalog(catalog: Catalog) -> Self {
        let attractions: Vec<Attraction> = catalog
            .into_entries()
            .into_iter()
            .map(Attraction::from)
            .collect();
        let positions = attractions
            .iter()
            .enumerate()
            .map(|(position, attraction)| (attraction.id, position))
            .collect();
        Self {
            attractions,
            positions,
            current_location: None,
        }
    }

    /// Merge persisted live state onto the catalog.
    ///
    /// Overrides whose id is not in the catalog are skipped. The snapshot's
    /// current location replaces the store's when present.
    pub fn restore(&mut self, snapshot: &StateSnapshot) {
        for live in &snapshot.attractions {
            match self.find_mut(live.id) {
                Ok(attraction) => {
                    attraction.wait_time = live.wait_time;
                    attraction.status = live.status;
                }
                Err(_) => warn!("ignoring saved state for unknown attraction {}", live.id),
            }
        }
        if let Some(location) = &snapshot.current_location {
            self.current_location = Some(location.clone());
        }
    }

    /// Record a wait time; negative or oversized values become unknown.
    ///
    /// # Errors
    /// Returns [`StoreError::UnknownAttraction`] when `id` is not in the
    /// catalog.
    pub fn set_wait_time(
        &mut self,
        id: AttractionId,
        minutes: Option<i64>,
    ) -> Result<(), StoreError> {
        let wait_time = minutes.and_then(|value| u32::try_from(value).ok());
        self.find_mut(id)?.wait_time = wait_time;
        Ok(())
    }

    /// Record a wait time typed by the visitor.
    ///
    /// The leading whole number is used and anything after it is ignored,
    /// so `"12.5"` records 12 minutes. Text with no leading number is stored
    /// as unknown rather than rejected.
    ///
    /// # Errors
    /// Returns [`StoreError::UnknownAttraction`] when `id` is not in the
    /// catalog.
    pub fn set_wait_time_input(
        &mut self,
        id: AttractionId,
        input: &str,
    ) -> Result<(), StoreError> {
        let minutes = leading_integer(input);
        if minutes.is_none() && !input.trim().is_empty() {
            debug!("treating wait input {input:?} for attraction {id} as unknown");
        }
        self.set_wait_time(id, minutes)
    }

    /// Set the lifecycle status; every transition is allowed.
    ///
    /// # Errors
    /// Returns [`StoreError::UnknownAttraction`] when `id` is not in the
    /// catalog.
    pub fn set_status(
        &mut self,
        id: AttractionId,
        status: AttractionStatus,
    ) -> Result<(), StoreError> {
        self.find_mut(id)?.status = status;
        Ok(())
    }

    /// Mark an attraction visited and move the current location onto it.
    ///
    /// # Errors
    /// Returns [`StoreError::UnknownAttraction`] when `id` is not in the
    /// catalog; nothing changes in that case.
    pub fn mark_visited_here(&mut self, id: AttractionId) -> Result<&CurrentLocation, StoreError> {
        let attraction = self.find_mut(id)?;
        attraction.status = AttractionStatus::Visited;
        let location = CurrentLocation::of(attraction);
        Ok(self.current_location.insert(location))
    }

    /// Every attraction in catalog order.
    #[must_use]
    pub fn get_all(&self) -> &[Attraction] {
        &self.attractions
    }

    /// Look up one attraction.
    #[must_use]
    pub fn get(&self, id: AttractionId) -> Option<&Attraction> {
        self.positions
            .get(&id)
            .and_then(|&position| self.attractions.get(position))
    }

    /// The visitor's last confirmed position, if any.
    #[must_use]
    pub const fn current_location(&self) -> Option<&CurrentLocation> {
        self.current_location.as_ref()
    }

    /// Live fields of every attraction, ready to be saved.
    #[must_use]
    pub fn live_states(&self) -> Vec<LiveState> {
        self.attractions
            .iter()
            .map(|attraction| LiveState {
                id: attraction.id,
                wait_time: attraction.wait_time,
                status: attraction.status,
            })
            .collect()
    }

    /// Rewrite `score` and `distance` on every attraction.
    pub fn rescore<S>(&mut self, scorer: &S)
    where
        S: Scorer + ?Sized,
    {
        ranker::rescore(&mut self.attractions, scorer, self.current_location.as_ref());
    }

    /// Rescore everything and return the best `limit` eligible attractions.
    pub fn recommend<S>(&mut self, scorer: &S, limit: usize) -> Vec<Attraction>
    where
        S: Scorer + ?Sized,
    {
        ranker::recommend(
            &mut self.attractions,
            scorer,
            self.current_location.as_ref(),
            limit,
        )
    }

    fn find_mut(&mut self, id: AttractionId) -> Result<&mut Attraction, StoreError> {
        self.positions
            .get(&id)
            .and_then(|&position| self.attractions.get_mut(position))
            .ok_or(StoreError::UnknownAttraction { id })
    }
}

/// Parse an optional sign and the digits that follow it at the start of
/// `input`, skipping leading whitespace.
fn leading_integer(input: &str) -> Option<i64> {
    let text = input.trim_start();
    let end = text
        .char_indices()
        .find(|&(index, ch)| !(ch.is_ascii_digit() || (index == 0 && matches!(ch, '+' | '-'))))
        .map_or(text.len(), |(index, _)| index);
    text.get(..end)?.parse().ok()
}
