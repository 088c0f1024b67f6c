//! The visitor's current position, taken from the last attraction visited.

use geo::Point;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Attraction, AttractionId};

/// The visitor's last confirmed position.
///
/// A snapshot copy of the attraction the visitor marked as "visited here",
/// used as the reference point for distance scoring.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurrentLocation {
    /// Attraction the position was taken from.
    pub id: AttractionId,
    /// Name of that attraction at the time of the snapshot.
    pub name: String,
    /// Latitude in degrees.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lat: Option<f64>,
    /// Longitude in degrees.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lon: Option<f64>,
}

impl CurrentLocation {
    /// Copy the identity and coordinates of an attraction.
    #[must_use]
    pub fn of(attraction: &Attraction) -> Self {
        Self {
            id: attraction.id,
            name: attraction.name.clone(),
            lat: attraction.lat,
            lon: attraction.lon,
        }
    }

    /// Return the position as a `geo` point when both coordinates are known.
    #[must_use]
    pub fn point(&self) -> Option<Point<f64>> {
        self.lat.zip(self.lon).map(|(lat, lon)| Point::new(lon, lat))
    }
}
