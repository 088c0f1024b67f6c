//! Normalisation ceilings for the wait-time and distance criteria.
//!
//! The ceilings are derived once per catalog load. Recomputing them after
//! every edit would shift every score and make rankings within a session
//! incomparable.

use geo::{BoundingRect, Coord, MultiPoint, Point};
use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Attraction;
use crate::geodesy::haversine_km;

/// Upper bounds that map raw wait times and distances onto `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CalibrationRange {
    /// Longest plausible wait in minutes.
    pub max_wait_time: u32,
    /// Longest plausible walk in kilometres.
    pub max_distance_km: f64,
}

impl CalibrationRange {
    /// Static wait-time ceiling used before any data is observed.
    pub const DEFAULT_MAX_WAIT_TIME: u32 = 180;
    /// Static distance ceiling used when the catalog has no usable extent.
    pub const DEFAULT_MAX_DISTANCE_KM: f64 = 2.0;
    /// Head-room applied to the park's bounding-box span.
    pub const SPAN_HEADROOM: f64 = 1.1;
}

impl Default for CalibrationRange {
    fn default() -> Self {
        Self {
            max_wait_time: Self::DEFAULT_MAX_WAIT_TIME,
            max_distance_km: Self::DEFAULT_MAX_DISTANCE_KM,
        }
    }
}

/// Derive the normalisation ceilings from the catalog and recorded waits.
///
/// The distance ceiling is 1.1 times the longer of the two diagonals of the
/// bounding box around every attraction with both coordinates. When no
/// attraction is located, or every located attraction sits on the same
/// point, the static 2 km ceiling applies. The wait ceiling is the larger of
/// `prior_wait_ceiling` and the longest recorded wait.
///
/// # Examples
/// ```
/// use parkside_core::{Attraction, CalibrationRange, CatalogEntry, calibrate};
///
/// let attractions = vec![Attraction::from(CatalogEntry::new(1, "Show", "Plaza", 1))];
/// assert_eq!(calibrate(&attractions, 180), CalibrationRange::default());
/// ```
#[must_use]
pub fn calibrate(attractions: &[Attraction], prior_wait_ceiling: u32) -> CalibrationRange {
    let recorded_max = attractions
        .iter()
        .filter_map(|attraction| attraction.wait_time)
        .max()
        .unwrap_or(0);
    let range = CalibrationRange {
        max_wait_time: prior_wait_ceiling.max(recorded_max),
        max_distance_km: distance_ceiling(attractions),
    };
    debug!(
        "calibrated ranges: max wait {} min, max distance {:.3} km",
        range.max_wait_time, range.max_distance_km
    );
    range
}

#[expect(
    clippy::float_arithmetic,
    reason = "the ceiling scales the bounding-box span by a head-room factor"
)]
fn distance_ceiling(attractions: &[Attraction]) -> f64 {
    let located: MultiPoint<f64> = attractions
        .iter()
        .filter_map(Attraction::location)
        .collect();
    let Some(bbox) = located.bounding_rect() else {
        return CalibrationRange::DEFAULT_MAX_DISTANCE_KM;
    };
    let (min, max) = (bbox.min(), bbox.max());
    let south_west_to_north_east = haversine_km(Point::from(min), Point::from(max));
    let south_east_to_north_west = haversine_km(
        Point::from(Coord { x: max.x, y: min.y }),
        Point::from(Coord { x: min.x, y: max.y }),
    );
    let span =
        south_west_to_north_east.max(south_east_to_north_west) * CalibrationRange::SPAN_HEADROOM;
    if span.is_finite() && span > 0.0 {
        span
    } else {
        CalibrationRange::DEFAULT_MAX_DISTANCE_KM
    }
}
