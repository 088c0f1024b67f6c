//! Attraction records: immutable catalog fields plus live visitor state.

use std::fmt;
use std::str::FromStr;

use geo::Point;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::CatalogEntry;

/// Stable identifier of a catalog attraction.
///
/// # Examples
/// ```
/// use parkside_core::AttractionId;
///
/// let id = AttractionId::new(7);
/// assert_eq!(id.get(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AttractionId(u64);

impl AttractionId {
    /// Wrap a raw catalog identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Return the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for AttractionId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for AttractionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visitor-facing lifecycle of an attraction.
///
/// Any status may follow any other; only [`AttractionStatus::NotVisited`]
/// attractions are eligible for recommendation.
///
/// Statuses are written in kebab-case. The Japanese labels used by the
/// browser version of the planner (`未体験`, `体験済`, `休止中`) are accepted
/// on read.
///
/// # Examples
/// ```
/// use parkside_core::AttractionStatus;
///
/// assert_eq!(AttractionStatus::NotVisited.as_str(), "not-visited");
/// assert_eq!("suspended".parse(), Ok(AttractionStatus::Suspended));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AttractionStatus {
    /// Not yet experienced; eligible for recommendation.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "未体験"))]
    NotVisited,
    /// Already experienced.
    #[cfg_attr(feature = "serde", serde(alias = "体験済"))]
    Visited,
    /// Temporarily closed or otherwise unavailable.
    #[cfg_attr(feature = "serde", serde(alias = "休止中"))]
    Suspended,
}

impl AttractionStatus {
    /// Return the status as a kebab-case `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotVisited => "not-visited",
            Self::Visited => "visited",
            Self::Suspended => "suspended",
        }
    }

    /// Report whether the attraction can be recommended.
    #[must_use]
    pub const fn is_eligible(self) -> bool {
        matches!(self, Self::NotVisited)
    }
}

impl fmt::Display for AttractionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown attraction status '{input}'")]
pub struct ParseStatusError {
    input: String,
}

impl FromStr for AttractionStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "not-visited" | "未体験" => Ok(Self::NotVisited),
            "visited" | "体験済" => Ok(Self::Visited),
            "suspended" | "休止中" => Ok(Self::Suspended),
            _ => Err(ParseStatusError {
                input: s.to_owned(),
            }),
        }
    }
}

/// A catalog attraction together with its live and derived fields.
///
/// Catalog fields never change after load. `wait_time` and `status` are
/// edited by the visitor through the state store; `score` and `distance`
/// are rewritten on every ranking pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Attraction {
    /// Catalog identifier.
    pub id: AttractionId,
    /// Display name.
    pub name: String,
    /// Park area the attraction belongs to.
    pub area: String,
    /// Priority rank, 1 being the most wanted.
    pub priority: u32,
    /// Latitude in degrees, when known.
    pub lat: Option<f64>,
    /// Longitude in degrees, when known.
    pub lon: Option<f64>,
    /// Free-form notes; not used for scoring.
    pub notes: String,
    /// Last reported wait in minutes; `None` means unknown.
    pub wait_time: Option<u32>,
    /// Lifecycle status.
    pub status: AttractionStatus,
    /// Score from the most recent ranking pass.
    pub score: f64,
    /// Kilometres from the current location, when computable.
    pub distance: Option<f64>,
}

impl Attraction {
    /// Return the coordinates as a `geo` point (`x = lon`, `y = lat`).
    ///
    /// Both coordinates must be present.
    ///
    /// # Examples
    /// ```
    /// use parkside_core::{Attraction, CatalogEntry};
    ///
    /// let located = Attraction::from(CatalogEntry::new(1, "Coaster", "Frontier", 1)
    ///     .with_location(35.0, 139.0));
    /// assert!(located.location().is_some());
    ///
    /// let unlocated = Attraction::from(CatalogEntry::new(2, "Show", "Plaza", 2));
    /// assert!(unlocated.location().is_none());
    /// ```
    #[must_use]
    pub fn location(&self) -> Option<Point<f64>> {
        self.lat.zip(self.lon).map(|(lat, lon)| Point::new(lon, lat))
    }
}

impl From<CatalogEntry> for Attraction {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            area: entry.area,
            priority: entry.priority,
            lat: entry.lat,
            lon: entry.lon,
            notes: entry.notes.unwrap_or_default(),
            wait_time: None,
            status: AttractionStatus::NotVisited,
            score: 0.0,
            distance: None,
        }
    }
}
