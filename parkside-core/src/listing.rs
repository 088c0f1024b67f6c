//! Read-only listing view: filter and sort the full attraction table.
//!
//! The listing is a projection for display and never feeds back into
//! scoring. Every sort is stable, so equal keys keep catalog order.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Attraction, AttractionStatus};

/// Ordering applied to a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SortKey {
    /// Priority rank ascending, then shortest known wait.
    #[default]
    Priority,
    /// Shortest known wait first, unknown waits last, then priority.
    WaitTime,
    /// Name in lexicographic order.
    Name,
    /// Highest score first.
    Score,
}

impl SortKey {
    /// Return the key as the kebab-case name accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::WaitTime => "wait-time",
            Self::Name => "name",
            Self::Score => "score",
        }
    }

    fn compare(self, a: &Attraction, b: &Attraction) -> Ordering {
        match self {
            Self::Priority => a
                .priority
                .cmp(&b.priority)
                .then_with(|| compare_waits(a.wait_time, b.wait_time)),
            Self::WaitTime => compare_waits(a.wait_time, b.wait_time)
                .then_with(|| a.priority.cmp(&b.priority)),
            Self::Name => a.name.cmp(&b.name),
            Self::Score => b.score.total_cmp(&a.score),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a sort key name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key '{input}' (expected priority, wait-time, name or score)")]
pub struct ParseSortKeyError {
    input: String,
}

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "priority" => Ok(Self::Priority),
            "wait-time" | "wait" => Ok(Self::WaitTime),
            "name" => Ok(Self::Name),
            "score" => Ok(Self::Score),
            _ => Err(ParseSortKeyError {
                input: s.to_owned(),
            }),
        }
    }
}

/// Filters and ordering for a listing.
///
/// # Examples
/// ```
/// use parkside_core::{Attraction, CatalogEntry, ListingQuery, SortKey};
///
/// let attractions: Vec<Attraction> = vec![
///     CatalogEntry::new(1, "Teacups", "Fantasy", 4).into(),
///     CatalogEntry::new(2, "Coaster", "Frontier", 1).into(),
///     CatalogEntry::new(3, "Carousel", "Fantasy", 2).into(),
/// ];
/// let query = ListingQuery::default().in_area("Fantasy").sorted_by(SortKey::Name);
/// let names: Vec<_> = query.apply(&attractions).iter().map(|a| a.name.as_str()).collect();
/// assert_eq!(names, ["Carousel", "Teacups"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ListingQuery {
    /// Keep only attractions in this area.
    pub area: Option<String>,
    /// Drop attractions already visited. Suspended ones stay listed.
    pub hide_visited: bool,
    /// Ordering of the result.
    pub sort: SortKey,
}

impl ListingQuery {
    /// Restrict the listing to one area.
    #[must_use]
    pub fn in_area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    /// Hide visited attractions.
    #[must_use]
    pub const fn hiding_visited(mut self) -> Self {
        self.hide_visited = true;
        self
    }

    /// Choose the ordering.
    #[must_use]
    pub const fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Filter and sort `attractions`, borrowing the matching records.
    #[must_use]
    pub fn apply<'a>(&self, attractions: &'a [Attraction]) -> Vec<&'a Attraction> {
        let mut listed: Vec<&Attraction> = attractions
            .iter()
            .filter(|attraction| self.matches(attraction))
            .collect();
        listed.sort_by(|a, b| self.sort.compare(a, b));
        listed
    }

    fn matches(&self, attraction: &Attraction) -> bool {
        let area_matches = self
            .area
            .as_deref()
            .is_none_or(|area| attraction.area == area);
        let status_matches =
            !(self.hide_visited && attraction.status == AttractionStatus::Visited);
        area_matches && status_matches
    }
}

/// Distinct areas in ascending order.
#[must_use]
pub fn areas(attractions: &[Attraction]) -> Vec<String> {
    attractions
        .iter()
        .map(|attraction| attraction.area.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

fn compare_waits(a: Option<u32>, b: Option<u32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
