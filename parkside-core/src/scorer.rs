//! Score attractions for the next-visit recommendation.
//!
//! The [`Scorer`] trait assigns a desirability score to an
//! [`Attraction`](crate::Attraction) relative to the visitor's
//! [`CurrentLocation`](crate::CurrentLocation). [`WeightedScorer`] is the
//! engine's implementation: it maps the priority rank, the wait time and the
//! distance onto `0.0..=1.0` and blends them with a
//! [`WeightProfile`](crate::WeightProfile).
//!
//! Scoring never fails. Unknown inputs degrade to conservative defaults: an
//! unknown wait counts as the longest plausible wait and an unknown distance
//! scores a neutral `0.5`.

use crate::{Attraction, CalibrationRange, CurrentLocation, WeightProfile, geodesy};

/// Lowest priority rank the catalog uses; rank 1 is the highest.
pub const MAX_PRIORITY: u32 = 5;

/// Distance score used when either end of the distance is unknown.
pub const NEUTRAL_DISTANCE_SCORE: f64 = 0.5;

/// Output of a scoring pass for one attraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored {
    /// Composite score; `0.0` for attractions that cannot be recommended.
    pub score: f64,
    /// Unclamped distance from the current location in kilometres.
    pub distance: Option<f64>,
}

/// Per-criterion scores before weighting, each in `0.0..=1.0` for catalog
/// ranks between 1 and [`MAX_PRIORITY`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// Priority-rank score.
    pub priority: f64,
    /// Wait-time score.
    pub wait_time: f64,
    /// Distance score.
    pub distance: f64,
}

/// Calculate a recommendation score for an attraction.
///
/// Implementations must return a score of `0.0` for attractions whose
/// status makes them ineligible, and must still report the distance when it
/// is computable so it can be displayed.
///
/// # Examples
///
/// ```rust
/// use parkside_core::{Attraction, CatalogEntry, CurrentLocation, Scored, Scorer};
///
/// struct FlatScorer;
///
/// impl Scorer for FlatScorer {
///     fn score(&self, _attraction: &Attraction, _location: Option<&CurrentLocation>) -> Scored {
///         Scored { score: 1.0, distance: None }
///     }
/// }
///
/// let attraction = Attraction::from(CatalogEntry::new(1, "Coaster", "Frontier", 1));
/// assert_eq!(FlatScorer.score(&attraction, None).score, 1.0);
/// ```
pub trait Scorer {
    /// Score `attraction` as seen from `location`.
    fn score(&self, attraction: &Attraction, location: Option<&CurrentLocation>) -> Scored;
}

/// Weighted three-criterion scorer backed by calibrated ranges.
///
/// # Examples
/// ```
/// use parkside_core::{
///     Attraction, CalibrationRange, CatalogEntry, Scorer, WeightProfile, WeightedScorer,
/// };
///
/// let scorer = WeightedScorer::new(WeightProfile::default(), CalibrationRange::default());
/// let mut attraction = Attraction::from(CatalogEntry::new(1, "Coaster", "Frontier", 1));
/// attraction.wait_time = Some(0);
///
/// // 0.5 * 1.0 (rank 1) + 0.3 * 1.0 (no wait) + 0.2 * 0.5 (distance unknown)
/// let scored = scorer.score(&attraction, None);
/// assert!((scored.score - 0.9).abs() < 1e-12);
/// assert_eq!(scored.distance, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedScorer {
    weights: WeightProfile,
    range: CalibrationRange,
}

impl WeightedScorer {
    /// Build a scorer from a weight profile and calibrated ranges.
    #[must_use]
    pub const fn new(weights: WeightProfile, range: CalibrationRange) -> Self {
        Self { weights, range }
    }

    /// Weights applied by this scorer.
    #[must_use]
    pub const fn weights(&self) -> WeightProfile {
        self.weights
    }

    /// Ranges used to normalise wait time and distance.
    #[must_use]
    pub const fn range(&self) -> CalibrationRange {
        self.range
    }

    /// Compute the unweighted criterion scores and the raw distance.
    ///
    /// Status is ignored; callers that rank should use [`Scorer::score`].
    #[must_use]
    pub fn breakdown(
        &self,
        attraction: &Attraction,
        location: Option<&CurrentLocation>,
    ) -> (ScoreBreakdown, Option<f64>) {
        let distance = distance_from(attraction, location);
        let breakdown = ScoreBreakdown {
            priority: priority_score(attraction.priority),
            wait_time: wait_score(attraction.wait_time, self.range.max_wait_time),
            distance: distance_score(distance, self.range.max_distance_km),
        };
        (breakdown, distance)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "the composite score is a weighted sum"
    )]
    fn combine(&self, breakdown: ScoreBreakdown) -> f64 {
        self.weights.priority * breakdown.priority
            + self.weights.wait_time * breakdown.wait_time
            + self.weights.distance * breakdown.distance
    }
}

impl Scorer for WeightedScorer {
    fn score(&self, attraction: &Attraction, location: Option<&CurrentLocation>) -> Scored {
        if !attraction.status.is_eligible() {
            return Scored {
                score: 0.0,
                distance: distance_from(attraction, location),
            };
        }
        let (breakdown, distance) = self.breakdown(attraction, location);
        Scored {
            score: self.combine(breakdown),
            distance,
        }
    }
}

/// Map a priority rank onto a score: rank 1 gives `1.0`, rank
/// [`MAX_PRIORITY`] gives `0.2`, ranks past the ceiling bottom out at `0.0`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "rank normalisation divides by the priority ceiling"
)]
pub fn priority_score(priority: u32) -> f64 {
    let ceiling = f64::from(MAX_PRIORITY);
    ((ceiling - f64::from(priority) + 1.0) / ceiling).max(0.0)
}

/// Map a wait in minutes onto a score: no wait gives `1.0`, a wait at or
/// beyond `max_wait_time` gives `0.0`. An unknown wait counts as the ceiling.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "wait normalisation divides by the calibrated ceiling"
)]
pub fn wait_score(wait_time: Option<u32>, max_wait_time: u32) -> f64 {
    if max_wait_time == 0 {
        return 0.0;
    }
    let clamped = wait_time.unwrap_or(max_wait_time).min(max_wait_time);
    (1.0 - f64::from(clamped) / f64::from(max_wait_time)).max(0.0)
}

/// Map a distance in kilometres onto a score: `0 km` gives `1.0`, a distance
/// at or beyond `max_distance_km` gives `0.0`, an unknown distance gives
/// [`NEUTRAL_DISTANCE_SCORE`].
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "distance normalisation divides by the calibrated ceiling"
)]
pub fn distance_score(distance_km: Option<f64>, max_distance_km: f64) -> f64 {
    let Some(distance) = distance_km else {
        return NEUTRAL_DISTANCE_SCORE;
    };
    if !(max_distance_km.is_finite() && max_distance_km > 0.0) {
        return 0.0;
    }
    let clamped = distance.clamp(0.0, max_distance_km);
    (1.0 - clamped / max_distance_km).max(0.0)
}

fn distance_from(attraction: &Attraction, location: Option<&CurrentLocation>) -> Option<f64> {
    let here = location?;
    geodesy::distance_km(here.lat, here.lon, attraction.lat, attraction.lon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AttractionStatus, CatalogEntry};
    use rstest::{fixture, rstest};

    const TOLERANCE: f64 = 1e-12;

    #[fixture]
    fn scorer() -> WeightedScorer {
        WeightedScorer::new(WeightProfile::default(), CalibrationRange::default())
    }

    fn attraction(priority: u32, wait_time: Option<u32>) -> Attraction {
        let mut attraction = Attraction::from(
            CatalogEntry::new(1, "Coaster", "Frontier", priority).with_location(35.6320, 139.8800),
        );
        attraction.wait_time = wait_time;
        attraction
    }

    fn here(lat: f64, lon: f64) -> CurrentLocation {
        CurrentLocation {
            id: crate::AttractionId::new(99),
            name: "Gate".to_owned(),
            lat: Some(lat),
            lon: Some(lon),
        }
    }

    #[rstest]
    #[case(1, 1.0)]
    #[case(2, 0.8)]
    #[case(3, 0.6)]
    #[case(4, 0.4)]
    #[case(5, 0.2)]
    #[case(6, 0.0)]
    #[case(40, 0.0)]
    fn priority_scores_fall_linearly(#[case] priority: u32, #[case] expected: f64) {
        assert!((priority_score(priority) - expected).abs() < TOLERANCE);
    }

    #[rstest]
    #[case(Some(0), 1.0)]
    #[case(Some(90), 0.5)]
    #[case(Some(180), 0.0)]
    #[case(Some(400), 0.0)]
    #[case(None, 0.0)]
    fn wait_scores_against_the_ceiling(#[case] wait: Option<u32>, #[case] expected: f64) {
        assert!((wait_score(wait, 180) - expected).abs() < TOLERANCE);
    }

    #[rstest]
    fn unknown_wait_matches_the_ceiling() {
        assert!((wait_score(None, 180) - wait_score(Some(180), 180)).abs() < TOLERANCE);
    }

    #[rstest]
    fn zero_wait_ceiling_scores_zero() {
        assert!(wait_score(Some(0), 0).abs() < TOLERANCE);
    }

    #[rstest]
    #[case(None, 0.5)]
    #[case(Some(0.0), 1.0)]
    #[case(Some(1.0), 0.5)]
    #[case(Some(2.0), 0.0)]
    #[case(Some(7.5), 0.0)]
    fn distance_scores_against_the_ceiling(#[case] distance: Option<f64>, #[case] expected: f64) {
        assert!((distance_score(distance, 2.0) - expected).abs() < TOLERANCE);
    }

    #[rstest]
    fn visited_attraction_scores_zero_but_reports_distance(scorer: WeightedScorer) {
        let mut visited = attraction(1, Some(0));
        visited.status = AttractionStatus::Visited;
        let scored = scorer.score(&visited, Some(&here(35.6330, 139.8800)));
        assert!(scored.score.abs() < TOLERANCE);
        assert!(scored.distance.is_some());
    }

    #[rstest]
    fn suspended_attraction_scores_zero(scorer: WeightedScorer) {
        let mut suspended = attraction(1, Some(0));
        suspended.status = AttractionStatus::Suspended;
        assert!(scorer.score(&suspended, None).score.abs() < TOLERANCE);
    }

    #[rstest]
    fn reports_unclamped_distance(scorer: WeightedScorer) {
        // Roughly 11 km north, far beyond the 2 km ceiling.
        let location = here(35.7320, 139.8800);
        let scored = scorer.score(&attraction(1, Some(0)), Some(&location));
        let distance = scored.distance.expect("both ends located");
        assert!(distance > 10.0);
        // 0.5 * 1.0 + 0.3 * 1.0 + 0.2 * 0.0
        assert!((scored.score - 0.8).abs() < TOLERANCE);
    }

    #[rstest]
    fn location_without_coordinates_is_neutral(scorer: WeightedScorer) {
        let location = CurrentLocation {
            lat: None,
            lon: None,
            ..here(0.0, 0.0)
        };
        let scored = scorer.score(&attraction(1, Some(0)), Some(&location));
        assert_eq!(scored.distance, None);
        assert!((scored.score - 0.9).abs() < TOLERANCE);
    }

    #[rstest]
    fn unbalanced_weights_are_not_renormalised() {
        let scorer = WeightedScorer::new(
            WeightProfile::new(1.0, 1.0, 1.0),
            CalibrationRange::default(),
        );
        let scored = scorer.score(&attraction(1, Some(0)), Some(&here(35.6320, 139.8800)));
        assert!((scored.score - 3.0).abs() < TOLERANCE);
    }

    #[rstest]
    fn breakdown_reports_each_criterion(scorer: WeightedScorer) {
        let (breakdown, distance) = scorer.breakdown(&attraction(3, Some(45)), None);
        assert!((breakdown.priority - 0.6).abs() < TOLERANCE);
        assert!((breakdown.wait_time - 0.75).abs() < TOLERANCE);
        assert!((breakdown.distance - NEUTRAL_DISTANCE_SCORE).abs() < TOLERANCE);
        assert_eq!(distance, None);
    }
}
