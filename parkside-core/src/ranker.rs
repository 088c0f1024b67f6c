//! Rank eligible attractions into a short recommendation list.

use crate::{Attraction, CurrentLocation, Scorer};

/// Number of recommendations returned when the caller does not choose.
pub const DEFAULT_RECOMMENDATIONS: usize = 3;

/// Recompute and store `score` and `distance` on every attraction.
pub fn rescore<S>(attractions: &mut [Attraction], scorer: &S, location: Option<&CurrentLocation>)
where
    S: Scorer + ?Sized,
{
    for attraction in attractions.iter_mut() {
        let scored = scorer.score(attraction, location);
        attraction.score = scored.score;
        attraction.distance = scored.distance;
    }
}

/// Return up to `limit` not-yet-visited attractions, best score first.
///
/// Every attraction is rescored first, so the slice is left with fresh
/// derived fields for display. Equal scores keep catalog order. An empty
/// result means nothing is eligible.
///
/// # Examples
/// ```
/// use parkside_core::{
///     Attraction, CalibrationRange, CatalogEntry, WeightProfile, WeightedScorer, recommend,
/// };
///
/// let mut attractions: Vec<Attraction> = vec![
///     CatalogEntry::new(1, "Teacups", "Fantasy", 4).into(),
///     CatalogEntry::new(2, "Coaster", "Frontier", 1).into(),
/// ];
/// let scorer = WeightedScorer::new(WeightProfile::default(), CalibrationRange::default());
///
/// let top = recommend(&mut attractions, &scorer, None, 1);
/// assert_eq!(top.len(), 1);
/// assert_eq!(top[0].name, "Coaster");
/// ```
pub fn recommend<S>(
    attractions: &mut [Attraction],
    scorer: &S,
    location: Option<&CurrentLocation>,
    limit: usize,
) -> Vec<Attraction>
where
    S: Scorer + ?Sized,
{
    rescore(attractions, scorer, location);
    let mut eligible: Vec<&Attraction> = attractions
        .iter()
        .filter(|attraction| attraction.status.is_eligible())
        .collect();
    // `sort_by` is stable, so ties stay in catalog order.
    eligible.sort_by(|a, b| b.score.total_cmp(&a.score));
    eligible.into_iter().take(limit).cloned().collect()
}
