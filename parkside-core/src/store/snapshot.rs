//! Data shapes exchanged with the persistence collaborator.

#[cfg(feature = "serde")]
use log::warn;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

use crate::{AttractionId, AttractionStatus, CurrentLocation, ListingQuery, WeightProfile};

/// Persisted live fields of one attraction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LiveState {
    /// Attraction the override applies to.
    pub id: AttractionId,
    /// Last reported wait in minutes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub wait_time: Option<u32>,
    /// Lifecycle status.
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: AttractionStatus,
}

/// Everything that survives between sessions.
///
/// Each part is optional on load; missing parts fall back to defaults.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StateSnapshot {
    /// Per-attraction overrides, merged onto the catalog by id.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attractions: Vec<LiveState>,
    /// Last confirmed visitor position.
    #[cfg_attr(feature = "serde", serde(default))]
    pub current_location: Option<CurrentLocation>,
    /// Saved weight profile. An incomplete or non-numeric entry reads as
    /// absent.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "deserialize_saved_weights")
    )]
    pub weights: Option<WeightProfile>,
    /// Filters and order last used for the listing view.
    #[cfg_attr(feature = "serde", serde(default))]
    pub listing: Option<ListingQuery>,
}

/// Weights as written by earlier saves, where a non-finite value was
/// serialised as `null`.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SavedWeights {
    priority: Option<f64>,
    wait_time: Option<f64>,
    distance: Option<f64>,
}

#[cfg(feature = "serde")]
fn deserialize_saved_weights<'de, D>(deserializer: D) -> Result<Option<WeightProfile>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(saved) = Option::<SavedWeights>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let (Some(priority), Some(wait_time), Some(distance)) =
        (saved.priority, saved.wait_time, saved.distance)
    {
        let profile = WeightProfile::new(priority, wait_time, distance);
        if profile.is_finite() {
            return Ok(Some(profile));
        }
    }
    warn!("saved weights are incomplete; using defaults");
    Ok(None)
}
