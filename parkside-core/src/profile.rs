//! Weight profiles: the visitor-tunable influence of each scoring criterion.
//!
//! Finite weights are stored exactly as given. A profile whose weights do
//! not sum to one is still usable; [`WeightProfile::check_sum`] only reports
//! it so the caller can show an advisory. Non-finite weights are never
//! accepted, because they cannot be scored or saved.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Coefficients applied to the priority, wait-time and distance scores.
///
/// # Examples
/// ```
/// use parkside_core::WeightProfile;
///
/// let profile = WeightProfile::default();
/// assert!(profile.check_sum());
///
/// let skewed = profile.update(0.5, 0.3, 0.3);
/// assert!(!skewed.check_sum());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct WeightProfile {
    /// Weight of the catalog priority rank.
    pub priority: f64,
    /// Weight of the reported wait time.
    pub wait_time: f64,
    /// Weight of the distance from the current location.
    pub distance: f64,
}

impl WeightProfile {
    /// Allowed deviation of the weight sum from `1.0`.
    pub const SUM_TOLERANCE: f64 = 0.01;

    /// Construct a profile from raw weights without validation.
    #[must_use]
    pub const fn new(priority: f64, wait_time: f64, distance: f64) -> Self {
        Self {
            priority,
            wait_time,
            distance,
        }
    }

    /// Use the persisted profile when present and finite, falling back to
    /// defaults.
    #[must_use]
    pub fn load(persisted: Option<Self>) -> Self {
        persisted.filter(Self::is_finite).unwrap_or_default()
    }

    /// Replace the three weights, keeping finite values exactly as given.
    ///
    /// A NaN or infinite argument leaves that weight at its current value.
    #[must_use]
    pub fn update(self, priority: f64, wait_time: f64, distance: f64) -> Self {
        Self::new(
            finite_or(priority, self.priority),
            finite_or(wait_time, self.wait_time),
            finite_or(distance, self.distance),
        )
    }

    /// Report whether every weight is a finite number.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.priority.is_finite() && self.wait_time.is_finite() && self.distance.is_finite()
    }

    /// Sum of the three weights.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "summing weights")]
    pub fn sum(&self) -> f64 {
        self.priority + self.wait_time + self.distance
    }

    /// Report whether the weights sum to `1.0` within [`Self::SUM_TOLERANCE`].
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "comparing the sum to one")]
    pub fn check_sum(&self) -> bool {
        (self.sum() - 1.0).abs() <= Self::SUM_TOLERANCE
    }
}

impl Default for WeightProfile {
    fn default() -> Self {
        Self::new(0.5, 0.3, 0.2)
    }
}

fn finite_or(candidate: f64, current: f64) -> f64 {
    if candidate.is_finite() {
        candidate
    } else {
        current
    }
}
