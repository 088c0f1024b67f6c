//! Great-circle distances between attraction coordinates.
//!
//! Points follow the `geo` convention of `x = longitude`, `y = latitude`,
//! both in degrees. Inputs are not range-checked; the catalog is trusted.

use geo::Point;

/// Mean Earth radius used by the haversine formula, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points, in kilometres.
///
/// # Examples
/// ```
/// use geo::Point;
/// use parkside_core::geodesy::haversine_km;
///
/// let tokyo = Point::new(139.767, 35.681);
/// assert_eq!(haversine_km(tokyo, tokyo), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
pub fn haversine_km(from: Point<f64>, to: Point<f64>) -> f64 {
    let d_lat = (to.y() - from.y()).to_radians();
    let d_lon = (to.x() - from.x()).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + from.y().to_radians().cos() * to.y().to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Distance between two optional coordinate pairs, in kilometres.
///
/// Returns `None` when any coordinate is missing.
///
/// # Examples
/// ```
/// use parkside_core::geodesy::distance_km;
///
/// assert!(distance_km(Some(35.0), None, Some(35.0), Some(139.0)).is_none());
/// let d = distance_km(Some(0.0), Some(0.0), Some(0.0), Some(1.0)).unwrap();
/// assert!((d - 111.19).abs() < 0.01);
/// ```
#[must_use]
pub fn distance_km(
    lat1: Option<f64>,
    lon1: Option<f64>,
    lat2: Option<f64>,
    lon2: Option<f64>,
) -> Option<f64> {
    let from = Point::new(lon1?, lat1?);
    let to = Point::new(lon2?, lat2?);
    Some(haversine_km(from, to))
}
