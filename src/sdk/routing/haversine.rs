//! Great-circle distance between two points using the haversine formula.
//!
//! The Earth is treated as a sphere of radius 6371 km, so results carry the
//! usual ~0.5% error against the ellipsoid. **Distance is in kilometers**.

use super::types::Position;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub fn distance_km(start: &Position, end: &Position) -> f64 {
    let d_lat = (end.latitude - start.latitude).to_radians();
    let d_lon = (end.longitude - start.longitude).to_radians();
    let lat1 = start.latitude.to_radians();
    let lat2 = end.latitude.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Rounds to two decimal places, the precision every reported distance uses.
pub fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}
