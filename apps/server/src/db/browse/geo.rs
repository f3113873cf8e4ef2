//! Radius filtering applied after the browse query.
//!
//! The restaurant table has no spatial index, so proximity is checked in process
//! with the haversine great-circle distance.

use super::params::FilterSet;
use crate::models::RestaurantRecord;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two points given in degrees.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    // Rounding can push `a` just past 1 for antipodal points.
    let a = ((d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Keep records within the requested radius, preserving order.
///
/// Identity unless distance, latitude and longitude are all set. A record
/// without coordinates is measured from (0, 0).
pub fn apply_distance_filter(
    records: Vec<RestaurantRecord>,
    filters: &FilterSet,
) -> Vec<RestaurantRecord> {
    let Some(geo) = filters.geo() else {
        return records;
    };

    records
        .into_iter()
        .filter(|record| {
            let distance = haversine_km(
                geo.latitude,
                geo.longitude,
                record.latitude.unwrap_or(0.0),
                record.longitude.unwrap_or(0.0),
            );
            distance <= geo.max_distance_km
        })
        .collect()
}
