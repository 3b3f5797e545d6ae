//! Great-circle distance between POIs.
//!
//! Haversine on a spherical Earth (WGS-84 mean radius). This is the only
//! notion of "nearness" the planner uses.

use crate::models::poi::GeoPoint;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance in kilometers between two points.
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1_rad = from.latitude.to_radians();
    let lat2_rad = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Index of the candidate closest to `origin`. Ties keep the earliest one.
pub fn nearest_index<I>(origin: GeoPoint, candidates: I) -> Option<usize>
where
    I: IntoIterator<Item = GeoPoint>,
{
    let mut nearest: Option<(usize, f64)> = None;

    for (idx, point) in candidates.into_iter().enumerate() {
        let distance = haversine_km(origin, point);
        match nearest {
            Some((_, best)) if distance >= best => {}
            _ => nearest = Some((idx, distance)),
        }
    }

    nearest.map(|(idx, _)| idx)
}
