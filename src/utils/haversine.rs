//! Great-circle distance between two [`Location`]s.

use crate::location::Location;

/// Mean radius of the Earth.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Computes the haversine distance between two locations in
/// kilometers. Altitude is ignored.
///
/// The math runs in `f64`: nearby points differ only in the last few
/// digits of an `f32` coordinate.
pub fn distance(from: &Location, to: &Location) -> f32 {
    let lat1 = f64::from(from.latitude.into_inner()).to_radians();
    let lat2 = f64::from(to.latitude.into_inner()).to_radians();
    let d_lat = lat2 - lat1;
    let lon1 = f64::from(from.longitude.into_inner());
    let lon2 = f64::from(to.longitude.into_inner());
    let d_lon = (lon2 - lon1).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `h` a hair past 1 for antipodal points.
    (2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()) as f32
}
