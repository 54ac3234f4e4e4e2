//! Random node generation, mostly for building test road maps.

use rand::Rng;

use crate::location::Location;
use crate::node::Node;

/// Kilometers per degree of latitude.
const KM_PER_DEGREE: f32 = 111.32;

/// Generates `capacity` nodes scattered uniformly within `radius_km` of
/// `location`. Uids are `node-0`, `node-1`, ...
pub fn generate_nodes_near(location: &Location, radius_km: f32, capacity: usize) -> Vec<Node> {
    generate_nodes_near_with_rng(location, radius_km, capacity, &mut rand::thread_rng())
}

/// Same as [`generate_nodes_near`] but drawing from `rng`, so that a
/// seeded generator yields a reproducible map.
pub fn generate_nodes_near_with_rng<R: Rng + ?Sized>(
    location: &Location,
    radius_km: f32,
    capacity: usize,
    rng: &mut R,
) -> Vec<Node> {
    let latitude = location.latitude.into_inner();
    let longitude = location.longitude.into_inner();
    let km_per_degree_longitude = KM_PER_DEGREE * latitude.to_radians().cos().max(f32::EPSILON);

    (0..capacity)
        .map(|i| {
            // sqrt keeps the density uniform over the disc.
            let distance = radius_km * rng.gen::<f32>().sqrt();
            let bearing = rng.gen_range(0.0..std::f32::consts::TAU);
            Node::new(
                format!("node-{}", i),
                Location::new(
                    latitude + distance * bearing.cos() / KM_PER_DEGREE,
                    longitude + distance * bearing.sin() / km_per_degree_longitude,
                ),
            )
        })
        .collect()
}
