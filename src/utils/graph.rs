//! Helper functions for building road maps.

use crate::edge::Road;
use crate::haversine;
use crate::node::Node;

/// Build roads among nodes.
///
/// The function will try to connect every node to every other node.
/// However, only nodes whose crow-fly distance is within
/// `max_distance_km` are connected. The road length is that crow-fly
/// distance, so the A* heuristic stays admissible on the result.
///
/// # Arguments
/// * `nodes` - A slice of nodes.
/// * `max_distance_km` - Only nodes within this distance are connected.
/// * `speed_kmh` - Speed limit of every road.
///
/// # Returns
/// A vector of roads in the format of (from_position, to_position, road),
/// positions being indices into `nodes`.
///
/// # Time Complexity
/// *O*(*n^2*).
pub fn build_roads(
    nodes: &[Node],
    max_distance_km: f32,
    speed_kmh: f32,
) -> Vec<(usize, usize, Road)> {
    let mut roads = Vec::new();
    for (i, from) in nodes.iter().enumerate() {
        for (j, to) in nodes.iter().enumerate() {
            if i == j {
                continue;
            }
            let distance = haversine::distance(&from.location, &to.location);
            if distance <= max_distance_km {
                roads.push((i, j, Road::new(distance, speed_kmh)));
            }
        }
    }
    roads
}
