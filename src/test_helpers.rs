//! Road map fixtures shared by the unit tests.

use petgraph::graph::NodeIndex;
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    edge::Road, generator::generate_nodes_near_with_rng, location::Location, node::Node,
    router::engine::Router,
};

/// Builds a map of two-way roads with the given costs. Every node sits
/// at the same location, so the A* heuristic is zero.
pub(crate) fn road_map(uids: &[&str], roads: &[(&str, &str, f32)]) -> Router {
    let mut router = Router::new();
    for uid in uids {
        router
            .add_node(Node::new(*uid, Location::new(0.0, 0.0)))
            .expect("unique uid");
    }
    for &(a, b, cost) in roads {
        router
            .add_two_way_road(a, b, Road::with_cost(cost))
            .expect("known uids");
    }
    router
}

/// Seeded random map around San Francisco. Nodes are `node-0`,
/// `node-1`, ... and roads join nodes at most `max_distance_km` apart.
pub(crate) fn random_road_map(seed: u64, capacity: usize, max_distance_km: f32) -> Router {
    let center = Location::new(37.7749, -122.4194);
    let mut rng = StdRng::seed_from_u64(seed);
    let nodes = generate_nodes_near_with_rng(&center, 10.0, capacity, &mut rng);
    Router::from_nodes(nodes, max_distance_km, 50.0).expect("valid roads")
}

pub(crate) fn index(router: &Router, uid: &str) -> NodeIndex {
    router.get_node_index(uid).expect("node exists")
}

pub(crate) fn uids<'a>(router: &'a Router, path: &[NodeIndex]) -> Vec<&'a str> {
    router.uids(path)
}
