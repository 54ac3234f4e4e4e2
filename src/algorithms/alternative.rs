//! Alternative route selection.
//!
//! The best route is found with A*. Then each of its edges is excluded
//! in turn and A* runs again, which pushes the search into a different
//! corridor. The cheapest of these detours that shares little enough
//! of the best route wins.

use super::graph::{NoopObserver, RoadGraph};
use super::path::{path_cost, path_difference};
use super::search::{a_star, search, Algorithm, Path};
use crate::config::AlternativeRouteConfig;

/// Finds the cheapest route from `start` to `end` that differs from the
/// best route by more than the default threshold.
///
/// Returns the empty path if there is no route at all, or if every
/// detour is too similar to the best route.
pub fn alternative_route<G: RoadGraph>(graph: &G, start: G::Node, end: G::Node) -> Path<G::Node> {
    alternative_route_with_config(graph, start, end, &AlternativeRouteConfig::default())
}

/// [`alternative_route`] with an explicit difference threshold.
///
/// # Time Complexity
/// One A* search per edge of the best route.
pub fn alternative_route_with_config<G: RoadGraph>(
    graph: &G,
    start: G::Node,
    end: G::Node,
    config: &AlternativeRouteConfig,
) -> Path<G::Node> {
    let best_route = a_star(graph, start, end);
    if best_route.is_empty() {
        debug!("no route from {:?} to {:?}, skipping alternatives", start, end);
        return Vec::new();
    }

    let mut alternative: Path<G::Node> = Vec::new();
    let mut alternative_cost: Option<f32> = None;

    for pair in best_route.windows(2) {
        let Some(edge) = graph.edge_between(pair[0], pair[1]) else {
            continue;
        };
        let candidate = search(graph, start, end, Algorithm::AStar, Some(edge), &mut NoopObserver);
        if candidate.is_empty() {
            continue;
        }

        let difference = path_difference(&best_route, &candidate);
        let cost = path_cost(graph, &candidate);
        debug!(
            "without {:?}: {} nodes, cost {}, difference {}",
            edge,
            candidate.len(),
            cost,
            difference
        );

        if difference > config.min_difference && alternative_cost.map_or(true, |best| cost < best) {
            alternative = candidate;
            alternative_cost = Some(cost);
        }
    }

    alternative
}
