//! Pure functions over paths.

use std::collections::HashSet;
use std::hash::Hash;

use super::graph::RoadGraph;

/// Sums the cost of every edge along `path`.
///
/// Paths with fewer than two nodes cost nothing. Consecutive nodes
/// must be joined by an edge.
pub fn path_cost<G: RoadGraph>(graph: &G, path: &[G::Node]) -> f32 {
    path.windows(2)
        .filter_map(|pair| {
            let edge = graph.edge_between(pair[0], pair[1]);
            debug_assert!(edge.is_some(), "no edge between consecutive path nodes");
            edge
        })
        .map(|edge| graph.edge_cost(edge))
        .sum()
}

/// Fraction of the nodes of `reference` that do not appear in `other`,
/// in `[0, 1]`.
///
/// Both paths are compared as node sets. `reference` must not be empty;
/// an empty reference yields 0.
pub fn path_difference<N: Copy + Eq + Hash>(reference: &[N], other: &[N]) -> f32 {
    debug_assert!(!reference.is_empty(), "difference against an empty path");
    let reference: HashSet<N> = reference.iter().copied().collect();
    if reference.is_empty() {
        return 0.0;
    }
    let other: HashSet<N> = other.iter().copied().collect();

    let missing = reference.difference(&other).count();
    missing as f32 / reference.len() as f32
}
