//! Defines the read-only graph interface consumed by the search
//! algorithms.
//!
//! The algorithms never build or mutate a graph. Anything that can
//! answer the queries of [`RoadGraph`] can be searched; the crate's own
//! implementation is [`Router`](crate::Router).

use std::fmt::Debug;
use std::hash::Hash;

/// Read-only queries over a road map.
pub trait RoadGraph {
    /// Handle identifying a node. Equality is handle equality.
    type Node: Copy + Eq + Hash + Debug;

    /// Handle identifying a directed edge.
    type Edge: Copy + Eq + Debug;

    /// All nodes directly reachable from `node` via one edge.
    ///
    /// The order must be stable for a given graph, since it decides
    /// which path wins a tie.
    fn neighbors_of(&self, node: Self::Node) -> Vec<Self::Node>;

    /// The edge leading from `from` to `to`, if any.
    fn edge_between(&self, from: Self::Node, to: Self::Node) -> Option<Self::Edge>;

    /// Non-negative traversal weight of `edge`.
    fn edge_cost(&self, edge: Self::Edge) -> f32;

    /// Straight-line distance between two nodes, ignoring roads.
    fn crow_fly_distance_between(&self, from: Self::Node, to: Self::Node) -> f32;

    /// Upper bound on the traversal speed of every edge. Dividing a
    /// crow-fly distance by it gives a lower bound on remaining cost.
    fn max_road_speed(&self) -> f32;
}

/// Notified by the search algorithms as they explore a graph.
///
/// Useful for animating a search. Observers only watch: nothing they do
/// can change which path a search returns.
pub trait SearchObserver<N> {
    /// `node` was reached through a new path pushed onto the frontier.
    fn on_enqueue(&mut self, _node: N) {}

    /// `node` was popped from the frontier and is now final.
    fn on_visit(&mut self, _node: N) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoopObserver;

impl<N> SearchObserver<N> for NoopObserver {}
