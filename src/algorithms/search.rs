//! Frontier-driven search.
//!
//! Breadth-first search, Dijkstra's algorithm and A* share one
//! expansion loop. They only differ in how the frontier orders pending
//! paths:
//!
//! * BFS pops paths in arrival order.
//! * Dijkstra pops the path with the lowest accumulated edge cost.
//! * A* adds a crow-fly estimate of the remaining cost to that.
//!
//! Every frontier entry owns a full copy of its path. A node may sit on
//! the frontier several times; only the first time it is popped counts,
//! later entries for it are dropped by the visited check.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet, VecDeque};

use ordered_float::OrderedFloat;

use super::graph::{NoopObserver, RoadGraph, SearchObserver};

/// An ordered sequence of nodes starting at the search's start node.
/// The empty path means no path was found.
pub type Path<N> = Vec<N>;

/// Path finding algorithms.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Breadth-first search. Fewest edges, costs ignored.
    Bfs,
    /// Dijkstra's algorithm. Lowest cost, no heuristic.
    Dijkstra,
    /// A* search. Lowest cost, guided by crow-fly distance.
    AStar,
}

/// Finds the path with the fewest edges from `start` to `end`.
pub fn breadth_first_search<G: RoadGraph>(
    graph: &G,
    start: G::Node,
    end: G::Node,
) -> Path<G::Node> {
    search(graph, start, end, Algorithm::Bfs, None, &mut NoopObserver)
}

/// Finds the cheapest path from `start` to `end` without a heuristic.
pub fn dijkstras_algorithm<G: RoadGraph>(
    graph: &G,
    start: G::Node,
    end: G::Node,
) -> Path<G::Node> {
    search(graph, start, end, Algorithm::Dijkstra, None, &mut NoopObserver)
}

/// Finds the cheapest path from `start` to `end`, exploring nodes that
/// are closer to `end` as the crow flies first.
pub fn a_star<G: RoadGraph>(graph: &G, start: G::Node, end: G::Node) -> Path<G::Node> {
    search(graph, start, end, Algorithm::AStar, None, &mut NoopObserver)
}

/// [`breadth_first_search`] reporting its progress to `observer`.
pub fn breadth_first_search_observed<G, O>(
    graph: &G,
    start: G::Node,
    end: G::Node,
    observer: &mut O,
) -> Path<G::Node>
where
    G: RoadGraph,
    O: SearchObserver<G::Node>,
{
    search(graph, start, end, Algorithm::Bfs, None, observer)
}

/// [`dijkstras_algorithm`] reporting its progress to `observer`.
pub fn dijkstras_algorithm_observed<G, O>(
    graph: &G,
    start: G::Node,
    end: G::Node,
    observer: &mut O,
) -> Path<G::Node>
where
    G: RoadGraph,
    O: SearchObserver<G::Node>,
{
    search(graph, start, end, Algorithm::Dijkstra, None, observer)
}

/// [`a_star`] reporting its progress to `observer`.
pub fn a_star_observed<G, O>(
    graph: &G,
    start: G::Node,
    end: G::Node,
    observer: &mut O,
) -> Path<G::Node>
where
    G: RoadGraph,
    O: SearchObserver<G::Node>,
{
    search(graph, start, end, Algorithm::AStar, None, observer)
}

/// Runs `algorithm` from `start` to `end`, never traversing
/// `excluded_edge`.
///
/// `start` and `end` must belong to `graph`. Returns the empty path when
/// `end` cannot be reached.
///
/// # Time Complexity
/// *O*(*E* log *E*) heap operations for Dijkstra and A*, *O*(*V* + *E*)
/// queue operations for BFS.
pub fn search<G, O>(
    graph: &G,
    start: G::Node,
    end: G::Node,
    algorithm: Algorithm,
    excluded_edge: Option<G::Edge>,
    observer: &mut O,
) -> Path<G::Node>
where
    G: RoadGraph,
    O: SearchObserver<G::Node>,
{
    debug!("{:?} search from {:?} to {:?}", algorithm, start, end);
    if let Some(edge) = excluded_edge {
        debug!("excluding edge {:?}", edge);
    }

    let max_road_speed = graph.max_road_speed();
    let mut frontier = Frontier::new(algorithm);
    let mut visited: HashSet<G::Node> = HashSet::new();
    frontier.push(vec![start], 0.0, 0.0);

    while let Some((current, cost)) = frontier.pop() {
        let Some(&node) = current.last() else {
            continue;
        };
        if !visited.insert(node) {
            continue;
        }
        observer.on_visit(node);

        if node == end {
            debug!(
                "found a path of {} nodes after visiting {} nodes",
                current.len(),
                visited.len()
            );
            return current;
        }

        for next in graph.neighbors_of(node) {
            if visited.contains(&next) {
                continue;
            }
            let Some(edge) = graph.edge_between(node, next) else {
                continue;
            };
            if excluded_edge == Some(edge) {
                continue;
            }

            let next_cost = cost + graph.edge_cost(edge);
            let priority = match algorithm {
                Algorithm::Bfs => 0.0,
                Algorithm::Dijkstra => next_cost,
                Algorithm::AStar => {
                    next_cost + remaining_cost_estimate(graph, next, end, max_road_speed)
                }
            };
            trace!("enqueue {:?} with priority {}", next, priority);
            observer.on_enqueue(next);

            let mut next_path = current.clone();
            next_path.push(next);
            frontier.push(next_path, next_cost, priority);
        }
    }

    debug!(
        "no path from {:?} to {:?} after visiting {} nodes",
        start,
        end,
        visited.len()
    );
    Vec::new()
}

/// Time needed to cover the crow-fly distance to `end` at the highest
/// road speed. Never more than the true remaining cost.
fn remaining_cost_estimate<G: RoadGraph>(
    graph: &G,
    node: G::Node,
    end: G::Node,
    max_road_speed: f32,
) -> f32 {
    if !(max_road_speed.is_finite() && max_road_speed > 0.0) {
        return 0.0;
    }
    graph.crow_fly_distance_between(node, end) / max_road_speed
}

//---------------------------------------------------------------
// Frontier
//---------------------------------------------------------------

/// Pending paths awaiting expansion.
enum Frontier<N> {
    /// Arrival order.
    Fifo(VecDeque<(Path<N>, f32)>),
    /// Lowest priority first, then lowest sequence number.
    Priority {
        heap: BinaryHeap<FrontierEntry<N>>,
        sequence: u64,
    },
}

impl<N> Frontier<N> {
    fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Bfs => Frontier::Fifo(VecDeque::new()),
            Algorithm::Dijkstra | Algorithm::AStar => Frontier::Priority {
                heap: BinaryHeap::new(),
                sequence: 0,
            },
        }
    }

    fn push(&mut self, path: Path<N>, cost: f32, priority: f32) {
        match self {
            Frontier::Fifo(queue) => queue.push_back((path, cost)),
            Frontier::Priority { heap, sequence } => {
                heap.push(FrontierEntry {
                    priority: OrderedFloat(priority),
                    sequence: *sequence,
                    cost,
                    path,
                });
                *sequence += 1;
            }
        }
    }

    /// Removes the next path along with its accumulated edge cost.
    fn pop(&mut self) -> Option<(Path<N>, f32)> {
        match self {
            Frontier::Fifo(queue) => queue.pop_front(),
            Frontier::Priority { heap, .. } => heap.pop().map(|entry| (entry.path, entry.cost)),
        }
    }
}

struct FrontierEntry<N> {
    priority: OrderedFloat<f32>,
    sequence: u64,
    cost: f32,
    path: Path<N>,
}

impl<N> Ord for FrontierEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest priority
        // first, and the earliest insertion among equals.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<N> PartialOrd for FrontierEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> PartialEq for FrontierEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for FrontierEntry<N> {}

//---------------------------------------------------------------
// Unit Tests
//---------------------------------------------------------------

#[cfg(test)]
mod search_tests {
    use super::*;
    use crate::algorithms::path::path_cost;
    use crate::test_helpers::{index, random_road_map, road_map, uids};
    use petgraph::algo::dijkstra;
    use petgraph::graph::NodeIndex;
    use petgraph::visit::EdgeRef;

    /// Records the order of observer notifications.
    #[derive(Default)]
    struct Recorder {
        enqueued: Vec<NodeIndex>,
        visited: Vec<NodeIndex>,
    }

    impl SearchObserver<NodeIndex> for Recorder {
        fn on_enqueue(&mut self, node: NodeIndex) {
            self.enqueued.push(node);
        }

        fn on_visit(&mut self, node: NodeIndex) {
            self.visited.push(node);
        }
    }

    /// A-B-C-D with unit costs plus a direct A-D road of cost 5.
    fn detour_map() -> crate::Router {
        road_map(
            &["A", "B", "C", "D"],
            &[("A", "B", 1.0), ("B", "C", 1.0), ("C", "D", 1.0), ("A", "D", 5.0)],
        )
    }

    #[test]
    fn test_a_star_prefers_cost_over_hops() {
        let router = detour_map();
        let path = a_star(&router, index(&router, "A"), index(&router, "D"));

        assert_eq!(uids(&router, &path), vec!["A", "B", "C", "D"]);
        assert_eq!(path_cost(&router, &path), 3.0);
    }

    #[test]
    fn test_direct_road_wins_when_cheaper() {
        let router = road_map(
            &["A", "B", "C", "D"],
            &[("A", "B", 1.0), ("B", "C", 1.0), ("C", "D", 1.0), ("A", "D", 2.0)],
        );
        let (a, d) = (index(&router, "A"), index(&router, "D"));

        assert_eq!(uids(&router, &a_star(&router, a, d)), vec!["A", "D"]);
        assert_eq!(uids(&router, &dijkstras_algorithm(&router, a, d)), vec!["A", "D"]);
    }

    #[test]
    fn test_bfs_prefers_hops_over_cost() {
        let router = detour_map();
        let path = breadth_first_search(&router, index(&router, "A"), index(&router, "D"));

        assert_eq!(uids(&router, &path), vec!["A", "D"]);
        assert_eq!(path_cost(&router, &path), 5.0);
    }

    #[test]
    fn test_dijkstra_matches_a_star_on_detour() {
        let router = detour_map();
        let (a, d) = (index(&router, "A"), index(&router, "D"));

        assert_eq!(dijkstras_algorithm(&router, a, d), a_star(&router, a, d));
    }

    #[test]
    fn test_start_equals_end() {
        let router = detour_map();
        let a = index(&router, "A");

        for algorithm in [Algorithm::Bfs, Algorithm::Dijkstra, Algorithm::AStar] {
            let path = search(&router, a, a, algorithm, None, &mut NoopObserver);
            assert_eq!(path, vec![a]);
            assert_eq!(path_cost(&router, &path), 0.0);
        }
    }

    #[test]
    fn test_disconnected_nodes_have_no_path() {
        let router = road_map(
            &["A", "B", "C", "D"],
            &[("A", "B", 1.0), ("C", "D", 1.0)],
        );
        let (a, d) = (index(&router, "A"), index(&router, "D"));

        assert!(breadth_first_search(&router, a, d).is_empty());
        assert!(dijkstras_algorithm(&router, a, d).is_empty());
        assert!(a_star(&router, a, d).is_empty());
    }

    #[test]
    fn test_excluded_edge_is_never_traversed() {
        let router = detour_map();
        let (a, b, d) = (index(&router, "A"), index(&router, "B"), index(&router, "D"));
        let excluded = router.edge_between(a, b);
        assert!(excluded.is_some());

        for algorithm in [Algorithm::Bfs, Algorithm::Dijkstra, Algorithm::AStar] {
            let path = search(&router, a, d, algorithm, excluded, &mut NoopObserver);
            assert_eq!(uids(&router, &path), vec!["A", "D"], "{:?}", algorithm);
        }
    }

    #[test]
    fn test_excluding_the_only_road_leaves_no_path() {
        let router = road_map(&["A", "B"], &[("A", "B", 1.0)]);
        let (a, b) = (index(&router, "A"), index(&router, "B"));
        let excluded = router.edge_between(a, b);

        let path = search(&router, a, b, Algorithm::AStar, excluded, &mut NoopObserver);
        assert!(path.is_empty());

        // The reverse direction is a different edge.
        let path = search(&router, b, a, Algorithm::AStar, excluded, &mut NoopObserver);
        assert_eq!(path, vec![b, a]);
    }

    #[test]
    fn test_equal_cost_ties_follow_insertion_order() {
        let router = road_map(
            &["S", "X", "Y", "E"],
            &[("S", "X", 1.0), ("S", "Y", 1.0), ("X", "E", 1.0), ("Y", "E", 1.0)],
        );
        let (s, e) = (index(&router, "S"), index(&router, "E"));

        for algorithm in [Algorithm::Bfs, Algorithm::Dijkstra, Algorithm::AStar] {
            let path = search(&router, s, e, algorithm, None, &mut NoopObserver);
            assert_eq!(uids(&router, &path), vec!["S", "X", "E"], "{:?}", algorithm);
        }
    }

    #[test]
    fn test_observer_sees_visits_without_changing_the_result() {
        let router = detour_map();
        let (a, d) = (index(&router, "A"), index(&router, "D"));
        let mut recorder = Recorder::default();

        let observed = a_star_observed(&router, a, d, &mut recorder);

        assert_eq!(observed, a_star(&router, a, d));
        assert_eq!(recorder.visited.first(), Some(&a));
        assert_eq!(recorder.visited.last(), Some(&d));
        assert!(recorder.enqueued.contains(&d));
        assert!(!recorder.enqueued.contains(&a));
    }

    #[test]
    fn test_observed_variants_match_plain_ones() {
        let router = detour_map();
        let (a, d) = (index(&router, "A"), index(&router, "D"));

        assert_eq!(
            breadth_first_search_observed(&router, a, d, &mut Recorder::default()),
            breadth_first_search(&router, a, d)
        );
        assert_eq!(
            dijkstras_algorithm_observed(&router, a, d, &mut Recorder::default()),
            dijkstras_algorithm(&router, a, d)
        );
    }

    /// The crow-fly estimate steers A* toward the destination, so it
    /// finalizes fewer nodes than Dijkstra over the same searches.
    #[test]
    fn test_heuristic_narrows_the_search() {
        let router = random_road_map(1, 200, 2.0);
        let start = index(&router, "node-0");
        let mut plain = Recorder::default();
        let mut guided = Recorder::default();

        for end in router.graph().node_indices() {
            let shortest = dijkstras_algorithm_observed(&router, start, end, &mut plain);
            let directed = a_star_observed(&router, start, end, &mut guided);
            assert_eq!(shortest.is_empty(), directed.is_empty());
        }

        assert!(router.max_road_speed() > 0.0);
        assert!(
            guided.visited.len() < plain.visited.len(),
            "a* visited {} nodes, dijkstra {}",
            guided.visited.len(),
            plain.visited.len()
        );
    }

    #[test]
    fn test_heuristic_skips_nodes_behind_the_start() {
        // W lies behind S, away from E. Every road costs its crow-fly
        // length, so W is never worth finalizing for A*.
        let mut router = crate::Router::new();
        for (uid, longitude) in [("W", -0.01), ("S", 0.0), ("M", 0.01), ("E", 0.02)] {
            router
                .add_node(crate::node::Node::new(
                    uid,
                    crate::location::Location::new(0.0, longitude),
                ))
                .unwrap();
        }
        for (a, b) in [("S", "W"), ("S", "M"), ("M", "E")] {
            let (from, to) = (index(&router, a), index(&router, b));
            let length = router.crow_fly_distance_between(from, to);
            router
                .add_two_way_road(a, b, crate::edge::Road::new(length, 50.0))
                .unwrap();
        }
        let (s, w, e) = (index(&router, "S"), index(&router, "W"), index(&router, "E"));

        let mut plain = Recorder::default();
        let mut guided = Recorder::default();
        let shortest = dijkstras_algorithm_observed(&router, s, e, &mut plain);
        let directed = a_star_observed(&router, s, e, &mut guided);

        assert_eq!(shortest, directed);
        assert_eq!(uids(&router, &directed), vec!["S", "M", "E"]);
        assert!(plain.visited.contains(&w));
        assert!(!guided.visited.contains(&w));
    }

    /// Compares every search against petgraph's Dijkstra on random road
    /// maps around San Francisco.
    #[test]
    fn test_optimality_on_random_road_maps() {
        for seed in 0..5 {
            let router = random_road_map(seed, 40, 3.0);
            let graph = router.graph();
            let start = index(&router, "node-0");

            let costs = dijkstra(graph, start, None, |edge| edge.weight().cost());
            let hops = dijkstra(graph, start, None, |_| 1usize);

            for end in graph.node_indices() {
                let bfs = breadth_first_search(&router, start, end);
                let shortest = dijkstras_algorithm(&router, start, end);
                let guided = a_star(&router, start, end);

                let Some(&best_cost) = costs.get(&end) else {
                    assert!(bfs.is_empty());
                    assert!(shortest.is_empty());
                    assert!(guided.is_empty());
                    continue;
                };

                assert_eq!(bfs.len() - 1, hops[&end], "seed {} bfs hops", seed);

                let tolerance = 1e-4 * best_cost.max(1.0);
                let shortest_cost = path_cost(&router, &shortest);
                let guided_cost = path_cost(&router, &guided);
                assert!(
                    (shortest_cost - best_cost).abs() <= tolerance,
                    "seed {}: dijkstra {} vs {}",
                    seed,
                    shortest_cost,
                    best_cost
                );
                assert!(
                    (guided_cost - best_cost).abs() <= tolerance,
                    "seed {}: a* {} vs {}",
                    seed,
                    guided_cost,
                    best_cost
                );
                for path in [&bfs, &shortest, &guided] {
                    assert_eq!(path.first(), Some(&start));
                    assert_eq!(path.last(), Some(&end));
                }
            }
        }
    }
}
