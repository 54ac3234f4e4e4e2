//! The core of the router library.
//!
//! The engine module holds a road map of located nodes and roads.
//! Path finding algorithms from [`crate::algorithms`] run directly on
//! it through its [`RoadGraph`] implementation.

/// The router engine module.
pub mod engine {
    use std::collections::HashMap;

    use ordered_float::OrderedFloat;
    use petgraph::{
        graph::{EdgeIndex, NodeIndex},
        stable_graph::StableDiGraph,
        visit::EdgeRef,
    };

    use crate::{
        algorithms::{
            alternative::alternative_route_with_config,
            graph::RoadGraph,
            path::path_cost,
            search::{a_star, breadth_first_search, dijkstras_algorithm, Algorithm, Path},
        },
        config::AlternativeRouteConfig,
        edge::Road,
        error::{Result, RouterError},
        haversine,
        node::Node,
        utils::graph::build_roads,
    };

    /// Relative slack allowed when comparing a road's length with the
    /// crow-fly distance between its ends, for `f32` rounding.
    const ROAD_LENGTH_TOLERANCE: f32 = 1e-4;

    /// A route found by the [`Router`] facade.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Route {
        /// Nodes from the start to the end, both included.
        pub path: Vec<NodeIndex>,
        /// Total cost of the roads along `path`.
        pub cost: f32,
    }

    impl Route {
        /// Number of roads taken.
        pub fn hop_count(&self) -> usize {
            self.path.len().saturating_sub(1)
        }
    }

    /// A Router struct contains a road map and also a hashmap that maps
    /// a node uid to its index in the graph.
    #[derive(Debug, Clone, Default)]
    pub struct Router {
        graph: StableDiGraph<Node, Road>,
        node_indices: HashMap<String, NodeIndex>,
        max_road_speed: OrderedFloat<f32>,
        alternative_config: AlternativeRouteConfig,
    }

    impl Router {
        /// Creates an empty router.
        pub fn new() -> Router {
            Router::default()
        }

        /// Creates a router connecting every pair of nodes that are at
        /// most `max_distance_km` apart as the crow flies, with roads
        /// driven at `speed_kmh`.
        pub fn from_nodes(
            nodes: Vec<Node>,
            max_distance_km: f32,
            speed_kmh: f32,
        ) -> Result<Router> {
            info!("[1/3] Initializing the router engine...");
            info!("[2/3] Building roads...");
            let roads = build_roads(&nodes, max_distance_km, speed_kmh);

            info!("[3/3] Building the graph...");
            let mut router = Router::new();
            let mut indices = Vec::with_capacity(nodes.len());
            for node in nodes {
                indices.push(router.add_node(node)?);
            }
            for (from, to, road) in roads {
                router.insert_road(indices[from], indices[to], road)?;
            }

            info!(
                "Router ready with {} nodes and {} roads.",
                router.get_node_count(),
                router.get_edge_count()
            );
            Ok(router)
        }

        /// Replaces the configuration used by
        /// [`find_alternative_route`](Router::find_alternative_route).
        pub fn with_alternative_config(
            mut self,
            config: AlternativeRouteConfig,
        ) -> Result<Router> {
            config.validate()?;
            self.alternative_config = config;
            Ok(self)
        }

        /// Adds a node. Its uid must not be taken yet.
        pub fn add_node(&mut self, node: Node) -> Result<NodeIndex> {
            if self.node_indices.contains_key(&node.uid) {
                return Err(RouterError::DuplicateNode { uid: node.uid });
            }
            let uid = node.uid.clone();
            let index = self.graph.add_node(node);
            self.node_indices.insert(uid, index);
            Ok(index)
        }

        /// Adds a one-way road from `from` to `to`.
        pub fn add_road(&mut self, from: &str, to: &str, road: Road) -> Result<EdgeIndex> {
            let from_index = self.lookup(from)?;
            let to_index = self.lookup(to)?;
            self.insert_road(from_index, to_index, road)
        }

        /// Adds a road in each direction between `a` and `b`.
        pub fn add_two_way_road(
            &mut self,
            a: &str,
            b: &str,
            road: Road,
        ) -> Result<(EdgeIndex, EdgeIndex)> {
            Ok((self.add_road(a, b, road)?, self.add_road(b, a, road)?))
        }

        fn insert_road(
            &mut self,
            from: NodeIndex,
            to: NodeIndex,
            road: Road,
        ) -> Result<EdgeIndex> {
            if !road.is_valid() {
                return Err(RouterError::InvalidRoad {
                    from: self.uid_of(from),
                    to: self.uid_of(to),
                    reason: format!(
                        "distance {} km at {} km/h",
                        road.distance_km, road.speed_kmh
                    ),
                });
            }
            // A road shorter than the crow-fly distance would make the A*
            // heuristic overestimate.
            let crow_fly = self.crow_fly_distance_between(from, to);
            if road.distance_km.into_inner() < crow_fly * (1.0 - ROAD_LENGTH_TOLERANCE) {
                return Err(RouterError::InvalidRoad {
                    from: self.uid_of(from),
                    to: self.uid_of(to),
                    reason: format!(
                        "distance {} km is shorter than the {} km crow-fly distance",
                        road.distance_km, crow_fly
                    ),
                });
            }
            self.max_road_speed = self.max_road_speed.max(road.speed_kmh);
            Ok(self.graph.add_edge(from, to, road))
        }

        /// Get the NodeIndex struct for a given node uid. The NodeIndex
        /// struct is used to reference things in the graph.
        pub fn get_node_index(&self, uid: &str) -> Option<NodeIndex> {
            self.node_indices.get(uid).copied()
        }

        /// Get the node stored at `index`.
        pub fn get_node(&self, index: NodeIndex) -> Option<&Node> {
            self.graph.node_weight(index)
        }

        /// Get the number of nodes in the graph.
        pub fn get_node_count(&self) -> usize {
            self.graph.node_count()
        }

        /// Return the number of roads in the graph.
        pub fn get_edge_count(&self) -> usize {
            self.graph.edge_count()
        }

        /// Maps a path back to node uids.
        pub fn uids(&self, path: &[NodeIndex]) -> Vec<&str> {
            path.iter()
                .filter_map(|&index| self.get_node(index))
                .map(|node| node.uid.as_str())
                .collect()
        }

        /// Find a route between two nodes.
        ///
        /// # Arguments
        /// * `from` - Uid of the node to start from.
        /// * `to` - Uid of the node to end at.
        /// * `algorithm` - The algorithm to use.
        ///
        /// # Returns
        /// The route and its cost. [`RouterError::NodeNotFound`] if
        /// either uid is unknown, [`RouterError::RouteNotFound`] if the
        /// nodes are not connected.
        pub fn find_route(&self, from: &str, to: &str, algorithm: Algorithm) -> Result<Route> {
            let from_index = self.lookup(from)?;
            let to_index = self.lookup(to)?;
            let path = match algorithm {
                Algorithm::Bfs => breadth_first_search(self, from_index, to_index),
                Algorithm::Dijkstra => dijkstras_algorithm(self, from_index, to_index),
                Algorithm::AStar => a_star(self, from_index, to_index),
            };
            self.to_route(from, to, path)
        }

        /// Find the best route between two nodes that is meaningfully
        /// different from the shortest one.
        ///
        /// [`RouterError::RouteNotFound`] when no such route exists.
        pub fn find_alternative_route(&self, from: &str, to: &str) -> Result<Route> {
            let from_index = self.lookup(from)?;
            let to_index = self.lookup(to)?;
            let path =
                alternative_route_with_config(self, from_index, to_index, &self.alternative_config);
            self.to_route(from, to, path)
        }

        #[cfg(test)]
        pub(crate) fn graph(&self) -> &StableDiGraph<Node, Road> {
            &self.graph
        }

        fn to_route(&self, from: &str, to: &str, path: Path<NodeIndex>) -> Result<Route> {
            if path.is_empty() {
                return Err(RouterError::RouteNotFound {
                    from: from.to_string(),
                    to: to.to_string(),
                });
            }
            let cost = path_cost(self, &path);
            debug!("route {} -> {}: {} nodes, cost {}", from, to, path.len(), cost);
            Ok(Route { path, cost })
        }

        fn lookup(&self, uid: &str) -> Result<NodeIndex> {
            self.get_node_index(uid)
                .ok_or_else(|| RouterError::NodeNotFound {
                    uid: uid.to_string(),
                })
        }

        fn uid_of(&self, index: NodeIndex) -> String {
            self.get_node(index)
                .map(|node| node.uid.clone())
                .unwrap_or_default()
        }
    }

    impl RoadGraph for Router {
        type Node = NodeIndex;
        type Edge = EdgeIndex;

        /// Neighbours in road insertion order.
        fn neighbors_of(&self, node: NodeIndex) -> Vec<NodeIndex> {
            let mut edges: Vec<_> = self.graph.edges(node).collect();
            edges.sort_by_key(|edge| edge.id());
            edges.into_iter().map(|edge| edge.target()).collect()
        }

        /// The first road inserted from `from` to `to`.
        fn edge_between(&self, from: NodeIndex, to: NodeIndex) -> Option<EdgeIndex> {
            self.graph
                .edges(from)
                .filter(|edge| edge.target() == to)
                .map(|edge| edge.id())
                .min()
        }

        fn edge_cost(&self, edge: EdgeIndex) -> f32 {
            self.graph
                .edge_weight(edge)
                .map_or(f32::INFINITY, Road::cost)
        }

        fn crow_fly_distance_between(&self, from: NodeIndex, to: NodeIndex) -> f32 {
            match (self.get_node(from), self.get_node(to)) {
                (Some(from), Some(to)) => haversine::distance(&from.location, &to.location),
                _ => 0.0,
            }
        }

        fn max_road_speed(&self) -> f32 {
            self.max_road_speed.into_inner()
        }
    }
}
