//! Road Map Routing Library.
//! Handles shortest and alternative route finding over road maps.
//!
//! Three search strategies share one frontier-driven engine:
//!
//! - [`breadth_first_search`]: fewest roads.
//! - [`dijkstras_algorithm`]: lowest cost.
//! - [`a_star`]: lowest cost, guided by the crow-fly distance to the
//!   destination.
//!
//! [`alternative_route`] looks for a cheap route that is genuinely
//! different from the best one.
//!
//! The algorithms run on anything implementing [`RoadGraph`]. The
//! crate ships [`Router`], a road map backed by `petgraph`, with a
//! uid-based facade returning [`Route`]s.

#[macro_use]
extern crate log;

mod types {
    pub mod edge;
    pub mod location;
    pub mod node;
    pub mod router;
}

mod utils {
    pub mod generator;
    pub mod graph;
    pub mod haversine;
}

pub mod algorithms {
    pub mod alternative;
    pub mod graph;
    pub mod path;
    pub mod search;
}

pub mod config;
pub mod error;

#[cfg(test)]
mod test_helpers;

pub use algorithms::{alternative, path, search};
pub use types::{edge, location, node, router};
pub use utils::{generator, haversine};

pub use algorithms::alternative::{alternative_route, alternative_route_with_config};
pub use algorithms::graph::{NoopObserver, RoadGraph, SearchObserver};
pub use algorithms::path::{path_cost, path_difference};
pub use algorithms::search::{
    a_star, a_star_observed, breadth_first_search, breadth_first_search_observed,
    dijkstras_algorithm, dijkstras_algorithm_observed, search, Algorithm, Path,
};
pub use config::AlternativeRouteConfig;
pub use error::{Result, RouterError};
pub use router::engine::{Route, Router};
