//! Struct definitions and implementations for objects that represent
//! vertices in a road map.
//!
//! A [`Node`] carries a human readable uid and a [`Location`]. Nodes
//! are owned by the graph; searches only ever hold the graph's handle
//! for a node (a `NodeIndex` for the [`Router`](`super::router::engine::Router`)),
//! so two nodes with identical payloads are still distinct vertices.

use serde::{Deserialize, Serialize};

use super::location::Location;

/// Represent a vertex in a road map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    /// Typed as a [`String`] to allow for synthetic ids, e.g.
    /// `usa:ca:palo-alto`. The router refuses two nodes with the same
    /// uid so that uid lookups stay unambiguous.
    pub uid: String,

    /// Denotes the geographical position of the node.
    ///
    /// See also [`Location`].
    pub location: Location,
}

impl Node {
    /// Creates a node at the given location.
    pub fn new(uid: impl Into<String>, location: Location) -> Self {
        Node {
            uid: uid.into(),
            location,
        }
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
