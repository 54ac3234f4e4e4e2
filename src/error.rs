//! Error type for the [`Router`](crate::Router) facade.
//!
//! The search algorithms themselves never fail: a missing route is the
//! empty path. Errors only come from looking up or building a road map.

use thiserror::Error;

/// Convenient result alias for the router library.
pub type Result<T> = std::result::Result<T, RouterError>;

/// Top-level library error type.
#[derive(Debug, Error, PartialEq)]
pub enum RouterError {
    /// Raised when a uid does not name a node of the road map.
    #[error("node not found by uid: {uid}")]
    NodeNotFound { uid: String },

    /// Raised when a node is added with a uid that is already taken.
    #[error("duplicate node uid: {uid}")]
    DuplicateNode { uid: String },

    /// Raised when a road has an unusable length or speed limit.
    #[error("invalid road from {from} to {to}: {reason}")]
    InvalidRoad {
        from: String,
        to: String,
        reason: String,
    },

    /// Raised when no route could be found between two nodes.
    #[error("no route found between {from} and {to}")]
    RouteNotFound { from: String, to: String },

    /// Raised when a configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
