//! Domain error types.
//!
//! These errors represent malformed network data. They are distinct from
//! query-time errors raised by the planner.

use super::{Dimension, EdgeId, InvalidLocation, InvalidTransportMode};

/// Domain-level errors for validation of network data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A graph needs at least one edge to have any locations
    #[error("graph must have at least one edge")]
    EmptyGraph,

    /// An edge weight is NaN or infinite
    #[error("edge {edge} has non-finite {dimension}: {value}")]
    NonFiniteWeight {
        edge: EdgeId,
        dimension: Dimension,
        value: f64,
    },

    /// Route construction with mismatched path and edges
    #[error("invalid route: {0}")]
    InvalidRoute(&'static str),

    /// A location name failed validation
    #[error(transparent)]
    InvalidLocation(#[from] InvalidLocation),

    /// A transport mode label failed validation
    #[error(transparent)]
    InvalidTransportMode(#[from] InvalidTransportMode),
}
