//! Network configuration error types.

use crate::domain::{DomainError, Location};
use crate::planner::PolicyError;

/// Errors that can occur when building or loading a network.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Edge data failed validation
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Normalization maxima are unusable
    #[error(transparent)]
    Policy(#[from] PolicyError),

    /// Configured origin or destination is not an edge endpoint
    #[error("{role} {location} is not a location in the network")]
    UnknownEndpoint {
        role: &'static str,
        location: Location,
    },

    /// Built-in network name outside the known set
    #[error("unknown built-in network: {0:?}")]
    UnknownNetwork(String),

    /// Network file could not be read
    #[error("failed to read network file {path}: {message}")]
    Io { path: String, message: String },

    /// Network file is not valid JSON for a network
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
