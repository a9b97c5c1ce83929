//! JSON network configuration.
//!
//! A network file holds the edge list plus optional endpoints and
//! normalization maxima:
//!
//! ```json
//! {
//!   "origin": "Warehouse A",
//!   "destination": "Customer D",
//!   "normalization": { "max_time": 45, "max_cost": 8 },
//!   "edges": [
//!     { "from": "Warehouse A", "to": "Hub B", "mode": "bike", "time": 30, "cost": 5 }
//!   ]
//! }
//! ```
//!
//! Omitted endpoints default to the first and last location in node order.
//! Omitted maxima are derived from the edges.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{DomainError, Edge, Graph, Location};
use crate::planner::Normalization;

use super::{Network, NetworkError};

/// Normalization maxima as written in a network file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizationMaxima {
    pub max_time: f64,
    pub max_cost: f64,
}

/// On-disk form of a network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalization: Option<NormalizationMaxima>,
    pub edges: Vec<Edge>,
}

impl NetworkFile {
    /// Read and validate a network file.
    pub fn load(path: impl AsRef<Path>) -> Result<Network, NetworkError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| NetworkError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let network = Self::parse(&contents)?.into_network()?;
        info!(
            path = %path.display(),
            edges = network.graph().edge_count(),
            locations = network.graph().node_count(),
            "loaded network file"
        );
        Ok(network)
    }

    /// Parse a network file's JSON without validating the graph.
    pub fn parse(json: &str) -> Result<Self, NetworkError> {
        serde_json::from_str(json).map_err(|e| NetworkError::Json {
            message: e.to_string(),
        })
    }

    /// Validate the edges and endpoints and build the network.
    pub fn into_network(self) -> Result<Network, NetworkError> {
        let graph = Graph::new(self.edges)?;

        let normalization = match self.normalization {
            Some(m) => Normalization::new(m.max_time, m.max_cost)?,
            None => Normalization::from_graph(&graph),
        };

        let nodes = graph.nodes();
        let (first, last) = match (nodes.first(), nodes.last()) {
            (Some(first), Some(last)) => (first.clone(), last.clone()),
            _ => return Err(DomainError::EmptyGraph.into()),
        };
        let origin = self.origin.unwrap_or(first);
        let destination = self.destination.unwrap_or(last);

        Network::new(graph, origin, destination, normalization)
    }
}

impl From<&Network> for NetworkFile {
    fn from(network: &Network) -> Self {
        let normalization = network.normalization();
        Self {
            origin: Some(network.origin().clone()),
            destination: Some(network.destination().clone()),
            normalization: Some(NormalizationMaxima {
                max_time: normalization.max_time(),
                max_cost: normalization.max_cost(),
            }),
            edges: network.graph().edges().to_vec(),
        }
    }
}
