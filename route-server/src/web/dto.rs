//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Edge, EdgeId, Graph, RouteResult, TransportMode};
use crate::network::Network;

/// Query parameters for a route search.
#[derive(Debug, Default, Deserialize)]
pub struct RouteQuery {
    /// Optimization policy: time, cost, distance, combined or combo
    pub policy: Option<String>,

    /// Solver: dijkstra (default) or bellman_ford
    pub algorithm: Option<String>,

    /// Start location (defaults to the network's origin)
    pub origin: Option<String>,

    /// End location (defaults to the network's destination)
    pub destination: Option<String>,

    /// Weight of normalized time for the combined policy
    pub time_weight: Option<f64>,

    /// Weight of normalized cost for the combined policy
    pub cost_weight: Option<f64>,
}

/// Result of a route search.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub origin: String,
    pub destination: String,
    pub policy: String,
    pub algorithm: String,

    /// The optimal route, or null if the destination is unreachable
    pub route: Option<RouteView>,
}

/// An optimal route.
#[derive(Debug, Serialize)]
pub struct RouteView {
    /// Label of the policy that produced the route
    pub label: String,

    /// Locations in travel order
    pub path: Vec<String>,

    /// The edge taken for each consecutive pair of locations
    pub segments: Vec<EdgeView>,

    pub total_time: f64,
    pub total_cost: f64,
    pub total_distance: f64,
}

/// A single edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeView {
    pub id: usize,
    pub from: String,
    pub to: String,
    pub mode: TransportMode,
    pub time: f64,
    pub cost: f64,
    pub distance: f64,
}

/// Read-only view of the configured network.
#[derive(Debug, Serialize)]
pub struct NetworkResponse {
    pub origin: String,
    pub destination: String,
    pub max_time: f64,
    pub max_cost: f64,
    pub locations: Vec<String>,
    pub edges: Vec<EdgeView>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl EdgeView {
    pub fn from_edge(id: EdgeId, edge: &Edge) -> Self {
        Self {
            id: id.0,
            from: edge.from.to_string(),
            to: edge.to.to_string(),
            mode: edge.mode,
            time: edge.time,
            cost: edge.cost,
            distance: edge.distance,
        }
    }
}

impl RouteView {
    /// Render a route, looking up each segment's edge in the graph it was
    /// solved on.
    pub fn from_route(route: &RouteResult, graph: &Graph) -> Self {
        let segments = route
            .edges()
            .iter()
            .filter_map(|&id| graph.edge(id).map(|e| EdgeView::from_edge(id, e)))
            .collect();
        let totals = route.totals();

        Self {
            label: route.policy_label().to_string(),
            path: route.path().iter().map(ToString::to_string).collect(),
            segments,
            total_time: totals.time,
            total_cost: totals.cost,
            total_distance: totals.distance,
        }
    }
}

impl NetworkResponse {
    pub fn from_network(network: &Network) -> Self {
        let graph = network.graph();
        let normalization = network.normalization();

        Self {
            origin: network.origin().to_string(),
            destination: network.destination().to_string(),
            max_time: normalization.max_time(),
            max_cost: normalization.max_cost(),
            locations: graph.nodes().iter().map(ToString::to_string).collect(),
            edges: graph
                .edges()
                .iter()
                .enumerate()
                .map(|(i, e)| EdgeView::from_edge(EdgeId(i), e))
                .collect(),
        }
    }
}
