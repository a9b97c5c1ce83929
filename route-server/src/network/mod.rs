//! Route networks: a graph plus the fixed query endpoints it serves.
//!
//! A network is configured once at startup, either from one of the built-in
//! tables or from a JSON file, and is read-only afterwards.

mod error;
mod file;
mod tables;

use crate::domain::{Edge, Graph, Location, RouteResult, TransportMode};
use crate::planner::{
    Algorithm, Normalization, Planner, PlannerConfig, Policy, RouteRequest, SearchError,
};

pub use error::NetworkError;
pub use file::{NetworkFile, NormalizationMaxima};
pub use tables::{BUILTIN_NETWORKS, builtin, chennai, chennai_transfers, delivery};

/// A graph with its configured origin, destination and normalization.
#[derive(Debug, Clone)]
pub struct Network {
    graph: Graph,
    origin: Location,
    destination: Location,
    normalization: Normalization,
}

impl Network {
    /// Create a network; origin and destination must be graph locations.
    pub fn new(
        graph: Graph,
        origin: Location,
        destination: Location,
        normalization: Normalization,
    ) -> Result<Self, NetworkError> {
        for (role, location) in [("origin", &origin), ("destination", &destination)] {
            if !graph.contains(location) {
                return Err(NetworkError::UnknownEndpoint {
                    role,
                    location: location.clone(),
                });
            }
        }

        Ok(Self {
            graph,
            origin,
            destination,
            normalization,
        })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn origin(&self) -> &Location {
        &self.origin
    }

    pub fn destination(&self) -> &Location {
        &self.destination
    }

    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    /// Planner configuration using this network's normalization.
    pub fn config(&self) -> PlannerConfig {
        PlannerConfig {
            normalization: self.normalization,
            ..PlannerConfig::default()
        }
    }

    /// Optimal route between the configured endpoints using the priority
    /// solver.
    pub fn solve(&self, policy: Policy) -> Result<Option<RouteResult>, SearchError> {
        self.solve_with(Algorithm::Dijkstra, policy)
    }

    /// Optimal route between the configured endpoints using a chosen solver.
    pub fn solve_with(
        &self,
        algorithm: Algorithm,
        policy: Policy,
    ) -> Result<Option<RouteResult>, SearchError> {
        let config = self.config();
        let request = RouteRequest::new(self.origin.clone(), self.destination.clone(), policy)
            .with_algorithm(algorithm);
        Planner::new(&self.graph, &config).solve(&request)
    }
}

/// Builder for creating a graph from literal edge data.
///
/// Provides a fluent API for adding edges; validation happens in `build`.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    edges: Vec<(String, String, TransportMode, f64, f64, f64)>,
}

impl GraphBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directed edge.
    pub fn edge(
        mut self,
        from: &str,
        to: &str,
        mode: TransportMode,
        time: f64,
        cost: f64,
        distance: f64,
    ) -> Self {
        self.edges
            .push((from.to_string(), to.to_string(), mode, time, cost, distance));
        self
    }

    /// Validate every edge and build the graph.
    pub fn build(self) -> Result<Graph, NetworkError> {
        let edges = self
            .edges
            .into_iter()
            .map(|(from, to, mode, time, cost, distance)| {
                Ok(Edge::new(
                    Location::parse(&from).map_err(crate::domain::DomainError::from)?,
                    Location::parse(&to).map_err(crate::domain::DomainError::from)?,
                    mode,
                    time,
                    cost,
                    distance,
                ))
            })
            .collect::<Result<Vec<_>, NetworkError>>()?;

        Ok(Graph::new(edges)?)
    }
}
