//! Route search entry point.
//!
//! `Planner` answers "what is the optimal route from this origin to this
//! destination under this policy", dispatching to one of the two solvers
//! and turning the resulting tree into a `RouteResult`.

use std::fmt;

use tracing::{debug, warn};

use crate::domain::{EdgeId, Graph, Location, RouteResult};

use super::config::PlannerConfig;
use super::policy::{EdgeWeight, Policy, PolicyError};
use super::tree::ShortestPathTree;
use super::{bellman_ford, dijkstra, reconstruct};

/// Error from route search.
///
/// An unreachable destination is not an error: `solve` returns `Ok(None)`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// Origin or destination is not a location in the graph
    #[error("unknown location: {0}")]
    UnknownLocation(Location),

    /// The priority solver cannot handle a negative policy weight
    #[error("edge {edge} ({from} -> {to}) has a negative weight under this policy")]
    NegativeWeight {
        edge: EdgeId,
        from: Location,
        to: Location,
    },

    /// The iterative solver found a negative cycle reachable from the origin
    #[error("negative weight cycle detected through edge {edge} ({from} -> {to})")]
    NegativeCycle {
        edge: EdgeId,
        from: Location,
        to: Location,
    },

    /// Algorithm selector outside the known set
    #[error("unknown algorithm: {0:?}")]
    UnknownAlgorithm(String),

    /// Invalid policy selection
    #[error(transparent)]
    Policy(#[from] PolicyError),
}

/// Which solver answers a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Priority-driven relaxation; stops once the destination is settled.
    #[default]
    Dijkstra,
    /// Iterative relaxation with negative-cycle detection.
    BellmanFord,
}

impl Algorithm {
    /// Select an algorithm by name.
    pub fn parse(s: &str) -> Result<Self, SearchError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" | "priority" => Ok(Algorithm::Dijkstra),
            "bellman_ford" | "bellman-ford" | "iterative" => Ok(Algorithm::BellmanFord),
            _ => Err(SearchError::UnknownAlgorithm(s.to_string())),
        }
    }

    /// Returns the canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::BellmanFord => "bellman_ford",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request for a route search.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    /// Where the route starts.
    pub origin: Location,

    /// Where the route ends.
    pub destination: Location,

    /// What to minimize.
    pub policy: Policy,

    /// Which solver to run.
    pub algorithm: Algorithm,
}

impl RouteRequest {
    /// Create a new request using the default algorithm.
    pub fn new(origin: Location, destination: Location, policy: Policy) -> Self {
        Self {
            origin,
            destination,
            policy,
            algorithm: Algorithm::default(),
        }
    }

    /// Use a specific algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// Route planner over a fixed graph.
///
/// Holds no per-query state: every call allocates its own distance and
/// predecessor structures, so repeated calls with the same request return
/// identical results.
pub struct Planner<'a> {
    graph: &'a Graph,
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(graph: &'a Graph, config: &'a PlannerConfig) -> Self {
        Self { graph, config }
    }

    /// The graph this planner searches.
    pub fn graph(&self) -> &'a Graph {
        self.graph
    }

    /// The per-edge weight function for a policy under this configuration.
    pub fn edge_weight(&self, policy: Policy) -> EdgeWeight {
        EdgeWeight::new(policy, self.config)
    }

    /// Run a solver and return the full shortest-path tree.
    ///
    /// With the priority solver and a destination, the search stops early
    /// and only the destination's distance is final.
    pub fn shortest_paths(
        &self,
        origin: &Location,
        destination: Option<&Location>,
        policy: Policy,
        algorithm: Algorithm,
    ) -> Result<ShortestPathTree<'a>, SearchError> {
        let weight = self.edge_weight(policy);
        match algorithm {
            Algorithm::Dijkstra => dijkstra::shortest_paths(self.graph, origin, destination, &weight),
            Algorithm::BellmanFord => bellman_ford::shortest_paths(self.graph, origin, &weight),
        }
    }

    /// Rebuild a route from a tree's node-only predecessors, resolving
    /// parallel edges after the fact with the configured tolerance.
    pub fn resolve_route(
        &self,
        tree: &ShortestPathTree<'_>,
        destination: &Location,
        policy: Policy,
    ) -> Option<RouteResult> {
        reconstruct::resolve_route(tree, destination, &policy, self.config.tolerance)
    }

    /// Find the optimal route for a request.
    ///
    /// Returns `Ok(None)` when the destination cannot be reached, and also
    /// when the solver state turns out to be inconsistent (logged as a
    /// warning, since it should never happen).
    pub fn solve(&self, request: &RouteRequest) -> Result<Option<RouteResult>, SearchError> {
        if !self.graph.contains(&request.destination) {
            return Err(SearchError::UnknownLocation(request.destination.clone()));
        }

        let tree = self.shortest_paths(
            &request.origin,
            Some(&request.destination),
            request.policy,
            request.algorithm,
        )?;

        let Some(distance) = tree
            .distance(&request.destination)
            .filter(|d| d.is_finite())
        else {
            debug!(
                origin = %request.origin,
                destination = %request.destination,
                policy = %request.policy,
                "destination unreachable"
            );
            return Ok(None);
        };

        let Some((path, edge_ids)) = tree.route_to(&request.destination) else {
            warn!(
                destination = %request.destination,
                "reached destination has a broken predecessor chain"
            );
            return Ok(None);
        };

        let mut segments = Vec::with_capacity(edge_ids.len());
        for id in edge_ids {
            let Some(edge) = self.graph.edge(id) else {
                warn!(edge = id.0, "predecessor chain references a missing edge");
                return Ok(None);
            };
            segments.push((id, edge));
        }

        let route = match RouteResult::new(path, &segments, request.policy.label()) {
            Ok(route) => route,
            Err(e) => {
                warn!(error = %e, "predecessor chain does not form a route");
                return Ok(None);
            }
        };

        if let Some(dimension) = request.policy.dimension() {
            let summed = route.totals().value(dimension);
            if (summed - distance).abs() > self.config.tolerance {
                warn!(summed, distance, "route totals disagree with solver distance");
            }
        }

        debug!(
            origin = %request.origin,
            destination = %request.destination,
            algorithm = %request.algorithm,
            policy = %request.policy,
            hops = route.hop_count(),
            weight = distance,
            "route found"
        );

        Ok(Some(route))
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
