//! Route planner with selectable optimization policies.
//!
//! This module answers: "what is the optimal route from this origin to this
//! destination when minimizing time, cost, distance, or a blend of time and
//! cost?"
//!
//! Two solvers share the same policy layer and result type. The priority
//! solver (Dijkstra) settles the closest unvisited location first and stops
//! at the destination. The iterative solver (Bellman-Ford) relaxes every
//! edge a fixed number of times and then checks for negative cycles, which
//! it reports as an error rather than a route.

pub mod bellman_ford;
mod config;
pub mod dijkstra;
mod policy;
mod reconstruct;
mod search;
mod tree;

pub use config::PlannerConfig;
pub use policy::{EdgeWeight, Normalization, Policy, PolicyError, Weights};
pub use reconstruct::{reconstruct_path, resolve_route, resolve_segment};
pub use search::{Algorithm, Planner, RouteRequest, SearchError};
pub use tree::{Predecessor, PredecessorMap, ShortestPathTree};
