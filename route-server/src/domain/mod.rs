//! Domain types for the route engine.
//!
//! This module contains the validated network model: locations, transport
//! modes, edges and the immutable graph built from them. Types enforce their
//! invariants at construction time, so the solvers can trust their inputs.

mod edge;
mod error;
mod graph;
mod location;
mod mode;
mod route;

pub use edge::{Dimension, Edge, EdgeId};
pub use error::DomainError;
pub use graph::Graph;
pub use location::{InvalidLocation, Location};
pub use mode::{InvalidTransportMode, TransportMode};
pub use route::{RouteResult, Totals};
