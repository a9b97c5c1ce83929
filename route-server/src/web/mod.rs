//! Web layer for the route planner.
//!
//! Provides HTTP JSON endpoints for inspecting the network and solving
//! routes.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
