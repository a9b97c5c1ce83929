//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::{CacheConfig, CachedPlanner};
use crate::network::Network;
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// The network is loaded once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    /// Cached route planner over the network
    pub planner: Arc<CachedPlanner>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network, config: PlannerConfig, cache_config: &CacheConfig) -> Self {
        Self {
            planner: Arc::new(CachedPlanner::new(Arc::new(network), config, cache_config)),
        }
    }

    /// The configured network.
    pub fn network(&self) -> &Network {
        self.planner.network()
    }

    /// The planner configuration.
    pub fn config(&self) -> &PlannerConfig {
        self.planner.config()
    }
}
