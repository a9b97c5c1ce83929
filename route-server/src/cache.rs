//! Caching layer for route queries.
//!
//! A network never changes after startup, so a solved query stays valid for
//! the life of the process. The TTL only bounds memory held by rarely
//! repeated queries.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::domain::{Location, RouteResult};
use crate::network::Network;
use crate::planner::{Algorithm, Planner, PlannerConfig, Policy, RouteRequest, SearchError};

/// Policy identity for cache keys.
///
/// Combined weights are compared bit for bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PolicyKey {
    selector: &'static str,
    weights: Option<(u64, u64)>,
}

impl From<Policy> for PolicyKey {
    fn from(policy: Policy) -> Self {
        let weights = match policy {
            Policy::Combined(w) => Some((w.time().to_bits(), w.cost().to_bits())),
            _ => None,
        };
        Self {
            selector: policy.selector(),
            weights,
        }
    }
}

/// Cache key for routes: (origin, destination, algorithm, policy).
pub type RouteKey = (Location, Location, Algorithm, PolicyKey);

/// Cached route outcome; `None` means the destination is unreachable.
pub type RouteEntry = Arc<Option<RouteResult>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(600),
            max_capacity: 1000,
        }
    }
}

/// Cache of solved route queries.
pub struct RouteCache {
    routes: MokaCache<RouteKey, RouteEntry>,
}

impl RouteCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { routes }
    }

    /// Build the cache key for a request.
    pub fn key(request: &RouteRequest) -> RouteKey {
        (
            request.origin.clone(),
            request.destination.clone(),
            request.algorithm,
            PolicyKey::from(request.policy),
        )
    }

    /// Get a cached route entry.
    pub async fn get(&self, key: &RouteKey) -> Option<RouteEntry> {
        self.routes.get(key).await
    }

    /// Insert a route entry into the cache.
    pub async fn insert(&self, key: RouteKey, entry: RouteEntry) {
        self.routes.insert(key, entry).await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}

/// Route planner with caching.
///
/// Wraps a network and its planner configuration. Only successful outcomes
/// are cached; errors are recomputed on every request.
pub struct CachedPlanner {
    network: Arc<Network>,
    config: PlannerConfig,
    cache: RouteCache,
}

impl CachedPlanner {
    /// Create a new cached planner.
    pub fn new(network: Arc<Network>, config: PlannerConfig, cache_config: &CacheConfig) -> Self {
        Self {
            network,
            config,
            cache: RouteCache::new(cache_config),
        }
    }

    /// Solve a request, using the cache if available.
    pub async fn solve(&self, request: &RouteRequest) -> Result<RouteEntry, SearchError> {
        let key = RouteCache::key(request);

        if let Some(cached) = self.cache.get(&key).await {
            debug!(
                origin = %request.origin,
                destination = %request.destination,
                policy = %request.policy,
                "route cache hit"
            );
            return Ok(cached);
        }

        let route = Planner::new(self.network.graph(), &self.config).solve(request)?;
        let entry = Arc::new(route);

        self.cache.insert(key, entry.clone()).await;

        Ok(entry)
    }

    /// The network being searched.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// The planner configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}
