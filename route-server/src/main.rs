use std::error::Error;
use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use route_server::cache::CacheConfig;
use route_server::network::{Network, NetworkFile, builtin};
use route_server::web::{AppState, create_router};

/// Default listen address.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Load the network named by the environment.
///
/// `ROUTE_NETWORK_FILE` takes precedence over `ROUTE_NETWORK`; with neither
/// set the Chennai network is used.
fn load_network() -> Result<Network, Box<dyn Error>> {
    if let Ok(path) = std::env::var("ROUTE_NETWORK_FILE") {
        return Ok(NetworkFile::load(path)?);
    }
    let name = std::env::var("ROUTE_NETWORK").unwrap_or_else(|_| "chennai".to_string());
    Ok(builtin(&name)?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let network = load_network()?;
    let config = network.config();
    info!(
        origin = %network.origin(),
        destination = %network.destination(),
        locations = network.graph().node_count(),
        edges = network.graph().edge_count(),
        "network loaded"
    );

    let state = AppState::new(network, config, &CacheConfig::default());
    let app = create_router(state);

    let addr: SocketAddr = std::env::var("ROUTE_SERVER_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "route planner listening");
    info!("endpoints: GET /health, GET /network, GET /route");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            // An error here means the signal handler could not be installed;
            // the server then runs until killed.
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("shutting down");
            }
        })
        .await?;

    Ok(())
}
