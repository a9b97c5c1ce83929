//! Built-in network tables.

use crate::domain::{DomainError, Location, TransportMode};
use crate::planner::Normalization;

use super::{GraphBuilder, Network, NetworkError};

fn location(name: &str) -> Result<Location, NetworkError> {
    Ok(Location::parse(name).map_err(DomainError::from)?)
}

/// Names accepted by [`builtin`].
pub const BUILTIN_NETWORKS: [&str; 3] = ["chennai", "chennai_transfers", "delivery"];

/// Look up a built-in network by name.
pub fn builtin(name: &str) -> Result<Network, NetworkError> {
    match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "chennai" => chennai(),
        "chennai_transfers" => chennai_transfers(),
        "delivery" => delivery(),
        _ => Err(NetworkError::UnknownNetwork(name.to_string())),
    }
}

/// The multi-hop Chennai legs, shared by both Chennai tables.
fn chennai_transfer_legs(builder: GraphBuilder) -> GraphBuilder {
    use TransportMode::*;

    builder
        .edge("Tambaram", "St. Thomas Mount", Train, 25.0, 30.0, 15.0)
        .edge("St. Thomas Mount", "Anna Nagar East", Metro, 35.0, 40.0, 12.0)
        .edge("Anna Nagar East", "Anna Nagar", Walk, 5.0, 0.0, 1.0)
        .edge("Tambaram", "Chennai Egmore", Train, 35.0, 35.0, 20.0)
        .edge("Chennai Egmore", "Anna Nagar East", Metro, 40.0, 40.0, 12.0)
        .edge("Tambaram", "Airport Metro Station", Bus, 30.0, 20.0, 18.0)
        .edge("Airport Metro Station", "Alandur", Metro, 20.0, 25.0, 8.0)
        .edge("Alandur", "Anna Nagar", Metro, 25.0, 25.0, 10.0)
}

/// Chennai commuter comparison network, Tambaram to Anna Nagar.
///
/// Includes the direct taxi, self-drive and bus options alongside the
/// train, metro and walking transfers. Normalization uses the fixed
/// 120 minute / 775 currency-unit maxima.
pub fn chennai() -> Result<Network, NetworkError> {
    let builder = GraphBuilder::new()
        // Direct door-to-door options
        .edge("Tambaram", "Anna Nagar", TransportMode::Taxi, 35.0, 775.0, 28.0)
        .edge("Tambaram", "Anna Nagar", TransportMode::SelfDrive, 40.0, 325.0, 28.0);

    let graph = chennai_transfer_legs(builder)
        .edge("Tambaram", "Anna Nagar", TransportMode::Bus, 120.0, 35.0, 28.0)
        .build()?;

    Network::new(
        graph,
        location("Tambaram")?,
        location("Anna Nagar")?,
        Normalization::default(),
    )
}

/// The Chennai network without its direct Tambaram to Anna Nagar edges.
pub fn chennai_transfers() -> Result<Network, NetworkError> {
    let graph = chennai_transfer_legs(GraphBuilder::new()).build()?;

    Network::new(
        graph,
        location("Tambaram")?,
        location("Anna Nagar")?,
        Normalization::default(),
    )
}

/// Last-mile delivery network, Warehouse A to Customer D.
///
/// Distances are not recorded. Normalization maxima are taken from the
/// edges themselves.
pub fn delivery() -> Result<Network, NetworkError> {
    use TransportMode::*;

    let graph = GraphBuilder::new()
        .edge("Warehouse A", "Hub B", Bike, 30.0, 5.0, 0.0)
        .edge("Warehouse A", "Hub C", Van, 45.0, 8.0, 0.0)
        .edge("Hub B", "Hub D", Bike, 20.0, 3.0, 0.0)
        .edge("Hub B", "Hub C", Van, 15.0, 2.0, 0.0)
        .edge("Hub C", "Hub D", Van, 30.0, 6.0, 0.0)
        .edge("Hub C", "Hub E", Drone, 10.0, 4.0, 0.0)
        .edge("Hub E", "Hub D", Drone, 10.0, 4.0, 0.0)
        .edge("Hub D", "Customer D", Van, 15.0, 2.0, 0.0)
        .edge("Hub E", "Customer D", Drone, 15.0, 3.0, 0.0)
        .build()?;

    let normalization = Normalization::from_graph(&graph);

    Network::new(
        graph,
        location("Warehouse A")?,
        location("Customer D")?,
        normalization,
    )
}
