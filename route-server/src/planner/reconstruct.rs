//! Path reconstruction from node-only predecessor maps.
//!
//! The planner records the relaxing edge for every node, so it never needs
//! this module to build its own results. It exists for callers that hold
//! only a `PredecessorMap` and need to recover which of several parallel
//! edges each segment used.

use tracing::{debug, warn};

use crate::domain::{Edge, EdgeId, Graph, Location, RouteResult};

use super::policy::Policy;
use super::tree::{PredecessorMap, ShortestPathTree};

/// Walk predecessors from `destination` back to the map's origin.
///
/// Returns the locations in travel order, origin and destination included.
/// Returns an empty path when the chain ends (or loops) before reaching the
/// origin; callers must treat that as "no route".
pub fn reconstruct_path(predecessors: &PredecessorMap, destination: &Location) -> Vec<Location> {
    let origin = predecessors.origin();
    let mut path = vec![destination.clone()];
    let mut current = destination;

    // Each step visits a distinct location unless the chain loops.
    for _ in 0..=predecessors.len() {
        if current == origin {
            path.reverse();
            return path;
        }
        match predecessors.get(current) {
            Some(prev) => {
                path.push(prev.clone());
                current = prev;
            }
            None => break,
        }
    }

    debug!(
        origin = %origin,
        destination = %destination,
        "predecessor chain does not reach origin"
    );
    Vec::new()
}

/// Pick the concrete edge a shortest-path tree used between two locations.
///
/// For single-dimension policies the first parallel edge whose value
/// bridges the recorded distances within `tolerance` wins, falling back to
/// the edge with the smallest value in that dimension. Recorded distances
/// mix dimensions under composite policies, so those always take the
/// fastest parallel edge.
pub fn resolve_segment<'g>(
    graph: &'g Graph,
    tree: &ShortestPathTree<'_>,
    from: &Location,
    to: &Location,
    policy: &Policy,
    tolerance: f64,
) -> Option<(EdgeId, &'g Edge)> {
    let candidates = graph.edges_between(from, to);

    let Some(dimension) = policy.dimension() else {
        return candidates
            .into_iter()
            .min_by(|(_, a), (_, b)| a.time.total_cmp(&b.time));
    };

    let dist_from = tree.distance(from).unwrap_or(f64::INFINITY);
    let dist_to = tree.distance(to).unwrap_or(f64::INFINITY);

    candidates
        .iter()
        .find(|(_, e)| (dist_from + e.value(dimension) - dist_to).abs() < tolerance)
        .copied()
        .or_else(|| {
            candidates
                .into_iter()
                .min_by(|(_, a), (_, b)| a.value(dimension).total_cmp(&b.value(dimension)))
        })
}

/// Build a route to `destination` from the tree's node-only predecessors,
/// resolving each segment's edge after the fact.
///
/// Returns `None` if the destination is unreached, the chain is broken, or
/// some segment has no connecting edge.
pub fn resolve_route(
    tree: &ShortestPathTree<'_>,
    destination: &Location,
    policy: &Policy,
    tolerance: f64,
) -> Option<RouteResult> {
    if !tree.is_reachable(destination) {
        return None;
    }

    let path = reconstruct_path(&tree.predecessor_map(), destination);
    if path.is_empty() {
        warn!(destination = %destination, "reached destination has a broken predecessor chain");
        return None;
    }

    let graph = tree.graph();
    let mut segments = Vec::with_capacity(path.len().saturating_sub(1));
    for pair in path.windows(2) {
        match resolve_segment(graph, tree, &pair[0], &pair[1], policy, tolerance) {
            Some(segment) => segments.push(segment),
            None => {
                warn!(from = %pair[0], to = %pair[1], "no edge connects consecutive path locations");
                return None;
            }
        }
    }

    RouteResult::new(path, &segments, policy.label()).ok()
}
