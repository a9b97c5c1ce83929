//! Priority-relaxation solver.
//!
//! Dijkstra's algorithm with a linear scan for the closest unvisited node.
//! Among equally close nodes the one earliest in `Graph::nodes()` is
//! settled first.

use tracing::debug;

use crate::domain::{EdgeId, Graph, Location};

use super::policy::EdgeWeight;
use super::search::SearchError;
use super::tree::ShortestPathTree;

/// Compute shortest paths from `origin`.
///
/// When `destination` is given, the search stops as soon as it is settled;
/// distances to nodes settled later are then upper bounds only.
///
/// Every policy weight must be non-negative; a negative one is rejected
/// before any relaxation happens.
pub fn shortest_paths<'g>(
    graph: &'g Graph,
    origin: &Location,
    destination: Option<&Location>,
    weight: &EdgeWeight,
) -> Result<ShortestPathTree<'g>, SearchError> {
    let origin_idx = graph
        .node_index(origin)
        .ok_or_else(|| SearchError::UnknownLocation(origin.clone()))?;
    let destination_idx = match destination {
        Some(dest) => Some(
            graph
                .node_index(dest)
                .ok_or_else(|| SearchError::UnknownLocation(dest.clone()))?,
        ),
        None => None,
    };

    // Every edge is checked, reachable or not.
    let weights: Vec<f64> = graph.edges().iter().map(|e| weight.weigh(e)).collect();
    if let Some(i) = weights.iter().position(|w| *w < 0.0) {
        let edge = &graph.edges()[i];
        return Err(SearchError::NegativeWeight {
            edge: EdgeId(i),
            from: edge.from.clone(),
            to: edge.to.clone(),
        });
    }

    let mut tree = ShortestPathTree::new(graph, origin_idx);
    let mut visited = vec![false; graph.node_count()];
    let mut unvisited: Vec<usize> = (0..graph.node_count()).collect();
    let mut settled = 0;

    while !unvisited.is_empty() {
        // Strict `<` keeps the first node encountered on ties.
        let mut closest: Option<(usize, f64)> = None;
        for (pos, &node) in unvisited.iter().enumerate() {
            let dist = tree.distance_at(node);
            if dist.is_finite() && closest.is_none_or(|(_, best)| dist < best) {
                closest = Some((pos, dist));
            }
        }
        let Some((pos, _)) = closest else {
            break;
        };

        let current = unvisited.remove(pos);
        visited[current] = true;
        settled += 1;

        if Some(current) == destination_idx {
            break;
        }

        for &edge_id in graph.outgoing_ids(current) {
            let edge = &graph.edges()[edge_id.0];
            let Some(to) = graph.node_index(&edge.to) else {
                continue;
            };
            if visited[to] {
                continue;
            }
            tree.relax(edge_id, current, to, weights[edge_id.0]);
        }
    }

    debug!(
        origin = %origin,
        policy = %weight.policy(),
        settled,
        nodes = graph.node_count(),
        "dijkstra finished"
    );

    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Edge, TransportMode};
    use crate::planner::{PlannerConfig, Policy};

    fn loc(s: &str) -> Location {
        Location::parse(s).unwrap()
    }

    fn edge(from: &str, to: &str, time: f64, cost: f64) -> Edge {
        Edge::new(loc(from), loc(to), TransportMode::Bus, time, cost, 0.0)
    }

    fn weight(policy: Policy) -> EdgeWeight {
        EdgeWeight::new(policy, &PlannerConfig::default())
    }

    #[test]
    fn finds_cheaper_indirect_path() {
        let graph = Graph::new(vec![
            edge("A", "C", 10.0, 0.0),
            edge("A", "B", 3.0, 0.0),
            edge("B", "C", 4.0, 0.0),
        ])
        .unwrap();

        let tree = shortest_paths(&graph, &loc("A"), None, &weight(Policy::Time)).unwrap();

        assert_eq!(tree.distance(&loc("C")), Some(7.0));
        assert_eq!(tree.predecessor(&loc("C")), Some((&loc("B"), EdgeId(2))));
    }

    #[test]
    fn equal_cost_keeps_first_found() {
        // Both A->B->D and A->C->D cost 2; B is settled first (earlier in node order)
        let graph = Graph::new(vec![
            edge("A", "B", 1.0, 0.0),
            edge("A", "C", 1.0, 0.0),
            edge("B", "D", 1.0, 0.0),
            edge("C", "D", 1.0, 0.0),
        ])
        .unwrap();

        let tree = shortest_paths(&graph, &loc("A"), None, &weight(Policy::Time)).unwrap();

        assert_eq!(tree.distance(&loc("D")), Some(2.0));
        assert_eq!(tree.predecessor(&loc("D")), Some((&loc("B"), EdgeId(2))));
    }

    #[test]
    fn unreachable_stays_infinite() {
        let graph = Graph::new(vec![edge("A", "B", 1.0, 0.0), edge("C", "D", 1.0, 0.0)]).unwrap();

        let tree = shortest_paths(&graph, &loc("A"), None, &weight(Policy::Time)).unwrap();

        assert!(tree.is_reachable(&loc("B")));
        assert!(!tree.is_reachable(&loc("D")));
        assert!(!tree.is_reachable(&loc("C")));
    }

    #[test]
    fn early_exit_at_destination() {
        // C is only reached by relaxing from B, which is settled after the destination
        let graph = Graph::new(vec![
            edge("A", "D", 1.0, 0.0),
            edge("A", "B", 5.0, 0.0),
            edge("B", "C", 1.0, 0.0),
        ])
        .unwrap();

        let tree =
            shortest_paths(&graph, &loc("A"), Some(&loc("D")), &weight(Policy::Time)).unwrap();

        assert_eq!(tree.distance(&loc("D")), Some(1.0));
        assert!(!tree.is_reachable(&loc("C")));
    }

    #[test]
    fn unknown_origin() {
        let graph = Graph::new(vec![edge("A", "B", 1.0, 0.0)]).unwrap();
        let err = shortest_paths(&graph, &loc("Z"), None, &weight(Policy::Time)).unwrap_err();
        assert_eq!(err, SearchError::UnknownLocation(loc("Z")));

        let err = shortest_paths(&graph, &loc("A"), Some(&loc("Y")), &weight(Policy::Time))
            .unwrap_err();
        assert_eq!(err, SearchError::UnknownLocation(loc("Y")));
    }

    #[test]
    fn negative_weight_rejected() {
        let graph = Graph::new(vec![edge("A", "B", 1.0, 0.0), edge("B", "A", -3.0, 0.0)]).unwrap();

        let err = shortest_paths(&graph, &loc("A"), None, &weight(Policy::Time)).unwrap_err();
        assert_eq!(
            err,
            SearchError::NegativeWeight {
                edge: EdgeId(1),
                from: loc("B"),
                to: loc("A"),
            }
        );

        // The same graph is fine when the policy ignores the negative field
        assert!(shortest_paths(&graph, &loc("A"), None, &weight(Policy::Cost)).is_ok());
    }
}
