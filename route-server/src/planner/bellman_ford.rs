//! Iterative-relaxation solver.
//!
//! Bellman-Ford: every edge is relaxed exactly `node_count - 1` times in
//! configuration order, then scanned once more. Any edge that still
//! improves a distance on that last scan lies on, or leads from, a negative
//! cycle reachable from the origin, and the query fails.

use tracing::{debug, warn};

use crate::domain::{EdgeId, Graph, Location};

use super::policy::EdgeWeight;
use super::search::SearchError;
use super::tree::ShortestPathTree;

/// An edge with its endpoints resolved to node indices and its policy weight.
struct Relaxable {
    id: EdgeId,
    from: usize,
    to: usize,
    weight: f64,
}

/// Compute shortest paths from `origin` to every node.
pub fn shortest_paths<'g>(
    graph: &'g Graph,
    origin: &Location,
    weight: &EdgeWeight,
) -> Result<ShortestPathTree<'g>, SearchError> {
    let origin_idx = graph
        .node_index(origin)
        .ok_or_else(|| SearchError::UnknownLocation(origin.clone()))?;

    let relaxables: Vec<Relaxable> = graph
        .edges()
        .iter()
        .enumerate()
        .filter_map(|(i, edge)| {
            Some(Relaxable {
                id: EdgeId(i),
                from: graph.node_index(&edge.from)?,
                to: graph.node_index(&edge.to)?,
                weight: weight.weigh(edge),
            })
        })
        .collect();

    let mut tree = ShortestPathTree::new(graph, origin_idx);
    let passes = graph.node_count().saturating_sub(1);
    let mut updates = 0;

    for _ in 0..passes {
        for r in &relaxables {
            if tree.relax(r.id, r.from, r.to, r.weight) {
                updates += 1;
            }
        }
    }

    if let Some(r) = relaxables
        .iter()
        .find(|r| tree.improves(r.from, r.to, r.weight))
    {
        let edge = &graph.edges()[r.id.0];
        warn!(
            edge = r.id.0,
            from = %edge.from,
            to = %edge.to,
            policy = %weight.policy(),
            "negative cycle detected"
        );
        return Err(SearchError::NegativeCycle {
            edge: r.id,
            from: edge.from.clone(),
            to: edge.to.clone(),
        });
    }

    debug!(
        origin = %origin,
        policy = %weight.policy(),
        passes,
        updates,
        "bellman-ford finished"
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
        Edge::new(loc(from), loc(to), TransportMode::Drone, time, cost, 0.0)
    }

    fn weight(policy: Policy) -> EdgeWeight {
        EdgeWeight::new(policy, &PlannerConfig::default())
    }

    #[test]
    fn relaxes_against_edge_order() {
        // Edges listed destination-first need several passes to settle
        let graph = Graph::new(vec![
            edge("C", "D", 1.0, 0.0),
            edge("B", "C", 1.0, 0.0),
            edge("A", "B", 1.0, 0.0),
        ])
        .unwrap();

        let tree = shortest_paths(&graph, &loc("A"), &weight(Policy::Time)).unwrap();

        assert_eq!(tree.distance(&loc("D")), Some(3.0));
        assert_eq!(tree.predecessor(&loc("D")), Some((&loc("C"), EdgeId(0))));
    }

    #[test]
    fn negative_edge_without_cycle_is_fine() {
        let graph = Graph::new(vec![
            edge("A", "B", 4.0, 0.0),
            edge("A", "C", 1.0, 0.0),
            edge("B", "C", -2.0, 0.0),
        ])
        .unwrap();

        let tree = shortest_paths(&graph, &loc("A"), &weight(Policy::Time)).unwrap();

        assert_eq!(tree.distance(&loc("C")), Some(1.0));
        assert_eq!(tree.distance(&loc("B")), Some(4.0));
    }

    #[test]
    fn negative_edge_improving_path() {
        let graph = Graph::new(vec![
            edge("A", "B", 4.0, 0.0),
            edge("A", "C", 3.0, 0.0),
            edge("B", "C", -2.0, 0.0),
        ])
        .unwrap();

        let tree = shortest_paths(&graph, &loc("A"), &weight(Policy::Time)).unwrap();

        assert_eq!(tree.distance(&loc("C")), Some(2.0));
        assert_eq!(tree.predecessor(&loc("C")), Some((&loc("B"), EdgeId(2))));
    }

    #[test]
    fn negative_cycle_detected() {
        let graph = Graph::new(vec![
            edge("A", "B", 1.0, 0.0),
            edge("B", "C", 1.0, 0.0),
            edge("C", "A", -5.0, 0.0),
        ])
        .unwrap();

        let err = shortest_paths(&graph, &loc("A"), &weight(Policy::Time)).unwrap_err();
        assert!(matches!(err, SearchError::NegativeCycle { .. }));
    }

    #[test]
    fn unreachable_negative_cycle_is_ignored() {
        let graph = Graph::new(vec![
            edge("A", "B", 1.0, 0.0),
            edge("C", "D", 1.0, 0.0),
            edge("D", "C", -5.0, 0.0),
        ])
        .unwrap();

        let tree = shortest_paths(&graph, &loc("A"), &weight(Policy::Time)).unwrap();
        assert_eq!(tree.distance(&loc("B")), Some(1.0));
        assert!(!tree.is_reachable(&loc("C")));
    }

    #[test]
    fn negative_self_loop_detected() {
        let graph = Graph::new(vec![edge("A", "A", -1.0, 0.0)]).unwrap();
        let err = shortest_paths(&graph, &loc("A"), &weight(Policy::Time)).unwrap_err();
        assert_eq!(
            err,
            SearchError::NegativeCycle {
                edge: EdgeId(0),
                from: loc("A"),
                to: loc("A"),
            }
        );
    }

    #[test]
    fn cycle_depends_on_policy() {
        // Negative in time only: cost policy sees no cycle
        let graph = Graph::new(vec![edge("A", "B", 1.0, 1.0), edge("B", "A", -5.0, 1.0)]).unwrap();

        assert!(shortest_paths(&graph, &loc("A"), &weight(Policy::Time)).is_err());
        assert!(shortest_paths(&graph, &loc("A"), &weight(Policy::Cost)).is_ok());
    }

    #[test]
    fn unknown_origin() {
        let graph = Graph::new(vec![edge("A", "B", 1.0, 0.0)]).unwrap();
        let err = shortest_paths(&graph, &loc("Z"), &weight(Policy::Time)).unwrap_err();
        assert_eq!(err, SearchError::UnknownLocation(loc("Z")));
    }
}
