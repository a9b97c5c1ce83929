//! Immutable route network.
//!
//! A `Graph` is an ordered edge list plus the set of locations derived from
//! the edge endpoints. Node order is the order of first appearance in the
//! edge list, which the solvers rely on for deterministic tie-breaking.

use std::collections::HashMap;

use super::{Dimension, DomainError, Edge, EdgeId, Location};

/// A static, directed, weighted multigraph.
///
/// Parallel edges (same endpoints, different mode or weights) are kept as
/// separate transport options. Nothing can be changed after construction.
#[derive(Debug, Clone)]
pub struct Graph {
    edges: Vec<Edge>,
    nodes: Vec<Location>,
    index: HashMap<Location, usize>,
    /// Outgoing edge ids per node index, in edge-list order.
    outgoing: Vec<Vec<EdgeId>>,
}

impl Graph {
    /// Build a graph from an ordered edge list.
    ///
    /// Every weight must be finite. Negative weights are accepted here so
    /// that the iterative solver can be asked to detect negative cycles;
    /// the priority solver rejects them at query time.
    pub fn new(edges: Vec<Edge>) -> Result<Self, DomainError> {
        if edges.is_empty() {
            return Err(DomainError::EmptyGraph);
        }

        for (i, edge) in edges.iter().enumerate() {
            for dimension in [Dimension::Time, Dimension::Cost, Dimension::Distance] {
                let value = edge.value(dimension);
                if !value.is_finite() {
                    return Err(DomainError::NonFiniteWeight {
                        edge: EdgeId(i),
                        dimension,
                        value,
                    });
                }
            }
        }

        let mut nodes = Vec::new();
        let mut index = HashMap::new();
        for edge in &edges {
            for endpoint in [&edge.from, &edge.to] {
                if !index.contains_key(endpoint) {
                    index.insert(endpoint.clone(), nodes.len());
                    nodes.push(endpoint.clone());
                }
            }
        }

        let mut outgoing = vec![Vec::new(); nodes.len()];
        for (i, edge) in edges.iter().enumerate() {
            outgoing[index[&edge.from]].push(EdgeId(i));
        }

        Ok(Self {
            edges,
            nodes,
            index,
            outgoing,
        })
    }

    /// Returns every edge, in configuration order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the edge with the given id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0)
    }

    /// Returns every location, in order of first appearance.
    pub fn nodes(&self) -> &[Location] {
        &self.nodes
    }

    /// Returns the number of locations.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the location is an endpoint of some edge.
    pub fn contains(&self, location: &Location) -> bool {
        self.index.contains_key(location)
    }

    /// Returns the position of a location in `nodes()`.
    pub fn node_index(&self, location: &Location) -> Option<usize> {
        self.index.get(location).copied()
    }

    /// Returns the edges leaving a location, in configuration order.
    pub fn outgoing(&self, location: &Location) -> Vec<(EdgeId, &Edge)> {
        match self.node_index(location) {
            Some(idx) => self.outgoing[idx]
                .iter()
                .map(|id| (*id, &self.edges[id.0]))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Returns the edge ids leaving the node at `idx`.
    pub(crate) fn outgoing_ids(&self, idx: usize) -> &[EdgeId] {
        &self.outgoing[idx]
    }

    /// Returns all parallel edges from `from` to `to`.
    pub fn edges_between(&self, from: &Location, to: &Location) -> Vec<(EdgeId, &Edge)> {
        let mut between = self.outgoing(from);
        between.retain(|(_, e)| &e.to == to);
        between
    }

    /// Returns the largest value of a dimension over all edges.
    pub fn max_value(&self, dimension: Dimension) -> f64 {
        self.edges
            .iter()
            .map(|e| e.value(dimension))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Returns true if any edge has a negative weight in any dimension.
    pub fn has_negative_weights(&self) -> bool {
        self.edges
            .iter()
            .any(|e| e.time < 0.0 || e.cost < 0.0 || e.distance < 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransportMode;

    fn loc(s: &str) -> Location {
        Location::parse(s).unwrap()
    }

    fn edge(from: &str, to: &str, mode: TransportMode, time: f64, cost: f64) -> Edge {
        Edge::new(loc(from), loc(to), mode, time, cost, 1.0)
    }

    fn sample() -> Graph {
        Graph::new(vec![
            edge("A", "B", TransportMode::Bus, 10.0, 2.0),
            edge("A", "C", TransportMode::Train, 5.0, 4.0),
            edge("A", "B", TransportMode::Taxi, 4.0, 20.0),
            edge("C", "B", TransportMode::Walk, 3.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn empty_graph_rejected() {
        assert_eq!(Graph::new(vec![]).unwrap_err(), DomainError::EmptyGraph);
    }

    #[test]
    fn non_finite_weight_rejected() {
        let err = Graph::new(vec![
            edge("A", "B", TransportMode::Bus, 10.0, 2.0),
            edge("B", "C", TransportMode::Bus, f64::NAN, 2.0),
        ])
        .unwrap_err();

        assert!(matches!(
            err,
            DomainError::NonFiniteWeight {
                edge: EdgeId(1),
                dimension: Dimension::Time,
                ..
            }
        ));
    }

    #[test]
    fn negative_weights_accepted() {
        let graph = Graph::new(vec![edge("A", "B", TransportMode::Bus, -1.0, 2.0)]).unwrap();
        assert!(graph.has_negative_weights());
        assert!(!sample().has_negative_weights());
    }

    #[test]
    fn nodes_in_first_appearance_order() {
        let graph = sample();
        assert_eq!(graph.nodes(), &[loc("A"), loc("B"), loc("C")]);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn node_set_is_union_of_endpoints() {
        let graph = sample();
        for e in graph.edges() {
            assert!(graph.contains(&e.from));
            assert!(graph.contains(&e.to));
        }
        assert!(!graph.contains(&loc("D")));
    }

    #[test]
    fn parallel_edges_preserved() {
        let graph = sample();
        let between = graph.edges_between(&loc("A"), &loc("B"));

        assert_eq!(between.len(), 2);
        assert_eq!(between[0].0, EdgeId(0));
        assert_eq!(between[0].1.mode, TransportMode::Bus);
        assert_eq!(between[1].0, EdgeId(2));
        assert_eq!(between[1].1.mode, TransportMode::Taxi);
    }

    #[test]
    fn outgoing_edges() {
        let graph = sample();
        let ids: Vec<EdgeId> = graph.outgoing(&loc("A")).iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![EdgeId(0), EdgeId(1), EdgeId(2)]);

        assert!(graph.outgoing(&loc("B")).is_empty());
        assert!(graph.outgoing(&loc("Z")).is_empty());
    }

    #[test]
    fn edge_lookup() {
        let graph = sample();
        assert_eq!(graph.edge(EdgeId(3)).unwrap().mode, TransportMode::Walk);
        assert!(graph.edge(EdgeId(4)).is_none());
    }

    #[test]
    fn max_value_per_dimension() {
        let graph = sample();
        assert_eq!(graph.max_value(Dimension::Time), 10.0);
        assert_eq!(graph.max_value(Dimension::Cost), 20.0);
        assert_eq!(graph.max_value(Dimension::Distance), 1.0);
    }
}
