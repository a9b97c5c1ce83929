//! Shortest-path trees produced by the solvers.
//!
//! Each solver fills a fresh `ShortestPathTree` per query: the best known
//! cumulative weight of every node and, for reached nodes other than the
//! origin, the node and the specific edge it was last relaxed through.

use std::collections::HashMap;

use tracing::trace;

use crate::domain::{EdgeId, Graph, Location};

/// How a node was reached on its best known path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Predecessor {
    /// Index of the previous node in `Graph::nodes()`.
    pub node: usize,
    /// The edge relaxed from that node.
    pub edge: EdgeId,
}

/// Distances and predecessors from a single origin.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<'g> {
    graph: &'g Graph,
    origin: usize,
    distances: Vec<f64>,
    predecessors: Vec<Option<Predecessor>>,
}

impl<'g> ShortestPathTree<'g> {
    /// Start a tree with the origin at zero and every other node unreached.
    pub(crate) fn new(graph: &'g Graph, origin: usize) -> Self {
        let mut distances = vec![f64::INFINITY; graph.node_count()];
        distances[origin] = 0.0;

        Self {
            graph,
            origin,
            distances,
            predecessors: vec![None; graph.node_count()],
        }
    }

    /// Relax one edge. Only a strict improvement overwrites, so the first
    /// path found at a given weight is kept.
    pub(crate) fn relax(&mut self, edge: EdgeId, from: usize, to: usize, weight: f64) -> bool {
        if !self.improves(from, to, weight) {
            return false;
        }
        let candidate = self.distances[from] + weight;
        trace!(
            edge = edge.0,
            from = %self.graph.nodes()[from],
            to = %self.graph.nodes()[to],
            candidate,
            "relaxed"
        );
        self.distances[to] = candidate;
        self.predecessors[to] = Some(Predecessor { node: from, edge });
        true
    }

    /// Returns true if going through `from` with `weight` would improve `to`.
    pub(crate) fn improves(&self, from: usize, to: usize, weight: f64) -> bool {
        let base = self.distances[from];
        base.is_finite() && base + weight < self.distances[to]
    }

    pub(crate) fn distance_at(&self, idx: usize) -> f64 {
        self.distances[idx]
    }

    /// The graph the tree was computed over.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// The origin location.
    pub fn origin(&self) -> &'g Location {
        &self.graph.nodes()[self.origin]
    }

    /// Best known weight to a location.
    ///
    /// `None` if the location is not in the graph; infinite if unreached.
    pub fn distance(&self, location: &Location) -> Option<f64> {
        self.graph
            .node_index(location)
            .map(|idx| self.distances[idx])
    }

    /// Returns true if the location was reached from the origin.
    pub fn is_reachable(&self, location: &Location) -> bool {
        self.distance(location).is_some_and(f64::is_finite)
    }

    /// Previous location and edge on the best path to `location`.
    pub fn predecessor(&self, location: &Location) -> Option<(&'g Location, EdgeId)> {
        let idx = self.graph.node_index(location)?;
        self.predecessors[idx].map(|p| (&self.graph.nodes()[p.node], p.edge))
    }

    /// Node-only view of the predecessors, keyed by location.
    pub fn predecessor_map(&self) -> PredecessorMap {
        let nodes = self.graph.nodes();
        let entries = nodes
            .iter()
            .zip(&self.predecessors)
            .map(|(node, pred)| (node.clone(), pred.map(|p| nodes[p.node].clone())))
            .collect();

        PredecessorMap {
            origin: self.origin().clone(),
            entries,
        }
    }

    /// Walk the recorded edges back from `destination` to the origin.
    ///
    /// Returns the locations and edges in travel order, or `None` if the
    /// destination is unknown, unreached, or its chain does not lead back
    /// to the origin.
    pub fn route_to(&self, destination: &Location) -> Option<(Vec<Location>, Vec<EdgeId>)> {
        let mut current = self.graph.node_index(destination)?;
        if !self.distances[current].is_finite() {
            return None;
        }

        let nodes = self.graph.nodes();
        let mut path = vec![nodes[current].clone()];
        let mut edges = Vec::new();

        // A chain longer than the node count can only be a loop.
        for _ in 0..self.graph.node_count() {
            if current == self.origin {
                path.reverse();
                edges.reverse();
                return Some((path, edges));
            }
            let pred = self.predecessors[current]?;
            edges.push(pred.edge);
            path.push(nodes[pred.node].clone());
            current = pred.node;
        }

        None
    }
}

/// Predecessor of every location on its best path from an origin.
///
/// This is the node-only form of a shortest-path tree: enough to recover
/// the sequence of locations but not which parallel edge was taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredecessorMap {
    origin: Location,
    entries: HashMap<Location, Option<Location>>,
}

impl PredecessorMap {
    /// Create a map with the origin as its only, predecessor-less entry.
    pub fn new(origin: Location) -> Self {
        let mut entries = HashMap::new();
        entries.insert(origin.clone(), None);
        Self { origin, entries }
    }

    /// Record the predecessor of a location.
    pub fn insert(&mut self, location: Location, predecessor: Option<Location>) {
        self.entries.insert(location, predecessor);
    }

    /// The origin the map was built from.
    pub fn origin(&self) -> &Location {
        &self.origin
    }

    /// Predecessor of a location, if it has one.
    pub fn get(&self, location: &Location) -> Option<&Location> {
        self.entries.get(location).and_then(Option::as_ref)
    }

    /// Number of locations in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
