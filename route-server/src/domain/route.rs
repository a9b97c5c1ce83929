//! Route result types.
//!
//! A `RouteResult` is what the planner hands to rendering layers: the
//! ordered locations, the concrete edge taken for each segment, and the
//! totals summed over those edges.

use std::ops::AddAssign;

use super::{Dimension, DomainError, Edge, EdgeId, Location, TransportMode};

/// Per-dimension totals of a route.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub time: f64,
    pub cost: f64,
    pub distance: f64,
}

impl Totals {
    /// Totals of a single edge.
    pub fn of(edge: &Edge) -> Self {
        Self {
            time: edge.time,
            cost: edge.cost,
            distance: edge.distance,
        }
    }

    /// Total of one dimension.
    pub fn value(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Time => self.time,
            Dimension::Cost => self.cost,
            Dimension::Distance => self.distance,
        }
    }
}

impl AddAssign for Totals {
    fn add_assign(&mut self, rhs: Self) {
        self.time += rhs.time;
        self.cost += rhs.cost;
        self.distance += rhs.distance;
    }
}

/// An optimal route from origin to destination.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    path: Vec<Location>,
    edges: Vec<EdgeId>,
    modes: Vec<TransportMode>,
    totals: Totals,
    policy_label: String,
}

impl RouteResult {
    /// Creates a route from a location path and the edge used for each
    /// consecutive pair.
    ///
    /// Fails unless there is exactly one edge per segment and each edge
    /// connects its segment's endpoints.
    pub fn new(
        path: Vec<Location>,
        segments: &[(EdgeId, &Edge)],
        policy_label: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if path.is_empty() {
            return Err(DomainError::InvalidRoute("path must not be empty"));
        }
        if segments.len() + 1 != path.len() {
            return Err(DomainError::InvalidRoute(
                "route needs exactly one edge per segment",
            ));
        }

        let mut totals = Totals::default();
        let mut modes = Vec::with_capacity(segments.len());
        let mut edges = Vec::with_capacity(segments.len());

        for (pair, (id, edge)) in path.windows(2).zip(segments) {
            if !edge.connects(&pair[0], &pair[1]) {
                return Err(DomainError::InvalidRoute(
                    "edge does not connect its segment",
                ));
            }
            totals += Totals::of(edge);
            modes.push(edge.mode);
            edges.push(*id);
        }

        Ok(Self {
            path,
            edges,
            modes,
            totals,
            policy_label: policy_label.into(),
        })
    }

    /// Returns the ordered locations, origin and destination included.
    pub fn path(&self) -> &[Location] {
        &self.path
    }

    /// Returns the edge taken for each segment.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Returns the transport mode of each segment.
    pub fn modes(&self) -> &[TransportMode] {
        &self.modes
    }

    /// Returns the totals summed over the edges taken.
    pub fn totals(&self) -> Totals {
        self.totals
    }

    /// Returns the label of the policy that produced this route.
    pub fn policy_label(&self) -> &str {
        &self.policy_label
    }

    /// Returns the first location.
    pub fn origin(&self) -> &Location {
        &self.path[0]
    }

    /// Returns the last location.
    pub fn destination(&self) -> &Location {
        &self.path[self.path.len() - 1]
    }

    /// Returns the number of segments.
    pub fn hop_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if origin and destination are the same location.
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(s: &str) -> Location {
        Location::parse(s).unwrap()
    }

    fn edge(from: &str, to: &str, mode: TransportMode, t: f64, c: f64, d: f64) -> Edge {
        Edge::new(loc(from), loc(to), mode, t, c, d)
    }

    #[test]
    fn totals_and_modes() {
        let a = edge("Tambaram", "St. Thomas Mount", TransportMode::Train, 25.0, 30.0, 15.0);
        let b = edge("St. Thomas Mount", "Anna Nagar East", TransportMode::Metro, 35.0, 40.0, 12.0);
        let path = vec![loc("Tambaram"), loc("St. Thomas Mount"), loc("Anna Nagar East")];

        let route = RouteResult::new(path, &[(EdgeId(2), &a), (EdgeId(3), &b)], "Time Only").unwrap();

        assert_eq!(route.modes(), &[TransportMode::Train, TransportMode::Metro]);
        assert_eq!(route.edges(), &[EdgeId(2), EdgeId(3)]);
        assert_eq!(
            route.totals(),
            Totals {
                time: 60.0,
                cost: 70.0,
                distance: 27.0
            }
        );
        assert_eq!(route.totals().value(Dimension::Cost), 70.0);
        assert_eq!(route.policy_label(), "Time Only");
        assert_eq!(route.origin(), &loc("Tambaram"));
        assert_eq!(route.destination(), &loc("Anna Nagar East"));
        assert_eq!(route.hop_count(), 2);
        assert!(!route.is_trivial());
    }

    #[test]
    fn trivial_route() {
        let route = RouteResult::new(vec![loc("Hub B")], &[], "Cost Only").unwrap();
        assert!(route.is_trivial());
        assert_eq!(route.origin(), route.destination());
        assert_eq!(route.totals(), Totals::default());
    }

    #[test]
    fn reject_empty_path() {
        let err = RouteResult::new(vec![], &[], "Time Only").unwrap_err();
        assert_eq!(err, DomainError::InvalidRoute("path must not be empty"));
    }

    #[test]
    fn reject_segment_count_mismatch() {
        let a = edge("A", "B", TransportMode::Van, 1.0, 1.0, 0.0);
        let err = RouteResult::new(vec![loc("A")], &[(EdgeId(0), &a)], "Time Only").unwrap_err();
        assert!(matches!(err, DomainError::InvalidRoute(_)));
    }

    #[test]
    fn reject_disconnected_edge() {
        let a = edge("A", "C", TransportMode::Van, 1.0, 1.0, 0.0);
        let err = RouteResult::new(vec![loc("A"), loc("B")], &[(EdgeId(0), &a)], "Time Only")
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidRoute("edge does not connect its segment")
        );
    }
}
