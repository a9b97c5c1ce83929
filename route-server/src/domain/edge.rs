//! Directed edges and their cost dimensions.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Location, TransportMode};

/// Index of an edge within a graph's edge list.
///
/// Parallel edges share endpoints, so the index is what identifies the
/// specific transport option a route used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub usize);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for EdgeId {
    fn from(value: usize) -> Self {
        EdgeId(value)
    }
}

/// One of the independent cost dimensions carried by every edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Travel time in minutes.
    Time,
    /// Monetary cost.
    Cost,
    /// Distance in kilometres.
    Distance,
}

impl Dimension {
    /// Returns the lowercase name of the dimension.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Time => "time",
            Dimension::Cost => "cost",
            Dimension::Distance => "distance",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed transport option between two locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Origin location
    pub from: Location,
    /// Destination location
    pub to: Location,
    /// How the edge is travelled
    pub mode: TransportMode,
    /// Travel time in minutes
    pub time: f64,
    /// Monetary cost
    pub cost: f64,
    /// Distance; tables that do not track it leave it at zero
    #[serde(default)]
    pub distance: f64,
}

impl Edge {
    /// Creates a new edge.
    pub fn new(
        from: Location,
        to: Location,
        mode: TransportMode,
        time: f64,
        cost: f64,
        distance: f64,
    ) -> Self {
        Self {
            from,
            to,
            mode,
            time,
            cost,
            distance,
        }
    }

    /// Returns the value of one cost dimension.
    pub fn value(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Time => self.time,
            Dimension::Cost => self.cost,
            Dimension::Distance => self.distance,
        }
    }

    /// Returns true if both endpoints match.
    pub fn connects(&self, from: &Location, to: &Location) -> bool {
        &self.from == from && &self.to == to
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(s: &str) -> Location {
        Location::parse(s).unwrap()
    }

    fn taxi() -> Edge {
        Edge::new(
            loc("Tambaram"),
            loc("Anna Nagar"),
            TransportMode::Taxi,
            35.0,
            775.0,
            28.0,
        )
    }

    #[test]
    fn value_per_dimension() {
        let edge = taxi();
        assert_eq!(edge.value(Dimension::Time), 35.0);
        assert_eq!(edge.value(Dimension::Cost), 775.0);
        assert_eq!(edge.value(Dimension::Distance), 28.0);
    }

    #[test]
    fn connects_is_directed() {
        let edge = taxi();
        assert!(edge.connects(&loc("Tambaram"), &loc("Anna Nagar")));
        assert!(!edge.connects(&loc("Anna Nagar"), &loc("Tambaram")));
    }

    #[test]
    fn display() {
        assert_eq!(taxi().to_string(), "Tambaram -> Anna Nagar (taxi)");
    }

    #[test]
    fn deserialize_without_distance() {
        let json = r#"{"from":"Warehouse A","to":"Hub B","mode":"Bike","time":30,"cost":5}"#;
        let edge: Edge = serde_json::from_str(json).unwrap();

        assert_eq!(edge.mode, TransportMode::Bike);
        assert_eq!(edge.time, 30.0);
        assert_eq!(edge.cost, 5.0);
        assert_eq!(edge.distance, 0.0);
    }

    #[test]
    fn dimension_serde() {
        assert_eq!(serde_json::to_string(&Dimension::Time).unwrap(), "\"time\"");
        let dim: Dimension = serde_json::from_str("\"distance\"").unwrap();
        assert_eq!(dim, Dimension::Distance);
    }
}
