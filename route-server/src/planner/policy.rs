//! Optimization policies.
//!
//! A policy turns an edge into the scalar weight the solvers minimize.
//! Single-dimension policies pass one edge field through unchanged.
//! Composite policies blend time and cost in one of two ways:
//!
//! - `combined`: each dimension is divided by a fixed network maximum and the
//!   normalized values are blended with caller-supplied weights. Without
//!   normalization the dimension with the larger magnitude would dominate.
//! - `combo`: raw time plus raw cost scaled by a fixed factor (0.5 by
//!   default). This gives different numbers from `combined` on the same graph.

use std::fmt;

use tracing::warn;

use crate::domain::{Dimension, Edge, Graph};

use super::config::PlannerConfig;

/// Errors from policy selection and configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PolicyError {
    /// Selector outside the known set
    #[error("unknown optimization policy: {0:?}")]
    UnknownPolicy(String),

    /// Composite policy selected without weights
    #[error("policy {0} requires time and cost weights")]
    MissingWeights(&'static str),

    /// Weight that is negative, non-finite, or all-zero
    #[error("invalid policy weights: {0}")]
    InvalidWeights(&'static str),

    /// Normalization maximum that cannot be divided by
    #[error("invalid normalization: {0}")]
    InvalidNormalization(&'static str),
}

/// Relative importance of time and cost in the `combined` policy.
///
/// Weights conventionally sum to 1, but only non-negativity is enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    time: f64,
    cost: f64,
}

impl Weights {
    /// An even split between time and cost.
    pub const EVEN: Weights = Weights {
        time: 0.5,
        cost: 0.5,
    };

    /// Create weights, validating that both are finite and non-negative
    /// and that at least one is positive.
    pub fn new(time: f64, cost: f64) -> Result<Self, PolicyError> {
        if !time.is_finite() || !cost.is_finite() {
            return Err(PolicyError::InvalidWeights("weights must be finite"));
        }
        if time < 0.0 || cost < 0.0 {
            return Err(PolicyError::InvalidWeights("weights must not be negative"));
        }
        if time == 0.0 && cost == 0.0 {
            return Err(PolicyError::InvalidWeights("weights must not both be zero"));
        }
        if (time + cost - 1.0).abs() > 1e-9 {
            warn!(time, cost, "policy weights do not sum to 1");
        }
        Ok(Self { time, cost })
    }

    /// Weight applied to normalized time.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Weight applied to normalized cost.
    pub fn cost(&self) -> f64 {
        self.cost
    }
}

/// Fixed per-dimension maxima used to normalize the `combined` policy.
///
/// These are configuration constants for a network, not recomputed per
/// query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    max_time: f64,
    max_cost: f64,
}

impl Normalization {
    /// Create normalization maxima; both must be positive and finite.
    pub fn new(max_time: f64, max_cost: f64) -> Result<Self, PolicyError> {
        for max in [max_time, max_cost] {
            if !max.is_finite() || max <= 0.0 {
                return Err(PolicyError::InvalidNormalization(
                    "maxima must be positive and finite",
                ));
            }
        }
        Ok(Self { max_time, max_cost })
    }

    /// Derive maxima from the largest time and cost in a graph.
    ///
    /// Meant to be called once when a network is loaded. A dimension whose
    /// largest value is not positive (a walk-only network has no cost) is
    /// divided by 1 instead.
    pub fn from_graph(graph: &Graph) -> Self {
        let max_or_unit = |dimension| {
            let max = graph.max_value(dimension);
            if max > 0.0 { max } else { 1.0 }
        };
        Self {
            max_time: max_or_unit(Dimension::Time),
            max_cost: max_or_unit(Dimension::Cost),
        }
    }

    pub fn max_time(&self) -> f64 {
        self.max_time
    }

    pub fn max_cost(&self) -> f64 {
        self.max_cost
    }
}

impl Default for Normalization {
    /// Maxima of the Chennai comparator network: the direct bus takes
    /// 120 minutes and the direct taxi costs 775.
    fn default() -> Self {
        Self {
            max_time: 120.0,
            max_cost: 775.0,
        }
    }
}

/// An optimization policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Policy {
    /// Minimize travel time
    Time,
    /// Minimize monetary cost
    Cost,
    /// Minimize distance
    Distance,
    /// Minimize normalized, weighted time and cost
    Combined(Weights),
    /// Minimize raw time plus scaled raw cost
    Combo,
}

impl Policy {
    /// Select a policy by name.
    ///
    /// Weights are required for `combined` (alias `compromise`) and ignored
    /// otherwise. Unknown selectors are an error, never a default.
    pub fn parse(selector: &str, weights: Option<Weights>) -> Result<Self, PolicyError> {
        match selector.trim().to_ascii_lowercase().as_str() {
            "time" => Ok(Policy::Time),
            "cost" => Ok(Policy::Cost),
            "distance" => Ok(Policy::Distance),
            "combined" | "compromise" => weights
                .map(Policy::Combined)
                .ok_or(PolicyError::MissingWeights("combined")),
            "combo" => Ok(Policy::Combo),
            _ => Err(PolicyError::UnknownPolicy(selector.to_string())),
        }
    }

    /// Returns the canonical selector name.
    pub fn selector(&self) -> &'static str {
        match self {
            Policy::Time => "time",
            Policy::Cost => "cost",
            Policy::Distance => "distance",
            Policy::Combined(_) => "combined",
            Policy::Combo => "combo",
        }
    }

    /// Returns the dimension a single-dimension policy minimizes.
    pub fn dimension(&self) -> Option<Dimension> {
        match self {
            Policy::Time => Some(Dimension::Time),
            Policy::Cost => Some(Dimension::Cost),
            Policy::Distance => Some(Dimension::Distance),
            Policy::Combined(_) | Policy::Combo => None,
        }
    }

    /// Returns true for policies that blend dimensions.
    pub fn is_composite(&self) -> bool {
        self.dimension().is_none()
    }

    /// Human-readable label attached to route results.
    pub fn label(&self) -> String {
        match self {
            Policy::Time => "Time Only".to_string(),
            Policy::Cost => "Cost Only".to_string(),
            Policy::Distance => "Distance Only".to_string(),
            Policy::Combined(w) => format!(
                "Time & Cost Compromise ({:.0}/{:.0})",
                w.time * 100.0,
                w.cost * 100.0
            ),
            Policy::Combo => "Time & Cost Combo".to_string(),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

/// Per-edge scalar weight function for one policy.
#[derive(Debug, Clone, Copy)]
pub struct EdgeWeight {
    policy: Policy,
    normalization: Normalization,
    combo_cost_factor: f64,
}

impl EdgeWeight {
    /// Bind a policy to the configuration constants it needs.
    pub fn new(policy: Policy, config: &PlannerConfig) -> Self {
        Self {
            policy,
            normalization: config.normalization,
            combo_cost_factor: config.combo_cost_factor,
        }
    }

    /// The policy this weight function evaluates.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Scalar weight of an edge.
    pub fn weigh(&self, edge: &Edge) -> f64 {
        match self.policy {
            Policy::Time => edge.time,
            Policy::Cost => edge.cost,
            Policy::Distance => edge.distance,
            Policy::Combined(w) => {
                let time = edge.time / self.normalization.max_time;
                let cost = edge.cost / self.normalization.max_cost;
                w.time * time + w.cost * cost
            }
            Policy::Combo => edge.time + edge.cost * self.combo_cost_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Location, TransportMode};

    fn taxi() -> Edge {
        Edge::new(
            Location::parse("Tambaram").unwrap(),
            Location::parse("Anna Nagar").unwrap(),
            TransportMode::Taxi,
            35.0,
            775.0,
            28.0,
        )
    }

    fn weigh(policy: Policy, edge: &Edge) -> f64 {
        EdgeWeight::new(policy, &PlannerConfig::default()).weigh(edge)
    }

    #[test]
    fn parse_single_dimension() {
        assert_eq!(Policy::parse("time", None).unwrap(), Policy::Time);
        assert_eq!(Policy::parse("Cost", None).unwrap(), Policy::Cost);
        assert_eq!(Policy::parse(" distance ", None).unwrap(), Policy::Distance);
        assert_eq!(Policy::parse("combo", None).unwrap(), Policy::Combo);
    }

    #[test]
    fn parse_combined_needs_weights() {
        assert_eq!(
            Policy::parse("combined", None).unwrap_err(),
            PolicyError::MissingWeights("combined")
        );

        let policy = Policy::parse("compromise", Some(Weights::EVEN)).unwrap();
        assert_eq!(policy, Policy::Combined(Weights::EVEN));
    }

    #[test]
    fn parse_unknown_is_error() {
        let err = Policy::parse("fastest", None).unwrap_err();
        assert_eq!(err, PolicyError::UnknownPolicy("fastest".to_string()));
        assert_eq!(err.to_string(), "unknown optimization policy: \"fastest\"");

        assert!(Policy::parse("", Some(Weights::EVEN)).is_err());
    }

    #[test]
    fn weights_validation() {
        assert!(Weights::new(0.7, 0.3).is_ok());
        assert!(Weights::new(1.0, 0.0).is_ok());
        assert!(Weights::new(-0.1, 1.1).is_err());
        assert!(Weights::new(f64::NAN, 0.5).is_err());
        assert!(Weights::new(0.0, 0.0).is_err());
    }

    #[test]
    fn normalization_validation() {
        assert!(Normalization::new(120.0, 775.0).is_ok());
        assert!(Normalization::new(0.0, 775.0).is_err());
        assert!(Normalization::new(120.0, -1.0).is_err());
        assert!(Normalization::new(f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn single_dimension_passthrough() {
        let edge = taxi();
        assert_eq!(weigh(Policy::Time, &edge), 35.0);
        assert_eq!(weigh(Policy::Cost, &edge), 775.0);
        assert_eq!(weigh(Policy::Distance, &edge), 28.0);
    }

    #[test]
    fn combined_is_normalized() {
        let edge = taxi();
        let w = weigh(Policy::Combined(Weights::EVEN), &edge);
        let expected = 0.5 * (35.0 / 120.0) + 0.5 * (775.0 / 775.0);
        assert!((w - expected).abs() < 1e-12);
    }

    #[test]
    fn combined_honours_weights() {
        let edge = taxi();
        let time_only = weigh(Policy::Combined(Weights::new(1.0, 0.0).unwrap()), &edge);
        assert!((time_only - 35.0 / 120.0).abs() < 1e-12);

        let cost_only = weigh(Policy::Combined(Weights::new(0.0, 1.0).unwrap()), &edge);
        assert!((cost_only - 1.0).abs() < 1e-12);
    }

    #[test]
    fn combo_uses_raw_values() {
        let edge = taxi();
        assert_eq!(weigh(Policy::Combo, &edge), 35.0 + 775.0 * 0.5);
    }

    #[test]
    fn combo_and_combined_differ() {
        let edge = taxi();
        assert_ne!(
            weigh(Policy::Combo, &edge),
            weigh(Policy::Combined(Weights::EVEN), &edge)
        );
    }

    #[test]
    fn labels() {
        assert_eq!(Policy::Time.label(), "Time Only");
        assert_eq!(Policy::Cost.label(), "Cost Only");
        assert_eq!(Policy::Distance.label(), "Distance Only");
        assert_eq!(
            Policy::Combined(Weights::EVEN).label(),
            "Time & Cost Compromise (50/50)"
        );
        assert_eq!(
            Policy::Combined(Weights::new(0.7, 0.3).unwrap()).label(),
            "Time & Cost Compromise (70/30)"
        );
        assert_eq!(Policy::Combo.label(), "Time & Cost Combo");
    }

    #[test]
    fn dimension_and_composite() {
        assert_eq!(Policy::Time.dimension(), Some(Dimension::Time));
        assert!(!Policy::Distance.is_composite());
        assert!(Policy::Combo.is_composite());
        assert!(Policy::Combined(Weights::EVEN).is_composite());
    }

    #[test]
    fn normalization_from_graph() {
        let graph = Graph::new(vec![taxi()]).unwrap();
        let norm = Normalization::from_graph(&graph);
        assert_eq!(norm.max_time(), 35.0);
        assert_eq!(norm.max_cost(), 775.0);
    }

    #[test]
    fn normalization_from_graph_without_cost() {
        let walk = Edge::new(
            Location::parse("A").unwrap(),
            Location::parse("B").unwrap(),
            TransportMode::Walk,
            5.0,
            0.0,
            0.4,
        );
        let graph = Graph::new(vec![walk.clone()]).unwrap();
        let norm = Normalization::from_graph(&graph);

        assert_eq!(norm.max_time(), 5.0);
        assert_eq!(norm.max_cost(), 1.0);

        let config = PlannerConfig::new(norm, 0.5, 1e-3, Weights::EVEN);
        let w = EdgeWeight::new(Policy::Combined(Weights::EVEN), &config).weigh(&walk);
        assert!((w - 0.5).abs() < 1e-12);
    }
}
