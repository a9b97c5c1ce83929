//! Planner configuration.

use super::policy::{Normalization, Weights};

/// Configuration parameters shared by both solvers.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Fixed maxima for the `combined` policy.
    pub normalization: Normalization,

    /// Factor applied to raw cost in the `combo` policy.
    pub combo_cost_factor: f64,

    /// Tolerance when matching recorded distances to edge values.
    /// Absorbs floating-point drift in post-hoc edge resolution.
    pub tolerance: f64,

    /// Weights used by callers that select `combined` without supplying any.
    pub default_weights: Weights,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        normalization: Normalization,
        combo_cost_factor: f64,
        tolerance: f64,
        default_weights: Weights,
    ) -> Self {
        Self {
            normalization,
            combo_cost_factor,
            tolerance,
            default_weights,
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            normalization: Normalization::default(),
            combo_cost_factor: 0.5,
            tolerance: 1e-3,
            default_weights: Weights::EVEN,
        }
    }
}
