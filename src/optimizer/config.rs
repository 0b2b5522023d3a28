//! Optimizer configuration.

use serde::{Deserialize, Serialize};

use crate::constructive::NeighborWeights;
use crate::evaluation::DEFAULT_LATENESS_PENALTY;

/// Tunable constants of the optimizer.
///
/// The defaults are the production values; tests and experiments override
/// them through the `with_*` builders. Every field is optional when
/// deserializing and falls back to its default.
///
/// # Examples
///
/// ```
/// use perishable_routing::optimizer::OptimizerConfig;
///
/// let config = OptimizerConfig::default()
///     .with_exact_threshold(6)
///     .with_lateness_penalty(8.0);
/// assert_eq!(config.exact_threshold, 6);
/// assert_eq!(config.lateness_penalty, 8.0);
/// assert_eq!(config.refine_min_size, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Largest instance (locations, origin included) solved exhaustively.
    pub exact_threshold: usize,
    /// Score penalty per position a perishable stop is delayed.
    pub lateness_penalty: f64,
    /// Per-pending-perishable bonus in the priority nearest-neighbor seed.
    pub perishable_bonus: f64,
    /// Flat penalty on non-perishable picks while perishables are pending.
    pub pending_perishable_penalty: f64,
    /// The final 2-opt pass runs only when `n > refine_min_size`.
    pub refine_min_size: usize,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        let weights = NeighborWeights::default();
        Self {
            exact_threshold: 8,
            lateness_penalty: DEFAULT_LATENESS_PENALTY,
            perishable_bonus: weights.perishable_bonus,
            pending_perishable_penalty: weights.pending_penalty,
            refine_min_size: 3,
        }
    }
}

impl OptimizerConfig {
    /// Sets the largest instance solved exhaustively.
    pub fn with_exact_threshold(mut self, n: usize) -> Self {
        self.exact_threshold = n;
        self
    }

    /// Sets the per-position lateness penalty.
    pub fn with_lateness_penalty(mut self, penalty: f64) -> Self {
        self.lateness_penalty = penalty;
        self
    }

    /// Sets the priority nearest-neighbor adjustments.
    pub fn with_neighbor_weights(mut self, weights: NeighborWeights) -> Self {
        self.perishable_bonus = weights.perishable_bonus;
        self.pending_perishable_penalty = weights.pending_penalty;
        self
    }

    /// Sets the size above which the final 2-opt pass runs.
    pub fn with_refine_min_size(mut self, n: usize) -> Self {
        self.refine_min_size = n;
        self
    }

    /// Priority nearest-neighbor adjustments taken from this config.
    pub fn neighbor_weights(&self) -> NeighborWeights {
        NeighborWeights {
            perishable_bonus: self.perishable_bonus,
            pending_penalty: self.pending_perishable_penalty,
        }
    }
}
