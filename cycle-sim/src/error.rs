//! Error types for the simulation accelerator.

use thiserror::Error;

/// Error type for fast-forward and cycle-detection runs.
#[derive(Debug, Clone, Error)]
pub enum SimulationError {
    /// No state repeated within the configured recording limit.
    ///
    /// The accelerator assumes a deterministic step function over a finite
    /// state space; hitting this means the model violates that assumption
    /// (or the limit is simply too small for its pre-period plus period).
    #[error("no cycle found within {limit} recorded states")]
    NoCycleWithinLimit {
        /// The state-recording limit that was exhausted.
        limit: usize,
    },
}
