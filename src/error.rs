//! Error types.

use thiserror::Error;

/// The available vehicle fleet cannot absorb every request under the
/// builder's capacity rule.
///
/// Carried data is diagnostic: `min_vehicles_needed` is a lower bound
/// derived from the partial assignment at the point of failure, not a proof
/// of the true minimum fleet size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot serve all requests with {available} vehicles; at least {min_vehicles_needed} needed")]
pub struct InfeasibleAssignment {
    /// Vehicle count the failed build was given.
    pub available: usize,
    /// Minimum vehicle count estimated to cover all requests.
    pub min_vehicles_needed: usize,
}
