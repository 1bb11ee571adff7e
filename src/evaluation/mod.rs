//! Route cost evaluation and assignment checks.
//!
//! - [`CostEvaluator`] — total travel distance of a route or assignment
//! - [`riders_return_home`] — paired outbound/return coverage check

mod evaluator;
mod pairing;

pub use evaluator::CostEvaluator;
pub use pairing::riders_return_home;
