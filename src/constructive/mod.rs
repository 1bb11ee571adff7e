//! Constructive heuristics for building vehicle assignments.
//!
//! - [`build_routes`] — Sequential cheapest-insertion construction

mod cheapest_insertion;

pub use cheapest_insertion::build_routes;
