//! Assignment type.

use serde::{Deserialize, Serialize};

use super::Route;

/// A complete assignment of requests to vehicles.
///
/// Holds one [`Route`] per vehicle; vehicle identity is the position in the
/// sequence, there is no persistent vehicle entity. A successful build
/// covers every request index exactly once across all routes.
///
/// # Examples
///
/// ```
/// use taxi_routing::models::{Assignment, Route};
///
/// let mut assignment = Assignment::new();
/// assignment.add_route(Route::from_indices(vec![0, 2]));
/// assignment.add_route(Route::from_indices(vec![1]));
/// assert_eq!(assignment.num_routes(), 2);
/// assert_eq!(assignment.num_assigned(), 3);
/// assert!(assignment.is_assigned(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    routes: Vec<Route>,
}

impl Assignment {
    /// Creates an assignment with no routes.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Appends a route for the next vehicle.
    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Routes in vehicle order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of routes (vehicles used).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total number of requests served across all routes.
    pub fn num_assigned(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }

    /// Returns `true` if any route serves the given request index.
    pub fn is_assigned(&self, request_idx: usize) -> bool {
        self.routes.iter().any(|r| r.contains(request_idx))
    }
}
