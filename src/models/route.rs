//! Route type.

use serde::{Deserialize, Serialize};

/// An ordered sequence of request indices assigned to a single vehicle.
///
/// The vehicle traverses depot → request 0's origin and destination →
/// request 1's origin and destination → … → depot. Order is significant:
/// it determines the traversal and therefore the route's cost.
///
/// A route is a view over indices into the request slice it was built
/// against; it never owns request data. Once returned by the builder it is
/// not mutated further.
///
/// # Examples
///
/// ```
/// use taxi_routing::models::Route;
///
/// let route = Route::from_indices(vec![2, 0, 1]);
/// assert_eq!(route.len(), 3);
/// assert!(route.contains(0));
/// assert_eq!(route.indices(), &[2, 0, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    indices: Vec<usize>,
}

impl Route {
    /// Creates a route visiting the given request indices in order.
    pub fn from_indices(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    /// Request indices in traversal order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of requests served by this route.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if this route serves no requests.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns `true` if this route serves the given request index.
    pub fn contains(&self, request_idx: usize) -> bool {
        self.indices.contains(&request_idx)
    }
}
