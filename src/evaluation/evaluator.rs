//! Route cost evaluator.

use crate::models::{Assignment, Point, Request};

/// Computes the travel distance of routes over a fixed request set and depot.
///
/// Travel time equals distance (unit speed), so route cost doubles as route
/// duration. Evaluation is a full recomputation every call — pure and
/// referentially transparent, with no incremental tracking — which is what
/// lets the builder compare candidate insertions by recomputing costs.
///
/// # Examples
///
/// ```
/// use taxi_routing::evaluation::CostEvaluator;
/// use taxi_routing::models::{PickupTime, Point, Request};
///
/// let requests = vec![Request::new(
///     Point::new(3.0, 4.0),
///     Point::new(6.0, 8.0),
///     PickupTime::new(10, 0),
///     10,
/// )];
/// let evaluator = CostEvaluator::new(&requests, Point::new(0.0, 0.0));
///
/// // depot→origin (5) + origin→destination (5) + destination→depot (10)
/// assert!((evaluator.route_cost(&[0]) - 20.0).abs() < 1e-10);
/// ```
pub struct CostEvaluator<'a> {
    requests: &'a [Request],
    depot: Point,
}

impl<'a> CostEvaluator<'a> {
    /// Creates an evaluator over the given request slice and depot.
    pub fn new(requests: &'a [Request], depot: Point) -> Self {
        Self { requests, depot }
    }

    /// Total travel distance of the route visiting `indices` in order.
    ///
    /// The path is depot → origin and destination of each request, in
    /// sequence → depot. An empty route costs zero. `indices` must refer to
    /// requests in the evaluator's slice; [`Route::indices`] plugs in
    /// directly.
    ///
    /// [`Route::indices`]: crate::models::Route::indices
    pub fn route_cost(&self, indices: &[usize]) -> f64 {
        let mut cost = 0.0;
        let mut prev = self.depot;

        for &idx in indices {
            let request = &self.requests[idx];
            cost += prev.distance_to(request.origin());
            cost += request.origin().distance_to(request.destination());
            prev = request.destination();
        }

        cost + prev.distance_to(self.depot)
    }

    /// Total travel distance across every route of an assignment.
    pub fn assignment_cost(&self, assignment: &Assignment) -> f64 {
        assignment
            .routes()
            .iter()
            .map(|route| self.route_cost(route.indices()))
            .sum()
    }
}
