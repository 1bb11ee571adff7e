//! Presentation helpers for assignments.
//!
//! Pure consumers of `(assignment, requests, depot)`: nothing here feeds
//! back into route construction, so the core stays testable headlessly and
//! any frontend (terminal, plotter) can sit on top.

use std::fmt::Write as _;

use crate::models::{Assignment, Point, Request};

/// Renders an assignment as a human-readable listing, one block per vehicle.
///
/// Requests within a block are listed by desired pickup time. This is a
/// display choice only — the traversal order stored in the route is not
/// touched.
///
/// # Examples
///
/// ```
/// use taxi_routing::models::{Assignment, PickupTime, Point, Request, Route};
/// use taxi_routing::report::format_routes;
///
/// let requests = vec![Request::new(
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     PickupTime::new(10, 0),
///     10,
/// )];
/// let mut assignment = Assignment::new();
/// assignment.add_route(Route::from_indices(vec![0]));
///
/// let listing = format_routes(&assignment, &requests);
/// assert!(listing.starts_with("Vehicle 1 route:"));
/// ```
pub fn format_routes(assignment: &Assignment, requests: &[Request]) -> String {
    let mut out = String::new();

    for (vehicle, route) in assignment.routes().iter().enumerate() {
        let _ = writeln!(out, "Vehicle {} route:", vehicle + 1);

        let mut by_pickup: Vec<usize> = route.indices().to_vec();
        by_pickup.sort_by_key(|&idx| requests[idx].pickup_time());

        for idx in by_pickup {
            let request = &requests[idx];
            let _ = writeln!(
                out,
                "  From ({}, {}) to ({}, {}) at {}",
                request.origin().x,
                request.origin().y,
                request.destination().x,
                request.destination().y,
                request.pickup_time(),
            );
        }
    }

    out
}

/// Returns the polyline each vehicle traverses: depot, then each request's
/// origin and destination in route order, then the depot again.
///
/// Suitable for handing to a plotting frontend. An empty route yields the
/// two-point depot-to-depot path.
pub fn route_paths(assignment: &Assignment, requests: &[Request], depot: Point) -> Vec<Vec<Point>> {
    assignment
        .routes()
        .iter()
        .map(|route| {
            let mut path = Vec::with_capacity(route.len() * 2 + 2);
            path.push(depot);
            for &idx in route.indices() {
                let request = &requests[idx];
                path.push(request.origin());
                path.push(request.destination());
            }
            path.push(depot);
            path
        })
        .collect()
}
