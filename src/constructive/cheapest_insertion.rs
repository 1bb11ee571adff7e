//! Sequential cheapest-insertion construction heuristic.
//!
//! # Algorithm
//!
//! Builds one route per vehicle, sequentially, saturating each vehicle
//! before the next is started. A route is seeded with the oldest unassigned
//! request, then grown by repeatedly inserting the (request, position) pair
//! with the smallest marginal cost
//!
//! Δ(u, p) = cost(route with u at position p) − cost(route)
//!
//! until the route reaches the capacity target ⌊N / vehicles⌋ or the
//! candidate pool is exhausted. The capacity target balances load so
//! late-built routes are not starved; it is not a seat or weight limit.
//!
//! Insertion is unconstrained: desired pickup times and allowed delays are
//! never consulted, and the resulting routes may be time-infeasible.
//!
//! # Complexity
//!
//! O(U · L²) cost evaluations per growth step (U unassigned candidates,
//! route of length L), O(c³ · m) overall for capacity target c and m
//! vehicles. Intended for instances of a few tens of requests.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E. & Lewis, P.M. (1977). "An Analysis of
//! Several Heuristics for the Traveling Salesman Problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use tracing::debug;

use crate::error::InfeasibleAssignment;
use crate::evaluation::CostEvaluator;
use crate::models::{Assignment, Point, Request, Route};

/// Partitions `requests` into at most `vehicle_count` routes, each starting
/// and ending at `depot`.
///
/// On success every request index appears in exactly one route, and the
/// route count never exceeds `vehicle_count`. An empty request slice yields
/// an assignment holding exactly one empty route regardless of
/// `vehicle_count` — a deliberate edge case, not one route per vehicle.
///
/// Fails with [`InfeasibleAssignment`] when requests remain after the
/// vehicle budget is exhausted; no partial assignment is returned. A zero
/// `vehicle_count` is reported the same way.
///
/// The build is deterministic: identical inputs produce bit-identical
/// assignments. Ties between candidate insertions keep the first one
/// discovered in scan order.
///
/// # Examples
///
/// ```
/// use taxi_routing::constructive::build_routes;
/// use taxi_routing::models::{PickupTime, Point, Request};
///
/// let requests = vec![
///     Request::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0), PickupTime::new(10, 0), 10),
///     Request::new(Point::new(2.0, 0.0), Point::new(3.0, 0.0), PickupTime::new(10, 0), 10),
/// ];
/// let assignment = build_routes(1, &requests, Point::new(0.0, 0.0)).unwrap();
/// assert_eq!(assignment.num_routes(), 1);
/// assert_eq!(assignment.num_assigned(), 2);
/// ```
pub fn build_routes(
    vehicle_count: usize,
    requests: &[Request],
    depot: Point,
) -> Result<Assignment, InfeasibleAssignment> {
    if requests.is_empty() {
        let mut assignment = Assignment::new();
        assignment.add_route(Route::from_indices(Vec::new()));
        return Ok(assignment);
    }
    if vehicle_count == 0 {
        return Err(InfeasibleAssignment {
            available: 0,
            min_vehicles_needed: 1,
        });
    }

    let evaluator = CostEvaluator::new(requests, depot);
    let capacity = requests.len() / vehicle_count;

    let mut unassigned: Vec<usize> = (0..requests.len()).collect();
    let mut assignment = Assignment::new();

    while !unassigned.is_empty() && assignment.num_routes() < vehicle_count {
        // FIFO seeding: the oldest unassigned request opens the route.
        let seed = unassigned.remove(0);
        let mut route = vec![seed];

        while route.len() < capacity {
            match cheapest_insertion(&route, &unassigned, &evaluator) {
                Some((unassigned_pos, position, _)) => {
                    let request_idx = unassigned.remove(unassigned_pos);
                    route.insert(position, request_idx);
                }
                None => break,
            }
        }

        debug!(
            vehicle = assignment.num_routes(),
            stops = route.len(),
            cost = evaluator.route_cost(&route),
            "route finalized"
        );
        assignment.add_route(Route::from_indices(route));
    }

    if !unassigned.is_empty() {
        let min_vehicles_needed = assignment.num_routes() + 1;
        debug!(
            available = vehicle_count,
            min_vehicles_needed,
            remaining = unassigned.len(),
            "vehicle budget exhausted"
        );
        return Err(InfeasibleAssignment {
            available: vehicle_count,
            min_vehicles_needed,
        });
    }

    Ok(assignment)
}

/// Scans every unassigned request and insertion position, returning the
/// `(unassigned_pos, position, cost_delta)` triple with the smallest
/// marginal cost, or `None` when the candidate pool is empty.
///
/// Candidates are scanned in unassigned-list order, positions front to
/// back, and only a strictly smaller delta replaces the incumbent — the
/// first candidate discovered wins ties, keeping the result stable for a
/// given input.
fn cheapest_insertion(
    route: &[usize],
    unassigned: &[usize],
    evaluator: &CostEvaluator<'_>,
) -> Option<(usize, usize, f64)> {
    let current_cost = evaluator.route_cost(route);
    let mut best: Option<(usize, usize, f64)> = None;

    for (unassigned_pos, &request_idx) in unassigned.iter().enumerate() {
        for position in 0..=route.len() {
            let mut candidate = route.to_vec();
            candidate.insert(position, request_idx);
            let delta = evaluator.route_cost(&candidate) - current_cost;

            if best.as_ref().is_none_or(|b| delta < b.2) {
                best = Some((unassigned_pos, position, delta));
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PickupTime;

    fn request(origin: (f64, f64), destination: (f64, f64)) -> Request {
        Request::new(
            Point::new(origin.0, origin.1),
            Point::new(destination.0, destination.1),
            PickupTime::new(10, 0),
            10,
        )
    }

    fn line_requests(n: usize) -> Vec<Request> {
        (0..n)
            .map(|i| request((i as f64, 0.0), (i as f64 + 0.5, 0.0)))
            .collect()
    }

    #[test]
    fn test_empty_requests_single_empty_route() {
        for vehicle_count in 1..=5 {
            let assignment =
                build_routes(vehicle_count, &[], Point::new(10.0, 10.0)).expect("feasible");
            assert_eq!(assignment.num_routes(), 1);
            assert!(assignment.routes()[0].is_empty());
        }
    }

    #[test]
    fn test_single_request_single_vehicle() {
        let requests = vec![request((1.0, 0.0), (2.0, 0.0))];
        let assignment = build_routes(1, &requests, Point::new(0.0, 0.0)).expect("feasible");
        assert_eq!(assignment.num_routes(), 1);
        assert_eq!(assignment.routes()[0].indices(), &[0]);
    }

    #[test]
    fn test_cheapest_ordering_of_two() {
        // Scenario from the reference behavior: the builder must pick the
        // cheaper of the two possible orderings.
        let requests = vec![request((0.0, 0.0), (1.0, 0.0)), request((2.0, 0.0), (3.0, 0.0))];
        let depot = Point::new(0.0, 0.0);
        let assignment = build_routes(1, &requests, depot).expect("feasible");

        assert_eq!(assignment.num_routes(), 1);
        let route = &assignment.routes()[0];
        assert_eq!(route.len(), 2);

        let evaluator = CostEvaluator::new(&requests, depot);
        let chosen = evaluator.route_cost(route.indices());
        let mut reversed: Vec<usize> = route.indices().to_vec();
        reversed.reverse();
        assert!(chosen <= evaluator.route_cost(&reversed));
        assert_eq!(route.indices(), &[0, 1]);
    }

    #[test]
    fn test_coverage_exactly_once() {
        let requests = line_requests(12);
        let assignment = build_routes(3, &requests, Point::new(0.0, 0.0)).expect("feasible");

        let mut seen = vec![0usize; requests.len()];
        for route in assignment.routes() {
            for &idx in route.indices() {
                seen[idx] += 1;
            }
        }
        assert!(seen.iter().all(|&count| count == 1));
    }

    #[test]
    fn test_vehicle_bound() {
        let requests = line_requests(4);
        let assignment = build_routes(6, &requests, Point::new(0.0, 0.0)).expect("feasible");
        assert!(assignment.num_routes() <= 6);
    }

    #[test]
    fn test_infeasible_reports_lower_bound() {
        // Three requests over two vehicles: capacity target 3 / 2 = 1, so
        // each vehicle takes only its seed and one request is left over.
        let requests = line_requests(3);
        let err = build_routes(2, &requests, Point::new(0.0, 0.0)).expect_err("infeasible");
        assert_eq!(
            err,
            InfeasibleAssignment {
                available: 2,
                min_vehicles_needed: 3,
            }
        );
    }

    #[test]
    fn test_infeasible_returns_no_routes() {
        // Five requests over two vehicles: capacity target 2, four served,
        // one left over. The failure carries only diagnostics.
        let requests = line_requests(5);
        let err = build_routes(2, &requests, Point::new(0.0, 0.0)).expect_err("infeasible");
        assert_eq!(err.available, 2);
        assert_eq!(err.min_vehicles_needed, 3);
    }

    #[test]
    fn test_zero_vehicles() {
        let requests = line_requests(1);
        let err = build_routes(0, &requests, Point::new(0.0, 0.0)).expect_err("infeasible");
        assert_eq!(err.min_vehicles_needed, 1);

        // Empty request sets still get their single empty route.
        let assignment = build_routes(0, &[], Point::new(0.0, 0.0)).expect("feasible");
        assert_eq!(assignment.num_routes(), 1);
    }

    #[test]
    fn test_single_vehicle_takes_everything() {
        // With one vehicle the capacity target is N, so infeasibility is
        // unreachable.
        let requests = line_requests(9);
        let assignment = build_routes(1, &requests, Point::new(0.0, 0.0)).expect("feasible");
        assert_eq!(assignment.num_routes(), 1);
        assert_eq!(assignment.num_assigned(), 9);
    }

    #[test]
    fn test_more_vehicles_than_requests() {
        // Capacity target 2 / 3 = 0: each route keeps only its seed, in
        // input order, and the remaining vehicles go unused.
        let requests = line_requests(2);
        let assignment = build_routes(3, &requests, Point::new(0.0, 0.0)).expect("feasible");
        assert_eq!(assignment.num_routes(), 2);
        assert_eq!(assignment.routes()[0].indices(), &[0]);
        assert_eq!(assignment.routes()[1].indices(), &[1]);
    }

    #[test]
    fn test_deterministic() {
        let requests = line_requests(10);
        let depot = Point::new(5.0, 5.0);
        let first = build_routes(2, &requests, depot).expect("feasible");
        let second = build_routes(2, &requests, depot).expect("feasible");
        assert_eq!(first, second);
    }

    #[test]
    fn test_concurrent_builds_agree() {
        let requests = line_requests(8);
        let depot = Point::new(3.0, 1.0);

        let (a, b) = std::thread::scope(|scope| {
            let first = scope.spawn(|| build_routes(2, &requests, depot));
            let second = scope.spawn(|| build_routes(2, &requests, depot));
            (
                first.join().expect("no panic"),
                second.join().expect("no panic"),
            )
        });
        assert_eq!(a.expect("feasible"), b.expect("feasible"));
    }

    #[test]
    fn test_tie_keeps_first_discovered() {
        // Three identical requests: every insertion has the same delta, so
        // each growth step keeps its first candidate, the next unassigned
        // request at position 0. Seed [0] becomes [1, 0], then [2, 1, 0].
        let requests = vec![
            request((1.0, 0.0), (1.0, 0.0)),
            request((1.0, 0.0), (1.0, 0.0)),
            request((1.0, 0.0), (1.0, 0.0)),
        ];
        let assignment = build_routes(1, &requests, Point::new(0.0, 0.0)).expect("feasible");
        assert_eq!(assignment.routes()[0].indices(), &[2, 1, 0]);
    }

    #[test]
    fn test_cheapest_insertion_empty_pool() {
        let requests = line_requests(2);
        let evaluator = CostEvaluator::new(&requests, Point::new(0.0, 0.0));
        assert!(cheapest_insertion(&[0], &[], &evaluator).is_none());
    }

    #[test]
    fn test_cheapest_insertion_prefers_append_on_line() {
        // Route [0] with candidate 1 further along the line: appending is
        // cheaper than prepending.
        let requests = vec![request((1.0, 0.0), (2.0, 0.0)), request((3.0, 0.0), (4.0, 0.0))];
        let evaluator = CostEvaluator::new(&requests, Point::new(0.0, 0.0));
        let (unassigned_pos, position, _) =
            cheapest_insertion(&[0], &[1], &evaluator).expect("candidate found");
        assert_eq!(unassigned_pos, 0);
        assert_eq!(position, 1);
    }
}
