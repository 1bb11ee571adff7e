//! Synthetic request generation.
//!
//! Produces rider-paired request sets for testing and benchmarking: each
//! rider contributes an outbound trip at an even index `2k` and a matching
//! return trip (origin and destination swapped) at the odd index `2k + 1`,
//! one to three hours later.

use rand::Rng;

use crate::models::{PickupTime, Point, Request};

/// Generates `num_riders * 2` rider-paired requests.
///
/// Locations are drawn on an integer grid (`x` in `0..=25`, `y` in
/// `0..=40`), outbound pickups between 10:00 and 18:59, and allowed delays
/// of 10 to 15 minutes. The return trip reuses the rider's delay and departs
/// one to three hours after the outbound pickup.
///
/// The caller supplies the RNG, so a seeded generator reproduces the same
/// request set.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use taxi_routing::generator::generate_requests;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let requests = generate_requests(9, &mut rng);
/// assert_eq!(requests.len(), 18);
/// assert_eq!(requests[0].origin(), requests[1].destination());
/// ```
pub fn generate_requests(num_riders: usize, rng: &mut impl Rng) -> Vec<Request> {
    let mut requests = Vec::with_capacity(num_riders * 2);

    for _ in 0..num_riders {
        let origin = Point::new(
            rng.random_range(0..=25) as f64,
            rng.random_range(0..=40) as f64,
        );
        let destination = Point::new(
            rng.random_range(0..=25) as f64,
            rng.random_range(0..=40) as f64,
        );
        let pickup_hour: u8 = rng.random_range(10..=18);
        let pickup_minute: u8 = rng.random_range(0..=59);
        let allowed_delay: u32 = rng.random_range(10..=15);
        let stay_hours: u8 = rng.random_range(1..=3);

        requests.push(Request::new(
            origin,
            destination,
            PickupTime::new(pickup_hour, pickup_minute),
            allowed_delay,
        ));
        requests.push(Request::new(
            destination,
            origin,
            PickupTime::new(pickup_hour + stay_hours, pickup_minute),
            allowed_delay,
        ));
    }

    requests
}
