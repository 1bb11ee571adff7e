//! Paired-request coverage check.

use crate::models::{Assignment, Request};

/// Checks that every rider's outbound and return trips were both assigned.
///
/// Request sets produced by [`generate_requests`] are rider-paired: the
/// outbound trip sits at an even index `2k` and the matching return trip at
/// `2k + 1`. This predicate holds when, for every pair, both indices appear
/// in some route of the assignment. An odd-length request set fails the
/// check for its final unpaired index.
///
/// This is a post-hoc sanity check over a finished assignment; route
/// construction itself knows nothing about pairing.
///
/// [`generate_requests`]: crate::generator::generate_requests
pub fn riders_return_home(assignment: &Assignment, requests: &[Request]) -> bool {
    (0..requests.len())
        .step_by(2)
        .all(|outbound| assignment.is_assigned(outbound) && assignment.is_assigned(outbound + 1))
}
