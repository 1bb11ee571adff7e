//! Transportation request and pickup time types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Point;

/// A wall-clock pickup time as an (hour, minute) pair.
///
/// Advisory data: it is carried on every request and used by presentation
/// code for ordering, but route construction never consults it. Hours are
/// not bounded to a 24-hour clock — a return trip generated three hours
/// after a 21:00 outbound keeps hour 24 as-is.
///
/// # Examples
///
/// ```
/// use taxi_routing::models::PickupTime;
///
/// let t = PickupTime::new(9, 5);
/// assert_eq!(t.to_string(), "9:05");
/// assert!(t < PickupTime::new(12, 30));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PickupTime {
    hour: u8,
    minute: u8,
}

impl PickupTime {
    /// Creates a pickup time.
    pub fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    /// Hour component.
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute component.
    pub fn minute(&self) -> u8 {
        self.minute
    }
}

impl fmt::Display for PickupTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

/// One pickup-and-delivery demand.
///
/// A request is immutable once created. The routing core refers to requests
/// by their zero-based index in the input slice and never copies or mutates
/// their contents. `pickup_time` and `allowed_delay` are passthrough data:
/// stored and reported, never enforced during construction.
///
/// # Examples
///
/// ```
/// use taxi_routing::models::{PickupTime, Point, Request};
///
/// let r = Request::new(
///     Point::new(0.0, 0.0),
///     Point::new(5.0, 5.0),
///     PickupTime::new(14, 30),
///     10,
/// );
/// assert_eq!(r.allowed_delay(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    origin: Point,
    destination: Point,
    pickup_time: PickupTime,
    allowed_delay: u32,
}

impl Request {
    /// Creates a request from origin to destination.
    pub fn new(
        origin: Point,
        destination: Point,
        pickup_time: PickupTime,
        allowed_delay: u32,
    ) -> Self {
        Self {
            origin,
            destination,
            pickup_time,
            allowed_delay,
        }
    }

    /// Pickup location.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Drop-off location.
    pub fn destination(&self) -> Point {
        self.destination
    }

    /// Desired pickup time (advisory).
    pub fn pickup_time(&self) -> PickupTime {
        self.pickup_time
    }

    /// Tolerated pickup delay in minutes (advisory).
    pub fn allowed_delay(&self) -> u32 {
        self.allowed_delay
    }
}
