//! # taxi-routing
//!
//! Single-depot, multi-vehicle pickup-and-delivery routing for small taxi
//! fleets. Given a set of transportation requests, a vehicle count, and a
//! depot, the crate partitions the requests into per-vehicle routes that
//! approximately minimize total travel distance.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Request, Route, Assignment)
//! - [`evaluation`] — Route cost evaluation and assignment checks
//! - [`constructive`] — Cheapest-insertion route construction
//! - [`generator`] — Synthetic rider-paired request generation
//! - [`report`] — Human-readable and plottable views of an assignment
//! - [`error`] — Error types

pub mod constructive;
pub mod error;
pub mod evaluation;
pub mod generator;
pub mod models;
pub mod report;
