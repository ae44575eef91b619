//! The two-stage security checkpoint
//!
//! - [`model`] — the station layout: one shared ID-check pool and a bank of
//!   single-slot scanners, plus the shortest-queue routing rule
//! - [`passenger`] — the passenger process as explicit continuations
//! - [`arrivals`] — the self-rescheduling Poisson arrival source
//! - [`simulation`] — one seeded, bounded run at a fixed staffing level

pub mod arrivals;
pub mod model;
pub mod passenger;
pub mod simulation;

pub use model::*;
pub use passenger::{Passenger, PassengerState};
pub use simulation::{CheckpointParameters, CheckpointSimulation};
