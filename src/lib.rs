//! Airport Security Checkpoint Simulator
//!
//! A stochastic discrete-event simulation of a two-stage airport security
//! checkpoint, used to estimate the minimum staffing levels (ID checkers and
//! body scanners) that keep the average passenger system time below a
//! service-level target.
//!
//! # Overview
//!
//! This library provides a small, single-threaded discrete-event simulation
//! core and a queueing model built on top of it. Passengers arrive as a
//! Poisson process, queue for a shared multi-server ID check, pick the
//! scanner with the shortest waiting line, queue for that scanner, and exit.
//! The time each passenger spends in the system is recorded per run.
//!
//! ## Key Features
//!
//! - **Deterministic Event Queue**: simulated time advances event to event,
//!   with FIFO tie-breaking among events due at the same instant
//! - **Resource Pools**: finite-capacity servers with FIFO waiting lines and
//!   structurally exactly-once slot release
//! - **Cooperative Processes**: passengers and the arrival generator are
//!   explicit continuations driven by the event queue, never threads
//! - **Reproducible Runs**: a seeded RNG makes every run byte-identical for
//!   the same seed and configuration
//! - **Staffing Sweep**: an experiment driver that evaluates a grid of
//!   (checkers, scanners) configurations and recommends the cheapest one
//!   meeting the target
//!
//! ## Quick Start
//!
//! ```rust
//! use airport_security_simulator::checkpoint::{CheckpointParameters, CheckpointSimulation};
//!
//! let params = CheckpointParameters::default();
//! let mut sim = CheckpointSimulation::new(&params, 35, 40, 42)?;
//! sim.run(300.0)?;
//!
//! let log = sim.system_times();
//! println!("{} passengers cleared security", log.len());
//! # Ok::<(), airport_security_simulator::simulation::SimulationError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: identifiers and configuration
//! - [`engine`]: the discrete-event core (clock, event queue, resource pools)
//! - [`checkpoint`]: the checkpoint queueing model (passengers, arrivals, routing)
//! - [`simulation`]: run statistics, the staffing sweep driver, errors, logging
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod checkpoint;
pub mod engine;
pub mod simulation;
pub mod types;

// Core types and identifiers
pub use types::{CliArgs, ConfigError, ConfigValidationError, PassengerId, SimulationConfig};

// Discrete-event engine
pub use engine::{Acquire, EngineError, Event, EventQueue, ResourcePool, SimTime, SlotGuard};

// Checkpoint model
pub use checkpoint::{CheckpointModel, CheckpointParameters, CheckpointSimulation, PassengerState};

// Simulation driver types
pub use simulation::{
    CandidateSolution, LoggingConfig, RunStatistics, SimulationError, SimulationResult,
    StaffingSweep, SweepReport, SystemTimeLog,
};
