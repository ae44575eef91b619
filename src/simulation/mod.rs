//! Sweep orchestration, results, and ambient plumbing
//!
//! - [`sweep`] — the staffing grid search and its report
//! - [`statistics`] — per-run logs and aggregates
//! - [`error`] — the simulation-level error taxonomy
//! - [`logging`] — tracing subscriber setup

pub mod error;
pub mod logging;
pub mod statistics;
pub mod sweep;

pub use error::*;
pub use logging::*;
pub use statistics::*;
pub use sweep::*;
