//! Core types and identifiers for the checkpoint simulator
//!
//! This module contains the fundamental types used throughout the simulation:
//!
//! - **Identifiers**: run-scoped, monotonically increasing passenger ids
//! - **Configuration**: simulation configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use airport_security_simulator::types::*;
//!
//! let pid = PassengerId::new(7);
//! assert_eq!(pid.to_string(), "PAX_000007");
//!
//! let config = SimulationConfig {
//!     arrival_rate: 50.0,
//!     target_avg_time: 15.0,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use identifiers::*;
