//! Simulation-level error types

use thiserror::Error;

use crate::engine::EngineError;
use crate::types::ConfigValidationError;

/// Anything that can go wrong while building or running a simulation.
#[derive(Error, Debug)]
pub enum SimulationError {
    /// The event engine rejected an operation.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// A rate or duration parameter a distribution cannot be built from.
    #[error("invalid value {value} for parameter '{parameter}'")]
    InvalidRate {
        /// Which parameter was rejected.
        parameter: &'static str,
        /// The offending value.
        value: f64,
    },

    /// The simulation was configured or driven incorrectly.
    #[error("configuration error: {0}")]
    ConfigurationError(String),

    /// Reading or writing a results file failed.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serializing results to JSON failed.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<ConfigValidationError> for SimulationError {
    fn from(err: ConfigValidationError) -> Self {
        SimulationError::ConfigurationError(err.to_string())
    }
}

impl From<anyhow::Error> for SimulationError {
    fn from(err: anyhow::Error) -> Self {
        SimulationError::ConfigurationError(err.to_string())
    }
}

/// Convenience alias for simulation operations.
pub type SimulationResult<T> = Result<T, SimulationError>;
