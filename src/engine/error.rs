//! Error types for the discrete-event engine
//!
//! Every variant here represents a misuse of the engine API rather than an
//! environmental condition; nothing is ever retried. `QueueExhausted` is the
//! one benign case: it simply signals that a run has nothing left to do.

use thiserror::Error;

/// Errors produced by the event queue and resource pools
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    /// A negative or non-finite delay was requested
    #[error("Invalid delay requested: {delay} (delays must be finite and non-negative)")]
    InvalidDelay {
        /// The offending delay, in simulated minutes
        delay: f64,
    },

    /// `advance` was called with no pending events
    #[error("Event queue exhausted: no pending events remain")]
    QueueExhausted,

    /// A slot was released that the pool does not currently hold
    #[error("Resource slot released twice, or released against the wrong pool")]
    DoubleRelease,

    /// A resource pool was constructed with zero capacity
    #[error("Invalid resource pool capacity: {capacity} (must be at least 1)")]
    InvalidCapacity {
        /// The offending capacity
        capacity: usize,
    },
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
