//! Discrete-event simulation core
//!
//! This module is domain-independent: it knows nothing about passengers or
//! checkpoints. It provides the three pieces every discrete-event model
//! needs:
//!
//! - **[`EventQueue`]**: the simulated clock plus pending continuations,
//!   ordered by `(due_time, sequence_number)` so equal-time events run in
//!   scheduling order
//! - **[`Event`]**: the continuation trait — one suspended step of a
//!   cooperative process, consumed when executed
//! - **[`ResourcePool`]**: finite-capacity servers with a FIFO waiting line
//!   and move-only [`SlotGuard`] release
//!
//! Concurrency here is interleaved, never parallel: exactly one continuation
//! runs at a time, and all shared state is mutated synchronously inside it.
//!
//! # Usage Example
//!
//! ```rust
//! use airport_security_simulator::engine::{Event, EventQueue, EngineResult, SimTime};
//!
//! struct Tick;
//!
//! impl Event<u32> for Tick {
//!     fn execute(self: Box<Self>, count: &mut u32, _queue: &mut EventQueue<u32>) -> EngineResult<()> {
//!         *count += 1;
//!         Ok(())
//!     }
//! }
//!
//! let mut queue = EventQueue::new();
//! let mut count = 0;
//! queue.schedule(1.0, Tick)?;
//! queue.schedule(2.0, Tick)?;
//! queue.run_until(&mut count, SimTime::from_minutes(10.0))?;
//! assert_eq!(count, 2);
//! # Ok::<(), airport_security_simulator::engine::EngineError>(())
//! ```

pub mod error;
pub mod event_queue;
pub mod resource;

// Re-export all public types for convenience
pub use error::*;
pub use event_queue::*;
pub use resource::*;
