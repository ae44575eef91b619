//! Simulated clock and event queue
//!
//! The event queue is the heart of the engine: it holds pending continuations
//! ordered by `(due_time, sequence_number)` and advances the simulated clock
//! from event to event. Exactly one continuation executes at a time; two
//! events due at the same instant run in the order they were scheduled, so a
//! run is fully deterministic given a fixed random-number stream.

use crate::engine::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt;
use std::ops::Add;

/// A point in simulated time, measured in minutes since time zero.
///
/// Wraps `f64` so the event queue can keep a total order over due times.
/// Values are non-negative in practice; the clock never moves backwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SimTime(f64);

impl SimTime {
    /// Time zero, the start of every run.
    pub const ZERO: SimTime = SimTime(0.0);

    /// Create a simulated time from minutes since time zero.
    pub fn from_minutes(minutes: f64) -> Self {
        Self(minutes)
    }

    /// This time as minutes since time zero.
    pub fn as_minutes(&self) -> f64 {
        self.0
    }

    /// Minutes elapsed since an earlier time.
    pub fn duration_since(&self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }
}

impl Eq for SimTime {}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add<f64> for SimTime {
    type Output = SimTime;

    fn add(self, minutes: f64) -> Self::Output {
        SimTime(self.0 + minutes)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} min", self.0)
    }
}

/// A scheduled continuation.
///
/// Executing consumes the event: it is destroyed once run. An event may
/// mutate the shared simulation state and schedule further events, but it is
/// never preempted — control returns to the queue only when `execute`
/// returns.
pub trait Event<S> {
    /// Run this continuation against the simulation state.
    fn execute(self: Box<Self>, state: &mut S, queue: &mut EventQueue<S>) -> EngineResult<()>;
}

/// Heap entry: an event plus its ordering key.
struct Scheduled<S> {
    due: SimTime,
    seq: u64,
    event: Box<dyn Event<S>>,
}

impl<S> PartialEq for Scheduled<S> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<S> Eq for Scheduled<S> {}

impl<S> Ord for Scheduled<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Primary key: due time. Tiebreak: scheduling order.
        self.due.cmp(&other.due).then(self.seq.cmp(&other.seq))
    }
}

impl<S> PartialOrd for Scheduled<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The simulated clock and its pending events.
///
/// Generic over the simulation state `S` that events execute against. The
/// queue owns the clock: `current_time` is monotonically non-decreasing and
/// only moves when an event is popped.
pub struct EventQueue<S> {
    heap: BinaryHeap<Reverse<Scheduled<S>>>,
    now: SimTime,
    next_seq: u64,
}

impl<S> EventQueue<S> {
    /// Create an empty queue with the clock at time zero.
    pub fn new() -> Self {
        Self { heap: BinaryHeap::new(), now: SimTime::ZERO, next_seq: 0 }
    }

    /// The current simulated time.
    pub fn current_time(&self) -> SimTime {
        self.now
    }

    /// Number of events still pending.
    pub fn pending(&self) -> usize {
        self.heap.len()
    }

    /// Due time of the next event, if any.
    pub fn next_due(&self) -> Option<SimTime> {
        self.heap.peek().map(|Reverse(scheduled)| scheduled.due)
    }

    /// Schedule an event to run `delay` simulated minutes from now.
    ///
    /// Events scheduled for the same due time run in scheduling order.
    /// Fails with [`EngineError::InvalidDelay`] if `delay` is negative or
    /// not finite.
    pub fn schedule<E>(&mut self, delay: f64, event: E) -> EngineResult<()>
    where
        E: Event<S> + 'static,
    {
        if !delay.is_finite() || delay < 0.0 {
            return Err(EngineError::InvalidDelay { delay });
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Scheduled { due: self.now + delay, seq, event: Box::new(event) }));
        Ok(())
    }

    /// Spawn a new actor: schedule its first step at the current time.
    ///
    /// The spawned actor begins executing only after the spawner's current
    /// step yields control back to the queue, so spawn order is well-defined
    /// relative to the spawner's own subsequent steps.
    pub fn spawn<E>(&mut self, event: E) -> EngineResult<()>
    where
        E: Event<S> + 'static,
    {
        self.schedule(0.0, event)
    }

    /// Pop and execute the next event, moving the clock to its due time.
    ///
    /// Fails with [`EngineError::QueueExhausted`] when nothing is pending —
    /// a benign termination signal, not a fault.
    pub fn advance(&mut self, state: &mut S) -> EngineResult<()> {
        let Reverse(scheduled) = self.heap.pop().ok_or(EngineError::QueueExhausted)?;
        self.now = scheduled.due;
        scheduled.event.execute(state, self)
    }

    /// Execute every event due at or before `horizon`, then stop.
    ///
    /// Events due after the horizon are left unexecuted; they are discarded
    /// when the queue is dropped. On return the clock reads `horizon` (or
    /// later, if it was already past it).
    pub fn run_until(&mut self, state: &mut S, horizon: SimTime) -> EngineResult<()> {
        while self.next_due().is_some_and(|due| due <= horizon) {
            self.advance(state)?;
        }
        if horizon > self.now {
            self.now = horizon;
        }
        Ok(())
    }
}

impl<S> Default for EventQueue<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for EventQueue<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventQueue")
            .field("now", &self.now)
            .field("pending", &self.heap.len())
            .field("next_seq", &self.next_seq)
            .finish()
    }
}
