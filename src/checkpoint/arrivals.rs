//! The Poisson arrival generator
//!
//! A single self-rescheduling event admits a passenger, spawns its process,
//! and books the next arrival one exponential gap later. One generator is
//! scheduled when a run starts; arrivals past the horizon sit in the queue
//! untouched and are discarded with it.

use crate::checkpoint::passenger::{ResumeEvent, Wake};
use crate::checkpoint::simulation::CheckpointState;
use crate::engine::{EngineResult, Event, EventQueue};
use tracing::trace;

/// Self-rescheduling Poisson arrival source.
#[derive(Debug)]
pub(crate) struct ArrivalEvent;

impl ArrivalEvent {
    /// Draw the next inter-arrival gap and book the next arrival.
    pub(crate) fn schedule_next(
        state: &mut CheckpointState,
        queue: &mut EventQueue<CheckpointState>,
    ) -> EngineResult<()> {
        let gap = state.draw_inter_arrival_gap();
        queue.schedule(gap, ArrivalEvent)
    }
}

impl Event<CheckpointState> for ArrivalEvent {
    fn execute(
        self: Box<Self>,
        state: &mut CheckpointState,
        queue: &mut EventQueue<CheckpointState>,
    ) -> EngineResult<()> {
        let now = queue.current_time();
        let passenger = state.admit_passenger(now);
        trace!(%passenger, time = %now, "passenger arrived");

        queue.spawn(ResumeEvent { passenger, wake: Wake::Begin })?;
        Self::schedule_next(state, queue)
    }
}
