//! The passenger process
//!
//! A passenger is a cooperative process: arrive, line up for the ID check,
//! get checked, pick the scanner with the shortest line, line up, get
//! scanned, leave. Each suspension point (a wait for a slot, or a service
//! delay) is an explicit continuation — a [`ResumeEvent`] carrying the
//! reason the passenger woke up.
//!
//! Slot ownership is linear: a [`SlotGuard`] is minted when a pool grants a
//! slot, rides inside the wake events for the service phase, and is consumed
//! by the release at the end of it. There is no path on which a slot is
//! released twice or not at all.

use crate::checkpoint::simulation::CheckpointState;
use crate::engine::{Acquire, EngineResult, Event, EventQueue, SimTime, SlotGuard};
use crate::types::PassengerId;
use tracing::trace;

/// Where a passenger is in its trip through the checkpoint.
///
/// States advance strictly in declaration order; `Departed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassengerState {
    /// Just arrived, about to join the ID-check line.
    Arrived,
    /// In the shared ID-check line.
    AwaitingIdCheck,
    /// Being served by an ID checker.
    InIdCheck,
    /// In the line of one specific scanner.
    AwaitingScanner {
        /// Index of the scanner line joined.
        scanner: usize,
    },
    /// Being scanned.
    InScanner {
        /// Index of the scanner in use.
        scanner: usize,
    },
    /// Cleared security; system time has been logged.
    Departed,
}

/// One passenger moving through the checkpoint.
///
/// Both service durations are drawn once, at arrival, from the run's RNG:
/// the workload a seed produces is then a pure function of the arrival
/// sequence and does not shift when staffing levels change.
#[derive(Debug)]
pub struct Passenger {
    /// Arrival-order identifier.
    pub id: PassengerId,
    /// When the passenger reached the checkpoint.
    pub arrival_time: SimTime,
    /// ID-check service duration, in minutes.
    pub id_check_duration: f64,
    /// Body-scan service duration, in minutes.
    pub scan_duration: f64,
    /// Current position in the state machine.
    pub state: PassengerState,
}

impl Passenger {
    /// Create a passenger at its arrival instant with pre-drawn service times.
    pub fn new(
        id: PassengerId,
        arrival_time: SimTime,
        id_check_duration: f64,
        scan_duration: f64,
    ) -> Self {
        Self { id, arrival_time, id_check_duration, scan_duration, state: PassengerState::Arrived }
    }
}

/// Why a suspended passenger is being resumed.
#[derive(Debug)]
pub(crate) enum Wake {
    /// First step after spawning: join the ID-check line.
    Begin,
    /// An ID-check slot was granted; the guard is now this passenger's.
    IdCheckGranted(SlotGuard),
    /// The ID-check service delay elapsed; release the slot and route on.
    IdCheckDone(SlotGuard),
    /// A scanner slot was granted.
    ScannerGranted {
        /// Which scanner granted it.
        scanner: usize,
        /// The granted slot.
        slot: SlotGuard,
    },
    /// The scan service delay elapsed; release the slot and depart.
    ScanDone {
        /// Which scanner finished.
        scanner: usize,
        /// The slot to release.
        slot: SlotGuard,
    },
}

/// Continuation resuming one passenger's process.
#[derive(Debug)]
pub(crate) struct ResumeEvent {
    pub(crate) passenger: PassengerId,
    pub(crate) wake: Wake,
}

impl Event<CheckpointState> for ResumeEvent {
    fn execute(
        self: Box<Self>,
        state: &mut CheckpointState,
        queue: &mut EventQueue<CheckpointState>,
    ) -> EngineResult<()> {
        let ResumeEvent { passenger, wake } = *self;

        match wake {
            Wake::Begin => {
                state.set_passenger_state(passenger, PassengerState::AwaitingIdCheck);
                match state.model.id_check_mut().request(passenger) {
                    Acquire::Granted(slot) => begin_id_check(state, queue, passenger, slot),
                    Acquire::Enqueued => {
                        trace!(%passenger, time = %queue.current_time(), "queued for ID check");
                        Ok(())
                    }
                }
            }

            Wake::IdCheckGranted(slot) => begin_id_check(state, queue, passenger, slot),

            Wake::IdCheckDone(slot) => {
                if let Some((next, slot)) = state.model.id_check_mut().release(slot)? {
                    queue.spawn(ResumeEvent { passenger: next, wake: Wake::IdCheckGranted(slot) })?;
                }

                // Route at the instant the ID check completes: shortest
                // waiting line wins, ties to the lowest index.
                let scanner = state.model.shortest_scanner_queue();
                match state.model.scanner_mut(scanner).request(passenger) {
                    Acquire::Granted(slot) => begin_scan(state, queue, passenger, scanner, slot),
                    Acquire::Enqueued => {
                        state.set_passenger_state(
                            passenger,
                            PassengerState::AwaitingScanner { scanner },
                        );
                        trace!(%passenger, scanner, time = %queue.current_time(), "queued for scanner");
                        Ok(())
                    }
                }
            }

            Wake::ScannerGranted { scanner, slot } => {
                begin_scan(state, queue, passenger, scanner, slot)
            }

            Wake::ScanDone { scanner, slot } => {
                if let Some((next, slot)) = state.model.scanner_mut(scanner).release(slot)? {
                    queue.spawn(ResumeEvent {
                        passenger: next,
                        wake: Wake::ScannerGranted { scanner, slot },
                    })?;
                }

                state.record_departure(passenger, queue.current_time());
                Ok(())
            }
        }
    }
}

/// Enter ID-check service and schedule its completion.
fn begin_id_check(
    state: &mut CheckpointState,
    queue: &mut EventQueue<CheckpointState>,
    passenger: PassengerId,
    slot: SlotGuard,
) -> EngineResult<()> {
    // Passengers only leave the live set at departure, and no event for a
    // passenger outlives its departure.
    let Some(p) = state.passenger_mut(passenger) else { return Ok(()) };
    p.state = PassengerState::InIdCheck;
    let duration = p.id_check_duration;

    trace!(%passenger, duration, time = %queue.current_time(), "ID check started");
    queue.schedule(duration, ResumeEvent { passenger, wake: Wake::IdCheckDone(slot) })
}

/// Enter scanner service and schedule its completion.
fn begin_scan(
    state: &mut CheckpointState,
    queue: &mut EventQueue<CheckpointState>,
    passenger: PassengerId,
    scanner: usize,
    slot: SlotGuard,
) -> EngineResult<()> {
    let Some(p) = state.passenger_mut(passenger) else { return Ok(()) };
    p.state = PassengerState::InScanner { scanner };
    let duration = p.scan_duration;

    trace!(%passenger, scanner, duration, time = %queue.current_time(), "scan started");
    queue.schedule(duration, ResumeEvent { passenger, wake: Wake::ScanDone { scanner, slot } })
}
