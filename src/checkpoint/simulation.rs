//! Assembling and running one checkpoint simulation
//!
//! [`CheckpointSimulation`] wires the event queue, the station model, the
//! seeded RNG, and the system-time log together for a single staffing
//! configuration, and runs it to a fixed horizon. The same seed with the
//! same parameters always produces the same log.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Exp, Uniform};
use tracing::{debug, info};

use crate::checkpoint::arrivals::ArrivalEvent;
use crate::checkpoint::model::CheckpointModel;
use crate::checkpoint::passenger::{Passenger, PassengerState};
use crate::engine::{EventQueue, SimTime};
use crate::simulation::error::{SimulationError, SimulationResult};
use crate::simulation::statistics::SystemTimeLog;
use crate::types::{PassengerId, SimulationConfig};

/// Arrival and service-time parameters, independent of staffing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckpointParameters {
    /// Passenger arrivals per minute (Poisson rate).
    pub arrival_rate: f64,
    /// Mean ID-check service time in minutes (exponential).
    pub mean_id_check_time: f64,
    /// Lower bound of the uniform scan time, in minutes.
    pub min_scan_time: f64,
    /// Upper bound of the uniform scan time, in minutes.
    pub max_scan_time: f64,
}

impl Default for CheckpointParameters {
    fn default() -> Self {
        Self {
            arrival_rate: 50.0,
            mean_id_check_time: 0.75,
            min_scan_time: 0.5,
            max_scan_time: 1.0,
        }
    }
}

impl From<&SimulationConfig> for CheckpointParameters {
    fn from(config: &SimulationConfig) -> Self {
        Self {
            arrival_rate: config.arrival_rate,
            mean_id_check_time: config.mean_id_check_time,
            min_scan_time: config.min_scan_time,
            max_scan_time: config.max_scan_time,
        }
    }
}

impl CheckpointParameters {
    /// Reject parameters the distributions cannot be built from.
    pub fn validate(&self) -> SimulationResult<()> {
        if !self.arrival_rate.is_finite() || self.arrival_rate <= 0.0 {
            return Err(SimulationError::InvalidRate {
                parameter: "arrival_rate",
                value: self.arrival_rate,
            });
        }
        if !self.mean_id_check_time.is_finite() || self.mean_id_check_time <= 0.0 {
            return Err(SimulationError::InvalidRate {
                parameter: "mean_id_check_time",
                value: self.mean_id_check_time,
            });
        }
        if !self.min_scan_time.is_finite() || self.min_scan_time <= 0.0 {
            return Err(SimulationError::InvalidRate {
                parameter: "min_scan_time",
                value: self.min_scan_time,
            });
        }
        if !self.max_scan_time.is_finite() || self.max_scan_time < self.min_scan_time {
            return Err(SimulationError::InvalidRate {
                parameter: "max_scan_time",
                value: self.max_scan_time,
            });
        }
        Ok(())
    }
}

/// Mutable world the event queue executes against.
pub(crate) struct CheckpointState {
    pub(crate) model: CheckpointModel,
    passengers: HashMap<PassengerId, Passenger>,
    rng: StdRng,
    inter_arrival: Exp<f64>,
    id_check_times: Exp<f64>,
    scan_times: Uniform<f64>,
    next_passenger: u64,
    log: SystemTimeLog,
}

impl std::fmt::Debug for CheckpointState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckpointState")
            .field("model", &self.model)
            .field("passengers", &self.passengers.len())
            .field("next_passenger", &self.next_passenger)
            .field("log", &self.log.len())
            .finish()
    }
}

impl CheckpointState {
    fn new(
        params: &CheckpointParameters,
        model: CheckpointModel,
        seed: u64,
    ) -> SimulationResult<Self> {
        let inter_arrival = Exp::new(params.arrival_rate).map_err(|_| {
            SimulationError::InvalidRate { parameter: "arrival_rate", value: params.arrival_rate }
        })?;
        let id_check_times = Exp::new(1.0 / params.mean_id_check_time).map_err(|_| {
            SimulationError::InvalidRate {
                parameter: "mean_id_check_time",
                value: params.mean_id_check_time,
            }
        })?;
        let scan_times = Uniform::new_inclusive(params.min_scan_time, params.max_scan_time);

        Ok(Self {
            model,
            passengers: HashMap::new(),
            rng: StdRng::seed_from_u64(seed),
            inter_arrival,
            id_check_times,
            scan_times,
            next_passenger: 0,
            log: SystemTimeLog::default(),
        })
    }

    /// Exponential gap to the next arrival, in minutes.
    pub(crate) fn draw_inter_arrival_gap(&mut self) -> f64 {
        self.inter_arrival.sample(&mut self.rng)
    }

    /// Register a new passenger, drawing both of its service times now.
    ///
    /// Drawing at admission pins the workload to the arrival sequence, so
    /// runs with the same seed see identical passengers regardless of how
    /// many staff serve them.
    pub(crate) fn admit_passenger(&mut self, now: SimTime) -> PassengerId {
        let id = PassengerId::new(self.next_passenger);
        self.next_passenger += 1;

        let id_check_duration = self.id_check_times.sample(&mut self.rng);
        let scan_duration = self.scan_times.sample(&mut self.rng);
        self.passengers.insert(id, Passenger::new(id, now, id_check_duration, scan_duration));
        id
    }

    pub(crate) fn passenger_mut(&mut self, id: PassengerId) -> Option<&mut Passenger> {
        self.passengers.get_mut(&id)
    }

    pub(crate) fn set_passenger_state(&mut self, id: PassengerId, state: PassengerState) {
        if let Some(p) = self.passengers.get_mut(&id) {
            p.state = state;
        }
    }

    /// Log the passenger's time in system and drop it from the live set.
    pub(crate) fn record_departure(&mut self, id: PassengerId, now: SimTime) {
        let Some(p) = self.passengers.remove(&id) else { return };
        let time_in_system = now.duration_since(p.arrival_time);
        debug!(passenger = %id, time_in_system, "passenger departed");
        self.log.record(id, time_in_system);
    }
}

/// One seeded run of the checkpoint at a fixed staffing level.
#[derive(Debug)]
pub struct CheckpointSimulation {
    queue: EventQueue<CheckpointState>,
    state: CheckpointState,
    started: bool,
}

impl CheckpointSimulation {
    /// Build a runnable simulation for the given staffing configuration.
    pub fn new(
        params: &CheckpointParameters,
        num_id_checkers: usize,
        num_scanners: usize,
        seed: u64,
    ) -> SimulationResult<Self> {
        params.validate()?;
        let model = CheckpointModel::new(num_id_checkers, num_scanners)?;
        let state = CheckpointState::new(params, model, seed)?;

        info!(num_id_checkers, num_scanners, seed, "checkpoint simulation ready");
        Ok(Self { queue: EventQueue::new(), state, started: false })
    }

    /// Run the simulation up to `horizon` minutes.
    ///
    /// A simulation runs once; calling this a second time is an error.
    pub fn run(&mut self, horizon: f64) -> SimulationResult<()> {
        if self.started {
            return Err(SimulationError::ConfigurationError(
                "simulation has already been run".to_string(),
            ));
        }
        self.started = true;

        ArrivalEvent::schedule_next(&mut self.state, &mut self.queue)?;
        self.queue.run_until(&mut self.state, SimTime::from_minutes(horizon))?;

        debug!(
            horizon,
            completed = self.state.log.len(),
            in_flight = self.state.passengers.len(),
            "run finished"
        );
        Ok(())
    }

    /// Current simulation clock.
    pub fn current_time(&self) -> SimTime {
        self.queue.current_time()
    }

    /// System times of every passenger that completed so far.
    pub fn system_times(&self) -> &SystemTimeLog {
        &self.state.log
    }

    /// Consume the simulation, keeping only its completion log.
    pub fn into_system_times(self) -> SystemTimeLog {
        self.state.log
    }

    /// How many passengers entered the system.
    pub fn passengers_spawned(&self) -> u64 {
        self.state.next_passenger
    }

    /// How many passengers were still in the system when the run stopped.
    pub fn passengers_in_flight(&self) -> usize {
        self.state.passengers.len()
    }

    /// The station model (staffing and queue lengths).
    pub fn model(&self) -> &CheckpointModel {
        &self.state.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn light_params() -> CheckpointParameters {
        CheckpointParameters {
            arrival_rate: 2.0,
            mean_id_check_time: 0.2,
            min_scan_time: 0.1,
            max_scan_time: 0.2,
        }
    }

    #[test]
    fn test_default_parameters() {
        let p = CheckpointParameters::default();
        assert_eq!(p.arrival_rate, 50.0);
        assert_eq!(p.mean_id_check_time, 0.75);
        assert_eq!(p.min_scan_time, 0.5);
        assert_eq!(p.max_scan_time, 1.0);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_nonpositive_arrival_rate() {
        let p = CheckpointParameters { arrival_rate: 0.0, ..Default::default() };
        assert!(matches!(
            p.validate(),
            Err(SimulationError::InvalidRate { parameter: "arrival_rate", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_scan_window() {
        let p = CheckpointParameters { min_scan_time: 1.0, max_scan_time: 0.5, ..Default::default() };
        assert!(matches!(
            p.validate(),
            Err(SimulationError::InvalidRate { parameter: "max_scan_time", .. })
        ));
    }

    #[test]
    fn test_run_completes_passengers() {
        let mut sim = CheckpointSimulation::new(&light_params(), 2, 2, 7).unwrap();
        sim.run(120.0).unwrap();
        assert!(!sim.system_times().is_empty());
        assert_eq!(sim.current_time(), SimTime::from_minutes(120.0));
    }

    #[test]
    fn test_run_twice_is_an_error() {
        let mut sim = CheckpointSimulation::new(&light_params(), 1, 1, 7).unwrap();
        sim.run(10.0).unwrap();
        assert!(matches!(sim.run(10.0), Err(SimulationError::ConfigurationError(_))));
    }

    #[test]
    fn test_conservation_of_passengers() {
        let mut sim = CheckpointSimulation::new(&light_params(), 1, 1, 11).unwrap();
        sim.run(60.0).unwrap();
        let completed = sim.system_times().len() as u64;
        let in_flight = sim.passengers_in_flight() as u64;
        assert_eq!(sim.passengers_spawned(), completed + in_flight);
    }

    #[test]
    fn test_same_seed_same_log() {
        let run = |seed| {
            let mut sim = CheckpointSimulation::new(&light_params(), 2, 3, seed).unwrap();
            sim.run(90.0).unwrap();
            sim.into_system_times()
        };
        assert_eq!(run(42), run(42));
        assert_ne!(run(42), run(43));
    }

    #[test]
    fn test_zero_horizon_completes_nobody() {
        let mut sim = CheckpointSimulation::new(&light_params(), 1, 1, 5).unwrap();
        sim.run(0.0).unwrap();
        assert!(sim.system_times().is_empty());
        assert_eq!(sim.current_time(), SimTime::ZERO);
    }
}
