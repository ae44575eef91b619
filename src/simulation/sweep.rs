//! The staffing sweep
//!
//! Runs one independent, identically-seeded simulation per staffing
//! configuration over the configured grid, collects the configurations that
//! meet the wait-time target, and recommends the cheapest one.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::checkpoint::{CheckpointParameters, CheckpointSimulation};
use crate::simulation::error::SimulationResult;
use crate::simulation::statistics::{CandidateSolution, RunStatistics};
use crate::types::SimulationConfig;

/// Result of evaluating one staffing configuration.
///
/// `statistics` is `None` when no passenger completed within the horizon.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigurationOutcome {
    /// ID checkers on duty.
    pub id_checkers: usize,
    /// Scanner lanes open.
    pub scanners: usize,
    /// Aggregates of the run, when anybody completed.
    pub statistics: Option<RunStatistics>,
}

/// Everything the sweep learned, ready for reporting or serialization.
#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    /// Every configuration evaluated, in sweep order.
    pub evaluated: Vec<ConfigurationOutcome>,
    /// Configurations whose average system time beat the target.
    pub solutions: Vec<CandidateSolution>,
}

impl SweepReport {
    /// The cheapest viable configuration: fewest total staff, with ties
    /// going to the configuration evaluated first.
    pub fn best_solution(&self) -> Option<&CandidateSolution> {
        self.solutions.iter().min_by_key(|s| s.total_staff)
    }

    /// Write the report as pretty-printed JSON.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> SimulationResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        info!(path = %path.as_ref().display(), "sweep report written");
        Ok(())
    }
}

/// Grid search over staffing levels.
#[derive(Debug)]
pub struct StaffingSweep {
    config: SimulationConfig,
    params: CheckpointParameters,
}

impl StaffingSweep {
    /// Build a sweep from a validated configuration.
    pub fn new(config: SimulationConfig) -> SimulationResult<Self> {
        config.validate()?;
        let params = CheckpointParameters::from(&config);
        params.validate()?;
        Ok(Self { config, params })
    }

    /// Evaluate every configuration in the grid.
    ///
    /// Each cell gets a fresh simulation with the same seed, so every
    /// configuration faces an identical arrival workload and the cells
    /// are comparable.
    #[instrument(skip(self), fields(grid = self.config.sweep_size()))]
    pub fn run(&self) -> SimulationResult<SweepReport> {
        let mut evaluated = Vec::with_capacity(self.config.sweep_size());
        let mut solutions = Vec::new();

        for id_checkers in self.config.id_checker_range() {
            for scanners in self.config.scanner_range() {
                let mut sim = CheckpointSimulation::new(
                    &self.params,
                    id_checkers,
                    scanners,
                    self.config.seed,
                )?;
                sim.run(self.config.horizon)?;

                let statistics = RunStatistics::from_log(sim.system_times());
                match statistics {
                    Some(stats) => {
                        info!(
                            id_checkers,
                            scanners,
                            completed = stats.completed,
                            average = stats.average_system_time,
                            "configuration evaluated"
                        );
                        if stats.average_system_time < self.config.target_avg_time {
                            solutions.push(CandidateSolution {
                                id_checkers,
                                scanners,
                                total_staff: id_checkers + scanners,
                                average_system_time: stats.average_system_time,
                                max_system_time: stats.max_system_time,
                            });
                        }
                    }
                    None => {
                        warn!(id_checkers, scanners, "no passengers completed within horizon");
                    }
                }

                evaluated.push(ConfigurationOutcome { id_checkers, scanners, statistics });
            }
        }

        info!(
            evaluated = evaluated.len(),
            viable = solutions.len(),
            "staffing sweep finished"
        );
        Ok(SweepReport { evaluated, solutions })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solution(id_checkers: usize, scanners: usize, avg: f64) -> CandidateSolution {
        CandidateSolution {
            id_checkers,
            scanners,
            total_staff: id_checkers + scanners,
            average_system_time: avg,
            max_system_time: avg * 2.0,
        }
    }

    #[test]
    fn test_best_solution_prefers_fewest_staff() {
        let report = SweepReport {
            evaluated: Vec::new(),
            solutions: vec![solution(3, 4, 10.0), solution(2, 3, 12.0), solution(4, 5, 8.0)],
        };
        let best = report.best_solution().unwrap();
        assert_eq!((best.id_checkers, best.scanners), (2, 3));
    }

    #[test]
    fn test_best_solution_ties_go_to_first_evaluated() {
        let report = SweepReport {
            evaluated: Vec::new(),
            solutions: vec![solution(2, 3, 10.0), solution(3, 2, 5.0)],
        };
        let best = report.best_solution().unwrap();
        assert_eq!((best.id_checkers, best.scanners), (2, 3));
    }

    #[test]
    fn test_best_solution_empty() {
        let report = SweepReport { evaluated: Vec::new(), solutions: Vec::new() };
        assert!(report.best_solution().is_none());
    }
}
