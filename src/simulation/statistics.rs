//! Per-run results: the system-time log and its aggregates

use serde::Serialize;

use crate::types::PassengerId;

/// One completed passenger's time in system.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemTimeEntry {
    /// Who completed.
    pub passenger: PassengerId,
    /// Minutes from arrival to departure.
    pub time_in_system: f64,
}

/// Completion log of a single run, in departure order.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct SystemTimeLog {
    entries: Vec<SystemTimeEntry>,
}

impl SystemTimeLog {
    pub(crate) fn record(&mut self, passenger: PassengerId, time_in_system: f64) {
        self.entries.push(SystemTimeEntry { passenger, time_in_system });
    }

    /// Number of completed passengers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nobody completed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in departure order.
    pub fn entries(&self) -> &[SystemTimeEntry] {
        &self.entries
    }

    /// Iterate over entries in departure order.
    pub fn iter(&self) -> impl Iterator<Item = &SystemTimeEntry> {
        self.entries.iter()
    }

    /// Mean time in system, or `None` when nobody completed.
    pub fn average(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let total: f64 = self.entries.iter().map(|e| e.time_in_system).sum();
        Some(total / self.entries.len() as f64)
    }

    /// Worst time in system, or `None` when nobody completed.
    pub fn max(&self) -> Option<f64> {
        self.entries
            .iter()
            .map(|e| e.time_in_system)
            .fold(None, |acc, t| Some(acc.map_or(t, |m: f64| m.max(t))))
    }
}

/// Aggregate statistics for one staffing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunStatistics {
    /// How many passengers cleared security.
    pub completed: usize,
    /// Mean minutes in system across completed passengers.
    pub average_system_time: f64,
    /// Worst minutes in system across completed passengers.
    pub max_system_time: f64,
}

impl RunStatistics {
    /// Summarize a completion log; `None` when the log is empty.
    pub fn from_log(log: &SystemTimeLog) -> Option<Self> {
        Some(Self {
            completed: log.len(),
            average_system_time: log.average()?,
            max_system_time: log.max()?,
        })
    }
}

/// A staffing configuration that met the wait-time target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CandidateSolution {
    /// ID checkers on duty.
    pub id_checkers: usize,
    /// Scanner lanes open.
    pub scanners: usize,
    /// `id_checkers + scanners`.
    pub total_staff: usize,
    /// Mean minutes in system for this configuration.
    pub average_system_time: f64,
    /// Worst minutes in system for this configuration.
    pub max_system_time: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_of(times: &[f64]) -> SystemTimeLog {
        let mut log = SystemTimeLog::default();
        for (i, &t) in times.iter().enumerate() {
            log.record(PassengerId::new(i as u64), t);
        }
        log
    }

    #[test]
    fn test_empty_log_has_no_aggregates() {
        let log = SystemTimeLog::default();
        assert!(log.is_empty());
        assert_eq!(log.average(), None);
        assert_eq!(log.max(), None);
        assert!(RunStatistics::from_log(&log).is_none());
    }

    #[test]
    fn test_average_and_max() {
        let log = log_of(&[2.0, 4.0, 6.0]);
        assert_eq!(log.average(), Some(4.0));
        assert_eq!(log.max(), Some(6.0));

        let stats = RunStatistics::from_log(&log).unwrap();
        assert_eq!(stats.completed, 3);
        assert_eq!(stats.average_system_time, 4.0);
        assert_eq!(stats.max_system_time, 6.0);
    }

    #[test]
    fn test_entries_keep_departure_order() {
        let log = log_of(&[5.0, 1.0, 3.0]);
        let times: Vec<f64> = log.iter().map(|e| e.time_in_system).collect();
        assert_eq!(times, vec![5.0, 1.0, 3.0]);
    }
}
