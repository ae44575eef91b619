//! Checkpoint topology and scanner routing
//!
//! The two-stage checkpoint is wired as one shared ID-check pool (a single
//! FIFO line feeding `num_id_checkers` parallel servers) followed by
//! `num_scanners` independent single-server scanner pools, each with its own
//! line. A passenger commits to one scanner line before joining it.

use crate::engine::{EngineError, EngineResult, ResourcePool};
use crate::types::PassengerId;

/// The resource pools of one checkpoint, fixed for the duration of a run.
#[derive(Debug)]
pub struct CheckpointModel {
    /// Shared ID/boarding-pass check station: one line, many servers.
    id_check: ResourcePool<PassengerId>,
    /// Personal scanners: separate lines, one server each.
    scanners: Vec<ResourcePool<PassengerId>>,
}

impl CheckpointModel {
    /// Build a checkpoint with the given staffing level.
    ///
    /// Fails with [`EngineError::InvalidCapacity`] if either count is zero —
    /// a checkpoint with no scanners is a misconfiguration, not an empty run.
    pub fn new(num_id_checkers: usize, num_scanners: usize) -> EngineResult<Self> {
        if num_scanners == 0 {
            return Err(EngineError::InvalidCapacity { capacity: 0 });
        }

        let id_check = ResourcePool::new(num_id_checkers)?;
        let scanners = (0..num_scanners)
            .map(|_| ResourcePool::new(1))
            .collect::<EngineResult<Vec<_>>>()?;

        Ok(Self { id_check, scanners })
    }

    /// Number of ID checkers staffing the shared line.
    pub fn num_id_checkers(&self) -> usize {
        self.id_check.capacity()
    }

    /// Number of scanner stations.
    pub fn num_scanners(&self) -> usize {
        self.scanners.len()
    }

    /// Pick the scanner with the shortest waiting line.
    ///
    /// Greedy and myopic on purpose: only the waiting count is inspected,
    /// never the remaining service time of whoever is in the scanner, and
    /// the choice is not revisited once made. Ties go to the lowest index.
    pub fn shortest_scanner_queue(&self) -> usize {
        let mut best = 0;
        for (index, scanner) in self.scanners.iter().enumerate().skip(1) {
            if scanner.queue_length() < self.scanners[best].queue_length() {
                best = index;
            }
        }
        best
    }

    /// Waiting-line length of every scanner, in index order.
    pub fn scanner_queue_lengths(&self) -> Vec<usize> {
        self.scanners.iter().map(ResourcePool::queue_length).collect()
    }

    /// The shared ID-check pool.
    pub fn id_check(&self) -> &ResourcePool<PassengerId> {
        &self.id_check
    }

    /// One scanner pool by index.
    pub fn scanner(&self, index: usize) -> &ResourcePool<PassengerId> {
        &self.scanners[index]
    }

    pub(crate) fn id_check_mut(&mut self) -> &mut ResourcePool<PassengerId> {
        &mut self.id_check
    }

    pub(crate) fn scanner_mut(&mut self, index: usize) -> &mut ResourcePool<PassengerId> {
        &mut self.scanners[index]
    }
}
