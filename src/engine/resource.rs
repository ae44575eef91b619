//! Finite-capacity resource pools with FIFO waiting lines
//!
//! A resource pool models a service station with a fixed number of identical
//! servers and a single waiting line. Requests are granted immediately while
//! capacity remains; otherwise the requester's token joins the line and the
//! slot is handed over, first come first served, as holders release.
//!
//! Release discipline is structural: a granted slot is represented by a
//! move-only [`SlotGuard`] that [`ResourcePool::release`] consumes by value,
//! so a slot cannot be released twice and cannot leak out of the process
//! that holds it.

use crate::engine::error::{EngineError, EngineResult};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

/// Distinguishes pools so a guard can only be released where it was minted.
static NEXT_POOL_ID: AtomicU64 = AtomicU64::new(0);

/// Proof of one held slot in one specific pool.
///
/// Deliberately neither `Clone` nor `Copy`: releasing consumes the guard, so
/// each granted slot is released exactly once on every path that carries it.
#[derive(Debug)]
pub struct SlotGuard {
    pool: u64,
}

/// Outcome of a [`ResourcePool::request`].
#[derive(Debug)]
pub enum Acquire {
    /// A slot was free: the requester holds it as of now.
    Granted(SlotGuard),
    /// All slots are busy: the requester's token joined the waiting line.
    Enqueued,
}

/// A finite-capacity server pool with a FIFO waiting line.
///
/// `T` is the waiter token stored for queued requests — typically a process
/// identifier the caller uses to resume the waiting process once granted.
///
/// Invariant: the number of occupied slots never exceeds `capacity`.
#[derive(Debug)]
pub struct ResourcePool<T> {
    id: u64,
    capacity: usize,
    in_service: usize,
    waiting: VecDeque<T>,
}

impl<T> ResourcePool<T> {
    /// Create a pool with `capacity` identical servers.
    ///
    /// Fails with [`EngineError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> EngineResult<Self> {
        if capacity == 0 {
            return Err(EngineError::InvalidCapacity { capacity });
        }
        Ok(Self {
            id: NEXT_POOL_ID.fetch_add(1, Ordering::Relaxed),
            capacity,
            in_service: 0,
            waiting: VecDeque::new(),
        })
    }

    /// Request a slot.
    ///
    /// Grants synchronously while occupancy is below capacity; otherwise the
    /// waiter token is appended to the line and the caller must suspend the
    /// process until a release hands it the slot.
    pub fn request(&mut self, waiter: T) -> Acquire {
        if self.in_service < self.capacity {
            self.in_service += 1;
            Acquire::Granted(SlotGuard { pool: self.id })
        } else {
            self.waiting.push_back(waiter);
            Acquire::Enqueued
        }
    }

    /// Release a held slot.
    ///
    /// If the line is non-empty the slot transfers directly to its head:
    /// the popped waiter token is returned together with a fresh guard, and
    /// the caller is responsible for resuming that process at the current
    /// simulated time (zero additional delay). Occupancy only drops when no
    /// one is waiting.
    ///
    /// Fails with [`EngineError::DoubleRelease`] if the guard was minted by
    /// a different pool or the pool holds no occupied slots.
    pub fn release(&mut self, guard: SlotGuard) -> EngineResult<Option<(T, SlotGuard)>> {
        if guard.pool != self.id || self.in_service == 0 {
            return Err(EngineError::DoubleRelease);
        }

        match self.waiting.pop_front() {
            Some(next) => Ok(Some((next, SlotGuard { pool: self.id }))),
            None => {
                self.in_service -= 1;
                Ok(None)
            }
        }
    }

    /// Number of requests currently waiting (granted slots excluded).
    ///
    /// This is the quantity routing policies inspect: pending-only count,
    /// never occupied slots.
    pub fn queue_length(&self) -> usize {
        self.waiting.len()
    }

    /// Number of currently occupied slots.
    pub fn in_service(&self) -> usize {
        self.in_service
    }

    /// The fixed capacity of this pool.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
