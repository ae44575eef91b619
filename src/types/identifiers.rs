//! Identifier types for the checkpoint simulator
//!
//! Passenger identifiers are sequential within a run rather than random:
//! the arrival generator hands them out in arrival order, which keeps runs
//! reproducible and makes the system-time log easy to cross-reference.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a passenger, monotonically increasing within a run.
///
/// The first passenger of a run gets id 0; ids are never reused within a run
/// and carry no meaning across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PassengerId(u64);

impl PassengerId {
    /// Create a passenger id from its sequence number.
    pub fn new(sequence: u64) -> Self {
        Self(sequence)
    }

    /// The underlying sequence number (arrival order).
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PAX_{:06}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passenger_id_display() {
        assert_eq!(PassengerId::new(0).to_string(), "PAX_000000");
        assert_eq!(PassengerId::new(42).to_string(), "PAX_000042");
        assert_eq!(PassengerId::new(1_234_567).to_string(), "PAX_1234567");
    }

    #[test]
    fn test_passenger_id_ordering_matches_arrival_order() {
        let earlier = PassengerId::new(3);
        let later = PassengerId::new(4);
        assert!(earlier < later);
        assert_eq!(later.sequence(), 4);
    }

    #[test]
    fn test_passenger_id_serde_round_trip() {
        let pid = PassengerId::new(17);
        let json = serde_json::to_string(&pid).unwrap();
        let back: PassengerId = serde_json::from_str(&json).unwrap();
        assert_eq!(pid, back);
    }
}
