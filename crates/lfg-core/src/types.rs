//! Domain types for the LFG simulator.
//!
//! These types represent parties, role counts, and instance state as seen
//! by reporting. All of them are serializable so snapshots can be dumped
//! or inspected without touching the live state.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Stable identity of a dungeon instance (1..=N for the process lifetime).
pub type InstanceId = u32;

/// Tanks consumed by one party.
pub const TANKS_PER_PARTY: u32 = 1;
/// Healers consumed by one party.
pub const HEALERS_PER_PARTY: u32 = 1;
/// DPS consumed by one party.
pub const DPS_PER_PARTY: u32 = 3;

/// Per-role player counts.
///
/// Used both as the roster's live ledger value and as its reporting
/// snapshot. The arithmetic here is pure; exclusive access is the
/// roster's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCounts {
    pub tanks: u32,
    pub healers: u32,
    pub dps: u32,
}

impl RoleCounts {
    pub fn new(tanks: u32, healers: u32, dps: u32) -> Self {
        Self {
            tanks,
            healers,
            dps,
        }
    }

    /// Whether a full party (1 tank, 1 healer, 3 DPS) can be formed.
    pub fn can_form(&self) -> bool {
        self.tanks >= TANKS_PER_PARTY
            && self.healers >= HEALERS_PER_PARTY
            && self.dps >= DPS_PER_PARTY
    }

    /// How many full parties these counts could still form.
    pub fn max_parties(&self) -> u32 {
        (self.tanks / TANKS_PER_PARTY)
            .min(self.healers / HEALERS_PER_PARTY)
            .min(self.dps / DPS_PER_PARTY)
    }

    /// Total players across all roles.
    pub fn total(&self) -> u32 {
        self.tanks + self.healers + self.dps
    }
}

/// Read-only view of one instance for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceSnapshot {
    pub id: InstanceId,
    pub occupied: bool,
    /// Completed runs hosted by this instance.
    pub parties_served: u32,
    /// Cumulative simulated time across completed runs.
    pub total_time: Duration,
}

/// Inclusive range of simulated clear times, in whole seconds.
///
/// The configuration layer guarantees `0 < min < max` for operator input;
/// the range itself also accepts `min == max` (a fixed clear time), which
/// tests rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearTimeRange {
    min: Duration,
    max: Duration,
}

impl ClearTimeRange {
    pub fn from_secs(min: u64, max: u64) -> Self {
        Self {
            min: Duration::from_secs(min),
            max: Duration::from_secs(max),
        }
    }

    pub fn min_secs(&self) -> u64 {
        self.min.as_secs()
    }

    pub fn max_secs(&self) -> u64 {
        self.max.as_secs()
    }

    pub fn contains(&self, elapsed: Duration) -> bool {
        self.min <= elapsed && elapsed <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_form_requires_full_party() {
        assert!(RoleCounts::new(1, 1, 3).can_form());
        assert!(!RoleCounts::new(0, 1, 3).can_form());
        assert!(!RoleCounts::new(1, 0, 3).can_form());
        assert!(!RoleCounts::new(1, 1, 2).can_form());
    }

    #[test]
    fn max_parties_is_bottlenecked_by_scarcest_role() {
        assert_eq!(RoleCounts::new(2, 2, 6).max_parties(), 2);
        assert_eq!(RoleCounts::new(1, 5, 5).max_parties(), 1);
        assert_eq!(RoleCounts::new(0, 4, 2).max_parties(), 0);
        // DPS count in 3..5 still yields only one party.
        assert_eq!(RoleCounts::new(10, 10, 5).max_parties(), 1);
    }

    #[test]
    fn total_sums_all_roles() {
        assert_eq!(RoleCounts::new(1, 2, 3).total(), 6);
        assert_eq!(RoleCounts::new(0, 0, 0).total(), 0);
    }

    #[test]
    fn clear_time_range_contains_is_inclusive() {
        let range = ClearTimeRange::from_secs(1, 3);
        assert!(range.contains(Duration::from_secs(1)));
        assert!(range.contains(Duration::from_secs(2)));
        assert!(range.contains(Duration::from_secs(3)));
        assert!(!range.contains(Duration::from_millis(999)));
        assert!(!range.contains(Duration::from_secs(4)));
    }

    #[test]
    fn degenerate_range_contains_only_its_value() {
        let range = ClearTimeRange::from_secs(2, 2);
        assert!(range.contains(Duration::from_secs(2)));
        assert!(!range.contains(Duration::from_secs(1)));
        assert!(!range.contains(Duration::from_secs(3)));
    }

    #[test]
    fn instance_snapshot_serializes_to_json() {
        let snapshot = InstanceSnapshot {
            id: 1,
            occupied: false,
            parties_served: 3,
            total_time: Duration::from_secs(7),
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: InstanceSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
