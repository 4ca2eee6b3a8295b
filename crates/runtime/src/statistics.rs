//! Session statistics.
//!
//! Counters are atomics so they can be recorded and read through `&self`.

use std::sync::atomic::{AtomicU64, Ordering};

/// Running totals for one session.
#[derive(Debug, Default)]
pub struct ActionStatistics {
    /// Timeline entries that executed successfully
    executed: AtomicU64,

    /// Timeline entries rejected by validation
    failed: AtomicU64,

    /// HP removed by actions and area attacks
    total_damage: AtomicU64,

    /// HP restored by actions
    total_healing: AtomicU64,

    /// Units that dropped to 0 HP
    defeated: AtomicU64,
}

impl ActionStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&self, damage: u64, healing: u64, defeated: u64) {
        self.executed.fetch_add(1, Ordering::Relaxed);
        self.record_damage(damage, defeated);
        self.total_healing.fetch_add(healing, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Records damage that did not come from a timeline entry.
    pub fn record_damage(&self, damage: u64, defeated: u64) {
        self.total_damage.fetch_add(damage, Ordering::Relaxed);
        self.defeated.fetch_add(defeated, Ordering::Relaxed);
    }

    pub fn executed(&self) -> u64 {
        self.executed.load(Ordering::Relaxed)
    }

    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    /// Returns success rate as a percentage (0-100).
    pub fn success_rate(&self) -> f64 {
        let executed = self.executed();
        let total = executed + self.failed();

        if total == 0 {
            100.0
        } else {
            (executed as f64 / total as f64) * 100.0
        }
    }

    /// Creates a snapshot of all counters for display/logging.
    ///
    /// Individual fields are read atomically; the snapshot as a whole is not.
    pub fn snapshot(&self) -> StatisticsSnapshot {
        StatisticsSnapshot {
            actions_executed: self.executed(),
            actions_failed: self.failed(),
            total_damage: self.total_damage.load(Ordering::Relaxed),
            total_healing: self.total_healing.load(Ordering::Relaxed),
            units_defeated: self.defeated.load(Ordering::Relaxed),
            success_rate: self.success_rate(),
        }
    }
}

/// Snapshot of statistics at a point in time.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct StatisticsSnapshot {
    pub actions_executed: u64,
    pub actions_failed: u64,
    pub total_damage: u64,
    pub total_healing: u64,
    pub units_defeated: u64,
    pub success_rate: f64,
}
