//! Store Statistics Module
//!
//! Tracks read outcomes with lock-free counters.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Store Stats ==
/// Read outcome counters shared by all callers of a store.
#[derive(Debug, Default)]
pub struct StoreStats {
    hits: AtomicU64,
    misses: AtomicU64,
    expired: AtomicU64,
}

impl StoreStats {
    // == Constructor ==
    /// Creates a new StoreStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record ==
    /// Counts a read that returned a live value.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Counts a read of an absent key.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Counts a read of an expired key.
    pub fn record_expired(&self) {
        self.expired.fetch_add(1, Ordering::Relaxed);
    }

    // == Snapshot ==
    /// Captures the counters together with the given entry counts.
    pub fn snapshot(&self, total_entries: usize, active_entries: usize) -> StatsSnapshot {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let expired = self.expired.load(Ordering::Relaxed);

        StatsSnapshot {
            hits,
            misses,
            expired,
            hit_rate: hit_rate(hits, misses, expired),
            total_entries,
            active_entries,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

// == Stats Snapshot ==
/// Point-in-time view of a store's counters and size.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    /// Reads that returned a value
    pub hits: u64,
    /// Reads of keys that were not present
    pub misses: u64,
    /// Reads of keys whose TTL had elapsed
    pub expired: u64,
    /// hits / (hits + misses + expired), 0.0 if nothing was read
    pub hit_rate: f64,
    /// Entries physically present, expired or not
    pub total_entries: usize,
    /// Entries not expired at snapshot time
    pub active_entries: usize,
    /// Snapshot time (RFC 3339)
    pub timestamp: String,
}

// == Hit Rate ==
fn hit_rate(hits: u64, misses: u64, expired: u64) -> f64 {
    let total = hits + misses + expired;
    if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let snapshot = StoreStats::new().snapshot(0, 0);
        assert_eq!(snapshot.hits, 0);
        assert_eq!(snapshot.misses, 0);
        assert_eq!(snapshot.expired, 0);
        assert_eq!(snapshot.total_entries, 0);
        assert_eq!(snapshot.active_entries, 0);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        let snapshot = StoreStats::new().snapshot(0, 0);
        assert_eq!(snapshot.hit_rate, 0.0);
    }

    #[test]
    fn test_hit_rate_all_hits() {
        let stats = StoreStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        assert_eq!(stats.snapshot(3, 3).hit_rate, 1.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let stats = StoreStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        stats.record_expired();
        assert_eq!(stats.snapshot(1, 1).hit_rate, 0.5);
    }

    #[test]
    fn test_snapshot_carries_counts() {
        let stats = StoreStats::new();
        stats.record_expired();
        stats.record_expired();

        let snapshot = stats.snapshot(42, 40);
        assert_eq!(snapshot.expired, 2);
        assert_eq!(snapshot.total_entries, 42);
        assert_eq!(snapshot.active_entries, 40);
    }

    #[test]
    fn test_snapshot_serializes() {
        let stats = StoreStats::new();
        stats.record_hit();

        let json = serde_json::to_value(stats.snapshot(1, 1)).unwrap();
        assert_eq!(json["hits"], 1);
        assert_eq!(json["hit_rate"], 1.0);
        assert_eq!(json["total_entries"], 1);
        assert!(json["timestamp"].is_string());
    }
}
