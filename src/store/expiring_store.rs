//! Expiring Store Module
//!
//! Key-value store over a concurrent map with lazy TTL expiration.

use std::time::Duration;

use dashmap::DashMap;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{ReadOutcome, Result, StoreError};
use crate::store::{ConcurrentMap, Entry, StatsSnapshot, StoreStats};

// == Expiring Store ==
/// Concurrent key-value store whose entries may expire.
///
/// Expired entries stay in the map until removed or cleared; they are only
/// classified as expired when read or counted. All methods take `&self`,
/// share the store across threads with an `Arc`.
#[derive(Debug)]
pub struct ExpiringStore<M = DashMap<String, Entry>> {
    /// Key-value storage
    entries: M,
    /// Read outcome counters
    stats: StoreStats,
}

impl ExpiringStore {
    // == Constructors ==
    /// Creates an empty store backed by a `DashMap`.
    pub fn new() -> Self {
        Self::with_map(DashMap::new())
    }

    /// Creates an empty `DashMap`-backed store sized from the Config.
    pub fn from_config(config: &Config) -> Self {
        let map = match config.valid_shard_amount() {
            Some(shards) => DashMap::with_capacity_and_shard_amount(config.initial_capacity, shards),
            None => DashMap::with_capacity(config.initial_capacity),
        };
        info!(
            "Store created: initial_capacity={}, shard_amount={:?}",
            config.initial_capacity,
            config.valid_shard_amount()
        );
        Self::with_map(map)
    }
}

impl Default for ExpiringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: ConcurrentMap<Entry>> ExpiringStore<M> {
    /// Creates a store over an injected container.
    pub fn with_map(entries: M) -> Self {
        Self {
            entries,
            stats: StoreStats::new(),
        }
    }

    // == Write ==
    /// Stores a value that never expires, replacing any existing entry.
    pub fn write(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.put(key.into(), Entry::new(value));
    }

    /// Stores a value that expires `ttl_seconds` from now, replacing any
    /// existing entry. A TTL of zero or less stores an already expired entry.
    pub fn write_with_expiration(
        &self,
        key: impl Into<String>,
        value: impl Into<String>,
        ttl_seconds: i64,
    ) {
        self.entries
            .put(key.into(), Entry::with_expiration(value, ttl_seconds));
    }

    // == Read ==
    /// Retrieves a live value by key.
    ///
    /// # Errors
    /// - `StoreError::NotFound` if the key is absent
    /// - `StoreError::Expired` if the key is present but its TTL has elapsed
    pub fn read(&self, key: &str) -> Result<String> {
        let found = self.entries.get_with(key, |entry| {
            if entry.is_expired() {
                None
            } else {
                Some(entry.value().to_string())
            }
        });

        match found {
            Some(Some(value)) => {
                self.stats.record_hit();
                Ok(value)
            }
            Some(None) => {
                self.stats.record_expired();
                Err(StoreError::Expired(key.to_string()))
            }
            None => {
                self.stats.record_miss();
                Err(StoreError::NotFound(key.to_string()))
            }
        }
    }

    /// Reads a key as a value and outcome pair.
    ///
    /// The value is empty unless the outcome is `ReadOutcome::Success`.
    pub fn read_outcome(&self, key: &str) -> (String, ReadOutcome) {
        match self.read(key) {
            Ok(value) => (value, ReadOutcome::Success),
            Err(err) => (String::new(), err.outcome()),
        }
    }

    // == TTL ==
    /// Returns the remaining TTL of a live key, None if it never expires.
    ///
    /// Fails the same way `read` does. Does not count towards the stats.
    pub fn ttl(&self, key: &str) -> Result<Option<Duration>> {
        match self.entries.get_with(key, |entry| {
            (!entry.is_expired()).then(|| entry.ttl_remaining())
        }) {
            Some(Some(remaining)) => Ok(remaining),
            Some(None) => Err(StoreError::Expired(key.to_string())),
            None => Err(StoreError::NotFound(key.to_string())),
        }
    }

    // == Exists ==
    /// Returns true if the key is physically present, expired or not.
    pub fn exists(&self, key: &str) -> bool {
        self.entries.has(key)
    }

    // == Remove ==
    /// Removes a key. Removing an absent key is a no-op.
    ///
    /// Returns whether the key was present.
    pub fn remove(&self, key: &str) -> bool {
        self.entries.delete(key)
    }

    // == Clear ==
    /// Removes every entry.
    pub fn clear(&self) {
        let before = self.entries.count();
        self.entries.clear_all();
        debug!("Store cleared: {} entries dropped", before);
    }

    // == Counts ==
    /// Number of entries physically present, expired or not.
    pub fn count_all(&self) -> usize {
        self.entries.count()
    }

    /// Number of entries not expired right now.
    ///
    /// Scans every entry. Concurrent writers may or may not be observed.
    pub fn count_active(&self) -> usize {
        let mut active = 0;
        self.entries.for_each(|_, entry| {
            if !entry.is_expired() {
                active += 1;
            }
        });
        active
    }

    // == Stats ==
    /// Returns read statistics and current entry counts.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot(self.count_all(), self.count_active())
    }
}
