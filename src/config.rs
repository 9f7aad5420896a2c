//! Configuration Module
//!
//! Handles loading store configuration from environment variables.

use std::env;

/// Store configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of entries the map preallocates room for
    pub initial_capacity: usize,
    /// Number of map shards, None = let the map decide
    pub shard_amount: Option<usize>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `STORE_INITIAL_CAPACITY` - Preallocated entries (default: 1024)
    /// - `STORE_SHARD_AMOUNT` - Shard count, a power of two above 1 (default: unset)
    pub fn from_env() -> Self {
        Self {
            initial_capacity: env::var("STORE_INITIAL_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1024),
            shard_amount: env::var("STORE_SHARD_AMOUNT")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n| is_valid_shard_amount(*n)),
        }
    }

    /// Returns the shard amount if it is one the map accepts.
    pub fn valid_shard_amount(&self) -> Option<usize> {
        self.shard_amount.filter(|n| is_valid_shard_amount(*n))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_capacity: 1024,
            shard_amount: None,
        }
    }
}

fn is_valid_shard_amount(n: usize) -> bool {
    n > 1 && n.is_power_of_two()
}
