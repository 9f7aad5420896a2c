//! Store Module
//!
//! Provides the in-memory key-value store with lazy TTL expiration.

mod entry;
mod expiring_store;
mod map;
mod stats;


// Re-export public types
pub use entry::Entry;
pub use expiring_store::ExpiringStore;
pub use map::{ConcurrentMap, LockedHashMap};
pub use stats::{StatsSnapshot, StoreStats};
