//! Expiring Store - A concurrent in-memory key-value store
//!
//! Entries may carry a TTL. Expired entries stay in the store until removed
//! or cleared and are classified as expired when read or counted.

pub mod config;
pub mod error;
pub mod shell;
pub mod store;

pub use config::Config;
pub use error::{ReadOutcome, Result, StoreError};
pub use store::{ConcurrentMap, Entry, ExpiringStore, LockedHashMap, StatsSnapshot};
