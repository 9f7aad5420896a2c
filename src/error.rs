//! Error types for the expiring store
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Store Error Enum ==
/// Outcome of a read that did not produce a value.
///
/// Both variants are expected results, not failures of the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Key was never written, or was removed or cleared
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Key is present but its TTL has elapsed
    #[error("Key expired: {0}")]
    Expired(String),
}

impl StoreError {
    pub fn outcome(&self) -> ReadOutcome {
        match self {
            StoreError::NotFound(_) => ReadOutcome::NotFound,
            StoreError::Expired(_) => ReadOutcome::Expired,
        }
    }
}

// == Read Outcome ==
/// Classification of a read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    Success,
    NotFound,
    Expired,
}

// == Result Type Alias ==
/// Convenience Result type for store reads.
pub type Result<T> = std::result::Result<T, StoreError>;
