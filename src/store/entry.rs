//! Store Entry Module
//!
//! Defines the immutable value holder with its optional expiration deadline.

use std::time::{Duration, Instant};

// == Entry ==
/// A single stored value with its creation time and optional deadline.
///
/// Entries are never mutated after construction. A re-write under the same
/// key replaces the whole entry.
#[derive(Debug, Clone)]
pub struct Entry {
    /// The stored value
    value: String,
    /// Creation instant (monotonic clock)
    created_at: Instant,
    /// Expiration instant, None = never expires
    expires_at: Option<Instant>,
}

impl Entry {
    // == Constructors ==
    /// Creates an entry that never expires.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            created_at: Instant::now(),
            expires_at: None,
        }
    }

    /// Creates an entry that expires `ttl_seconds` after now.
    ///
    /// A TTL of zero or less is accepted and produces an entry that is
    /// already expired. A TTL too large to represent yields an entry that
    /// never expires.
    pub fn with_expiration(value: impl Into<String>, ttl_seconds: i64) -> Self {
        let created_at = Instant::now();
        let expires_at = if ttl_seconds <= 0 {
            Some(created_at)
        } else {
            created_at.checked_add(Duration::from_secs(ttl_seconds as u64))
        };

        Self {
            value: value.into(),
            created_at,
            expires_at,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Expired once the current time is greater than or equal to the
    /// deadline. The clock is read on every call, so the answer may change
    /// between two calls on the same entry.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires) => Instant::now() >= expires,
            None => false,
        }
    }

    // == Accessors ==
    /// Returns the stored value, whether or not the entry is expired.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    pub fn expires_at(&self) -> Option<Instant> {
        self.expires_at
    }

    // == Time To Live ==
    /// Returns the remaining TTL, or None if no expiration is set.
    ///
    /// # Returns
    /// - `Some(Duration::ZERO)` if the entry has expired
    /// - `Some(remaining)` if the entry has a TTL and hasn't expired
    /// - `None` if the entry never expires
    pub fn ttl_remaining(&self) -> Option<Duration> {
        self.expires_at
            .map(|expires| expires.saturating_duration_since(Instant::now()))
    }
}
