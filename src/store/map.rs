//! Concurrent Map Module
//!
//! The container contract the store is built on, with implementations for
//! `DashMap` and a lock-guarded `HashMap`.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use dashmap::DashMap;

// == Concurrent Map ==
/// A thread-safe key-value container.
///
/// Every method is atomic with respect to a single key. `count` and
/// `for_each` give no snapshot guarantee across keys.
pub trait ConcurrentMap<V>: Send + Sync {
    /// Runs `f` against the value under `key`, if any.
    fn get_with<R, F>(&self, key: &str, f: F) -> Option<R>
    where
        F: FnOnce(&V) -> R;

    /// Inserts or replaces the value under `key`.
    fn put(&self, key: String, value: V);

    /// Removes `key`, returning whether it was present.
    fn delete(&self, key: &str) -> bool;

    fn has(&self, key: &str) -> bool;

    fn clear_all(&self);

    fn count(&self) -> usize;

    /// Visits every key-value pair.
    fn for_each<F>(&self, f: F)
    where
        F: FnMut(&str, &V);
}

// == DashMap ==
impl<V: Send + Sync> ConcurrentMap<V> for DashMap<String, V> {
    fn get_with<R, F>(&self, key: &str, f: F) -> Option<R>
    where
        F: FnOnce(&V) -> R,
    {
        self.get(key).map(|entry| f(entry.value()))
    }

    fn put(&self, key: String, value: V) {
        self.insert(key, value);
    }

    fn delete(&self, key: &str) -> bool {
        self.remove(key).is_some()
    }

    fn has(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn clear_all(&self) {
        self.clear();
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&str, &V),
    {
        for item in self.iter() {
            f(item.key().as_str(), item.value());
        }
    }
}

// == Locked HashMap ==
/// A single `RwLock` around a `HashMap`.
///
/// Values are written whole, so a poisoned lock still guards a consistent
/// map and is recovered instead of propagated.
pub type LockedHashMap<V> = RwLock<HashMap<String, V>>;

impl<V: Send + Sync> ConcurrentMap<V> for LockedHashMap<V> {
    fn get_with<R, F>(&self, key: &str, f: F) -> Option<R>
    where
        F: FnOnce(&V) -> R,
    {
        let guard = self.read().unwrap_or_else(PoisonError::into_inner);
        guard.get(key).map(f)
    }

    fn put(&self, key: String, value: V) {
        let mut guard = self.write().unwrap_or_else(PoisonError::into_inner);
        guard.insert(key, value);
    }

    fn delete(&self, key: &str) -> bool {
        let mut guard = self.write().unwrap_or_else(PoisonError::into_inner);
        guard.remove(key).is_some()
    }

    fn has(&self, key: &str) -> bool {
        let guard = self.read().unwrap_or_else(PoisonError::into_inner);
        guard.contains_key(key)
    }

    fn clear_all(&self) {
        let mut guard = self.write().unwrap_or_else(PoisonError::into_inner);
        guard.clear();
    }

    fn count(&self) -> usize {
        let guard = self.read().unwrap_or_else(PoisonError::into_inner);
        guard.len()
    }

    fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&str, &V),
    {
        let guard = self.read().unwrap_or_else(PoisonError::into_inner);
        for (key, value) in guard.iter() {
            f(key.as_str(), value);
        }
    }
}
